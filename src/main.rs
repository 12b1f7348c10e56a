use anyhow::{anyhow, Result};
use asciigen::{parse_width, width_validator, AppConfig, AsciiConverter, WidthError, DEFAULT_COLUMNS};
use clap::{ArgAction, Parser};
use dialoguer::Input;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive image to ASCII art converter.")]
struct Args {
    /// Input image file
    input: Option<PathBuf>,

    /// Target width in characters
    #[arg(long, short, value_parser = columns_arg, allow_hyphen_values = true)]
    columns: Option<u32>,

    /// Output text file
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Character cell height-to-width ratio
    #[arg(long)]
    aspect: Option<f64>,

    /// Config file (JSON or TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the art without saving it
    #[arg(long, default_value_t = false, conflicts_with = "out")]
    no_save: bool,

    /// Use defaults instead of prompting for missing values
    #[arg(long, short, default_value_t = false)]
    yes: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn columns_arg(s: &str) -> Result<u32, WidthError> {
    if s.trim().is_empty() {
        return Err(WidthError::NotANumber(s.to_string()));
    }
    parse_width(s, DEFAULT_COLUMNS)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let is_interactive = !args.yes;

    let mut cfg = AppConfig::load(args.config.as_deref())?;
    if let Some(aspect) = args.aspect {
        cfg.char_aspect = aspect;
    }
    let converter = AsciiConverter::with_config(cfg)?;
    let cfg = converter.config();

    // --- Interactive Prompts ---
    let input_path = match args.input {
        Some(p) => p,
        None if is_interactive => PathBuf::from(
            Input::<String>::new()
                .with_prompt("Enter the path to the image")
                .interact_text()?,
        ),
        None => return Err(anyhow!("Input image must be provided when using --yes")),
    };

    let default_cols = cfg.default_columns;
    let columns = match args.columns {
        Some(c) => c,
        None if is_interactive => {
            let raw: String = Input::new()
                .with_prompt(format!("Enter the desired width (default is {})", default_cols))
                .allow_empty(true)
                .validate_with(width_validator(default_cols))
                .interact_text()?;
            parse_width(&raw, default_cols)?
        }
        None => default_cols,
    };

    let options = converter.default_options().with_columns(columns);

    // --- Execution ---
    let art = match converter.image_to_art(&input_path, &options) {
        Ok(art) => art,
        Err(e) => {
            eprintln!("Unable to open image file {}. {}", input_path.display(), e.root_cause());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", art);

    if args.no_save {
        return Ok(ExitCode::SUCCESS);
    }

    let output_path = match args.out {
        Some(p) => p,
        None if is_interactive => PathBuf::from(
            Input::<String>::new()
                .with_prompt("Enter the output file name")
                .default(cfg.default_output.clone())
                .interact_text()?,
        ),
        None => PathBuf::from(&cfg.default_output),
    };

    match asciigen::save_ascii_art(&art, &output_path) {
        Ok(()) => {
            println!("ASCII art saved to {}.", output_path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error saving ASCII art: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
