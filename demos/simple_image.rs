//! Example: Convert an image to ASCII art using asciigen as a library
//! Run with: cargo run --example simple_image -- path/to/image.png

use asciigen::{AsciiConverter, ConversionOptions};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources/source.png"));

    let converter = AsciiConverter::new();
    let options = ConversionOptions::default().with_columns(80);

    if !input.exists() {
        println!("Note: {} not found, nothing to convert", input.display());
        return Ok(());
    }

    // Render to a string only
    let art = converter.image_to_art(&input, &options)?;
    println!("{}", art);
    println!("\n{} columns x {} rows", art.width(), art.height());

    // Render and save
    let output = PathBuf::from("example_output.txt");
    converter.convert_image(&input, &output, &options.with_char_aspect(2.0))?;
    println!("ASCII art saved to {}", output.display());

    Ok(())
}
