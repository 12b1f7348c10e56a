//! # asciigen - Image to ASCII Art
//!
//! `asciigen` converts a raster image into plain-text art by mapping pixel
//! brightness onto a fixed ramp of characters, from dense (`@`) for dark
//! pixels to blank for light ones.
//!
//! The pipeline is:
//!
//! 1. **Load** the image from disk
//! 2. **Resize** to the requested column count, correcting for tall character cells
//! 3. **Reduce** to a single luminance channel
//! 4. **Quantize** each luminance value into the character ramp
//! 5. **Format** the flat character stream back into rows
//!
//! ## Example
//!
//! ```no_run
//! use asciigen::{AsciiConverter, ConversionOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = AsciiConverter::new();
//! let options = ConversionOptions::default().with_columns(120);
//! let art = converter.convert_image(
//!     Path::new("input.png"),
//!     Path::new("ascii_art.txt"),
//!     &options,
//! )?;
//! println!("{}", art);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use image::DynamicImage;
use std::fs;
use std::path::Path;

pub mod art;
pub mod config;
pub mod grayscale;
pub mod input;
pub mod ramp;
pub mod resize;

pub use art::{wrap_rows, AsciiArt};
pub use config::{AppConfig, DEFAULT_COLUMNS, DEFAULT_OUTPUT};
pub use grayscale::{luminance, to_grayscale};
pub use input::{parse_width, width_validator, WidthError};
pub use ramp::{CharRamp, DEFAULT_RAMP};
pub use resize::{resize_to_columns, target_dimensions, DEFAULT_CHAR_ASPECT, MIN_CHAR_ASPECT};

/// Options for a single conversion
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Target width in characters (columns)
    pub columns: u32,
    /// Character cell height-to-width ratio
    pub char_aspect: f64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            char_aspect: DEFAULT_CHAR_ASPECT,
        }
    }
}

impl ConversionOptions {
    /// Create options with a specific width
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Create options with a specific character aspect ratio
    pub fn with_char_aspect(mut self, char_aspect: f64) -> Self {
        self.char_aspect = char_aspect;
        self
    }

    /// Create options from the configured defaults
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            columns: config.default_columns,
            char_aspect: config.char_aspect,
        }
    }
}

/// Main converter struct for ASCII art generation
pub struct AsciiConverter {
    config: AppConfig,
    ramp: CharRamp,
}

impl AsciiConverter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            ramp: CharRamp::default(),
        }
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ramp: CharRamp::default(),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Conversion options built from this converter's defaults
    pub fn default_options(&self) -> ConversionOptions {
        ConversionOptions::from_config(&self.config)
    }

    /// Render an in-memory image.
    ///
    /// The result is exactly `options.columns` characters wide.
    pub fn render(&self, img: &DynamicImage, options: &ConversionOptions) -> AsciiArt {
        let resized = resize_to_columns(img, options.columns, options.char_aspect);
        let gray = to_grayscale(&resized);
        AsciiArt::from_gray(&gray, &self.ramp)
    }

    /// Load an image from disk and render it
    pub fn image_to_art(&self, input: &Path, options: &ConversionOptions) -> Result<AsciiArt> {
        let img = load_image(input)?;
        Ok(self.render(&img, options))
    }

    /// Convert image to ASCII string (without writing to file)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use asciigen::{AsciiConverter, ConversionOptions};
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let converter = AsciiConverter::new();
    /// let options = ConversionOptions::default();
    /// let ascii_art = converter.image_to_string(Path::new("image.png"), &options)?;
    /// println!("{}", ascii_art);
    /// # Ok(())
    /// # }
    /// ```
    pub fn image_to_string(&self, input: &Path, options: &ConversionOptions) -> Result<String> {
        Ok(self.image_to_art(input, options)?.render())
    }

    /// Convert a single image to ASCII art and save it
    ///
    /// # Arguments
    ///
    /// * `input` - Path to input image
    /// * `output` - Path to output text file, overwritten if present
    /// * `options` - Conversion options
    ///
    /// Nothing is written when the image cannot be loaded.
    pub fn convert_image(&self, input: &Path, output: &Path, options: &ConversionOptions) -> Result<AsciiArt> {
        let art = self.image_to_art(input, options)?;
        save_ascii_art(&art, output)?;
        Ok(art)
    }
}

impl Default for AsciiConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an image in any format the `image` crate was built with.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).with_context(|| format!("opening {}", path.display()))?;
    log::debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Write the rendered art to `path`, replacing any existing file.
pub fn save_ascii_art(art: &AsciiArt, path: &Path) -> Result<()> {
    fs::write(path, art.render()).with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved {}x{} art to {}", art.width(), art.height(), path.display());
    Ok(())
}
