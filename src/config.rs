use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;
use image::ImageFormat;

/// IDs of the source images, `<input_dir>/<id>.png`.
pub const ID_RANGE: RangeInclusive<u32> = 1..=11;

/// Width and height of every generated thumbnail.
pub const THUMBNAIL_SIZE: u32 = 128;

pub const OUTPUT_FORMAT: ImageFormat = ImageFormat::Png;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value = "imgs")]
    pub input_dir: PathBuf,

    #[arg(default_value = "imgs_cropped")]
    pub output_dir: PathBuf,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("imgs"),
            output_dir: PathBuf::from("imgs_cropped"),
            quiet: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn file_name(id: u32) -> String {
        format!("{}.{}", id, OUTPUT_FORMAT.extensions_str()[0])
    }
}
