use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use round_thumbs::{BatchCropper, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new();
    let output_dir = config.output_dir.clone();

    let cropper = BatchCropper::new(config);
    cropper
        .process_all()
        .context("Failed to generate circular thumbnails")?;

    println!("Circular images saved to {}.", output_dir.display());
    Ok(())
}
