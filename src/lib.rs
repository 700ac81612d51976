pub mod config;
pub mod errors;
mod progress_tracker;
pub mod thumbnail;

use image::{imageops, imageops::FilterType, DynamicImage, GrayImage, RgbaImage};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub use config::{Config, ID_RANGE, OUTPUT_FORMAT, THUMBNAIL_SIZE};
pub use errors::{CropError, Result};

use crate::progress_tracker::ProgressTracker;

/// Outputs written by one completed run, in ID order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
}

/// Turns `<input_dir>/<id>.png` into a circular thumbnail at
/// `<output_dir>/<id>.png` for every id in [`ID_RANGE`].
pub struct BatchCropper {
    config: Config,
    mask: GrayImage,
}

impl BatchCropper {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            mask: thumbnail::circular_mask(THUMBNAIL_SIZE),
        }
    }

    pub fn input_path(&self, id: u32) -> PathBuf {
        self.config.input_dir.join(Config::file_name(id))
    }

    pub fn output_path(&self, id: u32) -> PathBuf {
        self.config.output_dir.join(Config::file_name(id))
    }

    /// Process every id in order. The first failure aborts the run and
    /// later ids are left untouched.
    pub fn process_all(&self) -> Result<BatchSummary> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| CropError::FileSystem {
            path: output_dir.clone(),
            operation: "create output directory".to_string(),
            source: e,
        })?;

        info!(
            input_dir = %self.config.input_dir.display(),
            output_dir = %output_dir.display(),
            "cropping {} images",
            ID_RANGE.clone().count()
        );

        let tracker = ProgressTracker::new(ID_RANGE.clone().count() as u64, self.config.quiet)?;
        let mut summary = BatchSummary::default();

        for id in ID_RANGE {
            match self.process_single_image(id) {
                Ok(path) => {
                    summary.written.push(path);
                    tracker.inc();
                }
                Err(e) => {
                    tracker.abandon();
                    return Err(e);
                }
            }
        }

        tracker.finish();
        info!("wrote {} thumbnails", summary.written.len());
        Ok(summary)
    }

    /// Load, crop, mask and save a single id. Returns the written path.
    pub fn process_single_image(&self, id: u32) -> Result<PathBuf> {
        let input_file = self.input_path(id);
        let image = image::open(&input_file).map_err(|e| CropError::ImageProcessing {
            path: input_file.display().to_string(),
            operation: "open image".to_string(),
            source: Box::new(e),
        })?;
        debug!(id, width = image.width(), height = image.height(), "loaded");

        let thumbnail = self.crop_to_circle(&image).map_err(|e| match e {
            CropError::ImageProcessing {
                operation, source, ..
            } => CropError::ImageProcessing {
                path: input_file.display().to_string(),
                operation,
                source,
            },
            other => other,
        })?;
        drop(image);

        let output_file = self.output_path(id);
        thumbnail
            .save_with_format(&output_file, OUTPUT_FORMAT)
            .map_err(|e| CropError::ImageProcessing {
                path: output_file.display().to_string(),
                operation: "save image".to_string(),
                source: Box::new(e),
            })?;
        debug!(id, path = %output_file.display(), "saved");

        Ok(output_file)
    }

    /// Center-crop to a square, resize to [`THUMBNAIL_SIZE`] and stencil the
    /// result through the circular mask onto a transparent canvas.
    pub fn crop_to_circle(&self, image: &DynamicImage) -> Result<RgbaImage> {
        let rgba = image.to_rgba8();
        let cropped = thumbnail::center_crop(&rgba).map_err(|e| CropError::Validation {
            field: "image dimensions".to_string(),
            reason: e.to_string(),
        })?;
        let resized = imageops::resize(
            &cropped,
            THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
            FilterType::Lanczos3,
        );

        let mut canvas = RgbaImage::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
        thumbnail::paste_with_mask(&mut canvas, &resized, &self.mask)?;
        Ok(canvas)
    }
}
