use anyhow::{ensure, Result};
use image::{imageops, GenericImageView, ImageBuffer, Pixel};

/// Largest square that fits the source, centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub size: u32,
}

impl CropRegion {
    pub const fn centered_square(width: u32, height: u32) -> Self {
        let size = if width < height { width } else { height };
        Self {
            left: (width - size) / 2,
            top: (height - size) / 2,
            size,
        }
    }

    /// `(left, top, right, bottom)`, right and bottom exclusive.
    pub const fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.left,
            self.top,
            self.left + self.size,
            self.top + self.size,
        )
    }
}

pub fn center_crop<I, P>(image: &I) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    I: GenericImageView<Pixel = P> + 'static,
    P: Pixel + 'static,
{
    let (width, height) = image.dimensions();
    let region = CropRegion::centered_square(width, height);
    ensure!(region.size > 0, "Cannot crop an empty {width}x{height} image");

    Ok(imageops::crop_imm(image, region.left, region.top, region.size, region.size).to_image())
}
