use anyhow::{ensure, Result};
use image::{GrayImage, Luma, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;

/// Filled disk inscribed in a `size`x`size` square: 255 inside, 0 outside.
pub fn circular_mask(size: u32) -> GrayImage {
    let radius = (size / 2) as i32;
    let mut mask = GrayImage::new(size, size);
    draw_filled_ellipse_mut(&mut mask, (radius, radius), radius, radius, Luma([u8::MAX]));
    mask
}

/// Composite `image` onto `canvas` at the origin, using `mask` as a
/// per-pixel stencil. Every channel, alpha included, is blended as
/// `(src * m + dst * (255 - m) + 127) / 255`.
pub fn paste_with_mask(canvas: &mut RgbaImage, image: &RgbaImage, mask: &GrayImage) -> Result<()> {
    ensure!(
        canvas.dimensions() == image.dimensions(),
        "Canvas and image dimensions do not match"
    );
    ensure!(
        image.dimensions() == mask.dimensions(),
        "Image and mask dimensions do not match"
    );

    for ((dst, src), weight) in canvas.pixels_mut().zip(image.pixels()).zip(mask.pixels()) {
        let m = u32::from(weight[0]);
        for (d, &s) in dst.0.iter_mut().zip(src.0.iter()) {
            let blended = (u32::from(s) * m + u32::from(*d) * (255 - m) + 127) / 255;
            *d = blended as u8;
        }
    }

    Ok(())
}
