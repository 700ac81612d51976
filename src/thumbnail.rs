pub mod crop;
pub mod mask;

pub use crop::{center_crop, CropRegion};
pub use mask::{circular_mask, paste_with_mask};
