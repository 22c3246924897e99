use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Where finished rasters go.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
