use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM (P6) image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
    let rect = buffer.pixel_rect();

    // P6: binary RGB, then width, height and max channel value
    write!(out, "P6\n{} {}\n255\n", rect.width(), rect.height())?;
    out.write_all(buffer.buffer())?;

    Ok(())
}

/// Saves rendered curves as PPM files, creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut out)?;
        out.flush()
    }
}
