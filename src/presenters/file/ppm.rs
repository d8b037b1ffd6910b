use std::io;
use std::path::Path;

use crate::adapters::pixel_format::copy_bgrx_to_rgb;
use crate::adapters::surface::memory::MemorySurface;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::ports::pixel_surface::PixelSurface;
use crate::core::surface::descriptor::PixelFormat;
use crate::storage::write_ppm::write_ppm;

/// Saves a 32-bit in-memory surface as a PPM image.
#[derive(Debug)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, surface: &MemorySurface, filepath: impl AsRef<Path>) -> io::Result<()> {
        let rgb = surface_to_rgb(surface)?;
        let descriptor = surface.descriptor();

        write_ppm(descriptor.width(), descriptor.height(), &rgb, filepath)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn surface_to_rgb(surface: &MemorySurface) -> io::Result<Vec<u8>> {
    let descriptor = surface.descriptor();

    if descriptor.pixel_format() != PixelFormat::Bgrx8888 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "PPM export needs a 32-bit surface",
        ));
    }

    let width = descriptor.width() as usize;
    let mut rgb = vec![0; width * descriptor.height() as usize * 3];

    for (y, dst_row) in (0..descriptor.height()).zip(rgb.chunks_exact_mut(width * 3)) {
        let Some(start) = descriptor.offset_of(0, y) else {
            continue;
        };
        let src_row = &surface.buffer()[start..start + width * 4];

        copy_bgrx_to_rgb(src_row, dst_row);
    }

    Ok(rgb)
}
