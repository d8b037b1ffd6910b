use std::path::Path;
use std::time::Instant;

use log::info;

use crate::adapters::surface::memory::MemorySurface;
use crate::controllers::headless::errors::HeadlessError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::surface::descriptor::{PixelFormat, SurfaceDescriptor};
use crate::core::surface::writer::PixelSurfaceWriter;

/// A 4096 x 4096 grid, 64 MiB of BGRX.
pub const MAX_SNAPSHOT_RESOLUTION_EXPONENT: u32 = 12;

/// Renders one complete frame off-screen and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    surface: Option<MemorySurface>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            surface: None,
        }
    }

    pub fn generate(&mut self, view: &ViewState) -> Result<u64, HeadlessError> {
        let resolution_exponent = view.resolution_exponent();

        if resolution_exponent > MAX_SNAPSHOT_RESOLUTION_EXPONENT {
            return Err(HeadlessError::ResolutionTooLarge {
                resolution_exponent,
                max: MAX_SNAPSHOT_RESOLUTION_EXPONENT,
            });
        }

        let algorithm = MandelbrotAlgorithm::new(view.iteration_cap())?;
        let size = view.grid_size();
        let surface = MemorySurface::new(SurfaceDescriptor::packed(size, size, PixelFormat::Bgrx8888));
        let mut writer = PixelSurfaceWriter::new(surface);

        info!(
            "Rendering {}x{} snapshot at zoom {} around ({}, {}), {} iterations",
            size,
            size,
            view.zoom(),
            view.center().real,
            view.center().imag,
            algorithm.max_iterations()
        );

        let start = Instant::now();
        let cells = render_frame(&mut writer, view, &algorithm);

        info!("Rendered {} cells in {:?}", cells, start.elapsed());

        self.surface = Some(writer.into_surface());

        Ok(cells)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), HeadlessError> {
        let Some(surface) = &self.surface else {
            return Err(HeadlessError::NothingRendered);
        };

        self.presenter.present(surface, filepath.as_ref())?;

        info!("Snapshot written to {}", filepath.as_ref().display());

        Ok(())
    }

    pub fn surface(&self) -> Option<&MemorySurface> {
        self.surface.as_ref()
    }
}
