use crate::core::data::grid_point::GridPoint;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::evaluate;
use crate::core::ports::pixel_surface::PixelSurface;
use crate::core::scan::ZOrderScan;
use crate::core::surface::writer::PixelSurfaceWriter;

/// Maps `point` through `view`, evaluates it and writes its colour.
pub fn render_pixel<S: PixelSurface>(
    writer: &mut PixelSurfaceWriter<S>,
    view: &ViewState,
    algorithm: &MandelbrotAlgorithm,
    point: GridPoint,
) {
    let evaluation = evaluate(algorithm, view.grid_to_complex(point));

    writer.write_pixel(point, evaluation.colour);
}

/// Renders every cell of `view` in scan order, without interruption.
/// Returns the number of cells evaluated.
pub fn render_frame<S: PixelSurface>(
    writer: &mut PixelSurfaceWriter<S>,
    view: &ViewState,
    algorithm: &MandelbrotAlgorithm,
) -> u64 {
    let mut scan = ZOrderScan::new(view.resolution_exponent());

    for point in scan.by_ref() {
        render_pixel(writer, view, algorithm, point);
    }

    scan.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::surface::memory::MemorySurface;
    use crate::core::data::complex::Complex;
    use crate::core::surface::descriptor::{PixelFormat, SurfaceDescriptor};

    #[test]
    fn test_render_frame_covers_grid() {
        let view = ViewState::new(1.0, Complex::ZERO, 3, 32).unwrap();
        let surface = MemorySurface::new(SurfaceDescriptor::packed(8, 8, PixelFormat::Bgrx8888));
        let mut writer = PixelSurfaceWriter::new(surface);

        let algorithm = MandelbrotAlgorithm::for_view(&view);

        assert_eq!(render_frame(&mut writer, &view, &algorithm), 64);

        // grid centre (4, 4) is the origin: bounded, black
        let surface = writer.into_surface();
        assert_eq!(surface.pixel_bytes(4, 4), Some(&[0, 0, 0, 0][..]));
        // (0, 4) is -0.5 on the real axis, inside the set as well
        assert_eq!(surface.pixel_bytes(0, 4), Some(&[0, 0, 0, 0][..]));
    }

    #[test]
    fn test_render_pixel_writes_escape_colour() {
        // zoom 0.25 puts grid (0, 1) of a 2x2 grid at c = (-2, 0)
        let view = ViewState::new(0.25, Complex::ZERO, 1, 16).unwrap();
        let algorithm = MandelbrotAlgorithm::for_view(&view);
        let surface = MemorySurface::new(SurfaceDescriptor::packed(2, 2, PixelFormat::Bgrx8888));
        let mut writer = PixelSurfaceWriter::new(surface);

        render_pixel(&mut writer, &view, &algorithm, GridPoint::new(0, 1));

        assert_eq!(view.grid_to_complex(GridPoint::new(0, 1)), Complex::new(-2.0, 0.0));
        // c = -2: z = -2 after the first step, |z|² = 4: red
        assert_eq!(writer.surface().pixel_bytes(0, 1), Some(&[0, 0, 255, 0][..]));
    }
}
