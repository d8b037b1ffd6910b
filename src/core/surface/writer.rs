use log::trace;

use crate::core::data::colour::Colour;
use crate::core::data::grid_point::GridPoint;
use crate::core::ports::pixel_surface::PixelSurface;
use crate::core::surface::descriptor::{PixelFormat, SurfaceDescriptor};

/// One pixel laid out in a surface's native format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EncodedPixel {
    bytes: [u8; 4],
    len: usize,
}

impl EncodedPixel {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Lays `colour` out as `format` expects.
///
/// The 16-bit layout masks the low five bits of each 8-bit channel into a
/// 5-5-5 word (bit 10 unused) rather than the usual 5-6-5 split.
#[must_use]
pub fn encode_pixel(format: PixelFormat, colour: Colour) -> EncodedPixel {
    match format {
        PixelFormat::Bgrx8888 => EncodedPixel {
            bytes: [colour.b, colour.g, colour.r, 0],
            len: 4,
        },
        PixelFormat::Rgb555 => {
            let word = (u16::from(colour.r) & 0x1f) << 11
                | (u16::from(colour.g) & 0x1f) << 5
                | (u16::from(colour.b) & 0x1f);
            let [low, high] = word.to_le_bytes();

            EncodedPixel {
                bytes: [low, high, 0, 0],
                len: 2,
            }
        }
    }
}

/// Writes colours to grid cells of a [`PixelSurface`], clipping cells that
/// fall outside the surface.
#[derive(Debug)]
pub struct PixelSurfaceWriter<S: PixelSurface> {
    surface: S,
    descriptor: SurfaceDescriptor,
}

impl<S: PixelSurface> PixelSurfaceWriter<S> {
    pub fn new(surface: S) -> Self {
        let descriptor = surface.descriptor();

        Self {
            surface,
            descriptor,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> SurfaceDescriptor {
        self.descriptor
    }

    /// Returns whether the pixel landed on the surface. A clipped pixel is a
    /// normal outcome, not an error.
    pub fn write_pixel(&mut self, point: GridPoint, colour: Colour) -> bool {
        let Some(offset) = self.descriptor.offset_of(point.x, point.y) else {
            trace!("clipped pixel at ({}, {})", point.x, point.y);
            return false;
        };

        let pixel = encode_pixel(self.descriptor.pixel_format(), colour);
        self.surface.write(offset, pixel.as_bytes());

        true
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSurface {
        descriptor: SurfaceDescriptor,
        writes: Vec<(usize, Vec<u8>)>,
    }

    impl RecordingSurface {
        fn new(descriptor: SurfaceDescriptor) -> Self {
            Self {
                descriptor,
                writes: Vec::new(),
            }
        }
    }

    impl PixelSurface for RecordingSurface {
        fn descriptor(&self) -> SurfaceDescriptor {
            self.descriptor
        }

        fn write(&mut self, offset: usize, bytes: &[u8]) {
            self.writes.push((offset, bytes.to_vec()));
        }
    }

    #[test]
    fn test_encode_32_bit_is_blue_green_red_zero() {
        let pixel = encode_pixel(PixelFormat::Bgrx8888, Colour::new(10, 20, 30));

        assert_eq!(pixel.as_bytes(), &[30, 20, 10, 0]);
    }

    #[test]
    fn test_encode_16_bit_packs_low_five_bits() {
        let pixel = encode_pixel(PixelFormat::Rgb555, Colour::new(0xff, 0x00, 0x00));
        assert_eq!(pixel.as_bytes(), &0xf800u16.to_le_bytes());

        let pixel = encode_pixel(PixelFormat::Rgb555, Colour::new(0x00, 0xff, 0x00));
        assert_eq!(pixel.as_bytes(), &0x03e0u16.to_le_bytes());

        let pixel = encode_pixel(PixelFormat::Rgb555, Colour::new(0x00, 0x00, 0xff));
        assert_eq!(pixel.as_bytes(), &0x001fu16.to_le_bytes());

        // 0x21 keeps only 0b00001
        let pixel = encode_pixel(PixelFormat::Rgb555, Colour::new(0x21, 0x21, 0x21));
        assert_eq!(pixel.as_bytes(), &0x0821u16.to_le_bytes());
    }

    #[test]
    fn test_write_pixel_addresses_offset_cell() {
        let descriptor = SurfaceDescriptor::new(4, 4, PixelFormat::Bgrx8888, 32, 1, 2).unwrap();
        let mut writer = PixelSurfaceWriter::new(RecordingSurface::new(descriptor));

        assert!(writer.write_pixel(GridPoint::new(1, 1), Colour::new(1, 2, 3)));

        // (1 + 1) * 4 + (1 + 2) * 32
        assert_eq!(writer.surface().writes, vec![(104, vec![3, 2, 1, 0])]);
    }

    #[test]
    fn test_write_pixel_outside_bounds_is_skipped() {
        let descriptor = SurfaceDescriptor::packed(4, 4, PixelFormat::Rgb555);
        let mut writer = PixelSurfaceWriter::new(RecordingSurface::new(descriptor));

        assert!(!writer.write_pixel(GridPoint::new(4, 0), Colour::new(255, 0, 0)));
        assert!(!writer.write_pixel(GridPoint::new(0, 4), Colour::new(255, 0, 0)));
        assert!(!writer.write_pixel(GridPoint::new(511, 511), Colour::new(255, 0, 0)));

        assert!(writer.into_surface().writes.is_empty());
    }
}
