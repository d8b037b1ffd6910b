use crate::core::ports::pixel_surface::PixelSurface;
use crate::core::surface::descriptor::SurfaceDescriptor;

/// A heap-backed pixel surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    descriptor: SurfaceDescriptor,
    buffer: Vec<u8>,
}

impl MemorySurface {
    #[must_use]
    pub fn new(descriptor: SurfaceDescriptor) -> Self {
        Self {
            descriptor,
            buffer: vec![0; descriptor.buffer_len()],
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The stored bytes of the pixel at `(x, y)`, if it is on the surface.
    #[must_use]
    pub fn pixel_bytes(&self, x: u32, y: u32) -> Option<&[u8]> {
        let offset = self.descriptor.offset_of(x, y)?;
        let len = self.descriptor.pixel_format().bytes_per_pixel();

        self.buffer.get(offset..offset + len)
    }
}

impl PixelSurface for MemorySurface {
    fn descriptor(&self) -> SurfaceDescriptor {
        self.descriptor
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        let Some(end) = offset.checked_add(bytes.len()) else {
            return;
        };

        if let Some(target) = self.buffer.get_mut(offset..end) {
            target.copy_from_slice(bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::descriptor::PixelFormat;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let surface = MemorySurface::new(SurfaceDescriptor::packed(10, 10, PixelFormat::Bgrx8888));

        assert_eq!(surface.buffer().len(), 400);
        assert!(surface.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_lands_at_offset() {
        let mut surface = MemorySurface::new(SurfaceDescriptor::packed(2, 2, PixelFormat::Rgb555));

        surface.write(6, &[0xaa, 0xbb]);

        assert_eq!(surface.buffer(), &[0, 0, 0, 0, 0, 0, 0xaa, 0xbb]);
        assert_eq!(surface.pixel_bytes(1, 1), Some(&[0xaa, 0xbb][..]));
    }

    #[test]
    fn test_write_past_end_is_ignored() {
        let mut surface = MemorySurface::new(SurfaceDescriptor::packed(2, 2, PixelFormat::Rgb555));

        surface.write(7, &[0xaa, 0xbb]);
        surface.write(usize::MAX, &[0xaa]);

        assert!(surface.buffer().iter().all(|&b| b == 0));
    }
}
