use crate::core::surface::descriptor::SurfaceDescriptor;

/// Raw byte access to a pixel surface owned by an outside collaborator.
pub trait PixelSurface {
    fn descriptor(&self) -> SurfaceDescriptor;

    /// Copies `bytes` to `offset`. Implementations skip writes that would
    /// fall outside their backing memory.
    fn write(&mut self, offset: usize, bytes: &[u8]);
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn descriptor(&self) -> SurfaceDescriptor {
        (**self).descriptor()
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        (**self).write(offset, bytes);
    }
}
