//! Linux framebuffer device (`/dev/fbN`) surface.

use ::framebuffer::Framebuffer;
use log::{debug, info};

use crate::core::ports::pixel_surface::PixelSurface;
use crate::core::surface::descriptor::{PixelFormat, SurfaceDescriptor};
use crate::core::surface::errors::SurfaceError;

/// A memory-mapped framebuffer device. The mapping is released on drop.
pub struct FramebufferSurface {
    device: Framebuffer,
    descriptor: SurfaceDescriptor,
}

impl FramebufferSurface {
    pub fn open(path: &str) -> Result<Self, SurfaceError> {
        let device = Framebuffer::new(path).map_err(|err| SurfaceError::DeviceUnavailable {
            path: path.to_string(),
            details: err.to_string(),
        })?;
        info!("The framebuffer device {} was opened successfully", path);

        let var = &device.var_screen_info;
        let fix = &device.fix_screen_info;
        info!("{}x{}, {}bpp", var.xres, var.yres, var.bits_per_pixel);

        let pixel_format = PixelFormat::from_bits_per_pixel(var.bits_per_pixel)?;
        let descriptor = SurfaceDescriptor::new(
            var.xres_virtual,
            var.yres_virtual,
            pixel_format,
            fix.line_length as usize,
            var.xoffset,
            var.yoffset,
        )?;

        info!(
            "The framebuffer device was mapped to memory successfully ({} bytes)",
            device.frame.len()
        );
        debug!("surface {:?}", descriptor);

        Ok(Self { device, descriptor })
    }
}

impl PixelSurface for FramebufferSurface {
    fn descriptor(&self) -> SurfaceDescriptor {
        self.descriptor
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) {
        let Some(end) = offset.checked_add(bytes.len()) else {
            return;
        };

        // virtual resolution and panning can address past the mapped frame
        if let Some(target) = self.device.frame.get_mut(offset..end) {
            target.copy_from_slice(bytes);
        }
    }
}

impl Drop for FramebufferSurface {
    fn drop(&mut self) {
        debug!("releasing framebuffer mapping");
    }
}
