pub mod framebuffer;
pub mod memory;

pub use self::framebuffer::FramebufferSurface;
pub use self::memory::MemorySurface;
