//! Addressing and encoding pixels on a raw surface.

pub mod descriptor;
pub mod errors;
pub mod writer;

pub use descriptor::{PixelFormat, SurfaceDescriptor};
pub use errors::SurfaceError;
pub use writer::PixelSurfaceWriter;
