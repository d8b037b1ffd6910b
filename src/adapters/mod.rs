//! Concrete collaborators behind the core's ports.

pub mod input;
pub mod pixel_format;
pub mod surface;
