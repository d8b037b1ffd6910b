//! Port definitions for the interactive controller.
//!
//! The render loop draws through the core's `PixelSurface` port and reads
//! keystrokes through `InputSource`; both are implemented in `adapters`.

pub mod input_source;

pub use crate::core::ports::pixel_surface::PixelSurface;
pub use input_source::InputSource;
