//! Interactive controller for progressive fractal exploration.
//!
//! # Architecture
//!
//! The render loop follows the ports & adapters pattern:
//! - **Input**: an `InputSource` polled between every pixel
//! - **Output**: a `PixelSurface` written one pixel at a time
//! - **Core**: scan order, view mapping, evaluation and colouring from `core/`

mod controller;
pub mod errors;
pub mod ports;
mod types;

pub use controller::RenderLoop;
pub use errors::RenderLoopError;
pub use ports::{InputSource, PixelSurface};
pub use types::{LoopState, RunStats};
