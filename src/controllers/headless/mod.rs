//! Off-screen rendering of a single frame to an image file.

pub mod errors;
pub mod snapshot;

pub use errors::HeadlessError;
pub use snapshot::{MAX_SNAPSHOT_RESOLUTION_EXPONENT, SnapshotController};
