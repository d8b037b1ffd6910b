pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use adapters::input::TerminalInput;
pub use adapters::surface::{FramebufferSurface, MemorySurface};
pub use config::{ConfigError, ExplorerConfig};
pub use controllers::headless::{HeadlessError, SnapshotController};
pub use controllers::interactive::{RenderLoop, RenderLoopError, RunStats};
pub use crate::core::data::view_state::ViewState;
pub use presenters::file::ppm::PpmFilePresenter;
