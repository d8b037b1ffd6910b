pub mod terminal;

pub use terminal::{RawModeGuard, TerminalInput};
