//! Single-keystroke command table.

use std::ops::ControlFlow;

use crate::core::data::view_state::{PanDirection, ViewState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ZoomIn,
    ZoomOut,
    Pan(PanDirection),
    AdjustIterations(i64),
    AdjustResolution(i32),
}

impl Command {
    /// Looks up the command bound to an input byte; unbound bytes map to
    /// `None` and are ignored by the caller.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        let command = match byte {
            b'q' => Self::Quit,
            b'=' => Self::ZoomIn,
            b'-' => Self::ZoomOut,
            b'w' => Self::Pan(PanDirection::Up),
            b's' => Self::Pan(PanDirection::Down),
            b'a' => Self::Pan(PanDirection::Left),
            b'd' => Self::Pan(PanDirection::Right),
            b']' => Self::AdjustIterations(1),
            b'[' => Self::AdjustIterations(-1),
            b'}' => Self::AdjustIterations(10),
            b'{' => Self::AdjustIterations(-10),
            b')' => Self::AdjustIterations(100),
            b'(' => Self::AdjustIterations(-100),
            b'+' => Self::AdjustResolution(1),
            b'_' => Self::AdjustResolution(-1),
            _ => return None,
        };

        Some(command)
    }

    /// Mutates `view`, or breaks when the command asks to terminate.
    pub fn apply(self, view: &mut ViewState) -> ControlFlow<()> {
        match self {
            Self::Quit => return ControlFlow::Break(()),
            Self::ZoomIn => view.zoom_by(2.0),
            Self::ZoomOut => view.zoom_by(0.5),
            Self::Pan(direction) => view.pan(direction),
            Self::AdjustIterations(delta) => view.adjust_iteration_cap(delta),
            Self::AdjustResolution(delta) => view.adjust_resolution(delta),
        }

        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn apply_keys(view: &mut ViewState, keys: &[u8]) -> ControlFlow<()> {
        for &key in keys {
            if let Some(command) = Command::from_byte(key) {
                if command.apply(view).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }

        ControlFlow::Continue(())
    }

    #[test]
    fn test_unbound_bytes_are_ignored() {
        for byte in [b'x', b'Q', b' ', 0x03, 0x1b, b'\r'] {
            assert_eq!(Command::from_byte(byte), None);
        }
    }

    #[test]
    fn test_quit_breaks() {
        let mut view = ViewState::default();

        assert_eq!(Command::Quit.apply(&mut view), ControlFlow::Break(()));
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_zoom_keys() {
        let mut view = ViewState::default();

        let _ = apply_keys(&mut view, b"===");
        assert_eq!(view.zoom(), 8.0);

        let _ = apply_keys(&mut view, b"-");
        assert_eq!(view.zoom(), 4.0);
    }

    #[test]
    fn test_pan_keys_scale_with_zoom() {
        let mut view = ViewState::default();

        let _ = apply_keys(&mut view, b"wa");
        assert_eq!(view.center(), Complex::new(-0.25, -0.25));

        let _ = apply_keys(&mut view, b"=sd");
        assert_eq!(view.center(), Complex::new(-0.125, -0.125));
    }

    #[test]
    fn test_iteration_keys() {
        let mut view = ViewState::default();

        let _ = apply_keys(&mut view, b"]}){[");
        assert_eq!(view.iteration_cap(), 256 + 1 + 10 + 100 - 10 - 1);

        let _ = apply_keys(&mut view, b"((((((");
        assert_eq!(view.iteration_cap(), 1);
    }

    #[test]
    fn test_resolution_keys_never_drop_below_one() {
        let mut view = ViewState::default();

        let _ = apply_keys(&mut view, b"+");
        assert_eq!(view.resolution_exponent(), 10);

        let _ = apply_keys(&mut view, &[b'_'; 50]);
        assert_eq!(view.resolution_exponent(), 1);
    }

    #[test]
    fn test_zoom_then_pan_right_scenario() {
        let mut view = ViewState::default();

        assert_eq!(apply_keys(&mut view, b"=d"), ControlFlow::Continue(()));
        assert_eq!(view.zoom(), 2.0);
        assert_eq!(view.center().real, 0.125);
    }

    #[test]
    fn test_keys_after_quit_are_not_applied() {
        let mut view = ViewState::default();

        assert_eq!(apply_keys(&mut view, b"q="), ControlFlow::Break(()));
        assert_eq!(view.zoom(), 1.0);
    }
}
