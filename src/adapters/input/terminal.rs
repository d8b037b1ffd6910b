//! Raw-mode terminal keyboard input.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;

use crate::controllers::interactive::ports::input_source::InputSource;

/// Keeps the terminal in raw mode for as long as it lives; the previous mode
/// is restored on drop, on every exit path.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("terminal switched to raw mode");

        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        debug!("terminal mode restored");
    }
}

/// Keyboard input from the controlling terminal, one byte per key press.
#[derive(Debug)]
pub struct TerminalInput {
    _raw_mode: RawModeGuard,
    pending: Option<u8>,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            _raw_mode: RawModeGuard::acquire()?,
            pending: None,
        })
    }
}

impl InputSource for TerminalInput {
    fn is_ready(&mut self) -> io::Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }

        // resize, focus and release events are drained without counting
        while event::poll(Duration::ZERO)? {
            if let Some(byte) = event_to_byte(event::read()?) {
                self.pending = Some(byte);
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.pending.take() {
            return Ok(byte);
        }

        loop {
            if let Some(byte) = event_to_byte(event::read()?) {
                return Ok(byte);
            }
        }
    }
}

fn event_to_byte(event: Event) -> Option<u8> {
    match event {
        Event::Key(key) => key_to_byte(key),
        _ => None,
    }
}

/// The byte a raw-mode terminal would deliver for `key`, if any.
fn key_to_byte(key: KeyEvent) -> Option<u8> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.is_ascii_alphabetic()
                .then(|| c.to_ascii_lowercase() as u8 & 0x1f)
        }
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x7f),
        KeyCode::Esc => Some(0x1b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_ascii_characters_map_to_themselves() {
        for c in ['q', '=', '-', 'w', '[', '}', '(', '+', '_'] {
            assert_eq!(key_to_byte(press(KeyCode::Char(c))), Some(c as u8));
        }
    }

    #[test]
    fn test_shifted_characters_keep_their_glyph() {
        let plus = key(KeyCode::Char('+'), KeyModifiers::SHIFT, KeyEventKind::Press);

        assert_eq!(key_to_byte(plus), Some(b'+'));
    }

    #[test]
    fn test_control_letters_map_to_control_codes() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);

        assert_eq!(key_to_byte(ctrl_c), Some(0x03));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(key_to_byte(press(KeyCode::Enter)), Some(b'\r'));
        assert_eq!(key_to_byte(press(KeyCode::Esc)), Some(0x1b));
        assert_eq!(key_to_byte(press(KeyCode::Up)), None);
        assert_eq!(key_to_byte(press(KeyCode::Char('é'))), None);
    }

    #[test]
    fn test_releases_and_non_key_events_are_dropped() {
        let release = key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(key_to_byte(release), None);
        assert_eq!(event_to_byte(Event::Resize(80, 24)), None);
        assert_eq!(event_to_byte(Event::Key(press(KeyCode::Char('q')))), Some(b'q'));
    }
}
