//! Terminal event polling and key translation.
//!
//! Crossterm key events are translated into the terminal-independent
//! [`InputKey`] before they reach the handlers, so the app crate never links
//! against crossterm.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mdeck_app::{InputKey, Message};
use mdeck_core::prelude::*;

/// Poll for terminal events with a 50ms timeout (20 FPS).
///
/// A timeout produces a `Tick` for animations; non-key events are dropped.
pub fn poll() -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(key_to_input(key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

/// Translate a crossterm key event into an [`InputKey`].
///
/// Ctrl-modified letters become `CharCtrl`; everything the handlers do not
/// bind maps to `None` and is dropped here.
pub fn key_to_input(key: KeyEvent) -> Option<InputKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key.code {
            return Some(InputKey::CharCtrl(c.to_ascii_lowercase()));
        }
    }

    match key.code {
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}
