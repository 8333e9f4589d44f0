//! Event types for input handling
//!
//! Platform-independent view of the few inputs the viewer reacts to.

use winit::keyboard::KeyLocation;

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    R,
    T,
    /// `+` on the main keyboard.
    Plus,
    /// `=`, which shares a key with `+` on US layouts.
    Equals,
    /// `-` on the main keyboard.
    Minus,
    NumpadAdd,
    NumpadSubtract,
    Escape,
}

impl Key {
    /// Convert from winit key. Returns `None` for keys the viewer ignores.
    pub fn from_winit(key: &winit::keyboard::Key, location: KeyLocation) -> Option<Self> {
        use winit::keyboard::{Key as WKey, NamedKey};

        match key {
            WKey::Character(c) => {
                let c = c.chars().next()?;
                match (c.to_ascii_lowercase(), location) {
                    ('+', KeyLocation::Numpad) => Some(Key::NumpadAdd),
                    ('-', KeyLocation::Numpad) => Some(Key::NumpadSubtract),
                    ('+', _) => Some(Key::Plus),
                    ('=', _) => Some(Key::Equals),
                    ('-', _) => Some(Key::Minus),
                    ('r', _) => Some(Key::R),
                    ('t', _) => Some(Key::T),
                    _ => None,
                }
            }
            WKey::Named(NamedKey::Escape) => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key pressed. Auto-repeat delivers further presses while held.
    KeyPress { key: Key, handled: bool },

    /// Window resized to a new drawable size in physical pixels.
    Resize { width: u32, height: u32 },

    /// The window was asked to close.
    Quit,
}

impl Event {
    /// Unhandled key press for `key`.
    pub fn key_press(key: Key) -> Self {
        Event::KeyPress {
            key,
            handled: false,
        }
    }

    /// Check if the event has been handled.
    pub fn is_handled(&self) -> bool {
        match self {
            Event::KeyPress { handled, .. } => *handled,
            Event::Resize { .. } | Event::Quit => false,
        }
    }

    /// Mark the event as handled.
    pub fn set_handled(&mut self) {
        match self {
            Event::KeyPress { handled, .. } => *handled = true,
            Event::Resize { .. } | Event::Quit => {}
        }
    }
}
