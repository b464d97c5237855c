//! Input bookkeeping driven by the display session
//!
//! The session feeds polled window events into [`Keyboard`] and [`Mouse`]
//! and calls their lifecycle hooks from `create()` and `update()`. Legacy
//! input code then reads key state, cursor position, wheel movement and
//! per-frame motion from here.

mod keyboard;
mod mouse;

pub use keyboard::Keyboard;
pub use mouse::{Mouse, MouseEvent, BUTTON_COUNT};

use bitflags::bitflags;

/// Events kept per device before the oldest are dropped
pub const MAX_QUEUED_EVENTS: usize = 256;

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key came up
    Release,
    /// Key is held and the OS repeated it
    Repeat,
}

bitflags! {
    /// Modifier keys held while a key or button event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Either shift key
        const SHIFT = 0b0000_0001;
        /// Either control key
        const CONTROL = 0b0000_0010;
        /// Either alt key
        const ALT = 0b0000_0100;
        /// Either super key
        const SUPER = 0b0000_1000;
        /// Caps lock is on
        const CAPS_LOCK = 0b0001_0000;
        /// Num lock is on
        const NUM_LOCK = 0b0010_0000;
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Windowing-library key code
    pub key: i32,
    /// Platform scancode
    pub scancode: i32,
    /// Press, release or repeat
    pub action: KeyAction,
    /// Modifiers held at the time
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers
    pub const fn new(key: i32, scancode: i32, action: KeyAction) -> Self {
        Self {
            key,
            scancode,
            action,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Set the held modifiers
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A single mouse button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    /// Button index, 0 = left, 1 = right, 2 = middle
    pub button: u8,
    /// Whether the button went down
    pub pressed: bool,
    /// Modifiers held at the time
    pub modifiers: KeyModifiers,
}
