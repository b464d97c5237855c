//! Window events
//!
//! Everything the backend reports during a poll is turned into a
//! [`DisplayEvent`]. The session applies each one to its own state and then
//! queues it for the caller, in the order the backend delivered them.

use crate::input::{KeyEvent, MouseButtonEvent};

/// A notification from the window, produced by `update()`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayEvent {
    /// The window's client area changed size
    Resized {
        /// New width in screen coordinates
        width: u32,
        /// New height in screen coordinates
        height: u32,
    },
    /// The window gained (`true`) or lost (`false`) input focus
    Focused(bool),
    /// The cursor moved inside the window
    CursorMoved {
        /// Cursor x
        x: f64,
        /// Cursor y
        y: f64,
    },
    /// The scroll wheel or touchpad scrolled
    Scrolled {
        /// Horizontal offset
        x: f64,
        /// Vertical offset
        y: f64,
    },
    /// A key changed state
    Key(KeyEvent),
    /// A mouse button changed state
    MouseButton(MouseButtonEvent),
    /// The user asked to close the window
    CloseRequested,
}
