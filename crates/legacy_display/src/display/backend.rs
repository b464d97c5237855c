//! Windowing backend contract
//!
//! This trait is the only thing [`WindowSession`](super::WindowSession)
//! knows about the windowing library. It is deliberately thin: each method
//! maps onto one library call, and any legacy semantics layered on top live
//! in the session.

use super::{ContextAttribs, DisplayEvent, DisplayMode, IconSet};

/// Opaque identifier of the native window
///
/// Only meaningful for comparison and for handing back to code that talks to
/// the windowing library directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub usize);

/// Operations a windowing backend provides for the display session
///
/// # Thread Safety
/// Implementations are driven from a single thread. GLFW requires that to be
/// the thread that initialised it, so no `Send` bound is imposed.
pub trait DisplayBackend {
    /// Current video mode of the primary monitor
    fn desktop_mode(&mut self) -> DisplayMode;

    /// Every video mode the primary monitor supports
    fn available_modes(&mut self) -> Vec<DisplayMode>;

    /// Client area size in screen coordinates
    fn window_size(&self) -> (u32, u32);

    /// Resize the client area
    fn set_window_size(&mut self, width: u32, height: u32);

    /// Move the window's top-left corner
    fn set_window_pos(&mut self, x: i32, y: i32);

    /// Change the title bar text
    fn set_title(&mut self, title: &str);

    /// Show or hide decorations on the live window
    fn set_decorated(&mut self, decorated: bool);

    /// Allow or forbid user resizing on the live window
    fn set_resizable(&mut self, resizable: bool);

    /// Replace the window icon with `icons`
    ///
    /// The backend may copy the pixels; the caller keeps ownership of the set.
    fn set_icon(&mut self, icons: &IconSet);

    /// Whether this window's GL context is current on the calling thread
    fn is_context_current(&self) -> bool;

    /// Set the swap interval of the current context
    fn set_swap_interval(&mut self, interval: u32);

    /// Whether raw (unaccelerated) mouse motion is available
    fn raw_mouse_motion_supported(&self) -> bool;

    /// Enable or disable raw mouse motion
    fn set_raw_mouse_motion(&mut self, enabled: bool);

    /// Start reporting size, focus, cursor, scroll, key, button and close events
    fn enable_event_polling(&mut self);

    /// Make the window visible
    fn show(&mut self);

    /// Whether the window is visible
    fn is_visible(&self) -> bool;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events and return them in delivery order
    fn poll_events(&mut self) -> Vec<DisplayEvent>;

    /// Whether close has been requested, by the user or by `set_should_close`
    fn should_close(&self) -> bool;

    /// Set the close-requested flag
    fn set_should_close(&mut self, should_close: bool);

    /// Version and profile of the live GL context
    fn context_attribs(&self) -> ContextAttribs;

    /// Identifier of the native window
    fn window_id(&self) -> WindowId;

    /// Destroy the native window
    fn destroy(self)
    where
        Self: Sized;
}
