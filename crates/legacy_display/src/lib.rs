//! # Legacy Display
//!
//! A legacy-style `Display` API running on top of GLFW.
//!
//! Code written against the old single-window display interface (create the
//! window, set a display mode, toggle fullscreen and vsync, set an icon, pump
//! events once per frame) can keep that shape while every call is forwarded
//! to a GLFW window and its OpenGL context.
//!
//! ## Features
//!
//! - **One owned session**: a single [`WindowSession`] owns the window, the
//!   context and every cached flag instead of process-wide statics
//! - **Explicit events**: resize, focus and input notifications arrive as
//!   [`DisplayEvent`] values queued during `update()`
//! - **Pluggable backend**: GLFW in production, a fake backend in tests
//! - **Frame pacing**: `sync(fps)` caps the frame rate
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use legacy_display::prelude::*;
//!
//! fn main() -> Result<(), DisplayError> {
//!     legacy_display::foundation::logging::init();
//!
//!     let config = DisplayConfig::default();
//!     let mut display = WindowSession::init(&config, |_resolve| {})?;
//!     display.create();
//!
//!     while !display.is_close_requested() {
//!         display.update();
//!         display.sync(60);
//!     }
//!
//!     display.destroy();
//!     Ok(())
//! }
//! ```
//!
//! ## Threading
//!
//! GLFW must be driven from the thread that initialised it. [`WindowSession`]
//! is neither `Send` nor `Sync`, so the compiler rejects any attempt to move
//! it to another thread.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod display;
pub mod foundation;
pub mod input;

pub use config::{Config, ConfigError, DisplayConfig};
pub use display::{
    ContextAttribs, DisplayBackend, DisplayError, DisplayEvent, DisplayMode, DisplayResult,
    GlfwBackend, IconImage, IconSet, PixelFormat, WindowId, WindowSession,
};

/// Common imports for display users
pub mod prelude {
    pub use crate::{
        config::{Config, DisplayConfig},
        display::{
            ContextAttribs, DisplayError, DisplayEvent, DisplayMode, IconSet, PixelFormat,
            WindowSession,
        },
        foundation::time::FrameLimiter,
        input::{KeyAction, KeyEvent, KeyModifiers, MouseEvent},
    };
}
