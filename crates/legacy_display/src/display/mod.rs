//! Display subsystem
//!
//! A single-window display facade layered over a windowing backend.
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowSession   │ ← Legacy-style API (session.rs)
//!      └────────┬────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ DisplayBackend  │ ← Backend contract (backend.rs)
//!      │ trait           │
//!      └────────┬────────┘
//!               │ Implemented by
//!      ┌────────▼────────┐
//!      │ GlfwBackend     │ ← GLFW window + GL context (glfw_backend.rs)
//!      └─────────────────┘
//! ```

mod attribs;
mod backend;
mod event;
mod glfw_backend;
mod icon;
mod mode;
mod session;

#[cfg(test)]
pub(crate) mod fake;

pub use attribs::{ContextAttribs, PixelFormat};
pub use backend::{DisplayBackend, WindowId};
pub use event::DisplayEvent;
pub use glfw_backend::{GlfwBackend, ProcResolver};
pub use icon::{IconImage, IconSet};
pub use mode::DisplayMode;
pub use session::WindowSession;

use thiserror::Error;

use crate::config::ConfigError;

/// Display errors
#[derive(Error, Debug)]
pub enum DisplayError {
    /// GLFW itself could not be initialised
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// No primary monitor to read the desktop mode from
    #[error("No primary monitor available")]
    NoPrimaryMonitor,

    /// The native window or its context could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// A display mode with a zero dimension
    #[error("Invalid display mode {width}x{height}")]
    InvalidMode {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Icon data whose length is not a square RGBA image
    #[error("Icon buffer of {len} bytes is not a square RGBA image")]
    InvalidIcon {
        /// Buffer length in bytes
        len: usize,
    },

    /// An icon file could not be decoded
    #[error("Failed to load icon {path}: {source}")]
    IconLoad {
        /// File that failed
        path: String,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// Configuration was rejected
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;
