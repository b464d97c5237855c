//! Pixel format and GL context requests

use std::fmt;

use serde::{Deserialize, Serialize};

/// Framebuffer format request
///
/// Kept for compatibility with callers that pass one to `create`. It is only
/// applied when it reaches the backend as a creation hint, i.e. through
/// [`DisplayConfig`](crate::DisplayConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelFormat {
    /// Alpha channel bits
    pub alpha_bits: u32,
    /// Depth buffer bits
    pub depth_bits: u32,
    /// Stencil buffer bits
    pub stencil_bits: u32,
    /// Multisample count, 0 for none
    pub samples: u32,
}

impl PixelFormat {
    /// Set alpha bits
    #[must_use]
    pub const fn with_alpha_bits(mut self, bits: u32) -> Self {
        self.alpha_bits = bits;
        self
    }

    /// Set depth bits
    #[must_use]
    pub const fn with_depth_bits(mut self, bits: u32) -> Self {
        self.depth_bits = bits;
        self
    }

    /// Set stencil bits
    #[must_use]
    pub const fn with_stencil_bits(mut self, bits: u32) -> Self {
        self.stencil_bits = bits;
        self
    }

    /// Set multisample count
    #[must_use]
    pub const fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Whether a framebuffer of this format meets the `other` request
    ///
    /// Every buffer must have at least the requested bits.
    pub const fn satisfies(&self, other: &Self) -> bool {
        self.alpha_bits >= other.alpha_bits
            && self.depth_bits >= other.depth_bits
            && self.stencil_bits >= other.stencil_bits
            && self.samples >= other.samples
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self {
            alpha_bits: 0,
            depth_bits: 8,
            stencil_bits: 0,
            samples: 0,
        }
    }
}

/// OpenGL context version and profile request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAttribs {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Request a core profile
    pub core_profile: bool,
}

impl ContextAttribs {
    /// Request `major.minor` with the default (compatibility) profile
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            core_profile: false,
        }
    }

    /// Request a core profile
    #[must_use]
    pub const fn with_profile_core(mut self, core: bool) -> Self {
        self.core_profile = core;
        self
    }

    /// Whether a context created from `self` can serve a request for `other`
    ///
    /// A newer version satisfies an older request; a core request needs a
    /// core context.
    pub const fn satisfies(&self, other: &Self) -> bool {
        let version_ok =
            self.major > other.major || (self.major == other.major && self.minor >= other.minor);
        version_ok && (self.core_profile || !other.core_profile)
    }
}

impl Default for ContextAttribs {
    fn default() -> Self {
        Self::new(3, 3).with_profile_core(true)
    }
}

impl fmt::Display for ContextAttribs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.core_profile {
            write!(f, " core")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_core_3_3() {
        let attribs = ContextAttribs::default();
        assert_eq!((attribs.major, attribs.minor), (3, 3));
        assert!(attribs.core_profile);
        assert_eq!(attribs.to_string(), "3.3 core");
    }

    #[test]
    fn test_satisfies() {
        let live = ContextAttribs::new(4, 1).with_profile_core(true);

        assert!(live.satisfies(&ContextAttribs::new(3, 3).with_profile_core(true)));
        assert!(live.satisfies(&ContextAttribs::new(2, 1)));
        assert!(!live.satisfies(&ContextAttribs::new(4, 6)));

        let compat = ContextAttribs::new(4, 6);
        assert!(!compat.satisfies(&ContextAttribs::new(3, 3).with_profile_core(true)));
    }

    #[test]
    fn test_pixel_format_satisfies() {
        let live = PixelFormat::default().with_depth_bits(24).with_stencil_bits(8);

        assert!(live.satisfies(&PixelFormat::default()));
        assert!(live.satisfies(&live));
        assert!(!live.satisfies(&live.with_samples(4)));
        assert!(!live.satisfies(&live.with_depth_bits(32)));
        assert!(!PixelFormat::default().satisfies(&live));
    }

    #[test]
    fn test_pixel_format_builder() {
        let format = PixelFormat::default()
            .with_depth_bits(24)
            .with_stencil_bits(8)
            .with_samples(4);
        assert_eq!(format.depth_bits, 24);
        assert_eq!(format.stencil_bits, 8);
        assert_eq!(format.samples, 4);
        assert_eq!(format.alpha_bits, 0);
    }
}
