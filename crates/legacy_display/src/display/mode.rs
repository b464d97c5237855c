//! Display modes

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable display mode: size, colour depth and refresh rate
///
/// Colour depth is the sum of the red, green and blue channel bits reported
/// by the monitor. Modes produced by a window resize carry no depth or
/// frequency and report zero for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayMode {
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    frequency: u32,
}

impl DisplayMode {
    /// A mode with only a size
    pub const fn new(width: u32, height: u32) -> Self {
        Self::with_format(width, height, 0, 0)
    }

    /// A mode with size, colour depth and refresh rate
    pub const fn with_format(width: u32, height: u32, bits_per_pixel: u32, frequency: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
            frequency,
        }
    }

    /// Build a mode from per-channel bit counts
    pub const fn from_channels(
        width: u32,
        height: u32,
        red_bits: u32,
        green_bits: u32,
        blue_bits: u32,
        refresh_rate: u32,
    ) -> Self {
        Self::with_format(width, height, red_bits + green_bits + blue_bits, refresh_rate)
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Colour depth in bits
    pub const fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Refresh rate in Hz
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Whether both dimensions are non-zero
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<glfw::VidMode> for DisplayMode {
    fn from(mode: glfw::VidMode) -> Self {
        Self::from_channels(
            mode.width,
            mode.height,
            mode.red_bits,
            mode.green_bits,
            mode.blue_bits,
            mode.refresh_rate,
        )
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} x {} @{}Hz",
            self.width, self.height, self.bits_per_pixel, self.frequency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_channel_sum() {
        let mode = DisplayMode::from_channels(1920, 1080, 8, 8, 8, 60);
        assert_eq!(mode.bits_per_pixel(), 24);
        assert_eq!(mode.frequency(), 60);

        let high_colour = DisplayMode::from_channels(1280, 720, 5, 6, 5, 75);
        assert_eq!(high_colour.bits_per_pixel(), 16);
    }

    #[test]
    fn test_from_glfw_vid_mode() {
        let vid_mode = glfw::VidMode {
            width: 2560,
            height: 1440,
            red_bits: 10,
            green_bits: 10,
            blue_bits: 10,
            refresh_rate: 144,
        };
        let mode = DisplayMode::from(vid_mode);
        assert_eq!(mode, DisplayMode::with_format(2560, 1440, 30, 144));
    }

    #[test]
    fn test_size_only_mode() {
        let mode = DisplayMode::new(800, 600);
        assert_eq!((mode.width(), mode.height()), (800, 600));
        assert_eq!(mode.bits_per_pixel(), 0);
        assert_eq!(mode.frequency(), 0);
        assert!(mode.is_valid());
        assert!(!DisplayMode::new(0, 600).is_valid());
    }

    #[test]
    fn test_display_format() {
        let mode = DisplayMode::with_format(1024, 768, 24, 60);
        assert_eq!(mode.to_string(), "1024 x 768 x 24 @60Hz");
    }
}
