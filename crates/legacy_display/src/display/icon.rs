//! Window icons
//!
//! Icons arrive as raw RGBA buffers, one per size, the way the legacy API
//! passed them. Each buffer is copied into an owned [`IconImage`]; the
//! session keeps the current [`IconSet`] alive until it is replaced or the
//! session is dropped.

use std::path::Path;

use super::{DisplayError, DisplayResult};

/// Bytes per RGBA pixel
const BYTES_PER_PIXEL: usize = 4;

/// A square RGBA icon image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    size: u32,
    rgba: Vec<u8>,
}

impl IconImage {
    /// Copy a square RGBA buffer, deriving its edge length from its size
    pub fn from_rgba(bytes: &[u8]) -> DisplayResult<Self> {
        let invalid = || DisplayError::InvalidIcon { len: bytes.len() };

        if bytes.is_empty() || bytes.len() % BYTES_PER_PIXEL != 0 {
            return Err(invalid());
        }

        let pixels = bytes.len() / BYTES_PER_PIXEL;
        let size = pixels.isqrt();
        if size * size != pixels {
            return Err(invalid());
        }

        Ok(Self {
            size: u32::try_from(size).map_err(|_| invalid())?,
            rgba: bytes.to_vec(),
        })
    }

    /// Edge length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Pixels packed so that each `u32` holds R, G, B, A in memory order
    pub fn pixels_ne(&self) -> Vec<u32> {
        self.rgba
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
            .collect()
    }
}

/// The set of icon sizes given to a window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    images: Vec<IconImage>,
}

impl IconSet {
    /// Build a set from raw RGBA buffers, one per icon size
    pub fn from_rgba_buffers<B: AsRef<[u8]>>(buffers: &[B]) -> DisplayResult<Self> {
        let images = buffers
            .iter()
            .map(|buffer| IconImage::from_rgba(buffer.as_ref()))
            .collect::<DisplayResult<Vec<_>>>()?;
        Ok(Self { images })
    }

    /// Build a set by decoding PNG files
    pub fn from_png_files<P: AsRef<Path>>(paths: &[P]) -> DisplayResult<Self> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let decoded = image::open(path)
                .map_err(|source| DisplayError::IconLoad {
                    path: path.display().to_string(),
                    source,
                })?
                .to_rgba8();

            if decoded.width() != decoded.height() {
                log::warn!(
                    "Icon {} is {}x{}, icons must be square",
                    path.display(),
                    decoded.width(),
                    decoded.height()
                );
                return Err(DisplayError::InvalidIcon {
                    len: decoded.as_raw().len(),
                });
            }
            log::debug!("Loaded {}x{} icon from {}", decoded.width(), decoded.height(), path.display());
            images.push(IconImage::from_rgba(decoded.as_raw())?);
        }
        Ok(Self { images })
    }

    /// Images in the set
    pub fn images(&self) -> &[IconImage] {
        &self.images
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Total pixel bytes held by the set
    pub fn byte_len(&self) -> usize {
        self.images.iter().map(|image| image.rgba.len()).sum()
    }
}
