// SPDX-License-Identifier: MPL-2.0
//! Image assets and their resolved bitmaps.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier handed out by the asset source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

impl AssetId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// An image in the user's library, as described by the asset source.
///
/// Immutable once fetched. The sheet refers to assets by their index in the
/// fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    id: AssetId,
    pixel_width: u32,
    pixel_height: u32,
    is_burst: bool,
}

impl Asset {
    #[must_use]
    pub const fn new(id: AssetId, pixel_width: u32, pixel_height: u32, is_burst: bool) -> Self {
        Self {
            id,
            pixel_width,
            pixel_height,
            is_burst,
        }
    }

    #[must_use]
    pub const fn id(&self) -> AssetId {
        self.id
    }

    #[must_use]
    pub const fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub const fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Whether this asset represents a burst (multi-image) capture.
    #[must_use]
    pub const fn is_burst(&self) -> bool {
        self.is_burst
    }

    /// Width divided by height. A zero height is treated as one pixel.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn proportion(&self) -> f32 {
        self.pixel_width as f32 / self.pixel_height.max(1) as f32
    }

    /// Short side divided by long side, always in `(0, 1]`.
    ///
    /// Orientation is ignored: a 3:4 portrait and a 4:3 landscape share the
    /// same ratio of 0.75.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn short_to_long_ratio(&self) -> f32 {
        let long = self.pixel_width.max(self.pixel_height).max(1) as f32;
        let short = self.pixel_width.min(self.pixel_height) as f32;
        short / long
    }
}

/// A decoded bitmap delivered by the asset source.
///
/// Pixel data is shared, so cloning a thumbnail is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl Thumbnail {
    /// Creates a thumbnail from dimensions and RGBA pixel data.
    ///
    /// Returns `None` if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        (rgba_bytes.len() == expected_len).then(|| Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}
