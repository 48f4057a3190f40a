// SPDX-License-Identifier: MPL-2.0
//! In-memory image library.
//!
//! Serves a fixed list of assets. Bitmaps come from images registered with
//! [`MemoryAssetSource::with_image`], scaled to fill the requested size, or
//! are generated as solid swatches when none is registered.
//!
//! # Design
//!
//! - **LRU cache**: prefetched thumbnails are kept per (asset, pixel size)
//! - **Immediate delivery**: every future is already resolved
//! - **Single-threaded**: interior mutability through `Cell`/`RefCell`

use crate::application::port::{AssetSource, AssetSourceError, Authorization, DeliveryMode};
use crate::domain::{Asset, AssetId, Thumbnail};
use futures_util::future::{self, BoxFuture, FutureExt};
use iced_core::Size;
use image_rs::imageops::{self, FilterType};
use image_rs::{Rgba, RgbaImage};
use lru::LruCache;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Default number of prefetched thumbnails kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Longest edge of a full-data (burst) bitmap.
pub const MAX_FULL_DATA_EDGE: u32 = 1024;

type CacheKey = (AssetId, u32, u32);

/// Cache counters, exposed for tests and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub prefetches: u64,
}

/// An [`AssetSource`] backed by memory.
pub struct MemoryAssetSource {
    assets: Vec<Asset>,
    images: HashMap<AssetId, RgbaImage>,
    unresolvable: HashSet<AssetId>,
    authorization: Cell<Authorization>,
    granted_on_request: Authorization,
    list_error: Option<AssetSourceError>,
    cache: RefCell<LruCache<CacheKey, Thumbnail>>,
    stats: Cell<CacheStats>,
}

impl MemoryAssetSource {
    /// Creates an authorized source serving `assets`, newest first.
    #[must_use]
    pub fn new(assets: Vec<Asset>) -> Self {
        Self::with_cache_capacity(assets, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a source whose prefetch cache holds up to `capacity` thumbnails.
    #[must_use]
    pub fn with_cache_capacity(assets: Vec<Asset>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            assets,
            images: HashMap::new(),
            unresolvable: HashSet::new(),
            authorization: Cell::new(Authorization::Authorized),
            granted_on_request: Authorization::Authorized,
            list_error: None,
            cache: RefCell::new(LruCache::new(capacity)),
            stats: Cell::new(CacheStats::default()),
        }
    }

    /// Registers the pixels served for `id`.
    #[must_use]
    pub fn with_image(mut self, id: AssetId, image: RgbaImage) -> Self {
        self.images.insert(id, image);
        self
    }

    /// Makes every bitmap request for `id` resolve to `None`.
    #[must_use]
    pub fn with_unresolvable(mut self, id: AssetId) -> Self {
        self.unresolvable.insert(id);
        self
    }

    /// Sets the current status and the status granted when access is requested.
    #[must_use]
    pub fn with_authorization(self, current: Authorization, granted_on_request: Authorization) -> Self {
        self.authorization.set(current);
        Self {
            granted_on_request,
            ..self
        }
    }

    /// Makes listing fail with `error`.
    #[must_use]
    pub fn with_list_error(mut self, error: AssetSourceError) -> Self {
        self.list_error = Some(error);
        self
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    /// Whether a thumbnail for `asset` at `target_size` is cached.
    #[must_use]
    pub fn is_cached(&self, asset: &Asset, target_size: Size) -> bool {
        self.cache.borrow().contains(&cache_key(asset, target_size))
    }

    fn update_stats(&self, update: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    fn render(&self, asset: &Asset, width: u32, height: u32) -> Option<Thumbnail> {
        if self.unresolvable.contains(&asset.id()) || width == 0 || height == 0 {
            return None;
        }

        let pixels = match self.images.get(&asset.id()) {
            Some(source) => fill(source, width, height),
            None => RgbaImage::from_pixel(width, height, swatch(asset.id())),
        };

        Thumbnail::from_rgba(width, height, pixels.into_raw())
    }
}

impl AssetSource for MemoryAssetSource {
    fn authorization(&self) -> Authorization {
        self.authorization.get()
    }

    fn request_authorization(&self) -> BoxFuture<'static, Authorization> {
        self.authorization.set(self.granted_on_request);
        future::ready(self.granted_on_request).boxed()
    }

    fn list_images(&self, limit: usize) -> Result<Vec<Asset>, AssetSourceError> {
        if let Some(error) = &self.list_error {
            return Err(error.clone());
        }
        Ok(self.assets.iter().take(limit).copied().collect())
    }

    fn resolve_image(
        &self,
        asset: &Asset,
        target_size: Size,
        _delivery: DeliveryMode,
    ) -> BoxFuture<'static, Option<Thumbnail>> {
        let key = cache_key(asset, target_size);

        let cached = self.cache.borrow_mut().get(&key).cloned();
        let image = match cached {
            Some(thumbnail) => {
                self.update_stats(|stats| stats.hits += 1);
                Some(thumbnail)
            }
            None => {
                self.update_stats(|stats| stats.misses += 1);
                self.render(asset, key.1, key.2)
            }
        };

        future::ready(image).boxed()
    }

    fn resolve_image_data(
        &self,
        asset: &Asset,
        _delivery: DeliveryMode,
    ) -> BoxFuture<'static, Option<Thumbnail>> {
        let (width, height) = fit_within(
            asset.pixel_width(),
            asset.pixel_height(),
            MAX_FULL_DATA_EDGE,
        );
        future::ready(self.render(asset, width, height)).boxed()
    }

    fn prefetch(&self, asset: &Asset, target_size: Size) {
        let key = cache_key(asset, target_size);
        if self.cache.borrow().contains(&key) {
            return;
        }

        if let Some(thumbnail) = self.render(asset, key.1, key.2) {
            self.cache.borrow_mut().put(key, thumbnail);
            self.update_stats(|stats| stats.prefetches += 1);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cache_key(asset: &Asset, target_size: Size) -> CacheKey {
    (
        asset.id(),
        target_size.width.round().max(0.0) as u32,
        target_size.height.round().max(0.0) as u32,
    )
}

/// Scales `source` to cover `width` x `height`, cropping the overflow.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn fill(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let scale = (width as f32 / source.width().max(1) as f32)
        .max(height as f32 / source.height().max(1) as f32);
    let scaled_width = ((source.width() as f32 * scale).ceil() as u32).max(width);
    let scaled_height = ((source.height() as f32 * scale).ceil() as u32).max(height);

    let scaled = imageops::resize(source, scaled_width, scaled_height, FilterType::Triangle);
    let x = (scaled_width - width) / 2;
    let y = (scaled_height - height) / 2;
    imageops::crop_imm(&scaled, x, y, width, height).to_image()
}

/// Shrinks `width` x `height` so the longest edge is at most `max_edge`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_edge {
        return (width, height);
    }
    let scale = max_edge as f32 / longest as f32;
    (
        ((width as f32 * scale).round() as u32).max(1),
        ((height as f32 * scale).round() as u32).max(1),
    )
}

/// Deterministic placeholder color per asset.
#[allow(clippy::cast_possible_truncation)]
fn swatch(id: AssetId) -> Rgba<u8> {
    let hash = id.value().wrapping_mul(0x9E37_79B9_7F4A_7C15);
    Rgba([(hash >> 16) as u8, (hash >> 24) as u8, (hash >> 32) as u8, 255])
}
