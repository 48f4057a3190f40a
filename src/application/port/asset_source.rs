// SPDX-License-Identifier: MPL-2.0
//! Asset source port definition.
//!
//! The [`AssetSource`] supplies the images shown in the preview strip and
//! resolves their bitmaps asynchronously. Platform photo libraries implement
//! it in the host application; [`crate::infrastructure::memory`] provides an
//! in-memory adapter.

use crate::domain::{Asset, Thumbnail};
use futures_util::future::BoxFuture;
use iced_core::Size;
use thiserror::Error;

// =============================================================================
// AssetSourceError
// =============================================================================

/// Errors that can occur while listing assets.
///
/// The sheet treats all of them as "no assets available".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetSourceError {
    /// The user refused access to the library.
    #[error("Access to the image library was denied")]
    AuthorizationDenied,

    /// Access is blocked by policy and cannot be granted by the user.
    #[error("Access to the image library is restricted")]
    AuthorizationRestricted,

    /// The library could not be read.
    #[error("Image library unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Authorization / DeliveryMode
// =============================================================================

/// Library access status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    /// The user has not been asked yet.
    NotDetermined,
    Denied,
    Restricted,
}

impl Authorization {
    /// The error the sheet logs when access is not granted.
    #[must_use]
    pub fn error(self) -> Option<AssetSourceError> {
        match self {
            Authorization::Authorized | Authorization::NotDetermined => None,
            Authorization::Denied => Some(AssetSourceError::AuthorizationDenied),
            Authorization::Restricted => Some(AssetSourceError::AuthorizationRestricted),
        }
    }
}

/// Quality/latency trade-off requested when resolving a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// May deliver a degraded image first, then the final one.
    #[default]
    Opportunistic,
    HighQuality,
    Fast,
}

// =============================================================================
// AssetSource Trait
// =============================================================================

/// Port for the image library.
///
/// Bitmap requests are fire-and-forget: they are never cancelled, and the
/// returned futures must be polled by the host on the same thread that owns
/// the sheet controller.
pub trait AssetSource {
    /// Current library access status.
    fn authorization(&self) -> Authorization;

    /// Asks the user for access. Resolves to the resulting status.
    fn request_authorization(&self) -> BoxFuture<'static, Authorization>;

    /// Lists up to `limit` images, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetSourceError`] if the library cannot be read.
    fn list_images(&self, limit: usize) -> Result<Vec<Asset>, AssetSourceError>;

    /// Resolves a bitmap for `asset` scaled to fill `target_size` pixels.
    fn resolve_image(
        &self,
        asset: &Asset,
        target_size: Size,
        delivery: DeliveryMode,
    ) -> BoxFuture<'static, Option<Thumbnail>>;

    /// Resolves the full image data of `asset`.
    ///
    /// Used for burst captures, which sized requests cannot serve.
    fn resolve_image_data(
        &self,
        asset: &Asset,
        delivery: DeliveryMode,
    ) -> BoxFuture<'static, Option<Thumbnail>>;

    /// Hints that `asset` will soon be requested at `target_size`.
    ///
    /// Best effort; implementations may ignore it.
    fn prefetch(&self, asset: &Asset, target_size: Size);
}
