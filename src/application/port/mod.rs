// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`asset_source`]: Listing library images and resolving their bitmaps
//!
//! # Design Notes
//!
//! - Traits use domain types plus `iced_core` geometry only
//! - Bitmap resolution returns a boxed future; the host awaits it on its own
//!   event loop and hands the result back to the controller

pub mod asset_source;

pub use asset_source::{AssetSource, AssetSourceError, Authorization, DeliveryMode};
