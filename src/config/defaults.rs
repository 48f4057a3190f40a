// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the metrics used by
//! the sheet layout. Constants are organized by category.
//!
//! # Categories
//!
//! - **Preview**: Preview strip heights and insets
//! - **Rows**: Action row heights, corner radius and background insets
//! - **Assets**: Asset fetch limits and thumbnail scale
//! - **Animation**: Enlarge transition timing

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Inset around every preview cell, and around the preview strip itself.
pub const EDGE_INSET: f32 = 5.0;

/// Preview height before any image has been selected.
pub const COLLAPSED_PREVIEW_HEIGHT: f32 = 129.0;

/// Lower bound of the preview height once enlarged.
pub const MIN_ENLARGED_PREVIEW_HEIGHT: f32 = 200.0;

/// Upper bound of the preview height once enlarged.
pub const MAX_PREVIEW_HEIGHT: f32 = 300.0;

// ==========================================================================
// Row Defaults
// ==========================================================================

/// Radius of the rounded corners applied to grouped rows.
pub const CORNER_RADIUS: f32 = 13.0;

/// Horizontal background inset, and the bottom inset of a detached group.
pub const DEFAULT_INSET: f32 = 10.0;

/// Gap between the main group and a detached Cancel row.
pub const INNER_INSET: f32 = 4.0;

/// Height of an action row on the modern platform tier.
pub const MODERN_ACTION_ROW_HEIGHT: f32 = 57.0;

/// Height of an action row on the legacy platform tier.
pub const LEGACY_ACTION_ROW_HEIGHT: f32 = 50.0;


// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Maximum number of assets fetched from the source.
pub const ASSET_FETCH_LIMIT: usize = 50;

/// Device pixel scale used to size thumbnail requests.
pub const SCREEN_SCALE: f32 = 2.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the collapsed-to-enlarged preview transition (milliseconds).
pub const ENLARGE_DURATION_MS: u64 = 300;
