// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Layout values are `f32` points, so comparisons go through the `approx`
//! macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::{Action, ActionStyle, Asset, AssetId};

/// Builds a non-burst asset with the given pixel dimensions.
pub fn asset(id: u64, width: u32, height: u32) -> Asset {
    Asset::new(AssetId::new(id), width, height, false)
}

/// Builds an action whose handler does nothing.
pub fn action(title: &str, style: ActionStyle) -> Action {
    Action::new(title, style, |_| {})
}
