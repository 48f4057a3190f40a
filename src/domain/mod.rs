// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types and rules of the picker sheet.
//!
//! Nothing here knows about viewports, asset libraries or rendering.
//!
//! # Modules
//!
//! - [`action`]: [`Action`], [`ActionStyle`] and the Cancel-last [`ActionList`]
//! - [`asset`]: [`Asset`], [`AssetId`] and resolved [`Thumbnail`]s
//! - [`selection`]: [`SelectionState`] with capped oldest-first eviction
//! - [`row`]: [`RoundedCorners`] and [`RowAttributes`] for sheet rows

pub mod action;
pub mod asset;
pub mod row;
pub mod selection;

pub use action::{Action, ActionList, ActionStyle, FontWeight};
pub use asset::{Asset, AssetId, Thumbnail};
pub use row::{RoundedCorners, RowAttributes};
pub use selection::{MaximumSelection, SelectOutcome, SelectionState};
