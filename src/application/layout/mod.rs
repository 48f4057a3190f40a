// SPDX-License-Identifier: MPL-2.0
//! Pure layout computations for the sheet.
//!
//! - [`geometry`]: preview height, cell sizes, row sizes, strip positions
//! - [`row_attributes`]: rounded corners and background insets per row
//!
//! Everything here is recomputed on demand from the current assets, actions,
//! selection state and viewport. Nothing is cached across structural changes.

pub mod geometry;
pub mod row_attributes;

pub use geometry::{GeometryEngine, SheetLayout, StripLayout};
pub use row_attributes::RowAttributeResolver;
