// SPDX-License-Identifier: MPL-2.0
//! The picker sheet: an outer list of rows (preview row + actions) that
//! embeds an independently owned, horizontally scrolling preview strip.
//!
//! [`SheetController`] owns the state and reacts to user events. Every
//! mutating call returns the [`SheetEffect`]s the rendering layer must apply;
//! the two [`CollectionProvider`]s expose plain snapshots for drawing.

pub mod controller;
pub mod effects;
pub mod layout_pass;
pub mod preview_strip;
pub mod provider;
pub mod snapshot;

pub use controller::{SheetController, SheetPhase};
pub use effects::SheetEffect;
pub use layout_pass::LayoutPass;
pub use preview_strip::{CellSlot, ImageRequest, ImageTicket, PreviewStrip};
pub use provider::{CollectionProvider, PreviewCells, SheetRows};
pub use snapshot::{PreviewCellSnapshot, SheetRowKind, SheetRowSnapshot};

/// Accessibility identifier of the outer row list.
pub const SHEET_ACCESSIBILITY_ID: &str = "ImagePickerSheet";

/// Accessibility identifier of the preview strip.
pub const PREVIEW_ACCESSIBILITY_ID: &str = "ImagePickerSheetPreview";

/// Accessibility identifier of the dimmed background behind the sheet.
pub const BACKGROUND_ACCESSIBILITY_ID: &str = "ImagePickerSheetBackground";
