// SPDX-License-Identifier: MPL-2.0
//! Plain data handed to the rendering layer. No drawing logic lives here.

use crate::domain::{ActionStyle, AssetId, FontWeight, RowAttributes, Thumbnail};
use iced_core::{Rectangle, Size};

/// What a sheet row contains.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetRowKind {
    /// The row embedding the preview strip.
    Preview {
        cell_count: usize,
        shows_selection_indicators: bool,
    },
    /// An action row.
    Action {
        index: usize,
        text: String,
        font_weight: FontWeight,
        style: ActionStyle,
    },
}

/// One row of the outer sheet list.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRowSnapshot {
    pub row: usize,
    pub kind: SheetRowKind,
    pub size: Size,
    pub attributes: RowAttributes,
    pub is_highlightable: bool,
}

impl SheetRowSnapshot {
    /// Action text, `None` for the preview row.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            SheetRowKind::Action { text, .. } => Some(text),
            SheetRowKind::Preview { .. } => None,
        }
    }
}

/// One cell of the preview strip.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCellSnapshot {
    pub index: usize,
    pub asset_id: AssetId,
    pub size: Size,
    /// Position inside the strip's scrollable content.
    pub frame: Rectangle,
    /// Resolved bitmap, `None` while loading or if resolution failed.
    pub image: Option<Thumbnail>,
    pub is_selected: bool,
    pub shows_selection_indicator: bool,
}
