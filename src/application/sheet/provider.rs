// SPDX-License-Identifier: MPL-2.0
//! Data providers, one per collection.
//!
//! The outer row list and the inner preview strip each get their own
//! provider instead of one object answering for both.

use super::layout_pass::LayoutPass;
use super::preview_strip::PreviewStrip;
use super::snapshot::{PreviewCellSnapshot, SheetRowKind, SheetRowSnapshot};
use super::{PREVIEW_ACCESSIBILITY_ID, SHEET_ACCESSIBILITY_ID};
use crate::config::PlatformTier;
use crate::domain::{Action, ActionList, FontWeight, SelectionState};
use iced_core::Size;

/// Read-only data source of a rendered collection.
pub trait CollectionProvider {
    type Item;

    fn accessibility_identifier(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item_size(&self, index: usize) -> Option<Size>;

    fn snapshot(&self, index: usize) -> Option<Self::Item>;

    fn snapshots(&self) -> Vec<Self::Item> {
        (0..self.len()).filter_map(|index| self.snapshot(index)).collect()
    }
}

/// Title weight of an action on the given platform tier.
#[must_use]
pub fn font_weight(action: &Action, tier: PlatformTier) -> FontWeight {
    match tier {
        PlatformTier::Modern if action.is_cancel() => FontWeight::Bold,
        _ => FontWeight::Regular,
    }
}

/// Provider for the outer list: the preview row followed by the actions.
#[derive(Debug)]
pub struct SheetRows<'a> {
    pub(super) pass: LayoutPass,
    pub(super) actions: &'a ActionList,
    pub(super) selection: &'a SelectionState,
    pub(super) preview: &'a PreviewStrip,
    pub(super) tier: PlatformTier,
}

impl SheetRows<'_> {
    #[must_use]
    pub fn layout(&self) -> &LayoutPass {
        &self.pass
    }
}

impl CollectionProvider for SheetRows<'_> {
    type Item = SheetRowSnapshot;

    fn accessibility_identifier(&self) -> &'static str {
        SHEET_ACCESSIBILITY_ID
    }

    fn len(&self) -> usize {
        self.pass.row_count()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.pass.row_size(index)
    }

    fn snapshot(&self, row: usize) -> Option<SheetRowSnapshot> {
        let size = self.pass.row_size(row)?;
        let attributes = self.pass.row_attributes[row];

        let kind = if row == 0 {
            SheetRowKind::Preview {
                cell_count: self.preview.len(),
                shows_selection_indicators: self.preview.shows_selection_indicators(),
            }
        } else {
            let index = row - 1;
            let action = self.actions.get(index)?;
            SheetRowKind::Action {
                index,
                text: action.display_title(self.selection.count()),
                font_weight: font_weight(action, self.tier),
                style: action.style(),
            }
        };

        Some(SheetRowSnapshot {
            row,
            kind,
            size,
            attributes,
            is_highlightable: row != 0,
        })
    }
}

/// Provider for the inner preview strip.
#[derive(Debug)]
pub struct PreviewCells<'a> {
    pub(super) pass: LayoutPass,
    pub(super) selection: &'a SelectionState,
    pub(super) preview: &'a PreviewStrip,
}

impl PreviewCells<'_> {
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.pass.strip.content_width
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.preview.scroll_offset()
    }
}

impl CollectionProvider for PreviewCells<'_> {
    type Item = PreviewCellSnapshot;

    fn accessibility_identifier(&self) -> &'static str {
        PREVIEW_ACCESSIBILITY_ID
    }

    fn len(&self) -> usize {
        self.preview.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.pass.cell_sizes.get(index).copied()
    }

    fn snapshot(&self, index: usize) -> Option<PreviewCellSnapshot> {
        let asset = self.preview.asset(index)?;

        Some(PreviewCellSnapshot {
            index,
            asset_id: asset.id(),
            size: *self.pass.cell_sizes.get(index)?,
            frame: *self.pass.strip.frames.get(index)?,
            image: self.preview.image_for(asset.id()).cloned(),
            is_selected: self.selection.is_selected(index),
            shows_selection_indicator: self.preview.shows_selection_indicators(),
        })
    }
}
