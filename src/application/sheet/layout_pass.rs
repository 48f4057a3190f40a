// SPDX-License-Identifier: MPL-2.0
//! One layout pass over the whole sheet.

use crate::application::layout::{GeometryEngine, RowAttributeResolver, SheetLayout, StripLayout};
use crate::domain::{ActionList, Asset, RowAttributes};
use iced_core::Size;

/// Everything derived from the current state and viewport in one go.
///
/// Cheap to compute and never cached across structural changes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    pub viewport: Size,
    pub row_attributes: Vec<RowAttributes>,
    pub sheet: SheetLayout,
    /// Display size of each preview cell, by asset index.
    pub cell_sizes: Vec<Size>,
    pub strip: StripLayout,
    /// Visible width of the preview strip.
    pub strip_width: f32,
}

impl LayoutPass {
    #[must_use]
    pub fn compute(
        geometry: &GeometryEngine,
        resolver: &RowAttributeResolver,
        assets: &[Asset],
        actions: &ActionList,
        enlarged: bool,
        viewport: Size,
    ) -> Self {
        let row_count = 1 + actions.len();
        let cancel_row = actions.index_of_cancel().map(|index| index + 1);

        let row_attributes = resolver.resolve_all(row_count, cancel_row);
        let sheet = geometry.sheet_layout(assets, enlarged, viewport.width, &row_attributes);

        // Cell widths are bounded by the first action row's insets, whether
        // or not that row exists.
        let action_insets = resolver.attributes(1, row_count, cancel_row).insets;
        let cell_sizes: Vec<Size> = assets
            .iter()
            .map(|asset| {
                geometry.cell_size(
                    asset,
                    sheet.preview_height,
                    enlarged,
                    viewport.width,
                    &action_insets,
                )
            })
            .collect();

        let strip = geometry.strip_layout(cell_sizes.iter().copied());
        let strip_width = viewport.width - row_attributes[0].horizontal_insets();

        Self {
            viewport,
            row_attributes,
            sheet,
            cell_sizes,
            strip,
            strip_width,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_attributes.len()
    }

    /// Size of sheet row `row`.
    #[must_use]
    pub fn row_size(&self, row: usize) -> Option<Size> {
        self.sheet
            .row_heights
            .get(row)
            .map(|&height| Size::new(self.viewport.width, height))
    }

    /// Scroll offset that centers preview cell `index`.
    #[must_use]
    pub fn centering_offset(&self, index: usize) -> Option<f32> {
        self.strip.centering_offset(index, self.strip_width)
    }
}
