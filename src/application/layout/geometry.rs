// SPDX-License-Identifier: MPL-2.0
//! Sheet geometry: preview height, cell sizes and row sizes.
//!
//! The preview row is shared by every image, so its height is chosen from the
//! whole asset set. Collapsed, it is a fixed strip. Once enlarged it grows to
//! the tallest "reasonable" image height, bounded so a single panorama or
//! square cannot blow the strip past the configured maximum.

use crate::config::LayoutConfig;
use crate::domain::{Asset, RowAttributes};
use iced_core::{Padding, Point, Rectangle, Size};

/// Computed heights of every sheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub preview_height: f32,
    /// Height of each sheet row; index 0 is the preview row.
    pub row_heights: Vec<f32>,
    pub total_height: f32,
}

impl SheetLayout {
    /// Frame of the sheet, anchored to the bottom of `viewport`.
    #[must_use]
    pub fn frame(&self, viewport: Size) -> Rectangle {
        Rectangle::new(
            Point::new(0.0, viewport.height - self.total_height),
            self.preferred_content_size(viewport.width),
        )
    }

    /// Size the sheet asks its container for.
    #[must_use]
    pub fn preferred_content_size(&self, viewport_width: f32) -> Size {
        Size::new(viewport_width, self.total_height)
    }
}

/// Cell frames inside the horizontally scrolling preview strip.
///
/// Each asset sits in its own section, inset by the edge inset on every side.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    pub frames: Vec<Rectangle>,
    pub content_width: f32,
}

impl StripLayout {
    /// Horizontal scroll offset that centers cell `index` in a strip of `strip_width`.
    ///
    /// Clamped to the scrollable range; content narrower than the strip
    /// yields a non-positive offset.
    #[must_use]
    pub fn centering_offset(&self, index: usize, strip_width: f32) -> Option<f32> {
        let frame = self.frames.get(index)?;
        let offset = (frame.center_x() - strip_width / 2.0).max(0.0);
        Some(offset.min(self.content_width - strip_width))
    }
}

/// Computes sizes from the layout metrics in [`LayoutConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryEngine {
    layout: LayoutConfig,
}

impl GeometryEngine {
    #[must_use]
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Widest an image may be drawn at full viewport width.
    #[must_use]
    pub fn max_image_width(&self, viewport_width: f32) -> f32 {
        viewport_width - 2.0 * self.layout.edge_inset
    }

    /// Height of the preview strip's cells.
    ///
    /// Collapsed: the fixed collapsed height. Enlarged: for every asset the
    /// height it would take at full image width (short side over long side,
    /// orientation ignored), keeping only candidates strictly below both the
    /// maximum height and the maximum image width. The largest survivor is
    /// rounded and clamped into the enlarged bounds; with no survivor the
    /// result is the lower bound.
    #[must_use]
    pub fn preview_height(&self, assets: &[Asset], enlarged: bool, viewport_width: f32) -> f32 {
        if !enlarged {
            return self.layout.collapsed_preview_height;
        }

        let max_height = self.layout.max_preview_height;
        let max_image_width = self.max_image_width(viewport_width);

        let tallest = assets
            .iter()
            .map(|asset| asset.short_to_long_ratio() * max_image_width)
            .filter(|&height| height < max_image_width && height < max_height)
            .fold(0.0_f32, f32::max);

        tallest
            .round()
            .min(max_height)
            .max(self.layout.min_enlarged_preview_height)
    }

    /// Display size of one preview cell.
    ///
    /// `row_insets` are the background insets of the first action row; they
    /// narrow the widest allowed cell once enlarged.
    #[must_use]
    pub fn cell_size(
        &self,
        asset: &Asset,
        preview_height: f32,
        enlarged: bool,
        viewport_width: f32,
        row_insets: &Padding,
    ) -> Size {
        let mut width = (asset.proportion() * preview_height).floor();

        if enlarged {
            let max_width = self.max_image_width(viewport_width) - row_insets.left - row_insets.right;
            width = width.min(max_width);
        }

        Size::new(width, preview_height)
    }

    /// Pixel size to request from the asset source for a cell of `display_size` points.
    #[must_use]
    pub fn target_bitmap_size(display_size: Size, screen_scale: f32) -> Size {
        Size::new(display_size.width * screen_scale, display_size.height * screen_scale)
    }

    /// Height of an action row, excluding insets.
    #[must_use]
    pub fn action_row_height(&self) -> f32 {
        self.layout.action_row_height()
    }

    /// Size of sheet row `row`.
    ///
    /// The preview row collapses to zero height when there are no assets.
    #[must_use]
    pub fn sheet_item_size(
        &self,
        row: usize,
        viewport_width: f32,
        preview_height: f32,
        asset_count: usize,
        attributes: &RowAttributes,
    ) -> Size {
        let height = if row == 0 {
            if asset_count > 0 {
                preview_height + 2.0 * self.layout.edge_inset
            } else {
                0.0
            }
        } else {
            self.action_row_height() + attributes.vertical_insets()
        };

        Size::new(viewport_width, height)
    }

    /// Full layout pass over every sheet row.
    #[must_use]
    pub fn sheet_layout(
        &self,
        assets: &[Asset],
        enlarged: bool,
        viewport_width: f32,
        row_attributes: &[RowAttributes],
    ) -> SheetLayout {
        let preview_height = self.preview_height(assets, enlarged, viewport_width);

        let row_heights: Vec<f32> = row_attributes
            .iter()
            .enumerate()
            .map(|(row, attributes)| {
                self.sheet_item_size(row, viewport_width, preview_height, assets.len(), attributes)
                    .height
            })
            .collect();

        let total_height = row_heights.iter().sum();

        SheetLayout {
            preview_height,
            row_heights,
            total_height,
        }
    }

    /// Positions cells of the given sizes along the preview strip.
    #[must_use]
    pub fn strip_layout(&self, cell_sizes: impl IntoIterator<Item = Size>) -> StripLayout {
        let inset = self.layout.edge_inset;
        let mut cursor = 0.0;

        let frames = cell_sizes
            .into_iter()
            .map(|size| {
                let frame = Rectangle::new(Point::new(cursor + inset, inset), size);
                cursor += size.width + 2.0 * inset;
                frame
            })
            .collect();

        StripLayout {
            frames,
            content_width: cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::layout::RowAttributeResolver;
    use crate::config::PlatformTier;
    use crate::test_utils::{assert_abs_diff_eq, asset};

    fn engine() -> GeometryEngine {
        GeometryEngine::new(LayoutConfig::default())
    }

    fn action_insets() -> Padding {
        Padding {
            top: 0.0,
            right: 10.0,
            bottom: 0.0,
            left: 10.0,
        }
    }

    #[test]
    fn collapsed_preview_height_is_fixed() {
        let assets = [asset(1, 4000, 3000), asset(2, 3000, 4000)];
        assert_abs_diff_eq!(engine().preview_height(&assets, false, 320.0), 129.0);
        assert_abs_diff_eq!(engine().preview_height(&[], false, 320.0), 129.0);
    }

    #[test]
    fn mixed_orientations_at_320_points() {
        // 4:3 and 3:4 both yield 0.75 * 310 = 232.5; the square yields 310,
        // which is not strictly below the 310 image width and is dropped.
        let assets = [
            asset(1, 4000, 3000),
            asset(2, 3000, 4000),
            asset(3, 2000, 2000),
        ];
        assert_abs_diff_eq!(engine().preview_height(&assets, true, 320.0), 233.0);
    }

    #[test]
    fn candidates_above_max_height_are_dropped() {
        // At 414 points: 4:3 gives 303 (too tall), 16:9 gives 227.25.
        let assets = [asset(1, 4000, 3000), asset(2, 1920, 1080)];
        assert_abs_diff_eq!(engine().preview_height(&assets, true, 414.0), 227.0);
    }

    #[test]
    fn no_surviving_candidate_falls_back_to_lower_bound() {
        let squares = [asset(1, 100, 100), asset(2, 500, 500)];
        assert_abs_diff_eq!(engine().preview_height(&squares, true, 320.0), 200.0);
        assert_abs_diff_eq!(engine().preview_height(&[], true, 320.0), 200.0);
    }

    #[test]
    fn short_candidates_are_raised_to_lower_bound() {
        // Panorama: 0.25 * 310 = 77.5
        let panorama = [asset(1, 8000, 2000)];
        assert_abs_diff_eq!(engine().preview_height(&panorama, true, 320.0), 200.0);
    }

    #[test]
    fn enlarged_preview_height_stays_in_bounds() {
        let assets: Vec<Asset> = (1..=40)
            .map(|i| asset(i, 100 + i as u32 * 37, 100 + (i as u32 * 53) % 400))
            .collect();
        for width in [240.0, 320.0, 375.0, 414.0, 768.0, 1024.0] {
            let height = engine().preview_height(&assets, true, width);
            assert!((200.0..=300.0).contains(&height), "{height} at {width}");
        }
    }

    #[test]
    fn cell_width_follows_proportion() {
        let size = engine().cell_size(&asset(1, 4000, 3000), 129.0, false, 320.0, &action_insets());
        assert_abs_diff_eq!(size.width, 172.0); // floor(1.333 * 129)
        assert_abs_diff_eq!(size.height, 129.0);
    }

    #[test]
    fn enlarged_cell_width_is_capped_by_row_insets() {
        let wide = asset(1, 8000, 2000);
        let size = engine().cell_size(&wide, 233.0, true, 320.0, &action_insets());
        assert_abs_diff_eq!(size.width, 290.0); // 320 - 2*5 - 10 - 10

        let collapsed = engine().cell_size(&wide, 129.0, false, 320.0, &action_insets());
        assert_abs_diff_eq!(collapsed.width, 516.0);
    }

    #[test]
    fn target_bitmap_size_scales_both_dimensions() {
        let target = GeometryEngine::target_bitmap_size(Size::new(172.0, 129.0), 3.0);
        assert_abs_diff_eq!(target.width, 516.0);
        assert_abs_diff_eq!(target.height, 387.0);
    }

    #[test]
    fn preview_row_collapses_without_assets() {
        let attributes = RowAttributes::PLAIN;
        let empty = engine().sheet_item_size(0, 320.0, 129.0, 0, &attributes);
        assert_abs_diff_eq!(empty.height, 0.0);

        let filled = engine().sheet_item_size(0, 320.0, 129.0, 3, &attributes);
        assert_abs_diff_eq!(filled.height, 139.0);
        assert_abs_diff_eq!(filled.width, 320.0);
    }

    #[test]
    fn full_layout_sums_rows() {
        // preview, Take Photo, Cancel
        let rows = RowAttributeResolver::new(&LayoutConfig::default()).resolve_all(3, Some(2));
        let assets = [asset(1, 4000, 3000)];
        let layout = engine().sheet_layout(&assets, false, 320.0, &rows);

        // 129 + 10 | 57 + 0 + 4 | 57 + 4 + 10
        assert_eq!(layout.row_heights.len(), 3);
        assert_abs_diff_eq!(layout.row_heights[0], 139.0);
        assert_abs_diff_eq!(layout.row_heights[1], 61.0);
        assert_abs_diff_eq!(layout.row_heights[2], 71.0);
        assert_abs_diff_eq!(layout.total_height, 271.0);

        let frame = layout.frame(Size::new(320.0, 568.0));
        assert_abs_diff_eq!(frame.y, 297.0);
        assert_abs_diff_eq!(frame.height, 271.0);
    }

    #[test]
    fn legacy_rows_are_fifty_points() {
        let layout_config = LayoutConfig {
            platform_tier: PlatformTier::Legacy,
            ..LayoutConfig::default()
        };
        let rows = RowAttributeResolver::new(&layout_config).resolve_all(2, Some(1));
        let layout = GeometryEngine::new(layout_config).sheet_layout(&[], false, 320.0, &rows);
        assert_abs_diff_eq!(layout.total_height, 50.0);
    }

    #[test]
    fn strip_layout_insets_each_section() {
        let strip = engine().strip_layout([Size::new(100.0, 129.0), Size::new(50.0, 129.0)]);
        assert_abs_diff_eq!(strip.frames[0].x, 5.0);
        assert_abs_diff_eq!(strip.frames[1].x, 115.0);
        assert_abs_diff_eq!(strip.frames[1].y, 5.0);
        assert_abs_diff_eq!(strip.content_width, 170.0);
    }

    #[test]
    fn centering_offset_is_clamped() {
        let sizes = std::iter::repeat(Size::new(190.0, 233.0)).take(5);
        let strip = engine().strip_layout(sizes);
        // Each section is 200 wide; content is 1000.
        assert_abs_diff_eq!(strip.centering_offset(0, 300.0).unwrap_or(f32::NAN), 0.0);
        assert_abs_diff_eq!(strip.centering_offset(2, 300.0).unwrap_or(f32::NAN), 350.0);
        assert_abs_diff_eq!(strip.centering_offset(4, 300.0).unwrap_or(f32::NAN), 700.0);
        assert!(strip.centering_offset(5, 300.0).is_none());
    }
}
