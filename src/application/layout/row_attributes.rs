// SPDX-License-Identifier: MPL-2.0
//! Rounded-corner placement and background insets of sheet rows.
//!
//! Row 0 is the preview row, rows `1..=N` are the actions. On the modern
//! tier the rows form one rounded group: top corners on the first row,
//! bottom corners on the last. A Cancel action is pulled out of that group
//! into its own fully rounded block, separated by a small gap.

use crate::config::{LayoutConfig, PlatformTier};
use crate::domain::{RoundedCorners, RowAttributes};
use iced_core::Padding;

/// Computes [`RowAttributes`] from a row's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowAttributeResolver {
    tier: PlatformTier,
    corner_radius: f32,
    default_inset: f32,
    inner_inset: f32,
}

impl RowAttributeResolver {
    #[must_use]
    pub fn new(layout: &LayoutConfig) -> Self {
        Self {
            tier: layout.platform_tier,
            corner_radius: layout.corner_radius,
            default_inset: layout.default_inset,
            inner_inset: layout.inner_inset,
        }
    }

    /// Attributes of `row` in a sheet of `row_count` rows.
    ///
    /// `cancel_row` is the sheet row holding the Cancel action, which is
    /// always the last row when present. Rows past the end are treated as
    /// plain middle rows.
    #[must_use]
    pub fn attributes(&self, row: usize, row_count: usize, cancel_row: Option<usize>) -> RowAttributes {
        if self.tier == PlatformTier::Legacy {
            return RowAttributes::PLAIN;
        }

        if row == 0 {
            return self.rounded(RoundedCorners::Top, 0.0, 0.0);
        }

        match cancel_row {
            Some(cancel_row) if row == cancel_row => {
                self.rounded(RoundedCorners::All, self.inner_inset, self.default_inset)
            }
            Some(_) if Some(row) == row_count.checked_sub(2) => {
                self.rounded(RoundedCorners::Bottom, 0.0, self.inner_inset)
            }
            None if Some(row) == row_count.checked_sub(1) => {
                self.rounded(RoundedCorners::Bottom, 0.0, self.default_inset)
            }
            _ => self.rounded(RoundedCorners::None, 0.0, 0.0),
        }
    }

    /// Attributes of every row, in order.
    #[must_use]
    pub fn resolve_all(&self, row_count: usize, cancel_row: Option<usize>) -> Vec<RowAttributes> {
        (0..row_count)
            .map(|row| self.attributes(row, row_count, cancel_row))
            .collect()
    }

    fn rounded(&self, corners: RoundedCorners, top: f32, bottom: f32) -> RowAttributes {
        RowAttributes {
            corners,
            corner_radius: self.corner_radius,
            insets: Padding {
                top,
                right: self.default_inset,
                bottom,
                left: self.default_inset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn resolver() -> RowAttributeResolver {
        RowAttributeResolver::new(&LayoutConfig::default())
    }

    fn corners(attributes: &[RowAttributes]) -> Vec<RoundedCorners> {
        attributes.iter().map(|a| a.corners).collect()
    }

    #[test]
    fn preview_only_gets_top_corners() {
        let rows = resolver().resolve_all(1, None);
        assert_eq!(corners(&rows), [RoundedCorners::Top]);
        assert_abs_diff_eq!(rows[0].insets.left, 10.0);
        assert_abs_diff_eq!(rows[0].insets.bottom, 0.0);
    }

    #[test]
    fn preview_and_cancel_form_two_groups() {
        let rows = resolver().resolve_all(2, Some(1));
        assert_eq!(corners(&rows), [RoundedCorners::Top, RoundedCorners::All]);

        let cancel = rows[1].insets;
        assert_abs_diff_eq!(cancel.top, 4.0);
        assert_abs_diff_eq!(cancel.left, 10.0);
        assert_abs_diff_eq!(cancel.bottom, 10.0);
        assert_abs_diff_eq!(cancel.right, 10.0);
    }

    #[test]
    fn last_action_before_cancel_closes_group_with_inner_gap() {
        // preview, Take Photo, Photo Library, Cancel
        let rows = resolver().resolve_all(4, Some(3));
        assert_eq!(
            corners(&rows),
            [
                RoundedCorners::Top,
                RoundedCorners::None,
                RoundedCorners::Bottom,
                RoundedCorners::All
            ]
        );
        assert_abs_diff_eq!(rows[2].insets.bottom, 4.0);
        assert_abs_diff_eq!(rows[1].vertical_insets(), 0.0);
    }

    #[test]
    fn without_cancel_last_row_gets_default_bottom_inset() {
        let rows = resolver().resolve_all(3, None);
        assert_eq!(
            corners(&rows),
            [
                RoundedCorners::Top,
                RoundedCorners::None,
                RoundedCorners::Bottom
            ]
        );
        assert_abs_diff_eq!(rows[2].insets.bottom, 10.0);
        assert_abs_diff_eq!(rows[2].insets.top, 0.0);
    }

    #[test]
    fn every_row_uses_configured_radius() {
        let rows = resolver().resolve_all(4, Some(3));
        for row in rows {
            assert_abs_diff_eq!(row.corner_radius, 13.0);
        }
    }

    #[test]
    fn row_past_the_end_is_plain_middle_row() {
        let attributes = resolver().attributes(1, 1, None);
        assert_eq!(attributes.corners, RoundedCorners::None);
        assert_abs_diff_eq!(attributes.horizontal_insets(), 20.0);
    }

    #[test]
    fn legacy_tier_is_flat() {
        let layout = LayoutConfig {
            platform_tier: PlatformTier::Legacy,
            ..LayoutConfig::default()
        };
        let rows = RowAttributeResolver::new(&layout).resolve_all(3, Some(2));
        assert!(rows.iter().all(|row| *row == RowAttributes::PLAIN));
    }
}
