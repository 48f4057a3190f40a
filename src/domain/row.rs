// SPDX-License-Identifier: MPL-2.0
//! Visual attributes of a sheet row.
//!
//! Insets and radii use the `iced_core` geometry types so a renderer built on
//! iced can apply them directly.

use iced_core::border::Radius;
use iced_core::Padding;

/// Which corners of a row's background are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundedCorners {
    #[default]
    None,
    Top,
    Bottom,
    All,
}

/// Rounded-corner placement and background insets of one row.
///
/// Derived from the row's position on every layout pass, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowAttributes {
    pub corners: RoundedCorners,
    pub corner_radius: f32,
    pub insets: Padding,
}

impl RowAttributes {
    /// Square corners and no insets.
    pub const PLAIN: Self = Self {
        corners: RoundedCorners::None,
        corner_radius: 0.0,
        insets: Padding::ZERO,
    };

    /// Per-corner radius for the row background.
    #[must_use]
    pub fn border_radius(&self) -> Radius {
        let r = self.corner_radius;
        let (top, bottom) = match self.corners {
            RoundedCorners::None => (0.0, 0.0),
            RoundedCorners::Top => (r, 0.0),
            RoundedCorners::Bottom => (0.0, r),
            RoundedCorners::All => (r, r),
        };

        Radius {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        }
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub fn vertical_insets(&self) -> f32 {
        self.insets.top + self.insets.bottom
    }

    /// Sum of the left and right insets.
    #[must_use]
    pub fn horizontal_insets(&self) -> f32 {
        self.insets.left + self.insets.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn top_corners_round_only_the_top() {
        let attributes = RowAttributes {
            corners: RoundedCorners::Top,
            corner_radius: 13.0,
            insets: Padding::ZERO,
        };
        let radius = attributes.border_radius();
        assert_abs_diff_eq!(radius.top_left, 13.0);
        assert_abs_diff_eq!(radius.top_right, 13.0);
        assert_abs_diff_eq!(radius.bottom_left, 0.0);
        assert_abs_diff_eq!(radius.bottom_right, 0.0);
    }

    #[test]
    fn plain_has_no_radius_and_no_insets() {
        let radius = RowAttributes::PLAIN.border_radius();
        assert_abs_diff_eq!(radius.top_left + radius.bottom_right, 0.0);
        assert_abs_diff_eq!(RowAttributes::PLAIN.vertical_insets(), 0.0);
        assert_abs_diff_eq!(RowAttributes::PLAIN.horizontal_insets(), 0.0);
    }
}
