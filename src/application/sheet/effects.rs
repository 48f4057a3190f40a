// SPDX-License-Identifier: MPL-2.0
//! Side effects the rendering layer applies after a controller call.

use std::time::Duration;

/// Instruction for the rendering layer.
///
/// Effects are returned in the order they must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetEffect {
    /// Library access is undecided. Await
    /// [`AssetSource::request_authorization`](crate::application::port::AssetSource::request_authorization)
    /// and report back through `authorization_resolved`.
    RequestAuthorization,

    /// Row sizes changed; lay the sheet out again.
    Relayout { animated: bool },

    /// Action titles depend on the selection count; redraw the action rows.
    ReloadActionRows,

    /// First selection: animate the preview row to its enlarged height,
    /// keeping `center_on` centered, then call `finish_enlarge_animation`.
    ResizePreviewRow {
        height: f32,
        duration: Duration,
        center_on: usize,
        scroll_offset: f32,
    },

    /// The enlarge animation finished; selection checkmarks may appear.
    ShowSelectionIndicators,

    /// Update the checkmark of one preview cell.
    SetSelectionIndicator { index: usize, selected: bool },

    /// `index` was dropped to respect the selection cap; clear its checkmark.
    SelectionEvicted { index: usize },

    /// Scroll the preview strip horizontally.
    ScrollPreview { offset: f32, animated: bool },

    /// Dismiss the sheet.
    Dismiss,
}
