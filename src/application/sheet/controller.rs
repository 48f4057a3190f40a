// SPDX-License-Identifier: MPL-2.0
//! Sheet controller: owns assets, actions and selection, and turns user
//! events into [`SheetEffect`]s.
//!
//! # State machine
//!
//! ```text
//! Collapsed --first select--> Enlarging --finish_enlarge_animation--> Enlarged
//! ```
//!
//! The preview is considered enlarged from the first selection on; the
//! `Enlarging` phase only marks that the resize animation is still running.
//! There is no way back for the lifetime of the sheet.
//!
//! All calls are expected on one thread. The only asynchronous work is
//! bitmap resolution: [`SheetController::bind_preview_cell`] hands out a
//! future, and its result comes back through
//! [`SheetController::complete_image`].

use super::effects::SheetEffect;
use super::layout_pass::LayoutPass;
use super::preview_strip::{CellSlot, ImageRequest, ImageTicket, PreviewStrip};
use super::provider::{PreviewCells, SheetRows};
use crate::application::layout::{GeometryEngine, RowAttributeResolver};
use crate::application::port::{AssetSource, Authorization, DeliveryMode};
use crate::config::SheetConfig;
use crate::domain::{
    Action, ActionList, Asset, MaximumSelection, RowAttributes, SelectOutcome, SelectionState,
    Thumbnail,
};
use crate::error::{Error, Result};
use iced_core::{Rectangle, Size};

/// Lifecycle of the preview row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    #[default]
    Collapsed,
    /// Enlarged, resize animation still running.
    Enlarging,
    Enlarged,
}

/// Orchestrates selection, geometry and row attributes for one sheet.
pub struct SheetController<S: AssetSource> {
    source: S,
    config: SheetConfig,
    geometry: GeometryEngine,
    resolver: RowAttributeResolver,
    actions: ActionList,
    selection: SelectionState,
    preview: PreviewStrip,
    viewport: Size,
    phase: SheetPhase,
}

impl<S: AssetSource> SheetController<S> {
    /// Creates a controller with no assets and no actions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails validation.
    pub fn new(source: S, config: SheetConfig) -> Result<Self> {
        config.validate()?;

        let maximum = config
            .selection
            .maximum_selection
            .map(MaximumSelection::new)
            .transpose()?;

        Ok(Self {
            geometry: GeometryEngine::new(config.layout.clone()),
            resolver: RowAttributeResolver::new(&config.layout),
            source,
            config,
            actions: ActionList::new(),
            selection: SelectionState::new(maximum),
            preview: PreviewStrip::new(),
            viewport: Size::ZERO,
            phase: SheetPhase::Collapsed,
        })
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    // =========================================================================
    // Assets
    // =========================================================================

    /// Fetches assets if the library is accessible.
    ///
    /// Undecided access yields [`SheetEffect::RequestAuthorization`]; denied or
    /// restricted access leaves the sheet with zero assets.
    pub fn load_assets(&mut self) -> Vec<SheetEffect> {
        match self.source.authorization() {
            Authorization::Authorized => self.fetch_assets(),
            Authorization::NotDetermined => {
                tracing::debug!("image library access not determined, requesting");
                vec![SheetEffect::RequestAuthorization]
            }
            status => {
                if let Some(err) = status.error() {
                    tracing::info!("showing sheet without images: {}", err);
                }
                self.replace_assets(Vec::new());
                vec![SheetEffect::Relayout { animated: false }]
            }
        }
    }

    /// Continues [`load_assets`](Self::load_assets) once the user answered the
    /// access prompt.
    pub fn authorization_resolved(&mut self, status: Authorization) -> Vec<SheetEffect> {
        if status == Authorization::Authorized {
            return self.fetch_assets();
        }

        if let Some(err) = status.error() {
            tracing::info!("showing sheet without images: {}", err);
        }
        Vec::new()
    }

    fn fetch_assets(&mut self) -> Vec<SheetEffect> {
        let limit = self.config.assets.fetch_limit;

        let assets = match self.source.list_images(limit) {
            Ok(mut assets) => {
                assets.truncate(limit);
                assets
            }
            Err(err) => {
                tracing::warn!("failed to list images: {}", err);
                Vec::new()
            }
        };

        tracing::debug!(count = assets.len(), "loaded preview assets");
        self.replace_assets(assets);
        vec![SheetEffect::Relayout { animated: false }]
    }

    fn replace_assets(&mut self, assets: Vec<Asset>) {
        self.selection.retain_below(assets.len());
        self.preview.set_assets(assets);
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        self.preview.assets()
    }

    #[must_use]
    pub fn preview_strip(&self) -> &PreviewStrip {
        &self.preview
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Adds an action; a Cancel action replaces any previous one and stays last.
    pub fn add_action(&mut self, action: Action) -> Vec<SheetEffect> {
        tracing::debug!(title = action.title(), style = ?action.style(), "adding action");
        self.actions.add(action);
        vec![
            SheetEffect::ReloadActionRows,
            SheetEffect::Relayout { animated: false },
        ]
    }

    /// Actions in display order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        self.actions.all()
    }

    /// Handles a tap on sheet row `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowIndexOutOfRange`] for the preview row or rows past
    /// the last action.
    pub fn activate_row(&mut self, row: usize) -> Result<Vec<SheetEffect>> {
        if !self.is_row_highlightable(row) {
            return Err(Error::RowIndexOutOfRange {
                row,
                count: self.row_count(),
            });
        }
        self.activate_action(row - 1)
    }

    /// Runs action `index` with the selection count and asks for dismissal.
    ///
    /// The handler runs synchronously; the host applies the returned
    /// [`SheetEffect::Dismiss`] after it has returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowIndexOutOfRange`] if there is no such action.
    pub fn activate_action(&mut self, index: usize) -> Result<Vec<SheetEffect>> {
        let action = self
            .actions
            .get(index)
            .ok_or_else(|| Error::RowIndexOutOfRange {
                row: index.saturating_add(1),
                count: self.row_count(),
            })?;

        let selected = self.selection.count();
        tracing::info!(title = action.title(), selected, "action activated");
        action.handle(selected);

        Ok(vec![SheetEffect::Dismiss])
    }

    /// Tap on the dimmed background: runs the Cancel action, if any, and asks
    /// for dismissal.
    pub fn cancel(&mut self) -> Vec<SheetEffect> {
        if let Some(cancel) = self.actions.cancel() {
            cancel.handle(self.selection.count());
        }
        vec![SheetEffect::Dismiss]
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[must_use]
    pub fn maximum_selection(&self) -> Option<usize> {
        self.selection.maximum().map(MaximumSelection::value)
    }

    /// Changes the selection cap. Lowering it evicts the oldest selections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a cap of zero; the current
    /// cap is kept.
    pub fn set_maximum_selection(&mut self, maximum: Option<usize>) -> Result<Vec<SheetEffect>> {
        let maximum = maximum.map(MaximumSelection::new).transpose()?;
        self.config.selection.maximum_selection = maximum.map(MaximumSelection::value);

        let mut effects: Vec<SheetEffect> = self
            .selection
            .set_maximum(maximum)
            .into_iter()
            .inspect(|index| tracing::debug!(index, "evicted by lowered selection cap"))
            .map(|index| SheetEffect::SelectionEvicted { index })
            .collect();

        if !effects.is_empty() {
            effects.push(SheetEffect::ReloadActionRows);
        }
        Ok(effects)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    /// Selected assets, oldest selection first.
    #[must_use]
    pub fn selected_assets(&self) -> Vec<Asset> {
        self.selection
            .indices()
            .filter_map(|index| self.preview.asset(index).copied())
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    #[must_use]
    pub fn is_enlarged(&self) -> bool {
        self.selection.is_enlarged()
    }

    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Selects preview image `index`.
    ///
    /// The first selection enlarges the preview; later ones scroll the strip
    /// to center the image. Selecting an already selected image does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetIndexOutOfRange`] if `index` addresses no asset.
    pub fn select_asset(&mut self, index: usize) -> Result<Vec<SheetEffect>> {
        self.check_asset_index(index)?;

        let SelectOutcome::Selected {
            evicted,
            enlarged_now,
        } = self.selection.select(index)
        else {
            tracing::debug!(index, "image already selected");
            return Ok(Vec::new());
        };

        let mut effects = Vec::new();

        if let Some(evicted) = evicted {
            tracing::debug!(evicted, "selection cap reached, dropping oldest");
            effects.push(SheetEffect::SelectionEvicted { index: evicted });
        }

        let pass = self.layout_pass();
        let offset = pass.centering_offset(index).unwrap_or(0.0);

        if enlarged_now {
            self.phase = SheetPhase::Enlarging;
            tracing::info!(height = pass.sheet.preview_height, "enlarging preview");
            effects.push(SheetEffect::ResizePreviewRow {
                height: pass.sheet.preview_height,
                duration: self.config.animation.enlarge_duration(),
                center_on: index,
                scroll_offset: offset,
            });
        } else {
            effects.push(SheetEffect::ScrollPreview {
                offset,
                animated: true,
            });
            effects.push(SheetEffect::ReloadActionRows);
        }
        self.preview.set_scroll_offset(offset);

        effects.push(SheetEffect::SetSelectionIndicator {
            index,
            selected: true,
        });
        Ok(effects)
    }

    /// Deselects preview image `index`. The preview stays enlarged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetIndexOutOfRange`] if `index` addresses no asset.
    pub fn deselect_asset(&mut self, index: usize) -> Result<Vec<SheetEffect>> {
        self.check_asset_index(index)?;

        if !self.selection.deselect(index) {
            return Ok(Vec::new());
        }

        Ok(vec![
            SheetEffect::ReloadActionRows,
            SheetEffect::SetSelectionIndicator {
                index,
                selected: false,
            },
        ])
    }

    /// Toggles the selection of `index`, as a tap on a preview cell does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetIndexOutOfRange`] if `index` addresses no asset.
    pub fn toggle_asset(&mut self, index: usize) -> Result<Vec<SheetEffect>> {
        if self.selection.is_selected(index) {
            self.deselect_asset(index)
        } else {
            self.select_asset(index)
        }
    }

    /// The host finished the enlarge animation.
    pub fn finish_enlarge_animation(&mut self) -> Vec<SheetEffect> {
        if self.phase != SheetPhase::Enlarging {
            return Vec::new();
        }

        self.phase = SheetPhase::Enlarged;
        self.preview.set_shows_selection_indicators(true);
        vec![
            SheetEffect::ReloadActionRows,
            SheetEffect::ShowSelectionIndicators,
        ]
    }

    fn check_asset_index(&self, index: usize) -> Result<()> {
        let count = self.preview.len();
        if index >= count {
            return Err(Error::AssetIndexOutOfRange { index, count });
        }
        Ok(())
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Updates the viewport the sheet is laid out in.
    pub fn set_viewport(&mut self, viewport: Size) -> Vec<SheetEffect> {
        if self.viewport == viewport {
            return Vec::new();
        }
        self.viewport = viewport;
        vec![SheetEffect::Relayout { animated: false }]
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Number of sheet rows: the preview row plus one per action.
    #[must_use]
    pub fn row_count(&self) -> usize {
        1 + self.actions.len()
    }

    /// Whether tapping `row` does anything. The preview row never highlights.
    #[must_use]
    pub fn is_row_highlightable(&self, row: usize) -> bool {
        row != 0 && row < self.row_count()
    }

    #[must_use]
    pub fn row_attributes(&self, row: usize) -> RowAttributes {
        let cancel_row = self.actions.index_of_cancel().map(|index| index + 1);
        self.resolver.attributes(row, self.row_count(), cancel_row)
    }

    /// Lays out the whole sheet for the current state and viewport.
    #[must_use]
    pub fn layout_pass(&self) -> LayoutPass {
        LayoutPass::compute(
            &self.geometry,
            &self.resolver,
            self.preview.assets(),
            &self.actions,
            self.selection.is_enlarged(),
            self.viewport,
        )
    }

    #[must_use]
    pub fn preview_height(&self) -> f32 {
        self.geometry.preview_height(
            self.preview.assets(),
            self.selection.is_enlarged(),
            self.viewport.width,
        )
    }

    /// Frame of the sheet, anchored to the bottom of the viewport.
    #[must_use]
    pub fn sheet_frame(&self) -> Rectangle {
        self.layout_pass().sheet.frame(self.viewport)
    }

    /// Provider for the outer row list.
    #[must_use]
    pub fn sheet_rows(&self) -> SheetRows<'_> {
        SheetRows {
            pass: self.layout_pass(),
            actions: &self.actions,
            selection: &self.selection,
            preview: &self.preview,
            tier: self.config.layout.platform_tier,
        }
    }

    /// Provider for the preview strip.
    #[must_use]
    pub fn preview_cells(&self) -> PreviewCells<'_> {
        PreviewCells {
            pass: self.layout_pass(),
            selection: &self.selection,
            preview: &self.preview,
        }
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Binds a rendered cell to preview image `index` and requests its bitmap.
    ///
    /// Burst captures are requested as full image data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetIndexOutOfRange`] if `index` addresses no asset.
    pub fn bind_preview_cell(&mut self, slot: CellSlot, index: usize) -> Result<ImageRequest> {
        let display_size = self.preview_cell_size(index)?;
        let ticket = self
            .preview
            .bind(slot, index)
            .ok_or(Error::AssetIndexOutOfRange {
                index,
                count: self.preview.len(),
            })?;
        let asset = *self.preview.asset(index).ok_or(Error::AssetIndexOutOfRange {
            index,
            count: self.preview.len(),
        })?;

        let delivery = DeliveryMode::Opportunistic;
        if asset.is_burst() {
            return Ok(ImageRequest {
                ticket,
                target_size: None,
                image: self.source.resolve_image_data(&asset, delivery),
            });
        }

        let target_size =
            GeometryEngine::target_bitmap_size(display_size, self.config.layout.screen_scale);
        Ok(ImageRequest {
            ticket,
            target_size: Some(target_size),
            image: self.source.resolve_image(&asset, target_size, delivery),
        })
    }

    /// Applies a resolved bitmap. Stale results for rebound cells are dropped.
    ///
    /// Returns whether the image was applied.
    pub fn complete_image(&mut self, ticket: ImageTicket, image: Option<Thumbnail>) -> bool {
        let applied = self.preview.complete(ticket, image);
        if !applied {
            tracing::debug!(
                slot = ticket.slot.0,
                asset = %ticket.asset_id,
                "dropping stale image completion"
            );
        }
        applied
    }

    /// Preview cell `index` is about to be shown: prefetch the next image.
    pub fn will_display_preview_cell(&self, index: usize) {
        let Some(next) = index.checked_add(1) else {
            return;
        };
        let Some(asset) = self.preview.asset(next) else {
            return;
        };
        if asset.is_burst() {
            return;
        }

        if let Ok(size) = self.preview_cell_size(next) {
            let target =
                GeometryEngine::target_bitmap_size(size, self.config.layout.screen_scale);
            self.source.prefetch(asset, target);
        }
    }

    /// Display size of preview cell `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetIndexOutOfRange`] if `index` addresses no asset.
    pub fn preview_cell_size(&self, index: usize) -> Result<Size> {
        let asset = self.preview.asset(index).ok_or(Error::AssetIndexOutOfRange {
            index,
            count: self.preview.len(),
        })?;

        let enlarged = self.selection.is_enlarged();
        let preview_height = self.preview_height();
        let insets = self.row_attributes(1).insets;
        Ok(self
            .geometry
            .cell_size(asset, preview_height, enlarged, self.viewport.width, &insets))
    }
}
