// SPDX-License-Identifier: MPL-2.0
//! The horizontally scrolling preview strip embedded in the first sheet row.
//!
//! The renderer reuses a small pool of cell slots while scrolling. Each slot
//! is bound to one asset at a time, and bitmap requests are tagged with the
//! slot and asset so a late completion never lands in a slot that has since
//! been rebound to another image.

use crate::domain::{Asset, AssetId, Thumbnail};
use futures_util::future::BoxFuture;
use iced_core::Size;
use std::collections::HashMap;
use std::fmt;

/// Identity of a reusable rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellSlot(pub usize);

/// Tag attached to a bitmap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageTicket {
    pub slot: CellSlot,
    pub asset_id: AssetId,
}

/// A pending bitmap request for a preview cell.
///
/// Await `image` on the controller's thread, then pass the result to
/// [`SheetController::complete_image`](super::SheetController::complete_image)
/// together with `ticket`.
pub struct ImageRequest {
    pub ticket: ImageTicket,
    /// Requested pixel size; `None` for full-data (burst) requests.
    pub target_size: Option<Size>,
    pub image: BoxFuture<'static, Option<Thumbnail>>,
}

impl fmt::Debug for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRequest")
            .field("ticket", &self.ticket)
            .field("target_size", &self.target_size)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct SlotBinding {
    asset_id: AssetId,
    image: Option<Thumbnail>,
}

/// Assets shown in the strip plus the state of its rendered cells.
#[derive(Debug, Clone, Default)]
pub struct PreviewStrip {
    assets: Vec<Asset>,
    slots: HashMap<CellSlot, SlotBinding>,
    shows_selection_indicators: bool,
    scroll_offset: f32,
}

impl PreviewStrip {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the assets. Every slot binding is dropped.
    pub fn set_assets(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
        self.slots.clear();
        self.scroll_offset = 0.0;
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn asset(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Binds `slot` to the asset at `index`.
    ///
    /// Rebinding a slot to a different asset discards its image. Returns the
    /// ticket for a bitmap request, or `None` if `index` is out of range.
    pub fn bind(&mut self, slot: CellSlot, index: usize) -> Option<ImageTicket> {
        let asset_id = self.assets.get(index)?.id();

        let binding = self.slots.entry(slot).or_insert(SlotBinding {
            asset_id,
            image: None,
        });
        if binding.asset_id != asset_id {
            binding.asset_id = asset_id;
            binding.image = None;
        }

        Some(ImageTicket { slot, asset_id })
    }

    /// Stores a resolved bitmap if the ticket's slot still shows its asset.
    ///
    /// Returns whether the image was applied. A `None` image leaves the slot
    /// in its placeholder state.
    pub fn complete(&mut self, ticket: ImageTicket, image: Option<Thumbnail>) -> bool {
        match self.slots.get_mut(&ticket.slot) {
            Some(binding) if binding.asset_id == ticket.asset_id => {
                if image.is_some() {
                    binding.image = image;
                }
                true
            }
            _ => false,
        }
    }

    /// Asset currently bound to `slot`.
    #[must_use]
    pub fn bound_asset(&self, slot: CellSlot) -> Option<AssetId> {
        self.slots.get(&slot).map(|binding| binding.asset_id)
    }

    /// Image shown by `slot`, if resolved.
    #[must_use]
    pub fn slot_image(&self, slot: CellSlot) -> Option<&Thumbnail> {
        self.slots.get(&slot)?.image.as_ref()
    }

    /// Any resolved image currently shown for `asset_id`.
    #[must_use]
    pub fn image_for(&self, asset_id: AssetId) -> Option<&Thumbnail> {
        self.slots
            .values()
            .filter(|binding| binding.asset_id == asset_id)
            .find_map(|binding| binding.image.as_ref())
    }

    #[must_use]
    pub fn shows_selection_indicators(&self) -> bool {
        self.shows_selection_indicators
    }

    pub fn set_shows_selection_indicators(&mut self, shows: bool) {
        self.shows_selection_indicators = shows;
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }
}
