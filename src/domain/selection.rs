// SPDX-License-Identifier: MPL-2.0
//! Selected preview images, capped with oldest-first eviction.

use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Maximum number of images selected at once, guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaximumSelection(usize);

impl MaximumSelection {
    /// Creates a cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a cap of zero.
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidConfiguration(
                "maximum_selection must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

/// Result of a [`SelectionState::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The index was added.
    Selected {
        /// Oldest index dropped to stay within the cap.
        evicted: Option<usize>,
        /// Whether this call flipped the state to enlarged.
        enlarged_now: bool,
    },
    /// The index was already selected; nothing changed.
    AlreadySelected,
}

/// Which asset indices are selected, in selection order (oldest first).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    order: VecDeque<usize>,
    maximum: Option<MaximumSelection>,
    enlarged: bool,
}

impl SelectionState {
    #[must_use]
    pub fn new(maximum: Option<MaximumSelection>) -> Self {
        Self {
            maximum,
            ..Self::default()
        }
    }

    /// Selects `index`, evicting the oldest selection first if the cap is reached.
    ///
    /// The first successful call permanently marks the state as enlarged.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.is_selected(index) {
            return SelectOutcome::AlreadySelected;
        }

        let evicted = match self.maximum {
            Some(maximum) if self.order.len() >= maximum.value() => self.order.pop_front(),
            _ => None,
        };

        self.order.push_back(index);

        let enlarged_now = !self.enlarged;
        self.enlarged = true;

        SelectOutcome::Selected {
            evicted,
            enlarged_now,
        }
    }

    /// Removes `index` if selected. Returns whether anything changed.
    ///
    /// Never resets the enlarged flag.
    pub fn deselect(&mut self, index: usize) -> bool {
        match self.order.iter().position(|&selected| selected == index) {
            Some(position) => {
                self.order.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    /// Selected indices, oldest first.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn is_enlarged(&self) -> bool {
        self.enlarged
    }

    #[must_use]
    pub fn maximum(&self) -> Option<MaximumSelection> {
        self.maximum
    }

    /// Changes the cap. Returns the indices evicted to fit the new cap, oldest first.
    pub fn set_maximum(&mut self, maximum: Option<MaximumSelection>) -> Vec<usize> {
        self.maximum = maximum;
        let Some(maximum) = maximum else {
            return Vec::new();
        };

        let excess = self.order.len().saturating_sub(maximum.value());
        self.order.drain(..excess).collect()
    }

    /// Drops every selection that no longer addresses one of `asset_count` assets.
    pub fn retain_below(&mut self, asset_count: usize) {
        self.order.retain(|&index| index < asset_count);
    }

    /// Clears the selection and returns to the collapsed state.
    pub fn reset(&mut self) {
        self.order.clear();
        self.enlarged = false;
    }
}
