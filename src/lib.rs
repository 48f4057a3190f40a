// SPDX-License-Identifier: MPL-2.0
//! `picker_sheet` is the layout and selection engine behind an image picker sheet.
//!
//! The sheet stacks a horizontally scrolling preview strip on top of a list of
//! user-defined actions ("Take Photo", "Cancel", ...). This crate decides the
//! size and rounded-corner styling of every row and cell, tracks which images
//! are selected, and tells the rendering layer what changed. Drawing, asset
//! library access and presentation animations are left to the host.

#![doc(html_root_url = "https://docs.rs/picker_sheet/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_utils;

pub use application::sheet::{SheetController, SheetEffect};
pub use config::SheetConfig;
pub use error::{Error, Result};
