// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-memory image library (implements [`AssetSource`])
//!
//! Platform photo libraries are adapted in the host application.
//!
//! [`AssetSource`]: crate::application::port::AssetSource

pub mod memory;

pub use memory::MemoryAssetSource;
