// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and orchestration.
//!
//! - [`port`]: Trait definitions for the external asset source
//! - [`layout`]: Geometry and row-attribute computation
//! - [`sheet`]: The sheet controller and the data it exposes to renderers
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Rendering layers consume snapshots and effects from [`sheet`]

pub mod layout;
pub mod port;
pub mod sheet;
