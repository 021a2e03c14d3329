// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration with defaults for every field.
//!
//! ```toml
//! [viewport]
//! max_scale = 4.0
//!
//! [pan]
//! duration_ms = 500
//! ```

mod loader;
mod schema;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{load_from_path, load_from_str, load_or_default};
pub use schema::{
    ContentSection, InteractionSection, PanSection, StartupSection, VenueConfig, ViewportSection,
};
