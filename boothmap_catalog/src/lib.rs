// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boothmap_catalog --heading-base-level=0

//! Boothmap Catalog: the static data behind a venue map.
//!
//! - [`BoothRecord`]: identifier, [`BoothSize`], [`Zone`] and layout row.
//! - [`ExhibitorRecord`]: the company assigned to a booth.
//! - [`BoothCatalog`]: all booths plus the booth → exhibitor assignment,
//!   built and validated once through [`CatalogBuilder`].
//! - [`BoothPositions`]: booth centers in map content coordinates, used for
//!   drawing, hit testing and panning.
//! - [`builtin`]: the venue shipped with the application.
//!
//! Exhibitors are not embedded in booths. They are resolved by identifier at
//! lookup time ([`BoothCatalog::entry`]), which lets booths exist without an
//! exhibitor.
//!
//! ## Minimal example
//!
//! ```rust
//! use boothmap_catalog::{BoothId, BoothRecord, BoothSize, CatalogBuilder, ExhibitorRecord, Zone};
//!
//! let one = BoothId::new(1).unwrap();
//! let two = BoothId::new(2).unwrap();
//!
//! let mut builder = CatalogBuilder::new();
//! builder
//!     .push_booth(BoothRecord::new(one, BoothSize::Fifteen, Zone::MainTent, 1))
//!     .push_booth(BoothRecord::new(two, BoothSize::Ten, Zone::MainTent, 1))
//!     .assign(one, ExhibitorRecord::new("Acme", "Widgets", "https://example.com/acme"));
//! let catalog = builder.build().unwrap();
//!
//! assert!(catalog.entry(one).unwrap().is_assigned());
//! assert!(!catalog.entry(two).unwrap().is_assigned());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod booth;
pub mod builtin;
mod catalog;
mod exhibitor;
mod positions;

pub use booth::{BoothId, BoothRecord, BoothSize, ParseAttributeError, Zone};
pub use catalog::{BoothCatalog, BoothEntry, CatalogBuilder, CatalogError};
pub use exhibitor::{ExhibitorRecord, Representatives};
pub use positions::{BoothPositions, footprint_at};
