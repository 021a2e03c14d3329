// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boothmap_directory --heading-base-level=0

//! Boothmap Directory: search, filter and grouping over a booth catalog.
//!
//! [`DirectoryIndex`] derives views of a
//! [`BoothCatalog`](boothmap_catalog::BoothCatalog) for a directory panel:
//!
//! - [`DirectoryFilter`] keeps every booth, only assigned booths or only
//!   available booths.
//! - [`DirectoryQuery`] adds free text matched case-insensitively against the
//!   booth number, the exhibitor name and representative names. Text that is
//!   blank after trimming matches everything.
//! - [`DirectoryIndex::view`] sorts matches by booth number and groups them
//!   into "Main Tent" and "Vendor Tents" sections, dropping empty ones.
//! - [`FilterCounts`] are always computed over the whole catalog.
//!
//! Results are recomputed on every call. Nothing is cached.
//!
//! ## Minimal example
//!
//! ```rust
//! use boothmap_catalog::builtin;
//! use boothmap_directory::{DirectoryFilter, DirectoryIndex, DirectoryQuery};
//!
//! let catalog = builtin::catalog().unwrap();
//! let index = DirectoryIndex::new(&catalog);
//!
//! let query = DirectoryQuery::new("john", DirectoryFilter::Assigned);
//! let view = index.view(&query, None);
//! let ids: Vec<u32> = view.rows().map(|row| row.id.get()).collect();
//! assert_eq!(ids, [1, 2]);
//! assert_eq!(view.counts.all, 43);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod query;
mod view;

pub use filter::{DirectoryFilter, ParseFilterError};
pub use query::DirectoryQuery;
pub use view::{
    AVAILABLE_LABEL, DirectoryIndex, DirectoryRow, DirectorySection, DirectoryView, EMPTY_MESSAGE,
    FilterCounts, SectionKind,
};
