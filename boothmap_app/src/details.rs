// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boothmap_catalog::{BoothId, BoothSize, ExhibitorRecord, Zone};

use crate::dataset::Venue;

/// Shown when no booth is selected.
pub const NO_SELECTION_MESSAGE: &str = "Select a booth to view details";

/// Shown for a booth without an exhibitor.
pub const AVAILABLE_MESSAGE: &str = "No startup assigned yet";

/// Content of the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailView<'a> {
    /// Nothing selected (or the selection is not in the catalog).
    NoSelection,
    /// Selected booth has no exhibitor.
    Available {
        /// Booth number.
        id: BoothId,
        /// Booth size.
        size: BoothSize,
        /// Where the booth is.
        zone: Zone,
    },
    /// Selected booth and its exhibitor.
    Exhibitor {
        /// Booth number.
        id: BoothId,
        /// Booth size.
        size: BoothSize,
        /// Where the booth is.
        zone: Zone,
        /// Exhibitor record.
        exhibitor: &'a ExhibitorRecord,
    },
}

impl<'a> DetailView<'a> {
    /// Resolves the selection against the venue.
    #[must_use]
    pub fn new(venue: &'a Venue, selected: Option<BoothId>) -> Self {
        let Some(entry) = selected.and_then(|id| venue.entry(id)) else {
            return Self::NoSelection;
        };
        let booth = entry.booth;
        match entry.exhibitor {
            Some(exhibitor) => Self::Exhibitor {
                id: booth.id,
                size: booth.size,
                zone: booth.zone,
                exhibitor,
            },
            None => Self::Available {
                id: booth.id,
                size: booth.size,
                zone: booth.zone,
            },
        }
    }

    /// Selected booth number.
    #[must_use]
    pub fn booth(&self) -> Option<BoothId> {
        match *self {
            Self::NoSelection => None,
            Self::Available { id, .. } | Self::Exhibitor { id, .. } => Some(id),
        }
    }

    /// Panel heading, `"Booth N"`, when something is selected.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        self.booth().map(|id| format!("Booth {id}"))
    }
}

/// The detail panel: whether it is open plus what it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailPanel<'a> {
    /// Whether the panel is slid in.
    pub open: bool,
    /// Panel content.
    pub view: DetailView<'a>,
}
