// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::{BoothId, BoothRecord, ExhibitorRecord};

/// Error returned by [`CatalogBuilder::build`] and position validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two booth records share an identifier.
    DuplicateBooth(BoothId),
    /// An exhibitor or position refers to a booth that does not exist.
    UnknownBooth(BoothId),
    /// A booth was assigned more than one exhibitor.
    DuplicateAssignment(BoothId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBooth(id) => write!(f, "booth {id} is defined more than once"),
            Self::UnknownBooth(id) => write!(f, "booth {id} does not exist"),
            Self::DuplicateAssignment(id) => {
                write!(f, "booth {id} is assigned more than one exhibitor")
            }
        }
    }
}

impl core::error::Error for CatalogError {}

/// A booth joined with its exhibitor at lookup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoothEntry<'a> {
    /// The booth.
    pub booth: &'a BoothRecord,
    /// Its exhibitor, or `None` if the booth is still available.
    pub exhibitor: Option<&'a ExhibitorRecord>,
}

impl BoothEntry<'_> {
    /// Returns `true` if an exhibitor is assigned.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.exhibitor.is_some()
    }
}

/// Immutable set of booths plus the booth → exhibitor assignment.
///
/// Booths are kept sorted by identifier. The catalog is built once through
/// [`CatalogBuilder`] and only handed out by shared reference afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoothCatalog {
    booths: Vec<BoothRecord>,
    exhibitors: HashMap<BoothId, ExhibitorRecord>,
}

impl BoothCatalog {
    /// All booths, ascending by identifier.
    #[must_use]
    pub fn booths(&self) -> &[BoothRecord] {
        &self.booths
    }

    /// Number of booths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.booths.len()
    }

    /// Returns `true` if the catalog has no booths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    /// Looks up a booth.
    #[must_use]
    pub fn booth(&self, id: BoothId) -> Option<&BoothRecord> {
        self.booths
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|idx| &self.booths[idx])
    }

    /// Looks up the exhibitor assigned to a booth.
    #[must_use]
    pub fn exhibitor(&self, id: BoothId) -> Option<&ExhibitorRecord> {
        self.exhibitors.get(&id)
    }

    /// Looks up a booth together with its exhibitor.
    #[must_use]
    pub fn entry(&self, id: BoothId) -> Option<BoothEntry<'_>> {
        self.booth(id).map(|booth| self.join(booth))
    }

    /// All booths with their exhibitors, ascending by identifier.
    pub fn entries(&self) -> impl Iterator<Item = BoothEntry<'_>> + '_ {
        self.booths.iter().map(|booth| self.join(booth))
    }

    /// Number of booths with an exhibitor.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.exhibitors.len()
    }

    fn join<'a>(&'a self, booth: &'a BoothRecord) -> BoothEntry<'a> {
        BoothEntry {
            booth,
            exhibitor: self.exhibitors.get(&booth.id),
        }
    }
}

/// Collects booths and assignments, then validates them into a [`BoothCatalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    booths: Vec<BoothRecord>,
    assignments: Vec<(BoothId, ExhibitorRecord)>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a booth.
    pub fn push_booth(&mut self, booth: BoothRecord) -> &mut Self {
        self.booths.push(booth);
        self
    }

    /// Assigns an exhibitor to a booth.
    pub fn assign(&mut self, id: BoothId, exhibitor: ExhibitorRecord) -> &mut Self {
        self.assignments.push((id, exhibitor));
        self
    }

    /// Validates and freezes the catalog.
    ///
    /// Fails on duplicate booth identifiers, on assignments to unknown booths
    /// and on booths assigned twice.
    pub fn build(self) -> Result<BoothCatalog, CatalogError> {
        let mut booths = self.booths;
        booths.sort_by_key(|b| b.id);
        if let Some(pair) = booths.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(CatalogError::DuplicateBooth(pair[0].id));
        }

        let mut exhibitors = HashMap::with_capacity(self.assignments.len());
        for (id, exhibitor) in self.assignments {
            if booths.binary_search_by_key(&id, |b| b.id).is_err() {
                return Err(CatalogError::UnknownBooth(id));
            }
            if exhibitors.insert(id, exhibitor).is_some() {
                return Err(CatalogError::DuplicateAssignment(id));
            }
        }

        Ok(BoothCatalog { booths, exhibitors })
    }
}
