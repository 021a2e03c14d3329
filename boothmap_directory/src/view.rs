// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use boothmap_catalog::{BoothCatalog, BoothEntry, BoothId, BoothSize};

use crate::DirectoryQuery;

/// Message shown when a query matches nothing.
pub const EMPTY_MESSAGE: &str = "No booths found matching your search.";

/// Label shown in place of an exhibitor name for unassigned booths.
pub const AVAILABLE_LABEL: &str = "Available";

/// Number of booths per filter mode, computed over the whole catalog.
///
/// Counts ignore the search text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    /// Every booth.
    pub all: usize,
    /// Booths with an exhibitor.
    pub assigned: usize,
    /// Booths without an exhibitor.
    pub available: usize,
}

/// Section a row is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The primary hall.
    MainTent,
    /// Every tent outside the primary hall.
    VendorTents,
}

impl SectionKind {
    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MainTent => "Main Tent",
            Self::VendorTents => "Vendor Tents",
        }
    }

    fn of(entry: &BoothEntry<'_>) -> Self {
        if entry.booth.zone.is_main() {
            Self::MainTent
        } else {
            Self::VendorTents
        }
    }
}

/// One listed booth, flattened for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryRow<'a> {
    /// Booth number.
    pub id: BoothId,
    /// Booth size.
    pub size: BoothSize,
    /// Exhibitor name, or [`AVAILABLE_LABEL`].
    pub title: &'a str,
    /// First representative and the number of others.
    pub representatives: Option<(&'a str, usize)>,
    /// Whether an exhibitor is assigned.
    pub assigned: bool,
    /// Whether this is the currently selected booth.
    pub selected: bool,
}

impl<'a> DirectoryRow<'a> {
    fn new(entry: BoothEntry<'a>, selected: Option<BoothId>) -> Self {
        let id = entry.booth.id;
        Self {
            id,
            size: entry.booth.size,
            title: entry.exhibitor.map_or(AVAILABLE_LABEL, |ex| ex.name.as_str()),
            representatives: entry.exhibitor.and_then(|ex| ex.representative_summary()),
            assigned: entry.is_assigned(),
            selected: selected == Some(id),
        }
    }
}

/// Rows of one section, ascending by booth number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectorySection<'a> {
    /// Which section this is.
    pub kind: SectionKind,
    /// Rows, never empty.
    pub rows: Vec<DirectoryRow<'a>>,
}

/// Everything the directory panel shows for one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryView<'a> {
    /// Non-empty sections, main tent first.
    pub sections: Vec<DirectorySection<'a>>,
    /// Counts for the filter buttons.
    pub counts: FilterCounts,
}

impl<'a> DirectoryView<'a> {
    /// Returns `true` when no booth matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of listed booths across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// The empty-state message, when nothing matched.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }

    /// All rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &DirectoryRow<'a>> + '_ {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }
}

/// Read-only query interface over a [`BoothCatalog`].
///
/// Every result is a pure function of the catalog and the query; nothing is
/// cached between calls.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryIndex<'a> {
    catalog: &'a BoothCatalog,
}

impl<'a> DirectoryIndex<'a> {
    /// Wraps a catalog.
    #[must_use]
    pub fn new(catalog: &'a BoothCatalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &'a BoothCatalog {
        self.catalog
    }

    /// Entries passing `query`, ascending by booth number.
    #[must_use]
    pub fn filtered(&self, query: &DirectoryQuery) -> Vec<BoothEntry<'a>> {
        let matcher = query.matcher();
        self.catalog
            .entries()
            .filter(|e| query.filter.accepts(e) && matcher.matches(e))
            .collect()
    }

    /// Per-filter counts over the whole catalog.
    #[must_use]
    pub fn counts(&self) -> FilterCounts {
        let all = self.catalog.len();
        let assigned = self.catalog.assigned_count();
        FilterCounts {
            all,
            assigned,
            available: all - assigned,
        }
    }

    /// Builds the grouped panel contents for `query`, marking `selected`.
    #[must_use]
    pub fn view(&self, query: &DirectoryQuery, selected: Option<BoothId>) -> DirectoryView<'a> {
        let mut main = Vec::new();
        let mut vendor = Vec::new();
        for entry in self.filtered(query) {
            let row = DirectoryRow::new(entry, selected);
            match SectionKind::of(&entry) {
                SectionKind::MainTent => main.push(row),
                SectionKind::VendorTents => vendor.push(row),
            }
        }

        let sections = [(SectionKind::MainTent, main), (SectionKind::VendorTents, vendor)]
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(kind, rows)| DirectorySection { kind, rows })
            .collect();

        DirectoryView {
            sections,
            counts: self.counts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use boothmap_catalog::{
        BoothCatalog, BoothId, BoothRecord, BoothSize, CatalogBuilder, ExhibitorRecord, Zone,
    };

    use super::{DirectoryIndex, EMPTY_MESSAGE, SectionKind};
    use crate::{DirectoryFilter, DirectoryQuery};

    fn id(n: u32) -> BoothId {
        BoothId::new(n).unwrap()
    }

    fn catalog() -> BoothCatalog {
        let mut builder = CatalogBuilder::new();
        builder
            .push_booth(BoothRecord::new(id(40), BoothSize::Twenty, Zone::OutsideBottom, 6))
            .push_booth(BoothRecord::new(id(2), BoothSize::Ten, Zone::MainTent, 1))
            .push_booth(BoothRecord::new(id(1), BoothSize::Fifteen, Zone::MainTent, 1))
            .assign(
                id(1),
                ExhibitorRecord::new("Acme", "", "https://example.com/acme")
                    .with_representative("Ada")
                    .with_representative("Grace"),
            )
            .assign(id(40), ExhibitorRecord::new("Outdoor Co", "", "https://example.com/o"));
        builder.build().unwrap()
    }

    #[test]
    fn view_groups_sorts_and_flattens() {
        let catalog = catalog();
        let index = DirectoryIndex::new(&catalog);
        let view = index.view(&DirectoryQuery::default(), Some(id(2)));

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].kind, SectionKind::MainTent);
        assert_eq!(view.sections[1].kind.title(), "Vendor Tents");

        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, id(1));
        assert_eq!(rows[0].title, "Acme");
        assert_eq!(rows[0].representatives, Some(("Ada", 1)));
        assert!(!rows[0].selected);
        assert_eq!(rows[1].title, "Available");
        assert!(rows[1].selected);
        assert_eq!(rows[2].representatives, None);
        assert_eq!(view.empty_message(), None);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let catalog = catalog();
        let index = DirectoryIndex::new(&catalog);
        let view = index.view(&DirectoryQuery::new("outdoor", DirectoryFilter::All), None);
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].kind, SectionKind::VendorTents);
    }

    #[test]
    fn counts_ignore_search() {
        let catalog = catalog();
        let index = DirectoryIndex::new(&catalog);
        let view = index.view(&DirectoryQuery::new("nothing", DirectoryFilter::Assigned), None);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.empty_message(), Some(EMPTY_MESSAGE));
        assert_eq!(view.counts.all, 3);
        assert_eq!(view.counts.assigned, 2);
        assert_eq!(view.counts.available, 1);
    }
}
