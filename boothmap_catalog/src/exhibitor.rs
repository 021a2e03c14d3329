// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::SmallVec;

/// Representative names; most exhibitors send one or two people.
pub type Representatives = SmallVec<[String; 2]>;

/// Company assigned to a booth.
///
/// Exhibitors are looked up by booth identifier in the
/// [`BoothCatalog`](crate::BoothCatalog); booths do not own them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExhibitorRecord {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Canonical website URL.
    pub website: String,
    /// Optional slide deck URL.
    pub slide_deck: Option<String>,
    /// Representatives in display order. At least one is expected, not enforced.
    pub representatives: Representatives,
}

impl ExhibitorRecord {
    /// Creates an exhibitor with no slide deck and no representatives.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            website: website.into(),
            slide_deck: None,
            representatives: SmallVec::new(),
        }
    }

    /// Sets the slide deck URL.
    #[must_use]
    pub fn with_slide_deck(mut self, url: impl Into<String>) -> Self {
        self.slide_deck = Some(url.into());
        self
    }

    /// Appends a representative.
    #[must_use]
    pub fn with_representative(mut self, name: impl Into<String>) -> Self {
        self.representatives.push(name.into());
        self
    }

    /// First representative and the number of others, if any are listed.
    #[must_use]
    pub fn representative_summary(&self) -> Option<(&str, usize)> {
        let (first, rest) = self.representatives.split_first()?;
        Some((first.as_str(), rest.len()))
    }
}
