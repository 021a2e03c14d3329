// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use boothmap_catalog::BoothEntry;

/// Which booths the directory lists, before search is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DirectoryFilter {
    /// Every booth.
    #[default]
    All,
    /// Booths with an exhibitor.
    Assigned,
    /// Booths without an exhibitor.
    Available,
}

impl DirectoryFilter {
    /// All filters in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Assigned, Self::Available];

    /// Stable label, also accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Assigned => "assigned",
            Self::Available => "available",
        }
    }

    /// Returns `true` if `entry` passes the filter.
    #[must_use]
    pub fn accepts(self, entry: &BoothEntry<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Assigned => entry.is_assigned(),
            Self::Available => !entry.is_assigned(),
        }
    }
}

impl fmt::Display for DirectoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a filter label is not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFilterError;

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `all`, `assigned`, `available`")
    }
}

impl core::error::Error for ParseFilterError {}

impl FromStr for DirectoryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(s))
            .ok_or(ParseFilterError)
    }
}
