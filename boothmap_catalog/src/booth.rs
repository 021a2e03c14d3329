// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Booth identifiers and static booth attributes.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

/// Positive booth number, unique within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoothId(NonZeroU32);

impl BoothId {
    /// Creates an identifier, rejecting zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the booth number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for BoothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`BoothSize`] or [`Zone`] from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAttributeError {
    kind: &'static str,
}

impl fmt::Display for ParseAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized booth {}", self.kind)
    }
}

impl core::error::Error for ParseAttributeError {}

/// Physical booth footprint, in feet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoothSize {
    /// 6' x 6'.
    Six,
    /// 10' x 10'.
    Ten,
    /// 15' x 15'.
    Fifteen,
    /// 20' x 20' vendor tent.
    Twenty,
}

impl BoothSize {
    /// All sizes, smallest first.
    pub const ALL: [Self; 4] = [Self::Six, Self::Ten, Self::Fifteen, Self::Twenty];

    /// Short label, e.g. `"10x10"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Six => "6x6",
            Self::Ten => "10x10",
            Self::Fifteen => "15x15",
            Self::Twenty => "20x20",
        }
    }

    /// Edge length in feet.
    #[must_use]
    pub const fn edge_feet(self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }

    /// Edge length of the drawn square in map content units.
    #[must_use]
    pub const fn footprint_edge(self) -> f64 {
        match self {
            Self::Six => 45.0,
            Self::Ten => 80.0,
            Self::Fifteen => 100.0,
            Self::Twenty => 110.0,
        }
    }
}

impl fmt::Display for BoothSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BoothSize {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.label() == s)
            .ok_or(ParseAttributeError { kind: "size" })
    }
}

/// Area of the venue a booth belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The primary hall.
    MainTent,
    /// Vendor tents along the bottom edge.
    OutsideBottom,
    /// Vendor tents along the right edge.
    OutsideRight,
}

impl Zone {
    /// All zones in map order.
    pub const ALL: [Self; 3] = [Self::MainTent, Self::OutsideBottom, Self::OutsideRight];

    /// Stable machine label, e.g. `"main-tent"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MainTent => "main-tent",
            Self::OutsideBottom => "outside-bottom",
            Self::OutsideRight => "outside-right",
        }
    }

    /// Returns `true` for the primary hall, `false` for vendor tents.
    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, Self::MainTent)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.label() == s)
            .ok_or(ParseAttributeError { kind: "zone" })
    }
}

/// Immutable booth attributes. The exhibitor, if any, lives in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoothRecord {
    /// Booth number.
    pub id: BoothId,
    /// Physical size.
    pub size: BoothSize,
    /// Venue area.
    pub zone: Zone,
    /// Layout row, used to group booths on the map.
    pub row: u8,
}

impl BoothRecord {
    /// Creates a booth record.
    #[must_use]
    pub const fn new(id: BoothId, size: BoothSize, zone: Zone, row: u8) -> Self {
        Self {
            id,
            size,
            zone,
            row,
        }
    }
}
