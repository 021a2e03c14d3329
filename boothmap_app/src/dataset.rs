// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The booth dataset: catalog plus positions.
//!
//! The built-in venue is the default. A TOML file with `[[booths]]`,
//! `[[exhibitors]]` and `[[positions]]` tables can replace it:
//!
//! ```toml
//! [[booths]]
//! id = 1
//! size = "15x15"
//! zone = "main-tent"
//! row = 1
//!
//! [[exhibitors]]
//! booth = 1
//! name = "Acme"
//! description = "Widgets"
//! website = "https://example.com/acme"
//! representatives = ["Ada"]
//!
//! [[positions]]
//! booth = 1
//! x = 55.0
//! y = 95.0
//! ```

use std::path::Path;

use boothmap_catalog::{
    BoothCatalog, BoothEntry, BoothId, BoothPositions, BoothRecord, CatalogBuilder,
    ExhibitorRecord, builtin,
};
use kurbo::{Point, Rect};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::DatasetError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default)]
    booths: Vec<BoothRow>,
    #[serde(default)]
    exhibitors: Vec<ExhibitorRow>,
    #[serde(default)]
    positions: Vec<PositionRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoothRow {
    id: u32,
    size: String,
    zone: String,
    #[serde(default)]
    row: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExhibitorRow {
    booth: u32,
    name: String,
    #[serde(default)]
    description: String,
    website: String,
    #[serde(default)]
    slide_deck: Option<String>,
    #[serde(default)]
    representatives: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PositionRow {
    booth: u32,
    x: f64,
    y: f64,
}

/// A validated booth dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    catalog: BoothCatalog,
    positions: BoothPositions,
}

impl Venue {
    /// Pairs a catalog with positions, rejecting positions of unknown booths.
    ///
    /// Booths without a position are allowed; they cannot be drawn or panned to.
    pub fn new(catalog: BoothCatalog, positions: BoothPositions) -> Result<Self, DatasetError> {
        positions.validate_against(&catalog)?;
        let missing = positions.missing(&catalog);
        if !missing.is_empty() {
            warn!(count = missing.len(), "booths without a map position");
        }
        Ok(Self { catalog, positions })
    }

    /// The venue shipped with the application.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(builtin::catalog()?, builtin::positions())
    }

    /// Parses a dataset from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile =
            toml::from_str(content).map_err(|e| DatasetError::Parse(e.to_string()))?;

        let mut builder = CatalogBuilder::new();
        for row in file.booths {
            let id = booth_id(row.id)?;
            let size = row
                .size
                .parse()
                .map_err(|e| DatasetError::InvalidRecord(format!("booth {id}: {e}")))?;
            let zone = row
                .zone
                .parse()
                .map_err(|e| DatasetError::InvalidRecord(format!("booth {id}: {e}")))?;
            builder.push_booth(BoothRecord::new(id, size, zone, row.row));
        }
        for row in file.exhibitors {
            let id = booth_id(row.booth)?;
            let mut exhibitor = ExhibitorRecord::new(row.name, row.description, row.website);
            if let Some(deck) = row.slide_deck {
                exhibitor = exhibitor.with_slide_deck(deck);
            }
            for rep in row.representatives {
                exhibitor = exhibitor.with_representative(rep);
            }
            builder.assign(id, exhibitor);
        }

        let mut positions = BoothPositions::new();
        for row in file.positions {
            let id = booth_id(row.booth)?;
            if !(row.x.is_finite() && row.y.is_finite()) {
                return Err(DatasetError::InvalidRecord(format!(
                    "booth {id}: position is not finite"
                )));
            }
            if positions.insert(id, Point::new(row.x, row.y)).is_some() {
                return Err(DatasetError::InvalidRecord(format!(
                    "booth {id}: position given more than once"
                )));
            }
        }

        Self::new(builder.build()?, positions)
    }

    /// Reads and parses a dataset file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let venue = Self::from_toml_str(&content)?;
        info!(
            booths = venue.catalog.len(),
            assigned = venue.catalog.assigned_count(),
            "loaded dataset from {}",
            path.display()
        );
        Ok(venue)
    }

    /// Loads `path` when given, otherwise the built-in venue.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// The booth catalog.
    #[must_use]
    pub fn catalog(&self) -> &BoothCatalog {
        &self.catalog
    }

    /// Booth centers in content coordinates.
    #[must_use]
    pub fn positions(&self) -> &BoothPositions {
        &self.positions
    }

    /// Looks up a booth with its exhibitor.
    #[must_use]
    pub fn entry(&self, id: BoothId) -> Option<BoothEntry<'_>> {
        self.catalog.entry(id)
    }

    /// Content-space rectangle of a booth, if it has a position.
    #[must_use]
    pub fn footprint(&self, id: BoothId) -> Option<Rect> {
        let booth = self.catalog.booth(id)?;
        self.positions.footprint(id, booth.size)
    }

    /// The booth whose footprint contains the content point `pt`.
    #[must_use]
    pub fn booth_at(&self, pt: Point) -> Option<BoothId> {
        self.catalog
            .booths()
            .iter()
            .find(|b| {
                self.positions
                    .footprint(b.id, b.size)
                    .is_some_and(|r| r.contains(pt))
            })
            .map(|b| b.id)
    }
}

fn booth_id(raw: u32) -> Result<BoothId, DatasetError> {
    BoothId::new(raw)
        .ok_or_else(|| DatasetError::InvalidRecord("booth identifiers start at 1".into()))
}
