// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Booth positions in map content coordinates.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::{BoothCatalog, BoothId, BoothSize, CatalogError};

/// Maps booth identifiers to the center of the booth in content space.
///
/// Booths without a registered position are expected while data is being
/// entered; callers treat a missing entry as "cannot pan there" rather than
/// as an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoothPositions {
    centers: HashMap<BoothId, Point>,
}

impl BoothPositions {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the center of `id`.
    pub fn insert(&mut self, id: BoothId, center: Point) -> Option<Point> {
        self.centers.insert(id, center)
    }

    /// Returns the center of `id`, if registered.
    #[must_use]
    pub fn get(&self, id: BoothId) -> Option<Point> {
        self.centers.get(&id).copied()
    }

    /// Returns `true` if `id` has a position.
    #[must_use]
    pub fn contains(&self, id: BoothId) -> bool {
        self.centers.contains_key(&id)
    }

    /// Number of registered positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Iterates over registered positions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (BoothId, Point)> + '_ {
        self.centers.iter().map(|(id, pt)| (*id, *pt))
    }

    /// Content-space square of a booth of `size` centered on its position.
    #[must_use]
    pub fn footprint(&self, id: BoothId, size: BoothSize) -> Option<Rect> {
        self.get(id).map(|center| footprint_at(center, size))
    }

    /// Checks that every position refers to a booth of `catalog`.
    pub fn validate_against(&self, catalog: &BoothCatalog) -> Result<(), CatalogError> {
        let mut ids: Vec<BoothId> = self.centers.keys().copied().collect();
        ids.sort_unstable();
        match ids.into_iter().find(|id| catalog.booth(*id).is_none()) {
            Some(id) => Err(CatalogError::UnknownBooth(id)),
            None => Ok(()),
        }
    }

    /// Booths of `catalog` that have no position, ascending.
    #[must_use]
    pub fn missing(&self, catalog: &BoothCatalog) -> Vec<BoothId> {
        catalog
            .booths()
            .iter()
            .map(|b| b.id)
            .filter(|id| !self.contains(*id))
            .collect()
    }
}

impl FromIterator<(BoothId, Point)> for BoothPositions {
    fn from_iter<I: IntoIterator<Item = (BoothId, Point)>>(iter: I) -> Self {
        Self {
            centers: iter.into_iter().collect(),
        }
    }
}

/// Square footprint of a booth of `size` centered on `center`.
#[must_use]
pub fn footprint_at(center: Point, size: BoothSize) -> Rect {
    let edge = size.footprint_edge();
    Rect::from_center_size(center, Size::new(edge, edge))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{BoothPositions, footprint_at};
    use crate::{BoothId, BoothRecord, BoothSize, CatalogBuilder, CatalogError, Zone};

    fn id(n: u32) -> BoothId {
        BoothId::new(n).unwrap()
    }

    #[test]
    fn footprint_is_centered() {
        let rect = footprint_at(Point::new(170.0, 95.0), BoothSize::Ten);
        assert_eq!(rect.center(), Point::new(170.0, 95.0));
        assert_eq!(rect.width(), 80.0);
    }

    #[test]
    fn validation_and_missing_booths() {
        let mut builder = CatalogBuilder::new();
        builder.push_booth(BoothRecord::new(id(1), BoothSize::Ten, Zone::MainTent, 1));
        builder.push_booth(BoothRecord::new(id(2), BoothSize::Six, Zone::MainTent, 2));
        let catalog = builder.build().unwrap();

        let mut positions: BoothPositions = [(id(1), Point::new(10.0, 10.0))].into_iter().collect();
        assert_eq!(positions.validate_against(&catalog), Ok(()));
        assert_eq!(positions.missing(&catalog), [id(2)]);
        assert!(positions.footprint(id(2), BoothSize::Six).is_none());

        positions.insert(id(9), Point::ZERO);
        assert_eq!(
            positions.validate_against(&catalog),
            Err(CatalogError::UnknownBooth(id(9)))
        );
    }
}
