// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in venue: one main tent with five rows and six outside vendor tents.

use kurbo::{Point, Size};

use crate::{
    BoothCatalog, BoothId, BoothPositions, BoothRecord, BoothSize, CatalogBuilder, CatalogError,
    ExhibitorRecord, Zone,
};
use BoothSize::{Fifteen, Six, Ten, Twenty};
use Zone::{MainTent, OutsideBottom, OutsideRight};

/// Intrinsic size of the built-in map artwork.
pub const CONTENT_SIZE: Size = Size::new(980.0, 680.0);

/// `(id, size, zone, row, center x, center y)`
const LAYOUT: [(u32, BoothSize, Zone, u8, f64, f64); 43] = [
    // Row 1: corner 15x15s around five 10x10s.
    (1, Fifteen, MainTent, 1, 55.0, 95.0),
    (2, Ten, MainTent, 1, 170.0, 95.0),
    (3, Ten, MainTent, 1, 260.0, 95.0),
    (4, Ten, MainTent, 1, 350.0, 95.0),
    (5, Ten, MainTent, 1, 440.0, 95.0),
    (6, Ten, MainTent, 1, 530.0, 95.0),
    (7, Fifteen, MainTent, 1, 645.0, 95.0),
    // Row 2
    (8, Six, MainTent, 2, 170.0, 170.0),
    (9, Six, MainTent, 2, 225.0, 170.0),
    (10, Six, MainTent, 2, 280.0, 170.0),
    (11, Six, MainTent, 2, 335.0, 170.0),
    (12, Six, MainTent, 2, 390.0, 170.0),
    (13, Six, MainTent, 2, 445.0, 170.0),
    (14, Six, MainTent, 2, 500.0, 170.0),
    (15, Six, MainTent, 2, 555.0, 170.0),
    // Row 3
    (16, Fifteen, MainTent, 3, 55.0, 255.0),
    (17, Ten, MainTent, 3, 170.0, 255.0),
    (18, Ten, MainTent, 3, 260.0, 255.0),
    (19, Ten, MainTent, 3, 350.0, 255.0),
    (20, Ten, MainTent, 3, 440.0, 255.0),
    (21, Ten, MainTent, 3, 530.0, 255.0),
    (22, Fifteen, MainTent, 3, 645.0, 255.0),
    // Row 4
    (23, Six, MainTent, 4, 170.0, 330.0),
    (24, Six, MainTent, 4, 225.0, 330.0),
    (25, Six, MainTent, 4, 280.0, 330.0),
    (26, Six, MainTent, 4, 335.0, 330.0),
    (27, Six, MainTent, 4, 390.0, 330.0),
    (28, Six, MainTent, 4, 445.0, 330.0),
    (29, Six, MainTent, 4, 500.0, 330.0),
    (30, Six, MainTent, 4, 555.0, 330.0),
    // Row 5
    (31, Fifteen, MainTent, 5, 55.0, 415.0),
    (32, Ten, MainTent, 5, 170.0, 415.0),
    (33, Ten, MainTent, 5, 260.0, 415.0),
    (34, Ten, MainTent, 5, 350.0, 415.0),
    (35, Ten, MainTent, 5, 440.0, 415.0),
    (36, Ten, MainTent, 5, 530.0, 415.0),
    (37, Fifteen, MainTent, 5, 645.0, 415.0),
    // Vendor tents
    (38, Twenty, OutsideBottom, 6, 75.0, 580.0),
    (39, Twenty, OutsideBottom, 6, 205.0, 580.0),
    (40, Twenty, OutsideBottom, 6, 335.0, 580.0),
    (41, Twenty, OutsideBottom, 6, 465.0, 580.0),
    (42, Twenty, OutsideRight, 7, 905.0, 115.0),
    (43, Twenty, OutsideRight, 7, 905.0, 245.0),
];

/// Built-in booth catalog with its sample exhibitors.
pub fn catalog() -> Result<BoothCatalog, CatalogError> {
    let mut builder = CatalogBuilder::new();
    for (raw, size, zone, row, _, _) in LAYOUT {
        if let Some(id) = BoothId::new(raw) {
            builder.push_booth(BoothRecord::new(id, size, zone, row));
        }
    }
    for (raw, exhibitor) in sample_exhibitors() {
        if let Some(id) = BoothId::new(raw) {
            builder.assign(id, exhibitor);
        }
    }
    builder.build()
}

/// Built-in booth centers.
#[must_use]
pub fn positions() -> BoothPositions {
    LAYOUT
        .into_iter()
        .filter_map(|(raw, _, _, _, x, y)| BoothId::new(raw).map(|id| (id, Point::new(x, y))))
        .collect()
}

fn sample_exhibitors() -> [(u32, ExhibitorRecord); 2] {
    [
        (
            1,
            ExhibitorRecord::new(
                "TechVenture AI",
                "AI-powered analytics platform for enterprise businesses.",
                "https://example.com/techventure",
            )
            .with_slide_deck("https://example.com/slides/techventure.pdf")
            .with_representative("John Smith")
            .with_representative("Jane Doe"),
        ),
        (
            2,
            ExhibitorRecord::new(
                "GreenEnergy Solutions",
                "Sustainable energy management for smart buildings.",
                "https://example.com/greenenergy",
            )
            .with_representative("Mike Johnson"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{CONTENT_SIZE, catalog, positions};
    use crate::{BoothId, Zone};

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = catalog().unwrap();
        let positions = positions();
        assert_eq!(catalog.len(), 43);
        assert_eq!(positions.len(), 43);
        assert_eq!(catalog.assigned_count(), 2);
        assert_eq!(positions.validate_against(&catalog), Ok(()));
        assert!(positions.missing(&catalog).is_empty());

        let main = catalog.booths().iter().filter(|b| b.zone.is_main()).count();
        assert_eq!(main, 37);
        let right = catalog
            .booths()
            .iter()
            .filter(|b| b.zone == Zone::OutsideRight)
            .count();
        assert_eq!(right, 2);
    }

    #[test]
    fn builtin_footprints_fit_the_artwork_without_overlap() {
        let catalog = catalog().unwrap();
        let positions = positions();
        let rects: alloc::vec::Vec<_> = catalog
            .booths()
            .iter()
            .map(|b| positions.footprint(b.id, b.size).unwrap())
            .collect();
        for (i, a) in rects.iter().enumerate() {
            assert!(a.x0 >= 0.0 && a.y0 >= 0.0);
            assert!(a.x1 <= CONTENT_SIZE.width && a.y1 <= CONTENT_SIZE.height);
            for b in &rects[i + 1..] {
                assert!(a.intersect(*b).area() <= 0.0, "{a:?} overlaps {b:?}");
            }
        }
        let booth_two = positions.get(BoothId::new(2).unwrap()).unwrap();
        assert_eq!((booth_two.x, booth_two.y), (170.0, 95.0));
    }
}
