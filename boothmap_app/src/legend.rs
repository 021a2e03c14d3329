// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map colors and the legend built from them.

use boothmap_catalog::{BoothCatalog, BoothSize, Zone};
use peniko::Color;

/// Fill and stroke of one drawn shape.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    /// Interior color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
}

/// Colors used to draw the map.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Unassigned booths in the main tent.
    pub main_tent: Swatch,
    /// Unassigned booths in vendor tents.
    pub vendor_tent: Swatch,
    /// Booths with an exhibitor.
    pub assigned: Swatch,
    /// The selected booth, drawn over the others.
    pub selected: Swatch,
    /// Tent outlines.
    pub outline: Color,
    /// Booth numbers and tent labels.
    pub text: Color,
    /// Map background.
    pub background: Color,
}

impl Palette {
    /// Default light theme.
    pub const LIGHT: Self = Self {
        main_tent: Swatch {
            fill: Color::from_rgb8(0xe3, 0xf2, 0xfd),
            stroke: Color::from_rgb8(0x64, 0xb5, 0xf6),
        },
        vendor_tent: Swatch {
            fill: Color::from_rgb8(0xff, 0xf3, 0xe0),
            stroke: Color::from_rgb8(0xff, 0xb7, 0x4d),
        },
        assigned: Swatch {
            fill: Color::from_rgb8(0xc8, 0xe6, 0xc9),
            stroke: Color::from_rgb8(0x43, 0xa0, 0x47),
        },
        selected: Swatch {
            fill: Color::from_rgb8(0xff, 0xeb, 0x3b),
            stroke: Color::from_rgb8(0xf5, 0x7f, 0x17),
        },
        outline: Color::from_rgb8(0x90, 0xa4, 0xae),
        text: Color::from_rgb8(0x26, 0x32, 0x38),
        background: Color::from_rgb8(0xfa, 0xfa, 0xfa),
    };

    /// Swatch for a booth given its zone, assignment and selection.
    ///
    /// Selection wins over assignment, assignment wins over zone.
    #[must_use]
    pub fn booth(&self, zone: Zone, assigned: bool, selected: bool) -> Swatch {
        if selected {
            self.selected
        } else if assigned {
            self.assigned
        } else {
            self.zone(zone)
        }
    }

    /// Swatch for an unassigned booth in `zone`.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> Swatch {
        if zone.is_main() {
            self.main_tent
        } else {
            self.vendor_tent
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// What a legend swatch looks like.
#[derive(Clone, Copy, Debug)]
pub enum LegendMark {
    /// A filled square in the given colors.
    Color(Swatch),
    /// A booth outline drawn to scale for the given size.
    Size(BoothSize),
}

/// One legend row.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// Swatch.
    pub mark: LegendMark,
    /// Caption.
    pub label: String,
}

/// Legend content in display order: zones, sizes, then assignment.
#[derive(Clone, Debug)]
pub struct Legend {
    /// Rows, grouped.
    pub groups: Vec<Vec<LegendEntry>>,
}

impl Legend {
    /// Builds the legend for `catalog`.
    ///
    /// Zone captions carry the booth number range found in the catalog; zones
    /// without booths are left out.
    #[must_use]
    pub fn new(catalog: &BoothCatalog, palette: &Palette) -> Self {
        let mut zones = Vec::new();
        for (main, name) in [(true, "Main Tent"), (false, "Vendor Tents")] {
            let mut ids = catalog
                .booths()
                .iter()
                .filter(|b| b.zone.is_main() == main)
                .map(|b| b.id.get());
            let Some(first) = ids.next() else {
                continue;
            };
            let last = ids.last().unwrap_or(first);
            let zone = if main { Zone::MainTent } else { Zone::OutsideBottom };
            zones.push(LegendEntry {
                mark: LegendMark::Color(palette.zone(zone)),
                label: format!("{name} ({first}-{last})"),
            });
        }

        let sizes = [
            BoothSize::Fifteen,
            BoothSize::Ten,
            BoothSize::Six,
            BoothSize::Twenty,
        ]
        .into_iter()
        .map(|size| {
            let edge = size.edge_feet();
            let suffix = if size == BoothSize::Twenty {
                " (Vendor)"
            } else {
                ""
            };
            LegendEntry {
                mark: LegendMark::Size(size),
                label: format!("{edge}' x {edge}'{suffix}"),
            }
        })
        .collect();

        let assigned = vec![LegendEntry {
            mark: LegendMark::Color(palette.assigned),
            label: "Has Startup Info".into(),
        }];

        Self {
            groups: vec![zones, sizes, assigned],
        }
    }

    /// All rows in display order.
    pub fn entries(&self) -> impl Iterator<Item = &LegendEntry> + '_ {
        self.groups.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use boothmap_catalog::{Zone, builtin};

    use super::{Legend, Palette};

    #[test]
    fn builtin_legend_captions() {
        let catalog = builtin::catalog().unwrap();
        let legend = Legend::new(&catalog, &Palette::default());
        let labels: Vec<&str> = legend.entries().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Main Tent (1-37)",
                "Vendor Tents (38-43)",
                "15' x 15'",
                "10' x 10'",
                "6' x 6'",
                "20' x 20' (Vendor)",
                "Has Startup Info",
            ]
        );
        assert_eq!(legend.groups.len(), 3);
    }

    #[test]
    fn selection_overrides_assignment() {
        let p = Palette::LIGHT;
        let sel = p.booth(Zone::MainTent, true, true);
        assert_eq!(sel.fill.to_rgba8(), p.selected.fill.to_rgba8());
        let assigned = p.booth(Zone::OutsideRight, true, false);
        assert_eq!(assigned.fill.to_rgba8(), p.assigned.fill.to_rgba8());
        let vendor = p.booth(Zone::OutsideRight, false, false);
        assert_eq!(vendor.fill.to_rgba8(), p.vendor_tent.fill.to_rgba8());
    }
}
