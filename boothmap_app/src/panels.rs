// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state of the UI panels and the outside-interaction regions.

use hashbrown::HashMap;
use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Set of open panels.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Panels: u8 {
        /// Booth detail panel.
        const DETAILS = 1 << 0;
        /// Exhibitor directory.
        const DIRECTORY = 1 << 1;
        /// Zoom controls dropdown.
        const CONTROLS = 1 << 2;
        /// Legend dropdown.
        const LEGEND = 1 << 3;
    }
}

/// A dropdown that closes when the user presses anywhere outside of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    /// The zoom controls dropdown, toggle button included.
    Controls,
    /// The legend dropdown, toggle button included.
    Legend,
}

impl RegionId {
    /// All regions.
    pub const ALL: [Self; 2] = [Self::Controls, Self::Legend];

    /// The panel this region belongs to.
    #[must_use]
    pub const fn panel(self) -> Panels {
        match self {
            Self::Controls => Panels::CONTROLS,
            Self::Legend => Panels::LEGEND,
        }
    }
}

/// Container-space bounds of the dropdown regions, supplied by the rendering
/// adapter.
///
/// A region with no registered bounds has no inside, so every press counts as
/// outside of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutsideRegions {
    bounds: HashMap<RegionId, Rect>,
}

impl OutsideRegions {
    /// Records the bounds of `region`.
    pub fn set(&mut self, region: RegionId, rect: Rect) {
        self.bounds.insert(region, rect);
    }

    /// Forgets the bounds of `region`.
    pub fn clear(&mut self, region: RegionId) {
        self.bounds.remove(&region);
    }

    /// Registered bounds of `region`.
    #[must_use]
    pub fn get(&self, region: RegionId) -> Option<Rect> {
        self.bounds.get(&region).copied()
    }

    /// Returns `true` if `pt` lies inside any registered region.
    #[must_use]
    pub fn hits_any(&self, pt: Point) -> bool {
        self.bounds.values().any(|r| r.contains(pt))
    }

    /// Panels to close for a press at `pt`: every dropdown the press is outside of.
    #[must_use]
    pub fn panels_outside(&self, pt: Point) -> Panels {
        RegionId::ALL
            .into_iter()
            .filter(|&region| !self.get(region).is_some_and(|r| r.contains(pt)))
            .fold(Panels::empty(), |acc, region| acc | region.panel())
    }
}
