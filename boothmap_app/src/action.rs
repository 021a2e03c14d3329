// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boothmap_catalog::BoothId;
use boothmap_directory::DirectoryFilter;
use kurbo::{Point, Rect, Size};

use crate::panels::RegionId;

/// Everything that can happen to a [`VenueState`](crate::VenueState).
///
/// Pointer positions are in container space.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The map was mounted. Schedules the deferred first measurement.
    Start,
    /// The host measured the map container.
    ContainerResized(Size),
    /// A booth was clicked on the map.
    BoothClicked(BoothId),
    /// A booth was picked in the directory: pan to it, then show its details.
    ///
    /// Ignored while the map is loading or when the booth has no position.
    DirectorySelect(BoothId),
    /// The detail panel's close button.
    CloseDetails,
    /// The directory toggle button.
    ToggleDirectory,
    /// The directory's close button.
    CloseDirectory,
    /// New directory search text.
    SetSearch(String),
    /// New directory filter mode.
    SetFilter(DirectoryFilter),
    /// The controls dropdown toggle.
    ToggleControls,
    /// The legend dropdown toggle.
    ToggleLegend,
    /// "Zoom in" control.
    ZoomIn,
    /// "Zoom out" control.
    ZoomOut,
    /// "Reset view" control.
    ResetView,
    /// Pointer pressed.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer released.
    PointerUp(Point),
    /// Mouse wheel at `at`. Negative `delta` zooms in, in notches.
    Wheel {
        /// Pointer position.
        at: Point,
        /// Signed notch count.
        delta: f64,
    },
    /// Pinch gesture step.
    Pinch {
        /// Midpoint between the touches.
        center: Point,
        /// Relative scale change since the previous step.
        factor: f64,
    },
    /// The rendering adapter reports the bounds of a dropdown region.
    SetRegion(RegionId, Rect),
    /// The rendering adapter withdraws a dropdown region.
    ClearRegion(RegionId),
    /// The host clock advanced to the given time in milliseconds.
    Tick(u64),
}

/// Work the host must perform after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Measure the map container and dispatch
    /// [`Action::ContainerResized`] with the result.
    MeasureContainer,
}
