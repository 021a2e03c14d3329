// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan tracking with click detection.
//!
//! 1) [`DragTracker::press`] when the pointer goes down over the map.
//! 2) [`DragTracker::drag`] on each move; the returned delta pans the view.
//! 3) [`DragTracker::release`] on pointer up; it reports whether the gesture
//!    stayed within the click tolerance.
//!
//! ```
//! use boothmap_app::gesture::{DragTracker, Release};
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragTracker::default();
//! drag.press(Point::new(10.0, 20.0));
//! assert_eq!(drag.drag(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.release(Point::new(15.0, 25.0), 4.0), Release::Drag);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Outcome of a pointer release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No press was being tracked.
    Idle,
    /// The pointer stayed within the click tolerance of the press.
    Click,
    /// The pointer travelled further than the click tolerance.
    Drag,
}

/// Tracks one pointer press from down to up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    /// Where the press started.
    pub start_pos: Option<Point>,
    /// Last pointer position seen during the press.
    pub last_pos: Option<Point>,
    /// Largest distance from the start seen during the press.
    pub max_travel: f64,
}

impl DragTracker {
    /// Starts tracking a press at `pos`, replacing any press in progress.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.max_travel = 0.0;
    }

    /// Moves the pointer, returning the delta since the previous position.
    ///
    /// Returns `None` when no press is being tracked.
    pub fn drag(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(start);
        self.max_travel = self.max_travel.max((pos - start).hypot());
        Some(pos - last)
    }

    /// Total offset from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Ends the press and classifies it.
    pub fn release(&mut self, pos: Point, click_tolerance: f64) -> Release {
        let Some(start) = self.start_pos else {
            return Release::Idle;
        };
        let travel = self.max_travel.max((pos - start).hypot());
        self.cancel();
        if travel <= click_tolerance {
            Release::Click
        } else {
            Release::Drag
        }
    }

    /// Drops the press without classifying it.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
