// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive `[min, max]` range for the uniform view scale.
///
/// The range is normalized on construction so that `min <= max`. Committed
/// transforms always carry a scale inside this range; see
/// [`crate::ViewportController::apply_transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates a new range, swapping the bounds if they are given out of order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the range.
    ///
    /// Non-finite inputs collapse to the lower bound.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}
