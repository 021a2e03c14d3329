// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based interpolation between two committed transforms.
//!
//! Time is supplied by the host as monotonically increasing milliseconds; the
//! crate never reads a clock itself.

use crate::ViewTransform;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// An in-flight transition from one transform to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformAnimation {
    from: ViewTransform,
    to: ViewTransform,
    start_ms: u64,
    duration_ms: u64,
}

impl TransformAnimation {
    /// Starts an animation at `start_ms` lasting `duration_ms`.
    #[must_use]
    pub fn new(from: ViewTransform, to: ViewTransform, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Transform the animation starts from.
    #[must_use]
    pub fn from(&self) -> ViewTransform {
        self.from
    }

    /// Transform the animation lands on.
    #[must_use]
    pub fn target(&self) -> ViewTransform {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).min(1.0)
    }

    /// Eased transform at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> ViewTransform {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(t))
    }

    /// Returns `true` once `now_ms` has reached the end of the animation.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}
