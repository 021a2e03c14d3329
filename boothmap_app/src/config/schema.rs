// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration types. Every field has a default, so partial files work.

use boothmap_view2d::{FitParams, ViewportConfig};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Zoom bounds, fit and zoom-control settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSection {
    /// Margin kept around the content when fitting, in container pixels.
    pub padding: f64,
    /// Absolute lower bound of the zoom-out limit.
    pub min_scale_floor: f64,
    /// Zoom-out limit as a fraction of the fit scale.
    pub min_scale_fit_ratio: f64,
    /// Upper zoom bound.
    pub max_scale: f64,
    /// Factor applied per zoom-in / zoom-out control.
    pub zoom_step: f64,
    /// Animation length of the zoom controls.
    pub zoom_duration_ms: u64,
    /// Animation length of "reset view". Zero snaps.
    pub reset_duration_ms: u64,
    /// Relative scale change per wheel notch.
    pub wheel_step: f64,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_scale_floor: 0.2,
            min_scale_fit_ratio: 0.8,
            max_scale: 3.0,
            zoom_step: 1.5,
            zoom_duration_ms: 200,
            reset_duration_ms: 0,
            wheel_step: 0.08,
        }
    }
}

/// Pan-to-booth settings used by directory selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanSection {
    /// Scale the view zooms to when centering a booth.
    pub target_scale: f64,
    /// Animation length.
    pub duration_ms: u64,
    /// Delay before the detail panel opens.
    pub details_delay_ms: u64,
}

impl Default for PanSection {
    fn default() -> Self {
        Self {
            target_scale: 1.5,
            duration_ms: 300,
            details_delay_ms: 350,
        }
    }
}

/// Startup timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupSection {
    /// Delay between start and the first container measurement.
    pub measure_delay_ms: u64,
}

impl Default for StartupSection {
    fn default() -> Self {
        Self {
            measure_delay_ms: 100,
        }
    }
}

/// Intrinsic size of the map artwork.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// Width in content units.
    pub width: f64,
    /// Height in content units.
    pub height: f64,
}

impl ContentSection {
    /// The content size as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ContentSection {
    fn default() -> Self {
        let size = boothmap_catalog::builtin::CONTENT_SIZE;
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Pointer interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSection {
    /// Maximum pointer travel, in container pixels, for a press and release
    /// to count as a click rather than a drag.
    pub click_tolerance: f64,
}

impl Default for InteractionSection {
    fn default() -> Self {
        Self {
            click_tolerance: 4.0,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    /// `[viewport]`
    pub viewport: ViewportSection,
    /// `[pan]`
    pub pan: PanSection,
    /// `[startup]`
    pub startup: StartupSection,
    /// `[content]`
    pub content: ContentSection,
    /// `[interaction]`
    pub interaction: InteractionSection,
}

impl VenueConfig {
    /// Settings for the [`ViewportController`](boothmap_view2d::ViewportController).
    #[must_use]
    pub fn viewport_config(&self) -> ViewportConfig {
        let v = &self.viewport;
        ViewportConfig {
            content_size: self.content.size(),
            fit: FitParams {
                padding: v.padding,
                min_scale_floor: v.min_scale_floor,
                min_scale_fit_ratio: v.min_scale_fit_ratio,
            },
            max_scale: v.max_scale,
            zoom_step: v.zoom_step,
        }
    }
}
