// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boothmap_view2d --heading-base-level=0

//! Boothmap View 2D: the pan/zoom controller behind the venue map.
//!
//! This crate is a small, headless coordinate-transform engine. It knows the
//! intrinsic size of the map artwork (the *content*) and the size of the
//! element the map is shown in (the *container*), and it owns the single
//! [`ViewTransform`] that maps one into the other.
//!
//! It provides:
//! - [`compute_fit_transform`]: the scale/offset that shows the whole content,
//!   centered, inside a padded container, plus the derived zoom-out bound.
//! - [`compute_pan_to_target`]: the absolute transform that centers a content
//!   point at a given zoom.
//! - [`ViewportController`]: the owner of the committed transform. It clamps
//!   every commit into its [`ZoomLimits`], animates commits over a duration,
//!   and offers zoom in/out, reset, drag panning and anchored wheel zoom.
//!
//! It does **not** know about booths, selection or rendering. Callers are
//! expected to:
//! - Report the container size once it has been laid out, and again on every
//!   resize.
//! - Drive time with [`ViewportController::tick`].
//! - Read [`ViewportController::transform`] (or its affine) when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use boothmap_view2d::{ViewportConfig, ViewportController};
//!
//! let mut view = ViewportController::new(ViewportConfig::default());
//!
//! // Nothing happens until the container is measured.
//! assert!(view.transform().is_none());
//!
//! view.set_container_size(Size::new(1200.0, 800.0));
//! assert!(view.is_ready());
//!
//! // Center booth 2 at 1.5x, animated over 300 ms.
//! view.tick(0);
//! let target = view.pan_to(Point::new(170.0, 95.0), 1.5, 300).unwrap();
//! assert_eq!(target.offset.x, 345.0);
//! assert_eq!(target.offset.y, 257.5);
//!
//! view.tick(300);
//! assert_eq!(view.transform(), Some(target));
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform and axis-aligned; there is no rotation.
//! - Offsets are never clamped: the map may be panned arbitrarily far away.
//! - The zoom bounds are recomputed together with the fit on every resize;
//!   the minimum follows the fit so that the map cannot shrink much past it.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod controller;
mod limits;
mod transform;

pub use animation::{TransformAnimation, ease_out_cubic};
pub use controller::{ViewportConfig, ViewportController, ViewportDebugInfo};
pub use limits::ZoomLimits;
pub use transform::{
    FitParams, FitTransform, ViewTransform, compute_fit_transform, compute_pan_to_target,
};
