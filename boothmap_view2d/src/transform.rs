// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform pan + zoom mapping content coordinates into container (view) pixels.
///
/// A content point `p` lands at `offset + p * scale` in the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Container-space position of the content origin.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// Identity transform: content coordinates are container pixels.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from an offset and a scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns the equivalent affine (translate after scale).
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Maps a content-space point into container space.
    #[must_use]
    pub fn content_to_view(self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Maps a container-space point back into content space.
    ///
    /// The transform must have a positive scale.
    #[must_use]
    pub fn view_to_content(self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Maps a content-space rectangle into container space.
    #[must_use]
    pub fn content_to_view_rect(self, rect: Rect) -> Rect {
        // Uniform positive scale keeps the rectangle axis-aligned and ordered.
        let p0 = self.content_to_view(rect.origin());
        let p1 = self.content_to_view(Point::new(rect.max_x(), rect.max_y()));
        Rect::from_points(p0, p1)
    }

    /// Returns a transform with `scale` whose mapping keeps `anchor` fixed.
    ///
    /// `anchor` is a container-space point: the content point under it before
    /// the change is still under it afterwards.
    #[must_use]
    pub fn rescaled_about(self, anchor: Point, scale: f64) -> Self {
        let content_at_anchor = self.view_to_content(anchor);
        Self {
            offset: anchor.to_vec2() - content_at_anchor.to_vec2() * scale,
            scale,
        }
    }

    /// Linear interpolation between two transforms, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Parameters of the fit-to-container computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// Margin kept free on every side of the fitted content, in pixels.
    pub padding: f64,
    /// Absolute floor for the derived minimum scale.
    pub min_scale_floor: f64,
    /// Fraction of the fit scale the user may zoom out to.
    pub min_scale_fit_ratio: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_scale_floor: 0.2,
            min_scale_fit_ratio: 0.8,
        }
    }
}

/// Result of [`compute_fit_transform`]: the fitted transform plus the zoom-out bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Transform showing the whole content, centered, inside the padding.
    pub transform: ViewTransform,
    /// `max(fit_scale * min_scale_fit_ratio, min_scale_floor)`.
    pub min_scale: f64,
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Computes the transform that fits `content` inside `container` with padding.
///
/// Returns `None` while the container is not measured yet, i.e. when either
/// container dimension or the padded available space is not positive. Callers
/// treat that as "not ready" and must not commit anything.
///
/// ```rust
/// use kurbo::Size;
/// use boothmap_view2d::{FitParams, compute_fit_transform};
///
/// let fit = compute_fit_transform(
///     Size::new(1000.0, 700.0),
///     Size::new(980.0, 680.0),
///     &FitParams::default(),
/// )
/// .unwrap();
/// assert!((fit.transform.scale - 660.0 / 680.0).abs() < 1e-12);
///
/// // Smaller than the padding: not ready.
/// assert!(compute_fit_transform(Size::new(30.0, 30.0), Size::new(980.0, 680.0), &FitParams::default()).is_none());
/// ```
#[must_use]
pub fn compute_fit_transform(
    container: Size,
    content: Size,
    params: &FitParams,
) -> Option<FitTransform> {
    if !is_positive(container.width) || !is_positive(container.height) {
        return None;
    }
    if !is_positive(content.width) || !is_positive(content.height) {
        return None;
    }
    let available_width = container.width - 2.0 * params.padding;
    let available_height = container.height - 2.0 * params.padding;
    if !is_positive(available_width) || !is_positive(available_height) {
        return None;
    }

    let fit_scale = (available_width / content.width).min(available_height / content.height);
    let scaled = content * fit_scale;
    let offset = Vec2::new(
        (container.width - scaled.width) / 2.0,
        (container.height - scaled.height) / 2.0,
    );
    let min_scale = (fit_scale * params.min_scale_fit_ratio).max(params.min_scale_floor);

    Some(FitTransform {
        transform: ViewTransform::new(offset, fit_scale),
        min_scale,
    })
}

/// Computes the absolute transform that puts `target` at the container center.
///
/// The result does not depend on any current transform, so repeated calls
/// with the same arguments agree exactly.
#[must_use]
pub fn compute_pan_to_target(container: Size, target: Point, scale: f64) -> ViewTransform {
    let offset = Vec2::new(
        container.width / 2.0 - target.x * scale,
        container.height / 2.0 - target.y * scale,
    );
    ViewTransform::new(offset, scale)
}
