// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::animation::TransformAnimation;
use crate::limits::ZoomLimits;
use crate::transform::{
    FitParams, FitTransform, ViewTransform, compute_fit_transform, compute_pan_to_target,
};

/// Static configuration of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Intrinsic size of the map artwork in content units.
    pub content_size: Size,
    /// Fit parameters (padding, zoom-out ratio and floor).
    pub fit: FitParams,
    /// Upper zoom bound.
    pub max_scale: f64,
    /// Factor applied by [`ViewportController::zoom_in`] / [`ViewportController::zoom_out`].
    pub zoom_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            content_size: Size::new(980.0, 680.0),
            fit: FitParams::default(),
            max_scale: 3.0,
            zoom_step: 1.5,
        }
    }
}

/// Owner of the map's pan/zoom transform.
///
/// The controller starts out *not ready*: until a usable container size is
/// reported through [`ViewportController::set_container_size`], every
/// transform computation is suppressed and [`ViewportController::transform`]
/// returns `None`.
///
/// [`ViewportController::apply_transform`] is the single mutating entry point
/// for committed transforms and the single place where the scale is clamped
/// into [`ViewportController::limits`]. The convenience operations (pan to a
/// target, zoom, reset) compute a candidate and route it through there. Raw
/// drag panning is the one exception: it never touches the scale.
///
/// Time is host-driven. Call [`ViewportController::tick`] with the current
/// time in milliseconds before reading the transform; animated commits start
/// at the last observed time.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportController {
    config: ViewportConfig,
    container: Option<Size>,
    fit: Option<FitTransform>,
    limits: ZoomLimits,
    current: ViewTransform,
    animation: Option<TransformAnimation>,
    now_ms: u64,
    revision: u64,
}

impl ViewportController {
    /// Creates a controller that is not ready yet.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            limits: ZoomLimits::new(config.fit.min_scale_floor, config.max_scale),
            config,
            container: None,
            fit: None,
            current: ViewTransform::IDENTITY,
            animation: None,
            now_ms: 0,
            revision: 0,
        }
    }

    /// Returns the static configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns `true` once a usable container size is known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.container.is_some()
    }

    /// Returns the measured container size, if ready.
    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    /// Returns the fit transform for the current container, if ready.
    #[must_use]
    pub fn fit_transform(&self) -> Option<FitTransform> {
        self.fit
    }

    /// Returns the current zoom bounds.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the transform as of the last [`ViewportController::tick`].
    #[must_use]
    pub fn transform(&self) -> Option<ViewTransform> {
        self.container.map(|_| self.current)
    }

    /// Returns where the view is heading: the animation target, or the
    /// current transform when idle.
    #[must_use]
    pub fn target(&self) -> Option<ViewTransform> {
        self.container?;
        Some(self.animation.map_or(self.current, |a| a.target()))
    }

    /// Returns `true` while an animated commit is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Counter bumped whenever the transform, the bounds or readiness change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Last time observed through [`ViewportController::tick`].
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Reports a new container size (initial measurement or resize).
    ///
    /// The fit transform and zoom bounds are recomputed from scratch and the
    /// fit is committed immediately, replacing any previous transform. The
    /// upper bound is always the configured `max_scale`; on containers large
    /// enough that the derived minimum would exceed it, the range collapses to
    /// that single scale. A size
    /// with no room for the padded content puts the controller back into the
    /// not-ready state. Returns whether the controller is ready afterwards.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        let Some(fit) = compute_fit_transform(size, self.config.content_size, &self.config.fit)
        else {
            if self.container.is_some() {
                self.container = None;
                self.fit = None;
                self.animation = None;
                self.revision += 1;
            }
            return false;
        };

        if self.container == Some(size) && self.fit == Some(fit) {
            return true;
        }
        self.container = Some(size);
        self.fit = Some(fit);
        // The configured maximum wins over the derived minimum.
        let max = self.config.max_scale;
        self.limits = ZoomLimits::new(fit.min_scale.min(max), max);
        self.commit(fit.transform, 0);
        true
    }

    /// Commits `transform`, animating over `duration_ms` (0 = immediate).
    ///
    /// The scale is clamped into [`ViewportController::limits`]. When clamping
    /// changes it, the offset is re-derived so that the content point the
    /// request placed at the container center stays there. An animation
    /// already in flight is superseded: the new one starts from the current,
    /// possibly intermediate, transform.
    ///
    /// Returns the committed target, or `None` when not ready.
    pub fn apply_transform(
        &mut self,
        transform: ViewTransform,
        duration_ms: u64,
    ) -> Option<ViewTransform> {
        self.container?;
        Some(self.commit(transform, duration_ms))
    }

    /// Centers the content point `target` at `scale`.
    ///
    /// Returns the committed target, or `None` when not ready.
    pub fn pan_to(
        &mut self,
        target: Point,
        scale: f64,
        duration_ms: u64,
    ) -> Option<ViewTransform> {
        let container = self.container?;
        let candidate = compute_pan_to_target(container, target, scale);
        Some(self.commit(candidate, duration_ms))
    }

    /// Multiplies the scale by the configured step, keeping the container center fixed.
    pub fn zoom_in(&mut self, duration_ms: u64) -> Option<ViewTransform> {
        let step = self.config.zoom_step;
        self.zoom_about_center(step, duration_ms)
    }

    /// Divides the scale by the configured step, keeping the container center fixed.
    pub fn zoom_out(&mut self, duration_ms: u64) -> Option<ViewTransform> {
        let step = self.config.zoom_step;
        self.zoom_about_center(1.0 / step, duration_ms)
    }

    /// Scales by `factor` about `anchor` (container space), keeping it fixed.
    ///
    /// Zooming while an animation is in flight starts from its target, so
    /// repeated zoom steps accumulate. Non-positive factors are ignored.
    pub fn zoom_about_view_point(
        &mut self,
        anchor: Point,
        factor: f64,
        duration_ms: u64,
    ) -> Option<ViewTransform> {
        let base = self.target()?;
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        let scale = self.limits.clamp(base.scale * factor);
        let candidate = base.rescaled_about(anchor, scale);
        Some(self.commit(candidate, duration_ms))
    }

    /// Re-commits the fit transform for the current container.
    pub fn reset(&mut self, duration_ms: u64) -> Option<ViewTransform> {
        let fit = self.fit?;
        Some(self.commit(fit.transform, duration_ms))
    }

    /// Moves the view by `delta` container pixels. Panning is not bounded.
    ///
    /// Drag panning is immediate and supersedes any animation.
    pub fn pan_by(&mut self, delta: Vec2) -> Option<ViewTransform> {
        self.container?;
        if delta == Vec2::ZERO {
            return Some(self.current);
        }
        self.animation = None;
        self.current.offset += delta;
        self.revision += 1;
        Some(self.current)
    }

    /// Advances the clock and any animation. Returns `true` if the transform changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        let Some(animation) = self.animation else {
            return false;
        };
        let next = animation.sample(self.now_ms);
        if animation.is_finished(self.now_ms) {
            self.animation = None;
        }
        if next == self.current {
            return false;
        }
        self.current = next;
        self.revision += 1;
        true
    }

    /// Maps a content point into container space, if ready.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Option<Point> {
        self.transform().map(|t| t.content_to_view(pt))
    }

    /// Maps a container point into content space, if ready.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Option<Point> {
        self.transform().map(|t| t.view_to_content(pt))
    }

    /// Content-space rectangle currently visible through the container.
    #[must_use]
    pub fn visible_content_rect(&self) -> Option<Rect> {
        let container = self.container?;
        let t = self.current;
        let p0 = t.view_to_content(Point::ZERO);
        let p1 = t.view_to_content(Point::new(container.width, container.height));
        Some(Rect::from_points(p0, p1))
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            transform: self.transform(),
            target: self.target(),
            fit: self.fit,
            min_scale: self.limits.min(),
            max_scale: self.limits.max(),
            animating: self.is_animating(),
            revision: self.revision,
        }
    }

    fn zoom_about_center(&mut self, factor: f64, duration_ms: u64) -> Option<ViewTransform> {
        let container = self.container?;
        let center = Point::new(container.width / 2.0, container.height / 2.0);
        self.zoom_about_view_point(center, factor, duration_ms)
    }

    fn clamp(&self, transform: ViewTransform) -> ViewTransform {
        let scale = self.limits.clamp(transform.scale);
        if (scale - transform.scale).abs() < f64::EPSILON {
            return transform;
        }
        match self.container {
            Some(container) if transform.scale.is_finite() && transform.scale > 0.0 => {
                let center = Point::new(container.width / 2.0, container.height / 2.0);
                transform.rescaled_about(center, scale)
            }
            _ => ViewTransform::new(transform.offset, scale),
        }
    }

    fn commit(&mut self, transform: ViewTransform, duration_ms: u64) -> ViewTransform {
        let target = self.clamp(transform);
        if duration_ms == 0 || target == self.current {
            if target == self.current && self.animation.is_none() {
                return target;
            }
            self.animation = None;
            self.current = target;
        } else {
            self.animation = Some(TransformAnimation::new(
                self.current,
                target,
                self.now_ms,
                duration_ms,
            ));
        }
        self.revision += 1;
        target
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Measured container size, `None` while not ready.
    pub container: Option<Size>,
    /// Current transform.
    pub transform: Option<ViewTransform>,
    /// Transform being animated towards.
    pub target: Option<ViewTransform>,
    /// Fit transform for the container.
    pub fit: Option<FitTransform>,
    /// Lower zoom bound.
    pub min_scale: f64,
    /// Upper zoom bound.
    pub max_scale: f64,
    /// Whether an animation is in flight.
    pub animating: bool,
    /// Change counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewportConfig, ViewportController};
    use crate::ViewTransform;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn ready(w: f64, h: f64) -> ViewportController {
        let mut vp = ViewportController::new(ViewportConfig::default());
        assert!(vp.set_container_size(Size::new(w, h)));
        vp
    }

    #[test]
    fn not_ready_suppresses_everything() {
        let mut vp = ViewportController::new(ViewportConfig::default());
        assert!(!vp.is_ready());
        assert_eq!(vp.transform(), None);
        assert_eq!(vp.apply_transform(ViewTransform::IDENTITY, 0), None);
        assert_eq!(vp.pan_to(Point::new(10.0, 10.0), 1.5, 300), None);
        assert_eq!(vp.zoom_in(0), None);
        assert_eq!(vp.reset(0), None);
        assert_eq!(vp.pan_by(Vec2::new(5.0, 5.0)), None);
        assert_eq!(vp.revision(), 0);

        // A container smaller than the padding is still not ready.
        assert!(!vp.set_container_size(Size::new(30.0, 30.0)));
        assert_eq!(vp.transform(), None);
    }

    #[test]
    fn measurement_commits_fit_and_bounds() {
        let vp = ready(1000.0, 700.0);
        let t = vp.transform().unwrap();
        let fit = vp.fit_transform().unwrap();
        assert_eq!(t, fit.transform);
        assert!((vp.limits().min() - 0.776_470).abs() < 1e-6);
        assert_eq!(vp.limits().max(), 3.0);
    }

    #[test]
    fn resize_replaces_transform_wholesale() {
        let mut vp = ready(1000.0, 700.0);
        vp.pan_by(Vec2::new(120.0, -30.0));
        vp.zoom_in(0);
        assert!(vp.set_container_size(Size::new(1600.0, 900.0)));
        let fit = vp.fit_transform().unwrap();
        assert_eq!(vp.transform(), Some(fit.transform));
        assert!(close(vp.limits().min(), (fit.transform.scale * 0.8).max(0.2)));

        // Shrinking below the padding drops back to not ready.
        assert!(!vp.set_container_size(Size::new(10.0, 10.0)));
        assert!(!vp.is_ready());
        assert_eq!(vp.transform(), None);
    }

    #[test]
    fn large_containers_keep_the_configured_max() {
        let max = ViewportConfig::default().max_scale;

        // Fit scale above max / min_scale_fit_ratio (3.75): derived min would be 3.34.
        let mut vp = ready(5120.0, 2880.0);
        assert!(vp.fit_transform().unwrap().transform.scale > 3.75);
        assert_eq!(vp.limits().max(), max);
        assert!(vp.limits().min() <= vp.limits().max());
        assert_eq!(vp.transform().unwrap().scale, max);
        let committed = vp
            .apply_transform(ViewTransform::new(Vec2::ZERO, 10.0), 0)
            .unwrap();
        assert_eq!(committed.scale, max);

        // Fit scale between max and 3.75: derived min stays below max.
        let mut vp = ready(3500.0, 2400.0);
        let fit = vp.fit_transform().unwrap().transform.scale;
        assert!(fit > max && fit < 3.75);
        assert_eq!(vp.limits().max(), max);
        assert!(close(vp.limits().min(), fit * 0.8));
        assert!(vp.limits().min() <= vp.limits().max());
        let committed = vp
            .apply_transform(ViewTransform::new(Vec2::ZERO, 10.0), 0)
            .unwrap();
        assert_eq!(committed.scale, max);
    }

    #[test]
    fn apply_clamps_scale_to_bounds() {
        let mut vp = ready(1000.0, 700.0);
        let above = vp
            .apply_transform(ViewTransform::new(Vec2::ZERO, 10.0), 0)
            .unwrap();
        assert_eq!(above.scale, vp.limits().max());
        assert_eq!(vp.transform().unwrap().scale, 3.0);

        let below = vp
            .apply_transform(ViewTransform::new(Vec2::ZERO, 0.01), 0)
            .unwrap();
        assert_eq!(below.scale, vp.limits().min());
    }

    #[test]
    fn clamped_pan_keeps_target_centered() {
        let mut vp = ready(1200.0, 800.0);
        let target = Point::new(170.0, 95.0);
        let committed = vp.pan_to(target, 9.0, 0).unwrap();
        assert_eq!(committed.scale, 3.0);
        let center = committed.content_to_view(target);
        assert!(close(center.x, 600.0));
        assert!(close(center.y, 400.0));
    }

    #[test]
    fn pan_to_reference_scenario() {
        let mut vp = ready(1200.0, 800.0);
        let committed = vp.pan_to(Point::new(170.0, 95.0), 1.5, 0).unwrap();
        assert_eq!(committed.scale, 1.5);
        assert!(close(committed.offset.x, 345.0));
        assert!(close(committed.offset.y, 257.5));
    }

    #[test]
    fn animated_commit_progresses_with_ticks() {
        let mut vp = ready(1200.0, 800.0);
        vp.tick(1_000);
        let start = vp.transform().unwrap();
        let target = vp.pan_to(Point::new(170.0, 95.0), 1.5, 300).unwrap();

        assert!(vp.is_animating());
        assert_eq!(vp.transform(), Some(start));
        assert_eq!(vp.target(), Some(target));

        assert!(vp.tick(1_150));
        let mid = vp.transform().unwrap();
        assert!(mid != start && mid != target);

        assert!(vp.tick(1_300));
        assert_eq!(vp.transform(), Some(target));
        assert!(!vp.is_animating());
        assert!(!vp.tick(1_400));
    }

    #[test]
    fn new_commit_supersedes_in_flight_animation() {
        let mut vp = ready(1200.0, 800.0);
        vp.tick(0);
        vp.pan_to(Point::new(55.0, 95.0), 1.5, 300);
        vp.tick(100);
        let mid = vp.transform().unwrap();

        let second = vp.pan_to(Point::new(905.0, 245.0), 1.5, 300).unwrap();
        // Starts from the intermediate value, not from the first target.
        assert_eq!(vp.transform(), Some(mid));
        vp.tick(400);
        assert_eq!(vp.transform(), Some(second));
    }

    #[test]
    fn zoom_in_and_out_keep_center_fixed() {
        let mut vp = ready(1000.0, 700.0);
        let center = Point::new(500.0, 350.0);
        let before = vp.view_to_content(center).unwrap();
        let scale = vp.transform().unwrap().scale;

        let zoomed = vp.zoom_in(0).unwrap();
        assert!(close(zoomed.scale, scale * 1.5));
        let after = vp.view_to_content(center).unwrap();
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));

        vp.zoom_out(0);
        assert!(close(vp.transform().unwrap().scale, scale));

        // Zooming out repeatedly stops at the bound.
        for _ in 0..10 {
            vp.zoom_out(0);
        }
        assert_eq!(vp.transform().unwrap().scale, vp.limits().min());
    }

    #[test]
    fn animated_zoom_steps_accumulate() {
        let mut vp = ready(1000.0, 700.0);
        let scale = vp.transform().unwrap().scale;
        vp.zoom_in(200);
        let second = vp.zoom_in(200).unwrap();
        assert!(close(second.scale, scale * 2.25));
        // Nothing moved yet; the animation starts from the fit.
        assert!(close(vp.transform().unwrap().scale, scale));
        vp.tick(200);
        assert_eq!(vp.transform(), Some(second));
    }

    #[test]
    fn wheel_zoom_keeps_anchor_fixed() {
        let mut vp = ready(1000.0, 700.0);
        let anchor = Point::new(130.0, 610.0);
        let before = vp.view_to_content(anchor).unwrap();
        vp.zoom_about_view_point(anchor, 1.08, 0).unwrap();
        let after = vp.view_to_content(anchor).unwrap();
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));
        assert_eq!(vp.zoom_about_view_point(anchor, 0.0, 0), None);
    }

    #[test]
    fn reset_returns_to_fit_and_drag_is_unbounded() {
        let mut vp = ready(1000.0, 700.0);
        let fit = vp.fit_transform().unwrap().transform;
        vp.pan_by(Vec2::new(-50_000.0, 80_000.0));
        assert!(close(vp.transform().unwrap().offset.x, fit.offset.x - 50_000.0));
        vp.reset(0);
        assert_eq!(vp.transform(), Some(fit));
    }

    #[test]
    fn visible_rect_covers_the_fitted_content() {
        let vp = ready(1000.0, 700.0);
        let visible = vp.visible_content_rect().unwrap();
        assert!(visible.x0 <= 0.0 && visible.y0 <= 0.0);
        assert!(visible.x1 >= 980.0 && visible.y1 >= 680.0);
        let info = vp.debug_info();
        assert!(info.min_scale <= info.max_scale);
        assert_eq!(info.container, Some(Size::new(1000.0, 700.0)));
    }
}
