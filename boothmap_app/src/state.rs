// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boothmap_catalog::BoothId;
use boothmap_directory::DirectoryQuery;
use boothmap_view2d::ViewportController;
use kurbo::Point;
use tracing::debug;

use crate::action::{Action, Effect};
use crate::config::VenueConfig;
use crate::dataset::Venue;
use crate::gesture::{DragTracker, Release};
use crate::panels::{OutsideRegions, Panels};
use crate::timers::{Timer, TimerQueue};

/// All mutable state of the venue map.
///
/// State changes only through [`VenueState::reduce`]. The viewport transform
/// is owned by the [`ViewportController`]; the selected booth is written only
/// by the select and clear paths of the reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct VenueState {
    viewport: ViewportController,
    selected: Option<BoothId>,
    panels: Panels,
    query: DirectoryQuery,
    drag: DragTracker,
    timers: TimerQueue,
    regions: OutsideRegions,
    now_ms: u64,
    started: bool,
}

impl VenueState {
    /// Initial state: nothing selected, every panel closed, viewport not ready.
    #[must_use]
    pub fn new(config: &VenueConfig) -> Self {
        Self {
            viewport: ViewportController::new(config.viewport_config()),
            selected: None,
            panels: Panels::empty(),
            query: DirectoryQuery::default(),
            drag: DragTracker::default(),
            timers: TimerQueue::default(),
            regions: OutsideRegions::default(),
            now_ms: 0,
            started: false,
        }
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// The selected booth.
    #[must_use]
    pub fn selected(&self) -> Option<BoothId> {
        self.selected
    }

    /// Open panels.
    #[must_use]
    pub fn panels(&self) -> Panels {
        self.panels
    }

    /// Returns `true` if every panel in `panel` is open.
    #[must_use]
    pub fn is_open(&self, panel: Panels) -> bool {
        self.panels.contains(panel)
    }

    /// Current directory search and filter.
    #[must_use]
    pub fn query(&self) -> &DirectoryQuery {
        &self.query
    }

    /// Pending timers.
    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Registered dropdown regions.
    #[must_use]
    pub fn regions(&self) -> &OutsideRegions {
        &self.regions
    }

    /// Returns `true` while a pointer press is tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Last time observed through [`Action::Tick`].
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns `true` if anything but the clock differs from `other`.
    #[must_use]
    pub fn differs_from(&self, other: &Self) -> bool {
        self.viewport.debug_info() != other.viewport.debug_info()
            || self.selected != other.selected
            || self.panels != other.panels
            || self.query != other.query
            || self.drag != other.drag
            || self.timers != other.timers
            || self.regions != other.regions
            || self.started != other.started
    }

    /// Applies `action`, returning work for the host.
    pub fn reduce(&mut self, venue: &Venue, config: &VenueConfig, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();
        match action {
            Action::Start => {
                if !self.started {
                    self.started = true;
                    let due = self.now_ms + config.startup.measure_delay_ms;
                    self.timers.schedule(due, Timer::MeasureContainer);
                    self.fire_due(&mut effects);
                }
            }
            Action::ContainerResized(size) => {
                if !self.viewport.set_container_size(size) {
                    debug!(
                        width = size.width,
                        height = size.height,
                        "container too small, viewport not ready"
                    );
                }
            }
            Action::BoothClicked(id) => self.booth_clicked(venue, id),
            Action::DirectorySelect(id) => self.directory_select(venue, config, id),
            Action::CloseDetails => {
                self.panels.remove(Panels::DETAILS);
                self.selected = None;
                self.timers.cancel(|t| matches!(t, Timer::OpenDetails(_)));
            }
            Action::ToggleDirectory => self.panels.toggle(Panels::DIRECTORY),
            Action::CloseDirectory => self.panels.remove(Panels::DIRECTORY),
            Action::SetSearch(text) => self.query.search = text,
            Action::SetFilter(filter) => self.query.filter = filter,
            Action::ToggleControls => self.panels.toggle(Panels::CONTROLS),
            Action::ToggleLegend => self.panels.toggle(Panels::LEGEND),
            Action::ZoomIn => {
                if self.viewport.zoom_in(config.viewport.zoom_duration_ms).is_none() {
                    debug!("zoom in ignored, viewport not ready");
                }
            }
            Action::ZoomOut => {
                if self.viewport.zoom_out(config.viewport.zoom_duration_ms).is_none() {
                    debug!("zoom out ignored, viewport not ready");
                }
            }
            Action::ResetView => {
                if self.viewport.reset(config.viewport.reset_duration_ms).is_none() {
                    debug!("reset ignored, viewport not ready");
                }
            }
            Action::PointerDown(pt) => self.pointer_down(pt),
            Action::PointerMove(pt) => {
                if let Some(delta) = self.drag.drag(pt) {
                    let _ = self.viewport.pan_by(delta);
                }
            }
            Action::PointerUp(pt) => self.pointer_up(venue, config, pt),
            Action::Wheel { at, delta } => {
                if delta != 0.0 && delta.is_finite() {
                    let factor = (1.0 + config.viewport.wheel_step).powf(-delta);
                    let _ = self.viewport.zoom_about_view_point(at, factor, 0);
                }
            }
            Action::Pinch { center, factor } => {
                let _ = self.viewport.zoom_about_view_point(center, factor, 0);
            }
            Action::SetRegion(region, rect) => self.regions.set(region, rect),
            Action::ClearRegion(region) => self.regions.clear(region),
            Action::Tick(now_ms) => {
                self.now_ms = self.now_ms.max(now_ms);
                self.viewport.tick(self.now_ms);
                self.fire_due(&mut effects);
            }
        }
        effects
    }

    fn select(&mut self, id: BoothId) {
        self.selected = Some(id);
    }

    fn booth_clicked(&mut self, venue: &Venue, id: BoothId) {
        if venue.catalog().booth(id).is_none() {
            debug!(booth = id.get(), "click on unknown booth ignored");
            return;
        }
        self.select(id);
        self.timers.cancel(|t| matches!(t, Timer::OpenDetails(_)));
        self.panels.insert(Panels::DETAILS);
    }

    fn directory_select(&mut self, venue: &Venue, config: &VenueConfig, id: BoothId) {
        let center = venue
            .positions()
            .get(id)
            .filter(|_| venue.catalog().booth(id).is_some());
        let Some(center) = center else {
            debug!(booth = id.get(), "booth has no map position, ignoring selection");
            return;
        };

        let pan = &config.pan;
        if self
            .viewport
            .pan_to(center, pan.target_scale, pan.duration_ms)
            .is_none()
        {
            debug!(booth = id.get(), "viewport not ready, ignoring selection");
            return;
        }
        self.select(id);
        self.panels.remove(Panels::DIRECTORY);
        self.timers
            .schedule(self.now_ms + pan.details_delay_ms, Timer::OpenDetails(id));
    }

    fn pointer_down(&mut self, pt: Point) {
        let outside = self.regions.panels_outside(pt);
        self.panels.remove(outside);
        if self.regions.hits_any(pt) {
            self.drag.cancel();
        } else {
            self.drag.press(pt);
        }
    }

    fn pointer_up(&mut self, venue: &Venue, config: &VenueConfig, pt: Point) {
        if self.drag.release(pt, config.interaction.click_tolerance) != Release::Click {
            return;
        }
        let hit = self
            .viewport
            .view_to_content(pt)
            .and_then(|content| venue.booth_at(content));
        if let Some(id) = hit {
            self.booth_clicked(venue, id);
        }
    }

    fn fire_due(&mut self, effects: &mut Vec<Effect>) {
        for timer in self.timers.take_due(self.now_ms) {
            match timer {
                Timer::MeasureContainer => effects.push(Effect::MeasureContainer),
                Timer::OpenDetails(id) => {
                    if self.selected == Some(id) {
                        self.panels.insert(Panels::DETAILS);
                    }
                }
            }
        }
    }
}
