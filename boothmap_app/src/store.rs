// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use boothmap_directory::{DirectoryIndex, DirectoryView};
use tracing::trace;

use crate::action::{Action, Effect};
use crate::config::VenueConfig;
use crate::dataset::Venue;
use crate::details::{DetailPanel, DetailView};
use crate::legend::{Legend, Palette};
use crate::panels::Panels;
use crate::scene::MapScene;
use crate::state::VenueState;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreView<'_>)>;

/// Owns the venue, the config and the [`VenueState`], and tells subscribers
/// about every change.
///
/// [`Store::dispatch`] runs the reducer, bumps the revision when the state
/// changed and then calls every subscriber with a [`StoreView`]. Subscribers
/// are not called for actions that changed nothing, including ticks that only
/// advanced the clock.
pub struct Store {
    venue: Venue,
    config: VenueConfig,
    palette: Palette,
    state: VenueState,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Creates a store in the initial state.
    #[must_use]
    pub fn new(venue: Venue, config: VenueConfig) -> Self {
        Self {
            state: VenueState::new(&config),
            venue,
            config,
            palette: Palette::default(),
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the palette used for scenes and the legend.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Applies `action` and returns the work the host must perform.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        trace!(?action, "dispatch");
        let before = self.state.clone();
        let effects = self.state.reduce(&self.venue, &self.config, action);
        if self.state.differs_from(&before) {
            self.revision += 1;
            self.notify();
        }
        effects
    }

    /// Registers `subscriber`, called after every state change.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&StoreView<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != len
    }

    /// Read access to everything the rendering adapter needs.
    #[must_use]
    pub fn view(&self) -> StoreView<'_> {
        StoreView {
            venue: &self.venue,
            config: &self.config,
            palette: &self.palette,
            state: &self.state,
            revision: self.revision,
        }
    }

    /// The state.
    #[must_use]
    pub fn state(&self) -> &VenueState {
        &self.state
    }

    /// The venue.
    #[must_use]
    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// The config.
    #[must_use]
    pub fn config(&self) -> &VenueConfig {
        &self.config
    }

    /// Number of state changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn notify(&mut self) {
        let view = StoreView {
            venue: &self.venue,
            config: &self.config,
            palette: &self.palette,
            state: &self.state,
            revision: self.revision,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&view);
        }
    }
}

/// Borrowed snapshot of a [`Store`].
#[derive(Clone, Copy, Debug)]
pub struct StoreView<'a> {
    /// The venue.
    pub venue: &'a Venue,
    /// The config.
    pub config: &'a VenueConfig,
    /// Colors.
    pub palette: &'a Palette,
    /// The state.
    pub state: &'a VenueState,
    /// Revision at the time of the snapshot.
    pub revision: u64,
}

impl<'a> StoreView<'a> {
    /// The map surface.
    #[must_use]
    pub fn scene(&self) -> MapScene {
        MapScene::new(self.venue, self.state, self.palette)
    }

    /// The detail panel.
    #[must_use]
    pub fn details(&self) -> DetailPanel<'a> {
        DetailPanel {
            open: self.state.is_open(Panels::DETAILS),
            view: DetailView::new(self.venue, self.state.selected()),
        }
    }

    /// Directory contents for the current query.
    #[must_use]
    pub fn directory(&self) -> DirectoryView<'a> {
        DirectoryIndex::new(self.venue.catalog()).view(self.state.query(), self.state.selected())
    }

    /// The legend.
    #[must_use]
    pub fn legend(&self) -> Legend {
        Legend::new(self.venue.catalog(), self.palette)
    }
}
