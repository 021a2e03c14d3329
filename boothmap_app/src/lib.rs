// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boothmap_app --heading-base-level=0

//! Boothmap App: the state container behind an interactive venue map.
//!
//! All mutable state lives in one [`VenueState`]: the
//! [`ViewportController`](boothmap_view2d::ViewportController), the selected
//! booth, the open [`Panels`](panels::Panels), the directory query, the drag
//! tracker, pending timers and the outside-interaction regions. It changes
//! only through [`VenueState::reduce`], one [`Action`] at a time.
//!
//! [`Store`] wraps the state together with the [`Venue`](dataset::Venue) and
//! the [`VenueConfig`](config::VenueConfig), counts revisions and notifies
//! subscribers. A rendering adapter subscribes, reads a [`StoreView`] and
//! draws:
//!
//! - [`MapScene`]: booth tiles and tent outlines, or a loading state.
//! - [`DetailPanel`]: nothing selected, an available booth, or an exhibitor.
//! - [`DirectoryView`](boothmap_directory::DirectoryView): grouped search results.
//! - [`Legend`]: zone, size and assignment swatches.
//!
//! Time is driven by the host through [`Action::Tick`]. The host also answers
//! [`Effect::MeasureContainer`] by dispatching [`Action::ContainerResized`].
//!
//! ## Minimal example
//!
//! ```rust
//! use boothmap_app::{Action, Effect, Store, config::VenueConfig, dataset::Venue};
//! use boothmap_catalog::BoothId;
//! use kurbo::Size;
//!
//! let mut store = Store::new(Venue::builtin().unwrap(), VenueConfig::default());
//! assert!(store.dispatch(Action::Start).is_empty());
//! assert_eq!(store.dispatch(Action::Tick(100)), [Effect::MeasureContainer]);
//! store.dispatch(Action::ContainerResized(Size::new(1200.0, 800.0)));
//!
//! store.dispatch(Action::DirectorySelect(BoothId::new(2).unwrap()));
//! store.dispatch(Action::Tick(450));
//!
//! let view = store.view();
//! assert!(view.details().open);
//! assert_eq!(view.state.viewport().transform().unwrap().scale, 1.5);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod gesture;
pub mod panels;
pub mod timers;

mod action;
mod details;
mod legend;
mod scene;
mod state;
mod store;

pub use action::{Action, Effect};
pub use details::{AVAILABLE_MESSAGE, DetailPanel, DetailView, NO_SELECTION_MESSAGE};
pub use legend::{Legend, LegendEntry, LegendMark, Palette, Swatch};
pub use scene::{BoothTile, LOADING_MESSAGE, MapScene, ReadyScene, TentOutline};
pub use state::VenueState;
pub use store::{Store, StoreView, SubscriptionId};
