// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a [`Store`] the way an event loop would, without a clock.

use boothmap_app::{Action, Effect, Store};
use kurbo::Size;
use tracing::debug;

/// Simulated frame length used while waiting for animations and timers.
const FRAME_MS: u64 = 16;

/// Starts the store and answers its deferred measurement with `container`.
pub(crate) fn mount(store: &mut Store, container: Size) {
    let mut effects = store.dispatch(Action::Start);
    loop {
        if effects.contains(&Effect::MeasureContainer) {
            debug!(width = container.width, height = container.height, "measured");
            store.dispatch(Action::ContainerResized(container));
            return;
        }
        let Some(due) = store.state().timers().next_due() else {
            return;
        };
        effects = store.dispatch(Action::Tick(due));
    }
}

/// Advances time until no animation is running and no timer is pending.
pub(crate) fn settle(store: &mut Store) {
    let mut now = store.state().now_ms();
    let mut frames = 0_u32;
    while store.state().viewport().is_animating() || !store.state().timers().is_empty() {
        now += FRAME_MS;
        frames += 1;
        store.dispatch(Action::Tick(now));
    }
    debug!(frames, now, "settled");
}
