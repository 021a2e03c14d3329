// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred work driven by the host clock.

use boothmap_catalog::BoothId;

/// Work scheduled for later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Ask the host to measure the map container.
    MeasureContainer,
    /// Open the detail panel for a booth selected through the directory.
    OpenDetails(BoothId),
}

impl Timer {
    fn same_kind(self, other: Self) -> bool {
        core::mem::discriminant(&self) == core::mem::discriminant(&other)
    }
}

/// Pending timers ordered by due time.
///
/// At most one timer of each kind is pending: scheduling replaces an earlier
/// timer of the same kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerQueue {
    pending: Vec<(u64, Timer)>,
}

impl TimerQueue {
    /// Schedules `timer` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, timer: Timer) {
        self.pending.retain(|&(_, t)| !t.same_kind(timer));
        let idx = self.pending.partition_point(|&(due, _)| due <= due_ms);
        self.pending.insert(idx, (due_ms, timer));
    }

    /// Removes every pending timer matching `pred`.
    pub fn cancel(&mut self, mut pred: impl FnMut(Timer) -> bool) {
        self.pending.retain(|&(_, t)| !pred(t));
    }

    /// Removes and returns all timers due at or before `now_ms`, earliest first.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Timer> {
        let split = self.pending.partition_point(|&(due, _)| due <= now_ms);
        self.pending.drain(..split).map(|(_, t)| t).collect()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.first().map(|&(due, _)| due)
    }

    /// Returns `true` if `timer` is pending.
    #[must_use]
    pub fn contains(&self, timer: Timer) -> bool {
        self.pending.iter().any(|&(_, t)| t == timer)
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use boothmap_catalog::BoothId;

    use super::{Timer, TimerQueue};

    #[test]
    fn fires_in_due_order() {
        let one = BoothId::new(1).unwrap();
        let mut timers = TimerQueue::default();
        timers.schedule(350, Timer::OpenDetails(one));
        timers.schedule(100, Timer::MeasureContainer);
        assert_eq!(timers.next_due(), Some(100));

        assert!(timers.take_due(99).is_empty());
        assert_eq!(timers.take_due(100), [Timer::MeasureContainer]);
        assert_eq!(timers.take_due(1_000), [Timer::OpenDetails(one)]);
        assert!(timers.is_empty());
    }

    #[test]
    fn rescheduling_replaces_the_same_kind() {
        let one = BoothId::new(1).unwrap();
        let two = BoothId::new(2).unwrap();
        let mut timers = TimerQueue::default();
        timers.schedule(350, Timer::OpenDetails(one));
        timers.schedule(500, Timer::OpenDetails(two));
        assert!(!timers.contains(Timer::OpenDetails(one)));
        assert!(timers.contains(Timer::OpenDetails(two)));

        timers.cancel(|t| matches!(t, Timer::OpenDetails(_)));
        assert!(timers.is_empty());
    }
}
