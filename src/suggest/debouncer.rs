//! Debouncer for suggestion fetches
//!
//! Collapses a burst of query edits into one trigger fired after a quiet
//! period. Time is passed in explicitly so the host loop owns the clock and
//! tests stay deterministic.

use std::time::{Duration, Instant};

/// What the debouncer did with a query change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceAction {
    /// Blank text: suggestions must be hidden now, nothing is fetched
    Clear,
    /// A trigger is pending until the given deadline
    Scheduled(Instant),
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Single-timer debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Record a query change
    ///
    /// Any earlier pending trigger is replaced, so at most one timer is live.
    /// Blank queries cancel the timer and never reach the network.
    pub fn on_change(&mut self, query: &str, now: Instant) -> DebounceAction {
        if query.trim().is_empty() {
            self.pending = None;
            return DebounceAction::Clear;
        }

        let deadline = now + self.delay;
        self.pending = Some(Pending {
            query: query.to_string(),
            deadline,
        });
        DebounceAction::Scheduled(deadline)
    }

    /// Fire the pending trigger if its quiet period has elapsed
    ///
    /// Returns the text to fetch. The trigger is consumed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Drop the pending trigger, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending trigger, for sizing the event-loop wait
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
