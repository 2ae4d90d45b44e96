//! Request guard
//!
//! Mints one token per fetch attempt and cancels whatever was outstanding.
//! Only the outcome tagged with the latest token may touch visible state,
//! which rules out a slow early response overwriting a fast later one.

use std::fmt;

use tokio_util::sync::CancellationToken;

/// Monotonically increasing fetch identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for one issued fetch
#[derive(Debug, Clone)]
pub struct Ticket {
    pub token: RequestToken,
    /// Cancelled as soon as the fetch is superseded or torn down
    pub cancel: CancellationToken,
}

#[derive(Debug)]
struct InFlight {
    token: RequestToken,
    cancel: CancellationToken,
}

/// Tracks the single in-flight suggestion request
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: RequestToken,
    in_flight: Option<InFlight>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request, cancelling the previous one
    pub fn issue(&mut self) -> Ticket {
        self.cancel_in_flight();

        self.latest = RequestToken(self.latest.0.wrapping_add(1));
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            token: self.latest,
            cancel: cancel.clone(),
        });

        Ticket {
            token: self.latest,
            cancel,
        }
    }

    /// Whether `token` is the most recently minted one
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.token == token)
    }

    /// Accept the outcome for `token` if it is still current
    ///
    /// Returns false for superseded or already-settled tokens; their outcome
    /// must be dropped without further inspection.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.in_flight = None;
            true
        } else {
            log::debug!(
                "Dropping stale response {} (latest {})",
                token,
                self.latest
            );
            false
        }
    }

    /// Cancel the outstanding request, if any
    ///
    /// Returns true if a request was cancelled. The token counter is kept, so
    /// a late outcome for the cancelled request is still recognised as stale.
    pub fn cancel_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.cancel.cancel();
                log::debug!("Cancelled request {}", in_flight.token);
                true
            }
            None => false,
        }
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn latest(&self) -> RequestToken {
        self.latest
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
#[path = "request_guard_tests.rs"]
mod request_guard_tests;
