//! Suggestion store
//!
//! Holds the last fetched candidate list and the derived open/closed flag.
//! The state is replaced wholesale on every transition.

use super::candidate::Candidate;
use crate::error::SearchError;

/// Lifecycle of the suggestion list for one input session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionState {
    /// Nothing fetched yet, or cleared
    #[default]
    Idle,
    /// A fetch is in flight; the previous list stays on screen meanwhile
    Loading { previous: Vec<Candidate> },
    /// Latest fetch succeeded (possibly with an empty list)
    Ready(Vec<Candidate>),
    /// Latest fetch failed; nothing is shown
    Error,
}

#[derive(Debug, Clone)]
pub struct SuggestionStore {
    state: SuggestionState,
    max_visible: usize,
    /// Set by Escape / outside interaction, cleared by the next applied list
    dismissed: bool,
}

impl SuggestionStore {
    pub fn new(max_visible: usize) -> Self {
        Self {
            state: SuggestionState::Idle,
            max_visible,
            dismissed: false,
        }
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Enter `Loading` at the moment a fetch is issued
    pub fn begin_loading(&mut self) {
        let previous = self.visible().to_vec();
        self.state = SuggestionState::Loading { previous };
    }

    /// Apply the outcome of the current request
    ///
    /// Successful lists keep only resolvable candidates, in the order given,
    /// capped to the visible maximum. A fresh list clears any earlier
    /// dismissal. Failures leave nothing on screen.
    pub fn apply(&mut self, outcome: Result<Vec<Candidate>, SearchError>) {
        match outcome {
            Ok(candidates) => {
                let visible = candidates
                    .into_iter()
                    .filter(|c| c.resolvable)
                    .take(self.max_visible)
                    .collect();
                self.state = SuggestionState::Ready(visible);
                self.dismissed = false;
            }
            Err(e) => {
                log::debug!("Suggestions unavailable: {}", e);
                self.state = SuggestionState::Error;
            }
        }
    }

    /// Leave `Loading` after its request was abandoned
    ///
    /// The list that was on screen becomes the `Ready` payload again, so a
    /// later restore can reopen it.
    pub fn abandon_loading(&mut self) {
        if let SuggestionState::Loading { previous } = &mut self.state {
            let previous = std::mem::take(previous);
            self.state = if previous.is_empty() {
                SuggestionState::Idle
            } else {
                SuggestionState::Ready(previous)
            };
        }
    }

    /// Back to `Idle`, forgetting the list and any dismissal
    pub fn clear(&mut self) {
        self.state = SuggestionState::Idle;
        self.dismissed = false;
    }

    /// Hide the surface without dropping the payload
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Undo a dismissal; returns whether the surface is now open
    pub fn restore(&mut self) -> bool {
        self.dismissed = false;
        self.is_open()
    }

    /// Candidates currently on screen (Ready list, or the previous list while loading)
    pub fn visible(&self) -> &[Candidate] {
        match &self.state {
            SuggestionState::Ready(list) => list,
            SuggestionState::Loading { previous } => previous,
            SuggestionState::Idle | SuggestionState::Error => &[],
        }
    }

    /// Derived open flag
    pub fn is_open(&self) -> bool {
        !self.dismissed && !self.visible().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SuggestionState::Loading { .. })
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
