//! Suggestion session
//!
//! One `SuggestSession` per mounted search input. Every input, timer and
//! network event goes through [`SuggestSession::handle`], which mutates state
//! synchronously and returns the effects the host must perform. Ordering
//! rules (stale responses, dismissal vs. selection) live here and nowhere else.

use std::time::Instant;

use super::candidate::{Candidate, CandidateId};
use super::debouncer::{DebounceAction, Debouncer};
use super::dismissal::{DismissalWatcher, PointerTarget};
use super::navigation::{NavKey, NavigationController};
use super::request_guard::{RequestGuard, RequestToken};
use super::resolution::{self, Resolution};
use super::store::{SuggestionState, SuggestionStore};
use super::worker::FetchJob;
use crate::config::{RefocusPolicy, SuggestConfig};
use crate::error::SearchError;

/// Everything that can happen to a session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The user edited the input
    QueryChanged(String),
    /// Host loop woke up; fires the debounce timer if due
    Tick,
    /// A fetch finished, failed or was cancelled
    FetchCompleted {
        token: RequestToken,
        outcome: Result<Vec<Candidate>, SearchError>,
    },
    Key(NavKey),
    PointerEnter(PointerTarget),
    PointerDown(PointerTarget),
    PointerUp,
    FocusGained,
    FocusLost,
    /// The host replaced the query (e.g. a "clear search" control elsewhere)
    ExternalValue(String),
    /// The input is going away
    Teardown,
}

/// Side effects requested by the session
#[derive(Debug, Clone)]
pub enum Effect {
    /// Run this search; report back with `SessionEvent::FetchCompleted`
    Fetch(FetchJob),
    /// Apply the query as a free-text search
    Submit(String),
    /// Open the chosen candidate
    Navigate(CandidateId),
}

impl Effect {
    pub fn from_resolution(resolution: Resolution) -> Self {
        match resolution {
            Resolution::NavigateToCandidate(id) => Effect::Navigate(id),
            Resolution::SubmitQuery(query) => Effect::Submit(query),
        }
    }
}

pub struct SuggestSession {
    query: String,
    debouncer: Debouncer,
    guard: RequestGuard,
    store: SuggestionStore,
    nav: NavigationController,
    watcher: DismissalWatcher,
    fetch_limit: usize,
    refocus: RefocusPolicy,
    focused: bool,
    torn_down: bool,
}

impl SuggestSession {
    pub fn new(config: &SuggestConfig) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(config.debounce_ms),
            guard: RequestGuard::new(),
            store: SuggestionStore::new(config.max_visible),
            nav: NavigationController::new(),
            watcher: DismissalWatcher::new(),
            fetch_limit: config.fetch_limit,
            refocus: config.refocus,
            focused: true,
            torn_down: false,
        }
    }

    /// Apply one event and return the effects to perform, in order
    pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Vec<Effect> {
        if self.torn_down {
            log::debug!("Ignoring {:?} after teardown", event);
            return Vec::new();
        }

        match event {
            SessionEvent::QueryChanged(text) => self.on_query_changed(text, now),
            SessionEvent::Tick => self.on_tick(now),
            SessionEvent::FetchCompleted { token, outcome } => {
                self.on_fetch_completed(token, outcome);
                Vec::new()
            }
            SessionEvent::Key(key) => self.on_key(key),
            SessionEvent::PointerEnter(target) => {
                self.on_pointer_enter(target);
                Vec::new()
            }
            SessionEvent::PointerDown(target) => self.on_pointer_down(target),
            SessionEvent::PointerUp => {
                self.watcher.on_pointer_up();
                Vec::new()
            }
            SessionEvent::FocusGained => self.on_focus_gained(),
            SessionEvent::FocusLost => {
                self.focused = false;
                if self.watcher.on_focus_lost() {
                    self.abandon_pending();
                    self.dismiss();
                }
                Vec::new()
            }
            SessionEvent::ExternalValue(text) => {
                self.on_external_value(text);
                Vec::new()
            }
            SessionEvent::Teardown => {
                self.teardown();
                Vec::new()
            }
        }
    }

    fn on_query_changed(&mut self, text: String, now: Instant) -> Vec<Effect> {
        self.query = text;
        self.focused = true;
        if self.debouncer.on_change(&self.query, now) == DebounceAction::Clear {
            self.reset_suggestions();
        }
        Vec::new()
    }

    fn on_tick(&mut self, now: Instant) -> Vec<Effect> {
        match self.debouncer.poll(now) {
            Some(query) => vec![self.start_fetch(query)],
            None => Vec::new(),
        }
    }

    fn on_fetch_completed(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Candidate>, SearchError>,
    ) {
        if !self.guard.settle(token) {
            return;
        }

        if let Err(SearchError::Cancelled) = outcome {
            log::debug!("Request {} ended by cancellation", token);
            self.store.abandon_loading();
            return;
        }

        self.store.apply(outcome);
        self.nav.reset();
    }

    fn on_key(&mut self, key: NavKey) -> Vec<Effect> {
        let count = self.store.visible().len();
        match key {
            NavKey::Down if self.store.is_open() => self.nav.move_down(count),
            NavKey::Up if self.store.is_open() => self.nav.move_up(count),
            NavKey::Down | NavKey::Up => {}
            NavKey::Enter => {
                let resolution = resolution::resolve(
                    self.store.is_open(),
                    self.store.visible(),
                    self.nav.highlighted(),
                    &self.query,
                );
                return self.finish(resolution);
            }
            NavKey::Escape => self.dismiss(),
        }
        Vec::new()
    }

    fn on_pointer_enter(&mut self, target: PointerTarget) {
        if !self.store.is_open() {
            return;
        }
        match target {
            PointerTarget::Candidate(index) => {
                self.nav.hover_candidate(index, self.store.visible().len())
            }
            PointerTarget::SearchAll => self.nav.hover_search_all(),
            PointerTarget::Input | PointerTarget::Outside => {}
        }
    }

    fn on_pointer_down(&mut self, target: PointerTarget) -> Vec<Effect> {
        let dismiss = self.watcher.on_pointer_down(target);

        // Selection commits before the outside check can close the surface
        if self.store.is_open() {
            match target {
                PointerTarget::Candidate(index) => {
                    if let Some(candidate) = self.store.visible().get(index) {
                        let resolution = resolution::resolve_click(candidate);
                        return self.finish(resolution);
                    }
                }
                PointerTarget::SearchAll => {
                    return self.finish(Resolution::SubmitQuery(self.query.clone()));
                }
                PointerTarget::Input | PointerTarget::Outside => {}
            }
        }

        if dismiss {
            self.dismiss();
        }
        Vec::new()
    }

    fn on_focus_gained(&mut self) -> Vec<Effect> {
        let was_focused = std::mem::replace(&mut self.focused, true);
        if was_focused || self.query.trim().is_empty() || self.store.is_open() {
            return Vec::new();
        }

        match self.refocus {
            RefocusPolicy::Refetch => {
                self.debouncer.cancel();
                vec![self.start_fetch(self.query.clone())]
            }
            RefocusPolicy::Restore => {
                self.nav.reset();
                self.store.restore();
                Vec::new()
            }
        }
    }

    fn on_external_value(&mut self, text: String) {
        if text == self.query {
            return;
        }
        self.query = text;
        self.debouncer.cancel();
        self.reset_suggestions();
    }

    fn start_fetch(&mut self, query: String) -> Effect {
        let ticket = self.guard.issue();
        self.store.begin_loading();
        log::debug!("Fetching suggestions {} for {:?}", ticket.token, query);
        Effect::Fetch(FetchJob {
            token: ticket.token,
            query,
            limit: self.fetch_limit,
            cancel: ticket.cancel,
        })
    }

    /// Close the surface after an accept action and emit its effect
    fn finish(&mut self, resolution: Resolution) -> Vec<Effect> {
        if let Resolution::NavigateToCandidate(id) = &resolution
            && let Some(candidate) = self.store.visible().iter().find(|c| &c.id == id)
        {
            self.query = candidate.title.clone();
        }

        self.abandon_pending();
        self.dismiss();

        vec![Effect::from_resolution(resolution)]
    }

    /// Drop the pending timer and in-flight request so neither can
    /// reopen the surface once it is closed
    fn abandon_pending(&mut self) {
        self.debouncer.cancel();
        if self.guard.cancel_in_flight() {
            self.store.abandon_loading();
        }
    }

    fn dismiss(&mut self) {
        self.store.dismiss();
        self.nav.reset();
    }

    fn reset_suggestions(&mut self) {
        self.guard.cancel_in_flight();
        self.store.clear();
        self.nav.reset();
    }

    fn teardown(&mut self) {
        self.debouncer.cancel();
        self.guard.cancel_in_flight();
        self.watcher.detach();
        self.store.clear();
        self.nav.reset();
        self.query.clear();
        self.torn_down = true;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        !self.torn_down && self.store.is_open()
    }

    /// Candidates the host should render while open
    pub fn visible(&self) -> &[Candidate] {
        if self.is_open() {
            self.store.visible()
        } else {
            &[]
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.nav.highlighted()
    }

    pub fn state(&self) -> &SuggestionState {
        self.store.state()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn has_pending_timer(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.guard.has_in_flight()
    }

    /// When the host loop should next deliver `Tick`
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for SuggestSession {
    fn drop(&mut self) {
        if !self.torn_down {
            self.teardown();
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
