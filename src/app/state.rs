use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::error::SearchError;
use crate::layout::LayoutRegions;
use crate::suggest::{CandidateId, Effect, FetchJob, FetchResponse, SessionEvent, SuggestSession};

/// Upper bound on how long the event loop blocks without a pending timer
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Which part of the screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

/// Application state
pub struct App {
    pub session: SuggestSession,
    pub focus: Focus,
    /// Last outcome shown in the status line
    pub status: Option<String>,
    /// Config warning, shown until the first status replaces it
    pub warning: Option<String>,
    /// Free-text filter currently applied to the episode list
    pub applied_filter: Option<String>,
    /// Episode opened from a suggestion
    pub opened: Option<CandidateId>,
    pub layout_regions: LayoutRegions,
    should_quit: bool,
    job_tx: Option<UnboundedSender<FetchJob>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: SuggestSession::new(&config.suggest),
            focus: Focus::Input,
            status: None,
            warning: None,
            applied_filter: None,
            opened: None,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            job_tx: None,
            response_rx: None,
        }
    }

    /// Wire the app to a running fetch worker
    pub fn set_channels(
        &mut self,
        job_tx: UnboundedSender<FetchJob>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.job_tx = Some(job_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.dispatch(SessionEvent::Teardown);
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// Feed one event to the session and perform what it asks for
    pub fn dispatch_at(&mut self, event: SessionEvent, now: Instant) {
        for effect in self.session.handle(event, now) {
            self.perform(effect, now);
        }
    }

    fn perform(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Fetch(job) => self.send_job(job, now),
            Effect::Submit(query) => {
                log::debug!("Applying free-text filter {:?}", query);
                self.status = Some(format!("Filtering episodes by \"{}\"", query));
                self.applied_filter = Some(query);
            }
            Effect::Navigate(id) => {
                log::debug!("Opening episode {}", id);
                self.status = Some(format!("Opened episode {}", id));
                self.opened = Some(id);
            }
        }
    }

    fn send_job(&mut self, job: FetchJob, now: Instant) {
        let token = job.token;
        let sent = match &self.job_tx {
            Some(tx) => tx.send(job).is_ok(),
            None => false,
        };

        if !sent {
            log::warn!("Fetch worker unavailable, failing request {}", token);
            self.dispatch_at(
                SessionEvent::FetchCompleted {
                    token,
                    outcome: Err(SearchError::Network("fetch worker unavailable".to_string())),
                },
                now,
            );
        }
    }

    /// Deliver any finished fetches to the session
    pub fn poll_responses(&mut self, now: Instant) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        log::warn!("Fetch worker hung up");
                        self.response_rx = None;
                        break;
                    }
                }
            }
        }

        for response in responses {
            self.dispatch_at(
                SessionEvent::FetchCompleted {
                    token: response.token,
                    outcome: response.outcome,
                },
                now,
            );
        }
    }

    /// One pass of the host loop: fire due timers, then drain responses
    pub fn tick(&mut self, now: Instant) {
        self.dispatch_at(SessionEvent::Tick, now);
        self.poll_responses(now);
    }

    /// How long the event loop may block before the next `tick`
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.session.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    pub fn set_query(&mut self, text: String) {
        self.dispatch(SessionEvent::QueryChanged(text));
    }

    pub fn focus_input(&mut self) {
        if self.focus != Focus::Input {
            self.focus = Focus::Input;
            self.dispatch(SessionEvent::FocusGained);
        }
    }

    pub fn blur_input(&mut self) {
        if self.focus == Focus::Input {
            self.focus = Focus::Results;
            self.dispatch(SessionEvent::FocusLost);
        }
    }

    /// Status line text: the latest outcome, else the config warning
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref().or(self.warning.as_deref())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
