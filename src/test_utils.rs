#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Sender};
    use std::time::{Duration, Instant};

    use futures::FutureExt;
    use futures::future::BoxFuture;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::{Config, SuggestConfig};
    use crate::error::SearchError;
    use crate::suggest::{Candidate, FetchJob, FetchResponse, SearchSource, SessionEvent};

    /// `n` resolvable candidates with ids `ep-0..`
    pub fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate::new(format!("ep-{}", i), format!("Episode {}", i)))
            .collect()
    }

    pub fn unresolvable(id: &str) -> Candidate {
        let mut candidate = Candidate::new(id, format!("Draft {}", id));
        candidate.resolvable = false;
        candidate
    }

    /// Default engine settings with a 250ms debounce
    pub fn suggest_config() -> SuggestConfig {
        SuggestConfig::default()
    }

    /// App wired to channels the test drives in place of a worker
    pub fn connected_app(
        config: &Config,
    ) -> (App, UnboundedReceiver<FetchJob>, Sender<FetchResponse>) {
        let mut app = App::new(config);
        let (job_tx, job_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.set_channels(job_tx, response_rx);
        (app, job_rx, response_tx)
    }

    /// Connected app with the dropdown open on `n` candidates for "quantum"
    pub fn open_app(n: usize) -> (App, UnboundedReceiver<FetchJob>, Sender<FetchResponse>) {
        open_app_with(&Config::default(), n)
    }

    pub fn open_app_with(
        config: &Config,
        n: usize,
    ) -> (App, UnboundedReceiver<FetchJob>, Sender<FetchResponse>) {
        let (mut app, mut job_rx, response_tx) = connected_app(config);
        let now = Instant::now();

        app.dispatch_at(SessionEvent::QueryChanged("quantum".to_string()), now);
        app.tick(now + Duration::from_millis(config.suggest.debounce_ms + 50));
        let job = job_rx.try_recv().unwrap();
        response_tx
            .send(FetchResponse {
                token: job.token,
                outcome: Ok(candidates(n)),
            })
            .unwrap();
        app.poll_responses(now + Duration::from_millis(config.suggest.debounce_ms + 100));

        (app, job_rx, response_tx)
    }

    /// Scripted search source: per-query delay and outcome, records calls
    #[derive(Default)]
    pub struct FakeSource {
        script: HashMap<String, (Duration, Result<Vec<Candidate>, SearchError>)>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(
            mut self,
            query: &str,
            delay_ms: u64,
            outcome: Result<Vec<Candidate>, SearchError>,
        ) -> Self {
            self.script.insert(
                query.to_string(),
                (Duration::from_millis(delay_ms), outcome),
            );
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    impl SearchSource for FakeSource {
        fn search<'a>(
            &'a self,
            query: &'a str,
            _limit: usize,
        ) -> BoxFuture<'a, Result<Vec<Candidate>, SearchError>> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(query.to_string());
            }
            let (delay, outcome) = self
                .script
                .get(query)
                .cloned()
                .unwrap_or((Duration::ZERO, Ok(Vec::new())));

            async move {
                tokio::time::sleep(delay).await;
                outcome
            }
            .boxed()
        }
    }
}
