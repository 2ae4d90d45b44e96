//! Suggestion fetch worker
//!
//! Runs searches on a background thread so the UI loop never blocks on the
//! network. Jobs arrive on a tokio channel; each one runs as its own task
//! racing its cancellation token, and every job reports exactly one
//! `FetchResponse` back on a std channel the UI loop drains between frames.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::candidate::Candidate;
use super::request_guard::RequestToken;
use super::source::SearchSource;
use crate::error::SearchError;

/// One search to run
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub token: RequestToken,
    pub query: String,
    pub limit: usize,
    pub cancel: CancellationToken,
}

/// Result of one job, tagged with the token it was issued under
#[derive(Debug)]
pub struct FetchResponse {
    pub token: RequestToken,
    pub outcome: Result<Vec<Candidate>, SearchError>,
}

/// Spawn the fetch worker thread
///
/// The thread exits once every job sender is dropped and the jobs already
/// started have reported.
pub fn spawn_worker(
    source: Arc<dyn SearchSource>,
    job_rx: UnboundedReceiver<FetchJob>,
    response_tx: Sender<FetchResponse>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(source, job_rx, response_tx));
        })
}

/// Receive jobs until the channel closes, then wait for running ones
async fn worker_loop(
    source: Arc<dyn SearchSource>,
    mut job_rx: UnboundedReceiver<FetchJob>,
    response_tx: Sender<FetchResponse>,
) {
    let mut tasks = tokio::task::JoinSet::new();

    while let Some(job) = job_rx.recv().await {
        let source = Arc::clone(&source);
        let response_tx = response_tx.clone();
        tasks.spawn(async move {
            let token = job.token;
            let outcome = run_job(source.as_ref(), job).await;
            if response_tx.send(FetchResponse { token, outcome }).is_err() {
                log::debug!("UI gone, dropping response {}", token);
            }
        });

        // Reap finished tasks so the set does not grow for the whole session
        while tasks.try_join_next().is_some() {}
    }

    while tasks.join_next().await.is_some() {}
    log::debug!("Suggestion worker shutting down");
}

/// Run one search, giving up as soon as the job is cancelled
pub async fn run_job(source: &dyn SearchSource, job: FetchJob) -> Result<Vec<Candidate>, SearchError> {
    if job.cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = job.cancel.cancelled() => Err(SearchError::Cancelled),
        result = source.search(&job.query, job.limit) => result,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
