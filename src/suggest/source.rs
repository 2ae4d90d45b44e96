//! Search collaborator
//!
//! `SearchSource` is the one capability the engine consumes. The HTTP
//! implementation talks to the episode backend's list endpoint.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Deserialize;

use super::candidate::{Candidate, CandidateId};
use crate::config::ApiConfig;
use crate::error::SearchError;

/// Backend rejects larger page sizes
const MAX_FETCH_LIMIT: usize = 100;
const RESOLVABLE_STATUS: &str = "completed";

/// Ranked, cancellable search
///
/// Implementations return candidates in relevance order. Cancellation is
/// cooperative: the caller drops the future once the request is superseded.
pub trait SearchSource: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Candidate>, SearchError>>;
}

/// Episode list item as served by `GET /episodes`
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeListItem {
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl From<EpisodeListItem> for Candidate {
    fn from(episode: EpisodeListItem) -> Self {
        Candidate {
            resolvable: episode.status == RESOLVABLE_STATUS,
            id: CandidateId(episode.id),
            title: episode.topic,
            category: episode.category.filter(|c| !c.is_empty()),
            tone: episode.tone.filter(|t| !t.is_empty()),
            thumbnail_url: episode.cover_image_url.filter(|u| !u.is_empty()),
        }
    }
}

/// Decode a `GET /episodes` body into candidates, keeping backend order
pub fn parse_episodes(body: &str) -> Result<Vec<Candidate>, SearchError> {
    let episodes: Vec<EpisodeListItem> =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(episodes.into_iter().map(Candidate::from).collect())
}

/// Search source backed by the episode REST API
#[derive(Debug, Clone)]
pub struct HttpSearchSource {
    client: reqwest::Client,
    base_url: String,
    sort_by: String,
    sort_order: String,
}

impl HttpSearchSource {
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sort_by: config.sort_by.clone(),
            sort_order: config.sort_order.clone(),
        })
    }

    pub fn episodes_url(&self) -> String {
        format!("{}/episodes", self.base_url)
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Candidate>, SearchError> {
        let limit = limit.clamp(1, MAX_FETCH_LIMIT).to_string();
        let response = self
            .client
            .get(self.episodes_url())
            .query(&[
                ("search", query),
                ("limit", limit.as_str()),
                ("sort_by", self.sort_by.as_str()),
                ("sort_order", self.sort_order.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_episodes(&body)
    }
}

impl SearchSource for HttpSearchSource {
    fn search<'a>(
        &'a self,
        query: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Candidate>, SearchError>> {
        self.fetch(query, limit).boxed()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
