//! Candidate type returned by the search collaborator

use std::fmt;

/// Stable identifier of a candidate, used for navigation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        CandidateId(id.to_string())
    }
}

/// One selectable suggestion
///
/// Immutable snapshot for a single query. Lists of candidates keep the
/// collaborator's relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: CandidateId,
    pub title: String,
    pub category: Option<String>,
    pub tone: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Whether the UI can navigate to this candidate (e.g. finished episodes)
    pub resolvable: bool,
}

impl Candidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: CandidateId(id.into()),
            title: title.into(),
            category: None,
            tone: None,
            thumbnail_url: None,
            resolvable: true,
        }
    }

    /// Secondary line: "category · tone", either part optional
    pub fn subtitle(&self) -> Option<String> {
        match (self.category.as_deref(), self.tone.as_deref()) {
            (Some(c), Some(t)) => Some(format!("{} · {}", c, t)),
            (Some(c), None) => Some(c.to_string()),
            (None, Some(t)) => Some(t.to_string()),
            (None, None) => None,
        }
    }
}
