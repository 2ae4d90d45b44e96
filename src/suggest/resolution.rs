//! Accept-action resolution
//!
//! Turns Enter or a click into either navigation to one candidate or a
//! free-text submit of the current query.

use super::candidate::{Candidate, CandidateId};

/// Outcome of an accept action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NavigateToCandidate(CandidateId),
    SubmitQuery(String),
}

/// Resolve Enter (or a click on the "search all" row)
///
/// Navigation only happens when the surface is open and a candidate is
/// highlighted; everything else submits the typed text.
pub fn resolve(
    open: bool,
    candidates: &[Candidate],
    highlighted: Option<usize>,
    query: &str,
) -> Resolution {
    if !open {
        return Resolution::SubmitQuery(query.to_string());
    }

    match highlighted.and_then(|i| candidates.get(i)) {
        Some(candidate) => Resolution::NavigateToCandidate(candidate.id.clone()),
        None => Resolution::SubmitQuery(query.to_string()),
    }
}

/// Resolve a click on a candidate row, ignoring the current highlight
pub fn resolve_click(candidate: &Candidate) -> Resolution {
    Resolution::NavigateToCandidate(candidate.id.clone())
}
