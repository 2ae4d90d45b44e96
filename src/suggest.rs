//! Query suggestion engine
//!
//! As the user types, the session debounces the text, issues one search at a
//! time through the request guard, and exposes a navigable candidate list that
//! resolves into either a free-text submit or navigation to one candidate.

pub mod candidate;
pub mod debouncer;
pub mod dismissal;
pub mod navigation;
pub mod request_guard;
pub mod resolution;
pub mod session;
pub mod source;
pub mod store;
pub mod worker;

// Re-export public types
pub use candidate::{Candidate, CandidateId};
pub use debouncer::{DebounceAction, Debouncer};
pub use dismissal::{DismissalWatcher, PointerTarget};
pub use navigation::{NavKey, NavigationController};
pub use request_guard::{RequestGuard, RequestToken, Ticket};
pub use resolution::Resolution;
pub use session::{Effect, SessionEvent, SuggestSession};
pub use source::{HttpSearchSource, SearchSource};
pub use store::{SuggestionState, SuggestionStore};
pub use worker::{FetchJob, FetchResponse, spawn_worker};
