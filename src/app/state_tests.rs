//! Tests for app state and effect handling

use super::*;
use crate::suggest::{NavKey, SuggestionState};
use crate::test_utils::test_helpers::{connected_app, open_app};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_debounced_fetch_is_sent_to_worker() {
    let (mut app, mut job_rx, _tx) = connected_app(&Config::default());
    let now = Instant::now();

    app.dispatch_at(SessionEvent::QueryChanged("quantum".to_string()), now);
    assert!(job_rx.try_recv().is_err());

    app.tick(now + ms(300));

    let job = job_rx.try_recv().unwrap();
    assert_eq!(job.query, "quantum");
    assert!(app.session.is_loading());
}

#[test]
fn test_worker_response_opens_dropdown() {
    let (app, _jobs, _responses) = open_app(3);

    assert!(app.session.is_open());
    assert_eq!(app.session.visible().len(), 3);
}

#[test]
fn test_missing_worker_fails_the_request() {
    let mut app = App::new(&Config::default());
    let now = Instant::now();

    app.dispatch_at(SessionEvent::QueryChanged("quantum".to_string()), now);
    app.tick(now + ms(300));

    assert_eq!(app.session.state(), &SuggestionState::Error);
    assert!(!app.session.is_loading());
    assert!(!app.session.is_open());
}

#[test]
fn test_enter_on_highlighted_row_opens_episode() {
    let (mut app, _jobs, _responses) = open_app(3);

    app.dispatch(SessionEvent::Key(NavKey::Down));
    app.dispatch(SessionEvent::Key(NavKey::Enter));

    assert_eq!(app.opened, Some(CandidateId::from("ep-0")));
    assert_eq!(app.status.as_deref(), Some("Opened episode ep-0"));
    assert!(!app.session.is_open());
}

#[test]
fn test_enter_without_highlight_applies_filter() {
    let (mut app, _jobs, _responses) = open_app(3);

    app.dispatch(SessionEvent::Key(NavKey::Enter));

    assert_eq!(app.applied_filter.as_deref(), Some("quantum"));
    assert_eq!(
        app.status.as_deref(),
        Some("Filtering episodes by \"quantum\"")
    );
    assert_eq!(app.opened, None);
}

#[test]
fn test_poll_timeout_follows_debounce_deadline() {
    let mut app = App::new(&Config::default());
    let now = Instant::now();

    assert_eq!(app.poll_timeout(now), IDLE_POLL);

    app.dispatch_at(SessionEvent::QueryChanged("quantum".to_string()), now);

    assert_eq!(app.poll_timeout(now + ms(200)), ms(50));
    assert_eq!(app.poll_timeout(now + ms(400)), Duration::ZERO);
}

#[test]
fn test_blur_and_focus_reach_the_session() {
    let mut app = App::new(&Config::default());

    app.blur_input();
    assert_eq!(app.focus, Focus::Results);
    assert!(!app.session.is_focused());

    app.focus_input();
    assert_eq!(app.focus, Focus::Input);
    assert!(app.session.is_focused());
}

#[test]
fn test_quit_tears_down_session() {
    let (mut app, _jobs, _responses) = open_app(2);

    app.quit();

    assert!(app.should_quit());
    assert!(app.session.is_torn_down());
    assert!(!app.session.is_open());
}

#[test]
fn test_disconnected_worker_is_dropped_quietly() {
    let (mut app, _job_rx, tx) = connected_app(&Config::default());
    drop(tx);

    app.poll_responses(Instant::now());
    app.poll_responses(Instant::now());

    assert!(app.response_rx.is_none());
}

#[test]
fn test_status_text_prefers_latest_status() {
    let mut app = App::new(&Config::default());
    assert_eq!(app.status_text(), None);

    app.warning = Some("Invalid config file".to_string());
    assert_eq!(app.status_text(), Some("Invalid config file"));

    app.status = Some("Opened episode ep-1".to_string());
    assert_eq!(app.status_text(), Some("Opened episode ep-1"));
}
