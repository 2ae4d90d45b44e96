//! Mouse handling
//!
//! Hit-tests each mouse event against the regions recorded during the last
//! render and forwards it to the session as a pointer event.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::suggest::{PointerTarget, SessionEvent};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let target = app.layout_regions.target_at(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved => handle_hover(app, target),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, target),
        MouseEventKind::Up(MouseButton::Left) => app.dispatch(SessionEvent::PointerUp),
        _ => {}
    }
}

/// Moving over a row moves the highlight with it
fn handle_hover(app: &mut App, target: PointerTarget) {
    if target.is_row() {
        app.dispatch(SessionEvent::PointerEnter(target));
    }
}

/// The press is delivered before the focus change it causes
fn handle_click(app: &mut App, target: PointerTarget) {
    app.dispatch(SessionEvent::PointerDown(target));

    match target {
        PointerTarget::Input => app.focus_input(),
        PointerTarget::Outside => app.blur_input(),
        PointerTarget::Candidate(_) | PointerTarget::SearchAll => {}
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
