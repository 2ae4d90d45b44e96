use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::mouse;
use super::state::{App, Focus};
use crate::suggest::{NavKey, SessionEvent};

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        self.handle_event(event::read()?);
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse_event) => mouse::handle_mouse_event(self, mouse_event),
            // Terminal window focus follows the input
            Event::FocusGained => self.focus_input(),
            Event::FocusLost => self.blur_input(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                match self.focus {
                    Focus::Input => self.blur_input(),
                    Focus::Results => self.focus_input(),
                }
                true
            }
            _ => false,
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Down => self.dispatch(SessionEvent::Key(NavKey::Down)),
            KeyCode::Up => self.dispatch(SessionEvent::Key(NavKey::Up)),
            KeyCode::Enter => self.dispatch(SessionEvent::Key(NavKey::Enter)),
            KeyCode::Esc => self.dispatch(SessionEvent::Key(NavKey::Escape)),
            KeyCode::Char('u') if ctrl => {
                self.applied_filter = None;
                self.dispatch(SessionEvent::ExternalValue(String::new()));
            }
            KeyCode::Backspace => {
                let mut query = self.session.query().to_string();
                if query.pop().is_some() {
                    self.set_query(query);
                }
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let mut query = self.session.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('/') | KeyCode::Enter => self.focus_input(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
