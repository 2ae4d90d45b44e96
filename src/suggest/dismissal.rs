//! Dismissal on outside interaction and focus loss
//!
//! The host reports where a pointer press landed; the watcher decides whether
//! that closes the surface. A press on a suggestion row is never a dismissal,
//! and the focus loss that such a press causes is ignored until release.

/// Where a pointer interaction landed, as hit-tested by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Candidate row at this position in the visible list
    Candidate(usize),
    /// The trailing "search all" row
    SearchAll,
    /// The text input, or the dropdown frame between rows
    Input,
    /// Anything outside the component
    Outside,
}

impl PointerTarget {
    pub fn is_row(self) -> bool {
        matches!(self, PointerTarget::Candidate(_) | PointerTarget::SearchAll)
    }
}

#[derive(Debug, Clone)]
pub struct DismissalWatcher {
    attached: bool,
    pressing_row: bool,
}

impl Default for DismissalWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DismissalWatcher {
    pub fn new() -> Self {
        Self {
            attached: true,
            pressing_row: false,
        }
    }

    /// Pointer pressed; returns true if the surface must close
    pub fn on_pointer_down(&mut self, target: PointerTarget) -> bool {
        if !self.attached {
            return false;
        }

        if target.is_row() {
            self.pressing_row = true;
            return false;
        }

        target == PointerTarget::Outside
    }

    /// Pointer released anywhere
    pub fn on_pointer_up(&mut self) {
        self.pressing_row = false;
    }

    /// Input lost focus; returns true if the surface must close
    pub fn on_focus_lost(&mut self) -> bool {
        self.attached && !self.pressing_row
    }

    /// Stop reacting to anything (teardown)
    pub fn detach(&mut self) {
        self.attached = false;
        self.pressing_row = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
