//! Highlight navigation over the visible candidate list
//!
//! Keyboard and pointer share one highlight; whichever moved it last wins.
//! `None` is the free-text position, i.e. the trailing "search all" row.

/// Keys the suggestion surface reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Tracks which candidate is highlighted
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    /// Highlighted candidate index (None = no candidate, free text implied)
    highlighted: Option<usize>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self { highlighted: None }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlight as an integer in `[-1, n-1]`
    pub fn as_signed(&self) -> isize {
        self.highlighted.map_or(-1, |i| i as isize)
    }

    /// Back to the free-text position
    pub fn reset(&mut self) {
        self.highlighted = None;
    }

    /// Move down, wrapping from the last candidate to the first
    pub fn move_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.highlighted = match self.highlighted {
            Some(current) if current + 1 < count => Some(current + 1),
            _ => Some(0),
        };
    }

    /// Move up, wrapping from the first candidate to the last
    ///
    /// From the free-text position this lands on the last candidate.
    pub fn move_up(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.highlighted = match self.highlighted {
            Some(current) if current > 0 && current < count => Some(current - 1),
            _ => Some(count - 1),
        };
    }

    /// Pointer entered candidate row `index`
    pub fn hover_candidate(&mut self, index: usize, count: usize) {
        if index < count {
            self.highlighted = Some(index);
        }
    }

    /// Pointer entered the "search all" row
    pub fn hover_search_all(&mut self) {
        self.highlighted = None;
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
