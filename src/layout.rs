//! Screen regions recorded during render
//!
//! Mouse events arrive as terminal cells. The renderer records where the
//! input and each dropdown row landed; `target_at` turns a cell back into a
//! `PointerTarget` for the session.

use ratatui::layout::{Position, Rect};

use crate::suggest::PointerTarget;

/// One clickable dropdown row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRegion {
    pub area: Rect,
    pub target: PointerTarget,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub rows: Vec<RowRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous frame
    pub fn clear(&mut self) {
        self.input = None;
        self.dropdown = None;
        self.rows.clear();
    }

    pub fn push_row(&mut self, area: Rect, target: PointerTarget) {
        self.rows.push(RowRegion { area, target });
    }

    pub fn target_at(&self, column: u16, row: u16) -> PointerTarget {
        let position = Position::new(column, row);

        if let Some(hit) = self.rows.iter().find(|r| r.area.contains(position)) {
            return hit.target;
        }

        let inside = |area: Option<Rect>| area.is_some_and(|a| a.contains(position));
        if inside(self.dropdown) || inside(self.input) {
            return PointerTarget::Input;
        }

        PointerTarget::Outside
    }
}
