use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{App, Focus};
use crate::suggest::{Candidate, PointerTarget};
use crate::widgets::popup;

/// Title line plus subtitle line
const CANDIDATE_ROW_HEIGHT: u16 = 2;
const LOADING_MARKER: &str = " searching… ";
const PLACEHOLDER: &str = "Search episodes by topic";
const KEY_HINTS: &str = "↑/↓ move · Enter open · Esc close · Tab focus · Ctrl+U clear · Ctrl+C quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.layout_regions.clear();
        self.layout_regions.input = Some(input_area);

        self.render_input(frame, input_area);
        self.render_body(frame, body_area);
        self.render_status(frame, status_area);

        // Drawn last so it overlays the body
        if self.session.is_open() {
            self.render_dropdown(frame, input_area, body_area);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Input;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color));
        if self.session.is_loading() {
            block = block.title_top(
                Line::from(LOADING_MARKER)
                    .right_aligned()
                    .style(Style::default().fg(Color::Yellow)),
            );
        }

        let inner = block.inner(area);
        let query = self.session.query();
        // Leave a cell for the cursor
        let (shown, shown_width) = tail_to_width(query, (inner.width as usize).saturating_sub(1));

        let text = if query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(shown)
        };
        frame.render_widget(Paragraph::new(text).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + shown_width as u16, inner.y));
        }
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Results {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Episodes ")
            .border_style(Style::default().fg(border_color));

        let heading = if let Some(id) = &self.opened {
            Line::from(vec![
                Span::raw("Episode "),
                Span::styled(id.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        } else if let Some(filter) = &self.applied_filter {
            Line::from(vec![
                Span::raw("Filter: "),
                Span::styled(filter.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        } else {
            Line::from(Span::styled("All episodes", Style::default().fg(Color::DarkGray)))
        };

        let lines = vec![
            heading,
            Line::default(),
            Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = if self.status.is_none() && self.warning.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let text = self.status_text().unwrap_or_default();
        frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        let count = u16::try_from(self.session.visible().len()).unwrap_or(u16::MAX);
        // Candidate rows, the search-all row, borders
        let wanted = count
            .saturating_mul(CANDIDATE_ROW_HEIGHT)
            .saturating_add(1 + 2);
        let area = popup::popup_below_anchor(anchor, bounds, wanted);
        if area.height < 3 {
            return;
        }

        popup::clear_area(frame, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));
        frame.render_widget(block, area);
        self.layout_regions.dropdown = Some(area);

        let inner = popup::inset_rect(area, 1, 1);
        let width = inner.width as usize;
        let bottom = inner.y + inner.height;
        let highlighted = self.session.highlighted();
        let mut y = inner.y;

        for (index, candidate) in self.session.visible().iter().enumerate() {
            if y + CANDIDATE_ROW_HEIGHT > bottom {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, CANDIDATE_ROW_HEIGHT);
            let selected = highlighted == Some(index);
            frame.render_widget(candidate_row(candidate, selected, width), row);
            self.layout_regions
                .push_row(row, PointerTarget::Candidate(index));
            y += CANDIDATE_ROW_HEIGHT;
        }

        if y < bottom {
            let row = Rect::new(inner.x, y, inner.width, 1);
            let text = format!("Search all for \"{}\"", self.session.query());
            let style = if highlighted.is_none() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(Span::styled(
                truncate_to_width(&format!("  {}", text), width),
                style,
            ));
            frame.render_widget(Paragraph::new(line), row);
            self.layout_regions.push_row(row, PointerTarget::SearchAll);
        }
    }
}

fn candidate_row(candidate: &Candidate, selected: bool, width: usize) -> Paragraph<'static> {
    let marker = if selected { "► " } else { "  " };
    let text_width = width.saturating_sub(2);

    let (title_style, subtitle_style) = if selected {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let title = pad_to_width(
        format!("{}{}", marker, truncate_to_width(&candidate.title, text_width)),
        width,
    );
    let subtitle = pad_to_width(
        format!(
            "  {}",
            truncate_to_width(&candidate.subtitle().unwrap_or_default(), text_width)
        ),
        width,
    );

    Paragraph::new(vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(subtitle, subtitle_style)),
    ])
}

/// Shorten `text` to `width` columns, ending in an ellipsis when cut
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Longest suffix of `text` fitting in `width` columns, and its width
pub(crate) fn tail_to_width(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    (&text[start..], used)
}

fn pad_to_width(text: String, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
