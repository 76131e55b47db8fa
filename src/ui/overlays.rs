//! Overlay stack and popup rendering for help and settings.
//!
//! Overlays draw on top of the normal layout; the topmost one owns the
//! keyboard until it is dismissed.

use crate::ui::theme::{ColorScheme, SCHEMES};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Overlay {
    Help,
    /// Scheme picker; `cursor` indexes [SCHEMES].
    Settings { cursor: usize },
}

pub struct OverlayStack {
    overlays: Vec<Overlay>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }

    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn pop(&mut self) -> Option<Overlay> {
        self.overlays.pop()
    }

    pub fn top(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Overlay> {
        self.overlays.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Overlay> {
        self.overlays.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Centers a `width` x `height` popup inside `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [h] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(h);
    rect
}

const HELP_ROWS: [(&str, &str); 9] = [
    ("j / ↓", "Move down"),
    ("k / ↑", "Move up"),
    ("l / Enter", "Open directory"),
    ("h / ← / Backspace", "Go to parent"),
    (".", "Toggle hidden files"),
    ("/ or Ctrl+F", "Fuzzy search"),
    ("s", "Settings"),
    ("?", "This help"),
    ("q", "Quit"),
];

pub(crate) fn draw_help(frame: &mut Frame, scheme: &ColorScheme) {
    let area = centered_rect(frame.area(), 44, HELP_ROWS.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (keys, action) in HELP_ROWS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<18}"),
                Style::default()
                    .fg(scheme.cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(action, Style::default().fg(scheme.text)),
        ]));
    }

    let block = Block::default()
        .title(" Keybindings ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.cyan))
        .style(Style::default().bg(scheme.surface));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub(crate) fn draw_settings(frame: &mut Frame, scheme: &ColorScheme, cursor: usize, active: usize) {
    let area = centered_rect(frame.area(), 40, SCHEMES.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = SCHEMES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let tag = if i == active { "  (current)" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", s.name), Style::default().fg(scheme.text)),
                Span::styled(tag, Style::default().fg(scheme.border)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Settings - Color Schemes ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.purple))
        .style(Style::default().bg(scheme.surface));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(scheme.background)
                .bg(scheme.cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸");

    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
