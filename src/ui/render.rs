//! UI renderer implementation.
//!
//! Top-level `render` entry point used by the terminal loop, plus the layout
//! helpers that split the screen into header, info boxes, file list and
//! preview. This module stays pure rendering: it reads state and produces
//! widgets, without owning core logic.

use crate::{
    app::{AppState, Mode},
    core::formatter::sanitize_to_width,
    core::preview::Preview,
    ui::{
        icons,
        overlays::{self, Overlay},
        theme::{self, ColorScheme},
    },
    utils::shorten_home_path,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Renders the entire terminal UI for peruse on each frame.
pub(crate) fn render(frame: &mut Frame, app: &AppState) {
    let scheme = theme::scheme(app.theme_idx());

    frame.render_widget(
        Block::default().style(Style::default().bg(scheme.background)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // info boxes
            Constraint::Min(1),    // list + preview
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app, scheme);
    draw_info_boxes(frame, chunks[1], app, scheme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(2)])
        .split(chunks[2]);
    draw_file_list(frame, main[0], app, scheme);
    draw_preview(frame, main[1], app, scheme);

    draw_footer(frame, chunks[3], app, scheme);

    if let Mode::Searching(search) = app.mode() {
        draw_search(frame, app, search, scheme);
    }

    for overlay in app.overlays().iter() {
        match overlay {
            Overlay::Help => overlays::draw_help(frame, scheme),
            Overlay::Settings { cursor } => {
                overlays::draw_settings(frame, scheme, *cursor, app.theme_idx());
            }
        }
    }
}

fn pane_block(title: &str, scheme: &ColorScheme) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.border))
        .style(Style::default().bg(scheme.surface))
}

fn draw_header(frame: &mut Frame, area: Rect, app: &AppState, scheme: &ColorScheme) {
    let path = shorten_home_path(app.listing().current_dir());
    let mut spans = vec![Span::styled(
        path,
        Style::default()
            .fg(scheme.cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.listing().show_hidden() {
        spans.push(Span::styled(
            "  [hidden shown]",
            Style::default().fg(scheme.yellow),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(pane_block("peruse", scheme));
    frame.render_widget(header, area);
}

fn draw_info_boxes(frame: &mut Frame, area: Rect, app: &AppState, scheme: &ColorScheme) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let info = app.info();
    let content = [
        ("Directory Size", &info.dir_size),
        ("File Size", &info.file_size),
        ("Permissions", &info.permissions),
    ];
    for (rect, (title, value)) in boxes.iter().zip(content) {
        let text = Paragraph::new(Span::styled(
            value.clone(),
            Style::default().fg(scheme.text),
        ))
        .alignment(Alignment::Center)
        .block(pane_block(title, scheme));
        frame.render_widget(text, *rect);
    }
}

fn draw_file_list(frame: &mut Frame, area: Rect, app: &AppState, scheme: &ColorScheme) {
    let listing = app.listing();

    // An unreadable directory renders as a single diagnostic row.
    if listing.entries().is_empty()
        && let Some(err) = listing.last_error()
    {
        let diag = Paragraph::new(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(scheme.pink),
        )))
        .block(pane_block("Files", scheme));
        frame.render_widget(diag, area);
        return;
    }

    let items: Vec<ListItem> = listing
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            if listing.is_parent_row(idx) {
                return ListItem::new(Line::from(Span::styled(
                    "▸ ..",
                    Style::default().fg(scheme.blue),
                )));
            }
            let (marker, color) = icons::entry_marker(entry, scheme);
            let name_style = if entry.is_dir() {
                Style::default()
                    .fg(scheme.blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(scheme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(entry.name().into_owned(), name_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Files", scheme))
        .highlight_style(
            Style::default()
                .bg(scheme.surface_light)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(listing.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &AppState, scheme: &ColorScheme) {
    let width = area.width.saturating_sub(2) as usize;
    let (title, lines) = preview_lines(app.preview(), width, scheme);
    let text = Paragraph::new(lines).block(pane_block(&title, scheme));
    frame.render_widget(text, area);
}

/// Turns the preview content into styled lines, tagging the pane title with
/// the content kind.
fn preview_lines<'a>(
    preview: &'a Preview,
    width: usize,
    scheme: &ColorScheme,
) -> (String, Vec<Line<'a>>) {
    match preview {
        Preview::Plain(lines) => ("Preview".to_string(), plain_lines(lines, width, scheme)),
        Preview::Highlighted(lines, ext) => (
            format!("Preview [{ext}]"),
            plain_lines(lines, width, scheme),
        ),
        Preview::Document(text) => ("Preview [md]".to_string(), document_lines(text, width, scheme)),
        Preview::Directory {
            dir_count,
            file_count,
        } => (
            "Preview".to_string(),
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  {dir_count} directories, {file_count} files"),
                    Style::default().fg(scheme.blue),
                )),
            ],
        ),
        Preview::Diagnostic(diag) => (
            "Preview".to_string(),
            diag.message()
                .lines()
                .map(|l| {
                    Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(scheme.yellow),
                    ))
                })
                .collect(),
        ),
    }
}

fn plain_lines<'a>(lines: &'a [String], width: usize, scheme: &ColorScheme) -> Vec<Line<'a>> {
    lines
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                sanitize_to_width(l, width),
                Style::default().fg(scheme.text),
            ))
        })
        .collect()
}

/// Markdown rendering: headings get color and weight, everything else is
/// body text.
fn document_lines<'a>(text: &'a str, width: usize, scheme: &ColorScheme) -> Vec<Line<'a>> {
    text.lines()
        .map(|l| {
            let style = if l.starts_with('#') {
                Style::default()
                    .fg(scheme.purple_light)
                    .add_modifier(Modifier::BOLD)
            } else if l.starts_with("- ") || l.starts_with("* ") {
                Style::default().fg(scheme.green)
            } else {
                Style::default().fg(scheme.text)
            };
            Line::from(Span::styled(sanitize_to_width(l, width), style))
        })
        .collect()
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &AppState, scheme: &ColorScheme) {
    let line = if let Some(err) = app.listing().last_error() {
        Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(scheme.pink),
        ))
    } else {
        Line::from(Span::styled(
            " j/k move  l open  h up  / search  . hidden  s settings  ? help  q quit",
            Style::default().fg(scheme.border),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_search(
    frame: &mut Frame,
    app: &AppState,
    search: &crate::app::SearchState,
    scheme: &ColorScheme,
) {
    let area = overlays::centered_rect(frame.area(), 70, 20);
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(scheme.cyan)),
        Span::styled(search.query().to_string(), Style::default().fg(scheme.text)),
    ]))
    .block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(scheme.cyan))
            .style(Style::default().bg(scheme.surface)),
    );
    frame.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = search
        .hits()
        .iter()
        .map(|hit| {
            let style = if hit.is_dir() {
                Style::default().fg(scheme.blue)
            } else {
                Style::default().fg(scheme.text)
            };
            ListItem::new(Line::from(Span::styled(hit.relative().to_string(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} results ", search.hits().len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(scheme.border))
                .style(Style::default().bg(scheme.surface)),
        )
        .highlight_style(
            Style::default()
                .bg(scheme.surface_light)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(search.selected()));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
