//! Shared UI components for the game scenes.

use crate::core::event_log::{EventLog, LogKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area (board/grid) - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create a standardized game layout with outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Esc]", "Menu")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let controls_line = Paragraph::new(controls_line(controls)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Render a compact game-over banner at the bottom of an area.
///
/// Does NOT clear the area, so the final board stays visible behind it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    controls: &[(&str, &str)],
) {
    let banner_height: u16 = 5;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        controls_line(controls),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn log_color(kind: LogKind) -> Color {
    match kind {
        LogKind::Info => Color::Gray,
        LogKind::Good => Color::Green,
        LogKind::Bad => Color::Red,
    }
}

/// Log lines for the bottom of an info panel, newest last, at most `max_lines`.
pub fn event_log_lines(log: &EventLog, max_lines: usize) -> Vec<Line<'static>> {
    let skip = log.len().saturating_sub(max_lines);
    log.entries()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.time_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.message.clone(),
                    Style::default().fg(log_color(entry.kind)),
                ),
            ])
        })
        .collect()
}

/// Info panel body followed by a "Log:" section when enabled.
pub fn render_info_with_log(
    frame: &mut Frame,
    area: Rect,
    mut lines: Vec<Line<'static>>,
    log: &EventLog,
    show_log: bool,
) {
    let inner = render_info_panel_frame(frame, area);

    if show_log && !log.is_empty() {
        let room = (inner.height as usize).saturating_sub(lines.len() + 2);
        if room > 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Log:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(event_log_lines(log, room));
        }
    }

    let text = Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_lines_keeps_newest() {
        let mut log = EventLog::new();
        for i in 0..5 {
            log.add_log_entry(format!("m{}", i), LogKind::Info);
        }
        let lines = event_log_lines(&log, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[1].content, "m4");
    }

    #[test]
    fn test_log_colors_distinct() {
        assert_ne!(log_color(LogKind::Good), log_color(LogKind::Bad));
        assert_ne!(log_color(LogKind::Info), log_color(LogKind::Bad));
    }
}
