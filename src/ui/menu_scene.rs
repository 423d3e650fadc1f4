//! Game select menu rendering.

use crate::games::GameKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the game select list with the highlighted game's description.
pub fn render_game_menu(frame: &mut Frame, area: Rect, selected_index: usize) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GameKind::ALL.len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(List::new(menu_items(selected_index)), chunks[0]);

    if let Some(kind) = GameKind::ALL.get(selected_index) {
        let lines = vec![
            Line::from(Span::styled(
                kind.title(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                kind.description(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let detail = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(detail, chunks[1]);
    }

    let help = Paragraph::new("[↑/↓] Navigate  [Enter] Play  [q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn menu_items(selected_index: usize) -> Vec<ListItem<'static>> {
    GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == selected_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{} {}", prefix, kind.icon(), kind.title())).style(style)
        })
        .collect()
}
