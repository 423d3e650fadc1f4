//! 2048 game UI rendering.
//!
//! Each tile is drawn as a solid 8x3 block of its color with the value
//! centered on the middle row.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_with_log, render_status_bar,
};
use crate::core::constants::{GRID_SIZE, WINNING_TILE};
use crate::core::event_log::EventLog;
use crate::games::twenty48::Game2048;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TILE_W: u16 = 8;
const TILE_H: u16 = 3;
const GAP: u16 = 1;

const BOARD_BG: Color = Color::Rgb(30, 30, 30);
const EMPTY_TILE: Color = Color::Rgb(45, 45, 45);
const DARK_TEXT: Color = Color::Rgb(119, 110, 101);
const LIGHT_TEXT: Color = Color::Rgb(249, 246, 242);

/// Background color for a tile value.
pub fn tile_color(value: u32) -> Color {
    match value {
        0 => EMPTY_TILE,
        2 => Color::Rgb(238, 228, 218),
        4 => Color::Rgb(237, 224, 200),
        8 => Color::Rgb(242, 177, 121),
        16 => Color::Rgb(245, 149, 99),
        32 => Color::Rgb(246, 124, 95),
        64 => Color::Rgb(246, 94, 59),
        128 => Color::Rgb(237, 207, 114),
        256 => Color::Rgb(237, 204, 97),
        512 => Color::Rgb(237, 200, 80),
        1024 => Color::Rgb(237, 197, 63),
        2048 => Color::Rgb(237, 194, 46),
        _ => Color::Rgb(60, 58, 50),
    }
}

/// Small tiles use dark text, everything above 4 uses light text.
pub fn text_color(value: u32) -> Color {
    if value > 4 {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Render the 2048 game scene.
pub fn render_2048_scene(
    frame: &mut Frame,
    area: Rect,
    game: &Game2048,
    log: &EventLog,
    show_log: bool,
) {
    let layout = create_game_layout(frame, area, " 2048 ", Color::Yellow, 16, 30);

    render_board(frame, layout.content, game);

    if game.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &format!("No moves left. Final score: {}", game.score),
            &[("[R]", "Play again"), ("[Esc]", "Menu")],
        );
        render_status_bar(
            frame,
            layout.status_bar,
            "Game Over",
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            "Slide the tiles",
            Color::Yellow,
            &[("[Arrows/WASD]", "Move"), ("[Esc]", "Menu")],
        );
    }

    render_info_with_log(frame, layout.info_panel, info_lines(game), log, show_log);
}

fn render_board(frame: &mut Frame, area: Rect, game: &Game2048) {
    let n = GRID_SIZE as u16;
    let board_w = n * TILE_W + (n + 1) * GAP;
    let board_h = n * TILE_H + (n + 1) * GAP;
    if area.width < board_w || area.height < board_h {
        let msg = Paragraph::new("Terminal too small for the grid")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let x_off = area.x + (area.width - board_w) / 2;
    let y_off = area.y + (area.height - board_h) / 2;

    let bg_line = " ".repeat(board_w as usize);
    let bg: Vec<Line> = (0..board_h)
        .map(|_| Line::from(Span::styled(bg_line.clone(), Style::default().bg(BOARD_BG))))
        .collect();
    frame.render_widget(
        Paragraph::new(bg),
        Rect::new(x_off, y_off, board_w, board_h),
    );

    for (i, row) in game.grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let x = x_off + GAP + j as u16 * (TILE_W + GAP);
            let y = y_off + GAP + i as u16 * (TILE_H + GAP);
            render_tile(frame, Rect::new(x, y, TILE_W, TILE_H), value);
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, value: u32) {
    let style = Style::default()
        .bg(tile_color(value))
        .fg(text_color(value))
        .add_modifier(Modifier::BOLD);
    let blank = " ".repeat(area.width as usize);
    let label = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };
    let middle = format!("{:^width$}", label, width = area.width as usize);

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let text = if row == area.height / 2 {
                middle.clone()
            } else {
                blank.clone()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn info_lines(game: &Game2048) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let best = game.best_tile();
    let best_style = if best >= WINNING_TILE {
        Style::default()
            .fg(tile_color(WINNING_TILE))
            .add_modifier(Modifier::BOLD)
    } else {
        value
    };

    vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                game.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best tile: ", label),
            Span::styled(best.to_string(), best_style),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", label),
            Span::styled(game.moves.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Tiles: ", label),
            Span::styled(
                format!("{}/{}", game.tile_count(), GRID_SIZE * GRID_SIZE),
                value,
            ),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_colors_follow_palette() {
        assert_eq!(tile_color(2), Color::Rgb(238, 228, 218));
        assert_eq!(tile_color(2048), Color::Rgb(237, 194, 46));
        // Anything past 2048 shares the dark fallback
        assert_eq!(tile_color(4096), Color::Rgb(60, 58, 50));
        assert_eq!(tile_color(0), EMPTY_TILE);
    }

    #[test]
    fn test_text_color_switches_above_four() {
        assert_eq!(text_color(2), DARK_TEXT);
        assert_eq!(text_color(4), DARK_TEXT);
        assert_eq!(text_color(8), LIGHT_TEXT);
    }
}
