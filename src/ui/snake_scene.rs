//! Snake game UI rendering.
//!
//! Uses half-block pixel rendering: pairs of vertical game cells are packed
//! into one terminal row using `▀` (upper half block) with fg=top, bg=bottom,
//! which keeps the 40x20 board roughly square in a terminal.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_with_log, render_status_bar,
};
use crate::core::event_log::EventLog;
use crate::games::snake::{CrashCause, SnakeGame, SnakeStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(120, 255, 180);
const BODY_BRIGHT: (f64, f64, f64) = (0.0, 255.0, 136.0);
const BODY_DIM: (f64, f64, f64) = (0.0, 90.0, 50.0);
const FOOD_COLOR: Color = Color::Rgb(255, 77, 77);
const EMPTY_BG: Color = Color::Rgb(30, 30, 30);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the Snake game scene.
pub fn render_snake_scene(
    frame: &mut Frame,
    area: Rect,
    game: &SnakeGame,
    log: &EventLog,
    show_log: bool,
) {
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 12, 30);

    render_play_field(frame, layout.content, game);

    match game.status {
        SnakeStatus::NotStarted => render_start_prompt(frame, layout.content),
        SnakeStatus::GameOver => render_snake_game_over(frame, layout.content, game),
        SnakeStatus::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_with_log(frame, layout.info_panel, info_lines(game), log, show_log);
}

/// Interpolated RGB color for a body segment, bright near the head.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Color of every cell in game coordinates; `None` is empty floor.
fn pixel_grid(game: &SnakeGame) -> Vec<Vec<Option<Color>>> {
    let grid_w = game.grid_width as usize;
    let grid_h = game.grid_height as usize;
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];

    let (fx, fy) = (game.food.x as usize, game.food.y as usize);
    if fx < grid_w && fy < grid_h {
        pixels[fy][fx] = Some(FOOD_COLOR);
    }

    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        let (sx, sy) = (seg.x as usize, seg.y as usize);
        if sx < grid_w && sy < grid_h {
            pixels[sy][sx] = Some(if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            });
        }
    }
    pixels
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid_w = game.grid_width as usize;
    let grid_h = game.grid_height as usize;
    let pixels = pixel_grid(game);

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border = Style::default().fg(BORDER_COLOR);

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = game.score.to_string();
        let label = " Score: ";
        let score_full_len = label.len() + score_val.len() + 1;
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_TL.to_string(), border)];
        spans.push(Span::styled(
            std::iter::repeat(BORDER_H).take(pad_before).collect::<String>(),
            border,
        ));
        spans.push(Span::styled(label, border));
        spans.push(Span::styled(
            format!("{} ", score_val),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            std::iter::repeat(BORDER_H).take(pad_after).collect::<String>(),
            border,
        ));
        spans.push(Span::styled(BORDER_TR.to_string(), border));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Game rows, two per terminal row ─────────────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = pixels.get(top_gy).unwrap_or(&empty_row);
        let bot_row = pixels.get(bot_gy).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

        // Batch consecutive cells with the same colors
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(BORDER_V.to_string(), border));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        s.extend(std::iter::repeat(BORDER_H).take(inner_w));
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(s, border))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    match game.status {
        SnakeStatus::NotStarted => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Space]", "Start"), ("[Esc]", "Menu")],
        ),
        SnakeStatus::Running => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows/WASD]", "Steer"), ("[Esc]", "Menu")],
        ),
        SnakeStatus::GameOver => render_status_bar(
            frame,
            area,
            "Game Over",
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Menu")],
        ),
    }
}

fn info_lines(game: &SnakeGame) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                game.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(game.snake.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", game.speed_ms), value),
        ]),
        Line::from(vec![
            Span::styled("Board: ", label),
            Span::styled(format!("{}x{}", game.grid_width, game.grid_height), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", label),
            Span::styled(format!("  {FULL_BLOCK} "), Style::default().fg(FOOD_COLOR)),
            Span::styled("Food", label),
        ]),
    ]
}

fn render_start_prompt(frame: &mut Frame, area: Rect) {
    if area.height < 5 || area.width < 26 {
        return;
    }

    let prompt = "[ Press Space to Start ]";
    let x = area.x + area.width.saturating_sub(prompt.len() as u16) / 2;
    let y = area.y + area.height / 2;

    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, y, prompt.len() as u16, 1));
}

fn render_snake_game_over(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let message = match game.crash {
        Some(CrashCause::Wall) => format!("The snake hit the wall with {} food eaten.", game.score),
        Some(CrashCause::SelfCollision) => {
            format!("The snake bit itself with {} food eaten.", game.score)
        }
        Some(CrashCause::BoardFull) => {
            format!("The snake fills the whole board! {} food eaten.", game.score)
        }
        None => format!("Final score: {}", game.score),
    };
    render_game_over_banner(
        frame,
        area,
        "GAME OVER",
        &message,
        &[("[R]", "Play again"), ("[Esc]", "Menu")],
    );
}
