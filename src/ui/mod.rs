pub mod field;
pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, GameState};
use crate::game::SCREEN_HEIGHT;

pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
pub const WHITE: Color = Color::Rgb(255, 255, 255);
pub const CYAN: Color = Color::Rgb(0, 255, 255);
pub const DARK_GREY: Color = Color::Rgb(40, 40, 40);

pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" Data Defender ")
        .title_style(Style::default().fg(CYAN).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BACKGROUND));
    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.state {
        GameState::Waiting => screens::render_waiting(frame, inner),
        GameState::Running => render_running(frame, inner, app),
        GameState::GameOver => screens::render_game_over(frame, inner, app.session.score()),
    }
}

fn render_running(frame: &mut Frame, area: Rect, app: &App) {
    let lines = field::field_lines(&app.session, area.width as usize, area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
    draw_text(
        frame,
        area,
        &format!("Score: {}", app.session.score()),
        Style::default().fg(WHITE).bg(BACKGROUND).add_modifier(Modifier::BOLD),
        10,
    );
}

/// Draws one line of text horizontally centred, with its top at logical
/// canvas height `y` (0..600) scaled into `area`.
pub fn draw_text(frame: &mut Frame, area: Rect, text: &str, style: Style, y: i32) {
    let row = text_row(area, y);
    let width = (text.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let target = Rect::new(x, row, width, 1);
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), target);
}

fn text_row(area: Rect, y: i32) -> u16 {
    let y = y.clamp(0, SCREEN_HEIGHT - 1) as u32;
    let offset = (y * area.height as u32 / SCREEN_HEIGHT as u32) as u16;
    area.y + offset.min(area.height.saturating_sub(1))
}
