use ratatui::prelude::*;

use crate::game::raster::{NEON_GREEN, RED};
use crate::game::SCREEN_HEIGHT;
use crate::ui::{draw_text, BACKGROUND, CYAN, DARK_GREY, WHITE};

fn text(color: Color) -> Style {
    Style::default().fg(color).bg(BACKGROUND)
}

fn heading(color: Color) -> Style {
    text(color).add_modifier(Modifier::BOLD)
}

pub fn render_waiting(frame: &mut Frame, area: Rect) {
    let h = SCREEN_HEIGHT;
    let mid = h / 2;
    draw_text(frame, area, "DATA DEFENDER", heading(CYAN), h / 4);
    draw_text(frame, area, "Defend the server from data viruses", text(NEON_GREEN), h / 4 + 40);

    draw_text(frame, area, "Instructions:", heading(WHITE), mid - 30);
    draw_text(frame, area, "Arrow Keys -> Move", text(WHITE), mid + 20);
    draw_text(frame, area, "Spacebar   -> Shoot", text(WHITE), mid + 50);
    draw_text(frame, area, "Shoot the Red Viruses!", text(RED), mid + 80);
    draw_text(frame, area, "Press SPACE To Start", heading(NEON_GREEN), h * 3 / 4);
    draw_text(frame, area, "[Press Q or ESC to Quit]", text(DARK_GREY), h - 30);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, score: u32) {
    let h = SCREEN_HEIGHT;
    draw_text(frame, area, "GAME OVER", heading(RED), h / 4);
    draw_text(frame, area, &format!("Final Score: {}", score), heading(WHITE), h / 2);
    draw_text(frame, area, "Press 'R' to Restart", text(WHITE), h * 3 / 4);
    draw_text(frame, area, "Press 'Q' or 'ESC' to Quit", text(WHITE), h * 3 / 4 + 40);
}
