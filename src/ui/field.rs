use std::collections::HashMap;

use ratatui::prelude::*;

use crate::game::session::Session;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::{BACKGROUND, DARK_GREY};

const GRID_STEP: i32 = 50;

/// Braille cells keyed by (column, row); each holds its dot bits and the
/// colour of the last dot drawn into it.
type DotMap = HashMap<(usize, usize), (u8, Color)>;

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Maps the 800x600 logical canvas onto a `w` x `h` cell area, two by four
/// braille dots per cell.
struct Canvas {
    bw: i32,
    bh: i32,
}

impl Canvas {
    fn new(w: usize, h: usize) -> Self {
        Canvas { bw: (w * 2) as i32, bh: (h * 4) as i32 }
    }

    fn plot(&self, map: &mut DotMap, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return;
        }
        let bx = (x * self.bw / SCREEN_WIDTH) as usize;
        let by = (y * self.bh / SCREEN_HEIGHT) as usize;
        let entry = map.entry((bx / 2, by / 4)).or_insert((0, color));
        entry.0 |= braille_bit(bx % 2, by % 4);
        entry.1 = color;
    }
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, w: usize, h: usize, bold: bool) {
    for (&(cx, cy), &(bits, color)) in map {
        if cx < w && cy < h && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(BACKGROUND);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

fn grid_lines(canvas: &Canvas) -> DotMap {
    let mut map = DotMap::new();
    // One dot per braille row/column is enough to draw a continuous line
    let step_x = (SCREEN_WIDTH / canvas.bw).max(1) as usize;
    let step_y = (SCREEN_HEIGHT / canvas.bh).max(1) as usize;
    for x in (0..SCREEN_WIDTH).step_by(GRID_STEP as usize) {
        for y in (0..SCREEN_HEIGHT).step_by(step_y) {
            canvas.plot(&mut map, x, y, DARK_GREY);
        }
    }
    for y in (0..SCREEN_HEIGHT).step_by(GRID_STEP as usize) {
        for x in (0..SCREEN_WIDTH).step_by(step_x) {
            canvas.plot(&mut map, x, y, DARK_GREY);
        }
    }
    map
}

/// Rasterizes the play field: grid first, then every sprite in draw order.
pub fn field_lines(session: &Session, w: usize, h: usize) -> Vec<Line<'static>> {
    let canvas = Canvas::new(w, h);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BACKGROUND)); w]; h];

    write_layer(&mut grid, &grid_lines(&canvas), w, h, false);

    for sprite in session.sprites() {
        let b = sprite.bounds();
        let mut map = DotMap::new();
        for (px, py, color) in sprite.look().raster.opaque_pixels() {
            canvas.plot(&mut map, b.x + px as i32, b.y + py as i32, color);
        }
        write_layer(&mut grid, &map, w, h, true);
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
