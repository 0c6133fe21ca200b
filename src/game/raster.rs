use ratatui::style::Color;

use crate::game::mask::Mask;

pub const NEON_GREEN: Color = Color::Rgb(57, 255, 20);
pub const RED: Color = Color::Rgb(255, 0, 0);
pub const DARK_RED: Color = Color::Rgb(200, 0, 0);
pub const YELLOW: Color = Color::Rgb(255, 255, 0);
pub const BLUE: Color = Color::Rgb(0, 100, 255);

/// A small sprite image in pixel space. `None` is transparent.
#[derive(Clone, Debug)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Option<Color>>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Raster {
            width,
            height,
            pixels: vec![Some(color); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    fn paint_where(&mut self, color: Color, inside: impl Fn(f32, f32) -> bool) {
        for y in 0..self.height {
            for x in 0..self.width {
                // Sample at the pixel centre
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.pixels[y * self.width + x] = Some(color);
                }
            }
        }
    }

    /// Even-odd fill of a closed polygon.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.paint_where(color, |px, py| {
            let mut inside = false;
            let mut j = points.len() - 1;
            for i in 0..points.len() {
                let (xi, yi) = points[i];
                let (xj, yj) = points[j];
                if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                    inside = !inside;
                }
                j = i;
            }
            inside
        });
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = radius * radius;
        for y in 0..self.height {
            for x in 0..self.width {
                let dx = x as i32 - cx;
                let dy = y as i32 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[y * self.width + x] = Some(color);
                }
            }
        }
    }

    /// A straight stroke `thickness` pixels wide between two points.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        let half = thickness / 2.0;
        let (ax, ay) = from;
        let (bx, by) = to;
        let (vx, vy) = (bx - ax, by - ay);
        let len2 = vx * vx + vy * vy;
        self.paint_where(color, |px, py| {
            let t = if len2 > 0.0 {
                (((px - ax) * vx + (py - ay) * vy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (qx, qy) = (ax + t * vx, ay + t * vy);
            let (dx, dy) = (px - qx, py - qy);
            dx * dx + dy * dy <= half * half
        });
    }

    pub fn opaque_pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter_map(move |(i, p)| p.map(|c| (i % self.width, i / self.width, c)))
    }
}

/// A sprite's drawn shape and the collision mask derived from it.
#[derive(Clone, Debug)]
pub struct Look {
    pub raster: Raster,
    pub mask: Mask,
}

impl Look {
    pub fn new(raster: Raster) -> Self {
        let mask = Mask::from_raster(&raster);
        Look { raster, mask }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_raster_is_fully_opaque() {
        let r = Raster::filled(10, 20, YELLOW);
        assert_eq!(r.opaque_pixels().count(), 200);
        assert_eq!(r.get(9, 19), Some(YELLOW));
        assert_eq!(r.get(10, 0), None);
    }

    #[test]
    fn triangle_fill_leaves_top_corners_clear() {
        let mut r = Raster::new(50, 40);
        r.fill_polygon(&[(25.0, 0.0), (50.0, 40.0), (0.0, 40.0)], NEON_GREEN);
        assert_eq!(r.get(0, 0), None);
        assert_eq!(r.get(49, 0), None);
        assert_eq!(r.get(25, 1), Some(NEON_GREEN));
        assert_eq!(r.get(1, 39), Some(NEON_GREEN));
        assert_eq!(r.get(48, 39), Some(NEON_GREEN));
    }

    #[test]
    fn circle_paints_over_earlier_fill() {
        let mut r = Raster::filled(11, 11, RED);
        r.fill_circle(5, 5, 2, BLUE);
        assert_eq!(r.get(5, 5), Some(BLUE));
        assert_eq!(r.get(7, 5), Some(BLUE));
        assert_eq!(r.get(8, 5), Some(RED));
    }

    #[test]
    fn thick_line_covers_its_path_only() {
        let mut r = Raster::new(20, 20);
        r.draw_line((0.0, 10.0), (20.0, 10.0), 4.0, RED);
        assert_eq!(r.get(0, 9), Some(RED));
        assert_eq!(r.get(19, 10), Some(RED));
        assert_eq!(r.get(10, 5), None);
        assert_eq!(r.get(10, 14), None);
    }

    #[test]
    fn look_mask_matches_raster_opacity() {
        let mut r = Raster::new(8, 8);
        r.fill_circle(4, 4, 2, RED);
        let look = Look::new(r);
        assert_eq!(look.mask.count(), look.raster.opaque_pixels().count());
        assert!(look.mask.get(4, 4));
        assert!(!look.mask.get(0, 0));
    }
}
