use std::sync::OnceLock;

use rand::{Rng, RngCore};

use crate::game::raster::{Look, Raster, DARK_RED, RED};
use crate::game::{Bounds, Sprite, TickCtx, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const ENEMY_SIZE: i32 = 45;
const STROKE: f32 = 4.0;

// Spawn ranges; lower bound inclusive, upper exclusive unless noted
const SPAWN_Y: (i32, i32) = (-100, -40);
const SPEED_Y: (i32, i32) = (2, 5);
/// Closed interval, so drift is symmetric.
const SPEED_X: (i32, i32) = (-2, 2);

/// How far past the field edges an enemy may drift before it is recycled.
const BOTTOM_SLACK: i32 = 10;
const SIDE_SLACK: i32 = 50;

#[derive(Clone, Debug)]
pub struct Enemy {
    x: i32,
    y: i32,
    speed_x: i32,
    speed_y: i32,
}

impl Enemy {
    pub fn at(x: i32, y: i32, speed_x: i32, speed_y: i32) -> Self {
        Enemy { x, y, speed_x, speed_y }
    }

    /// A fresh enemy somewhere above the field.
    pub fn spawn(rng: &mut dyn RngCore) -> Self {
        let speed_x = rng.gen_range(SPEED_X.0..=SPEED_X.1);
        let mut enemy = Enemy::at(0, 0, speed_x, 0);
        enemy.respawn(rng);
        enemy
    }

    /// Moves back above the field with a new vertical speed. Horizontal
    /// speed is kept.
    fn respawn(&mut self, rng: &mut dyn RngCore) {
        self.x = rng.gen_range(0..SCREEN_WIDTH - ENEMY_SIZE);
        self.y = rng.gen_range(SPAWN_Y.0..SPAWN_Y.1);
        self.speed_y = rng.gen_range(SPEED_Y.0..SPEED_Y.1);
    }

    #[cfg(test)]
    pub fn speed(&self) -> (i32, i32) {
        (self.speed_x, self.speed_y)
    }

    fn off_field(&self) -> bool {
        let b = self.bounds();
        b.bottom() > SCREEN_HEIGHT + BOTTOM_SLACK
            || b.left() < -SIDE_SLACK
            || b.right() > SCREEN_WIDTH + SIDE_SLACK
    }
}

fn look() -> &'static Look {
    static LOOK: OnceLock<Look> = OnceLock::new();
    LOOK.get_or_init(|| {
        let size = ENEMY_SIZE as f32;
        let mid = (ENEMY_SIZE / 2) as f32;
        let mut r = Raster::new(ENEMY_SIZE as usize, ENEMY_SIZE as usize);
        r.draw_line((0.0, 0.0), (size, size), STROKE, RED);
        r.draw_line((0.0, size), (size, 0.0), STROKE, RED);
        r.draw_line((mid, 0.0), (mid, size), STROKE, RED);
        r.draw_line((0.0, mid), (size, mid), STROKE, RED);
        r.fill_circle(ENEMY_SIZE / 2, ENEMY_SIZE / 2, ENEMY_SIZE / 2 - 8, DARK_RED);
        Look::new(r)
    })
}

impl Sprite for Enemy {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        self.y += self.speed_y;
        self.x += self.speed_x;
        if self.off_field() {
            log::debug!("enemy left the field at ({}, {}), respawning", self.x, self.y);
            self.respawn(ctx.rng);
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, w: ENEMY_SIZE, h: ENEMY_SIZE }
    }

    fn look(&self) -> &'static Look {
        look()
    }
}
