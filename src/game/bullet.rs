use std::sync::OnceLock;

use crate::game::raster::{Look, Raster, YELLOW};
use crate::game::{Bounds, Sprite, TickCtx};

pub const BULLET_WIDTH: i32 = 10;
pub const BULLET_HEIGHT: i32 = 20;
pub const BULLET_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct Bullet {
    x: i32,
    y: i32,
    alive: bool,
}

impl Bullet {
    /// Bullet centred on `center_x` with its bottom edge at `bottom`.
    pub fn new(center_x: i32, bottom: i32) -> Self {
        Bullet {
            x: center_x - BULLET_WIDTH / 2,
            y: bottom - BULLET_HEIGHT,
            alive: true,
        }
    }
}

fn look() -> &'static Look {
    static LOOK: OnceLock<Look> = OnceLock::new();
    LOOK.get_or_init(|| Look::new(Raster::filled(BULLET_WIDTH as usize, BULLET_HEIGHT as usize, YELLOW)))
}

impl Sprite for Bullet {
    fn update(&mut self, _ctx: &mut TickCtx<'_>) {
        self.y -= BULLET_SPEED;
        if self.bounds().bottom() < 0 {
            self.alive = false;
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, w: BULLET_WIDTH, h: BULLET_HEIGHT }
    }

    fn look(&self) -> &'static Look {
        look()
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
