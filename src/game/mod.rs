pub mod bullet;
pub mod enemy;
pub mod mask;
pub mod player;
pub mod raster;
pub mod session;

use rand::RngCore;

use crate::game::mask::Mask;
use crate::game::raster::Look;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

/// Axis-aligned box in screen pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Movement keys held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

/// Per-frame inputs handed to every sprite update.
pub struct TickCtx<'a> {
    pub steering: Steering,
    pub rng: &'a mut dyn RngCore,
}

pub trait Sprite {
    fn update(&mut self, ctx: &mut TickCtx<'_>);
    fn bounds(&self) -> Bounds;
    fn look(&self) -> &'static Look;

    fn mask(&self) -> &Mask {
        &self.look().mask
    }

    /// Sprites that end their own life report it here.
    fn is_alive(&self) -> bool {
        true
    }
}

/// Pixel-exact overlap test between two sprites.
pub fn collide(a: &dyn Sprite, b: &dyn Sprite) -> bool {
    let ab = a.bounds();
    let bb = b.bounds();
    if !ab.intersects(&bb) {
        return false;
    }
    a.mask().overlaps(b.mask(), bb.x - ab.x, bb.y - ab.y)
}
