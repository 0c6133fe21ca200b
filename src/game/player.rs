use std::sync::OnceLock;

use crate::game::bullet::Bullet;
use crate::game::raster::{Look, Raster, BLUE, NEON_GREEN};
use crate::game::{Bounds, Sprite, TickCtx, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 40;
pub const PLAYER_SPEED: i32 = 8;
/// Gap between the ship's bottom edge and the screen bottom.
const BOTTOM_MARGIN: i32 = 10;

#[derive(Clone, Debug)]
pub struct Player {
    x: i32,
    y: i32,
    speed_x: i32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            x: SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2,
            y: SCREEN_HEIGHT - BOTTOM_MARGIN - PLAYER_HEIGHT,
            speed_x: 0,
        }
    }

    #[cfg(test)]
    pub fn speed_x(&self) -> i32 {
        self.speed_x
    }

    #[cfg(test)]
    pub(crate) fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// A bullet leaving the nose of the ship.
    pub fn muzzle_bullet(&self) -> Bullet {
        let b = self.bounds();
        Bullet::new(b.center_x(), b.top())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

fn look() -> &'static Look {
    static LOOK: OnceLock<Look> = OnceLock::new();
    LOOK.get_or_init(|| {
        let mut r = Raster::new(PLAYER_WIDTH as usize, PLAYER_HEIGHT as usize);
        r.fill_polygon(&[(25.0, 0.0), (50.0, 40.0), (0.0, 40.0)], NEON_GREEN);
        r.fill_circle(25, 25, 5, BLUE);
        Look::new(r)
    })
}

impl Sprite for Player {
    fn update(&mut self, ctx: &mut TickCtx<'_>) {
        self.speed_x = 0;
        if ctx.steering.left {
            self.speed_x = -PLAYER_SPEED;
        }
        if ctx.steering.right {
            self.speed_x = PLAYER_SPEED;
        }
        self.x += self.speed_x;
        self.x = self.x.clamp(0, SCREEN_WIDTH - PLAYER_WIDTH);
    }

    fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, w: PLAYER_WIDTH, h: PLAYER_HEIGHT }
    }

    fn look(&self) -> &'static Look {
        look()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Steering;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn step(p: &mut Player, left: bool, right: bool) {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = TickCtx { steering: Steering { left, right }, rng: &mut rng };
        p.update(&mut ctx);
    }

    #[test]
    fn starts_centred_near_bottom() {
        let p = Player::new();
        let b = p.bounds();
        assert_eq!(b.center_x(), 400);
        assert_eq!(b.bottom(), 590);
        assert_eq!(b.x, 375);
    }

    #[test]
    fn moves_eight_pixels_per_frame() {
        let mut p = Player::new();
        step(&mut p, true, false);
        assert_eq!(p.bounds().x, 367);
        assert_eq!(p.speed_x(), -8);
        step(&mut p, false, true);
        step(&mut p, false, true);
        assert_eq!(p.bounds().x, 383);
        step(&mut p, false, false);
        assert_eq!(p.bounds().x, 383);
        assert_eq!(p.speed_x(), 0);
    }

    #[test]
    fn right_wins_when_both_held() {
        let mut p = Player::new();
        step(&mut p, true, true);
        assert_eq!(p.bounds().x, 383);
    }

    #[test]
    fn clamps_to_screen_edges() {
        let mut p = Player::new();
        p.set_x(3);
        step(&mut p, true, false);
        assert_eq!(p.bounds().left(), 0);
        p.set_x(745);
        step(&mut p, false, true);
        assert_eq!(p.bounds().right(), SCREEN_WIDTH);
    }

    #[test]
    fn y_never_changes() {
        let mut p = Player::new();
        let y = p.bounds().y;
        for _ in 0..10 {
            step(&mut p, true, false);
        }
        assert_eq!(p.bounds().y, y);
    }

    #[test]
    fn mask_has_transparent_corners_and_solid_nose() {
        let p = Player::new();
        assert!(!p.mask().get(0, 0));
        assert!(!p.mask().get(49, 0));
        assert!(p.mask().get(25, 2));
        assert!(p.mask().get(25, 25));
    }

    #[test]
    fn muzzle_bullet_sits_on_the_nose() {
        let p = Player::new();
        let b = p.muzzle_bullet().bounds();
        assert_eq!(b.center_x(), 400);
        assert_eq!(b.bottom(), p.bounds().top());
    }

    proptest! {
        #[test]
        fn x_stays_on_screen(start in -100i32..900, moves in prop::collection::vec(any::<(bool, bool)>(), 1..120)) {
            let mut p = Player::new();
            p.set_x(start);
            for (left, right) in moves {
                step(&mut p, left, right);
                let x = p.bounds().x;
                prop_assert!((0..=SCREEN_WIDTH - PLAYER_WIDTH).contains(&x));
            }
        }
    }
}
