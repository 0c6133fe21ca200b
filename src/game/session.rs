use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::SoundEffect;
use crate::game::bullet::Bullet;
use crate::game::enemy::Enemy;
use crate::game::player::Player;
use crate::game::{collide, Sprite, Steering, TickCtx};

pub const ENEMY_COUNT: usize = 8;
pub const POINTS_PER_KILL: u32 = 10;

/// What a frame did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Survived,
    PlayerDestroyed,
}

/// Everything alive in one round, plus the score and pending sound effects.
pub struct Session {
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) bullets: Vec<Bullet>,
    score: u32,
    rng: StdRng,
    sounds: Vec<SoundEffect>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut s = Session {
            player: Player::new(),
            enemies: Vec::with_capacity(ENEMY_COUNT),
            bullets: Vec::new(),
            score: 0,
            rng,
            sounds: Vec::new(),
        };
        s.reset();
        s
    }

    /// New round: fresh player and enemy pool, no bullets, zero score.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.bullets.clear();
        self.enemies.clear();
        for _ in 0..ENEMY_COUNT {
            self.enemies.push(Enemy::spawn(&mut self.rng));
        }
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[cfg(test)]
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// All live sprites in draw order.
    pub fn sprites(&self) -> impl Iterator<Item = &dyn Sprite> + '_ {
        std::iter::once(&self.player as &dyn Sprite)
            .chain(self.enemies.iter().map(|e| e as &dyn Sprite))
            .chain(self.bullets.iter().map(|b| b as &dyn Sprite))
    }

    pub fn shoot(&mut self) {
        self.bullets.push(self.player.muzzle_bullet());
        self.sounds.push(SoundEffect::Laser);
    }

    /// Sound effects queued since the last call.
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    /// Advance the round by one frame.
    pub fn tick(&mut self, steering: Steering) -> Outcome {
        let mut ctx = TickCtx { steering, rng: &mut self.rng };
        self.player.update(&mut ctx);
        for enemy in &mut self.enemies {
            enemy.update(&mut ctx);
        }
        for bullet in &mut self.bullets {
            bullet.update(&mut ctx);
        }
        self.bullets.retain(|b| b.is_alive());

        self.resolve_shots();

        if self.enemies.iter().any(|e| collide(&self.player, e)) {
            self.sounds.push(SoundEffect::Explosion);
            return Outcome::PlayerDestroyed;
        }
        Outcome::Survived
    }

    fn resolve_shots(&mut self) {
        let before = self.enemies.len();
        let bullets = &mut self.bullets;
        self.enemies.retain(|enemy| {
            let loaded = bullets.len();
            bullets.retain(|b| !collide(enemy, b));
            bullets.len() == loaded
        });

        let destroyed = before - self.enemies.len();
        for _ in 0..destroyed {
            self.score += POINTS_PER_KILL;
            self.sounds.push(SoundEffect::Explosion);
            self.enemies.push(Enemy::spawn(&mut self.rng));
        }
        if destroyed > 0 {
            log::debug!("{} enemies destroyed, score {}", destroyed, self.score);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
