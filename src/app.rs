use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::audio::SoundEffect;
use crate::event::HeldKeys;
use crate::game::session::{Outcome, Session};
use crate::game::Steering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Waiting,
    Running,
    GameOver,
}

pub struct App {
    pub should_quit: bool,
    pub state: GameState,
    pub session: Session,
}

impl App {
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            should_quit: false,
            state: GameState::Waiting,
            session,
        }
    }

    pub fn on_tick(&mut self, steering: Steering) {
        if self.state != GameState::Running {
            return;
        }
        if self.session.tick(steering) == Outcome::PlayerDestroyed {
            log::info!("game over, final score {}", self.session.score());
            self.state = GameState::GameOver;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Quit keys work in every state
        let quit = match key.code {
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
            _ => false,
        };
        if quit {
            self.should_quit = true;
            return;
        }

        match self.state {
            GameState::Waiting => {
                if key.code == KeyCode::Char(' ') {
                    log::info!("round started");
                    self.state = GameState::Running;
                }
            }
            GameState::Running => {
                if key.code == KeyCode::Char(' ') {
                    self.session.shoot();
                }
            }
            GameState::GameOver => {
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    log::info!("restarting");
                    self.session.reset();
                    self.state = GameState::Running;
                }
            }
        }
    }

    /// Routes a raw key event: held state is always tracked, and only new
    /// keydowns reach `on_key`, so an OS-repeated Space fires once.
    pub fn on_key_event(&mut self, held: &mut HeldKeys, key: KeyEvent, frame: u64) {
        let fresh = held.is_fresh_press(&key, frame);
        held.observe(&key, frame);
        if fresh {
            self.on_key(key);
        }
    }

    /// Close the input source: same as quitting.
    pub fn on_closed(&mut self) {
        self.should_quit = true;
    }

    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        self.session.drain_sounds()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::enemy::Enemy;
    use crate::game::session::ENEMY_COUNT;
    use crate::game::Sprite;

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn running_app() -> App {
        let mut app = App::with_session(Session::with_seed(11));
        press(&mut app, KeyCode::Char(' '));
        app
    }

    #[test]
    fn starts_waiting_and_space_starts_the_round() {
        let mut app = App::with_session(Session::with_seed(11));
        assert_eq!(app.state, GameState::Waiting);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state, GameState::Running);
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.session.enemies().len(), ENEMY_COUNT);
        // The start key does not fire
        assert!(app.session.bullets().is_empty());
    }

    #[test]
    fn waiting_ignores_other_keys_and_does_not_tick() {
        let mut app = App::with_session(Session::with_seed(11));
        let before: Vec<_> = app.session.enemies().iter().map(|e| e.bounds()).collect();
        for code in [KeyCode::Char('r'), KeyCode::Enter, KeyCode::Left, KeyCode::Char('x')] {
            press(&mut app, code);
        }
        app.on_tick(Steering { left: true, right: false });
        assert_eq!(app.state, GameState::Waiting);
        assert!(!app.should_quit);
        assert!(app.session.bullets().is_empty());
        let after: Vec<_> = app.session.enemies().iter().map(|e| e.bounds()).collect();
        assert_eq!(before, after);
        assert!(app.take_sounds().is_empty());
    }

    #[test]
    fn quit_keys_work_in_every_state() {
        for state in [GameState::Waiting, GameState::Running, GameState::GameOver] {
            for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
                let mut app = App::with_session(Session::with_seed(1));
                app.state = state;
                press(&mut app, code);
                assert!(app.should_quit, "{code:?} in {state:?}");
            }
            let mut app = App::with_session(Session::with_seed(1));
            app.state = state;
            app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn plain_c_does_not_quit() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.should_quit);
    }

    #[test]
    fn space_fires_while_running() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.bullets().len(), 2);
        assert_eq!(app.take_sounds(), vec![SoundEffect::Laser, SoundEffect::Laser]);
    }

    #[test]
    fn held_space_fires_once_without_release_reports() {
        let mut app = running_app();
        let mut held = HeldKeys::new(false);
        for frame in 0..6 {
            app.on_key_event(&mut held, KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), frame);
            app.on_tick(Steering::default());
        }
        assert_eq!(app.session.bullets().len(), 1);
        assert_eq!(app.take_sounds(), vec![SoundEffect::Laser]);
    }

    #[test]
    fn collision_ends_the_round_and_restart_resets_it() {
        let mut app = running_app();
        app.session.enemies[0] = Enemy::at(378, 540, 0, 0);
        app.on_tick(Steering::default());
        assert_eq!(app.state, GameState::GameOver);

        // Frozen until restart; fire does nothing
        let score = app.session.score();
        press(&mut app, KeyCode::Char(' '));
        app.on_tick(Steering::default());
        assert_eq!(app.state, GameState::GameOver);
        assert!(app.session.bullets().is_empty());
        assert_eq!(app.session.score(), score);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, GameState::Running);
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.session.enemies().len(), ENEMY_COUNT);
        assert!(app.session.bullets().is_empty());
        assert_eq!(app.session.player().bounds().x, 375);
        assert_eq!(app.session.sprites().count(), 1 + ENEMY_COUNT);
    }

    #[test]
    fn closed_input_quits() {
        let mut app = running_app();
        app.on_closed();
        assert!(app.should_quit);
    }
}
