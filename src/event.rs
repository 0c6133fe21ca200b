use std::collections::HashMap;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind};

use crate::game::Steering;

/// Frames a key stays held after its last press/repeat when the terminal
/// cannot report releases. About 130 ms at 60 FPS, shorter than any OS
/// key-repeat interval.
const HOLD_WINDOW: u64 = 8;

pub enum Event {
    Key(KeyEvent),
    /// The input source is gone (terminal closed or unreadable).
    Closed,
}

/// Reads terminal events on a helper thread so the frame loop never blocks
/// on input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            match event::read() {
                Ok(crossterm::event::Event::Key(key)) => {
                    if tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("input stream closed: {}", e);
                    let _ = tx.send(Event::Closed);
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Everything that arrived since the previous frame, without blocking.
    pub fn drain(&self) -> Vec<Event> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ev) => events.push(ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    events.push(Event::Closed);
                    break;
                }
            }
        }
        events
    }
}

/// Tracks which keys are down.
///
/// With keyboard enhancement the terminal sends release events and a key is
/// held until released. Otherwise only presses and OS repeats arrive, so a
/// key counts as held for `HOLD_WINDOW` frames after it was last seen, and a
/// press inside that window is an OS repeat rather than a new keydown.
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
    reports_release: bool,
}

impl HeldKeys {
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            reports_release,
        }
    }

    pub fn observe(&mut self, key: &KeyEvent, frame: u64) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(normalize(key.code), frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&normalize(key.code));
            }
        }
    }

    /// True if `key` is a new keydown. Call before `observe` for the same
    /// event.
    pub fn is_fresh_press(&self, key: &KeyEvent, frame: u64) -> bool {
        key.kind == KeyEventKind::Press
            && (self.reports_release || !self.is_held(normalize(key.code), frame))
    }

    fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| self.reports_release || frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn steering(&self, frame: u64) -> Steering {
        Steering {
            left: self.is_held(KeyCode::Left, frame),
            right: self.is_held(KeyCode::Right, frame),
        }
    }
}

/// `a`/`d` steer like the arrow keys.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') => KeyCode::Left,
        KeyCode::Char('d') | KeyCode::Char('D') => KeyCode::Right,
        other => other,
    }
}
