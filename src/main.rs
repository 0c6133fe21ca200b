mod app;
mod audio;
mod clock;
mod error;
mod event;
mod game;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use audio::AudioManager;
use clock::{FrameClock, FPS};
use error::GameError;
use event::{Event, EventHandler, HeldKeys};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Logging goes to a file, since the terminal belongs to the game. Nothing
/// is installed unless `RUST_LOG` is set.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join("data-defender.log");
    match File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
            log::info!("logging to {}", path.display());
        }
        Err(e) => eprintln!("cannot create {}: {}", path.display(), e),
    }
}

/// Raw mode, alternate screen, hidden cursor. Returns whether the terminal
/// will report key releases.
fn setup_terminal() -> Result<(Tui, bool), GameError> {
    enable_raw_mode()?;
    init_screen().inspect_err(|_| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    })
}

fn init_screen() -> Result<(Tui, bool), GameError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && execute!(stdout, PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)).is_ok();
    log::info!("key release events: {}", if enhanced { "yes" } else { "no" });

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, enhanced))
}

fn restore_terminal(terminal: &mut Tui, enhanced: bool) {
    if enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show);
}

fn run(terminal: &mut Tui, audio: &AudioManager, enhanced: bool) -> Result<(), GameError> {
    let mut app = App::new();
    let events = EventHandler::new();
    let mut held = HeldKeys::new(enhanced);
    let mut clock = FrameClock::new(FPS);

    loop {
        let frame = clock.frame();
        for ev in events.drain() {
            match ev {
                Event::Key(key) => app.on_key_event(&mut held, key, frame),
                Event::Closed => app.on_closed(),
            }
        }
        if app.should_quit {
            break;
        }

        app.on_tick(held.steering(frame));
        for effect in app.take_sounds() {
            audio.play(effect);
        }

        terminal.draw(|f| ui::render(f, &app))?;
        clock.tick();
    }

    log::info!("quit after {} frames", clock.frame());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    log::info!("Data Defender starting");

    let audio = AudioManager::open().context("cannot open audio output")?;
    let (mut terminal, enhanced) = setup_terminal().context("cannot set up the terminal")?;

    let result = run(&mut terminal, &audio, enhanced);

    // Always restore the terminal
    restore_terminal(&mut terminal, enhanced);

    result.context("game loop failed")
}
