use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use swipe_snake::config::{theme_by_name, GridSize, Theme, THEME_CLASSIC};
use swipe_snake::game::{GameState, GameStatus};
use swipe_snake::input::{GameInput, InputConfig, InputHandler};
use swipe_snake::platform::Platform;
use swipe_snake::renderer;
use swipe_snake::settings::{load_settings, save_settings, Settings};
use swipe_snake::terminal_runtime::{restore_terminal_best_effort, TerminalSession};
use swipe_snake::timer::Ticker;
use swipe_snake::ui::hud::HudInfo;

/// Poll timeout doubling as frame pacing.
const FRAME_POLL_TIMEOUT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Color theme: classic, plain or neon.
    #[arg(long)]
    theme: Option<String>,

    /// RNG seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable mouse capture and swipe gestures.
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// Write the effective settings back to the settings file.
    #[arg(long = "save-config")]
    save_config: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let platform = Platform::detect();

    let mut settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Warning: ignoring settings file: {error}");
            Settings::default()
        }
    };
    apply_cli_overrides(&mut settings, &cli);

    if cli.save_config {
        if let Err(error) = save_settings(&settings) {
            eprintln!("Warning: could not save settings: {error}");
        }
    }

    let theme = match theme_by_name(&settings.theme) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "Warning: unknown theme '{}', using '{}'",
                settings.theme, THEME_CLASSIC.name
            );
            &THEME_CLASSIC
        }
    };

    install_panic_hook();

    run(&cli, platform, &settings, theme)
}

fn run(cli: &Cli, platform: Platform, settings: &Settings, theme: &Theme) -> io::Result<()> {
    let mouse_enabled = settings.mouse && !cli.no_mouse && platform.mouse_capture_reliable();
    let mut session = TerminalSession::enter(mouse_enabled)?;
    let mut input = InputHandler::new(InputConfig { mouse_enabled });

    let bounds = settings.bounds();
    let mut state = new_game(bounds, cli.seed);
    let mut ticker = Ticker::new(Duration::from_millis(settings.tick_interval_ms));
    ticker.start(Instant::now());

    let mut session_best: u32 = 0;

    loop {
        let hud_info = HudInfo {
            theme,
            session_best,
            mouse_enabled,
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &hud_info))?;

        if let Some(event) = input.poll_input(FRAME_POLL_TIMEOUT)? {
            match event {
                GameInput::Quit => break,
                GameInput::PointerDown | GameInput::Confirm
                    if state.status == GameStatus::GameOver =>
                {
                    // The tap restarts; drop the gesture so its release
                    // does not steer the fresh snake.
                    input.cancel_gesture();
                    state = new_game(bounds, cli.seed);
                    ticker.start(Instant::now());
                }
                other => state.apply_input(other),
            }
        }

        if ticker.poll(Instant::now()) {
            state.tick();
            if state.status == GameStatus::GameOver {
                ticker.cancel();
                session_best = session_best.max(state.score);
            }
        }
    }

    Ok(())
}

fn new_game(bounds: GridSize, seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    }
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms.max(1);
    }
    if let Some(theme) = &cli.theme {
        settings.theme = theme.clone();
    }
    if cli.no_mouse {
        settings.mouse = false;
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Disabling mouse capture when it was never armed is harmless.
        let _ = restore_terminal_best_effort(true);
        default_hook(panic_info);
    }));
}
