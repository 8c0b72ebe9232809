use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle for one game session: raw mode, alternate screen,
/// hidden cursor, and (when requested) mouse capture for swipe gestures.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    mouse_captured: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen, optionally arms mouse
    /// capture, and creates a ratatui terminal.
    pub fn enter(capture_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        if capture_mouse {
            if let Err(error) = execute!(stdout, EnableMouseCapture) {
                let _ = restore_terminal_best_effort(false);
                return Err(error);
            }
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_captured: capture_mouse,
            }),
            Err(error) => {
                let _ = restore_terminal_best_effort(capture_mouse);
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal_best_effort(self.mouse_captured);
    }
}

/// Restores the terminal regardless of how far setup got. Also used by the
/// panic hook, which cannot know whether mouse capture was armed.
pub fn restore_terminal_best_effort(mouse_captured: bool) -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_captured {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    execute!(stdout, Show, LeaveAlternateScreen)
}
