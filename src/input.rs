use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Mouse press. While the game is terminal this is the restart tap.
    PointerDown,
    Confirm,
    Quit,
}

/// Maps a completed swipe gesture to its direction.
///
/// The dominant axis of the press-to-release delta wins. Ties, including the
/// zero-delta tap, fall to the vertical branch, so a plain tap reads as `Up`.
#[must_use]
pub fn swipe_direction(start: (u16, u16), end: (u16, u16)) -> Direction {
    let dx = i32::from(end.0) - i32::from(start.0);
    let dy = i32::from(end.1) - i32::from(start.1);

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Input source configuration resolved at startup.
#[derive(Debug, Clone, Copy)]
pub struct InputConfig {
    /// Whether mouse gestures are interpreted at all.
    pub mouse_enabled: bool,
}

/// Polls terminal events and folds them into [`GameInput`] values.
///
/// A mouse gesture spans two events: the press records the start position,
/// the release is mapped through [`swipe_direction`]. Keyboard events map
/// directly.
#[derive(Debug)]
pub struct InputHandler {
    config: InputConfig,
    gesture_start: Option<(u16, u16)>,
}

impl InputHandler {
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            gesture_start: None,
        }
    }

    /// Waits up to `timeout` for one terminal event and maps it.
    ///
    /// Returns `Ok(None)` when no event arrived or the event carries no
    /// gameplay meaning (resize, mouse drag, key release).
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }

        match crossterm::event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            Event::Mouse(mouse) if self.config.mouse_enabled => Ok(self.map_mouse(mouse)),
            _ => Ok(None),
        }
    }

    /// Discards an in-flight gesture start.
    ///
    /// Called when a press was consumed as a restart tap, so the matching
    /// release does not also steer the freshly reset snake.
    pub fn cancel_gesture(&mut self) {
        self.gesture_start = None;
    }

    fn map_mouse(&mut self, mouse: MouseEvent) -> Option<GameInput> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.gesture_start = Some((mouse.column, mouse.row));
                Some(GameInput::PointerDown)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.gesture_start.take()?;
                Some(GameInput::Direction(swipe_direction(
                    start,
                    (mouse.column, mouse.row),
                )))
            }
            _ => None,
        }
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
