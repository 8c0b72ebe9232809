use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Supplemental values displayed by the HUD line.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// Best score seen this session; never persisted.
    pub session_best: u32,
    /// Whether swipe gestures are active, for the control hint.
    pub mouse_enabled: bool,
}

/// Renders the single status line below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let value = Style::new().fg(info.theme.hud_fg);
    let label = Style::new().fg(info.theme.hud_muted);

    let hint = if info.mouse_enabled {
        "swipe or arrows to steer, q quits"
    } else {
        "arrows/wasd to steer, q quits"
    };

    let line = Line::from(vec![
        Span::styled("score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  length ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled("  best ", label),
        Span::styled(info.session_best.to_string(), value),
        Span::styled("   ", label),
        Span::styled(hint, label),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
