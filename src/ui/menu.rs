use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::{DeathReason, GameState};
use crate::ui::hud::HudInfo;

/// Draws the game-over popup centered over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) {
    let cause = match state.death_reason {
        Some(DeathReason::WallCollision) => "You hit the wall",
        Some(DeathReason::SelfCollision) => "You hit yourself",
        None => "",
    };
    let is_new_best = state.score >= info.session_best && state.score > 0;

    let mut lines = vec![
        "GAME OVER".to_string(),
        String::new(),
        format!("Score: {}", state.score),
        cause.to_string(),
    ];
    if is_new_best {
        lines.push("Best this session!".to_string());
    }
    lines.push(String::new());
    let restart_hint = if info.mouse_enabled {
        "Tap or press Enter to restart"
    } else {
        "Press Enter to restart"
    };
    lines.push(restart_hint.to_string());

    let popup = centered_popup(area, &lines);
    frame.render_widget(Clear, popup);

    let text: Vec<Line<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let mut styled = Line::from(line.as_str());
            if index == 0 {
                styled = styled.style(
                    Style::new()
                        .fg(info.theme.menu_title)
                        .add_modifier(Modifier::BOLD),
                );
            }
            styled
        })
        .collect();

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Sizes the popup to its widest line plus the border and padding, then
/// centers it in `area`.
fn centered_popup(area: Rect, lines: &[String]) -> Rect {
    let content_width = lines
        .iter()
        .map(|line| line.as_str().width())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 6)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_popup;

    #[test]
    fn popup_is_sized_by_the_widest_line_and_centered() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 60,
            height: 30,
        };
        let lines = vec!["GAME OVER".to_string(), "Tap to restart".to_string()];

        let popup = centered_popup(area, &lines);

        // 14 columns of text + 6 for border and padding.
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 13);
    }

    #[test]
    fn popup_never_exceeds_the_available_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 3,
        };
        let lines = vec!["a considerably wider line than the area".to_string()];

        let popup = centered_popup(area, &lines);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
