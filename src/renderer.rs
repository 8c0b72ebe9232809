use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, CELL_COLUMNS};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_game_over_menu;

/// Glyph filling one grid cell (two terminal columns).
const GLYPH_CELL_FILL: &str = "██";

/// Food glyph, padded to cell width.
const GLYPH_FOOD: &str = "◆ ";

/// Renders the full game frame from immutable state.
///
/// This is a passive read: the state is never mutated here.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let theme = info.theme;
    let board = board_rect(play_area, state.bounds());
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);
    render_hud(frame, hud_area, state, info);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, board, state, info);
    }
}

/// Maps one logical grid cell to its terminal rectangle.
///
/// Pure: depends only on the play-area origin, the grid bounds, and the
/// position. Returns `None` for out-of-grid positions or cells clipped away
/// by a too-small terminal.
#[must_use]
pub fn cell_rect(inner: Rect, bounds: GridSize, position: Position) -> Option<Rect> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some(Rect {
        x,
        y,
        width: CELL_COLUMNS,
        height: 1,
    })
}

fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    // Grid plus one border cell on each side.
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(rect) = cell_rect(inner, state.bounds(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(rect.x, rect.y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some(rect) = cell_rect(inner, state.bounds(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(rect.x, rect.y, GLYPH_CELL_FILL, style);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::cell_rect;

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 28,
    };

    #[test]
    fn cell_rect_maps_origin_to_play_area_origin() {
        let inner = Rect {
            x: 3,
            y: 2,
            width: 40,
            height: 28,
        };

        let rect = cell_rect(inner, BOUNDS, Position { x: 0, y: 0 })
            .expect("origin cell should be visible");
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (3, 2, 2, 1));
    }

    #[test]
    fn cell_rect_scales_x_by_cell_columns() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 28,
        };

        let rect = cell_rect(inner, BOUNDS, Position { x: 7, y: 5 })
            .expect("cell should be visible");
        assert_eq!((rect.x, rect.y), (14, 5));
    }

    #[test]
    fn cell_rect_rejects_out_of_grid_positions() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 28,
        };

        assert!(cell_rect(inner, BOUNDS, Position { x: -1, y: 0 }).is_none());
        assert!(cell_rect(inner, BOUNDS, Position { x: 20, y: 0 }).is_none());
        assert!(cell_rect(inner, BOUNDS, Position { x: 0, y: 28 }).is_none());
    }

    #[test]
    fn cell_rect_clips_to_a_small_terminal() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        };

        assert!(cell_rect(inner, BOUNDS, Position { x: 4, y: 1 }).is_some());
        assert!(cell_rect(inner, BOUNDS, Position { x: 5, y: 1 }).is_none());
        assert!(cell_rect(inner, BOUNDS, Position { x: 1, y: 4 }).is_none());
    }
}
