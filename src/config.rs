use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 28;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Fixed simulation tick cadence in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Terminal columns per logical grid cell. Terminal cells are roughly twice
/// as tall as they are wide, so two columns per cell renders square-ish.
pub const CELL_COLUMNS: u16 = 2;

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Fill color for the head cell.
    pub snake_head: Color,
    /// Fill color for body segments.
    pub snake_body: Color,
    /// Fill color for food.
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Default theme, matching the original dark palette.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::Rgb(80, 180, 255),
    snake_body: Color::Rgb(100, 220, 120),
    food: Color::Rgb(255, 100, 100),
    play_bg: Color::Rgb(18, 18, 18),
    border_fg: Color::DarkGray,
    hud_fg: Color::Rgb(240, 240, 240),
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(240, 240, 240),
};

/// High-contrast theme for 16-color terminals.
pub const THEME_PLAIN: Theme = Theme {
    name: "plain",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Gray,
    hud_fg: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::White,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_fg: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
};

/// All available themes in lookup order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_PLAIN, THEME_NEON];

/// Looks up a theme by its case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{theme_by_name, GridSize, THEME_CLASSIC};

    #[test]
    fn grid_size_total_cells() {
        let grid = GridSize {
            width: 20,
            height: 28,
        };
        assert_eq!(grid.total_cells(), 560);
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        let theme = theme_by_name("Classic").expect("classic theme should exist");
        assert_eq!(theme.name, THEME_CLASSIC.name);
        assert!(theme_by_name("does-not-exist").is_none());
    }
}
