use clap::ValueEnum;
use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
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

/// Boundary policy for the play area.
///
/// Both behaviors exist in the original scripts: the phone game kills the
/// snake on wall contact, the screensaver variant wraps toroidally. Which one
/// is active is an explicit per-session choice, never inferred.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum WallMode {
    /// A head outside the grid ends the round.
    Walled,
    /// Head coordinates are taken modulo the grid dimensions.
    Wrap,
}

/// LCD cell colors for the phone display.
#[derive(Debug)]
pub struct Theme {
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    pub food: Color,
    /// Background of the LCD play area.
    pub lcd_bg: Color,
    /// Bezel and keypad art color.
    pub shell_fg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green-on-dark look of the early monochrome phone LCDs.
pub const THEME_LCD: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::LightYellow,
    lcd_bg: Color::Black,
    shell_fg: Color::DarkGray,
    hud_score: Color::Green,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Glyph for snake segments on the LCD.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph for food on the LCD.
pub const GLYPH_FOOD: &str = "●";

/// Phone LCD width in logical cells.
pub const DEFAULT_GRID_WIDTH: u16 = 22;

/// Phone LCD height in logical cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 12;

/// Starting snake length in segments.
pub const INITIAL_SNAKE_LEN: u16 = 4;

/// Fixed tick interval in milliseconds. Not adaptive during a session.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Lower clamp for `--tick-ms`.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Upper clamp for `--tick-ms`.
pub const MAX_TICK_INTERVAL_MS: u64 = 150;
