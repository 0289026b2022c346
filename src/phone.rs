//! Static phone shell drawn around the LCD play area.
//!
//! The shell is cosmetic: a brand line, a bezel around the LCD, a keypad
//! block, and a footer hint. When the terminal cannot fit the full art the
//! caller falls back to a plain bordered play area.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{GridSize, Theme};

/// Keypad block drawn under the LCD.
pub const KEYPAD_ART: &[&str] = &[
    " ____  ____  ____ ",
    "| 1  || 2  || 3  |",
    "|____||____||____|",
    "| 4  || 5  || 6  |",
    "|____||____||____|",
    "| 7  || 8  || 9  |",
    "|____||____||____|",
    "| *  || 0  ||  # |",
    "|____||____||____|",
];

/// Brand line above the LCD.
pub const BRAND: &str = "R E T R O  3 2 1 0";

/// Key hint under the keypad.
pub const FOOTER_HINT: &str = "p pause  q quit";

/// Screen regions of the phone shell, in terminal coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PhoneLayout {
    pub brand: Rect,
    pub hud: Rect,
    /// Bezel area including the LCD border.
    pub screen: Rect,
    /// Inner LCD area, exactly `grid` cells.
    pub lcd: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

impl PhoneLayout {
    /// Computes a centered shell layout, or `None` when `area` is too small.
    #[must_use]
    pub fn compute(area: Rect, grid: GridSize) -> Option<Self> {
        let screen_width = grid.width.checked_add(2)?;
        let screen_height = grid.height.checked_add(2)?;
        let keypad_width = art_width(KEYPAD_ART);
        let keypad_height = u16::try_from(KEYPAD_ART.len()).ok()?;

        let shell_width = screen_width.max(keypad_width);
        // brand + hud + screen + keypad + footer
        let shell_height = 2 + screen_height + keypad_height + 1;
        if area.width < shell_width || area.height < shell_height {
            return None;
        }

        let left = area.x + (area.width - shell_width) / 2;
        let top = area.y + (area.height - shell_height) / 2;
        let row = |y: u16, height: u16| Rect {
            x: left,
            y,
            width: shell_width,
            height,
        };

        let screen = Rect {
            x: left + (shell_width - screen_width) / 2,
            y: top + 2,
            width: screen_width,
            height: screen_height,
        };
        let lcd = Rect {
            x: screen.x + 1,
            y: screen.y + 1,
            width: grid.width,
            height: grid.height,
        };
        let keypad = Rect {
            x: left + (shell_width - keypad_width) / 2,
            y: screen.y + screen_height,
            width: keypad_width,
            height: keypad_height,
        };

        Some(Self {
            brand: row(top, 1),
            hud: row(top + 1, 1),
            screen,
            lcd,
            keypad,
            footer: row(keypad.y + keypad_height, 1),
        })
    }
}

/// Draws the static shell art. Game cells render into `layout.lcd` afterwards.
pub fn render_shell(frame: &mut Frame<'_>, layout: &PhoneLayout, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(BRAND))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.shell_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        layout.brand,
    );

    frame.render_widget(
        Block::bordered().border_style(Style::default().fg(theme.shell_fg)),
        layout.screen,
    );

    let keypad_lines: Vec<Line<'_>> = KEYPAD_ART.iter().map(|row| Line::from(*row)).collect();
    frame.render_widget(
        Paragraph::new(keypad_lines).style(Style::default().fg(theme.shell_fg)),
        layout.keypad,
    );

    frame.render_widget(
        Paragraph::new(Line::from(FOOTER_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.shell_fg)),
        layout.footer,
    );
}

fn art_width(art: &[&str]) -> u16 {
    let width = art.iter().map(|row| row.width()).max().unwrap_or(0);
    u16::try_from(width).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;

    use super::{art_width, PhoneLayout, KEYPAD_ART};

    const GRID: GridSize = GridSize {
        width: 22,
        height: 12,
    };

    #[test]
    fn keypad_rows_are_equally_wide() {
        let widths: Vec<_> = KEYPAD_ART.iter().map(|row| row.len()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn layout_fits_and_centers_in_a_large_area() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = PhoneLayout::compute(area, GRID).expect("80x40 fits the shell");

        assert_eq!(layout.lcd.width, GRID.width);
        assert_eq!(layout.lcd.height, GRID.height);
        assert_eq!(layout.lcd.x, layout.screen.x + 1);
        assert_eq!(layout.lcd.y, layout.screen.y + 1);
        assert!(layout.footer.y > layout.keypad.y);
        assert!(layout.footer.bottom() <= area.bottom());
    }

    #[test]
    fn layout_rejects_a_small_area() {
        assert!(PhoneLayout::compute(Rect::new(0, 0, 20, 10), GRID).is_none());
        assert!(PhoneLayout::compute(Rect::new(0, 0, 80, 20), GRID).is_none());
    }

    #[test]
    fn shell_width_covers_both_screen_and_keypad() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = PhoneLayout::compute(area, GRID).expect("80x40 fits the shell");

        assert!(layout.brand.width >= GRID.width + 2);
        assert!(layout.brand.width >= art_width(KEYPAD_ART));
    }
}
