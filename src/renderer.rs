use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::attract::AttractSnake;
use crate::banner::PixelBanner;
use crate::config::{GridSize, Theme, GLYPH_FOOD, GLYPH_SNAKE};
use crate::game::{GameState, GameStatus};
use crate::phone::{self, PhoneLayout};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Presentation-only inputs for one frame.
pub struct ViewInfo<'a> {
    pub theme: &'a Theme,
    pub session_best: u32,
    /// Draw the phone shell when the terminal fits it.
    pub show_phone: bool,
    /// Present while the start screen is up.
    pub start_screen: Option<StartView<'a>>,
}

/// Animation state for the start screen.
pub struct StartView<'a> {
    pub banner: &'a PixelBanner,
    pub revealed: usize,
    pub attract: &'a AttractSnake,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, view: &ViewInfo<'_>) {
    let area = frame.area();
    let bounds = state.bounds();

    let phone_layout = view
        .show_phone
        .then(|| PhoneLayout::compute(area, bounds))
        .flatten();

    let (hud_area, lcd) = match phone_layout {
        Some(layout) => {
            phone::render_shell(frame, &layout, view.theme);
            (layout.hud, layout.lcd)
        }
        None => plain_layout(frame, area, bounds, view.theme),
    };

    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(view.theme.lcd_bg)),
        lcd,
    );

    if let Some(start) = &view.start_screen {
        render_wanderer(frame, lcd, bounds, start.attract, view.theme);
        render_start_menu(
            frame,
            area,
            start.banner,
            start.revealed,
            view.session_best,
            view.theme,
        );
        return;
    }

    render_food(frame, lcd, state, view.theme);
    render_snake(frame, lcd, state, view.theme);
    render_hud(frame, hud_area, state, view.session_best, view.theme);

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, area, view.theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            area,
            state.score,
            view.session_best,
            state.death_reason,
            view.theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, area, state.score, view.theme),
        GameStatus::Playing => {}
    }
}

/// Bordered play area without the phone art, for small terminals.
fn plain_layout(
    frame: &mut Frame<'_>,
    area: Rect,
    bounds: GridSize,
    theme: &Theme,
) -> (Rect, Rect) {
    let width = (bounds.width + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height.saturating_sub(1));

    let screen = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height + 1)) / 2 + 1,
        width,
        height,
    };
    let hud = Rect {
        x: screen.x,
        y: screen.y.saturating_sub(1),
        width,
        height: 1,
    };

    let block = Block::bordered().border_style(Style::default().fg(theme.shell_fg));
    let lcd = block.inner(screen);
    frame.render_widget(block, screen);

    (hud, lcd)
}

fn render_food(frame: &mut Frame<'_>, lcd: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(lcd, state.bounds(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, lcd: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(lcd, state.bounds(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

fn render_wanderer(
    frame: &mut Frame<'_>,
    lcd: Rect,
    bounds: GridSize,
    wanderer: &AttractSnake,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();
    for segment in wanderer.segments() {
        let Some((x, y)) = logical_to_terminal(lcd, bounds, *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(theme.shell_fg));
    }
}

fn logical_to_terminal(lcd: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = lcd.x.saturating_add(x_offset);
    let y = lcd.y.saturating_add(y_offset);
    if x >= lcd.right() || y >= lcd.bottom() {
        return None;
    }

    Some((x, y))
}
