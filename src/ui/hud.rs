use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{Theme, WallMode};
use crate::game::GameState;

/// Renders the one-line score band between the brand and the LCD.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    session_best: u32,
    theme: &Theme,
) {
    let mode_tag = match state.wall_mode() {
        WallMode::Wrap => "WRAP",
        WallMode::Walled => "WALL",
    };

    let line = Line::from(vec![
        Span::styled(
            format!("SCORE {:04}", state.score),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("BEST {:04}", session_best.max(state.score)),
            Style::default().fg(theme.hud_score),
        ),
        Span::raw("  "),
        Span::styled(mode_tag, Style::default().fg(theme.menu_footer)),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::config::{GridSize, WallMode, THEME_LCD};
    use crate::game::GameState;

    use super::render_hud;

    #[test]
    fn hud_shows_score_and_mode_tag() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let mut state = GameState::new_with_seed(
            GridSize {
                width: 10,
                height: 10,
            },
            WallMode::Wrap,
            1,
        );
        state.score = 7;

        terminal
            .draw(|frame| render_hud(frame, frame.area(), &state, 12, &THEME_LCD))
            .expect("draw succeeds");

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("SCORE 0007"));
        assert!(rendered.contains("BEST 0012"));
        assert!(rendered.contains("WRAP"));
    }
}
