//! Standalone zigzag banner animation.
//!
//! Repeatedly reveals the pixel-art title in a boustrophedon sweep, the way
//! the original marquee script did. Any game key quits.

use std::io;
use std::time::Duration;

use clap::Parser;
use phone_snake::banner::PixelBanner;
use phone_snake::config::THEME_LCD;
use phone_snake::input::{poll_input, GameInput};
use phone_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Delay between reveal steps.
const STEP_INTERVAL: Duration = Duration::from_millis(10);

/// Delay between full reveals.
const LOOP_PAUSE: Duration = Duration::from_millis(500);

#[derive(Debug, Parser)]
#[command(name = "banner", about = "Zigzag pixel banner animation")]
struct Cli {
    /// Animate custom rows instead of the built-in banner (repeat per row).
    #[arg(long = "row")]
    rows: Vec<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let banner = if cli.rows.is_empty() {
        PixelBanner::snake()
    } else {
        let rows: Vec<&str> = cli.rows.iter().map(String::as_str).collect();
        PixelBanner::parse(&rows)
    };

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&banner, &mut session)
}

fn run(banner: &PixelBanner, session: &mut TerminalSession) -> io::Result<()> {
    loop {
        for progress in 0..=banner.traversal_len() {
            draw(banner, progress, session)?;
            if quit_requested(STEP_INTERVAL)? {
                return Ok(());
            }
        }

        if quit_requested(LOOP_PAUSE)? {
            return Ok(());
        }
    }
}

fn draw(banner: &PixelBanner, progress: usize, session: &mut TerminalSession) -> io::Result<()> {
    session.terminal_mut().draw(|frame| {
        let height = u16::try_from(banner.height()).unwrap_or(0);
        let [_, middle, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        let lines: Vec<Line<'_>> = banner
            .render_rows(progress)
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).style(
                Style::default()
                    .fg(THEME_LCD.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
            middle,
        );
    })?;

    Ok(())
}

fn quit_requested(timeout: Duration) -> io::Result<bool> {
    Ok(matches!(
        poll_input(timeout)?,
        Some(GameInput::Quit | GameInput::Restart | GameInput::Pause)
    ))
}
