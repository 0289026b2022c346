use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use phone_snake::attract::AttractSnake;
use phone_snake::banner::PixelBanner;
use phone_snake::config::{
    GridSize, WallMode, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS,
    MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, THEME_LCD,
};
use phone_snake::game::{GameState, GameStatus};
use phone_snake::input::{poll_input, GameInput};
use phone_snake::renderer::{self, StartView, ViewInfo};
use phone_snake::terminal_runtime::{install_panic_hook, TerminalSession};

/// Frame pacing for input polling and redraws.
const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(15);

/// Banner cells revealed per rendered frame on the start screen.
const BANNER_CELLS_PER_FRAME: usize = 3;

/// Frames the fully revealed banner is held before the reveal restarts.
const BANNER_HOLD_FRAMES: usize = 40;

/// Smallest playable grid; the starting snake needs room to move.
const MIN_GRID_WIDTH: u16 = 8;
const MIN_GRID_HEIGHT: u16 = 6;

#[derive(Debug, Parser)]
#[command(name = "phone-snake", about = "Classic Snake on a faux phone LCD")]
struct Cli {
    /// Boundary policy: die on the wall, or wrap around the edges.
    #[arg(long, value_enum, default_value = "walled")]
    mode: WallMode,

    /// LCD width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// LCD height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Tick interval in milliseconds, clamped to 50-150.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the phone shell art and draw a plain bordered play area.
    #[arg(long = "no-phone")]
    no_phone: bool,
}

impl Cli {
    fn grid(&self) -> GridSize {
        GridSize {
            width: self.width.max(MIN_GRID_WIDTH),
            height: self.height.max(MIN_GRID_HEIGHT),
        }
    }

    fn wall_mode(&self) -> WallMode {
        self.mode
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&cli, &mut session)
}

fn run(cli: &Cli, session: &mut TerminalSession) -> io::Result<()> {
    let grid = cli.grid();
    let wall_mode = cli.wall_mode();
    let tick_interval = cli.tick_interval();

    let mut state = new_round(grid, wall_mode, cli.seed);
    state.status = GameStatus::Paused;

    let banner = PixelBanner::snake();
    let mut attract = AttractSnake::new(grid, cli.seed.unwrap_or(0).wrapping_add(1));
    let mut banner_frame: usize = 0;

    let mut session_best: u32 = 0;
    let mut last_tick = Instant::now();
    let mut last_status = state.status;

    loop {
        let on_start_screen = is_start_screen(&state);
        let revealed = banner_reveal(&banner, banner_frame);

        session.terminal_mut().draw(|frame| {
            let start_screen = on_start_screen.then(|| StartView {
                banner: &banner,
                revealed,
                attract: &attract,
            });
            renderer::render(
                frame,
                &state,
                &ViewInfo {
                    theme: &THEME_LCD,
                    session_best,
                    show_phone: !cli.no_phone,
                    start_screen,
                },
            );
        })?;

        if let Some(game_input) = poll_input(FRAME_POLL_INTERVAL)? {
            if game_input == GameInput::Quit {
                break;
            }
            handle_input(&mut state, game_input, grid, wall_mode, cli.seed);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            if is_start_screen(&state) {
                attract.tick();
            }
            last_tick = Instant::now();
        }

        if is_start_screen(&state) {
            banner_frame += 1;
            if banner_frame >= banner.traversal_len() / BANNER_CELLS_PER_FRAME + BANNER_HOLD_FRAMES
            {
                banner_frame = 0;
            }
        }

        if state.status != last_status {
            if matches!(state.status, GameStatus::GameOver | GameStatus::Victory) {
                session_best = session_best.max(state.score);
            }
            last_status = state.status;
        }
    }

    Ok(())
}

fn handle_input(
    state: &mut GameState,
    input: GameInput,
    grid: GridSize,
    wall_mode: WallMode,
    seed: Option<u64>,
) {
    match input {
        GameInput::Restart if is_start_screen(state) => {
            state.status = GameStatus::Playing;
        }
        GameInput::Restart
            if matches!(state.status, GameStatus::GameOver | GameStatus::Victory) =>
        {
            *state = new_round(grid, wall_mode, seed);
        }
        other => state.apply_input(other),
    }
}

fn new_round(grid: GridSize, wall_mode: WallMode, seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(grid, wall_mode, seed),
        None => GameState::new(grid, wall_mode),
    }
}

fn is_start_screen(state: &GameState) -> bool {
    state.status == GameStatus::Paused && state.tick_count == 0 && state.score == 0
}

fn banner_reveal(banner: &PixelBanner, frame: usize) -> usize {
    (frame * BANNER_CELLS_PER_FRAME).min(banner.traversal_len())
}
