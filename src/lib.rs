//! Classic Snake on a faux Nokia phone, rendered in the terminal.
//!
//! The simulation core (`snake`, `food`, `game`) is pure with respect to
//! time and I/O: the host loop owns the tick clock, keyboard polling, and
//! the terminal, and threads explicit state through `GameState::tick`. The
//! rest of the crate is presentation: the phone shell art, the LCD
//! renderer, menus, and the zigzag title banner.

pub mod attract;
pub mod banner;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod phone;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
