//! Core Connect Four game logic: board, players, win/draw rules, and the
//! turn sequencing shared by every front end.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use rules::{has_won, is_draw, winning_line, GameOutcome};
pub use state::GameState;
