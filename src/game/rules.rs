//! Win and draw detection over a board snapshot.

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Line directions as (row step, column step): horizontal, vertical,
/// down-right and up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Returns the cells of the first line of four belonging to `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<[(usize, usize); CONNECT]> {
    let target = player.to_cell();

    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != target {
                continue;
            }
            'dir: for (dr, dc) in DIRECTIONS {
                let mut line = [(row, col); CONNECT];
                for (step, slot) in line.iter_mut().enumerate().skip(1) {
                    let r = row as isize + dr * step as isize;
                    let c = col as isize + dc * step as isize;
                    if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                        continue 'dir;
                    }
                    let (r, c) = (r as usize, c as usize);
                    if board.get(r, c) != target {
                        continue 'dir;
                    }
                    *slot = (r, c);
                }
                return Some(line);
            }
        }
    }

    None
}

/// Check whether `player` has four in a row anywhere on the board.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// A full board with no line of four for either player.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Player::One) && !has_won(board, Player::Two)
}

/// Derive the outcome of a position. Wins take precedence over a full board.
pub fn outcome(board: &Board) -> GameOutcome {
    for player in [Player::One, Player::Two] {
        if has_won(board, player) {
            return GameOutcome::Winner(player);
        }
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
