use tracing::{debug, info};

use super::board::Board;
use super::player::Player;
use super::rules::{self, GameOutcome};
use crate::error::MoveError;

/// Turn sequencing on top of the board: who moves next and whether the
/// game has ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Get current player. Once the game is over this stays on the player
    /// who made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Number of pieces played so far
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Play the current player's piece into `column`.
    ///
    /// On error nothing changes and the same player is still to move. On
    /// success the mover is checked for a win before the board is checked
    /// for a draw. Returns the `(row, column)` the piece landed on.
    pub fn play(&mut self, column: usize) -> Result<(usize, usize), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        debug!(player = player.number(), row, column, "piece dropped");

        // No line existed before this move, so only the mover can have one now.
        self.outcome = rules::outcome(&self.board);
        match self.outcome {
            GameOutcome::Winner(winner) => {
                info!(player = winner.number(), moves = self.move_count(), "game won");
            }
            GameOutcome::Draw => info!(moves = self.move_count(), "game drawn"),
            GameOutcome::InProgress => self.current_player = player.other(),
        }

        Ok((row, column))
    }

    /// Start a fresh game
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    /// A full game that fills the board without either side connecting four.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4,
        5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_play_alternates_players() {
        let mut state = GameState::new();
        assert_eq!(state.play(3), Ok((5, 3)));

        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().get(5, 3), Cell::One);

        state.play(3).unwrap();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.board().get(4, 3), Cell::Two);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::new();
        for _ in 0..6 {
            state.play(0).unwrap();
        }
        let before = state;

        assert_eq!(state.play(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(state.play(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(state, before);
        assert_eq!(state.move_count(), 6);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new();

        // Player one wins with horizontal line
        for col in 0..4 {
            state.play(col).unwrap();
            if col < 3 {
                state.play(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::One));
        assert_eq!(state.outcome(), rules::outcome(state.board()));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.play(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::new();
        for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {i}");
            state.play(col).unwrap();
        }

        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert!(rules::is_draw(state.board()));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let moves = [
            1, 2, 4, 6, 5, 2, 1, 0, 2, 5, 4, 0, 6, 5, 4, 1, 5, 2, 1, 6, 3, 4, 0, 4, 5, 2, 5, 4,
            6, 2, 6, 3, 6, 0, 1, 1, 0, 0, 3, 3, 3, 3,
        ];
        let mut state = GameState::new();
        for &col in &moves[..41] {
            state.play(col).unwrap();
        }
        assert!(!state.is_terminal());
        assert_eq!(state.current_player(), Player::Two);

        state.play(3).unwrap();
        assert!(state.board().is_full());
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::Two));
        assert!(!rules::is_draw(state.board()));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.play(2).unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
