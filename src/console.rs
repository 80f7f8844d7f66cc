//! Line-oriented front end: prints the board as ASCII and reads a 1-based
//! column number per turn.

use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use tracing::{info, warn};

use crate::config::ConsoleConfig;
use crate::error::{InputError, MoveError};
use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};

/// What the player typed on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(usize),
    Quit,
}

/// Parse one line of input into a 0-based column, or a quit request.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    // Numbers too large for i64 are still numbers, just off the board.
    let number: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => InputError::OutOfRange(i64::MIN),
        _ => InputError::NotANumber(trimmed.to_string()),
    })?;
    if number < 1 || number > COLS as i64 {
        return Err(InputError::OutOfRange(number));
    }
    Ok(Command::Drop((number - 1) as usize))
}

/// Render the board, a separator and the 1-based column footer.
pub fn format_board(board: &Board, markers: &ConsoleConfig) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        out.push('|');
        for col in 0..COLS {
            out.push(match board.get(row, col) {
                Cell::Empty => ' ',
                Cell::One => markers.player_one_marker,
                Cell::Two => markers.player_two_marker,
            });
            out.push('|');
        }
        out.push('\n');
    }
    out.push_str(&"-".repeat(COLS * 2 + 1));
    out.push('\n');
    for col in 0..COLS {
        out.push_str(&format!(" {}", col + 1));
    }
    out.push('\n');
    out
}

fn player_label(player: Player) -> String {
    format!("Player {}", player.number())
}

/// Run one game against the given reader and writer. Returns when the game
/// ends, the player quits, or input runs out.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ConsoleConfig,
) -> io::Result<GameOutcome> {
    let mut game = GameState::new();
    info!("console game started");

    loop {
        write!(output, "{}", format_board(game.board(), config))?;
        writeln!(output, "{}'s turn", player_label(game.current_player()))?;
        write!(output, "Choose a column: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nGame ended by user.")?;
            info!("console game abandoned at end of input");
            return Ok(game.outcome());
        }

        let column = match parse_command(&line) {
            Ok(Command::Drop(column)) => column,
            Ok(Command::Quit) => {
                writeln!(output, "Game ended by user.")?;
                info!("console game quit");
                return Ok(game.outcome());
            }
            Err(InputError::NotANumber(text)) => {
                warn!(input = %text, "rejected non-numeric input");
                writeln!(output, "Invalid input! Please enter a number.")?;
                continue;
            }
            Err(InputError::OutOfRange(number)) => {
                warn!(number, "rejected out-of-range column");
                writeln!(
                    output,
                    "Invalid column! Please choose a column between 1 and {COLS}"
                )?;
                continue;
            }
        };

        match game.play(column) {
            Ok(_) => {}
            Err(MoveError::ColumnFull(_)) => {
                warn!(column, "rejected move into full column");
                writeln!(output, "Column is full! Choose another column.")?;
                continue;
            }
            Err(err) => {
                // parse_command already bounds the column and the loop
                // exits on a terminal outcome, so this is unexpected.
                warn!(%err, "rejected move");
                writeln!(output, "{err}")?;
                continue;
            }
        }

        match game.outcome() {
            GameOutcome::InProgress => {}
            GameOutcome::Winner(player) => {
                write!(output, "{}", format_board(game.board(), config))?;
                writeln!(output, "{} wins!", player_label(player))?;
                return Ok(game.outcome());
            }
            GameOutcome::Draw => {
                write!(output, "{}", format_board(game.board(), config))?;
                writeln!(output, "It's a draw!")?;
                return Ok(game.outcome());
            }
        }
    }
}
