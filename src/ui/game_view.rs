use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::context::{RenderContext, CELL_WIDTH};
use crate::game::{winning_line, Board, GameOutcome, GameState, Player, COLS, ROWS};

const PIECE: &str = " \u{25cf} ";
const GHOST: &str = " \u{25cb} ";

pub fn render(
    frame: &mut Frame,
    ctx: &mut RenderContext,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, ctx, game_state, chunks[0]);
    render_board(frame, ctx, game_state, selected_column, chunks[1]);
    render_message(frame, ctx, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, ctx: &RenderContext, game_state: &GameState, area: Rect) {
    let theme = &ctx.theme;
    let (status, color) = match game_state.outcome() {
        GameOutcome::InProgress => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", theme.label(player)),
                theme.color(player),
            )
        }
        GameOutcome::Winner(player) => (
            format!("Game Over  |  {} wins", theme.label(player)),
            theme.color(player),
        ),
        GameOutcome::Draw => ("Game Over  |  Draw".to_string(), theme.accent),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(theme.title));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    ctx: &mut RenderContext,
    game_state: &GameState,
    selected_column: usize,
    area: Rect,
) {
    let theme = ctx.theme;
    let board = game_state.board();
    let rect = ctx.place_board(area);

    let winner = match game_state.outcome() {
        GameOutcome::Winner(player) => winning_line(board, player),
        _ => None,
    };
    // Only preview while a move can still be made.
    let pending = (!game_state.is_terminal()).then(|| game_state.current_player());
    let ghost_row = pending.and_then(|_| board.landing_row(selected_column));

    let mut lines = Vec::new();

    // Pending piece above the selected column
    let mut pending_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        match pending {
            Some(player) if col == selected_column => pending_line.push(Span::styled(
                PIECE,
                Style::default()
                    .fg(theme.color(player))
                    .add_modifier(Modifier::BOLD),
            )),
            _ => pending_line.push(Span::raw("   ")),
        }
    }
    lines.push(Line::from(pending_line));

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from(frame_line('╔', '╗')));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            row_spans.push(cell_span(
                ctx,
                board,
                row,
                col,
                winner.is_some_and(|line| line.contains(&(row, col))),
                pending.filter(|_| col == selected_column && ghost_row == Some(row)),
            ));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(frame_line('╚', '╝')));

    frame.render_widget(Paragraph::new(lines), rect);
}

/// Top or bottom edge of the board, as wide as a row of cells.
fn frame_line(left: char, right: char) -> String {
    let inner = "═".repeat((CELL_WIDTH * COLS as u16) as usize + 1);
    format!("  {left}{inner}{right}")
}

fn cell_span(
    ctx: &RenderContext,
    board: &Board,
    row: usize,
    col: usize,
    highlighted: bool,
    ghost: Option<Player>,
) -> Span<'static> {
    let theme = &ctx.theme;
    let span = match (board.get(row, col).owner(), ghost) {
        (Some(player), _) => Span::styled(PIECE, Style::default().fg(theme.color(player))),
        (None, Some(player)) => Span::styled(
            GHOST,
            Style::default()
                .fg(theme.color(player))
                .add_modifier(Modifier::DIM),
        ),
        (None, None) => Span::styled(" . ", Style::default().fg(theme.empty)),
    };
    if highlighted {
        span.patch_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
    } else {
        span
    }
}

fn render_message(
    frame: &mut Frame,
    ctx: &RenderContext,
    message: &Option<String>,
    area: Rect,
) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(ctx.theme.accent))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→ or mouse: Move  |  Enter/click/1-7: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::ui::context::BOARD_WIDTH;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(
        state: &GameState,
        selected: usize,
        message: Option<String>,
    ) -> (String, RenderContext) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut ctx = RenderContext::default();
        terminal
            .draw(|f| render(f, &mut ctx, state, selected, &message))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, ctx)
    }

    #[test]
    fn test_render_shows_title_and_player() {
        let (text, ctx) = rendered(&GameState::new(), 3, None);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: Red"));
        assert!(ctx.board_area().is_some());
    }

    #[test]
    fn test_render_shows_message_and_outcome() {
        let mut state = GameState::new();
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(1).unwrap();
        }
        state.play(0).unwrap();
        assert_eq!(state.board().get(2, 0), Cell::One);

        let (text, _) = rendered(&state, 0, Some("Red wins!".to_string()));
        assert!(text.contains("Game Over  |  Red wins"));
        assert!(text.contains("Red wins!"));
    }

    #[test]
    fn test_board_frame_matches_layout_width() {
        let top = frame_line('╔', '╗');
        assert_eq!(top.chars().count() as u16, BOARD_WIDTH);
    }
}
