use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info, warn};

use super::context::RenderContext;
use super::theme::Theme;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    start_column: usize,
    should_quit: bool,
    message: Option<String>,
    ctx: RenderContext,
}

impl App {
    pub fn new(theme: Theme, start_column: usize) -> Self {
        let start_column = start_column.min(COLS - 1);
        App {
            game_state: GameState::new(),
            selected_column: start_column,
            start_column,
            should_quit: false,
            message: None,
            ctx: RenderContext::new(theme),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!(theme = self.ctx.theme.name, "terminal game started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!(moves = self.game_state.move_count(), "terminal game closed");
        Ok(())
    }

    /// Poll for one input event
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                // '8' and '9' are reported as invalid columns
                self.selected_column = (c as usize - '1' as usize).min(COLS - 1);
                self.drop_piece_at(c as usize - '1' as usize);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game_state.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
                info!("game reset");
            }
            _ => {}
        }
    }

    /// Hover moves the pending piece, a left click drops it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = self.ctx.column_at(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.selected_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_piece();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.drop_piece_at(self.selected_column);
    }

    fn drop_piece_at(&mut self, column: usize) {
        let theme = self.ctx.theme;

        match self.game_state.play(column) {
            Ok((row, col)) => {
                debug!(row, col, "move accepted");
                match self.game_state.outcome() {
                    GameOutcome::InProgress => {}
                    GameOutcome::Winner(player) => {
                        self.message = Some(format!("{} wins!", theme.label(player)));
                    }
                    GameOutcome::Draw => {
                        self.message = Some("It's a draw!".to_string());
                    }
                }
            }
            Err(err) => {
                warn!(%err, "move rejected");
                self.message = Some(
                    match err {
                        MoveError::ColumnFull(_) => "Column is full!",
                        MoveError::InvalidColumn(_) => "Invalid column!",
                        MoveError::GameOver => "Game over! Press 'r' to restart.",
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &mut self.ctx,
            &self.game_state,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default(), 3)
    }
}
