use ratatui::layout::Rect;

use super::theme::Theme;
use crate::game::COLS;

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 3;
/// Left frame of the board (`"  ║"`).
pub const BOARD_LEFT: u16 = 3;
/// Full width of the drawn board including both frame sides.
pub const BOARD_WIDTH: u16 = BOARD_LEFT + CELL_WIDTH * COLS as u16 + 2;
/// Pending piece line, column numbers, top border, six rows, bottom border.
pub const BOARD_HEIGHT: u16 = 10;

/// Display state owned by the UI and handed to the renderer each frame:
/// the active theme and where the board was last drawn, so pointer events
/// can be mapped back to columns.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub theme: Theme,
    board_area: Option<Rect>,
}

impl RenderContext {
    pub fn new(theme: Theme) -> Self {
        RenderContext {
            theme,
            board_area: None,
        }
    }

    /// Centre the board inside `area` and remember where it went.
    pub fn place_board(&mut self, area: Rect) -> Rect {
        let width = BOARD_WIDTH.min(area.width);
        let height = BOARD_HEIGHT.min(area.height);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        self.board_area = Some(rect);
        rect
    }

    pub fn board_area(&self) -> Option<Rect> {
        self.board_area
    }

    /// Column under the terminal cell `(x, y)`, if the pointer is over the board.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.board_area?;
        if y < area.y || y >= area.y + area.height {
            return None;
        }
        let first = area.x + BOARD_LEFT;
        if x < first {
            return None;
        }
        let col = ((x - first) / CELL_WIDTH) as usize;
        (col < COLS).then_some(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_maps_before_first_render() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.column_at(10, 10), None);
    }

    #[test]
    fn test_place_board_centres() {
        let mut ctx = RenderContext::default();
        let rect = ctx.place_board(Rect::new(0, 0, 46, 20));
        assert_eq!(rect, Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT));
        assert_eq!(ctx.board_area(), Some(rect));
    }

    #[test]
    fn test_column_at_maps_cells() {
        let mut ctx = RenderContext::default();
        ctx.place_board(Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));

        assert_eq!(ctx.column_at(0, 4), None); // left frame
        assert_eq!(ctx.column_at(3, 4), Some(0));
        assert_eq!(ctx.column_at(5, 4), Some(0));
        assert_eq!(ctx.column_at(6, 0), Some(1));
        assert_eq!(ctx.column_at(3 + 3 * 6 + 2, 9), Some(6));
        assert_eq!(ctx.column_at(3 + 3 * 7, 4), None); // right frame
        assert_eq!(ctx.column_at(5, BOARD_HEIGHT), None); // below the board
    }
}
