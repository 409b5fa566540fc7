/// BoardView maps between screen pixels and board cells.
/// The board is drawn unscaled at `origin` with square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardView {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
}

impl BoardView {
    pub fn new(origin_x: f32, origin_y: f32, cell_size: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// Convert screen coordinates to (row, col).
    /// Points left of or above the board map to negative indices.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let col = ((screen_x - self.origin_x) / self.cell_size).floor() as i32;
        let row = ((screen_y - self.origin_y) / self.cell_size).floor() as i32;
        (row, col)
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        let screen_x = col as f32 * self.cell_size + self.origin_x;
        let screen_y = row as f32 * self.cell_size + self.origin_y;
        (screen_x, screen_y)
    }

    /// Pixel size of a board with the given dimensions
    pub fn board_size(&self, rows: usize, cols: usize) -> (f32, f32) {
        (cols as f32 * self.cell_size, rows as f32 * self.cell_size)
    }

    pub fn contains(&self, screen_x: f32, screen_y: f32, rows: usize, cols: usize) -> bool {
        let (width, height) = self.board_size(rows, cols);
        screen_x >= self.origin_x
            && screen_y >= self.origin_y
            && screen_x < self.origin_x + width
            && screen_y < self.origin_y + height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell() {
        let view = BoardView::new(20.0, 100.0, 15.0);
        assert_eq!(view.screen_to_cell(20.0, 100.0), (0, 0));
        assert_eq!(view.screen_to_cell(34.9, 114.9), (0, 0));
        assert_eq!(view.screen_to_cell(35.0, 130.0), (2, 1));
        assert_eq!(view.screen_to_cell(19.0, 99.0), (-1, -1));
    }

    #[test]
    fn test_cell_to_screen_inverts() {
        let view = BoardView::new(20.0, 100.0, 15.0);
        let (x, y) = view.cell_to_screen(3, 7);
        assert_eq!((x, y), (125.0, 145.0));
        assert_eq!(view.screen_to_cell(x + 1.0, y + 1.0), (3, 7));
    }

    #[test]
    fn test_contains() {
        let view = BoardView::new(0.0, 0.0, 10.0);
        assert!(view.contains(0.0, 0.0, 4, 6));
        assert!(view.contains(59.9, 39.9, 4, 6));
        assert!(!view.contains(60.0, 10.0, 4, 6));
        assert!(!view.contains(-0.1, 10.0, 4, 6));
    }
}
