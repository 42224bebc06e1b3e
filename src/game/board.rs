use std::fmt;

use super::player::Player;

/// Standard board height.
pub const ROWS: usize = 6;
/// Standard board width.
pub const COLS: usize = 7;
/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

/// Line orientations as (row step, column step): horizontal, vertical,
/// diagonal going down-right, diagonal going up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Four board coordinates forming one potential line.
pub type Window = [(usize, usize); CONNECT];

/// Grid of cells, row 0 at the top. Cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            last_move: None,
        }
    }

    /// Create an empty 6x7 board
    pub fn standard() -> Self {
        Self::new(ROWS, COLS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column treated as the center for evaluation purposes.
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Position of the most recent placement.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if a column can receive another piece
    pub fn is_legal(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.is_legal(col)
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // The top cell is empty, so some row in this column is free
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.set(row, col, player.to_cell());
        self.last_move = Some((row, col));
        Ok(row)
    }

    /// Drop a piece, reporting only whether it was placed. A failed move
    /// leaves the board untouched.
    pub fn apply_move(&mut self, col: usize, player: Player) -> bool {
        self.drop_piece(col, player).is_ok()
    }

    /// Remove the topmost piece of a column. Returns false if there is none.
    pub fn undo_move(&mut self, col: usize) -> bool {
        if col >= self.cols {
            return false;
        }
        match (0..self.rows).find(|&row| self.get(row, col) != Cell::Empty) {
            Some(row) => {
                self.set(row, col, Cell::Empty);
                self.last_move = None;
                true
            }
            None => false,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Every line of four cells that fits on the board, in all four
    /// orientations.
    pub fn windows(&self) -> impl Iterator<Item = Window> {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let span = CONNECT as isize - 1;

        DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (0..rows)
                .flat_map(move |r| (0..cols).map(move |c| (r, c)))
                .filter_map(move |(r, c)| {
                    let end_r = r + dr * span;
                    let end_c = c + dc * span;
                    if end_r < 0 || end_r >= rows || end_c >= cols {
                        return None;
                    }
                    Some(std::array::from_fn(|i| {
                        let i = i as isize;
                        ((r + dr * i) as usize, (c + dc * i) as usize)
                    }))
                })
        })
    }

    /// Cell contents of a window.
    pub fn window_cells(&self, window: &Window) -> [Cell; CONNECT] {
        (*window).map(|(row, col)| self.get(row, col))
    }

    /// Check if the player has four in a row anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&(row, col)| self.get(row, col) == cell))
    }

    /// Outcome of the position, or `None` while the game continues.
    /// Red is checked before Yellow.
    pub fn winner(&self) -> Option<GameOutcome> {
        if self.has_won(Player::Red) {
            Some(GameOutcome::Winner(Player::Red))
        } else if self.has_won(Player::Yellow) {
            Some(GameOutcome::Winner(Player::Yellow))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Clear every cell and forget the last move
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.last_move = None;
    }

    /// Build a board from one string per row, top row first. `X` is Red,
    /// `O` is Yellow, anything else is empty. Gravity is not enforced.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let cols = rows[0].chars().count();
        let mut board = Board::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Red,
                    'O' => Cell::Yellow,
                    _ => Cell::Empty,
                };
                board.set(r, c, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.cols {
                let symbol = self.get(row, col).player().map_or('.', Player::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f, " |")?;
        }
        write!(f, " ")?;
        for col in 0..self.cols {
            write!(f, "{:>2}", col + 1)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Full 6x7 grid without any four-in-a-row.
    const DRAWN: [&str; 6] = [
        "XOXOXOX", "XOXOXOX", "OXOXOXO", "OXOXOXO", "XOXOXOX", "XOXOXOX",
    ];

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.last_move(), None);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);
        assert_eq!(board.last_move(), Some((5, 3)));

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.last_move(), Some((4, 3)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..ROWS {
            assert!(board.apply_move(0, Player::Red));
        }

        assert!(board.is_column_full(0));
        assert!(!board.is_legal(0));
        assert_eq!(board.drop_piece(0, Player::Yellow), Err(MoveError::ColumnFull));
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_failed_moves_leave_board_unchanged() {
        let mut board = Board::standard();
        for _ in 0..ROWS {
            board.apply_move(2, Player::Yellow);
        }
        board.apply_move(5, Player::Red);
        let before = board.clone();

        assert!(!board.apply_move(2, Player::Red));
        assert!(!board.apply_move(COLS, Player::Red));
        assert!(!board.apply_move(usize::MAX, Player::Yellow));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(board.drop_piece(7, Player::Red), Err(MoveError::InvalidColumn));
        assert!(!board.is_legal(7));
    }

    #[test]
    fn test_gravity_holds_for_random_sequences() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::standard();
            let mut player = Player::Red;
            for _ in 0..rng.random_range(0..60) {
                // Out-of-range and full columns are attempted too
                let col = rng.random_range(0..COLS + 2);
                if board.apply_move(col, player) {
                    player = player.other();
                }
            }

            for col in 0..COLS {
                let mut seen_piece = false;
                for row in 0..ROWS {
                    let occupied = board.get(row, col) != Cell::Empty;
                    assert!(
                        occupied || !seen_piece,
                        "empty cell below a piece at ({row}, {col})\n{board}"
                    );
                    seen_piece |= occupied;
                }
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(Board::standard().winner(), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows(&DRAWN);
        assert!(board.is_full());
        assert!(!board.has_won(Player::Red));
        assert!(!board.has_won(Player::Yellow));
        assert_eq!(board.winner(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(board.has_won(Player::Red));
        assert!(!board.has_won(Player::Yellow));
        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Player::Yellow).unwrap();
        }
        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Yellow)));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::standard();
        // Create diagonal / pattern
        board.drop_piece(0, Player::Red).unwrap();

        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(1, Player::Red).unwrap();

        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        board.drop_piece(2, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(board.winner(), None);
        board.drop_piece(3, Player::Red).unwrap();

        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::standard();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::Red).unwrap();

        board.drop_piece(5, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();

        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Yellow).unwrap();
        board.drop_piece(4, Player::Red).unwrap();

        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        board.drop_piece(3, Player::Red).unwrap();

        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
        }
        assert!(!board.has_won(Player::Red));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_red_is_reported_before_yellow() {
        let board = Board::from_rows(&[
            ".......", ".......", ".......", ".......", "OOOO...", "XXXX...",
        ]);
        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::standard();
        original.apply_move(3, Player::Red);

        let mut copy = original.clone();
        copy.apply_move(3, Player::Yellow);
        copy.apply_move(0, Player::Yellow);

        assert_eq!(original.piece_count(), 1);
        assert_eq!(original.get(4, 3), Cell::Empty);
        assert_eq!(original.last_move(), Some((5, 3)));
        assert_eq!(copy.piece_count(), 3);
    }

    #[test]
    fn test_undo_move_restores_grid() {
        let mut board = Board::standard();
        board.apply_move(2, Player::Red);
        let before = board.clone();

        board.apply_move(2, Player::Yellow);
        assert!(board.undo_move(2));
        assert_eq!(board.get(4, 2), Cell::Empty);
        assert_eq!(board.get(5, 2), Cell::Red);
        assert_eq!(board.piece_count(), before.piece_count());
        assert_eq!(board.last_move(), None);

        assert!(!board.undo_move(0));
        assert!(!board.undo_move(COLS));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::from_rows(&DRAWN);
        board.reset();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_window_enumeration() {
        // 24 horizontal, 21 vertical, 12 per diagonal
        assert_eq!(Board::standard().windows().count(), 69);
        // Too small for any line
        assert_eq!(Board::new(3, 3).windows().count(), 0);
        // Only a single horizontal line fits
        assert_eq!(Board::new(1, 4).windows().count(), 1);
    }

    #[test]
    fn test_non_standard_dimensions() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4]);
        assert_eq!(board.center_column(), 2);
        for _ in 0..4 {
            assert!(board.apply_move(4, Player::Yellow));
        }
        assert!(!board.apply_move(4, Player::Yellow));
        assert_eq!(board.winner(), Some(GameOutcome::Winner(Player::Yellow)));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 4);
        board.apply_move(0, Player::Red);
        board.apply_move(3, Player::Yellow);
        assert_eq!(board.to_string(), "| . . . . |\n| X . . O |\n  1 2 3 4\n");
    }
}
