pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Run length needed along any axis to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

/// The four axes through a cell, as (row step, column step).
/// Each axis is walked in both directions from the placed cell.
const AXES: [(isize, isize); 4] = [
    (1, 0), // vertical
    (0, 1), // horizontal
    (1, 1), // diagonal, bottom-left to top-right
    (1, -1), // diagonal, top-left to bottom-right
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of disks stacked in a column (0-indexed column)
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] == ROWS
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        let row = self.heights[col];
        self.cells[row][col] = cell;
        self.heights[col] += 1;
        Ok(row)
    }

    /// Total number of disks on the board
    pub fn disk_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.disk_count() == ROWS * COLS
    }

    /// Check if the piece at (row, col) completes a run of four.
    ///
    /// Only the axes through this cell are inspected, so this is the check
    /// to run right after a piece lands there.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_from(row, col, dr, dc, cell)
                + self.count_from(row, col, -dr, -dc, cell);
            run >= WIN_LENGTH
        })
    }

    /// Count consecutive `cell`s starting one step away from (row, col).
    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place pieces directly, ignoring gravity, for compact win fixtures.
    fn board_with(pieces: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(row, col, cell) in pieces {
            board.cells[row][col] = cell;
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.disk_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 0); // Bottom row
        assert_eq!(board.get(0, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 1); // Stacks on top of the first piece
        assert_eq!(board.get(1, 3), Cell::Yellow);
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(DropError::ColumnFull));
        assert_eq!(board.height(0), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(DropError::InvalidColumn));
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.disk_count(), 42);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!board.check_win(0, 0));
    }

    #[test]
    fn test_vertical_win_at_left_edge() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(0, Cell::Yellow).unwrap();
        }
        assert!(board.check_win(3, 0));
    }

    #[test]
    fn test_vertical_win_at_top() {
        let mut board = Board::new();
        board.drop_piece(6, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Red).unwrap();
        for _ in 0..4 {
            board.drop_piece(6, Cell::Yellow).unwrap();
        }
        assert!(board.check_win(5, 6));
    }

    #[test]
    fn test_horizontal_win_from_middle_of_run() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        // Detected from an inner cell as well as the ends
        assert!(board.check_win(0, 0));
        assert!(board.check_win(0, 2));
        assert!(board.check_win(0, 3));
    }

    #[test]
    fn test_horizontal_win_at_right_edge_top_row() {
        let board = board_with(&[
            (5, 3, Cell::Yellow),
            (5, 4, Cell::Yellow),
            (5, 5, Cell::Yellow),
            (5, 6, Cell::Yellow),
        ]);
        assert!(board.check_win(5, 6));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Build a / diagonal from (0,0) to (3,3)
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert_eq!(row, 3);
        assert!(board.check_win(row, 3));
        assert!(board.check_win(1, 1));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Build a \ diagonal from (3,3) down to (0,6)
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_win(row, 3));
        assert!(board.check_win(0, 6));
    }

    #[test]
    fn test_diagonal_win_through_center() {
        let board = board_with(&[
            (1, 2, Cell::Yellow),
            (2, 3, Cell::Yellow),
            (3, 4, Cell::Yellow),
            (4, 5, Cell::Yellow),
        ]);
        assert!(board.check_win(2, 3));

        let board = board_with(&[
            (4, 1, Cell::Red),
            (3, 2, Cell::Red),
            (2, 3, Cell::Red),
            (1, 4, Cell::Red),
        ]);
        assert!(board.check_win(2, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_win(0, 1));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_with(&[
            (0, 0, Cell::Red),
            (0, 1, Cell::Red),
            (0, 2, Cell::Yellow),
            (0, 3, Cell::Red),
            (0, 4, Cell::Red),
        ]);
        assert!(!board.check_win(0, 3));
    }

    #[test]
    fn test_run_of_other_colour_does_not_count() {
        let board = board_with(&[
            (0, 0, Cell::Yellow),
            (0, 1, Cell::Yellow),
            (0, 2, Cell::Yellow),
            (0, 3, Cell::Red),
        ]);
        assert!(!board.check_win(0, 3));
        assert!(!board.check_win(0, 2));
    }
}
