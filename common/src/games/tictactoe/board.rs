use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, then columns, then the two diagonals. The order decides which
/// line is reported when a malformed board holds several.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Row-major 3x3 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_array(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, String> {
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT,
                cells.len()
            )
        })?;
        Ok(Self { cells })
    }

    /// Reads nine cells from `X`, `O` and `.`, `-` or `_` for empty.
    /// Whitespace and `|` separators are skipped.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in text.chars() {
            let mark = match ch {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                c if c.is_whitespace() || c == '|' => continue,
                c => return Err(format!("Unexpected character '{}' in board", c)),
            };
            cells.push(mark);
        }
        Self::from_cells(&cells)
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Returns a copy with `mark` placed at `index`, or an error if the
    /// index is out of range or the cell is taken.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, String> {
        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }
        if !self.cells[index].is_empty() {
            return Err(format!("Cell {} is already marked", index));
        }
        let mut next = *self;
        next.cells[index] = mark;
        Ok(next)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = chunk.iter().map(Mark::symbol).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Indices of the empty cells in ascending order.
pub fn empty_cell_indices(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}
