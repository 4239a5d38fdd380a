use super::{Board, GridIndex, Piece};

/// Three cells that make a winning combination.
pub type Line = [GridIndex; 3];

const fn idx(row: usize, col: usize) -> GridIndex {
    GridIndex::new(row, col)
}

/// Rows, columns, then both diagonals.
pub const LINES: [Line; 8] = [
    [idx(0, 0), idx(0, 1), idx(0, 2)],
    [idx(1, 0), idx(1, 1), idx(1, 2)],
    [idx(2, 0), idx(2, 1), idx(2, 2)],
    [idx(0, 0), idx(1, 0), idx(2, 0)],
    [idx(0, 1), idx(1, 1), idx(2, 1)],
    [idx(0, 2), idx(1, 2), idx(2, 2)],
    [idx(0, 0), idx(1, 1), idx(2, 2)],
    [idx(2, 0), idx(1, 1), idx(0, 2)],
];

/// Read-only queries over a board snapshot.
#[derive(Clone, Copy, Debug)]
pub struct BoardEvaluator<'a> {
    board: &'a Board,
}

impl<'a> BoardEvaluator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Returns `true` if `piece` occupies all three cells of any line.
    /// Always `false` for [`Piece::None`].
    pub fn has_line(&self, piece: Piece) -> bool {
        self.winning_line(piece).is_some()
    }

    /// Returns the first line completed by `piece`.
    pub fn winning_line(&self, piece: Piece) -> Option<Line> {
        if piece.is_none() {
            return None;
        }
        LINES
            .into_iter()
            .find(|line| line.iter().all(|&index| self.board[index] == piece))
    }

    /// Returns `true` if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.board.iter().flatten().all(|piece| piece.is_some())
    }
}
