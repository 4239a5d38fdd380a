#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("game is not active")]
    GameNotActive,
}

impl GameError {
    pub fn out_of_bounds(row: usize, col: usize) -> Self {
        Self::OutOfBounds { row, col }
    }

    pub fn cell_occupied(row: usize, col: usize) -> Self {
        Self::CellOccupied { row, col }
    }
}
