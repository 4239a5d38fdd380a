pub mod board_evaluator;
pub mod controller;

mod error;
mod grid;

use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;

pub use board_evaluator::{BoardEvaluator, Line, LINES};
pub use controller::GameController;
pub use error::GameError;
pub use grid::{Grid, GridIndex};

pub type GameResult<T> = Result<T, GameError>;

/// The 3x3 tic-tac-toe grid.
pub type Board = Grid<Piece, U3, U3>;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    None,
    First,
    Second,
}

impl Piece {
    pub fn is_none(&self) -> bool {
        matches!(self, Piece::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the player owning this piece, [`None`] for an empty cell.
    pub fn owner(&self) -> Option<Player> {
        match self {
            Piece::None => None,
            Piece::First => Some(Player::First),
            Piece::Second => Some(Player::Second),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::None => f.write_str("[ ]"),
            Piece::First => f.write_str("[1]"),
            Piece::Second => f.write_str("[2]"),
        }
    }
}

impl From<Player> for Piece {
    fn from(value: Player) -> Self {
        value.piece()
    }
}

/// One of the two movers. Unlike [`Piece`] it has no empty variant, so a turn
/// can never belong to nobody.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn piece(&self) -> Piece {
        match self {
            Player::First => Piece::First,
            Player::Second => Piece::Second,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Human-facing player number, 1 or 2.
    pub fn number(&self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    pub fn win(player: Player) -> Self {
        match player {
            Player::First => Outcome::FirstWins,
            Player::Second => Outcome::SecondWins,
        }
    }

    /// Returns the winner, [`None`] for a draw.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::FirstWins => Some(Player::First),
            Outcome::SecondWins => Some(Player::Second),
            Outcome::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress(Player),
    Finished(Outcome),
}

impl GameState {
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::InProgress(_))
    }
}

/// What happened after an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Continued { next: Player },
    Finished(Outcome),
}

impl From<MoveResult> for GameState {
    fn from(value: MoveResult) -> Self {
        match value {
            MoveResult::Continued { next } => GameState::InProgress(next),
            MoveResult::Finished(outcome) => GameState::Finished(outcome),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_player_pieces() {
        assert_eq!(Player::First.piece(), Piece::First);
        assert_eq!(Player::Second.piece(), Piece::Second);
        assert_eq!(Piece::from(Player::Second).owner(), Some(Player::Second));
        assert_eq!(Piece::None.owner(), None);
        assert_eq!(Piece::default(), Piece::None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::win(Player::First), Outcome::FirstWins);
        assert_eq!(Outcome::win(Player::Second).winner(), Some(Player::Second));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_move_result_into_state() {
        let next = MoveResult::Continued {
            next: Player::Second,
        };
        assert_eq!(GameState::from(next), GameState::InProgress(Player::Second));
        assert_eq!(
            GameState::from(MoveResult::Finished(Outcome::Draw)),
            GameState::Finished(Outcome::Draw)
        );
        assert!(!GameState::default().is_active());
    }
}
