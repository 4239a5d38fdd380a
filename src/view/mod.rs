//! Boundary between the game model and whatever draws it.

pub mod session;
pub mod terminal;

mod error;
mod input;

use std::fmt::{Display, Formatter};
use std::io;

use crate::game::{Board, GameState, Piece};

pub use error::{ConfigError, ParseInputError, SessionError};
pub use input::Input;
pub use session::Session;
pub use terminal::TerminalView;

pub type SessionResult<T> = Result<T, SessionError>;

/// Something that can show the board and the status line.
pub trait GameView {
    fn render_board(&mut self, board: &Board) -> io::Result<()>;
    fn render_status(&mut self, status: StatusLine) -> io::Result<()>;
}

/// Status text for a game phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusLine(pub GameState);

impl Display for StatusLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            GameState::NotStarted => f.write_str("Press 'Play' to begin."),
            GameState::InProgress(player) => write!(f, "Player {}'s turn.", player.number()),
            GameState::Finished(outcome) => match outcome.winner() {
                Some(player) => write!(f, "Player {} wins!", player.number()),
                None => f.write_str("Draw."),
            },
        }
    }
}

/// Symbols drawn for each cell state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marks {
    first: char,
    second: char,
    empty: char,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            first: 'X',
            second: 'O',
            empty: ' ',
        }
    }
}

impl Marks {
    pub fn new(first: char, second: char) -> Result<Self, ConfigError> {
        if first.is_whitespace() || second.is_whitespace() {
            return Err(ConfigError::BlankMark);
        }
        if first == second {
            return Err(ConfigError::DuplicateMark { mark: first });
        }
        Ok(Self {
            first,
            second,
            ..Default::default()
        })
    }

    pub fn mark(&self, piece: Piece) -> char {
        match piece {
            Piece::None => self.empty,
            Piece::First => self.first,
            Piece::Second => self.second,
        }
    }
}
