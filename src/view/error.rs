use crate::game::GameError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseInputError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },
    #[error("invalid coordinate `{value}`: expected a non-negative number")]
    InvalidCoordinate { value: String },
    #[error("expected `<row> <col>`, found {found} values")]
    WrongArity { found: usize },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("both players can't use the same mark `{mark}`")]
    DuplicateMark { mark: char },
    #[error("player marks must be visible characters")]
    BlankMark,
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to render: {0}")]
    Render(#[from] std::io::Error),
}
