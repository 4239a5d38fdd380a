use tracing::{info, warn};

use super::{GameView, Input, SessionResult, StatusLine};
use crate::game::{GameController, GameState};

/// Routes user input into a [`GameController`] and keeps a [`GameView`] in sync with it.
#[derive(Debug)]
pub struct Session<V> {
    game: GameController,
    view: V,
}

impl<V: GameView> Session<V> {
    /// Creates a session with a fresh game and draws the pre-game screen.
    pub fn new(view: V) -> SessionResult<Self> {
        let mut session = Self {
            game: GameController::new(),
            view,
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Applies `input` and redraws. A rejected move is returned as an error
    /// and leaves both the game and the view as they were.
    pub fn handle(&mut self, input: Input) -> SessionResult<GameState> {
        match input {
            Input::Play => {
                self.game.start();
            }
            Input::Select { row, col } => {
                if let Err(err) = self.game.attempt_move(row, col) {
                    warn!(row, col, %err, "move rejected");
                    return Err(err.into());
                }
            }
            Input::NewGame => {
                info!("new game");
                self.game = GameController::new();
            }
        }
        self.refresh()?;
        Ok(self.game.state())
    }

    fn refresh(&mut self) -> SessionResult<()> {
        self.view.render_board(self.game.board())?;
        self.view.render_status(StatusLine(self.game.state()))?;
        Ok(())
    }
}
