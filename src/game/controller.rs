use tracing::{debug, info, instrument};

use super::{
    Board, BoardEvaluator, GameError, GameResult, GameState, GridIndex, MoveResult, Outcome,
    Player,
};

/// Owns the board and the game phase. Nothing outside of it mutates either.
#[derive(Clone, Debug, Default)]
pub struct GameController {
    board: Board,
    state: GameState,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::InProgress(player) => Some(player),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Starts the game with [`Player::First`] to move.
    /// Does nothing unless the game has not been started yet.
    pub fn start(&mut self) -> GameState {
        if self.state != GameState::NotStarted {
            debug!(state = ?self.state, "start ignored");
            return self.state;
        }
        self.state = GameState::InProgress(Player::First);
        info!("game started");
        self.state
    }

    /// Places the current player's piece at (`row`, `col`) and advances the game.
    ///
    /// A rejected move leaves the board and the state untouched.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> GameResult<MoveResult> {
        let GameState::InProgress(player) = self.state else {
            return Err(GameError::GameNotActive);
        };

        let index = GridIndex::new(row, col);
        let cell = self
            .board
            .get_mut(index)
            .ok_or(GameError::out_of_bounds(row, col))?;
        if cell.is_some() {
            return Err(GameError::cell_occupied(row, col));
        }
        *cell = player.piece();
        debug!(?player, %index, "piece placed");

        let result = self.evaluate(player);
        self.state = result.into();
        if let MoveResult::Finished(outcome) = result {
            info!(?outcome, board = %self.board, "game finished");
        }
        Ok(result)
    }

    fn evaluate(&self, mover: Player) -> MoveResult {
        let evaluator = BoardEvaluator::new(&self.board);
        // a line on the last free cell is still a win
        if evaluator.has_line(mover.piece()) {
            return MoveResult::Finished(Outcome::win(mover));
        }
        if evaluator.is_full() {
            return MoveResult::Finished(Outcome::Draw);
        }
        MoveResult::Continued {
            next: mover.opponent(),
        }
    }
}
