use std::convert::TryFrom;
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::error::BoardError;
use crate::board::{Board, Mark, Outcome, Square};
use crate::game::command::GameCommand;
use crate::tictactoe_search::search_best_move;

/// Engine configuration
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// The mark that opens every game, including games started by `reset`.
    pub first_to_move: Mark,
    /// Answer every accepted human move with a computer move while the game
    /// is still in progress.
    pub auto_respond: bool,
    /// Score the root moves of each search in parallel.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_to_move: Mark::O,
            auto_respond: true,
            parallel: false,
        }
    }
}

/// Game state and runtime info
#[derive(Clone)]
struct GameRecord {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    move_history: Vec<(Square, Mark)>,
    last_score: Option<i16>,
}

impl GameRecord {
    fn new(first_to_move: Mark) -> Self {
        Self {
            board: Board::new(),
            turn: first_to_move,
            outcome: Outcome::InProgress,
            move_history: Vec::new(),
            last_score: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid move: square {index} does not exist, squares are numbered 0-8")]
    InvalidMove { index: usize },
    #[error("Square {square} is already occupied")]
    CellOccupied { square: Square },
    #[error("The game is already over, reset to play again")]
    GameAlreadyOver,
    #[error("No legal moves available")]
    NoLegalMoves,
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        match error {
            BoardError::SquareOutOfRange { index } => EngineError::InvalidMove { index },
            BoardError::SquareOccupied { square } => EngineError::CellOccupied { square },
            error => EngineError::BoardError { error },
        }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::NoAvailableMoves => EngineError::NoLegalMoves,
        }
    }
}

/// Drives a game: validates and applies human moves, asks the search for
/// computer moves, and tracks the outcome. The engine owns the only board
/// of the game; callers get read-only access or copies.
#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
    state: GameRecord,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            state: GameRecord::new(config.first_to_move),
            search_context: SearchContext::with_parallel(config.parallel),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Snapshot of the board for rendering.
    pub fn current_board(&self) -> Board {
        self.state.board
    }

    pub fn turn(&self) -> Mark {
        self.state.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.state.outcome.is_terminal()
    }

    pub fn last_move(&self) -> Option<(Square, Mark)> {
        self.state.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[(Square, Mark)] {
        &self.state.move_history
    }

    /// Plays the side to move on square `index`. With `auto_respond` set and
    /// the game still in progress, the computer answers before this returns.
    pub fn apply_human_move(&mut self, index: usize) -> Result<Outcome, EngineError> {
        let square = Square::try_from(index)?;

        if self.is_game_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        let outcome = self.play(square)?;

        if self.config.auto_respond && !outcome.is_terminal() {
            return self.request_computer_move();
        }

        Ok(outcome)
    }

    /// Plays the best move for the side to move, with that side as the
    /// maximizer of the search.
    pub fn request_computer_move(&mut self) -> Result<Outcome, EngineError> {
        if self.is_game_over() {
            // The game loop only asks for moves while the game is running.
            return Err(EngineError::NoLegalMoves);
        }

        let turn = self.state.turn;
        let (best_move, score) =
            search_best_move(&mut self.search_context, &self.state.board, turn, turn)?;
        self.state.last_score = Some(score);

        debug!(
            "{} searched {} positions, chose {} (score {})",
            turn,
            self.search_context.searched_position_count(),
            best_move,
            score
        );

        self.play(best_move)
    }

    /// Starts a new game. Search statistics are cleared with the board.
    pub fn reset(&mut self) {
        info!("new game, {} to move", self.config.first_to_move);
        self.state = GameRecord::new(self.config.first_to_move);
        self.search_context.reset_stats();
    }

    pub fn dispatch(&mut self, command: GameCommand) -> Result<Outcome, EngineError> {
        let result = match command {
            GameCommand::HumanMove { index } => self.apply_human_move(index),
            GameCommand::ComputerMove => self.request_computer_move(),
            GameCommand::Reset => {
                self.reset();
                Ok(self.state.outcome)
            }
        };

        if let Err(error) = &result {
            debug!("rejected {}: {}", command, error);
        }
        result
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            last_score: self.state.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    fn play(&mut self, square: Square) -> Result<Outcome, EngineError> {
        let turn = self.state.turn;
        self.state.board.put(square, turn)?;
        self.state.move_history.push((square, turn));
        self.state.turn = turn.opposite();
        self.state.outcome = self.state.board.outcome();

        debug!("{} played {}", turn, square);
        if self.state.outcome.is_terminal() {
            info!("game over: {}", self.state.outcome);
        }

        Ok(self.state.outcome)
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    fn human_vs_computer() -> Engine {
        Engine::with_config(EngineConfig::default())
    }

    fn human_vs_human() -> Engine {
        Engine::with_config(EngineConfig {
            first_to_move: Mark::X,
            auto_respond: false,
            parallel: false,
        })
    }

    #[test]
    fn test_new_game() {
        let engine = Engine::new();
        assert!(engine.board().is_empty());
        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_human_move_triggers_computer_reply() {
        let mut engine = human_vs_computer();
        let outcome = engine.apply_human_move(4).unwrap();

        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(engine.board().get(B2), Some(Mark::O));
        assert_eq!(engine.board().count(Mark::X), 1);
        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.move_history().len(), 2);
        assert_eq!(engine.move_history()[0], (B2, Mark::O));

        let stats = engine.get_search_stats();
        assert_eq!(stats.last_score, Some(0));
        assert!(stats.positions_searched > 0);
        assert!(stats.last_search_duration.is_some());
    }

    #[test]
    fn test_invalid_index() {
        let mut engine = human_vs_computer();
        assert_eq!(
            engine.apply_human_move(9),
            Err(EngineError::InvalidMove { index: 9 })
        );
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_occupied_cell() {
        let mut engine = human_vs_human();
        engine.apply_human_move(0).unwrap();
        let before = engine.current_board();

        assert_eq!(
            engine.apply_human_move(0),
            Err(EngineError::CellOccupied { square: A1 })
        );
        assert_eq!(engine.current_board(), before);
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_game_already_over() {
        let mut engine = human_vs_human();
        for &index in [0, 3, 1, 4, 2].iter() {
            engine.apply_human_move(index).unwrap();
        }
        assert_eq!(engine.outcome(), Outcome::Win(Mark::X));

        assert_eq!(
            engine.apply_human_move(8),
            Err(EngineError::GameAlreadyOver)
        );
        assert_eq!(
            engine.request_computer_move(),
            Err(EngineError::NoLegalMoves)
        );
        assert_eq!(engine.board().occupied_count(), 5);
    }

    #[test]
    fn test_draw_in_pvp() {
        let mut engine = human_vs_human();
        let mut outcome = Outcome::InProgress;
        for &index in [0, 1, 2, 4, 3, 5, 7, 6, 8].iter() {
            outcome = engine.apply_human_move(index).unwrap();
        }
        assert_eq!(outcome, Outcome::Draw);
        assert!(engine.board().is_full());
    }

    #[test]
    fn test_computer_takes_win() {
        let mut engine = human_vs_human();
        // X: a1, b1; O: a2, b2; X to move.
        for &index in [0, 3, 1, 4].iter() {
            engine.apply_human_move(index).unwrap();
        }
        let outcome = engine.request_computer_move().unwrap();

        assert_eq!(outcome, Outcome::Win(Mark::X));
        assert_eq!(engine.last_move(), Some((C1, Mark::X)));
        assert_eq!(engine.get_search_stats().last_score, Some(10));
    }

    #[test]
    fn test_computer_blocks() {
        let mut engine = human_vs_computer();
        // O opens in the corner, X answers; then O threatens.
        engine.apply_human_move(0).unwrap();
        let x_square = engine.last_move().unwrap().0;
        assert_eq!(x_square, B2, "the only reply to a corner that draws is the center");

        engine.apply_human_move(1).unwrap();
        assert_eq!(engine.board().get(C1), Some(Mark::X));
    }

    #[test]
    fn test_reset() {
        let mut engine = human_vs_computer();
        engine.apply_human_move(4).unwrap();
        engine.reset();

        assert!(engine.board().is_empty());
        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert!(engine.move_history().is_empty());
        assert_eq!(engine.get_search_stats().last_score, None);
        assert_eq!(engine.get_search_stats().positions_searched, 0);
    }

    #[test]
    fn test_dispatch() {
        let mut engine = human_vs_human();
        assert_eq!(
            engine.dispatch(GameCommand::ComputerMove),
            Ok(Outcome::InProgress)
        );
        assert_eq!(engine.last_move(), Some((A1, Mark::X)));

        assert_eq!(
            engine.dispatch(GameCommand::HumanMove { index: 4 }),
            Ok(Outcome::InProgress)
        );
        assert_eq!(engine.last_move(), Some((B2, Mark::O)));

        assert_eq!(
            engine.dispatch(GameCommand::HumanMove { index: 12 }),
            Err(EngineError::InvalidMove { index: 12 })
        );

        assert_eq!(engine.dispatch(GameCommand::Reset), Ok(Outcome::InProgress));
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_computer_vs_computer_draws() {
        let mut engine = human_vs_human();
        while !engine.is_game_over() {
            engine.request_computer_move().unwrap();
        }
        assert_eq!(engine.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_parallel_engine_plays_same_moves() {
        let mut sequential = human_vs_human();
        let mut parallel = Engine::with_config(EngineConfig {
            parallel: true,
            ..*sequential.config()
        });

        while !sequential.is_game_over() {
            sequential.request_computer_move().unwrap();
            parallel.request_computer_move().unwrap();
            assert_eq!(sequential.last_move(), parallel.last_move());
        }
        assert_eq!(sequential.outcome(), parallel.outcome());
    }

    /// Plays every possible sequence of human moves against the computer
    /// and checks the human never wins.
    fn assert_human_never_wins(engine: Engine, human: Mark) {
        if engine.is_game_over() {
            assert_ne!(
                engine.outcome(),
                Outcome::Win(human),
                "human won with {:?}",
                engine.move_history()
            );
            return;
        }

        for square in engine.board().legal_moves() {
            let mut next = engine.clone();
            next.apply_human_move(square.index()).unwrap();
            assert_human_never_wins(next, human);
        }
    }

    #[test]
    fn test_computer_never_loses_when_human_opens() {
        assert_human_never_wins(human_vs_computer(), Mark::O);
    }

    #[test]
    fn test_computer_never_loses_when_computer_opens() {
        let mut engine = Engine::with_config(EngineConfig {
            first_to_move: Mark::X,
            auto_respond: true,
            parallel: false,
        });
        engine.request_computer_move().unwrap();
        assert_human_never_wins(engine, Mark::O);
    }
}
