//! Tic-tac-toe trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta, alpha_beta_search, minimax, score_moves, Evaluator, GameMove, GameState,
    MoveCollection, MoveGenerator, SearchContext, SearchError,
};
use crate::board::{Board, BoardError, Mark, Outcome, Square, SquareList};

/// Score of a win reached immediately after the root move. Each further ply
/// costs one point, so the search prefers faster wins and slower losses
/// among otherwise equal outcomes. A draw scores zero.
pub const WIN_SCORE: i16 = 10;

/// A board together with the side to move and the mark playing the
/// maximizing role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    turn: Mark,
    maximizer: Mark,
}

impl Position {
    pub fn new(board: Board, turn: Mark, maximizer: Mark) -> Self {
        Self {
            board,
            turn,
            maximizer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }
}

impl GameState for Position {
    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.turn == self.maximizer
    }

    #[inline]
    fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}

impl GameMove for Square {
    type State = Position;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Position) -> Result<(), BoardError> {
        state.board.put(*self, state.turn)
    }

    #[inline]
    fn undo(&self, state: &mut Position) -> Result<(), BoardError> {
        state.board.remove(*self).map(|_| ())
    }
}

impl MoveCollection<Square> for SquareList {}

#[derive(Clone, Default)]
pub struct TicTacToeMoveGenerator;

impl MoveGenerator<Position> for TicTacToeMoveGenerator {
    type Move = Square;
    type MoveList = SquareList;

    #[inline]
    fn generate_moves(&self, state: &Position) -> SquareList {
        state.board.legal_moves()
    }
}

#[derive(Clone, Default)]
pub struct TicTacToeEvaluator;

impl Evaluator<Position> for TicTacToeEvaluator {
    #[inline]
    fn terminal_score(&self, state: &Position, ply: u8) -> Option<i16> {
        match state.board.outcome() {
            Outcome::Win(mark) if mark == state.maximizer => Some(WIN_SCORE - ply as i16),
            Outcome::Win(_) => Some(ply as i16 - WIN_SCORE),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}

/// Searches for the best move for `to_move`, scoring from `maximizer`'s
/// point of view. Ties go to the lowest square index.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
    to_move: Mark,
    maximizer: Mark,
) -> Result<(Square, i16), SearchError> {
    let mut position = Position::new(*board, to_move, maximizer);
    alpha_beta_search(
        context,
        &mut position,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
    )
}

/// Scores every empty square for `to_move`, in ascending square order.
#[must_use = "scoring returns the score of every move"]
pub fn score_position_moves(
    context: &mut SearchContext,
    board: &Board,
    to_move: Mark,
    maximizer: Mark,
) -> Result<Vec<(Square, i16)>, SearchError> {
    let mut position = Position::new(*board, to_move, maximizer);
    score_moves(
        context,
        &mut position,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
    )
}

/// Exact game value of `position` computed with alpha-beta pruning.
pub fn alpha_beta_score(context: &SearchContext, position: &Position) -> i16 {
    let mut position = *position;
    alpha_beta(
        context,
        &mut position,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
        0,
        i16::MIN,
        i16::MAX,
    )
}

/// Exact game value of `position` computed by plain minimax.
pub fn minimax_score(context: &SearchContext, position: &Position) -> i16 {
    let mut position = *position;
    minimax(
        context,
        &mut position,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
        0,
    )
}
