//! Tic-tac-toe implementation of the alpha-beta search traits.

pub mod implementation;


pub use implementation::{
    alpha_beta_score, minimax_score, score_position_moves, search_best_move, Position,
    TicTacToeEvaluator, TicTacToeMoveGenerator, WIN_SCORE,
};
