//! Generic exhaustive alpha-beta search.
//!
//! This module provides a game-agnostic minimax search with alpha-beta
//! pruning that explores every line down to a finished game. Games plug in
//! by implementing the traits in `traits`.

mod search;
mod traits;


pub use search::{
    alpha_beta, alpha_beta_search, minimax, score_moves, SearchContext, SearchError,
};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};
