//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns true if the current player is the maximizing player.
    fn is_maximizing_player(&self) -> bool;

    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move for the player whose turn it is.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state. Must exactly reverse `apply`.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player. The search tries
    /// them in the order returned and keeps the first of equally good moves.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Scores finished games. Higher scores favor the maximizing player.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Returns the score of `state` if the game is over, `None` otherwise.
    /// `ply` is the number of moves played since the root's children, so an
    /// evaluator can prefer quick wins and slow losses.
    ///
    /// Every state without legal moves must be reported as finished.
    fn terminal_score(&self, state: &S, ply: u8) -> Option<i16>;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}
