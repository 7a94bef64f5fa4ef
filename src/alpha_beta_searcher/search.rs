//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Once `beta <= alpha` at a node, the remaining
//! siblings cannot change the result and are skipped. The pruned search returns exactly the same
//! score as plain minimax for every position; it only visits fewer nodes.
//!
//! The search here is exhaustive: there is no depth limit and no heuristic evaluation. Every line
//! is followed until the `Evaluator` reports a finished game, which is only tractable for small
//! games.
//!
//! ## Root Scoring
//!
//! Each legal move at the root is scored independently with a full window, so the score reported
//! for every root move is its exact game value. The best move is the first one, in move generator
//! order, that reaches the best score for the side to move.
//!
//! ## Parallel Search
//!
//! Root moves can be scored in parallel. Every worker clones the state and explores one child
//! subtree on its own copy, so there is no shared mutable search state; results are collected in
//! move order, which keeps tie-breaking identical to the sequential search.

use std::cmp::{max, min};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    cutoff_count: AtomicUsize,
    last_score: Option<i16>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            cutoff_count: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::SeqCst);
    }

    fn increment_cutoffs(&self) {
        self.cutoff_count.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.cutoff_count.store(0, Ordering::SeqCst);
    }

    fn record_duration(&mut self, duration: Duration) {
        self.last_duration = Some(duration);
    }

    fn record_score(&mut self, score: i16) {
        self.last_score = Some(score);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::SeqCst)
    }

    fn cutoffs(&self) -> usize {
        self.cutoff_count.load(Ordering::SeqCst)
    }
}

impl Clone for SearchStats {
    fn clone(&self) -> Self {
        Self {
            position_count: AtomicUsize::new(self.count()),
            cutoff_count: AtomicUsize::new(self.cutoffs()),
            last_score: self.last_score,
            last_duration: self.last_duration,
        }
    }
}

#[derive(Clone)]
pub struct SearchContext {
    parallel: bool,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self::with_parallel(false)
    }

    pub fn with_parallel(parallel: bool) -> Self {
        Self {
            parallel,
            stats: SearchStats::new(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn last_score(&self) -> Option<i16> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    fn increment_position_count(&self) {
        self.stats.increment();
    }

    fn increment_cutoff_count(&self) {
        self.stats.increment_cutoffs();
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically. The closure cannot return early past the
/// undo, so the state is restored on every path out of the search below it.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> R
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> R,
{
    game_move
        .apply(state)
        .expect("move application should succeed in search");
    state.toggle_turn();

    let result = f(state);

    state.toggle_turn();
    game_move
        .undo(state)
        .expect("move undo should succeed in search");

    result
}

/// Updates best score and move if new score is strictly better, so the first
/// move to reach the best score is kept.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i16,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i16,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = best_move.is_none()
        || if maximizing_player {
            score > *best_score
        } else {
            score < *best_score
        };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Plain minimax without pruning.
///
/// Visits every node of the game tree below `state`. Used as the reference
/// the pruned search must agree with, and to measure how much pruning saves.
pub fn minimax<S, G, E>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    ply: u8,
) -> i16
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state, ply) {
        return score;
    }

    let maximizing_player = state.is_maximizing_player();
    let candidates = move_generator.generate_moves(state);
    let mut best_score = if maximizing_player {
        i16::MIN
    } else {
        i16::MAX
    };

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            minimax(context, state, move_generator, evaluator, ply + 1)
        });

        best_score = if maximizing_player {
            max(best_score, score)
        } else {
            min(best_score, score)
        };
    }

    best_score
}

/// Core alpha-beta minimax search with pruning.
///
/// Recursively searches the game tree below `state`. The [alpha, beta] window
/// represents the range of scores that matter; as soon as `beta <= alpha` the
/// remaining moves at this node are skipped.
///
/// # Parameters
///
/// - `ply` - Distance from the root's children, passed to the evaluator
/// - `alpha` - Lower bound of search window
/// - `beta` - Upper bound of search window
///
/// # Returns
///
/// The best score found for the side to move. Called with the full window
/// `[i16::MIN, i16::MAX]` this is the exact minimax value of `state`.
pub fn alpha_beta<S, G, E>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    ply: u8,
    mut alpha: i16,
    mut beta: i16,
) -> i16
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    context.increment_position_count();

    if let Some(score) = evaluator.terminal_score(state, ply) {
        return score;
    }

    let maximizing_player = state.is_maximizing_player();
    let candidates = move_generator.generate_moves(state);
    let mut best_score = if maximizing_player {
        i16::MIN
    } else {
        i16::MAX
    };

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(game_move, state, |state| {
            alpha_beta(
                context,
                state,
                move_generator,
                evaluator,
                ply + 1,
                alpha,
                beta,
            )
        });

        if maximizing_player {
            best_score = max(best_score, score);
            alpha = max(alpha, score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, score);
        }

        if beta <= alpha {
            context.increment_cutoff_count();
            break;
        }
    }

    best_score
}

fn score_root_sequential<S, G, E>(
    context: &SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    candidates: &[G::Move],
) -> Vec<(G::Move, i16)>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    let mut results = Vec::with_capacity(candidates.len());

    for game_move in candidates.iter() {
        let score = with_move_applied(game_move, state, |state| {
            alpha_beta(
                context,
                state,
                move_generator,
                evaluator,
                0, // ply starts at 0 for the root's children
                i16::MIN,
                i16::MAX,
            )
        });
        results.push((game_move.clone(), score));
    }

    results
}

fn score_root_parallel<S, G, E>(
    context: &SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    candidates: &[G::Move],
) -> Vec<(G::Move, i16)>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    candidates
        .par_iter()
        .map(|game_move| {
            let mut cloned_state = state.clone();

            let score = with_move_applied(game_move, &mut cloned_state, |state| {
                alpha_beta(
                    context,
                    state,
                    move_generator,
                    evaluator,
                    0, // ply starts at 0 for the root's children
                    i16::MIN,
                    i16::MAX,
                )
            });

            (game_move.clone(), score)
        })
        .collect()
}

/// Scores every legal move from `state` with its exact game value, in move
/// generator order.
///
/// # Returns
///
/// - `Ok(scores)` - One `(move, score)` pair per legal move
/// - `Err(SearchError::NoAvailableMoves)` - If the game is already over or no
///   legal moves exist
#[must_use = "scoring returns the score of every move"]
pub fn score_moves<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<Vec<(G::Move, i16)>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    context.reset_stats();

    if evaluator.terminal_score(state, 0).is_some() {
        return Err(SearchError::NoAvailableMoves);
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let start = Instant::now();
    let results = if context.is_parallel() {
        score_root_parallel(
            context,
            state,
            move_generator,
            evaluator,
            candidates.as_ref(),
        )
    } else {
        score_root_sequential(
            context,
            state,
            move_generator,
            evaluator,
            candidates.as_ref(),
        )
    };
    context.stats.record_duration(start.elapsed());

    Ok(results)
}

/// Searches for the best move using exhaustive alpha-beta pruning.
///
/// This is the main entry point for the search algorithm. Every root move is
/// scored, and the first move reaching the best score for the side to move is
/// returned along with that score.
///
/// # Returns
///
/// - `Ok((best_move, score))` - The best move and its exact game value
/// - `Err(SearchError::NoAvailableMoves)` - If the game is over or no legal moves are available
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new();
/// let (best_move, score) = alpha_beta_search(
///     &mut context,
///     &mut state,
///     &move_gen,
///     &evaluator,
/// )?;
/// ```
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<(G::Move, i16), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    G::Move: GameMove<State = S>,
    E: Evaluator<S>,
{
    let current_player_is_maximizing = state.is_maximizing_player();
    let results = score_moves(context, state, move_generator, evaluator)?;

    let mut best_score = if current_player_is_maximizing {
        i16::MIN
    } else {
        i16::MAX
    };
    let mut best_move = None;

    for (game_move, score) in results.iter() {
        update_best(
            *score,
            game_move,
            current_player_is_maximizing,
            &mut best_score,
            &mut best_move,
        );
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    context.stats.record_score(best_score);

    debug!(
        "alpha-beta search chose {:?} (score {}) after {} positions, {} cutoffs",
        best_move,
        best_score,
        context.searched_position_count(),
        context.cutoff_count()
    );

    Ok((best_move, best_score))
}
