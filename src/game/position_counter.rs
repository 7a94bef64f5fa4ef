use std::str::FromStr;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use crate::alpha_beta_searcher::SearchContext;
use crate::board::{Board, Mark, Outcome};
use crate::tictactoe_search::{alpha_beta_score, minimax_score, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

/// Tally of the finished games among a set of boards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl TerminalCounts {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Every distinct board reachable from the empty board when `first` opens
/// and both sides alternate, stopping at finished games. Boards are listed
/// in the order they are first reached, the empty board first.
pub fn reachable_boards(first: Mark) -> Vec<Board> {
    let mut seen = FxHashSet::default();
    let mut boards = Vec::new();
    let empty = Board::new();
    seen.insert(empty);
    boards.push(empty);

    let mut next = 0;
    while next < boards.len() {
        let board = boards[next];
        next += 1;

        if board.outcome().is_terminal() {
            continue;
        }

        let turn = board.turn(first);
        for square in board.legal_moves() {
            let mut child = board;
            if child.put(square, turn).is_ok() && seen.insert(child) {
                boards.push(child);
            }
        }
    }

    boards
}

pub fn count_terminal_boards(boards: &[Board]) -> TerminalCounts {
    let mut counts = TerminalCounts::default();
    for board in boards {
        match board.outcome() {
            Outcome::Win(Mark::X) => counts.x_wins += 1,
            Outcome::Win(Mark::O) => counts.o_wins += 1,
            Outcome::Draw => counts.draws += 1,
            Outcome::InProgress => {}
        }
    }
    counts
}

/// Number of positions `strategy` visits while solving the empty board with
/// `first` to move, together with the game value it finds.
pub fn count_searched_positions(strategy: CountPositionsStrategy, first: Mark) -> (usize, i16) {
    let context = SearchContext::new();
    let position = Position::new(Board::new(), first, first);
    let score = match strategy {
        CountPositionsStrategy::All => minimax_score(&context, &position),
        CountPositionsStrategy::AlphaBeta => alpha_beta_score(&context, &position),
    };
    (context.searched_position_count(), score)
}

pub fn run_count_positions(strategy: CountPositionsStrategy, first: Mark) {
    let starting_time = Instant::now();
    let (count, score) = count_searched_positions(strategy, first);
    let duration = starting_time.elapsed();

    println!(
        "strategy: {:?}, positions searched: {}, game value: {}, duration: {:?}, positions per second: {}",
        strategy,
        count,
        score,
        duration,
        positions_per_second(count, duration)
    );

    let starting_time = Instant::now();
    let boards = reachable_boards(first);
    let duration = starting_time.elapsed();
    let terminal = count_terminal_boards(&boards);

    println!(
        "distinct positions: {}, finished games: {} ({} wins: {}, {} wins: {}, draws: {}), duration: {:?}",
        boards.len(),
        terminal.total(),
        Mark::X,
        terminal.x_wins,
        Mark::O,
        terminal.o_wins,
        terminal.draws,
        duration
    );
}

fn positions_per_second(count: usize, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        count as f64 / seconds
    } else {
        count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            CountPositionsStrategy::from_str("all"),
            Ok(CountPositionsStrategy::All)
        );
        assert_eq!(
            CountPositionsStrategy::from_str("alpha-beta"),
            Ok(CountPositionsStrategy::AlphaBeta)
        );
        assert!(CountPositionsStrategy::from_str("random").is_err());
    }

    #[test]
    fn test_reachable_boards() {
        let boards = reachable_boards(Mark::X);
        assert_eq!(boards.len(), 5478);
        assert_eq!(boards[0], Board::new());
        assert!(boards.iter().all(|board| board.is_consistent(Mark::X)));
    }

    #[test]
    fn test_terminal_counts() {
        let boards = reachable_boards(Mark::X);
        let terminal = count_terminal_boards(&boards);
        assert_eq!(terminal.total(), 958);
        assert_eq!(terminal.x_wins, 626);
        assert_eq!(terminal.o_wins, 316);
        assert_eq!(terminal.draws, 16);
    }

    #[test]
    fn test_full_game_tree_size() {
        let (count, score) = count_searched_positions(CountPositionsStrategy::All, Mark::X);
        assert_eq!(count, 549_946);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_alpha_beta_visits_fewer_positions() {
        let (count, score) = count_searched_positions(CountPositionsStrategy::AlphaBeta, Mark::O);
        assert!(count < 549_946);
        assert_eq!(score, 0);
    }
}
