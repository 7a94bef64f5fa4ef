use tictactoe::alpha_beta_searcher::SearchContext;
use tictactoe::board::{Board, Mark};
use tictactoe::tictactoe_position;
use tictactoe::tictactoe_search::search_best_move;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta best opening move", |b| {
        b.iter(|| find_best_move(&Board::new(), false))
    });
    c.bench_function("alpha beta best opening move (parallel)", |b| {
        b.iter(|| find_best_move(&Board::new(), true))
    });
    c.bench_function("alpha beta block a fork", |b| {
        let board = tictactoe_position! {
            X . .
            . O .
            . . X
        };
        b.iter(|| find_best_move(&board, false))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn find_best_move(board: &Board, parallel: bool) {
    let mut context = SearchContext::with_parallel(parallel);
    let turn = board.turn(Mark::X);
    let (_best_move, score) = search_best_move(&mut context, board, turn, turn).unwrap();
    assert_eq!(score, 0);
}
