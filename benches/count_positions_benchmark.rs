use tictactoe::board::Mark;
use tictactoe::game::position_counter::{
    count_searched_positions, reachable_boards, CountPositionsStrategy,
};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("count all positions in the game tree", |b| {
        b.iter(|| count_searched_positions(CountPositionsStrategy::All, Mark::X))
    });
    c.bench_function("count positions with alpha-beta pruning", |b| {
        b.iter(|| count_searched_positions(CountPositionsStrategy::AlphaBeta, Mark::X))
    });
    c.bench_function("enumerate distinct reachable boards", |b| {
        b.iter(|| reachable_boards(Mark::X))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
