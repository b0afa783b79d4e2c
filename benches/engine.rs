use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freecell_engine::core::{Location, LocationKind};
use freecell_engine::rules::{auto_move, num_movable};
use freecell_engine::Board;

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_seeded", |b| b.iter(|| Board::deal_seeded(black_box(42))));
}

fn bench_num_movable(c: &mut Criterion) {
    let board = Board::deal_seeded(42);
    c.bench_function("num_movable_all_stack_pairs", |b| {
        b.iter(|| {
            let mut total = 0;
            for src in LocationKind::Stack.locations() {
                for dst in LocationKind::Stack.locations() {
                    total += num_movable(black_box(&board), src, dst);
                }
            }
            total
        })
    });
}

fn bench_auto_move(c: &mut Criterion) {
    let board = Board::deal_seeded(7);
    c.bench_function("auto_move", |b| b.iter(|| auto_move(black_box(&board))));

    let clone_target = board.clone();
    c.bench_function("board_clone", |b| {
        b.iter(|| black_box(&clone_target).clone().len(Location::stack(0)))
    });
}

criterion_group!(benches, bench_deal, bench_num_movable, bench_auto_move);
criterion_main!(benches);
