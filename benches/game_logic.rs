use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, EngineConfig, GameSnapshot, GameState, PieceSelector};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(EngineConfig::seeded(seed)).unwrap();
    state.start();
    state.tick(0);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 22);
            for y in 18..22 {
                board.fill_row_except(y, &[]);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("hard_drop_and_spawn", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.hard_drop();
            state.tick(0);
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.move_left();
            state.rotate_clockwise();
            state.move_right();
        })
    });
}

fn bench_selector(c: &mut Criterion) {
    let mut selector = PieceSelector::new(12345);

    c.bench_function("select_piece", |b| {
        b.iter(|| black_box(selector.select_index()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = started(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_selector,
    bench_snapshot
);
criterion_main!(benches);
