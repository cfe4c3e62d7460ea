use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blicblock::core::{
    find_match, normalize, resolve_matches, rotate, GameConfig, GameState, Grid, ShapeLibrary,
};
use tui_blicblock::term::{FrameBuffer, GameView, Viewport};
use tui_blicblock::types::Intent;

/// A 7x5 grid with a mix of colors and no complete shape.
fn busy_grid() -> Grid {
    Grid::from_rows(&[
        [0u8, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [1, 0, 0, 2, 0],
        [2, 3, 0, 4, 5],
        [3, 4, 5, 6, 1],
        [4, 5, 6, 1, 2],
        [5, 6, 1, 2, 3],
    ])
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345).unwrap();

    c.bench_function("game_tick_frame", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(GameConfig::default(), 12345).unwrap();
            }
            state.tick(black_box(1));
        })
    });
}

fn bench_tick_shuffled(c: &mut Criterion) {
    let config = GameConfig {
        shuffle_library: true,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config.clone(), 12345).unwrap();

    c.bench_function("game_tick_frame_shuffled", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(config.clone(), 12345).unwrap();
            }
            state.tick(black_box(1));
        })
    });
}

fn bench_find_match_miss(c: &mut Criterion) {
    let grid = busy_grid();
    let lib = ShapeLibrary::canonical();

    c.bench_function("find_match_all_colors_miss", |b| {
        b.iter(|| {
            for color in 1..7 {
                black_box(find_match(black_box(&grid), color, &lib));
            }
        })
    });
}

fn bench_resolve_cascade(c: &mut Criterion) {
    let lib = ShapeLibrary::canonical();

    c.bench_function("resolve_two_shapes", |b| {
        b.iter(|| {
            let mut grid = Grid::from_rows(&[
                [0u8, 0, 0, 0, 0],
                [0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0],
                [2, 2, 0, 0, 0],
                [2, 2, 0, 0, 0],
                [3, 3, 3, 3, 0],
                [1, 4, 1, 4, 1],
            ]);
            black_box(resolve_matches(&mut grid, &lib, 7));
        })
    });
}

fn bench_compact(c: &mut Criterion) {
    c.bench_function("compact_once", |b| {
        b.iter(|| {
            let mut grid = busy_grid();
            while grid.compact_once() > 0 {}
            black_box(grid);
        })
    });
}

fn bench_library_build(c: &mut Criterion) {
    c.bench_function("library_build_canonical", |b| {
        b.iter(|| black_box(ShapeLibrary::canonical()))
    });

    let lib = ShapeLibrary::canonical();
    let l = &lib.entries()[0].mask;
    c.bench_function("rotate_normalize", |b| {
        b.iter(|| black_box(normalize(&rotate(black_box(l), 3))))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default(), 12345).unwrap();

    c.bench_function("apply_move_shift", |b| {
        b.iter(|| {
            state.apply_move(black_box(Intent::MoveLeft));
            state.apply_move(black_box(Intent::MoveRight));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default(), 12345).unwrap();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_shuffled,
    bench_find_match_miss,
    bench_resolve_cascade,
    bench_compact,
    bench_library_build,
    bench_apply_move,
    bench_render
);
criterion_main!(benches);
