use std::convert::Infallible;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twotris::core::{Board, Cell, GameState, PieceSource, Tetromino};
use twotris::types::{BoardSize, Buttons, PieceKind, Seat, TickInput};

fn no_hold(_: &Board, _: u32) -> Result<(), Infallible> {
    Ok(())
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(BoardSize::default(), PieceSource::seeded(12345)).unwrap();
    let input = TickInput::new(Buttons::LEFT | Buttons::ROTATE_RIGHT, Buttons::empty());

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.step(black_box(input), &mut no_hold).unwrap();
            state.compose_overlay();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let size = BoardSize::default();
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(size).unwrap();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 1..=10 {
                    board.set(x, y, Cell::Settled(Seat::One));
                }
            }
            board.collapse_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_until_top_out", |b| {
        b.iter(|| {
            let mut state =
                GameState::new(BoardSize::default(), PieceSource::seeded(7)).unwrap();
            let input = TickInput::new(Buttons::HARD_DROP, Buttons::empty());
            while state.step(input, &mut no_hold).unwrap() == twotris::core::Outcome::Continue {}
        })
    });
}

fn bench_test_placement(c: &mut Criterion) {
    let board = Board::new(BoardSize::default()).unwrap();
    let piece = Tetromino::new(PieceKind::T, 5, 10);

    c.bench_function("test_placement", |b| {
        b.iter(|| board.test_placement(black_box(&piece)))
    });
}

fn bench_landing_y(c: &mut Criterion) {
    let board = Board::new(BoardSize::default()).unwrap();
    let piece = Tetromino::new(PieceKind::I, 3, 0);

    c.bench_function("landing_y", |b| b.iter(|| board.landing_y(black_box(&piece))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_test_placement,
    bench_landing_y
);
criterion_main!(benches);
