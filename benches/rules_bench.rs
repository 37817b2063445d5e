//! Rules Engine Benchmarks
//!
//! Performance benchmarks for candidate generation and the state machine using Criterion.

use chess_rules::game::rules::{candidate_moves, Position};
use chess_rules::{new_game, Piece, PieceColor, PieceType, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_candidates_starting(c: &mut Criterion) {
    let position = Position::starting();

    c.bench_function("candidates_all_white_pieces_starting", |b| {
        b.iter(|| {
            let total: usize = position
                .pieces()
                .filter(|(_, piece)| piece.color == PieceColor::White)
                .map(|(square, _)| candidate_moves(&position, square).map_or(0, |m| m.len()))
                .sum();
            black_box(total)
        })
    });
}

fn bench_queen_open_board(c: &mut Criterion) {
    let mut position = Position::empty();
    let centre = Square::new(3, 3);
    position
        .set(centre, Some(Piece::white(PieceType::Queen)))
        .expect("centre square is on the board");

    c.bench_function("candidates_queen_open_board", |b| {
        b.iter(|| black_box(candidate_moves(&position, black_box(centre))))
    });
}

fn bench_select_and_move(c: &mut Criterion) {
    let e2 = Square::new(6, 4);
    let e3 = Square::new(5, 4);

    c.bench_function("select_and_move_cycle", |b| {
        b.iter(|| {
            let mut game = new_game();
            let _ = game.activate_square(e2);
            black_box(game.activate_square(e3))
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_candidates_starting,
    bench_queen_open_board,
    bench_select_and_move,
);
criterion_main!(benches);
