//! Generative checks on candidate generation over random positions

use proptest::prelude::*;

use chess_rules::game::rules::{apply_move, candidate_moves, CandidateMove, Position};
use chess_rules::{Piece, PieceColor, PieceType, Square};

fn piece_strategy() -> impl Strategy<Value = Piece> {
    let kind = prop_oneof![
        Just(PieceType::Pawn),
        Just(PieceType::Knight),
        Just(PieceType::Bishop),
        Just(PieceType::Rook),
        Just(PieceType::Queen),
        Just(PieceType::King),
    ];
    let color = prop_oneof![Just(PieceColor::White), Just(PieceColor::Black)];
    (kind, color).prop_map(|(kind, color)| Piece::new(kind, color))
}

fn position_strategy() -> impl Strategy<Value = Position> {
    prop::collection::vec(((0i8..8, 0i8..8), piece_strategy()), 0..24).prop_map(|placements| {
        let placements: Vec<(Square, Piece)> = placements
            .into_iter()
            .map(|((rank, file), piece)| (Square::new(rank, file), piece))
            .collect();
        Position::from_pieces(&placements).expect("generated squares are on the board")
    })
}

proptest! {
    #[test]
    fn candidates_stay_on_board_and_avoid_own_pieces(position in position_strategy()) {
        for (origin, piece) in position.pieces() {
            let moves = candidate_moves(&position, origin).unwrap();
            for to in moves {
                prop_assert!(to.is_on_board());
                prop_assert_ne!(to, origin);
                prop_assert_ne!(position.get_piece_color(to), Some(piece.color));
            }
        }
    }

    #[test]
    fn empty_squares_have_no_candidates(position in position_strategy()) {
        for square in Square::all() {
            if position.is_empty(square) {
                prop_assert!(candidate_moves(&position, square).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn generation_does_not_mutate(position in position_strategy()) {
        let before = position.clone();
        for (origin, _) in before.pieces() {
            let _ = candidate_moves(&position, origin).unwrap();
        }
        prop_assert_eq!(position, before);
    }

    #[test]
    fn executing_a_candidate_moves_exactly_one_piece(position in position_strategy()) {
        for (origin, piece) in position.pieces() {
            for to in candidate_moves(&position, origin).unwrap() {
                let mut after = position.clone();
                let target = position.piece_at(to).unwrap();
                let mv = CandidateMove::verify(&position, origin, to).unwrap();

                prop_assert_eq!(apply_move(&mut after, mv), target);
                prop_assert!(after.is_empty(origin));
                prop_assert_eq!(after.piece_at(to).unwrap(), Some(piece));

                let lost = usize::from(target.is_some());
                prop_assert_eq!(
                    after.count(piece.color.opposite()) + lost,
                    position.count(piece.color.opposite())
                );
            }
        }
    }
}
