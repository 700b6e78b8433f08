//! # Module: `gen`
//!
//! Pseudo-legal move generation from a [`BoardState`].
//!
//! Each call rebuilds the [`BitBoardSet`] from the labels, then emits moves grouped
//! by piece type in the order pawn, knight, bishop, rook, queen, king. Within a
//! type, pieces are walked source by source in ascending square order and each
//! piece's destinations come out ascending too.

use super::{AttackTables, MoveList};
use crate::board::{BitBoardSet, BoardState};
use crate::core::*;

/******************************************\
|==========================================|
|              Helper Functions            |
|==========================================|
\******************************************/

/// Adds a move from `from` to every square of `dest`.
#[inline]
fn add_piece_moves(pt: PieceType, from: Square, dest: Bitboard, move_list: &mut MoveList) {
    dest.for_each(|to| move_list.add_move(Move::new(from, to, pt)));
}

/******************************************\
|==========================================|
|              Piece Generators            |
|==========================================|
\******************************************/

/// Pushes onto empty squares and diagonal captures of enemy pieces.
///
/// The push and capture targets are computed for all pawns at once, then each
/// pawn picks its own share out of them. Pawns on the edge files are masked out before the matching capture shift so a
/// capture never wraps to the other side of the board. No promotion and no en
/// passant: a pawn on the last rank simply has no pushes.
fn gen_pawn_moves(set: &BitBoardSet, side: Colour, move_list: &mut MoveList) {
    let pawns = set.piece_bb(side, PieceType::Pawn);
    let empty = set.empty_bb();
    let enemy = set.occupied_bb(!side);

    let up = side.forward();
    let double_up = side.double_forward();
    let up_west = side.forward_west();
    let up_east = side.forward_east();

    let single = pawns.shift(up) & empty;
    let double = (single & side.double_push_rank().bb()).shift(up) & empty;
    let west = (pawns & Bitboard::NOT_A_FILE).shift(up_west) & enemy;
    let east = (pawns & Bitboard::NOT_H_FILE).shift(up_east) & enemy;

    pawns.for_each(|from| {
        let bb = from.bb();
        let dest = (bb.shift(up) & single)
            | (bb.shift(double_up) & double)
            | ((bb & Bitboard::NOT_A_FILE).shift(up_west) & west)
            | ((bb & Bitboard::NOT_H_FILE).shift(up_east) & east);

        add_piece_moves(PieceType::Pawn, from, dest, move_list);
    });
}

/// Table lookups for knights, bishops, rooks, queens and kings. Sliders look
/// through full occupancy, then every piece drops squares held by its own side,
/// which leaves enemy blockers in as captures.
fn gen_piece_moves(
    tables: &AttackTables,
    set: &BitBoardSet,
    side: Colour,
    pt: PieceType,
    move_list: &mut MoveList,
) {
    let occ = set.all_occupied_bb();
    let not_own = !set.occupied_bb(side);

    set.piece_bb(side, pt).for_each(|from| {
        let dest = tables.attacks(pt, from, occ) & not_own;
        add_piece_moves(pt, from, dest, move_list);
    });
}

/******************************************\
|==========================================|
|              Move Generation             |
|==========================================|
\******************************************/

/// Generates every pseudo-legal move for `side`.
///
/// Moves that leave `side`'s king attacked are included. Nothing in the state is
/// validated beyond what parsing already enforced, so any placement (missing
/// kings, pawns on the back rank) generates without failing.
pub fn generate_moves(tables: &AttackTables, state: &BoardState, side: Colour) -> MoveList {
    let set = BitBoardSet::from_state(state);
    generate_from_set(tables, &set, side)
}

pub(crate) fn generate_from_set(tables: &AttackTables, set: &BitBoardSet, side: Colour) -> MoveList {
    let mut move_list = MoveList::new();

    for pt in PieceType::iter() {
        match pt {
            PieceType::Pawn => gen_pawn_moves(set, side, &mut move_list),
            _ => gen_piece_moves(tables, set, side, pt, &mut move_list),
        }
    }

    move_list
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::super::TEST_TABLES;
    use super::*;

    fn moves_of(state: &str, side: Colour) -> MoveList {
        let state: BoardState = state.parse().unwrap();
        generate_moves(&TEST_TABLES, &state, side)
    }

    fn count_kind(list: &MoveList, pt: PieceType) -> usize {
        list.iter().filter(|mv| mv.piece() == pt).count()
    }

    /// Builds a state string from (square, piece char) pairs on an empty board
    fn place(pieces: &[(Square, char)]) -> String {
        let mut cells = vec!['0'; Square::NUM];
        for &(sq, c) in pieces {
            cells[sq.index()] = c;
        }
        cells.into_iter().collect()
    }

    #[test]
    fn test_start_position_white() {
        let list = moves_of(BoardState::START, Colour::White);

        assert_eq!(list.len(), 20);
        assert_eq!(count_kind(&list, PieceType::Pawn), 16);
        assert_eq!(count_kind(&list, PieceType::Knight), 4);
        assert!(list.find(Square::E2, Square::E4).is_some());
        assert!(list.find(Square::G1, Square::F3).is_some());
        assert!(list.find(Square::E2, Square::E5).is_none());
    }

    #[test]
    fn test_start_position_black() {
        let list = moves_of(BoardState::START, Colour::Black);

        assert_eq!(list.len(), 20);
        assert_eq!(count_kind(&list, PieceType::Pawn), 16);
        assert_eq!(count_kind(&list, PieceType::Knight), 4);
        assert!(list.find(Square::E7, Square::E5).is_some());
        assert!(list.find(Square::B8, Square::C6).is_some());
        assert!(list.iter().all(|mv| mv.from().rank() >= Rank::Rank7));
    }

    #[test]
    fn test_moves_grouped_by_piece_kind() {
        let list = moves_of(BoardState::START, Colour::White);
        let kinds: Vec<PieceType> = list.iter().map(|mv| mv.piece()).collect();

        let mut sorted = kinds.clone();
        sorted.sort_by_key(|pt| pt.index());
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_sources_ascend_within_each_kind() {
        // a2 has both pushes, b3 a single push and a capture on c4
        let state = place(&[(Square::A2, 'P'), (Square::B3, 'P'), (Square::C4, 'p'), (Square::B1, 'N')]);
        let list = moves_of(&state, Colour::White);

        let order: Vec<String> = list.iter().map(|mv| mv.to_string()).collect();
        assert_eq!(order[..4], ["a2a3", "a2a4", "b3b4", "b3c4"]);

        for pair in list.iter().collect::<Vec<_>>().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.piece().index() <= b.piece().index());
            if a.piece() == b.piece() {
                assert!(a.from() <= b.from(), "{a} before {b}");
            }
        }
    }

    #[test]
    fn test_start_pawns_in_square_order() {
        let list = moves_of(BoardState::START, Colour::White);
        let pawn_moves: Vec<String> = list.iter().take(4).map(|mv| mv.to_string()).collect();

        assert_eq!(pawn_moves, ["a2a3", "a2a4", "b2b3", "b2b4"]);
    }

    #[test]
    fn test_pawn_push_blocked() {
        let state = place(&[(Square::E2, 'P'), (Square::E3, 'n'), (Square::D2, 'P'), (Square::D4, 'p')]);
        let list = moves_of(&state, Colour::White);

        assert!(list.targets_from(Square::E2).is_empty());
        assert_eq!(list.targets_from(Square::D2), Bitboard::from([Square::D3, Square::E3]));
    }

    #[test]
    fn test_pawn_captures_do_not_wrap() {
        // A4 north-west and H3 north-east would land on H4 and A5 without the file masks
        let state = place(&[
            (Square::A4, 'P'),
            (Square::H3, 'P'),
            (Square::A5, 'p'),
            (Square::B5, 'p'),
            (Square::H4, 'p'),
            (Square::G4, 'p'),
        ]);
        let list = moves_of(&state, Colour::White);

        assert_eq!(list.targets_from(Square::A4), Square::B5.bb());
        assert_eq!(list.targets_from(Square::H3), Square::G4.bb());
    }

    #[test]
    fn test_black_pawns_move_down() {
        let state = place(&[(Square::C7, 'p'), (Square::D6, 'N'), (Square::B6, 'n'), (Square::H2, 'p')]);
        let list = moves_of(&state, Colour::Black);

        assert_eq!(
            list.targets_from(Square::C7),
            Bitboard::from([Square::C6, Square::C5, Square::D6])
        );
        assert_eq!(list.targets_from(Square::H2), Square::H1.bb());
    }

    #[test]
    fn test_pawn_on_last_rank_is_stuck() {
        let state = place(&[(Square::E8, 'P'), (Square::A1, 'p')]);

        assert!(moves_of(&state, Colour::White).is_empty());
        assert!(moves_of(&state, Colour::Black).is_empty());
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let state = place(&[(Square::E2, 'P'), (Square::E4, 'p'), (Square::F2, 'P')]);
        let list = moves_of(&state, Colour::White);

        assert_eq!(list.targets_from(Square::E2), Square::E3.bb());
        assert_eq!(list.targets_from(Square::F2), Bitboard::from([Square::F3, Square::F4]));
    }

    #[test]
    fn test_slider_captures_but_not_friendly() {
        let state = place(&[(Square::A1, 'R'), (Square::A5, 'q'), (Square::D1, 'N')]);
        let list = moves_of(&state, Colour::White);

        assert_eq!(
            list.targets_from(Square::A1),
            Bitboard::from([Square::A2, Square::A3, Square::A4, Square::A5, Square::B1, Square::C1])
        );
        assert_eq!(list.find(Square::A1, Square::A5).map(|mv| mv.piece()), Some(PieceType::Rook));
    }

    #[test]
    fn test_queen_and_king_in_open() {
        let state = place(&[(Square::D4, 'Q'), (Square::H1, 'K')]);
        let list = moves_of(&state, Colour::White);

        assert_eq!(count_kind(&list, PieceType::Queen), 27);
        assert_eq!(count_kind(&list, PieceType::King), 3);
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        assert!(moves_of(&"0".repeat(64), Colour::White).is_empty());
    }

    #[test]
    fn test_method_matches_free_function() {
        let state = BoardState::start();
        assert_eq!(
            state.generate_moves(&TEST_TABLES, Colour::Black),
            generate_moves(&TEST_TABLES, &state, Colour::Black)
        );
    }
}
