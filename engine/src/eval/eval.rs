use chess::{BoardState, Colour};

use super::Eval;

/// Material balance with White's pieces counted positive and Black's negative.
pub fn evaluate(state: &BoardState) -> Eval {
    let score = state
        .pieces()
        .map(|(_, piece)| piece.pt().value() * piece.colour().sign())
        .sum();

    Eval(score)
}

/// Material balance as seen by `side`: positive when `side` is ahead.
#[inline]
pub fn evaluate_for(state: &BoardState, side: Colour) -> Eval {
    Eval(evaluate(state).0 * side.sign())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Piece, Square};

    #[test]
    fn test_start_position_is_level() {
        let state = BoardState::start();

        assert_eq!(evaluate(&state), Eval::ZERO);
        assert_eq!(evaluate_for(&state, Colour::White), Eval::ZERO);
        assert_eq!(evaluate_for(&state, Colour::Black), Eval::ZERO);
    }

    #[test]
    fn test_material_values() {
        let mut state = BoardState::empty();
        assert_eq!(evaluate(&state), Eval::ZERO);

        state.set(Square::A1, Some(Piece::WhiteRook));
        assert_eq!(evaluate(&state), Eval(50));

        state.set(Square::D8, Some(Piece::BlackQueen));
        assert_eq!(evaluate(&state), Eval(-40));

        state.set(Square::E1, Some(Piece::WhiteKing));
        state.set(Square::E8, Some(Piece::BlackKing));
        state.set(Square::C3, Some(Piece::WhiteKnight));
        state.set(Square::F6, Some(Piece::BlackBishop));
        state.set(Square::H2, Some(Piece::WhitePawn));
        assert_eq!(evaluate(&state), Eval(50 - 90 + 900 - 900 + 30 - 30 + 10));
    }

    #[test]
    fn test_perspective_flips_sign() {
        let state: BoardState = "R000K000000000000000000000000000000000000000000000000000000k0000"
            .parse()
            .unwrap();

        assert_eq!(evaluate(&state), Eval(50));
        assert_eq!(evaluate_for(&state, Colour::White), Eval(50));
        assert_eq!(evaluate_for(&state, Colour::Black), Eval(-50));
    }
}
