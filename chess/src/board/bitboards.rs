use super::BoardState;
use crate::core::*;

/******************************************\
|==========================================|
|              Bitboard Set                |
|==========================================|
\******************************************/

/// # Bitboard Set
///
/// One bitboard per (colour, piece type) plus the per-colour occupancy.
/// Rebuilt wholesale from a [`BoardState`] whenever moves are generated; the
/// aggregates are always the union of the piece boards they cover.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitBoardSet {
    pieces: [[Bitboard; PieceType::NUM]; Colour::NUM],
    occupied: [Bitboard; Colour::NUM],
}

impl BitBoardSet {
    pub fn from_state(state: &BoardState) -> Self {
        let mut set = Self::default();

        for (sq, piece) in state.pieces() {
            set.pieces[piece.colour().index()][piece.pt().index()].set(sq);
        }

        for col in Colour::iter() {
            set.occupied[col.index()] = set.pieces[col.index()]
                .iter()
                .fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        }

        set
    }

    /// Decodes the set back into a labelled board.
    pub fn to_state(&self) -> BoardState {
        let mut state = BoardState::empty();

        for col in Colour::iter() {
            for pt in PieceType::iter() {
                let piece = Piece::from_parts(col, pt);
                self.piece_bb(col, pt).for_each(|sq| state.set(sq, Some(piece)));
            }
        }

        state
    }

    #[inline]
    pub fn piece_bb(&self, col: Colour, pt: PieceType) -> Bitboard {
        self.pieces[col.index()][pt.index()]
    }

    /// Every square held by `col`.
    #[inline]
    pub fn occupied_bb(&self, col: Colour) -> Bitboard {
        self.occupied[col.index()]
    }

    #[inline]
    pub fn all_occupied_bb(&self) -> Bitboard {
        self.occupied_bb(Colour::White) | self.occupied_bb(Colour::Black)
    }

    #[inline]
    pub fn empty_bb(&self) -> Bitboard {
        !self.all_occupied_bb()
    }
}

impl From<&BoardState> for BitBoardSet {
    fn from(state: &BoardState) -> Self {
        Self::from_state(state)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
