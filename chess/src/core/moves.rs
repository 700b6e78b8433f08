use std::fmt;

use super::{PieceType, Square};

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// - A pseudo-legal move: source square, destination square and the kind of
///   piece making it.
/// - Captures are implicit (the destination may hold an enemy piece). There are
///   no flags for castling, en passant or promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: PieceType,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceType) -> Self {
        Self { from, to, piece }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn piece(&self) -> PieceType {
        self.piece
    }
}

/// Long algebraic form without the piece, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
