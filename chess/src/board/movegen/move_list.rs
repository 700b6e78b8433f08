use std::slice;

use crate::core::{Bitboard, Move, Square};

/// Usual upper bound on pseudo-legal moves in a real game position.
const MAX_MOVES: usize = 256;

/// # Move List
///
/// Moves in generation order: grouped by piece type, sources ascending within a
/// type. Backed by a `Vec`, so positions with more pieces than a real game can
/// reach still fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    #[inline]
    pub(super) fn add_move(&mut self, move_: Move) {
        self.moves.push(move_);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[inline]
    pub fn contains(&self, move_: &Move) -> bool {
        self.moves.contains(move_)
    }

    /// Destinations open to whatever stands on `from`. Empty when it has no
    /// moves or does not belong to the side the list was generated for.
    pub fn targets_from(&self, from: Square) -> Bitboard {
        self.iter()
            .filter(|mv| mv.from() == from)
            .map(|mv| mv.to())
            .collect()
    }

    /// The generated move going from `from` to `to`, if there is one.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|mv| mv.from() == from && mv.to() == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
