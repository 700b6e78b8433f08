use std::fmt;
use std::iter::FusedIterator;

use super::{Direction, File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A set of squares packed into 64 bits.
/// Bit `i` is set exactly when square `i` belongs to the set, from A1 (LSB) to H8 (MSB).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);
crate::impl_bit_mani_ops!(Bitboard, u8);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!0);

    /// A bitboard with only the A1 square set.
    pub const A1: Bitboard = Bitboard(1);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000ff);
    pub const RANK_8: Bitboard = Bitboard(0xff00000000000000);
    pub const RANK_12: Bitboard = Bitboard(0x000000000000ffff);
    pub const RANK_78: Bitboard = Bitboard(0xffff000000000000);

    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);
    const FILE_AB: Bitboard = Bitboard(0x0303030303030303);
    const FILE_GH: Bitboard = Bitboard(0xc0c0c0c0c0c0c0c0);

    /// Every square except the A file. Masks pawns before a westward capture shift.
    pub const NOT_A_FILE: Bitboard = Bitboard(!Self::FILE_A.0);

    /// Every square except the H file. Masks pawns before an eastward capture shift.
    pub const NOT_H_FILE: Bitboard = Bitboard(!Self::FILE_H.0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::A1.0 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_1.0 << (8 * *self as u8))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    #[inline]
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Bitboard {
        square.bb()
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        squares.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | sq.bb())
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | sq.bb())
    }
}

/******************************************\
|==========================================|
|         Bitboard Implementation          |
|==========================================|
\******************************************/

impl Bitboard {
    /// Lowest set square, or `None` for an empty board.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Removes the lowest set square and returns it.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bb().0 != 0
    }

    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !square.bb().0;
    }

    /// Squares of the set in ascending order.
    ///
    /// The iterator owns a copy of the mask, so calling `iter` again restarts
    /// from the lowest square.
    #[inline]
    pub const fn iter(&self) -> BitIter {
        BitIter(*self)
    }

    /// Calls `f` on every set square, lowest first.
    #[inline]
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(Square),
    {
        self.iter().for_each(f)
    }

    /// Moves every square one step in `dir`. Squares that would leave the board,
    /// or wrap from one edge file to the other, are dropped.
    #[inline]
    pub const fn shift(&self, dir: Direction) -> Bitboard {
        let bb = self.0 & Self::avoid_wrap(dir).0;
        let shift = dir as i8;

        if shift >= 0 {
            Bitboard(bb << shift as u32)
        } else {
            Bitboard(bb >> (-shift) as u32)
        }
    }

    /// Squares allowed to take a step in `dir` without leaving the board.
    const fn avoid_wrap(dir: Direction) -> Bitboard {
        use Direction::*;
        let bb = match dir {
            SSE => Self::RANK_12.0 | Self::FILE_H.0,
            SEE => Self::RANK_1.0 | Self::FILE_GH.0,
            SWW => Self::RANK_1.0 | Self::FILE_AB.0,
            SSW => Self::RANK_12.0 | Self::FILE_A.0,
            NNW => Self::RANK_78.0 | Self::FILE_A.0,
            NNE => Self::RANK_78.0 | Self::FILE_H.0,
            NWW => Self::RANK_8.0 | Self::FILE_AB.0,
            NEE => Self::RANK_8.0 | Self::FILE_GH.0,

            N => Self::RANK_8.0,
            S => Self::RANK_1.0,
            E => Self::FILE_H.0,
            W => Self::FILE_A.0,

            NE => Self::RANK_8.0 | Self::FILE_H.0,
            NW => Self::RANK_8.0 | Self::FILE_A.0,
            SE => Self::RANK_1.0 | Self::FILE_H.0,
            SW => Self::RANK_1.0 | Self::FILE_A.0,

            NN => Self::RANK_78.0,
            SS => Self::RANK_12.0,
        };
        Bitboard(!bb)
    }
}

/******************************************\
|==========================================|
|                 Iterator                 |
|==========================================|
\******************************************/

/// Lazy ascending walk over the squares of a [`Bitboard`].
#[derive(Debug, Clone)]
pub struct BitIter(Bitboard);

impl Iterator for BitIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_bits() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitIter {}

impl FusedIterator for BitIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitIter;

    #[inline]
    fn into_iter(self) -> BitIter {
        BitIter(self)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { " 1 " } else { "   " };
                write!(f, "{}|", cell)?;
            }

            writeln!(f)?;
            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        write!(f, "Bitboard: {:#x}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
