use super::Rank;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// The side owning a piece, and the side to move. White owns the uppercase
/// labels of the board string and pushes its pawns towards higher square indices.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Square-index offsets of the eight king steps, the eight knight jumps and the
/// pawn double push.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
    NN = 16, SS = -16,
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Material sign of the colour: `+1` for White, `-1` for Black
    #[inline]
    pub const fn sign(&self) -> i32 {
        match self {
            Colour::White => 1,
            Colour::Black => -1,
        }
    }

    /// Pawn push direction
    #[inline]
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    /// Pawn capture towards the A file
    #[inline]
    pub const fn forward_west(&self) -> Direction {
        match self {
            Colour::White => Direction::NW,
            Colour::Black => Direction::SW,
        }
    }

    /// Pawn capture towards the H file
    #[inline]
    pub const fn forward_east(&self) -> Direction {
        match self {
            Colour::White => Direction::NE,
            Colour::Black => Direction::SE,
        }
    }

    /// Pawn double push direction
    #[inline]
    pub const fn double_forward(&self) -> Direction {
        match self {
            Colour::White => Direction::NN,
            Colour::Black => Direction::SS,
        }
    }

    /// Rank a pawn lands on after a single push from its starting rank
    #[inline]
    pub const fn double_push_rank(&self) -> Rank {
        match self {
            Colour::White => Rank::Rank3,
            Colour::Black => Rank::Rank6,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Reverses the direction (N => S, NE => SW, ...)
    fn neg(self) -> Self::Output {
        use Direction::*;
        match self {
            N => S,
            S => N,
            W => E,
            E => W,
            NE => SW,
            NW => SE,
            SE => NW,
            SW => NE,
            NNE => SSW,
            NNW => SSE,
            NEE => SWW,
            NWW => SEE,
            SEE => NWW,
            SWW => NEE,
            SSE => NNW,
            SSW => NNE,
            NN => SS,
            SS => NN,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "white"),
            Colour::Black => write!(f, "black"),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
