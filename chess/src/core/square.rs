use super::types::Direction;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Squares are numbered `rank * 8 + file`, so A1 is 0 and H8 is 63.
/// - Rank 1 is the bottom row of the exchange string (its first 8 characters).

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Converts a raw `0..64` index into a square, `None` when out of range.
    #[inline]
    pub const fn try_from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::NUM {
            Some(unsafe { Self::from_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns the rank of a square
    #[inline]
    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked((*self as u8) >> 3) }
    }

    /// Returns the file of a square
    #[inline]
    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked((*self as u8) & 0b111) }
    }

    /// Combines a file and a rank into a square
    #[inline]
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        unsafe { Self::from_unchecked(((rank as u8) << 3) + (file as u8)) }
    }

    /// Steps one `Direction` away from this square.
    ///
    /// Returns `None` when the step leaves the board, including steps that would
    /// wrap around from the H file to the A file (or the other way).
    pub const fn add(self, dir: Direction) -> Option<Self> {
        let file = self.file() as u8;

        use Direction::*;
        let valid = match dir {
            N | S | NN | SS => true,
            E | NE | NNE | SE | SSE => file < File::FileH as u8,
            W | NW | NNW | SW | SSW => file > File::FileA as u8,
            NEE | SEE => file < File::FileG as u8,
            NWW | SWW => file > File::FileB as u8,
        };

        let target = self as i16 + dir as i16;

        if valid && target >= 0 && target < Self::NUM as i16 {
            Some(unsafe { Self::from_unchecked(target as u8) })
        } else {
            None
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(unsafe { File::from_unchecked(c as u8 - b'a') }),
            _ => Err(ParseFileError::InvalidChar(c)),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(c as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(c)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file =
            File::try_from(file_char).map_err(|_| ParseSquareError::InvalidFileChar(file_char))?;
        let rank =
            Rank::try_from(rank_char).map_err(|_| ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid character for file: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid character for rank: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_index_layout() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A2.index(), 8);
        assert_eq!(Square::E4.index(), 3 * 8 + 4);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(Square::try_from_index(0), Some(Square::A1));
        assert_eq!(Square::try_from_index(63), Some(Square::H8));
        assert_eq!(Square::try_from_index(64), None);
    }

    #[test]
    fn test_file_and_rank() {
        for sq in Square::iter() {
            assert_eq!(Square::from_parts(sq.file(), sq.rank()), sq);
        }
        assert_eq!(Square::C6.file(), File::FileC);
        assert_eq!(Square::C6.rank(), Rank::Rank6);
    }

    #[test]
    fn test_add_stays_on_board() {
        assert_eq!(Square::E4.add(Direction::N), Some(Square::E5));
        assert_eq!(Square::E4.add(Direction::NNE), Some(Square::F6));
        assert_eq!(Square::H4.add(Direction::E), None);
        assert_eq!(Square::A4.add(Direction::W), None);
        assert_eq!(Square::G1.add(Direction::NEE), None);
        assert_eq!(Square::B1.add(Direction::NWW), None);
        assert_eq!(Square::E8.add(Direction::N), None);
        assert_eq!(Square::E1.add(Direction::SS), None);
    }

    #[test]
    fn test_square_display_and_parse() {
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
        assert_eq!(Square::E4.to_string(), "e4");
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert_eq!("e".parse::<Square>(), Err(ParseSquareError::InvalidLength(1)));
        assert_eq!("e4g".parse::<Square>(), Err(ParseSquareError::InvalidLength(3)));
        assert_eq!("z4".parse::<Square>(), Err(ParseSquareError::InvalidFileChar('z')));
        assert_eq!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9')));
    }
}
