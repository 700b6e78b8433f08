pub mod bitboards;
pub mod movegen;

pub use bitboards::BitBoardSet;
pub use movegen::{AttackTables, MoveList, generate_moves};

use thiserror::Error;

use crate::core::*;

/******************************************\
|==========================================|
|               Board State                |
|==========================================|
\******************************************/

/// # Board State
///
/// One label per square, indexed like [`Square`] (A1 first, H8 last). This is the
/// exchange format with the outside world and the scratch buffer the search
/// plays moves on.
///
/// The text form is 64 characters: `'0'` for an empty square, `PNBRQK` for White
/// and `pnbrqk` for Black.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [Option<Piece>; Square::NUM],
}

impl BoardState {
    /// The standard starting position in text form.
    pub const START: &'static str = concat!(
        "RNBQKBNR",
        "PPPPPPPP",
        "00000000",
        "00000000",
        "00000000",
        "00000000",
        "pppppppp",
        "rnbqkbnr",
    );

    /// Label used for an empty square.
    pub const EMPTY_CHAR: char = '0';

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            cells: [None; Square::NUM],
        }
    }

    /// The standard starting position.
    pub fn start() -> Self {
        let mut state = Self::empty();

        for (sq, c) in Square::iter().zip(Self::START.chars()) {
            state.cells[sq.index()] = Piece::from_char(c);
        }

        state
    }

    #[inline]
    pub fn on(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    /// Occupied squares with their pieces, A1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| self.on(sq).map(|piece| (sq, piece)))
    }

    /// Plays `mv` in place: the label on the source square moves to the
    /// destination and the source becomes empty.
    ///
    /// Returns whatever was on the destination so [`BoardState::unmake`] can put
    /// it back.
    #[inline]
    pub fn make(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.cells[mv.from().index()].take();
        std::mem::replace(&mut self.cells[mv.to().index()], moving)
    }

    /// Reverts a [`BoardState::make`] of the same move.
    #[inline]
    pub fn unmake(&mut self, mv: Move, captured: Option<Piece>) {
        let moving = std::mem::replace(&mut self.cells[mv.to().index()], captured);
        self.cells[mv.from().index()] = moving;
    }

    /// Renders the 64 character text form.
    pub fn to_state_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(Self::EMPTY_CHAR, Piece::to_char))
            .collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::start()
    }
}

/******************************************\
|==========================================|
|               Parse State                |
|==========================================|
\******************************************/

impl std::str::FromStr for BoardState {
    type Err = BoardStateError;

    /// Strict parse: exactly 64 labels, every one of them `'0'` or a piece letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Square::NUM {
            return Err(BoardStateError::InvalidLength(len));
        }

        let mut state = Self::empty();

        for (index, ch) in s.chars().enumerate() {
            state.cells[index] = match ch {
                Self::EMPTY_CHAR => None,
                _ => Some(Piece::from_char(ch).ok_or(BoardStateError::InvalidChar { index, ch })?),
            };
        }

        Ok(state)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardStateError {
    #[error("Invalid board state length: {0}, expected 64")]
    InvalidLength(usize),
    #[error("Invalid board state character '{ch}' at index {index}, expected '0' or one of \"PNBRQKpnbrqk\"")]
    InvalidChar { index: usize, ch: char },
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let cell = self.on(Square::from_parts(file, rank)).map_or(' ', Piece::to_char);
                write!(f, " {} |", cell)?;
            }

            writeln!(f)?;
            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        write!(f, "State: {}", self.to_state_string())
    }
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
    fn test_start_position_layout() {
        let state = BoardState::start();

        assert_eq!(state.on(Square::A1), Some(Piece::WhiteRook));
        assert_eq!(state.on(Square::E1), Some(Piece::WhiteKing));
        assert_eq!(state.on(Square::D8), Some(Piece::BlackQueen));
        assert_eq!(state.on(Square::E2), Some(Piece::WhitePawn));
        assert_eq!(state.on(Square::E7), Some(Piece::BlackPawn));
        assert_eq!(state.on(Square::E4), None);
        assert_eq!(state.pieces().count(), 32);
        assert_eq!(state, BoardState::default());
    }

    #[test]
    fn test_parse_and_render() {
        let state: BoardState = BoardState::START.parse().unwrap();
        assert_eq!(state, BoardState::start());
        assert_eq!(state.to_state_string(), BoardState::START);

        let empty: BoardState = "0".repeat(64).parse().unwrap();
        assert_eq!(empty, BoardState::empty());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "0".repeat(63).parse::<BoardState>(),
            Err(BoardStateError::InvalidLength(63))
        );
        assert_eq!(
            "0".repeat(65).parse::<BoardState>(),
            Err(BoardStateError::InvalidLength(65))
        );
    }

    #[test]
    fn test_parse_rejects_bad_char() {
        let mut s = BoardState::START.to_string();
        s.replace_range(20..21, "x");

        assert_eq!(
            s.parse::<BoardState>(),
            Err(BoardStateError::InvalidChar { index: 20, ch: 'x' })
        );

        let dotted = ".".repeat(64);
        assert_eq!(
            dotted.parse::<BoardState>(),
            Err(BoardStateError::InvalidChar { index: 0, ch: '.' })
        );
    }

    #[test]
    fn test_make_unmake_quiet() {
        let mut state = BoardState::start();
        let mv = Move::new(Square::G1, Square::F3, PieceType::Knight);

        let captured = state.make(mv);
        assert_eq!(captured, None);
        assert_eq!(state.on(Square::G1), None);
        assert_eq!(state.on(Square::F3), Some(Piece::WhiteKnight));

        state.unmake(mv, captured);
        assert_eq!(state, BoardState::start());
    }

    #[test]
    fn test_make_unmake_capture() {
        let mut state = BoardState::empty();
        state.set(Square::A1, Some(Piece::WhiteRook));
        state.set(Square::A8, Some(Piece::BlackQueen));
        let before = state.clone();

        let mv = Move::new(Square::A1, Square::A8, PieceType::Rook);
        let captured = state.make(mv);

        assert_eq!(captured, Some(Piece::BlackQueen));
        assert_eq!(state.on(Square::A8), Some(Piece::WhiteRook));
        assert_eq!(state.on(Square::A1), None);

        state.unmake(mv, captured);
        assert_eq!(state, before);
    }

    #[test]
    fn test_display_contains_state_string() {
        let rendered = BoardState::start().to_string();
        assert!(rendered.contains(BoardState::START));
        assert!(rendered.contains("| r | n | b | q | k | b | n | r |"));
    }
}
