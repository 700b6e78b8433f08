// Core value types shared by the board, the move generator and the engine

pub mod bitboard;
mod macros;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

pub use bitboard::{BitIter, Bitboard};
pub use moves::Move;
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::{Colour, Direction};
