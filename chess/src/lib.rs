//! # Chess core
//!
//! Bitboard board representation, magic attack tables and pseudo-legal move
//! generation over a 64-character board-state string.
pub mod board;
pub mod core;
pub mod utils;

pub use board::{AttackTables, BitBoardSet, BoardState, BoardStateError, MoveList, generate_moves};
pub use crate::core::*;
