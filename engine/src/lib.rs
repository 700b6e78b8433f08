//! # Engine
//!
//! Material evaluation, negamax search with alpha-beta pruning and a game
//! session driven by a line-oriented text protocol.
mod engine;
mod eval;
mod search;

pub use engine::*;
pub use eval::*;
pub use search::*;
