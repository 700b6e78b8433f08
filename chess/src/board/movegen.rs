//! # Module: `movegen`
//!
//! Pseudo-legal move generation.
//!
//! - **`magic`**: magic-number search and the per-slider attack tables.
//! - **`lookup`**: [`AttackTables`], the leaper tables plus both slider tables.
//! - **`gen`**: turns a [`BoardState`] and a side to move into a [`MoveList`].
//! - **`move_list`**: the move container handed back to callers.
//!
//! Moves are pseudo-legal: a move that leaves the mover's own king attacked is
//! still generated. There is no castling, en passant or promotion.

mod r#gen;
mod lookup;
mod magic;
mod move_list;

pub use lookup::AttackTables;
pub use magic::{SliderTable, attacks_on_the_fly};
pub use move_list::MoveList;
pub use r#gen::generate_moves;

use super::BoardState;
use crate::core::*;

impl BoardState {
    /// Every pseudo-legal move for `side` in this position.
    #[inline]
    pub fn generate_moves(&self, tables: &AttackTables, side: Colour) -> MoveList {
        generate_moves(tables, self, side)
    }
}

/// One set of tables per test binary; the magic search is too slow to repeat per test.
#[cfg(test)]
pub(crate) static TEST_TABLES: std::sync::LazyLock<AttackTables> =
    std::sync::LazyLock::new(AttackTables::new);
