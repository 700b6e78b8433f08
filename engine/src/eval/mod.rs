mod eval;

pub use eval::{evaluate, evaluate_for};

use chess::impl_ari_ops;

/// Material score in centipawn-like units (a pawn is 10).
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Eval(pub i32);

impl_ari_ops!(Eval);

impl Eval {
    pub const ZERO: Eval = Eval(0);

    /// Search window sentinel, far outside any reachable material sum.
    pub const INFINITY: Eval = Eval(1_000_000);
}

impl std::fmt::Display for Eval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
