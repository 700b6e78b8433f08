//! # Module: `lookup`
//!
//! Attack lookups for every piece type.
//!
//! - Knight and king attacks ignore occupancy and live in compile-time tables.
//! - Bishop and rook attacks depend on occupancy and go through magic tables
//!   that [`AttackTables::new`] builds once. Queen attacks are their union.
//!
//! The tables are an owned, immutable value: build one per engine and share it by
//! reference (or `Arc`) with everything that generates moves.

use std::time::Instant;

use super::magic::SliderTable;
use crate::core::*;

/******************************************\
|==========================================|
|              Leaper Tables               |
|==========================================|
\******************************************/

/// Attack table for a single piece type indexed by square
type AttackTable = [Bitboard; Square::NUM];

use Direction::*;

const KNIGHT_ATTACKS: AttackTable = init_pseudo_attacks(&[NNE, NNW, NEE, NWW, SEE, SWW, SSE, SSW]);

const KING_ATTACKS: AttackTable = init_pseudo_attacks(&[N, NE, NW, E, W, SE, SW, S]);

/// Union of single steps in `dirs` from every square, ignoring blockers.
const fn init_pseudo_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq_bb = unsafe { Square::from_unchecked(i as u8) }.bb();

        let mut j = 0;
        while j < dirs.len() {
            attacks[i].0 |= sq_bb.shift(dirs[j]).0;
            j += 1;
        }

        i += 1;
    }

    attacks
}

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// # Attack Tables
///
/// Everything the move generator needs to know about where pieces reach.
/// Construction runs the magic search for both sliders; lookups are then
/// branch-free table reads.
#[derive(Debug, Clone)]
pub struct AttackTables {
    bishop: SliderTable,
    rook: SliderTable,
}

impl AttackTables {
    pub fn new() -> Self {
        let start = Instant::now();

        let bishop = SliderTable::new(PieceType::Bishop);
        let rook = SliderTable::new(PieceType::Rook);

        tracing::debug!(
            bishop_entries = bishop.len(),
            rook_entries = rook.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "attack tables built"
        );

        AttackTables { bishop, rook }
    }

    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        KNIGHT_ATTACKS[sq.index()]
    }

    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        KING_ATTACKS[sq.index()]
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occ)
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occ)
    }

    #[inline]
    pub fn queen_attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occ) | self.rook_attacks(sq, occ)
    }

    /// Squares a non-pawn piece of type `pt` on `sq` attacks. The first blocker
    /// along each ray is included; filtering out friendly pieces is up to the
    /// caller.
    ///
    /// Pawns attack nothing through this lookup: their pushes and captures
    /// depend on colour and are generated set-wise.
    #[inline]
    pub fn attacks(&self, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
        match pt {
            PieceType::Pawn => Bitboard::EMPTY,
            PieceType::Knight => self.knight_attacks(sq),
            PieceType::Bishop => self.bishop_attacks(sq, occ),
            PieceType::Rook => self.rook_attacks(sq, occ),
            PieceType::Queen => self.queen_attacks(sq, occ),
            PieceType::King => self.king_attacks(sq),
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::super::TEST_TABLES;
    use super::super::magic::attacks_on_the_fly;
    use super::*;
    use crate::utils::PRNG;

    /// On-board squares a (file, rank) offset away from `sq`
    fn offsets_from(sq: Square, offsets: &[(i8, i8)]) -> Bitboard {
        offsets
            .iter()
            .filter_map(|&(df, dr)| {
                let file = sq.file() as i8 + df;
                let rank = sq.rank() as i8 + dr;
                ((0..8).contains(&file) && (0..8).contains(&rank))
                    .then(|| Square::try_from_index((rank * 8 + file) as u8))
                    .flatten()
            })
            .collect()
    }

    #[test]
    fn test_knight_attacks_match_offsets() {
        let jumps = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

        for sq in Square::iter() {
            assert_eq!(
                TEST_TABLES.knight_attacks(sq),
                offsets_from(sq, &jumps),
                "Knight attack mismatch for {:?}",
                sq
            );
        }

        assert_eq!(TEST_TABLES.knight_attacks(Square::A1).count_bits(), 2);
        assert_eq!(TEST_TABLES.knight_attacks(Square::D4).count_bits(), 8);
    }

    #[test]
    fn test_knight_attacks_symmetric() {
        for s in Square::iter() {
            for t in Square::iter() {
                assert_eq!(
                    TEST_TABLES.knight_attacks(s).contains(t),
                    TEST_TABLES.knight_attacks(t).contains(s),
                    "Knight symmetry broken between {:?} and {:?}",
                    s,
                    t
                );
            }
        }
    }

    #[test]
    fn test_king_attacks_match_offsets() {
        let steps = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

        for sq in Square::iter() {
            assert_eq!(TEST_TABLES.king_attacks(sq), offsets_from(sq, &steps));
        }

        assert_eq!(TEST_TABLES.king_attacks(Square::H8).count_bits(), 3);
        assert_eq!(TEST_TABLES.king_attacks(Square::E1).count_bits(), 5);
    }

    #[test]
    fn test_slider_attacks_match_on_the_fly() {
        let mut rng = PRNG::default();

        for _ in 0..200 {
            let occ = Bitboard(rng.random_u64() & rng.random_u64());

            for sq in Square::iter() {
                assert_eq!(
                    TEST_TABLES.bishop_attacks(sq, occ),
                    attacks_on_the_fly(PieceType::Bishop, sq, occ),
                    "Bishop attack mismatch for {:?} with occ {:#x}",
                    sq,
                    occ.0
                );
                assert_eq!(
                    TEST_TABLES.rook_attacks(sq, occ),
                    attacks_on_the_fly(PieceType::Rook, sq, occ),
                    "Rook attack mismatch for {:?} with occ {:#x}",
                    sq,
                    occ.0
                );
            }
        }
    }

    #[test]
    fn test_rook_stops_at_first_blocker() {
        let mut rng = PRNG::new(0xC0FFEE);

        for _ in 0..200 {
            let occ = Bitboard(rng.random_sparse_u64());

            for sq in Square::iter() {
                let attacks = TEST_TABLES.rook_attacks(sq, occ);

                for dir in [Direction::N, Direction::E, Direction::S, Direction::W] {
                    let mut blocked = false;
                    let mut cur = sq;

                    while let Some(next) = cur.add(dir) {
                        assert_eq!(
                            attacks.contains(next),
                            !blocked,
                            "Rook on {:?} ray {:?} wrong at {:?}",
                            sq,
                            dir,
                            next
                        );
                        blocked |= occ.contains(next);
                        cur = next;
                    }
                }
            }
        }
    }

    #[test]
    fn test_queen_is_union() {
        let occ = Bitboard::from([Square::D6, Square::F6, Square::B2, Square::G4]);

        for sq in Square::iter() {
            assert_eq!(
                TEST_TABLES.queen_attacks(sq, occ),
                TEST_TABLES.bishop_attacks(sq, occ) | TEST_TABLES.rook_attacks(sq, occ)
            );
        }
    }

    #[test]
    fn test_own_square_in_occupancy_is_ignored() {
        let occ = Bitboard::from([Square::D4, Square::D7]);
        let expected = attacks_on_the_fly(PieceType::Rook, Square::D4, occ);

        assert_eq!(TEST_TABLES.rook_attacks(Square::D4, occ), expected);
        assert!(expected.contains(Square::D7));
        assert!(!expected.contains(Square::D8));
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(TEST_TABLES.bishop.len(), 0x1480);
        assert_eq!(TEST_TABLES.rook.len(), 0x19000);
    }

    #[test]
    fn test_build_is_deterministic() {
        let other = AttackTables::new();
        let mut rng = PRNG::new(7);

        for _ in 0..50 {
            let occ = Bitboard(rng.random_u64());
            for sq in Square::iter() {
                assert_eq!(other.queen_attacks(sq, occ), TEST_TABLES.queen_attacks(sq, occ));
            }
        }
    }
}
