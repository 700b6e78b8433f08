use crate::core::*;
use crate::utils::PRNG;

/// Largest number of relevant occupancies for one square (rook in a corner, 12 bits).
const MAX_PERM: usize = 0x1000;

/// Candidates tried per square before the search is declared broken.
const MAX_ATTEMPTS: u32 = 10_000_000;

/******************************************\
|==========================================|
|             Magics Definition            |
|==========================================|
\******************************************/

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Magic {
    magic: u64,
    mask: Bitboard,
    shift: u8,
    offset: usize,
}

impl Magic {
    /// Index into the shared attack table: `((occ & mask) * magic) >> shift + offset`.
    #[inline]
    pub(crate) const fn index(&self, occ: Bitboard) -> usize {
        ((occ.0 & self.mask.0).wrapping_mul(self.magic) >> self.shift) as usize + self.offset
    }

    const fn new(pt: PieceType, sq: Square, offset: usize) -> Self {
        let mask = Bitboard(attacks_on_the_fly(pt, sq, Bitboard::EMPTY).0 & !edge_mask(sq).0);

        Magic {
            magic: 0,
            mask,
            shift: 64 - mask.count_bits() as u8,
            offset,
        }
    }

    #[inline]
    const fn perm(&self) -> usize {
        1 << self.mask.count_bits()
    }
}

/******************************************\
|==========================================|
|              Slider Table                |
|==========================================|
\******************************************/

/// # Slider Table
///
/// Magic-indexed attack sets for one sliding piece type. Every square owns a
/// contiguous block of `table`, starting at its magic's offset, holding one entry
/// per subset of its relevant blockers.
#[derive(Debug, Clone)]
pub struct SliderTable {
    magics: [Magic; Square::NUM],
    table: Vec<Bitboard>,
}

impl SliderTable {
    /// Searches magic numbers for `pt` (bishop or rook) and fills the table.
    ///
    /// The search is seeded per rank so the result is identical on every run.
    ///
    /// # Panics
    /// If `pt` is not a bishop or rook, or if some square exhausts its attempt
    /// budget. Both are construction bugs rather than runtime conditions.
    pub fn new(pt: PieceType) -> Self {
        let seeds = match pt {
            PieceType::Bishop => BISHOP_SEEDS,
            PieceType::Rook => ROOK_SEEDS,
            _ => panic!("No magic table for {:?}", pt),
        };

        let mut offset = 0;
        let mut magics = [Magic::default(); Square::NUM];
        for sq in Square::iter() {
            magics[sq.index()] = Magic::new(pt, sq, offset);
            offset += magics[sq.index()].perm();
        }

        let mut table = vec![Bitboard::EMPTY; offset];
        let mut reference = [Bitboard::EMPTY; MAX_PERM];
        let mut occupancy = [Bitboard::EMPTY; MAX_PERM];
        let mut rank_attempts = 0;

        for sq in Square::iter() {
            let m = &mut magics[sq.index()];
            let perm = m.perm();

            // Carry-rippler walk over every subset of the mask
            let mut occ = Bitboard::EMPTY;
            for i in 0..perm {
                reference[i] = attacks_on_the_fly(pt, sq, occ);
                occupancy[i] = occ;
                occ = Bitboard(occ.0.wrapping_sub(m.mask.0) & m.mask.0);
            }

            rank_attempts += find_magic(
                seeds[sq.rank().index()],
                m,
                &reference[..perm],
                &occupancy[..perm],
                &mut table,
            );

            if sq.file() == File::FileH {
                tracing::trace!(piece = ?pt, rank = %sq.rank(), attempts = rank_attempts, "magic rank done");
                rank_attempts = 0;
            }
        }

        SliderTable { magics, table }
    }

    /// Attack set of a slider on `sq` given the board occupancy.
    #[inline]
    pub fn attacks(&self, sq: Square, occ: Bitboard) -> Bitboard {
        self.table[self.magics[sq.index()].index(occ)]
    }

    /// Number of entries across all squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/******************************************\
|==========================================|
|              Magic Search                |
|==========================================|
\******************************************/

/// Per-rank seeds for the bishop magic search
const BISHOP_SEEDS: [u64; Rank::NUM] = [
    0xA4302F8257706E25,
    0xF5DFC414DBE20B81,
    0x7FA4E09723AAA919,
    0xC14C05BE2E3A10BF,
    0xC60BA0419F81238E,
    0x065AFE010904A1A4,
    0x5E040F6D2A6A6FC4,
    0xF26CD592A998EBFC,
];

/// Per-rank seeds for the rook magic search
const ROOK_SEEDS: [u64; Rank::NUM] = [
    0xA229B9598E24437C,
    0x563E0EF1ABAE19AD,
    0x81445AC4F7966038,
    0xC6D2FB81AC850941,
    0x283C0A606438D8B3,
    0xEE1D97DF3E4CB9D7,
    0xAC18FA699DF5F065,
    0x33481A03E05CFBED,
];

/// Tries sparse candidates until one maps every occupancy to a slot holding the
/// right attack set. Returns the number of candidates tested.
///
/// Slots are stamped with the attempt that last wrote them, so the square's
/// block never needs clearing between candidates.
fn find_magic(
    seed: u64,
    m: &mut Magic,
    reference: &[Bitboard],
    occupancy: &[Bitboard],
    table: &mut [Bitboard],
) -> u32 {
    let mut rng = PRNG::new(seed);
    let mut epoch = [0u32; MAX_PERM];
    let mut attempt = 0;

    loop {
        let candidate = rng.random_sparse_u64();
        if (candidate.wrapping_mul(m.mask.0) >> 56).count_ones() < 6 {
            continue;
        }

        attempt += 1;
        if attempt > MAX_ATTEMPTS {
            panic!(
                "Magic search gave up after {} attempts (mask {:#x}, seed {:#x})",
                MAX_ATTEMPTS, m.mask.0, seed
            );
        }

        m.magic = candidate;

        let fits = occupancy.iter().zip(reference).all(|(&occ, &attack)| {
            let idx = m.index(occ);
            let slot = idx - m.offset;

            if epoch[slot] < attempt {
                epoch[slot] = attempt;
                table[idx] = attack;
                true
            } else {
                table[idx] == attack
            }
        });

        if fits {
            return attempt;
        }
    }
}

/******************************************\
|==========================================|
|            Attacks on the fly            |
|==========================================|
\******************************************/

/// Slow reference for slider attacks: walks each ray until it leaves the board
/// or has included the first occupied square.
///
/// Only bishops and rooks have rays; anything else attacks nothing here.
pub const fn attacks_on_the_fly(pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    use Direction::*;

    let dirs: [Direction; 4] = match pt {
        PieceType::Rook => [N, E, S, W],
        PieceType::Bishop => [NE, NW, SE, SW],
        _ => return Bitboard::EMPTY,
    };

    let mut attacks = Bitboard::EMPTY;
    let mut i = 0;
    while i < dirs.len() {
        let mut cur = sq;
        while let Some(next) = cur.add(dirs[i]) {
            attacks.0 |= next.bb().0;
            if occ.contains(next) {
                break;
            }
            cur = next;
        }
        i += 1;
    }

    attacks
}

/// Board edges that never affect a slider on `sq`. An edge the square itself sits
/// on is kept, since rays along it still cross relevant blockers.
pub(crate) const fn edge_mask(sq: Square) -> Bitboard {
    let rank_18 = Bitboard::RANK_1.0 | Bitboard::RANK_8.0;
    let file_ah = Bitboard::FILE_A.0 | Bitboard::FILE_H.0;

    let rank_mask = rank_18 & !sq.rank().bb().0;
    let file_mask = file_ah & !sq.file().bb().0;

    Bitboard(rank_mask | file_mask)
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
