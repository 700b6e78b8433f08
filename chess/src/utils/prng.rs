/******************************************\
|==========================================|
|         Pseudo Random Generator          |
|==========================================|
\******************************************/

/// # PRNG
///
/// Small xorshift-style generator with 256 bits of state. It exists so the magic
/// number search is reproducible: the same seed always yields the same stream,
/// and therefore the same attack tables on every run and every platform.
#[derive(Debug, Clone)]
pub struct PRNG {
    s: [u64; 4],
}

impl PRNG {
    /// Seed used when no per-rank seed applies.
    pub const DEFAULT_SEED: u64 = 0x6B51FF299F6A3AEE;

    pub const fn new(seed: u64) -> Self {
        PRNG {
            s: [
                seed,
                seed.wrapping_mul(2),
                seed.wrapping_div(5),
                seed.wrapping_add(seed.wrapping_div(2)),
            ],
        }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        self.s[0]
    }

    /// Roughly an eighth of the bits set. Good magic candidates are sparse.
    #[inline]
    pub const fn random_sparse_u64(&mut self) -> u64 {
        self.random_u64() & self.random_u64() & self.random_u64()
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(Self::DEFAULT_SEED)
    }
}
