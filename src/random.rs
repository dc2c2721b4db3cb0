use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/** seeded random number generator shared by all the restarts of a run.

It is created once (from an explicit seed or from OS entropy) and then passed by `&mut` to every
component drawing numbers. The seed is kept so that a run can be replayed.
*/
#[derive(Debug, Clone)]
pub struct RandomSource {
    /// seed this generator was created from
    seed: u64,
    /// underlying generator
    rng: StdRng,
}

impl RandomSource {
    /// generator with a given seed (reproducible)
    pub fn from_seed(seed:u64) -> Self {
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }

    /// generator seeded from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// seed from the optional value, or from entropy if none is given
    pub fn from_optional_seed(seed:Option<u64>) -> Self {
        match seed {
            None => Self::from_entropy(),
            Some(s) => Self::from_seed(s),
        }
    }

    /// seed used to create this generator
    pub fn seed(&self) -> u64 { self.seed }

    /// uniform integer in [a,b] (inclusive)
    pub fn uniform_int(&mut self, a:usize, b:usize) -> usize {
        debug_assert!(a <= b, "uniform_int: empty range [{},{}]", a, b);
        self.rng.gen_range(a..=b)
    }

    /// shuffles the slice in place (uniform permutation)
    pub fn shuffle<T>(&mut self, values:&mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /** new generator seeded from the current state of this one (advances it). Two consecutive
    splits give different generators. */
    pub fn split(&mut self) -> Self {
        Self::from_seed(self.rng.gen())
    }

    /** independent generator derived from the seed of this one (not from its current state).
    Different stream ids give non-overlapping, uncorrelated streams. */
    pub fn substream(&self, stream_id:u64) -> Self {
        Self::from_seed(splitmix64(self.seed ^ stream_id))
    }
}

/// SplitMix64 mixer, used to derive the seeds of the substreams
fn splitmix64(mut x:u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}
