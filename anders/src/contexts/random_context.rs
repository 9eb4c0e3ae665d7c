use rand::{rngs::StdRng, Rng, SeedableRng};

/// The one source of randomness for dungeon generation and physics.
///
/// Owned by the caller and passed to every system that needs it, so a dungeon can be rebuilt
/// exactly from its seed.
#[derive(Debug, Clone)]
pub struct RandomContext {
    seed: u64,
    rng: StdRng,
}

impl RandomContext {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system. The chosen seed is still available through [`Self::seed`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Start over from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`. `len` must not be zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Uniform integer in `[low, high)`. `low` must be less than `high`.
    pub fn range(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..high)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform float in `[-1, 1)`
    pub fn signed_unit(&mut self) -> f32 {
        self.rng.gen_range(-1.0..1.0)
    }
}

impl Default for RandomContext {
    fn default() -> Self {
        Self::from_entropy()
    }
}
