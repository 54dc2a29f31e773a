//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Seedable pseudo-random number generator (xorshift64).
///
/// The host supplies the seed (the browser bridge draws it from
/// `Math.random()`), tests pin it so a field is reproducible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [low, high).
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        let v = low + self.next_f32() * (high - low);
        // Rounding can land exactly on `high` for wide ranges.
        if v >= high && high > low {
            low
        } else {
            v
        }
    }
}
