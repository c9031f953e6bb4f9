//! RNG module - deterministic randomness for pipe placement
//!
//! A small LCG keeps the core free of external RNG crates and makes every
//! game fully reproducible from its seed (headless runs, tests, benches).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first value
        let seed = if seed == 0 { 1 } else { seed };
        Self { seed, state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniform value in `[0, 1)`.
    ///
    /// Only the top 24 bits are used: the low bits of an LCG are weak and
    /// 24 bits is exactly what an `f32` mantissa can hold.
    pub fn next_unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// The seed this generator was created with (after the zero fix-up).
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
