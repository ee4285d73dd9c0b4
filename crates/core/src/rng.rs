//! RNG module - the random source seam
//!
//! Word selection and tile placement draw from a [`RandomSource`] injected at
//! construction, so games are reproducible under test.
//!
//! Provides a simple LCG for seeded games and a scripted source for tests that
//! need to force exact draws.

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `[0, upper)`. `upper` must be non-zero.
    fn next_below(&mut self, upper: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, upper: u32) -> u32 {
        (**self).next_below(upper)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG have short periods.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, upper: u32) -> u32 {
        self.next_range(upper)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each draw returns `script[i] % upper`, so tests can write the exact
/// coordinates or word indices they expect. An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_below(&mut self, upper: u32) -> u32 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % upper
    }
}
