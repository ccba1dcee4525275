//! RNG module - injectable randomness for piece spawning
//!
//! Sessions never reach for a global random source. They draw through the
//! [`Randomizer`] trait, so tests can pass a seeded [`SimpleRng`] or a
//! scripted stub and replay the exact same piece sequence.

/// Source of uniform random indices.
pub trait Randomizer {
    /// Uniform index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.next_range(len as u32) as usize
    }
}
