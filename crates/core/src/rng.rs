//! RNG module - deterministic random source for stage generation
//!
//! Provides a simple LCG so that a given seed always produces the same stage,
//! plus a clock-derived seed for interactive play.

use std::time::{SystemTime, UNIX_EPOCH};

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

    /// Fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        // The low bits of a power-of-two LCG have tiny periods (bit 0 alternates),
        // so take the top bit.
        self.next_u32() >> 31 == 1
    }
}

/// Scramble a seed into an unrelated one (murmur3 finalizer).
///
/// Use this before seeding a second generator from the same user seed;
/// two LCGs started from one value would otherwise share their stream.
pub fn mix_seed(seed: u32) -> u32 {
    let mut h = seed.wrapping_add(0x9E37_79B9);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Derive a seed from the system clock.
///
/// Falls back to 1 if the clock reads before the Unix epoch.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the 128-bit count so both the seconds and sub-second parts contribute.
    (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
}
