//! Deterministic per-ticket random source

use serde::{Deserialize, Serialize};

/// FNV-1a offset basis, also the fallback state for a zero fold
const FNV_OFFSET: u32 = 2_166_136_261;
/// FNV-1a prime
const FNV_PRIME: u32 = 16_777_619;
/// 2^32 as f64, for mapping state into [0, 1)
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic 32-bit random source seeded from a ticket id.
///
/// The seed string is folded FNV-1a style into the initial state; every draw
/// advances the state with a 32-bit xorshift. The same seed yields the same
/// sequence on every host and build, which lets a server re-derive and audit
/// a ticket outcome from its id alone.
///
/// Each ticket owns its own instance; there is no global generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Seed from a ticket id string.
    ///
    /// Characters are folded as Unicode scalar values, which matches UTF-16
    /// code units for every seed the platform issues.
    pub fn from_seed(seed: &str) -> Self {
        let mut state = FNV_OFFSET;
        for ch in seed.chars() {
            state ^= ch as u32;
            state = state.wrapping_mul(FNV_PRIME);
        }
        Self::from_state(state)
    }

    /// Resume from a raw 32-bit state.
    ///
    /// Zero is the xorshift fixed point; it is replaced with the FNV offset
    /// basis so the generator always advances.
    pub fn from_state(state: u32) -> Self {
        Self {
            state: if state == 0 { FNV_OFFSET } else { state },
        }
    }

    /// Current raw state (for snapshots).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return the full 32-bit draw.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Advance the state and return a value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }
}
