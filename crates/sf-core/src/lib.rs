//! sf-core: Shared types and utilities for ScratchForge
//!
//! This crate provides the foundational pieces used across all ScratchForge
//! crates: the deterministic ticket random source, the core error type, and
//! payout rounding.

mod error;
mod rng;

pub use error::*;
pub use rng::*;

/// Round a cash or share amount to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
