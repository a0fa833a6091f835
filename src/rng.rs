//! Deterministic turn-seed derivation
//!
//! One pseudo-random value is derived per attacker per turn from the
//! opposing army's seed and the turn counter, and reused by every ability
//! that needs a coin flip or a target roll that turn. The closed-form
//! transform below is a reproducibility contract: fights must replay
//! bit-for-bit from the same seeds, so it must not be swapped for a
//! general-purpose generator.

use crate::math::round_i64;

/// Derive the turn's shared pseudo-random value from the opposing seed.
///
/// Seeds are non-negative, and `turncounter` is capped well below 101 by the
/// fight loop, so the modulus stays positive.
pub fn turn_seed(opposing_seed: i64, turncounter: u32) -> i64 {
    let t = 101 - turncounter as i64;
    let modulus = round_i64(opposing_seed as f64 / t as f64 + (t * t) as f64);
    (opposing_seed + t * t * t) % modulus
}
