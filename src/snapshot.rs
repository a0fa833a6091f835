//! Persisted fight snapshot
//!
//! The boundary object written after every fight and read back to resume a
//! rematch against the same opponent without replaying resolved turns. The
//! field semantics are the contract; the encoding is whatever the caller's
//! storage uses (SCALE and serde are both derived).

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Intermediate or final state of a fight between a fixed army pair.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct FightSnapshot {
    /// Set by the caller once the snapshot may seed a resumed fight; the
    /// engine only reads it (and ignores it in verbose mode).
    pub valid: bool,
    /// Units lost by the surviving side when the fight ended.
    pub units_lost: u8,
    /// Remaining health of the surviving side's front unit, or 0 when both
    /// sides were exhausted.
    pub front_health: i64,
    pub turncounter: u8,
    /// Berserk stacks held by the surviving side when the fight ended.
    pub berserk_stacks: u8,
    /// Area damage accumulated against the left side since the snapshot
    /// began.
    pub left_aoe: i64,
    /// Area damage accumulated against the right side since the snapshot
    /// began.
    pub right_aoe: i64,
    /// True when the left army won.
    pub won: bool,
    /// Reserved for ranking heuristics; always false at this layer.
    pub dominated: bool,
}
