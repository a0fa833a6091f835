//! Error types for engine inputs
//!
//! The turn engine itself raises no errors: numeric edge cases are clamped,
//! death replaces failure, and the turn cap bounds every fight. Only army
//! construction validates.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Errors from building engine inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum EngineError {
    /// An army must field at least one unit
    EmptyArmy,
    /// An army may field at most `MAX_ARMY_SIZE` units
    ArmyTooLarge { size: u32 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
