//! Deterministic turn-based army combat simulator.
//!
//! Resolves fights between two ordered armies turn by turn, reproducing
//! bit-for-bit outcomes from the armies' seeds, and records a resumable
//! snapshot so a rematch against an unchanged opponent can skip the turns
//! already resolved. Built to score army compositions for ranking and
//! optimization tools, not to drive an interactive game.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod fight;
mod math;
mod rng;
mod side;
mod snapshot;
mod turn;
mod types;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use fight::{fights_simulated, simulate_fight, MAX_TURNS};
pub use rng::turn_seed;
pub use side::SideState;
pub use snapshot::FightSnapshot;
pub use turn::TurnEffects;
pub use types::*;
