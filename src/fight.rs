//! Fight orchestration
//!
//! Seeds both side states (fresh or from a snapshot), applies the one-time
//! turn-zero effects, loops turns until one side is exhausted or the cap is
//! hit, and writes the resumable snapshot back onto the left army.

use core::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::math::round_i64;
use crate::side::SideState;
use crate::snapshot::FightSnapshot;
use crate::turn::TurnEffects;
use crate::types::{Army, Monster, Skill};

/// Hard turn cap; the liveness guarantee for every fight.
pub const MAX_TURNS: u32 = 100;

static FIGHTS_SIMULATED: AtomicU64 = AtomicU64::new(0);

/// Total fights simulated by this process.
pub fn fights_simulated() -> u64 {
    FIGHTS_SIMULATED.load(Ordering::Relaxed)
}

/// Simulate one fight. Returns true when the left army wins; a draw counts
/// as a right-side win. Writes the resumable snapshot into `left.snapshot`
/// and bumps the global fight counter.
///
/// With `verbose` set the stored snapshot is ignored, the fight replays from
/// turn zero, and every turn's damage and health lines are emitted at debug
/// level.
pub fn simulate_fight(roster: &[Monster], left: &mut Army, right: &Army, verbose: bool) -> bool {
    FIGHTS_SIMULATED.fetch_add(1, Ordering::Relaxed);

    let mut turncounter;
    let mut left_side;
    let mut right_side;

    if left.snapshot.valid && !verbose {
        // Pick up where the stored fight left off: only the left army's
        // newest unit is still standing, and the right side resumes at its
        // recorded front unit.
        left_side = SideState::new(roster, left, left.units.len() - 1, left.snapshot.left_aoe);
        right_side = SideState::new(
            roster,
            right,
            left.snapshot.units_lost as usize,
            left.snapshot.right_aoe,
        );

        // The newcomer may already have fallen to the accumulated area
        // damage.
        if left_side.remaining_health[left_side.units_lost] <= 0 {
            left_side.units_lost += 1;
        }

        right_side.remaining_health[right_side.units_lost] = left.snapshot.front_health;
        right_side.berserk_stacks = left.snapshot.berserk_stacks as u32;
        turncounter = left.snapshot.turncounter as u32;
    } else {
        left_side = SideState::new(roster, left, 0, 0);
        right_side = SideState::new(roster, right, 0, 0);

        turn_zero(&mut left_side, &mut right_side, &mut left.snapshot);
        turncounter = 0;
    }

    while !left_side.exhausted() && !right_side.exhausted() && turncounter < MAX_TURNS {
        let mut left_turn = left_side.start_turn();
        let mut right_turn = right_side.start_turn();

        left_side.compute_damage(&mut left_turn, turncounter, &right_side, &right_turn);
        right_side.compute_damage(&mut right_turn, turncounter, &left_side, &left_turn);

        // Revenge triggers on the incoming primary damage only; lethal area
        // damage does not set it off.
        arm_revenge(&left_side, &mut left_turn, right_turn.base_damage);
        arm_revenge(&right_side, &mut right_turn, left_turn.base_damage);

        left.snapshot.left_aoe += right_turn.aoe_damage + right_turn.splash_damage;
        left.snapshot.right_aoe += left_turn.aoe_damage + left_turn.splash_damage;

        left_side.resolve_damage(&left_turn, &mut right_turn);
        right_side.resolve_damage(&right_turn, &mut left_turn);

        turncounter += 1;

        if verbose {
            debug!(
                "after turn {}: left dealt {}, health {:?}; right dealt {}, health {:?}",
                turncounter,
                left_turn.base_damage,
                &left_side.remaining_health[..left_side.army_size],
                right_turn.base_damage,
                &right_side.remaining_health[..right_side.army_size],
            );
        }
    }

    // Bosses do not time out: hitting the cap against one is a failed run.
    if turncounter >= MAX_TURNS && right_side.boss {
        left_side.units_lost = left_side.army_size;
    }

    left.snapshot.dominated = false;
    left.snapshot.turncounter = turncounter as u8;

    if left_side.exhausted() {
        // Draws count as right-side wins.
        left.snapshot.units_lost = right_side.units_lost as u8;
        left.snapshot.berserk_stacks = right_side.berserk_stacks as u8;
        left.snapshot.front_health = if right_side.exhausted() {
            0
        } else {
            right_side.remaining_health[right_side.units_lost]
        };
        left.snapshot.won = false;
        false
    } else {
        left.snapshot.units_lost = left_side.units_lost as u8;
        left.snapshot.front_health = left_side.remaining_health[left_side.units_lost];
        left.snapshot.berserk_stacks = left_side.berserk_stacks as u8;
        left.snapshot.won = true;
        true
    }
}

/// One-time effects applied before the first turn of a fresh fight.
fn turn_zero(left: &mut SideState<'_>, right: &mut SideState<'_>, snapshot: &mut FightSnapshot) {
    // Dice units roll bonus max health from the opposing seed; the matching
    // damage roll happens during battle.
    roll_dice_health(left, right.seed);
    roll_dice_health(right, left.seed);

    // A smaller army with a handicap unit shrinks the opposing health pools
    // proportionally to the size ratio.
    if left.handicap && left.army_size < right.army_size {
        shrink_health(right, left.army_size as i64, right.army_size as i64);
    }
    if right.handicap && right.army_size < left.army_size {
        shrink_health(left, right.army_size as i64, left.army_size as i64);
    }

    snapshot.left_aoe = 0;
    snapshot.right_aoe = 0;

    // Ambush damage resolves as an immediate pass with no other effects set.
    if left.opening_aoe != 0 {
        snapshot.right_aoe += left.opening_aoe;
        let mut opening = TurnEffects {
            aoe_damage: left.opening_aoe,
            ..TurnEffects::default()
        };
        right.resolve_damage(&TurnEffects::default(), &mut opening);
    }
    if right.opening_aoe != 0 {
        snapshot.left_aoe += right.opening_aoe;
        let mut opening = TurnEffects {
            aoe_damage: right.opening_aoe,
            ..TurnEffects::default()
        };
        left.resolve_damage(&TurnEffects::default(), &mut opening);
    }
}

fn roll_dice_health(side: &mut SideState<'_>, opposing_seed: i64) {
    for i in 0..side.army_size {
        if let Skill::Dice { sides } = side.skills[i] {
            side.max_health[i] += opposing_seed % (sides + 1);
            side.remaining_health[i] = side.max_health[i];
        }
    }
}

fn shrink_health(side: &mut SideState<'_>, small: i64, large: i64) {
    for i in 0..side.army_size {
        side.max_health[i] = side.max_health[i] * small / large;
        side.remaining_health[i] = side.max_health[i];
    }
}

fn arm_revenge(side: &SideState<'_>, turn: &mut TurnEffects, incoming: i64) {
    if let Skill::Revenge { factor } = side.skills[side.units_lost] {
        if side.remaining_health[side.units_lost] <= incoming {
            turn.aoe_damage += round_i64(side.front().damage as f64 * factor);
        }
    }
}
