mod fight;

use crate::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn plain(hp: i64, damage: i64) -> Monster {
    Monster::new(hp, damage, Element::Fire)
}

fn skilled(hp: i64, damage: i64, skill: Skill) -> Monster {
    Monster::new(hp, damage, Element::Fire).with_skill(skill)
}

/// Build a shared roster and two armies fielding `left` and `right` in
/// lineup order, with seed 0 on both sides.
fn duel(left: &[Monster], right: &[Monster]) -> (Vec<Monster>, Army, Army) {
    duel_seeded(left, right, 0, 0)
}

fn duel_seeded(
    left: &[Monster],
    right: &[Monster],
    left_seed: i64,
    right_seed: i64,
) -> (Vec<Monster>, Army, Army) {
    let mut roster = Vec::new();
    roster.extend_from_slice(left);
    roster.extend_from_slice(right);

    let left_ids = (0..left.len() as MonsterId).collect();
    let right_ids = (left.len() as MonsterId..roster.len() as MonsterId).collect();

    let left_army = Army::new(left_ids, left_seed).expect("left lineup within bounds");
    let right_army = Army::new(right_ids, right_seed).expect("right lineup within bounds");
    (roster, left_army, right_army)
}

/// Drive one full turn at the side-state level, skipping the orchestrator's
/// revenge arming and snapshot bookkeeping.
fn run_turn(
    left: &mut SideState<'_>,
    right: &mut SideState<'_>,
    turncounter: u32,
) -> (TurnEffects, TurnEffects) {
    let mut left_turn = left.start_turn();
    let mut right_turn = right.start_turn();
    left.compute_damage(&mut left_turn, turncounter, right, &right_turn);
    right.compute_damage(&mut right_turn, turncounter, left, &left_turn);
    left.resolve_damage(&left_turn, &mut right_turn);
    right.resolve_damage(&right_turn, &mut left_turn);
    (left_turn, right_turn)
}
