use super::*;

#[test]
fn test_single_unit_duel_resolves_in_two_turns() {
    let (roster, mut left, right) = duel(&[plain(100, 30)], &[plain(50, 10)]);

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(won);
    assert_eq!(left.snapshot.turncounter, 2);
    assert_eq!(left.snapshot.units_lost, 0, "winner lost nobody");
    assert_eq!(left.snapshot.front_health, 80);
    assert_eq!(left.snapshot.berserk_stacks, 0);
    assert_eq!(left.snapshot.left_aoe, 0);
    assert_eq!(left.snapshot.right_aoe, 0);
    assert!(left.snapshot.won);
    assert!(!left.snapshot.dominated);
}

#[test]
fn test_mutual_destruction_counts_as_right_win() {
    let (roster, mut left, right) = duel(&[plain(10, 50)], &[plain(10, 50)]);

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(!won);
    assert_eq!(left.snapshot.turncounter, 1);
    assert_eq!(left.snapshot.units_lost, 1);
    assert_eq!(left.snapshot.front_health, 0, "no survivor to report");
    assert!(!left.snapshot.won);
}

#[test]
fn test_turn_cap_leaves_a_stalemate_to_the_left() {
    let (roster, mut left, right) = duel(&[plain(100, 0)], &[plain(100, 0)]);

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(won);
    assert_eq!(left.snapshot.turncounter as u32, MAX_TURNS);
    assert_eq!(left.snapshot.front_health, 100);
}

#[test]
fn test_turn_cap_against_boss_fails_the_challenger() {
    let boss = Monster::new(1_000_000, 1, Element::Water).with_rarity(Rarity::Boss);
    let (roster, mut left, right) = duel(&[plain(1000, 10)], &[boss]);

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(!won, "bosses do not time out");
    assert_eq!(left.snapshot.turncounter as u32, MAX_TURNS);
    assert_eq!(left.snapshot.units_lost, 0);
    assert_eq!(left.snapshot.front_health, 999_000);
}

#[test]
fn test_boss_units_survive_lethal_damage() {
    let boss = Monster::new(100, 0, Element::Water).with_rarity(Rarity::Boss);
    let (roster, mut left, right) = duel(&[plain(100, 1_000_000)], &[boss]);

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(!won);
    assert_eq!(left.snapshot.units_lost, 0, "boss never marked dead");
    assert!(left.snapshot.front_health < 0, "health keeps the full deficit");
}

#[test]
fn test_revenge_detonates_on_lethal_primary() {
    let (roster, mut left, right) = duel(
        &[
            skilled(10, 8, Skill::Revenge { factor: 2.0 }),
            plain(100, 5),
        ],
        &[plain(100, 50)],
    );

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(!won);
    assert_eq!(left.snapshot.turncounter, 3);
    // 100 minus the 8 primary and 16 revenge on turn 1, minus 5 on each of
    // turns 2 and 3.
    assert_eq!(left.snapshot.front_health, 66);
    assert_eq!(left.snapshot.right_aoe, 16);
    assert_eq!(left.snapshot.left_aoe, 0);
}

#[test]
fn test_revenge_quiet_while_survivable() {
    let (roster, mut left, right) = duel(
        &[skilled(100, 8, Skill::Revenge { factor: 2.0 })],
        &[plain(50, 0)],
    );

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(won);
    assert_eq!(left.snapshot.turncounter, 7);
    assert_eq!(left.snapshot.right_aoe, 0, "no lethal hit, no detonation");
}

#[test]
fn test_handicap_shrinks_the_larger_army() {
    let (roster, mut left, right) = duel(
        &[skilled(100, 10, Skill::Handicap)],
        &[plain(100, 3), plain(90, 4)],
    );

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(won);
    // Right pools shrink to 50 and 45 before the first turn.
    assert_eq!(left.snapshot.turncounter, 10);
    assert_eq!(left.snapshot.front_health, 65);
}

#[test]
fn test_ambush_strikes_before_the_first_turn() {
    let (roster, mut left, right) = duel(
        &[
            plain(100, 5),
            skilled(80, 0, Skill::Ambush { amount: 3 }).with_level(4),
        ],
        &[plain(20, 2), plain(15, 0)],
    );

    let won = simulate_fight(&roster, &mut left, &right, false);

    assert!(won);
    assert_eq!(left.snapshot.right_aoe, 12);
    assert_eq!(left.snapshot.turncounter, 3);
    assert_eq!(left.snapshot.front_health, 96);
}

#[test]
fn test_repeated_fresh_fights_are_identical() {
    let lineup_left = [
        skilled(120, 15, Skill::Crit { factor: 2.0 }),
        skilled(100, 0, Skill::Aoe { amount: 4 }),
        plain(90, 12),
    ];
    let lineup_right = [
        skilled(110, 10, Skill::Snipe),
        skilled(100, 0, Skill::Heal { amount: 3 }),
        plain(130, 9),
    ];

    let (roster, mut first_left, right) = duel_seeded(&lineup_left, &lineup_right, 77, 123);
    let first = simulate_fight(&roster, &mut first_left, &right, false);

    let (roster, mut second_left, right) = duel_seeded(&lineup_left, &lineup_right, 77, 123);
    let second = simulate_fight(&roster, &mut second_left, &right, false);

    assert_eq!(first, second);
    assert_eq!(first_left.snapshot, second_left.snapshot);
}

#[test]
fn test_verbose_mode_matches_quiet_outcome() {
    let lineup_left = [skilled(120, 15, Skill::Lifesteal { amount: 5 }), plain(90, 12)];
    let lineup_right = [plain(110, 10), skilled(130, 9, Skill::Counter { fraction: 0.3 })];

    let (roster, mut quiet_left, right) = duel_seeded(&lineup_left, &lineup_right, 31, 64);
    let quiet = simulate_fight(&roster, &mut quiet_left, &right, false);

    let (roster, mut loud_left, right) = duel_seeded(&lineup_left, &lineup_right, 31, 64);
    let loud = simulate_fight(&roster, &mut loud_left, &right, true);

    assert_eq!(quiet, loud);
    assert_eq!(quiet_left.snapshot, loud_left.snapshot);
}

#[test]
fn test_fight_counter_increments() {
    let before = fights_simulated();

    let (roster, mut left, right) = duel(&[plain(100, 30)], &[plain(50, 10)]);
    simulate_fight(&roster, &mut left, &right, false);

    assert!(fights_simulated() > before);
}
