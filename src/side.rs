//! Per-side battle state
//!
//! A `SideState` is built once per fight (or re-seeded from a snapshot) and
//! mutated by the turn engine until one side runs out of units. It indexes
//! an external read-only roster rather than owning any unit data.

use crate::types::{Army, Monster, MonsterId, Rarity, Skill, FULL_ELEMENT_MASK, MAX_ARMY_SIZE};

/// One combatant's full mutable battle state for the duration of a fight.
#[derive(Debug, Clone)]
pub struct SideState<'a> {
    roster: &'a [Monster],
    lineup: [MonsterId; MAX_ARMY_SIZE],
    /// Number of units fielded; the live window is `units_lost..army_size`.
    pub army_size: usize,
    /// Index of the current front unit; equals `army_size` once defeated.
    pub units_lost: usize,
    /// Defined only for live indices; earlier entries are dead.
    pub remaining_health: [i64; MAX_ARMY_SIZE],
    pub max_health: [i64; MAX_ARMY_SIZE],
    /// Cached per-unit skills; a dead unit's entry decays to `Skill::None`.
    pub skills: [Skill; MAX_ARMY_SIZE],
    /// Whether every element already stands behind this lineup index.
    /// Snapshotted at initialization from the original lineup, never
    /// recomputed as units die.
    pub rainbow_done: [bool; MAX_ARMY_SIZE],
    /// How many plain (skill-less) monsters stand behind this lineup index.
    /// Snapshotted at initialization, like `rainbow_done`.
    pub pure_count: [u32; MAX_ARMY_SIZE],
    /// Consecutive turns the current front unit has attacked with a berserk
    /// skill; resets when the front falls.
    pub berserk_stacks: u32,
    pub seed: i64,
    /// Set when any unit carries `Skill::Handicap`.
    pub handicap: bool,
    /// Pre-battle area damage accumulated from `Skill::Ambush` units.
    pub opening_aoe: i64,
    /// Boss sides never lose units to the normal death rule.
    pub boss: bool,
}

impl<'a> SideState<'a> {
    /// Extract battle state from an army.
    ///
    /// `already_lost` skips units resolved by a previous fight, and
    /// `aoe_offset` is the area damage those turns accumulated, subtracted
    /// from starting health; both are zero for a fresh fight. Units are
    /// processed from the back of the lineup toward the front so the rainbow
    /// and pure-monster snapshots see exactly the units standing behind each
    /// index.
    pub fn new(roster: &'a [Monster], army: &Army, already_lost: usize, aoe_offset: i64) -> Self {
        let mut side = Self {
            roster,
            lineup: [0; MAX_ARMY_SIZE],
            army_size: army.units.len(),
            units_lost: already_lost,
            remaining_health: [0; MAX_ARMY_SIZE],
            max_health: [0; MAX_ARMY_SIZE],
            skills: [Skill::None; MAX_ARMY_SIZE],
            rainbow_done: [false; MAX_ARMY_SIZE],
            pure_count: [0; MAX_ARMY_SIZE],
            berserk_stacks: 0,
            seed: army.seed,
            handicap: false,
            opening_aoe: 0,
            boss: false,
        };

        let mut element_mask = 0u8;
        let mut plain_so_far = 0u32;

        for i in (side.units_lost..side.army_size).rev() {
            let id = army.units[i];
            let unit = &roster[id as usize];
            side.lineup[i] = id;
            side.skills[i] = unit.skill;
            side.remaining_health[i] = unit.hp - aoe_offset;
            side.max_health[i] = unit.hp;

            side.boss |= unit.rarity == Rarity::Boss;
            if matches!(unit.skill, Skill::Handicap) {
                side.handicap = true;
            }
            if let Skill::Ambush { amount } = unit.skill {
                side.opening_aoe += amount * unit.level as i64;
            }

            side.rainbow_done[i] = element_mask == FULL_ELEMENT_MASK;
            side.pure_count[i] = plain_so_far;

            element_mask |= unit.element.bit();
            if unit.skill.is_none() {
                plain_so_far += 1;
            }
        }

        side
    }

    /// The roster entry fielded at lineup position `index`.
    pub fn unit(&self, index: usize) -> &Monster {
        &self.roster[self.lineup[index] as usize]
    }

    /// The current front unit.
    pub fn front(&self) -> &Monster {
        self.unit(self.units_lost)
    }

    /// True once every unit has been lost.
    pub fn exhausted(&self) -> bool {
        self.units_lost >= self.army_size
    }
}
