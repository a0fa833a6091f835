use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::snapshot::FightSnapshot;

/// Stable index of a monster in the external read-only roster.
pub type MonsterId = u16;

/// Maximum number of units an army may field.
pub const MAX_ARMY_SIZE: usize = 6;
/// Every element bit set; a lineup suffix covering all of them satisfies the
/// rainbow condition.
pub const FULL_ELEMENT_MASK: u8 = 0b1111;
/// Damage multiplier applied when the attacker's element counters the
/// defender's.
pub const ELEMENTAL_BOOST: f64 = 1.5;

/// The four combat elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    #[default]
    Earth,
    Air,
    Water,
    Fire,
}

impl Element {
    /// Bit used in the rainbow mask.
    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The element that deals boosted damage to `self`.
    ///
    /// The cycle: Fire beats Earth, Earth beats Air, Air beats Water, Water
    /// beats Fire.
    pub fn countered_by(self) -> Element {
        match self {
            Element::Earth => Element::Fire,
            Element::Air => Element::Earth,
            Element::Water => Element::Air,
            Element::Fire => Element::Water,
        }
    }
}

/// Unit rarity tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
    /// A side fielding a boss is exempt from the normal death rule: its units
    /// are never removed by reaching zero health.
    Boss,
}

/// Which front-unit elements an aura skill applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Applies regardless of the front unit's element.
    All,
    /// Applies only while the front unit has this element.
    Only(Element),
}

impl Scope {
    pub(crate) fn covers(self, element: Element) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(only) => only == element,
        }
    }
}

/// A unit's special ability.
///
/// Each kind carries only the fields it needs. `None` marks a plain monster,
/// and is also what a dead unit's cached skill decays to mid-fight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Skill {
    #[default]
    None,
    /// Flat damage aura for front units covered by `scope`.
    Buff { scope: Scope, amount: i64 },
    /// Flat protection aura for front units covered by `scope`.
    Protect { scope: Scope, amount: i64 },
    /// Buff and protection in one aura.
    Champion { scope: Scope, amount: i64 },
    /// Heals every surviving ally at the end of each resolution.
    Heal { amount: i64 },
    /// Area damage against every surviving enemy each turn.
    Aoe { amount: i64 },
    /// Area damage that also heals own survivors.
    Lifesteal { amount: i64 },
    /// Scales down enemy area and chain effects (factor below 1).
    Dampen { factor: f64 },
    /// Soaks a fraction of damage aimed at the front unit, unless in front
    /// itself.
    Absorb { fraction: f64 },
    /// Attack multiplier growing exponentially each consecutive turn in
    /// front.
    Berserk { factor: f64 },
    /// Attack multiplier growing exponentially per plain monster behind.
    Comrades { factor: f64 },
    /// Attack bonus growing linearly with the turn counter.
    Training { rate: f64 },
    /// Flat attack bonus once every element stands behind this unit.
    Rainbow { amount: i64 },
    /// Attack multiplier against one specific enemy element.
    Bane { foe: Element, factor: f64 },
    /// Splash onto the enemy back line, as a fraction of own damage.
    Pierce { fraction: f64 },
    /// Chain damage ricocheting down the enemy line, attenuated by `decay`
    /// per unit.
    Ricochet { decay: f64 },
    /// The attack also lands on the second enemy unit.
    Trample,
    /// Reflects a fraction of the defender's own damage back at it.
    Counter { fraction: f64 },
    /// Bonus area damage released only if the enemy front unit dies this
    /// turn.
    Explode { amount: i64 },
    /// Seeded roll: bonus max health before battle and bonus damage while in
    /// front.
    Dice { sides: i64 },
    /// Seeded roll: the attack lands on a random surviving enemy instead of
    /// the front unit.
    Snipe,
    /// Seeded coin flip: critical damage multiplier.
    Crit { factor: f64 },
    /// Widens the elemental boost against countered enemies.
    Grudge { bonus: f64 },
    /// The front unit's remaining health is scaled by this fraction every
    /// turn it holds.
    Wither { fraction: f64 },
    /// When incoming damage is lethal, releases own damage scaled by `factor`
    /// as area damage.
    Revenge { factor: f64 },
    /// Before battle, shrinks a larger opposing army's health pools to size
    /// parity.
    Handicap,
    /// Pre-battle area damage, `amount` per owner level.
    Ambush { amount: i64 },
}

impl Skill {
    /// Plain monsters are the ones powering the comrades ability.
    pub fn is_none(self) -> bool {
        matches!(self, Skill::None)
    }
}

/// Immutable per-monster reference data, owned by an external roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub hp: i64,
    pub damage: i64,
    pub element: Element,
    pub rarity: Rarity,
    pub level: i32,
    pub skill: Skill,
}

impl Monster {
    pub fn new(hp: i64, damage: i64, element: Element) -> Self {
        Self {
            hp,
            damage,
            element,
            rarity: Rarity::Common,
            level: 1,
            skill: Skill::None,
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = skill;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }
}

/// An ordered lineup of roster indices plus the seed driving this army's
/// deterministic rolls. Index 0 fights first.
#[derive(Debug, Clone, PartialEq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Army {
    pub units: Vec<MonsterId>,
    /// Non-negative seed feeding the opposing side's per-turn rolls.
    pub seed: i64,
    /// Result of the last simulated fight, letting the engine resume a
    /// rematch instead of replaying already-resolved turns.
    pub snapshot: FightSnapshot,
}

impl Army {
    /// Build an army, validating the lineup bounds. The engine assumes
    /// validated input everywhere past this point.
    pub fn new(units: Vec<MonsterId>, seed: i64) -> EngineResult<Self> {
        if units.is_empty() {
            return Err(EngineError::EmptyArmy);
        }
        if units.len() > MAX_ARMY_SIZE {
            return Err(EngineError::ArmyTooLarge {
                size: units.len() as u32,
            });
        }
        Ok(Self {
            units,
            seed,
            snapshot: FightSnapshot::default(),
        })
    }

    /// Forget the stored snapshot; the next fight recomputes from turn zero.
    pub fn invalidate_snapshot(&mut self) {
        self.snapshot = FightSnapshot::default();
    }
}
