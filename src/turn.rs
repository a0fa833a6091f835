//! Turn engine: scratch values, damage computation, damage resolution
//!
//! Three ordered steps drive each turn for each side: `start_turn` gathers
//! the aura aggregates from every surviving unit, `compute_damage` resolves
//! the front unit's ability into outgoing damage numbers, and
//! `resolve_damage` applies the opposing side's numbers to this side and
//! detects deaths.

use crate::math::{ceil_i64, powi};
use crate::rng::turn_seed;
use crate::side::SideState;
use crate::types::{Skill, ELEMENTAL_BOOST};

/// Ephemeral per-turn values, rebuilt every turn and never persisted.
#[derive(Debug, Clone)]
pub struct TurnEffects {
    /// Final primary damage aimed at the targeted enemy unit.
    pub base_damage: i64,
    pub multiplier: f64,
    pub buff_damage: i64,
    pub protection: i64,
    pub aoe_damage: i64,
    pub healing: i64,
    pub damp_factor: f64,
    /// Fraction of the defender's own damage reflected back at it.
    pub counter: f64,
    /// Attenuation applied to `chain_damage` at each unit down the line.
    pub chain_decay: f64,
    /// Damage carried past the front unit by trample and ricochet effects.
    pub chain_damage: f64,
    /// Fraction of incoming front damage soaked by an absorbing ally.
    pub absorb_mult: f64,
    /// The soaked portion, redirected during resolution.
    pub absorb_damage: f64,
    /// Released into `aoe_damage` only if the enemy front unit dies.
    pub explode_damage: i64,
    pub trample: bool,
    /// Back-line splash from a pierce skill.
    pub splash_damage: i64,
    /// Offset from the enemy front unit for the primary hit.
    pub target: usize,
    pub crit_mult: f64,
    /// Addition to the elemental boost from a grudge skill.
    pub grudge: f64,
}

impl Default for TurnEffects {
    fn default() -> Self {
        Self {
            base_damage: 0,
            multiplier: 1.0,
            buff_damage: 0,
            protection: 0,
            aoe_damage: 0,
            healing: 0,
            damp_factor: 1.0,
            counter: 0.0,
            chain_decay: 0.0,
            chain_damage: 0.0,
            absorb_mult: 0.0,
            absorb_damage: 0.0,
            explode_damage: 0,
            trample: false,
            splash_damage: 0,
            target: 0,
            crit_mult: 1.0,
            grudge: 0.0,
        }
    }
}

impl SideState<'_> {
    /// Gather the aura aggregates contributed by every surviving unit.
    ///
    /// Recomputed fresh each turn: the front unit, and with it the element
    /// scoping of buffs and protection, changes as units fall.
    pub fn start_turn(&self) -> TurnEffects {
        let mut turn = TurnEffects::default();
        let front_element = self.front().element;

        for i in self.units_lost..self.army_size {
            match self.skills[i] {
                Skill::Protect { scope, amount } => {
                    if scope.covers(front_element) {
                        turn.protection += amount;
                    }
                }
                Skill::Buff { scope, amount } => {
                    if scope.covers(front_element) {
                        turn.buff_damage += amount;
                    }
                }
                Skill::Champion { scope, amount } => {
                    if scope.covers(front_element) {
                        turn.buff_damage += amount;
                        turn.protection += amount;
                    }
                }
                Skill::Heal { amount } => turn.healing += amount,
                Skill::Aoe { amount } => turn.aoe_damage += amount,
                Skill::Lifesteal { amount } => {
                    turn.aoe_damage += amount;
                    turn.healing += amount;
                }
                Skill::Dampen { factor } => turn.damp_factor *= factor,
                Skill::Absorb { fraction } => {
                    if i != self.units_lost {
                        turn.absorb_mult += fraction;
                    }
                }
                _ => {}
            }
        }

        turn
    }

    /// Resolve the front unit's ability and this turn's outgoing damage.
    ///
    /// Requires a live opponent: the snipe target roll divides by the number
    /// of surviving enemy units, which the fight loop's guard keeps nonzero.
    pub fn compute_damage(
        &mut self,
        turn: &mut TurnEffects,
        turncounter: u32,
        enemy: &SideState<'_>,
        enemy_turn: &TurnEffects,
    ) {
        let front = self.units_lost;
        turn.base_damage = self.unit(front).damage;

        let enemy_element = enemy.front().element;
        let roll = turn_seed(enemy.seed, turncounter);

        match self.skills[front] {
            Skill::Comrades { factor } => {
                turn.multiplier *= powi(factor, self.pure_count[front]);
            }
            Skill::Training { rate } => {
                turn.buff_damage += (rate * turncounter as f64) as i64;
            }
            Skill::Rainbow { amount } => {
                if self.rainbow_done[front] {
                    turn.buff_damage += amount;
                }
            }
            Skill::Bane { foe, factor } => {
                if enemy_element == foe {
                    turn.multiplier *= factor;
                }
            }
            Skill::Berserk { factor } => {
                turn.multiplier *= powi(factor, self.berserk_stacks);
                self.berserk_stacks += 1;
            }
            Skill::Pierce { fraction } => {
                turn.splash_damage = (self.unit(front).damage as f64 * fraction) as i64;
            }
            Skill::Ricochet { decay } => turn.chain_decay = decay,
            Skill::Trample => turn.trample = true,
            Skill::Counter { fraction } => turn.counter = fraction,
            // Recorded here, but only released if the enemy front unit dies.
            Skill::Explode { amount } => turn.explode_damage = amount,
            // The matching max-health roll happens once before turn zero.
            Skill::Dice { sides } => turn.base_damage += enemy.seed % (sides + 1),
            Skill::Snipe => {
                turn.target = (roll % (enemy.army_size - enemy.units_lost) as i64) as usize;
            }
            Skill::Crit { factor } => {
                if roll % 2 == 1 {
                    turn.crit_mult *= factor;
                }
            }
            Skill::Grudge { bonus } => turn.grudge = bonus,
            _ => {}
        }

        let mut damage = turn.base_damage as f64 * turn.multiplier + turn.buff_damage as f64;

        if enemy_element.countered_by() == self.unit(front).element {
            damage *= ELEMENTAL_BOOST + turn.grudge;
        }
        // Protection lands after the elemental boost; enough of it absorbs
        // the hit entirely.
        if damage > enemy_turn.protection as f64 {
            damage -= enemy_turn.protection as f64;
        } else {
            damage = 0.0;
        }

        damage *= turn.crit_mult;

        // Split off the soaked portion; both halves are rounded up later.
        turn.absorb_damage = damage * enemy_turn.absorb_mult;
        damage -= turn.absorb_damage;

        turn.base_damage = ceil_i64(damage);

        // The enemy dampen aura scales down every area effect, but not the
        // primary damage already extracted above.
        if enemy_turn.damp_factor < 1.0 {
            damage *= enemy_turn.damp_factor;
            turn.explode_damage = ceil_i64(turn.explode_damage as f64 * enemy_turn.damp_factor);
            turn.aoe_damage = ceil_i64(turn.aoe_damage as f64 * enemy_turn.damp_factor);
            turn.healing = ceil_i64(turn.healing as f64 * enemy_turn.damp_factor);
            turn.splash_damage = ceil_i64(turn.splash_damage as f64 * enemy_turn.damp_factor);
        }

        turn.chain_damage = damage;
    }

    /// Apply the opposing side's computed turn values to this side and mark
    /// deaths.
    ///
    /// `own` is this side's turn record, consulted for the counter
    /// reflection and for healing its survivors. `opposing` is mutated in
    /// place: a front-unit kill releases the explode damage into its area
    /// pool, and the chain damage decays as it walks the line.
    pub fn resolve_damage(&mut self, own: &TurnEffects, opposing: &mut TurnEffects) {
        let front = self.units_lost;

        self.remaining_health[front + opposing.target] -= opposing.base_damage;

        // Reflection keys off the damage this side itself dealt, not the
        // attacker's.
        if opposing.counter != 0.0 && (self.boss || self.remaining_health[front] > 0) {
            self.remaining_health[front] -= ceil_i64(own.base_damage as f64 * opposing.counter);
        }

        if opposing.trample && self.army_size > front + 1 {
            // Float subtract truncating toward zero, unlike the rounded-up
            // chain hits below.
            self.remaining_health[front + 1] =
                (self.remaining_health[front + 1] as f64 - opposing.chain_damage) as i64;
        }

        if self.remaining_health[front] <= 0 && !self.boss {
            opposing.aoe_damage += opposing.explode_damage;
        }

        for i in front..self.army_size {
            if i > front && matches!(self.skills[i], Skill::Absorb { .. }) {
                self.remaining_health[i] -= ceil_i64(opposing.absorb_damage);
            }

            self.remaining_health[i] -= opposing.aoe_damage;

            if i > front {
                self.remaining_health[i] -=
                    opposing.splash_damage + ceil_i64(opposing.chain_damage);
            }

            if self.remaining_health[i] <= 0 && !self.boss {
                if i == self.units_lost {
                    self.units_lost += 1;
                    self.berserk_stacks = 0;
                }
                // A dead unit stops contributing its skill from the next
                // aggregate pass on.
                self.skills[i] = Skill::None;
            } else {
                self.remaining_health[i] += own.healing;
                if self.remaining_health[i] > self.max_health[i] {
                    self.remaining_health[i] = self.max_health[i];
                }
            }

            opposing.chain_damage *= opposing.chain_decay;
        }

        // Wither only bites while its owner still holds the front.
        if self.units_lost == front {
            if let Skill::Wither { fraction } = self.skills[self.units_lost] {
                self.remaining_health[self.units_lost] =
                    ceil_i64(self.remaining_health[self.units_lost] as f64 * fraction);
            }
        }
    }
}
