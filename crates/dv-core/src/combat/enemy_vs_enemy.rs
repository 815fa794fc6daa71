//! Enemy attacks another enemy
//!
//! Same raw-damage and crit formula as attacks on the player, but with no
//! defense-reduction step: the result is rounded to one decimal, floored at
//! a minimum, and subtracted directly. Killing another enemy never aborts
//! the turn pass.

use crate::consts::{BASE_CRIT_CHANCE, CRIT_CHANCE_CAP, ENEMY_MIN_DAMAGE};
use crate::entity::Enemy;
use crate::hooks::{BestEffort, LogKind};
use crate::rng::Dice;

use super::formulas::CombatFormulas;

/// What an enemy-vs-enemy swing did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHitOutcome {
    pub blocked: bool,
    pub crit: bool,
    pub damage: f64,
    pub defender_died: bool,
}

/// Resolve an adjacent attack between two enemies.
pub fn enemy_attack_enemy(
    attacker: &Enemy,
    defender: &mut Enemy,
    fx: &dyn CombatFormulas,
    hooks: &mut BestEffort<'_>,
    rng: &mut dyn Dice,
) -> EnemyHitOutcome {
    let loc = fx.roll_hit_location(rng);

    if rng.next_f64() < fx.enemy_block_chance(defender, &loc) {
        hooks.log(
            &format!("The {} blocks the {}'s strike.", defender.kind, attacker.kind),
            LogKind::Combat,
        );
        return EnemyHitOutcome {
            blocked: true,
            crit: false,
            damage: 0.0,
            defender_died: false,
        };
    }

    let mut raw = attacker.atk * fx.damage_multiplier(attacker.level) * loc.mult;

    let crit_chance = (BASE_CRIT_CHANCE + loc.crit_bonus).clamp(0.0, CRIT_CHANCE_CAP);
    let crit = rng.next_f64() < crit_chance;
    if crit {
        raw *= fx.crit_multiplier(rng);
    }

    // One decimal of precision, never a zero-damage hit.
    let damage = ((raw * 10.0).round() / 10.0).max(ENEMY_MIN_DAMAGE);
    defender.hp -= damage;

    hooks.add_blood_decal(defender.x, defender.y, damage);
    hooks.log(
        &format!(
            "The {} strikes the {}'s {}.",
            attacker.kind, defender.kind, loc.part
        ),
        LogKind::Combat,
    );

    let defender_died = defender.hp <= 0.0;
    if defender_died {
        hooks.on_enemy_died(defender);
    }

    EnemyHitOutcome {
        blocked: false,
        crit,
        damage,
        defender_died,
    }
}
