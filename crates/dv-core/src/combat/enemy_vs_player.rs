//! Enemy attacks the player
//!
//! Resolution order: hit location, block check, raw damage, crit, defense
//! reduction, then side effects (blood, log, statuses, equipment wear,
//! injury). Player hp is clamped to exactly zero on death and the caller
//! aborts the rest of the pass.

use crate::consts::{
    BASE_CRIT_CHANCE, BLEED_ON_CRIT_CHANCE, CRIT_CHANCE_CAP, CRIT_INJURY_MULT, CRIT_WEAR_MULT,
    DAZE_ON_HEAD_CRIT_CHANCE,
};
use crate::entity::{Enemy, Injury, Player};
use crate::hooks::{BestEffort, LogKind};
use crate::rng::Dice;

use super::formulas::CombatFormulas;
use super::hit_location::{HitLocation, HitPart};

/// What an enemy-vs-player swing did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHitOutcome {
    pub blocked: bool,
    pub crit: bool,
    pub damage: f64,
    pub player_died: bool,
}

impl PlayerHitOutcome {
    const BLOCKED: PlayerHitOutcome = PlayerHitOutcome {
        blocked: true,
        crit: false,
        damage: 0.0,
        player_died: false,
    };
}

/// Resolve an adjacent enemy attack on the player.
pub fn enemy_attack_player(
    attacker: &Enemy,
    player: &mut Player,
    fx: &dyn CombatFormulas,
    hooks: &mut BestEffort<'_>,
    rng: &mut dyn Dice,
) -> PlayerHitOutcome {
    let loc = fx.roll_hit_location(rng);

    if rng.next_f64() < fx.player_block_chance(player, &loc) {
        hooks.on_block(&loc);
        hooks.log(
            &format!("You block the {}'s strike.", attacker.kind),
            LogKind::Combat,
        );
        fx.decay_blocking_hands(player, rng);
        return PlayerHitOutcome::BLOCKED;
    }

    let mut raw = attacker.atk * fx.damage_multiplier(attacker.level) * loc.mult;

    let crit_chance = (BASE_CRIT_CHANCE + loc.crit_bonus).clamp(0.0, CRIT_CHANCE_CAP);
    let crit = rng.next_f64() < crit_chance;
    if crit {
        raw *= fx.crit_multiplier(rng);
    }

    let damage = fx.damage_after_defense(player, raw);
    player.hp -= damage;

    hooks.add_blood_decal(player.x, player.y, damage);
    if crit {
        hooks.log(
            &format!("The {} tears into your {}!", attacker.kind, loc.part),
            LogKind::Combat,
        );
    } else {
        hooks.log(
            &format!("The {} hits your {}.", attacker.kind, loc.part),
            LogKind::Combat,
        );
    }

    if crit {
        if loc.part == HitPart::Head && rng.chance(DAZE_ON_HEAD_CRIT_CHANCE) {
            hooks.apply_dazed_to_player(player);
        }
        if rng.chance(BLEED_ON_CRIT_CHANCE) {
            hooks.apply_bleed_to_player(player);
        }
    }

    let (lo, hi) = loc.part.wear_range();
    let mut wear = rng.rand_float(lo, hi);
    if crit {
        wear *= CRIT_WEAR_MULT;
    }
    fx.decay_equipped(player, loc.part.slot(), wear);

    roll_injury(player, &loc, crit, rng, hooks);

    let player_died = player.hp <= 0.0;
    if player_died {
        player.hp = 0.0;
        hooks.on_player_died();
    }

    PlayerHitOutcome {
        blocked: false,
        crit,
        damage,
        player_died,
    }
}

/// Maybe append a cosmetic injury for a hit at this location.
fn roll_injury(
    player: &mut Player,
    loc: &HitLocation,
    crit: bool,
    rng: &mut dyn Dice,
    hooks: &mut BestEffort<'_>,
) {
    let mut odds = loc.part.injury_chance();
    if crit {
        odds *= CRIT_INJURY_MULT;
    }
    if !rng.chance(odds) {
        return;
    }

    let pool = loc.part.injury_pool();
    let (name, healable, duration) = pool[rng.rand_int(0, pool.len() as i32 - 1) as usize];
    let added = player.add_injury(Injury {
        name: name.to_string(),
        healable,
        duration_turns: healable.then_some(duration),
    });
    if added {
        hooks.log(&format!("You suffer a {name}."), LogKind::Flavor);
    }
}
