//! Balance curves injected into combat resolution
//!
//! Every method has a sane default so the engine runs stand-alone; a real
//! game overrides the block chances and defense reduction with its own
//! equipment math.

use crate::entity::{Enemy, EquipSlot, Player};
use crate::rng::Dice;

use super::hit_location::{self, HitLocation, HitPart};

/// Combat balance capability.
pub trait CombatFormulas {
    /// Roll which body part a melee hit strikes.
    fn roll_hit_location(&self, rng: &mut dyn Dice) -> HitLocation {
        hit_location::default_roll(rng)
    }

    /// Damage multiplier applied on a critical hit.
    fn crit_multiplier(&self, rng: &mut dyn Dice) -> f64 {
        1.6 + rng.next_f64() * 0.4
    }

    /// Chance the player blocks a hit at this location.
    fn player_block_chance(&self, _player: &Player, _loc: &HitLocation) -> f64 {
        0.0
    }

    /// Chance a defending enemy blocks a hit at this location.
    fn enemy_block_chance(&self, _enemy: &Enemy, _loc: &HitLocation) -> f64 {
        0.0
    }

    /// Apply player defense/armor to a raw damage roll.
    fn damage_after_defense(&self, _player: &Player, raw: f64) -> f64 {
        raw
    }

    /// Attacker level scaling; must be non-decreasing in level.
    fn damage_multiplier(&self, level: i32) -> f64 {
        1.0 + 0.15 * (level - 1).max(0) as f64
    }

    /// Wear on whatever the player blocked with.
    fn decay_blocking_hands(&self, player: &mut Player, rng: &mut dyn Dice) {
        let (lo, hi) = HitPart::Hands.wear_range();
        let amount = rng.rand_float(lo, hi);
        self.decay_equipped(player, EquipSlot::Hands, amount);
    }

    /// Wear on the equipment covering the struck slot.
    fn decay_equipped(&self, player: &mut Player, slot: EquipSlot, amount: f64) {
        player.equipment.decay(slot, amount);
    }
}

/// The built-in curves, unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormulas;

impl CombatFormulas for DefaultFormulas {}
