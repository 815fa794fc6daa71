//! Hit locations
//!
//! Each melee hit strikes a body part carrying a damage multiplier and a
//! crit-chance bonus. The same part decides which equipment slot wears down
//! and which cosmetic injuries are on the table.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::entity::EquipSlot;
use crate::rng::Dice;

/// Body part struck by an attack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HitPart {
    Head,
    Torso,
    Legs,
    Hands,
}

impl HitPart {
    /// Equipment slot covering this part.
    pub fn slot(self) -> EquipSlot {
        match self {
            HitPart::Head => EquipSlot::Head,
            HitPart::Torso => EquipSlot::Torso,
            HitPart::Legs => EquipSlot::Legs,
            HitPart::Hands => EquipSlot::Hands,
        }
    }

    /// Uniform equipment wear range for a hit on this part.
    pub(crate) fn wear_range(self) -> (f64, f64) {
        match self {
            HitPart::Head => (0.3, 1.0),
            HitPart::Torso => (0.8, 2.0),
            HitPart::Legs => (0.4, 1.3),
            HitPart::Hands => (0.3, 1.0),
        }
    }

    /// Base odds of a cosmetic injury on a non-crit hit.
    pub(crate) fn injury_chance(self) -> f64 {
        match self {
            HitPart::Head => 0.10,
            HitPart::Torso => 0.06,
            HitPart::Legs => 0.08,
            HitPart::Hands => 0.08,
        }
    }

    /// Candidate injuries: (name, healable, duration when healable).
    pub(crate) fn injury_pool(self) -> &'static [(&'static str, bool, u16)] {
        match self {
            HitPart::Head => &[("concussion", true, 40), ("notched ear", false, 0)],
            HitPart::Torso => &[("bruised ribs", true, 30), ("cracked rib", true, 60)],
            HitPart::Legs => &[("twisted ankle", true, 25), ("gashed thigh", true, 35)],
            HitPart::Hands => &[("sprained wrist", true, 25), ("broken finger", false, 0)],
        }
    }
}

/// Result of a hit location roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitLocation {
    pub part: HitPart,
    /// Damage multiplier for this part.
    pub mult: f64,
    /// Added to the base crit chance.
    pub crit_bonus: f64,
}

impl HitLocation {
    pub fn new(part: HitPart, mult: f64, crit_bonus: f64) -> Self {
        Self {
            part,
            mult,
            crit_bonus,
        }
    }
}

/// Default location table: torso-heavy, head hits rarer but harder.
pub(crate) fn default_roll(rng: &mut dyn Dice) -> HitLocation {
    let r = rng.next_f64();
    if r < 0.50 {
        HitLocation::new(HitPart::Torso, 1.0, 0.05)
    } else if r < 0.65 {
        HitLocation::new(HitPart::Head, 1.5, 0.15)
    } else if r < 0.85 {
        HitLocation::new(HitPart::Legs, 0.9, 0.03)
    } else {
        HitLocation::new(HitPart::Hands, 0.8, 0.03)
    }
}
