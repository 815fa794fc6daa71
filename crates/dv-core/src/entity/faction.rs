//! Factions and the hostility predicate
//!
//! A faction is purely a label used to decide whether two actors fight; it is
//! not an organizational entity. Hostility is symmetric, irreflexive, and
//! always false for neutrals.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Enemy;

/// Faction label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Faction {
    Bandit,
    Orc,
    /// Default for anything whose kind matches no known label.
    Monster,
    /// Passive; never hostile to anyone and never targets the player.
    Neutral,
    /// Fights other factions but ignores the player.
    Animal,
    AnimalHostile,
}

impl Faction {
    /// Derive a faction from an enemy kind id, case-insensitive substring
    /// match. Anything unrecognized is a plain monster.
    pub fn from_kind(kind: &str) -> Self {
        let kind = kind.to_ascii_lowercase();
        if kind.contains("bandit") {
            Faction::Bandit
        } else if kind.contains("orc") {
            Faction::Orc
        } else {
            Faction::Monster
        }
    }

    /// Whether two factions fight each other.
    pub fn is_hostile_to(self, other: Faction) -> bool {
        if self == Faction::Neutral || other == Faction::Neutral {
            return false;
        }
        self != other
    }

    /// Animal-family factions keep quiet (no panic yells).
    pub fn is_animal(self) -> bool {
        matches!(self, Faction::Animal | Faction::AnimalHostile)
    }

    /// Factions that never pick the player as a target.
    pub(crate) fn ignores_player(self) -> bool {
        matches!(self, Faction::Animal | Faction::Neutral)
    }
}

/// Effective faction of an enemy: the explicit field when set, otherwise
/// derived from its kind.
pub fn faction_of(enemy: &Enemy) -> Faction {
    enemy
        .faction
        .unwrap_or_else(|| Faction::from_kind(&enemy.kind))
}
