//! Enemy instances
//!
//! Enemies are owned by the caller; the engine mutates position, hp, and the
//! transient counters in place, and signals death through a hook rather than
//! removing anything from the list.

use serde::{Deserialize, Serialize};

use super::Faction;

/// Unique identifier for enemy instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// A single enemy.
///
/// The transient counters (`panic_turns`, `panic_yell_cd`, `argh_cd`,
/// `immobile_turns`) decrement at most once per turn while active and are
/// managed entirely by the engine; spawners normally leave them at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,

    /// Type id, e.g. "orc_brute" or "mime_ghost".
    pub kind: String,

    pub x: i32,
    pub y: i32,

    /// Explicit faction; derived from `kind` when absent.
    pub faction: Option<Faction>,

    /// May be fractional: enemy-vs-enemy damage is tracked to one decimal.
    pub hp: f64,

    pub atk: f64,
    pub level: i32,

    /// Display glyph, if the spawner assigned one.
    pub glyph: Option<char>,

    /// Turns of panic remaining.
    #[serde(default)]
    pub panic_turns: u8,

    /// Cooldown before the next panic yell may fire.
    #[serde(default)]
    pub panic_yell_cd: u8,

    /// Cooldown on the ghost's flavor line.
    #[serde(default)]
    pub argh_cd: u8,

    /// Turns before this enemy may move again (it may still attack).
    #[serde(default)]
    pub immobile_turns: u16,
}

impl Enemy {
    /// Create an enemy with baseline stats at the given tile.
    pub fn new(id: EnemyId, kind: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id,
            kind: kind.into(),
            x,
            y,
            faction: None,
            hp: 5.0,
            atk: 1.0,
            level: 1,
            glyph: None,
            panic_turns: 0,
            panic_yell_cd: 0,
            argh_cd: 0,
            immobile_turns: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Manhattan distance to a tile.
    pub fn distance_to(&self, x: i32, y: i32) -> i32 {
        (self.x - x).abs() + (self.y - y).abs()
    }

    pub fn is_adjacent_to(&self, x: i32, y: i32) -> bool {
        self.distance_to(x, y) == 1
    }
}
