//! Engine tuning constants
//!
//! Balance curves that callers are expected to override live on
//! [`crate::combat::CombatFormulas`]; everything here is part of the engine's
//! fixed behavior.

/// Maximum Manhattan distance at which an enemy actively chases a target.
pub const SENSE_RANGE: i32 = 8;

/// Spatial bucket cell size in tiles.
pub const BUCKET_CELL: i32 = 6;

/// Outermost bucket ring scanned before falling back to a full scan.
pub const MAX_SEARCH_RING: i32 = 2;

/// HP at or below which an enemy may start panicking.
pub const PANIC_HP_THRESHOLD: f64 = 2.0;

/// Per-turn chance to enter panic once at the HP threshold.
pub const PANIC_START_CHANCE: f64 = 0.20;

/// Turns a panic window lasts.
pub const PANIC_DURATION: u8 = 3;

/// Chance of a panic yell once the yell cooldown has expired.
pub const PANIC_YELL_CHANCE: f64 = 0.35;

/// Yell cooldown reset value.
pub const PANIC_YELL_COOLDOWN: u8 = 6;

/// Kind id of the ghost that avoids melee range.
pub const MIME_GHOST_KIND: &str = "mime_ghost";

/// Per-turn chance of the ghost's flavor line once off cooldown.
pub const GHOST_ARGH_CHANCE: f64 = 0.15;

/// Flavor line cooldown reset value.
pub const GHOST_ARGH_COOLDOWN: u8 = 8;

/// Chance a cornered ghost stands its ground instead of slipping away.
pub const GHOST_STAND_GROUND_CHANCE: f64 = 0.35;

/// Chance of taking a random step when idle or out of sense range.
pub const WANDER_CHANCE: f64 = 0.40;

/// Crit chance before the hit location's bonus is added.
pub const BASE_CRIT_CHANCE: f64 = 0.10;

/// Upper bound on crit chance after location bonuses.
pub const CRIT_CHANCE_CAP: f64 = 0.50;

/// Equipment wear multiplier on a critical hit.
pub const CRIT_WEAR_MULT: f64 = 1.6;

/// Injury odds multiplier on a critical hit.
pub const CRIT_INJURY_MULT: f64 = 2.0;

/// Chance a critical head hit leaves the player dazed.
pub const DAZE_ON_HEAD_CRIT_CHANCE: f64 = 0.5;

/// Chance any critical hit starts a bleed.
pub const BLEED_ON_CRIT_CHANCE: f64 = 0.35;

/// Minimum damage an enemy-vs-enemy hit deals after rounding.
pub const ENEMY_MIN_DAMAGE: f64 = 0.1;

/// Hard cap on the player's injury list; oldest entries are trimmed first.
pub const INJURY_CAP: usize = 24;
