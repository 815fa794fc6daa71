//! Combat resolution
//!
//! Adjacent melee only: enemy-vs-player and enemy-vs-enemy. Balance curves
//! (hit location table, block chances, defense reduction, level scaling) are
//! injected through [`CombatFormulas`]; the resolution sequence itself is
//! fixed here.

mod enemy_vs_enemy;
mod enemy_vs_player;
mod formulas;
mod hit_location;

pub use enemy_vs_enemy::{EnemyHitOutcome, enemy_attack_enemy};
pub use enemy_vs_player::{PlayerHitOutcome, enemy_attack_player};
pub use formulas::{CombatFormulas, DefaultFormulas};
pub use hit_location::{HitLocation, HitPart};
