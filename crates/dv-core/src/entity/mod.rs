//! Entity records: enemies, the player, and faction resolution.

mod enemy;
mod faction;
mod player;

pub use enemy::{Enemy, EnemyId};
pub use faction::{Faction, faction_of};
pub use player::{EquipSlot, Equipment, Injury, Player, WornItem};
