//! The player as the combat engine sees it
//!
//! Position, hp, worn equipment and the cosmetic injury list. Inventory is
//! carried for the caller's benefit and never touched here.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::INJURY_CAP;

/// Equipment slot struck by melee attacks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EquipSlot {
    Head,
    Torso,
    Legs,
    Hands,
}

/// A worn item with remaining durability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WornItem {
    pub name: String,
    pub durability: f64,
}

/// Per-slot worn equipment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub head: Option<WornItem>,
    pub torso: Option<WornItem>,
    pub legs: Option<WornItem>,
    pub hands: Option<WornItem>,
}

impl Equipment {
    pub fn slot(&self, slot: EquipSlot) -> Option<&WornItem> {
        match slot {
            EquipSlot::Head => self.head.as_ref(),
            EquipSlot::Torso => self.torso.as_ref(),
            EquipSlot::Legs => self.legs.as_ref(),
            EquipSlot::Hands => self.hands.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: EquipSlot) -> Option<&mut WornItem> {
        match slot {
            EquipSlot::Head => self.head.as_mut(),
            EquipSlot::Torso => self.torso.as_mut(),
            EquipSlot::Legs => self.legs.as_mut(),
            EquipSlot::Hands => self.hands.as_mut(),
        }
    }

    /// Wear down whatever is worn in `slot`. Durability bottoms out at zero;
    /// breaking and unequipping are the caller's business.
    pub fn decay(&mut self, slot: EquipSlot, amount: f64) {
        if let Some(item) = self.slot_mut(slot) {
            item.durability = (item.durability - amount).max(0.0);
        }
    }
}

/// A cosmetic injury. Healable injuries carry a duration in turns; permanent
/// ones do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub name: String,
    pub healable: bool,
    pub duration_turns: Option<u16>,
}

/// Player state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,

    /// Floored at zero after every pass; never negative.
    pub hp: f64,
    pub max_hp: f64,

    pub equipment: Equipment,

    /// Item ids; opaque to this engine.
    #[serde(default)]
    pub inventory: Vec<String>,

    /// Append-only within a turn; capped at [`INJURY_CAP`], oldest first out.
    #[serde(default)]
    pub injuries: Vec<Injury>,
}

impl Player {
    pub fn new(x: i32, y: i32, hp: f64) -> Self {
        Self {
            x,
            y,
            hp,
            max_hp: hp,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            injuries: Vec::new(),
        }
    }

    /// Append an injury, deduplicated by name and capped; returns whether it
    /// was actually added.
    pub fn add_injury(&mut self, injury: Injury) -> bool {
        if self.injuries.iter().any(|i| i.name == injury.name) {
            return false;
        }
        if self.injuries.len() >= INJURY_CAP {
            self.injuries.remove(0);
        }
        self.injuries.push(injury);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn injury(name: &str) -> Injury {
        Injury {
            name: name.to_string(),
            healable: true,
            duration_turns: Some(20),
        }
    }

    #[test]
    fn test_injury_dedup() {
        let mut p = Player::new(0, 0, 20.0);
        assert!(p.add_injury(injury("sprained wrist")));
        assert!(!p.add_injury(injury("sprained wrist")));
        assert_eq!(p.injuries.len(), 1);
    }

    #[test]
    fn test_injury_cap_trims_oldest() {
        let mut p = Player::new(0, 0, 20.0);
        for i in 0..30 {
            p.add_injury(injury(&format!("wound {i}")));
        }
        assert_eq!(p.injuries.len(), INJURY_CAP);
        assert_eq!(p.injuries[0].name, "wound 6");
        assert_eq!(p.injuries.last().unwrap().name, "wound 29");
    }

    #[test]
    fn test_equipment_decay_floors_at_zero() {
        let mut p = Player::new(0, 0, 20.0);
        p.equipment.torso = Some(WornItem {
            name: "leather jerkin".to_string(),
            durability: 1.5,
        });
        p.equipment.decay(EquipSlot::Torso, 1.0);
        assert_eq!(p.equipment.slot(EquipSlot::Torso).unwrap().durability, 0.5);
        p.equipment.decay(EquipSlot::Torso, 5.0);
        assert_eq!(p.equipment.slot(EquipSlot::Torso).unwrap().durability, 0.0);
    }

    #[test]
    fn test_decay_empty_slot_is_noop() {
        let mut p = Player::new(0, 0, 20.0);
        p.equipment.decay(EquipSlot::Head, 1.0);
        assert!(p.equipment.slot(EquipSlot::Head).is_none());
    }

    proptest! {
        #[test]
        fn prop_injury_list_never_exceeds_cap(names in proptest::collection::vec("[a-z]{1,8}", 0..64)) {
            let mut p = Player::new(0, 0, 20.0);
            for name in &names {
                p.add_injury(injury(name));
            }
            prop_assert!(p.injuries.len() <= INJURY_CAP);

            // No duplicate names, ever.
            let mut seen = std::collections::HashSet::new();
            for i in &p.injuries {
                prop_assert!(seen.insert(i.name.clone()));
            }
        }
    }
}
