//! Per-turn enemy occupancy
//!
//! Tracks which tiles hold an enemy so two enemies never stack. The caller
//! may own a persistent grid (implement [`OccupancyGrid`]); otherwise the
//! pass builds a single-turn fallback set from the live enemy list. The
//! player's tile is not tracked here; the movement resolver checks it
//! separately.

use hashbrown::HashSet;

use crate::entity::Enemy;

/// Pack a tile coordinate into a single set key. Valid for maps up to
/// 65535 tiles per axis.
#[inline]
pub(crate) fn pack_key(x: i32, y: i32) -> u32 {
    (((y as u32) & 0xffff) << 16) | ((x as u32) & 0xffff)
}

/// Enemy occupancy capability.
///
/// The engine reads it for movement checks and updates it incrementally
/// (vacate on move-out, occupy on move-in), leaving it consistent with final
/// enemy positions when the pass returns.
pub trait OccupancyGrid {
    fn occupied(&self, x: i32, y: i32) -> bool;
    fn occupy(&mut self, x: i32, y: i32);
    fn vacate(&mut self, x: i32, y: i32);
}

/// Self-built single-turn occupancy set.
#[derive(Debug, Default, Clone)]
pub struct TurnOccupancy {
    tiles: HashSet<u32>,
}

impl TurnOccupancy {
    /// Seed from the current positions of all living enemies.
    pub fn from_enemies(enemies: &[Enemy]) -> Self {
        let mut tiles = HashSet::with_capacity(enemies.len());
        for e in enemies.iter().filter(|e| e.is_alive()) {
            tiles.insert(pack_key(e.x, e.y));
        }
        Self { tiles }
    }
}

impl OccupancyGrid for TurnOccupancy {
    fn occupied(&self, x: i32, y: i32) -> bool {
        self.tiles.contains(&pack_key(x, y))
    }

    fn occupy(&mut self, x: i32, y: i32) {
        self.tiles.insert(pack_key(x, y));
    }

    fn vacate(&mut self, x: i32, y: i32) {
        self.tiles.remove(&pack_key(x, y));
    }
}

/// Either the caller's grid or the per-turn fallback.
pub(crate) enum OccView<'a> {
    External(&'a mut dyn OccupancyGrid),
    Local(TurnOccupancy),
}

impl OccView<'_> {
    pub(crate) fn occupied(&self, x: i32, y: i32) -> bool {
        match self {
            OccView::External(grid) => grid.occupied(x, y),
            OccView::Local(set) => set.occupied(x, y),
        }
    }

    pub(crate) fn occupy(&mut self, x: i32, y: i32) {
        match self {
            OccView::External(grid) => grid.occupy(x, y),
            OccView::Local(set) => set.occupy(x, y),
        }
    }

    pub(crate) fn vacate(&mut self, x: i32, y: i32) {
        match self {
            OccView::External(grid) => grid.vacate(x, y),
            OccView::Local(set) => set.vacate(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EnemyId;

    #[test]
    fn test_pack_key_distinguishes_axes() {
        assert_ne!(pack_key(1, 0), pack_key(0, 1));
        assert_eq!(pack_key(3, 7), pack_key(3, 7));
        // Masked to 16 bits per axis.
        assert_eq!(pack_key(0x1_0005, 2), pack_key(5, 2));
    }

    #[test]
    fn test_from_enemies_skips_corpses() {
        let mut a = Enemy::new(EnemyId(1), "rat", 2, 2);
        let mut b = Enemy::new(EnemyId(2), "rat", 3, 2);
        a.hp = 4.0;
        b.hp = 0.0;
        let occ = TurnOccupancy::from_enemies(&[a, b]);
        assert!(occ.occupied(2, 2));
        assert!(!occ.occupied(3, 2));
    }

    #[test]
    fn test_occupy_vacate_round_trip() {
        let mut occ = TurnOccupancy::default();
        assert!(!occ.occupied(10, 20));
        occ.occupy(10, 20);
        assert!(occ.occupied(10, 20));
        occ.vacate(10, 20);
        assert!(!occ.occupied(10, 20));
    }
}
