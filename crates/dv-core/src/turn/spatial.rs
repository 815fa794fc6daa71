//! Spatial bucket index
//!
//! Partitions the enemy list into fixed-size grid cells once per turn so the
//! common nearest-hostile query avoids an O(n²) scan. The expanding ring
//! search stops on the first ring containing any hostile, which is not
//! guaranteed to be the global nearest once a ring has a hit; that
//! approximation is deliberate and kept. Rings 0..=2 exhausted without a
//! candidate fall back to a full scan.

use hashbrown::HashMap;

use crate::consts::{BUCKET_CELL, MAX_SEARCH_RING};
use crate::entity::{Enemy, faction_of};

/// Per-turn snapshot of enemy positions, bucketed by cell.
///
/// Stale after any enemy moves; only read before the mover's own step, which
/// is consistent with this-turn's-snapshot semantics.
pub struct SpatialBuckets {
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialBuckets {
    fn cell_of(x: i32, y: i32) -> (i32, i32) {
        (x.div_euclid(BUCKET_CELL), y.div_euclid(BUCKET_CELL))
    }

    /// Build the index from the full enemy slice.
    pub fn build(enemies: &[Enemy]) -> Self {
        let mut cells: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (idx, e) in enemies.iter().enumerate() {
            if e.is_alive() {
                cells.entry(Self::cell_of(e.x, e.y)).or_default().push(idx);
            }
        }
        Self { cells }
    }

    /// Nearest living enemy hostile to `actor`, with its Manhattan distance.
    pub fn nearest_hostile(&self, enemies: &[Enemy], actor: usize) -> Option<(usize, i32)> {
        let me = &enemies[actor];
        let my_faction = faction_of(me);
        let (cx, cy) = Self::cell_of(me.x, me.y);

        let mut best: Option<(usize, i32)> = None;
        let consider = |idx: usize, best: &mut Option<(usize, i32)>| {
            if idx == actor {
                return;
            }
            let other = &enemies[idx];
            if !other.is_alive() || !my_faction.is_hostile_to(faction_of(other)) {
                return;
            }
            let dist = me.distance_to(other.x, other.y);
            if best.is_none_or(|(_, d)| dist < d) {
                *best = Some((idx, dist));
            }
        };

        for ring in 0..=MAX_SEARCH_RING {
            for dy in -ring..=ring {
                for dx in -ring..=ring {
                    // Interior cells were scanned by the previous ring.
                    if ring > 0 && dx.abs() != ring && dy.abs() != ring {
                        continue;
                    }
                    if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) {
                        for &idx in bucket {
                            consider(idx, &mut best);
                        }
                    }
                }
            }
            if best.is_some() {
                return best;
            }
        }

        // No hit within the ring budget: exhaustive scan for correctness.
        for idx in 0..enemies.len() {
            consider(idx, &mut best);
        }
        best
    }
}
