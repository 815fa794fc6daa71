//! Target selection
//!
//! Each acting enemy weighs two candidates: the player (unless its faction
//! ignores the player) and the nearest hostile enemy from the bucket index.
//! The nearer candidate wins; ties keep the player. The descriptor is
//! ephemeral, rebuilt per actor per turn.

use serde::{Deserialize, Serialize};

use crate::entity::{Enemy, Player, faction_of};

use super::spatial::SpatialBuckets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Player,
    Enemy,
}

/// Ephemeral target descriptor for one actor's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    pub x: i32,
    pub y: i32,
    /// Index into the enemy slice when `kind` is `Enemy`.
    pub enemy_idx: Option<usize>,
}

/// Choose the target for `actor`, or `None` when nothing qualifies (passive
/// animals with no hostile in reach fall through to wandering).
pub(crate) fn select_target(
    enemies: &[Enemy],
    actor: usize,
    player: &Player,
    buckets: &SpatialBuckets,
) -> Option<Target> {
    let me = &enemies[actor];

    let mut best: Option<Target> = None;
    let mut best_dist = i32::MAX;

    if !faction_of(me).ignores_player() {
        best_dist = me.distance_to(player.x, player.y);
        best = Some(Target {
            kind: TargetKind::Player,
            x: player.x,
            y: player.y,
            enemy_idx: None,
        });
    }

    if let Some((idx, dist)) = buckets.nearest_hostile(enemies, actor) {
        // Strictly nearer only: the player wins ties.
        if dist < best_dist {
            let other = &enemies[idx];
            best = Some(Target {
                kind: TargetKind::Enemy,
                x: other.x,
                y: other.y,
                enemy_idx: Some(idx),
            });
        }
    }

    best
}
