//! The per-turn enemy pass
//!
//! One call per game tick: build the spatial index and occupancy view, then
//! process enemies in slice order. Mutations (moves, damage) are immediately
//! visible to later actors in the same pass; enemy i's step can block enemy
//! i+1's path this very turn, by design. The only early exit is player
//! death.

mod behavior;
mod movement;
mod occupancy;
mod spatial;
mod target;

pub use occupancy::{OccupancyGrid, TurnOccupancy};
pub use spatial::SpatialBuckets;
pub use target::{Target, TargetKind};

use crate::combat::CombatFormulas;
use crate::entity::{Enemy, Player};
use crate::hooks::{BestEffort, TurnHooks, WorldView};
use crate::rng::Dice;

use behavior::Control;
use occupancy::OccView;

/// Capability bundle for one turn pass.
///
/// Assembled by the driver per call; every member is borrowed, nothing is
/// owned or cached across turns.
pub struct TurnCtx<'a> {
    pub world: &'a dyn WorldView,
    pub formulas: &'a dyn CombatFormulas,
    pub hooks: &'a mut dyn TurnHooks,
    pub rng: &'a mut dyn Dice,
    /// Caller-owned occupancy grid; `None` means the pass builds its own
    /// single-turn set from the enemy list.
    pub occupancy: Option<&'a mut dyn OccupancyGrid>,
}

/// How the pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Every living enemy acted.
    Completed,
    /// The player died mid-pass; remaining enemies did not act.
    PlayerDied,
}

/// Result of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Side-effect hooks that failed and were swallowed.
    pub hook_faults: u32,
}

/// Working state shared by the behavior and movement code for one pass.
pub(crate) struct TurnPass<'a> {
    pub(crate) world: &'a dyn WorldView,
    pub(crate) formulas: &'a dyn CombatFormulas,
    pub(crate) hooks: BestEffort<'a>,
    pub(crate) rng: &'a mut dyn Dice,
    pub(crate) occ: OccView<'a>,
    pub(crate) buckets: SpatialBuckets,
}

/// Run the enemy turn: perception, targeting, movement and melee for every
/// living enemy, in slice order.
pub fn run_enemy_turns(
    ctx: TurnCtx<'_>,
    enemies: &mut [Enemy],
    player: &mut Player,
) -> TurnReport {
    let occ = match ctx.occupancy {
        Some(grid) => OccView::External(grid),
        None => OccView::Local(TurnOccupancy::from_enemies(enemies)),
    };

    let mut pass = TurnPass {
        world: ctx.world,
        formulas: ctx.formulas,
        hooks: BestEffort::new(ctx.hooks),
        rng: ctx.rng,
        occ,
        buckets: SpatialBuckets::build(enemies),
    };

    let mut outcome = TurnOutcome::Completed;
    for i in 0..enemies.len() {
        // Corpses wait for the caller's sweep; they neither act nor block.
        if !enemies[i].is_alive() {
            continue;
        }
        if pass.act_one(enemies, player, i) == Control::Abort {
            outcome = TurnOutcome::PlayerDied;
            break;
        }
    }

    pass.hooks.update_ui();
    TurnReport {
        outcome,
        hook_faults: pass.hooks.faults(),
    }
}

/// Disjoint mutable borrows of two slice elements.
pub(crate) fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = slice.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = slice.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
