//! Movement resolution
//!
//! A step attempt tries a short ordered candidate list: the primary axis
//! (whichever has the larger absolute delta), the perpendicular axis, then
//! the four cardinal alternates, committing to the first free tile. No wider
//! search. Commits update the occupancy view immediately so later actors in
//! the same pass see the new position.

use crate::entity::{Enemy, Player};

use super::TurnPass;

pub(crate) const CARDINALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl TurnPass<'_> {
    /// A tile is free when it is in bounds, walkable, not the player's tile,
    /// and not enemy-occupied.
    pub(crate) fn is_free(&self, x: i32, y: i32, player: &Player) -> bool {
        self.world.in_bounds(x, y)
            && self.world.is_walkable(x, y)
            && !(x == player.x && y == player.y)
            && !self.occ.occupied(x, y)
    }

    /// Try a single step; commits and returns true when the tile is free.
    pub(crate) fn try_step(
        &mut self,
        enemies: &mut [Enemy],
        actor: usize,
        dx: i32,
        dy: i32,
        player: &Player,
    ) -> bool {
        if dx == 0 && dy == 0 {
            return false;
        }
        let (nx, ny) = (enemies[actor].x + dx, enemies[actor].y + dy);
        if !self.is_free(nx, ny, player) {
            return false;
        }
        let e = &mut enemies[actor];
        self.occ.vacate(e.x, e.y);
        self.occ.occupy(nx, ny);
        e.x = nx;
        e.y = ny;
        true
    }

    /// One step toward `(tx, ty)`, primary-axis-first with alternates.
    pub(crate) fn step_towards(
        &mut self,
        enemies: &mut [Enemy],
        actor: usize,
        tx: i32,
        ty: i32,
        player: &Player,
    ) -> bool {
        let (dx, dy) = (tx - enemies[actor].x, ty - enemies[actor].y);
        self.step_along(enemies, actor, dx, dy, player)
    }

    /// One step away from `(tx, ty)`: the same heuristic on inverted deltas.
    pub(crate) fn step_away(
        &mut self,
        enemies: &mut [Enemy],
        actor: usize,
        tx: i32,
        ty: i32,
        player: &Player,
    ) -> bool {
        let (dx, dy) = (enemies[actor].x - tx, enemies[actor].y - ty);
        self.step_along(enemies, actor, dx, dy, player)
    }

    fn step_along(
        &mut self,
        enemies: &mut [Enemy],
        actor: usize,
        dx: i32,
        dy: i32,
        player: &Player,
    ) -> bool {
        let (sx, sy) = (dx.signum(), dy.signum());

        let mut candidates: [(i32, i32); 6] = [(0, 0); 6];
        let (first, second) = if dx.abs() >= dy.abs() {
            ((sx, 0), (0, sy))
        } else {
            ((0, sy), (sx, 0))
        };
        candidates[0] = first;
        candidates[1] = second;
        candidates[2..].copy_from_slice(&CARDINALS);

        for (cdx, cdy) in candidates {
            if self.try_step(enemies, actor, cdx, cdy, player) {
                return true;
            }
        }
        false
    }

    /// One uniformly random cardinal step, if the destination is free.
    pub(crate) fn random_step(
        &mut self,
        enemies: &mut [Enemy],
        actor: usize,
        player: &Player,
    ) -> bool {
        let (dx, dy) = CARDINALS[self.rng.rand_int(0, 3) as usize];
        self.try_step(enemies, actor, dx, dy, player)
    }
}
