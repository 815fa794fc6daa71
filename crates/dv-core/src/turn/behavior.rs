//! Per-enemy behavior for one turn
//!
//! Decision order for each actor: panic upkeep, panic flight, the ghost's
//! avoidance override, idle wandering when nothing qualifies as a target,
//! melee at distance 1, then chase or wander. A blocked panic flight falls
//! through to normal behavior, so a cornered panicking enemy still fights.

use crate::combat::{enemy_attack_enemy, enemy_attack_player};
use crate::consts::{
    GHOST_ARGH_CHANCE, GHOST_ARGH_COOLDOWN, GHOST_STAND_GROUND_CHANCE, MIME_GHOST_KIND,
    PANIC_DURATION, PANIC_HP_THRESHOLD, PANIC_START_CHANCE, PANIC_YELL_CHANCE,
    PANIC_YELL_COOLDOWN, SENSE_RANGE, WANDER_CHANCE,
};
use crate::entity::{Enemy, Player, faction_of};
use crate::hooks::LogKind;

use super::target::select_target;
use super::{TurnPass, pair_mut};

/// Whether the pass keeps going after this actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    Abort,
}

impl TurnPass<'_> {
    /// One enemy's full turn.
    pub(crate) fn act_one(
        &mut self,
        enemies: &mut [Enemy],
        player: &mut Player,
        i: usize,
    ) -> Control {
        self.panic_upkeep(&mut enemies[i]);

        let target = select_target(enemies, i, player, &self.buckets);

        if enemies[i].panic_turns > 0 {
            let (fx, fy) = match target {
                Some(t) => (t.x, t.y),
                None => (player.x, player.y),
            };
            let fled = self.step_away(enemies, i, fx, fy, player);
            enemies[i].panic_turns -= 1;
            if fled {
                return Control::Continue;
            }
        }

        if enemies[i].kind == MIME_GHOST_KIND && self.ghost_override(enemies, i, player) {
            return Control::Continue;
        }

        let Some(target) = target else {
            self.idle_wander(enemies, i, player);
            return Control::Continue;
        };

        let dist = enemies[i].distance_to(target.x, target.y);
        if dist == 1 {
            return match target.enemy_idx {
                None => {
                    let out = enemy_attack_player(
                        &enemies[i],
                        player,
                        self.formulas,
                        &mut self.hooks,
                        &mut *self.rng,
                    );
                    if out.player_died {
                        Control::Abort
                    } else {
                        Control::Continue
                    }
                }
                Some(j) => {
                    let (me, other) = pair_mut(enemies, i, j);
                    let out = enemy_attack_enemy(
                        me,
                        other,
                        self.formulas,
                        &mut self.hooks,
                        &mut *self.rng,
                    );
                    let (ox, oy) = (other.x, other.y);
                    if out.defender_died {
                        // Corpses do not block; free the tile right away.
                        self.occ.vacate(ox, oy);
                    }
                    Control::Continue
                }
            };
        }

        // Rooted enemies skip movement; the counter only ticks here, so an
        // adjacent rooted enemy keeps attacking at full duration.
        if enemies[i].immobile_turns > 0 {
            enemies[i].immobile_turns -= 1;
            return Control::Continue;
        }

        if dist <= SENSE_RANGE {
            self.step_towards(enemies, i, target.x, target.y, player);
        } else {
            self.idle_wander(enemies, i, player);
        }
        Control::Continue
    }

    fn idle_wander(&mut self, enemies: &mut [Enemy], actor: usize, player: &Player) {
        if self.rng.chance(WANDER_CHANCE) {
            self.random_step(enemies, actor, player);
        }
    }

    /// Panic trigger and yell bookkeeping, before the actor does anything.
    fn panic_upkeep(&mut self, e: &mut Enemy) {
        if e.hp <= PANIC_HP_THRESHOLD && e.panic_turns == 0 && self.rng.chance(PANIC_START_CHANCE)
        {
            e.panic_turns = PANIC_DURATION;
        }
        if e.panic_turns == 0 {
            return;
        }
        if e.panic_yell_cd > 0 {
            e.panic_yell_cd -= 1;
        } else if self.rng.chance(PANIC_YELL_CHANCE) {
            // Animals panic silently; the cooldown still resets so the roll
            // cadence matches other factions.
            if !faction_of(e).is_animal() {
                self.hooks.log(
                    &format!("The {} screams in terror!", e.kind),
                    LogKind::Flavor,
                );
            }
            e.panic_yell_cd = PANIC_YELL_COOLDOWN;
        }
    }

    /// The mime ghost's player-avoidance. Returns true when the override
    /// consumed the turn.
    fn ghost_override(&mut self, enemies: &mut [Enemy], i: usize, player: &Player) -> bool {
        if enemies[i].argh_cd > 0 {
            enemies[i].argh_cd -= 1;
        } else if self.rng.chance(GHOST_ARGH_CHANCE) {
            let line = format!("The {} mouths a silent \"argh\".", enemies[i].kind);
            self.hooks.log(&line, LogKind::Flavor);
            enemies[i].argh_cd = GHOST_ARGH_COOLDOWN;
        }

        let (ex, ey) = (enemies[i].x, enemies[i].y);
        let dist = enemies[i].distance_to(player.x, player.y);
        if dist == 1 {
            // Cornered at melee range it sometimes holds and fights.
            if self.rng.chance(GHOST_STAND_GROUND_CHANCE) {
                return false;
            }
            return self.step_away(enemies, i, player.x, player.y, player);
        }
        if dist <= SENSE_RANGE && self.world.has_los(ex, ey, player.x, player.y) {
            return self.step_away(enemies, i, player.x, player.y, player);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DefaultFormulas;
    use crate::consts::{GHOST_ARGH_COOLDOWN, PANIC_DURATION, PANIC_YELL_COOLDOWN};
    use crate::entity::{EnemyId, Faction};
    use crate::hooks::BestEffort;
    use crate::testutil::{GridWorld, RecordingHooks, ScriptedDice};
    use crate::turn::occupancy::{OccView, TurnOccupancy};
    use crate::turn::spatial::SpatialBuckets;

    fn pass<'a>(
        world: &'a GridWorld,
        rng: &'a mut dyn crate::rng::Dice,
        hooks: &'a mut dyn crate::hooks::TurnHooks,
        enemies: &[Enemy],
    ) -> TurnPass<'a> {
        TurnPass {
            world,
            formulas: &DefaultFormulas,
            hooks: BestEffort::new(hooks),
            rng,
            occ: OccView::Local(TurnOccupancy::from_enemies(enemies)),
            buckets: SpatialBuckets::build(enemies),
        }
    }

    fn wounded(id: u32, kind: &str, x: i32, y: i32) -> Enemy {
        let mut e = Enemy::new(EnemyId(id), kind, x, y);
        e.hp = 2.0;
        e
    }

    #[test]
    fn test_panic_triggers_and_flees() {
        let world = GridWorld::open(10, 10);
        // trigger 0.0 < 0.20, yell 0.99 suppressed, no further rolls.
        let mut rng = ScriptedDice::with_fill(vec![0.0, 0.99], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(5, 5, 100.0);
        let mut enemies = vec![wounded(1, "bandit_scout", 4, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        let c = p.act_one(&mut enemies, &mut player, 0);

        assert_eq!(c, Control::Continue);
        assert_eq!(enemies[0].panic_turns, PANIC_DURATION - 1);
        assert_eq!((enemies[0].x, enemies[0].y), (3, 5));
        assert_eq!(player.hp, 100.0, "fleeing takes the whole turn");
    }

    #[test]
    fn test_cornered_panic_still_attacks() {
        // One open tile, and it is the player's: flight must fail.
        let world = GridWorld::corridor(2);
        let mut rng = ScriptedDice::with_fill(vec![0.0, 0.99], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(1, 0, 100.0);
        let mut enemies = vec![wounded(1, "bandit_scout", 0, 0)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        assert_eq!(enemies[0].panic_turns, PANIC_DURATION - 1);
        assert_eq!((enemies[0].x, enemies[0].y), (0, 0));
        assert!(player.hp < 100.0, "blocked flight falls through to melee");
    }

    #[test]
    fn test_panic_yell_logs_and_arms_cooldown() {
        let world = GridWorld::open(10, 10);
        // trigger 0.0, yell 0.0 < 0.35.
        let mut rng = ScriptedDice::with_fill(vec![0.0, 0.0], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(5, 5, 100.0);
        let mut enemies = vec![wounded(1, "bandit_scout", 4, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        assert!(
            hooks
                .logs
                .iter()
                .any(|(m, k)| m.contains("screams in terror") && *k == LogKind::Flavor)
        );
        assert_eq!(enemies[0].panic_yell_cd, PANIC_YELL_COOLDOWN);
    }

    #[test]
    fn test_animal_panic_is_silent() {
        let world = GridWorld::open(10, 10);
        let mut rng = ScriptedDice::with_fill(vec![0.0, 0.0], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(5, 5, 100.0);
        let mut wolf = wounded(1, "wolf", 4, 5);
        wolf.faction = Some(Faction::AnimalHostile);
        let mut enemies = vec![wolf];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        assert!(hooks.logs.is_empty(), "no yell line for animals");
        assert_eq!(
            enemies[0].panic_yell_cd,
            PANIC_YELL_COOLDOWN,
            "cooldown still resets"
        );
    }

    #[test]
    fn test_ghost_avoids_player_in_sense_range() {
        let world = GridWorld::open(12, 12);
        // argh 0.99 suppressed; retreat needs no roll.
        let mut rng = ScriptedDice::constant(0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(8, 5, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 5, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        let c = p.act_one(&mut enemies, &mut player, 0);

        assert_eq!(c, Control::Continue);
        assert_eq!((enemies[0].x, enemies[0].y), (4, 5));
    }

    #[test]
    fn test_ghost_ignores_player_without_los() {
        let mut world = GridWorld::open(12, 12);
        world.block_los();
        let mut rng = ScriptedDice::constant(0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(8, 5, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 5, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        // No retreat; the ghost chases like anything else.
        assert_eq!((enemies[0].x, enemies[0].y), (6, 5));
    }

    #[test]
    fn test_ghost_stands_ground_at_melee_and_attacks() {
        let world = GridWorld::open(12, 12);
        // argh 0.99, stand-ground 0.0 < 0.35, then plain attack rolls.
        let mut rng = ScriptedDice::with_fill(vec![0.99, 0.0], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(5, 5, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 4, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        assert_eq!((enemies[0].x, enemies[0].y), (4, 5));
        assert!(player.hp < 100.0);
    }

    #[test]
    fn test_ghost_retreats_from_melee_when_nerve_fails() {
        let world = GridWorld::open(12, 12);
        // argh 0.99, stand-ground 0.99.
        let mut rng = ScriptedDice::constant(0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(5, 5, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 4, 5)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        p.act_one(&mut enemies, &mut player, 0);

        assert_eq!((enemies[0].x, enemies[0].y), (3, 5));
        assert_eq!(player.hp, 100.0);
    }

    #[test]
    fn test_ghost_argh_line_and_cooldown() {
        let world = GridWorld::open(12, 12);
        // argh 0.0 < 0.15, then retreat.
        let mut rng = ScriptedDice::with_fill(vec![0.0], 0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(8, 5, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 5, 5)];

        {
            let mut p = pass(&world, &mut rng, &mut hooks, &enemies);
            p.act_one(&mut enemies, &mut player, 0);
        }
        assert!(
            hooks
                .logs
                .iter()
                .any(|(m, k)| m.contains("argh") && *k == LogKind::Flavor)
        );
        assert_eq!(enemies[0].argh_cd, GHOST_ARGH_COOLDOWN);

        // While cooling down the roll is skipped and the counter ticks.
        let mut rng = ScriptedDice::constant(0.99);
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);
        p.act_one(&mut enemies, &mut player, 0);
        assert_eq!(enemies[0].argh_cd, GHOST_ARGH_COOLDOWN - 1);
    }

    #[test]
    fn test_boxed_ghost_does_nothing() {
        let mut world = GridWorld::open(5, 5);
        for (x, y) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            world.wall(x, y);
        }
        let mut rng = ScriptedDice::constant(0.99);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(3, 1, 100.0);
        let mut enemies = vec![Enemy::new(EnemyId(1), "mime_ghost", 1, 1)];
        let mut p = pass(&world, &mut rng, &mut hooks, &enemies);

        let c = p.act_one(&mut enemies, &mut player, 0);

        assert_eq!(c, Control::Continue);
        assert_eq!((enemies[0].x, enemies[0].y), (1, 1));
        assert_eq!(player.hp, 100.0);
    }

    #[test]
    fn test_panic_duration_never_exceeds_cap() {
        let world = GridWorld::open(20, 20);
        let mut rng = crate::rng::GameRng::new(42);
        let mut hooks = RecordingHooks::default();
        let mut player = Player::new(10, 10, 1000.0);
        let mut enemies = vec![wounded(1, "bandit_scout", 8, 10)];

        for _ in 0..50 {
            let mut p = pass(&world, &mut rng, &mut hooks, &enemies);
            p.act_one(&mut enemies, &mut player, 0);
            assert!(enemies[0].panic_turns <= PANIC_DURATION);
        }
    }
}
