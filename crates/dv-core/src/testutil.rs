//! Shared test fixtures: a scriptable dice, a tiny tile world and a
//! recording hook bundle.

use hashbrown::HashSet;

use crate::entity::{Enemy, EnemyId, Player};
use crate::hooks::{HookError, HookResult, LogKind, TurnHooks, WorldView};
use crate::rng::Dice;

/// Dice returning a scripted prefix, then a fill value forever.
pub(crate) struct ScriptedDice {
    values: Vec<f64>,
    next: usize,
    fill: f64,
}

impl ScriptedDice {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self::with_fill(values, 0.5)
    }

    pub(crate) fn constant(value: f64) -> Self {
        Self::with_fill(Vec::new(), value)
    }

    pub(crate) fn with_fill(values: Vec<f64>, fill: f64) -> Self {
        Self {
            values,
            next: 0,
            fill,
        }
    }
}

impl Dice for ScriptedDice {
    fn next_f64(&mut self) -> f64 {
        let v = self.values.get(self.next).copied().unwrap_or(self.fill);
        self.next += 1;
        v
    }
}

/// Rectangular world with optional walls and an all-or-nothing LOS switch.
pub(crate) struct GridWorld {
    width: i32,
    height: i32,
    walls: HashSet<(i32, i32)>,
    opaque: bool,
}

impl GridWorld {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            opaque: false,
        }
    }

    /// A 1-tile-high east-west corridor.
    pub(crate) fn corridor(len: i32) -> Self {
        Self::open(len, 1)
    }

    pub(crate) fn wall(&mut self, x: i32, y: i32) {
        self.walls.insert((x, y));
    }

    /// Make every LOS query fail.
    pub(crate) fn block_los(&mut self) {
        self.opaque = true;
    }
}

impl WorldView for GridWorld {
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn is_walkable(&self, x: i32, y: i32) -> bool {
        !self.walls.contains(&(x, y))
    }

    fn has_los(&self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) -> bool {
        !self.opaque
    }
}

/// Hook bundle that records everything; optionally errors on every call
/// while still recording.
#[derive(Default)]
pub(crate) struct RecordingHooks {
    fail: bool,
    pub(crate) logs: Vec<(String, LogKind)>,
    pub(crate) ui_updates: u32,
    pub(crate) blocks: u32,
    pub(crate) decals: Vec<(i32, i32, f64)>,
    pub(crate) dazes: u32,
    pub(crate) bleeds: u32,
    pub(crate) player_died: bool,
    pub(crate) enemy_deaths: Vec<EnemyId>,
}

impl RecordingHooks {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn done(&self, hook: &'static str) -> HookResult {
        if self.fail {
            Err(HookError::new(hook, "recording sink set to fail"))
        } else {
            Ok(())
        }
    }
}

impl TurnHooks for RecordingHooks {
    fn log(&mut self, msg: &str, kind: LogKind) -> HookResult {
        self.logs.push((msg.to_string(), kind));
        self.done("log")
    }

    fn update_ui(&mut self) -> HookResult {
        self.ui_updates += 1;
        self.done("update_ui")
    }

    fn on_block(&mut self, _loc: &crate::combat::HitLocation) -> HookResult {
        self.blocks += 1;
        self.done("on_block")
    }

    fn add_blood_decal(&mut self, x: i32, y: i32, intensity: f64) -> HookResult {
        self.decals.push((x, y, intensity));
        self.done("add_blood_decal")
    }

    fn apply_dazed_to_player(&mut self, _player: &mut Player) -> HookResult {
        self.dazes += 1;
        self.done("apply_dazed_to_player")
    }

    fn apply_bleed_to_player(&mut self, _player: &mut Player) -> HookResult {
        self.bleeds += 1;
        self.done("apply_bleed_to_player")
    }

    fn on_player_died(&mut self) -> HookResult {
        self.player_died = true;
        self.done("on_player_died")
    }

    fn on_enemy_died(&mut self, enemy: &Enemy) -> HookResult {
        self.enemy_deaths.push(enemy.id);
        self.done("on_enemy_died")
    }
}
