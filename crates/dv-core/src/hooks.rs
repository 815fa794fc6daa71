//! Caller-supplied capabilities: world geometry and side-effect hooks
//!
//! The engine never probes for optional callbacks at call time; every hook is
//! a defaulted trait method, and every invocation goes through [`BestEffort`]
//! so a failing log or cosmetic hook can never corrupt combat or movement
//! state, or abort the turn.

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::combat::HitLocation;
use crate::entity::{Enemy, Player};

/// Failure reported by a side-effect hook.
///
/// These are always swallowed by the engine; they exist so drivers can
/// surface their own callback failures without panicking across the boundary.
#[derive(Debug, Error)]
#[error("{hook} hook failed: {message}")]
pub struct HookError {
    pub hook: &'static str,
    pub message: String,
}

impl HookError {
    pub fn new(hook: &'static str, message: impl Into<String>) -> Self {
        Self {
            hook,
            message: message.into(),
        }
    }
}

pub type HookResult = Result<(), HookError>;

/// Message channel for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LogKind {
    Info,
    Combat,
    Flavor,
}

/// Read-only view of world geometry.
pub trait WorldView {
    fn in_bounds(&self, x: i32, y: i32) -> bool;

    fn is_walkable(&self, x: i32, y: i32) -> bool;

    /// Line of sight between two tiles. Only the ranged-shy ghost behavior
    /// consults this; the default is fully transparent.
    fn has_los(&self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) -> bool {
        true
    }
}

/// Lifecycle, log and cosmetic hooks fired during a turn pass.
///
/// All methods default to no-ops, so a driver implements only what it needs.
pub trait TurnHooks {
    fn log(&mut self, _msg: &str, _kind: LogKind) -> HookResult {
        Ok(())
    }

    /// Called once at the end of every pass.
    fn update_ui(&mut self) -> HookResult {
        Ok(())
    }

    /// The player blocked an incoming hit.
    fn on_block(&mut self, _loc: &HitLocation) -> HookResult {
        Ok(())
    }

    fn add_blood_decal(&mut self, _x: i32, _y: i32, _intensity: f64) -> HookResult {
        Ok(())
    }

    /// Status effect on a critical head hit.
    fn apply_dazed_to_player(&mut self, _player: &mut Player) -> HookResult {
        Ok(())
    }

    /// Status effect on any critical hit.
    fn apply_bleed_to_player(&mut self, _player: &mut Player) -> HookResult {
        Ok(())
    }

    /// The player's hp reached zero; the pass aborts after this fires.
    fn on_player_died(&mut self) -> HookResult {
        Ok(())
    }

    /// An enemy's hp dropped to zero. The caller owns removal from the list.
    fn on_enemy_died(&mut self, _enemy: &Enemy) -> HookResult {
        Ok(())
    }
}

/// Hook bundle that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHooks;

impl TurnHooks for NullHooks {}

/// Best-effort wrapper around a [`TurnHooks`] implementation.
///
/// Converts every hook failure into a counted, ignored fault. Call sites use
/// this exclusively, so a hook error cannot alter an already-computed damage
/// or movement result.
pub struct BestEffort<'a> {
    hooks: &'a mut dyn TurnHooks,
    faults: u32,
}

impl<'a> BestEffort<'a> {
    pub fn new(hooks: &'a mut dyn TurnHooks) -> Self {
        Self { hooks, faults: 0 }
    }

    /// Number of hook invocations that failed so far.
    pub fn faults(&self) -> u32 {
        self.faults
    }

    fn sink(&mut self, result: HookResult) {
        if result.is_err() {
            self.faults += 1;
        }
    }

    pub fn log(&mut self, msg: &str, kind: LogKind) {
        let result = self.hooks.log(msg, kind);
        self.sink(result);
    }

    pub fn update_ui(&mut self) {
        let result = self.hooks.update_ui();
        self.sink(result);
    }

    pub fn on_block(&mut self, loc: &HitLocation) {
        let result = self.hooks.on_block(loc);
        self.sink(result);
    }

    pub fn add_blood_decal(&mut self, x: i32, y: i32, intensity: f64) {
        let result = self.hooks.add_blood_decal(x, y, intensity);
        self.sink(result);
    }

    pub fn apply_dazed_to_player(&mut self, player: &mut Player) {
        let result = self.hooks.apply_dazed_to_player(player);
        self.sink(result);
    }

    pub fn apply_bleed_to_player(&mut self, player: &mut Player) {
        let result = self.hooks.apply_bleed_to_player(player);
        self.sink(result);
    }

    pub fn on_player_died(&mut self) {
        let result = self.hooks.on_player_died();
        self.sink(result);
    }

    pub fn on_enemy_died(&mut self, enemy: &Enemy) {
        let result = self.hooks.on_enemy_died(enemy);
        self.sink(result);
    }
}
