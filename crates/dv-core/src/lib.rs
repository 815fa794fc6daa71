//! dv-core: Enemy turn engine for the Dreadvault roguelike
//!
//! This crate contains the per-turn enemy decision-and-resolution pipeline
//! with no I/O dependencies: target acquisition through a spatial bucket
//! index, a per-enemy behavior state machine (panic, ranged-shy ghosts,
//! wander, chase), occupancy-safe movement, and melee combat resolution
//! (hit location, crit, block, equipment wear, injuries).
//!
//! The engine is a pure turn step: the driver calls [`run_enemy_turns`] once
//! per game tick with a [`TurnCtx`] capability bundle. Rendering, dungeon
//! generation, field-of-view and persistence all live with the caller.

pub mod combat;
pub mod entity;
pub mod hooks;
pub mod turn;

mod consts;
mod rng;

#[cfg(test)]
pub(crate) mod testutil;

pub use consts::*;
pub use rng::{Dice, GameRng};
pub use turn::{TurnCtx, TurnOutcome, TurnReport, run_enemy_turns};
