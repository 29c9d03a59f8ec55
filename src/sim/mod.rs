//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestep supplied by the caller (pre-clamped by the frame driver)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod update;

pub use collision::{clamp_point, rects_overlap, Rect};
pub use state::{Direction, Enemy, GamePhase, GameState, InputState, Player};
pub use update::{reset, resize, sync_sizes, update};
