//! Boing Dodge - a browser avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, bouncing, collision, game state)
//! - `input`: Pure key/pad mapping to directional intents
//! - `config`: Tuning values with LocalStorage persistence on web
//!
//! Rendering is plain DOM style mutation and lives in the wasm host layer
//! (`main.rs`), not here. The sim never touches the platform.

pub mod config;
pub mod input;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Frame-time ceiling applied by the frame driver (seconds).
    /// Bounds integration error on slow frames; the sim itself never clamps.
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Player movement speed (px/sec)
    pub const PLAYER_SPEED: f32 = 240.0;

    /// Enemy horizontal speed magnitude (px/sec)
    pub const ENEMY_BASE_SPEED: f32 = 220.0;
    /// Enemy vertical speed as a fraction of the base (220 * 0.78 = 171.6)
    pub const ENEMY_SPEED_RATIO: f32 = 0.78;

    /// Default entity footprints (px), overwritten by measured element
    /// bounds on web once layout settles
    pub const PLAYER_SIZE: f32 = 46.0;
    pub const ENEMY_SIZE: f32 = 72.0;

    /// Spawn positions as fractions of the free range (arena minus footprint)
    pub const PLAYER_SPAWN_X: f32 = 0.5;
    pub const PLAYER_SPAWN_Y: f32 = 0.72;
    pub const ENEMY_SPAWN_X: f32 = 0.20;
    pub const ENEMY_SPAWN_Y: f32 = 0.18;
}
