//! Per-frame simulation step and session control
//!
//! The frame driver owns timing: it measures the arena, clamps dt to
//! `consts::MAX_FRAME_DT`, and calls `update` once per display frame.

use glam::Vec2;
use rand::Rng;

use super::collision::{clamp_point, rects_overlap, reflect_into_bounds};
use super::state::{GamePhase, GameState, InputState};
use crate::consts::*;

/// Advance the game by one frame.
///
/// A complete no-op once the game is over; positions stay frozen on the
/// collision frame until `reset` is called.
pub fn update(state: &mut GameState, input: &InputState, arena: Vec2, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Player: integrate held intents, then hard clamp (no bounce)
    let dir = input.direction_vector();
    state.player.pos += dir * state.speed * dt;
    state.player.pos = clamp_point(state.player.pos, arena - state.player.size);

    // Enemy: integrate velocity, then reflect off the four walls
    state.enemy.pos += state.enemy.vel * dt;
    reflect_into_bounds(
        &mut state.enemy.pos,
        &mut state.enemy.vel,
        arena - state.enemy.size,
    );

    if rects_overlap(state.player.rect(), state.enemy.rect()) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over after {:.1}s", state.elapsed_secs);
    }

    state.elapsed_secs += dt;
}

/// Start (or restart) a session.
///
/// Places the player near bottom-center and the enemy near top-left, both
/// scaled by each entity's free range. The enemy direction is randomized by
/// sign only; the speed magnitudes stay fixed so difficulty is constant.
pub fn reset(state: &mut GameState, arena: Vec2) {
    state.player.pos = (arena - state.player.size) * Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    state.enemy.pos = (arena - state.enemy.size) * Vec2::new(ENEMY_SPAWN_X, ENEMY_SPAWN_Y);

    let sx = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    state.enemy.vel = state.enemy_speed * Vec2::new(sx, sy);

    state.phase = GamePhase::Playing;
    state.elapsed_secs = 0.0;
}

/// Re-contain both entities after the arena changed size.
///
/// Pure containment correction: velocities, phase, and the clock are left
/// alone.
pub fn resize(state: &mut GameState, arena: Vec2) {
    state.player.pos = clamp_point(state.player.pos, arena - state.player.size);
    state.enemy.pos = clamp_point(state.enemy.pos, arena - state.enemy.size);
}

/// Overwrite entity footprints with host-measured element bounds.
///
/// Handles CSS sizing that settles after the sim was constructed.
pub fn sync_sizes(state: &mut GameState, player_size: Vec2, enemy_size: Vec2) {
    state.player.size = player_size;
    state.enemy.size = enemy_size;
}
