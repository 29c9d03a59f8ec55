//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was hit; state frozen until an explicit reset
    GameOver,
}

/// A directional intent (one of the four movement axes' ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Held directional intents, mutated by the host's input handlers.
///
/// Each flag is set on press and cleared on release by independent event
/// sources (keys, pads); the sim only ever reads a snapshot per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Set or clear one held intent (press/release semantics)
    pub fn set_held(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Movement direction for the current intents.
    ///
    /// Components sum to {-1, 0, +1} per axis; when both axes are active the
    /// vector is scaled by 1/sqrt(2) so diagonal movement does not exceed
    /// cardinal speed.
    pub fn direction_vector(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= std::f32::consts::FRAC_1_SQRT_2;
        }
        dir
    }
}

/// The player's rectangle. Position is the top-left corner in arena
/// coordinates; no stored velocity, movement comes from held intents.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The bouncing enemy rectangle
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity in px/sec; magnitude only changes at reset
    pub vel: Vec2,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, consumed at reset to pick the enemy's direction
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Survival time, accumulated from frame dt while playing
    pub elapsed_secs: f32,
    /// Player speed (px/sec)
    pub speed: f32,
    /// Enemy speed magnitudes per axis, applied with random signs at reset
    pub enemy_speed: Vec2,
    pub player: Player,
    pub enemy: Enemy,
}

impl GameState {
    /// Create a new game state with the given seed.
    ///
    /// Entities start at the origin with configured footprints and the
    /// enemy's literal base velocity; the host calls `reset` before the
    /// first frame, which places and randomizes everything.
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            elapsed_secs: 0.0,
            speed: config.player_speed,
            enemy_speed: Vec2::new(
                config.enemy_base_speed,
                config.enemy_base_speed * config.enemy_speed_ratio,
            ),
            player: Player {
                pos: Vec2::ZERO,
                size: Vec2::splat(config.player_size),
            },
            enemy: Enemy {
                pos: Vec2::ZERO,
                size: Vec2::splat(config.enemy_size),
                vel: Vec2::new(
                    config.enemy_base_speed,
                    config.enemy_base_speed * config.enemy_speed_ratio,
                ),
            },
        }
    }

    /// HUD time string, one decimal place ("12.3s")
    pub fn elapsed_label(&self) -> String {
        format!("{:.1}s", self.elapsed_secs)
    }

    /// HUD status string
    pub fn status_label(&self) -> &'static str {
        match self.phase {
            GamePhase::Playing => "PLAYING",
            GamePhase::GameOver => "GAME OVER",
        }
    }
}
