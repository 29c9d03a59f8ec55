//! Game tuning configuration
//!
//! Persisted to LocalStorage on web so tweaks survive a reload; plain
//! defaults everywhere else. Distinct from game state, which is never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player speed (px/sec)
    pub player_speed: f32,
    /// Enemy horizontal speed magnitude (px/sec)
    pub enemy_base_speed: f32,
    /// Enemy vertical speed as a fraction of the base
    pub enemy_speed_ratio: f32,
    /// Fallback player footprint (px); measured element bounds win on web
    pub player_size: f32,
    /// Fallback enemy footprint (px)
    pub enemy_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: consts::PLAYER_SPEED,
            enemy_base_speed: consts::ENEMY_BASE_SPEED,
            enemy_speed_ratio: consts::ENEMY_SPEED_RATIO,
            player_size: consts::PLAYER_SIZE,
            enemy_size: consts::ENEMY_SIZE,
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "boing_dodge_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
