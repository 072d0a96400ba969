//! Game settings and balance
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Which rule set the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// One splitting enemy kind, no game over
    Basic,
    /// Slimes, zombies, gunmen and tanks; game over on death
    #[default]
    Extended,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Basic => "Basic",
            Ruleset::Extended => "Extended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(Ruleset::Basic),
            "extended" | "ext" => Some(Ruleset::Extended),
            _ => None,
        }
    }

    /// Whether the player's death ends the run
    pub fn has_game_over(&self) -> bool {
        matches!(self, Ruleset::Extended)
    }
}

/// Game settings/balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ruleset: Ruleset,

    // === Arena ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Fixed seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    // === Spawning ===
    pub spawn_rate: f32,
    /// Dampens how fast spawn probability climbs with elapsed time
    pub spawn_damper: f32,
    /// Seconds between spawn checks after a successful spawn
    pub spawn_check_interval: f32,
    pub spawn_spot_count: usize,
    pub spawn_margin: f32,

    // === Splitting ===
    pub max_generations: u32,
    pub split_jitter: f32,

    // === Scoring ===
    pub score_multiplier: f64,
    pub tank_score_threshold: f64,

    // === Player ===
    pub player_speed: f32,
    pub player_max_health: f32,
    pub bullet_speed: f32,
    pub bullet_damage: f32,

    // === Enemies ===
    pub fire_interval: f32,
    pub aim_error: f32,
    /// Standard deviation applied to enemy speeds at spawn (0 = none)
    pub speed_jitter: f32,

    // === Runner ===
    /// Render on a separate thread at this rate (Hz)
    pub render_rate: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::Extended,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,

            spawn_rate: SPAWN_RATE,
            spawn_damper: SPAWN_DAMPER,
            spawn_check_interval: SPAWN_CHECK_INTERVAL,
            spawn_spot_count: SPAWN_SPOT_COUNT,
            spawn_margin: SPAWN_MARGIN,

            max_generations: MAX_GENERATIONS,
            split_jitter: SPLIT_JITTER,

            score_multiplier: 1.0,
            tank_score_threshold: TANK_SCORE_THRESHOLD,

            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            bullet_speed: BULLET_SPEED,
            bullet_damage: PLAYER_BULLET_DAMAGE,

            fire_interval: FIRE_INTERVAL,
            aim_error: AIM_ERROR,
            speed_jitter: 0.0,

            render_rate: None,
        }
    }
}

impl Settings {
    /// Defaults for a given rule set
    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..Self::default()
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if the file exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from(path)
        } else {
            log::info!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(SettingsError::invalid(
                "screen_width/screen_height",
                "screen must have a positive area",
            ));
        }
        if !(self.spawn_damper > 0.0) {
            return Err(SettingsError::invalid("spawn_damper", "must be positive"));
        }
        if !(self.spawn_rate > 0.0) {
            return Err(SettingsError::invalid("spawn_rate", "must be positive"));
        }
        if self.spawn_check_interval < 0.0 {
            return Err(SettingsError::invalid(
                "spawn_check_interval",
                "must not be negative",
            ));
        }
        if self.spawn_spot_count == 0 {
            return Err(SettingsError::invalid(
                "spawn_spot_count",
                "need at least one spawn spot",
            ));
        }
        if !(self.spawn_margin > 0.0) {
            return Err(SettingsError::invalid(
                "spawn_margin",
                "spawn region must extend past the screen",
            ));
        }
        if self.max_generations == 0 {
            return Err(SettingsError::invalid("max_generations", "must be at least 1"));
        }
        if !(self.player_max_health > 0.0) {
            return Err(SettingsError::invalid("player_max_health", "must be positive"));
        }
        if self.split_jitter < 0.0 || self.aim_error < 0.0 || self.speed_jitter < 0.0 {
            return Err(SettingsError::invalid(
                "split_jitter/aim_error/speed_jitter",
                "deviations must not be negative",
            ));
        }
        if self.render_rate == Some(0) {
            return Err(SettingsError::invalid("render_rate", "must be at least 1 Hz"));
        }
        Ok(())
    }
}
