//! Horde - A top-down arena survival game core
//!
//! Core modules:
//! - `sim`: Simulation (movement, collisions, spawning, splitting, scoring)
//! - `renderer`: Draw command generation for a host renderer
//! - `input`: Host-agnostic input events
//! - `game`: Harness-facing facade (`update` / `render` / `handle_event`)
//! - `settings`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::{Ruleset, Settings};

/// Game configuration constants
pub mod consts {
    /// Default frame timestep used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const PLAYER_SPEED: f32 = 180.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;

    /// Projectile defaults
    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 300.0;
    pub const PLAYER_BULLET_DAMAGE: f32 = 10.0;

    /// Contact damage per second of the basic blob at generation 1.
    /// Divided by generation squared.
    pub const BLOB_CONTACT_RATE: f32 = 4.0;

    /// Spawn scheduler
    pub const SPAWN_RATE: f32 = 2000.0;
    pub const SPAWN_DAMPER: f32 = 15.0;
    pub const SPAWN_CHECK_INTERVAL: f32 = 0.1;
    pub const SPAWN_SPOT_COUNT: usize = 16;
    /// Fraction of the screen size the spawn region extends past each edge
    pub const SPAWN_MARGIN: f32 = 0.2;

    /// Splitting
    pub const MAX_GENERATIONS: u32 = 3;
    pub const SPLIT_CHILDREN: usize = 2;
    pub const SPLIT_JITTER: f32 = 20.0;

    /// Ranged enemies
    pub const FIRE_INTERVAL: f32 = 0.5;
    pub const AIM_ERROR: f32 = 10.0;

    /// Score needed before tanks join the spawn table
    pub const TANK_SCORE_THRESHOLD: f64 = 1000.0;
}

pub use glam::Vec2;
