//! Simulation module
//!
//! All gameplay logic lives here:
//! - Time is passed in explicitly (`dt`, accumulated elapsed time)
//! - Seeded RNG only
//! - Collections are only mutated by their owning manager
//! - No rendering or platform dependencies

pub mod actors;
pub mod enemy;
pub mod entity;
pub mod geometry;
pub mod player;
pub mod projectile;
pub mod random;
pub mod score;
pub mod state;
pub mod tick;

pub use actors::{
    ActorManager, ActorReport, FrameContext, Kill, create_spawn_spots, pick_extended_kind,
    spawn_probability, spawn_range,
};
pub use enemy::{Enemy, EnemyId, EnemyIntent, EnemyKind, Targeting};
pub use entity::{Body, Color};
pub use geometry::Rect;
pub use player::{MoveKeys, Player};
pub use projectile::{Impact, Projectile, ProjectileManager, Side};
pub use score::{Hud, ScoreTracker};
pub use state::{GameEvent, GameOverSummary, GamePhase, GameState};
pub use tick::{handle_event, update};
