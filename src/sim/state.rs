//! Game state and core simulation types
//!
//! One `GameState` is one run: it owns the player, both managers, the
//! score and the seeded RNG. A restart builds a new one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actors::{ActorManager, Kill};
use super::enemy::EnemyKind;
use super::geometry::Rect;
use super::player::Player;
use super::projectile::{Impact, ProjectileManager, Side};
use super::score::{Hud, ScoreTracker};
use crate::settings::{Ruleset, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Updates are skipped
    Paused,
    /// Run ended (extended ruleset only)
    GameOver,
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOverSummary {
    /// Seconds survived
    pub elapsed: f32,
    pub score: u64,
}

/// Notable things that happened during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemiesSpawned(usize),
    EnemyKilled(Kill),
    ProjectileHit(Impact),
    PlayerDied,
    GameOver(GameOverSummary),
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed
    pub seed: u64,
    pub settings: Settings,
    pub rng: Pcg32,
    pub screen: Rect,
    pub phase: GamePhase,
    /// Simulated seconds
    pub elapsed: f32,
    /// Simulated frames
    pub frame: u64,
    pub player: Player,
    pub projectiles: ProjectileManager,
    pub actors: ActorManager,
    pub score: ScoreTracker,
    /// Last known pointer position
    pub pointer: Vec2,
    /// Projectiles the player has fired this run
    pub shots_fired: u64,
}

impl GameState {
    /// Create a new run. The field starts with one enemy of the
    /// ruleset's splitting kind.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let screen = Rect::from_size(settings.screen_size());
        let mut actors = ActorManager::new(&settings, &mut rng);
        actors.spawn_wave(opening_kind(settings.ruleset), &settings, &mut rng);
        let player = Player::new(&settings);

        log::info!(
            "{} game started with seed {} on a {}x{} arena",
            settings.ruleset.as_str(),
            seed,
            settings.screen_width,
            settings.screen_height
        );

        Self {
            seed,
            rng,
            screen,
            phase: GamePhase::Playing,
            elapsed: 0.0,
            frame: 0,
            player,
            projectiles: ProjectileManager::new(),
            actors,
            score: ScoreTracker::new(settings.score_multiplier),
            pointer: screen.center(),
            shots_fired: 0,
            settings,
        }
    }

    pub fn ruleset(&self) -> Ruleset {
        self.settings.ruleset
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.player, &self.score)
    }

    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            elapsed: self.elapsed,
            score: self.score.display(),
        }
    }

    pub fn player_projectiles(&self) -> usize {
        self.projectiles
            .projectiles()
            .iter()
            .filter(|p| p.side == Side::Player)
            .count()
    }
}

fn opening_kind(ruleset: Ruleset) -> EnemyKind {
    match ruleset {
        Ruleset::Basic => EnemyKind::Blob,
        Ruleset::Extended => EnemyKind::Slime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_has_opening_enemy() {
        let state = GameState::new(Settings::for_ruleset(Ruleset::Basic), 1);
        assert_eq!(state.actors.len(), 1);
        assert_eq!(state.actors.enemies()[0].kind, EnemyKind::Blob);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.projectiles.is_empty());

        let state = GameState::new(Settings::default(), 1);
        assert_eq!(state.actors.enemies()[0].kind, EnemyKind::Slime);
    }

    #[test]
    fn test_opening_enemy_is_offscreen() {
        let state = GameState::new(Settings::default(), 77);
        let spot = state.actors.enemies()[0].body.pos();
        assert!(!state.screen.contains_point(spot));
    }

    #[test]
    fn test_same_seed_same_spawn_spots() {
        let a = GameState::new(Settings::default(), 5);
        let b = GameState::new(Settings::default(), 5);
        assert_eq!(a.actors.spawn_spots(), b.actors.spawn_spots());
    }
}
