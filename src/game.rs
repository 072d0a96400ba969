//! Harness-facing facade
//!
//! The host loop calls [`Game::update`] once per frame with its delta time,
//! draws whatever [`Game::render`] returns and forwards input through
//! [`Game::handle_event`].

use crate::highscores::HighScores;
use crate::input::InputEvent;
use crate::renderer::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameOverSummary, GamePhase, GameState, Hud};

/// A running game plus what outlives individual runs
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    high_scores: HighScores,
    last_game_over: Option<GameOverSummary>,
}

impl Game {
    /// Start a game. Uses the configured seed, or the clock without one.
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings, seed),
            high_scores: HighScores::new(),
            last_game_over: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn hud(&self) -> Hud {
        self.state.hud()
    }

    /// Summary of the finished run, while the game-over screen is up
    pub fn game_over(&self) -> Option<GameOverSummary> {
        match self.state.phase {
            GamePhase::GameOver => self.last_game_over,
            _ => None,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = sim::update(&mut self.state, dt);

        for event in &events {
            if let GameEvent::GameOver(summary) = event {
                if let Some(rank) = self.high_scores.add_run(summary) {
                    log::info!("New high score #{}: {}", rank, summary.score);
                }
                self.last_game_over = Some(*summary);
            }
        }

        events
    }

    /// Draw list for the current frame
    pub fn render(&self) -> Vec<DrawCommand> {
        renderer::render(&self.state)
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if sim::handle_event(&mut self.state, event) {
            self.restart();
        }
    }

    /// Throw the current run away and start a new one
    pub fn restart(&mut self) {
        let settings = self.state.settings.clone();
        let seed = self.state.seed.wrapping_add(1);
        log::info!("Restarting with seed {}", seed);
        self.state = GameState::new(settings, seed);
        self.last_game_over = None;
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::input::Key;
    use crate::settings::Ruleset;

    #[test]
    fn test_game_over_then_restart() {
        let mut game = Game::with_seed(Settings::for_ruleset(Ruleset::Extended), 10);
        game.state_mut().player.take_damage(99.99);
        game.state_mut().score.change_score(120.0);

        // An enemy shot finishes the player off
        let mid = game.state().player.midpoint();
        game.state_mut().projectiles.add_projectile(crate::sim::Projectile::new(
            mid,
            glam::Vec2::X,
            crate::sim::Side::Enemy,
            10.0,
            1.0,
        ));
        let events = game.update(FRAME_DT);
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver(_))));

        let summary = game.game_over().expect("game over");
        assert_eq!(summary.score, 120);
        assert_eq!(game.high_scores().top_score(), Some(120));

        game.handle_event(&InputEvent::KeyDown(Key::Restart));
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().seed, 11);
        assert!(game.game_over().is_none());
        // The leaderboard survives the restart
        assert_eq!(game.high_scores().top_score(), Some(120));
    }

    #[test]
    fn test_configured_seed_is_used() {
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };
        assert_eq!(Game::new(settings).state().seed, 1234);
    }
}
