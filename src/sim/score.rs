//! Score bookkeeping and HUD values

use serde::{Deserialize, Serialize};

use super::actors::Kill;
use super::player::Player;

/// Running score. Every increment is scaled by the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: f64,
    pub multiplier: f64,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScoreTracker {
    pub fn new(multiplier: f64) -> Self {
        Self {
            score: 0.0,
            multiplier,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whole points, as shown on the HUD
    pub fn display(&self) -> u64 {
        self.score.max(0.0) as u64
    }

    pub fn change_score(&mut self, change: f64) {
        self.score += change * self.multiplier;
    }

    pub fn record_kill(&mut self, kill: &Kill) {
        self.change_score(kill.score_value);
    }
}

/// Snapshot of what the HUD shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// Player health over max health, `[0, 1]`
    pub health_fraction: f32,
    pub score: u64,
}

impl Hud {
    pub fn from_state(player: &Player, score: &ScoreTracker) -> Self {
        Self {
            health_fraction: player.health_fraction(),
            score: score.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::enemy::{EnemyId, EnemyKind};
    use glam::Vec2;

    fn kill(score_value: f64) -> Kill {
        Kill {
            id: EnemyId(1),
            kind: EnemyKind::Blob,
            generation: 2,
            pos: Vec2::ZERO,
            score_value,
            children: 2,
        }
    }

    #[test]
    fn test_multiplier_applies_to_each_increment() {
        let mut tracker = ScoreTracker::new(2.0);
        tracker.record_kill(&kill(15.0));
        tracker.record_kill(&kill(10.0));
        assert_eq!(tracker.score(), 50.0);
        assert_eq!(tracker.display(), 50);
    }

    #[test]
    fn test_display_truncates() {
        let mut tracker = ScoreTracker::default();
        tracker.change_score(30.0 / 7.0);
        assert_eq!(tracker.display(), 4);
    }

    #[test]
    fn test_hud_snapshot() {
        let mut player = Player::new(&Settings::default());
        player.take_damage(25.0);
        let hud = Hud::from_state(&player, &ScoreTracker::default());
        assert_eq!(hud.health_fraction, 0.75);
        assert_eq!(hud.score, 0);
    }
}
