//! The player-controlled body

use glam::Vec2;

use super::enemy::Enemy;
use super::entity::{Body, Color};
use super::projectile::{Projectile, Side};
use crate::consts::PLAYER_SIZE;
use crate::settings::Settings;

/// Held state of the four movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Each held key contributes ±1 on its axis. Not normalised, so
    /// diagonals are faster than straight lines.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i32 as f32 - neg as i32 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub keys: MoveKeys,
    max_health: f32,
    health: f32,
    bullet_speed: f32,
    bullet_damage: f32,
}

impl Player {
    /// A fresh player centred on the screen
    pub fn new(settings: &Settings) -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        let pos = (settings.screen_size() - size) / 2.0;
        Self {
            body: Body::new(pos, size, settings.player_speed, Color::RED),
            keys: MoveKeys::default(),
            max_health: settings.player_max_health,
            health: settings.player_max_health,
            bullet_speed: settings.bullet_speed,
            bullet_damage: settings.bullet_damage,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn midpoint(&self) -> Vec2 {
        self.body.midpoint()
    }

    /// Health as a fraction of the maximum, in `[0, 1]`
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    /// Returns true only on the hit that kills.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health -= amount;
        !self.is_alive()
    }

    /// Move from the held keys, then take contact damage from every
    /// overlapping enemy. Returns true if this frame killed the player.
    pub fn update(&mut self, dt: f32, enemies: &[Enemy]) -> bool {
        self.body.direction = self.keys.direction();
        self.body.advance(dt);

        if !self.is_alive() {
            return false;
        }

        let contact: f32 = enemies
            .iter()
            .filter(|e| e.is_alive() && self.body.overlaps(&e.body))
            .filter_map(|e| e.contact_rate())
            .map(|rate| rate * dt)
            .sum();

        contact > 0.0 && self.take_damage(contact)
    }

    /// Shoot from the midpoint toward `pointer`. Clicking exactly on the
    /// midpoint fires nothing.
    pub fn fire(&self, pointer: Vec2) -> Option<Projectile> {
        Projectile::aimed(
            self.midpoint(),
            pointer,
            Side::Player,
            self.bullet_damage,
            self.bullet_speed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Ruleset;
    use crate::sim::enemy::EnemyKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_move_keys_direction() {
        let keys = MoveKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(keys.direction(), Vec2::new(1.0, -1.0));

        let opposed = MoveKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(opposed.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_player_starts_centred() {
        let settings = Settings::default();
        let player = Player::new(&settings);
        assert_eq!(player.midpoint(), settings.screen_size() / 2.0);
        assert_eq!(player.health_fraction(), 1.0);
    }

    #[test]
    fn test_fire_at_midpoint_is_noop() {
        let player = Player::new(&Settings::default());
        assert!(player.fire(player.midpoint()).is_none());
        let shot = player.fire(player.midpoint() + Vec2::new(0.0, -10.0)).unwrap();
        assert_eq!(shot.body.direction, Vec2::NEG_Y);
        assert_eq!(shot.side, Side::Player);
    }

    #[test]
    fn test_contact_damage_per_generation() {
        let settings = Settings::for_ruleset(Ruleset::Basic);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut player = Player::new(&settings);
        let pos = player.body.pos();

        let g1 = Enemy::spawn(EnemyKind::Blob, 1, pos, &settings, &mut rng);
        player.update(1.0, std::slice::from_ref(&g1));
        assert!((player.health() - 96.0).abs() < 1e-4);

        let g2 = Enemy::spawn(EnemyKind::Blob, 2, pos, &settings, &mut rng);
        player.update(1.0, std::slice::from_ref(&g2));
        assert!((player.health() - 95.0).abs() < 1e-4);
    }

    #[test]
    fn test_ranged_enemy_deals_no_contact_damage() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut player = Player::new(&settings);
        let gunman = Enemy::spawn(EnemyKind::Gunman, 1, player.body.pos(), &settings, &mut rng);
        player.update(1.0, std::slice::from_ref(&gunman));
        assert_eq!(player.health(), player.max_health());
    }

    #[test]
    fn test_death_reported_once() {
        let mut player = Player::new(&Settings::default());
        assert!(!player.take_damage(60.0));
        assert!(player.take_damage(60.0));
        assert!(!player.take_damage(60.0));
        assert!(!player.is_alive());
        assert_eq!(player.health_fraction(), 0.0);
    }
}
