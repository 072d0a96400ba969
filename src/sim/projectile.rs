//! Projectiles and their manager

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actors::ActorManager;
use super::enemy::EnemyId;
use super::entity::{Body, Color};
use super::geometry::Rect;
use super::player::Player;
use crate::consts::BULLET_SIZE;

/// Who fired a projectile, and therefore what it can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn color(&self) -> Color {
        match self {
            Side::Player => Color::GREY,
            Side::Enemy => Color::rgb(90, 0, 140),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Body,
    pub side: Side,
    pub damage: f32,
}

impl Projectile {
    /// Projectile centred on `origin`, travelling along `direction` (unit)
    pub fn new(origin: Vec2, direction: Vec2, side: Side, damage: f32, speed: f32) -> Self {
        let size = Vec2::splat(BULLET_SIZE);
        let mut body = Body::new(origin - size / 2.0, size, speed, side.color());
        body.direction = direction;
        Self { body, side, damage }
    }

    /// Aim from `origin` toward `target`. `None` when the two coincide.
    pub fn aimed(
        origin: Vec2,
        target: Vec2,
        side: Side,
        damage: f32,
        speed: f32,
    ) -> Option<Self> {
        let direction = (target - origin).try_normalize()?;
        Some(Self::new(origin, direction, side, damage, speed))
    }
}

/// What a projectile did this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    Enemy {
        id: EnemyId,
        damage: f32,
        killed: bool,
    },
    Player {
        damage: f32,
    },
}

/// Owns every live projectile
#[derive(Debug, Clone, Default)]
pub struct ProjectileManager {
    projectiles: Vec<Projectile>,
}

impl ProjectileManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Move every projectile, drop the ones off screen, and resolve hits.
    ///
    /// Player shots damage the first living enemy they overlap (manager
    /// order). Enemy shots deal half their damage to the player. A
    /// projectile is consumed by its first hit.
    pub fn update(
        &mut self,
        dt: f32,
        screen: &Rect,
        actors: &mut ActorManager,
        player: &mut Player,
    ) -> Vec<Impact> {
        let mut impacts = Vec::new();

        self.projectiles.retain_mut(|projectile| {
            projectile.body.advance(dt);
            let rect = *projectile.body.rect();

            if !rect.intersects(screen) {
                return false;
            }

            match projectile.side {
                Side::Player => {
                    let Some(index) = actors.first_hit(&rect) else {
                        return true;
                    };
                    if let Some((id, killed)) = actors.damage_at(index, projectile.damage) {
                        impacts.push(Impact::Enemy {
                            id,
                            damage: projectile.damage,
                            killed,
                        });
                    }
                    false
                }
                Side::Enemy => {
                    if !rect.intersects(player.body.rect()) {
                        return true;
                    }
                    let damage = projectile.damage / 2.0;
                    player.take_damage(damage);
                    impacts.push(Impact::Player { damage });
                    false
                }
            }
        });

        impacts
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Ruleset, Settings};
    use crate::sim::enemy::{Enemy, EnemyKind};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn screen() -> Rect {
        Rect::from_size(Vec2::new(800.0, 600.0))
    }

    fn setup() -> (ActorManager, Player, Settings, Pcg32) {
        let settings = Settings::for_ruleset(Ruleset::Basic);
        let mut rng = Pcg32::seed_from_u64(3);
        let actors = ActorManager::new(&settings, &mut rng);
        let player = Player::new(&settings);
        (actors, player, settings, rng)
    }

    #[test]
    fn test_aim_at_self_is_none() {
        let p = Vec2::new(50.0, 50.0);
        assert!(Projectile::aimed(p, p, Side::Player, 10.0, 300.0).is_none());
    }

    #[test]
    fn test_offscreen_projectile_culled_same_update() {
        let (mut actors, mut player, _, _) = setup();
        let mut manager = ProjectileManager::new();
        // One step to the left puts it fully off screen
        manager.add_projectile(Projectile::new(
            Vec2::new(2.0, 300.0),
            Vec2::NEG_X,
            Side::Player,
            10.0,
            300.0,
        ));

        manager.update(0.1, &screen(), &mut actors, &mut player);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_player_shot_hits_first_enemy_only() {
        let (mut actors, mut player, settings, mut rng) = setup();
        let a = actors.insert(Enemy::spawn(EnemyKind::Blob, 1, Vec2::new(100.0, 100.0), &settings, &mut rng));
        let b = actors.insert(Enemy::spawn(EnemyKind::Blob, 1, Vec2::new(104.0, 100.0), &settings, &mut rng));

        let mut manager = ProjectileManager::new();
        manager.add_projectile(Projectile::new(
            Vec2::new(110.0, 110.0),
            Vec2::X,
            Side::Player,
            10.0,
            1.0,
        ));

        let impacts = manager.update(0.01, &screen(), &mut actors, &mut player);
        assert_eq!(impacts.len(), 1);
        assert!(matches!(impacts[0], Impact::Enemy { id, killed: true, .. } if id == a));
        assert!(actors.get(b).is_some_and(|e| e.is_alive()));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_enemy_shot_deals_half_damage_to_player() {
        let (mut actors, mut player, _, _) = setup();
        let start = player.health();
        let mut manager = ProjectileManager::new();
        manager.add_projectile(Projectile::new(
            player.midpoint(),
            Vec2::Y,
            Side::Enemy,
            10.0,
            1.0,
        ));

        let impacts = manager.update(0.01, &screen(), &mut actors, &mut player);
        assert_eq!(impacts, vec![Impact::Player { damage: 5.0 }]);
        assert_eq!(player.health(), start - 5.0);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_enemy_shot_ignores_enemies() {
        let (mut actors, mut player, settings, mut rng) = setup();
        actors.insert(Enemy::spawn(EnemyKind::Blob, 1, Vec2::new(100.0, 100.0), &settings, &mut rng));
        let mut manager = ProjectileManager::new();
        manager.add_projectile(Projectile::new(
            Vec2::new(110.0, 110.0),
            Vec2::X,
            Side::Enemy,
            10.0,
            1.0,
        ));

        let impacts = manager.update(0.01, &screen(), &mut actors, &mut player);
        assert!(impacts.is_empty());
        assert_eq!(manager.len(), 1);
    }
}
