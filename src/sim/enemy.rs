//! Enemy kinds and per-enemy behaviour
//!
//! Behaviour is dispatched on [`EnemyKind`] (stats, fire and death policy)
//! and [`Targeting`] (movement policy). Enemies never touch their manager:
//! [`Enemy::update`] returns an [`EnemyIntent`] for the manager to apply.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actors::FrameContext;
use super::entity::{Body, Color};
use super::geometry::Rect;
use super::projectile::{Projectile, Side};
use super::random::{gauss, gauss_vec2, one_in};
use crate::consts::BLOB_CONTACT_RATE;
use crate::settings::Settings;

/// Stable enemy handle, unique within one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// The basic ruleset's only enemy: homes in, splits on death
    Blob,
    /// Extended splitter
    Slime,
    /// Slow, tough melee homer
    Zombie,
    /// Walks to a camp point and shoots from there
    Gunman,
    /// Crosses the arena in a straight line, shooting
    Tank,
}

impl EnemyKind {
    /// Edge length at generation 1
    pub fn base_size(&self) -> f32 {
        match self {
            EnemyKind::Blob | EnemyKind::Slime => 32.0,
            EnemyKind::Zombie => 36.0,
            EnemyKind::Gunman => 28.0,
            EnemyKind::Tank => 56.0,
        }
    }

    pub fn base_speed(&self) -> f32 {
        match self {
            EnemyKind::Blob => 150.0,
            EnemyKind::Slime => 140.0,
            EnemyKind::Zombie => 90.0,
            EnemyKind::Gunman => 120.0,
            EnemyKind::Tank => 60.0,
        }
    }

    pub fn max_health(&self) -> f32 {
        match self {
            EnemyKind::Blob | EnemyKind::Slime => 10.0,
            EnemyKind::Zombie => 30.0,
            EnemyKind::Gunman => 20.0,
            EnemyKind::Tank => 80.0,
        }
    }

    /// Score at generation 1
    pub fn base_score(&self) -> f64 {
        match self {
            EnemyKind::Blob | EnemyKind::Slime => 30.0,
            EnemyKind::Zombie => 50.0,
            EnemyKind::Gunman => 70.0,
            EnemyKind::Tank => 200.0,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            EnemyKind::Blob => Color::rgb(191, 255, 0),
            EnemyKind::Slime => Color::rgb(90, 200, 60),
            EnemyKind::Zombie => Color::rgb(110, 130, 90),
            EnemyKind::Gunman => Color::rgb(60, 60, 160),
            EnemyKind::Tank => Color::rgb(80, 80, 80),
        }
    }

    /// Reciprocal firing probability per fire tick (0 = never fires)
    pub fn fire_chance(&self) -> u32 {
        match self {
            EnemyKind::Gunman => 4,
            EnemyKind::Tank => 2,
            _ => 0,
        }
    }

    pub fn bullet_damage(&self) -> f32 {
        match self {
            EnemyKind::Gunman => 10.0,
            EnemyKind::Tank => 20.0,
            _ => 0.0,
        }
    }

    /// Whether death spawns a next generation
    pub fn splits(&self) -> bool {
        matches!(self, EnemyKind::Blob | EnemyKind::Slime)
    }

    /// Contact damage per second, if this kind deals any.
    ///
    /// Blobs fall off with the square of the generation, slimes linearly.
    pub fn contact_rate(&self, generation: u32) -> Option<f32> {
        let g = generation.max(1) as f32;
        match self {
            EnemyKind::Blob => Some(BLOB_CONTACT_RATE / (g * g)),
            EnemyKind::Slime => Some(8.0 / g),
            EnemyKind::Zombie => Some(15.0),
            EnemyKind::Gunman | EnemyKind::Tank => None,
        }
    }
}

/// How an enemy picks its direction each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Targeting {
    /// Straight at the player
    Homing,
    /// Walk to a fixed point, then hold
    Camp { point: Vec2 },
    /// Fixed cardinal heading
    March { heading: Vec2 },
}

/// Something an enemy wants its manager to do
#[derive(Debug, Clone)]
pub enum EnemyIntent {
    Fire(Projectile),
    /// Left the arena without dying
    Leave,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub(crate) id: EnemyId,
    pub kind: EnemyKind,
    pub body: Body,
    pub generation: u32,
    pub targeting: Targeting,
    max_health: f32,
    health: f32,
    fire_timer: f32,
    entered_screen: bool,
}

impl Enemy {
    /// Build an enemy of `kind` at `pos`. Gunmen pick a camp point and
    /// tanks a heading from the arena described by `settings`.
    pub fn spawn<R: Rng + ?Sized>(
        kind: EnemyKind,
        generation: u32,
        pos: Vec2,
        settings: &Settings,
        rng: &mut R,
    ) -> Self {
        let generation = generation.max(1);
        let edge = if kind.splits() {
            kind.base_size() / generation as f32
        } else {
            kind.base_size()
        };
        let size = Vec2::splat(edge);
        let speed = gauss(rng, kind.base_speed(), settings.speed_jitter).max(0.0);
        let screen = Rect::from_size(settings.screen_size());

        let (pos, targeting) = match kind {
            EnemyKind::Gunman => {
                let inner = Rect::new(screen.size * 0.1, screen.size * 0.8 - size);
                let point = Vec2::new(
                    inner.left() + rng.random::<f32>() * inner.size.x.max(0.0),
                    inner.top() + rng.random::<f32>() * inner.size.y.max(0.0),
                );
                (pos, Targeting::Camp { point })
            }
            EnemyKind::Tank => march_from_edge(pos, size, &screen),
            _ => (pos, Targeting::Homing),
        };

        let max_health = kind.max_health();
        Self {
            id: EnemyId::default(),
            kind,
            body: Body::new(pos, size, speed, kind.color()),
            generation,
            targeting,
            max_health,
            health: max_health,
            fire_timer: settings.fire_interval,
            entered_screen: false,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
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

    /// Score awarded when this enemy dies
    pub fn score_value(&self) -> f64 {
        if self.kind.splits() {
            self.kind.base_score() / self.generation as f64
        } else {
            self.kind.base_score()
        }
    }

    pub fn contact_rate(&self) -> Option<f32> {
        self.kind.contact_rate(self.generation)
    }

    /// Apply damage. Returns true only on the hit that kills.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health -= amount;
        !self.is_alive()
    }

    /// Whether dying now would spawn another generation
    pub fn can_split(&self, max_generations: u32) -> bool {
        self.kind.splits() && self.generation < max_generations
    }

    /// Steer, move and possibly fire.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        ctx: &FrameContext<'_>,
        rng: &mut R,
    ) -> Option<EnemyIntent> {
        self.steer(ctx);
        self.body.advance(ctx.dt);

        if let Targeting::March { .. } = self.targeting {
            if self.body.rect().intersects(&ctx.screen) {
                self.entered_screen = true;
            } else if self.entered_screen {
                return Some(EnemyIntent::Leave);
            }
        }

        self.tick_fire(ctx, rng).map(EnemyIntent::Fire)
    }

    fn steer(&mut self, ctx: &FrameContext<'_>) {
        self.body.direction = match self.targeting {
            Targeting::Homing => (ctx.player_mid - self.body.midpoint()).normalize_or_zero(),
            Targeting::Camp { point } => {
                let to_camp = point - self.body.pos();
                if to_camp.length() <= self.body.speed * ctx.dt {
                    self.body.set_pos(point);
                    Vec2::ZERO
                } else {
                    to_camp.normalize_or_zero()
                }
            }
            Targeting::March { heading } => heading,
        };
    }

    fn tick_fire<R: Rng + ?Sized>(
        &mut self,
        ctx: &FrameContext<'_>,
        rng: &mut R,
    ) -> Option<Projectile> {
        let chance = self.kind.fire_chance();
        if chance == 0 {
            return None;
        }

        self.fire_timer -= ctx.dt;
        if self.fire_timer > 0.0 {
            return None;
        }
        self.fire_timer = ctx.settings.fire_interval;

        if !one_in(rng, chance) {
            return None;
        }
        let target = gauss_vec2(rng, ctx.player_mid, ctx.settings.aim_error);
        Projectile::aimed(
            self.body.midpoint(),
            target,
            Side::Enemy,
            self.kind.bullet_damage(),
            ctx.settings.bullet_speed,
        )
    }
}

/// Heading inward from whichever edge `spot` lies beyond. The cross-axis
/// coordinate is pulled inside the screen so the march always crosses it.
fn march_from_edge(spot: Vec2, size: Vec2, screen: &Rect) -> (Vec2, Targeting) {
    let clamp_x = |x: f32| x.clamp(screen.left(), (screen.right() - size.x).max(screen.left()));
    let clamp_y = |y: f32| y.clamp(screen.top(), (screen.bottom() - size.y).max(screen.top()));

    let (pos, heading) = if spot.x < screen.left() {
        (Vec2::new(spot.x, clamp_y(spot.y)), Vec2::X)
    } else if spot.x >= screen.right() {
        (Vec2::new(spot.x, clamp_y(spot.y)), Vec2::NEG_X)
    } else if spot.y < screen.top() {
        (Vec2::new(clamp_x(spot.x), spot.y), Vec2::Y)
    } else {
        (Vec2::new(clamp_x(spot.x), spot.y), Vec2::NEG_Y)
    };
    (pos, Targeting::March { heading })
}
