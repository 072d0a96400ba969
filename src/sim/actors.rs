//! Enemy population: movement, firing, spawn scheduling and splitting
//!
//! The manager is the only writer of its enemy list. During an update it
//! first lets every living enemy act, then runs the spawn scheduler, then
//! sweeps the dead. Removals and newcomers (spawns, split children) are
//! applied only after the pass, so nothing acts on a half-removed enemy
//! and newcomers do not move until the next frame.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::enemy::{Enemy, EnemyId, EnemyIntent, EnemyKind};
use super::geometry::Rect;
use super::projectile::Projectile;
use super::random::{gauss_vec2, one_in};
use crate::consts::SPLIT_CHILDREN;
use crate::settings::{Ruleset, Settings};

/// Everything an actor needs to know about the current frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub dt: f32,
    /// Total simulated seconds, including this frame
    pub elapsed: f32,
    pub screen: Rect,
    pub player_mid: Vec2,
    pub score: f64,
    pub settings: &'a Settings,
}

/// A resolved enemy death
#[derive(Debug, Clone, PartialEq)]
pub struct Kill {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub generation: u32,
    /// Last position (top-left) of the dead enemy
    pub pos: Vec2,
    pub score_value: f64,
    /// Number of split children spawned
    pub children: usize,
}

/// Outcome of one actor pass
#[derive(Debug, Clone, Default)]
pub struct ActorReport {
    /// Enemy shots for the projectile manager
    pub fired: Vec<Projectile>,
    pub kills: Vec<Kill>,
    /// Enemies added by the spawn scheduler
    pub spawned: usize,
    /// Enemies that walked off the arena alive
    pub departed: usize,
}

#[derive(Debug, Clone)]
pub struct ActorManager {
    enemies: Vec<Enemy>,
    spawn_spots: Vec<Vec2>,
    /// Countdown until the scheduler starts rolling again
    time_to_spawn: f32,
    next_id: u32,
}

impl ActorManager {
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let screen = Rect::from_size(settings.screen_size());
        let spawn_spots =
            create_spawn_spots(&screen, settings.spawn_spot_count, settings.spawn_margin, rng);
        log::info!("Generated {} spawn spots", spawn_spots.len());

        Self {
            enemies: Vec::new(),
            spawn_spots,
            time_to_spawn: settings.spawn_check_interval,
            next_id: 1,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn spawn_spots(&self) -> &[Vec2] {
        &self.spawn_spots
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Add an enemy, assigning it a fresh id
    pub fn insert(&mut self, mut enemy: Enemy) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        enemy.id = id;
        self.enemies.push(enemy);
        id
    }

    /// Spawn one enemy of `kind` at a random spawn spot
    pub fn spawn_wave<R: Rng + ?Sized>(
        &mut self,
        kind: EnemyKind,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<EnemyId> {
        let enemy = self.roll_wave(kind, settings, rng)?;
        Some(self.insert(enemy))
    }

    /// Index of the first living enemy overlapping `rect`
    pub fn first_hit(&self, rect: &Rect) -> Option<usize> {
        self.enemies
            .iter()
            .position(|e| e.is_alive() && e.body.rect().intersects(rect))
    }

    /// Damage the enemy at `index`. Returns its id and whether this hit
    /// killed it.
    ///
    /// Indices come from [`Self::first_hit`] within the same pass; an out of
    /// range index is a bug.
    pub fn damage_at(&mut self, index: usize, amount: f32) -> Option<(EnemyId, bool)> {
        debug_assert!(
            index < self.enemies.len(),
            "enemy index {index} out of range ({} enemies)",
            self.enemies.len()
        );
        let Some(enemy) = self.enemies.get_mut(index) else {
            log::error!(
                "Ignoring damage to enemy index {} ({} enemies)",
                index,
                self.enemies.len()
            );
            return None;
        };
        let killed = enemy.take_damage(amount);
        Some((enemy.id, killed))
    }

    /// Run one frame for the whole population
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &FrameContext<'_>, rng: &mut R) -> ActorReport {
        let mut report = ActorReport::default();
        let mut departed: Vec<EnemyId> = Vec::new();

        // 1. Living enemies steer, move and shoot
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            match enemy.update(ctx, rng) {
                Some(EnemyIntent::Fire(projectile)) => report.fired.push(projectile),
                Some(EnemyIntent::Leave) => departed.push(enemy.id),
                None => {}
            }
        }

        // 2. Spawn scheduler
        let mut newcomers: Vec<Enemy> = Vec::new();
        self.time_to_spawn -= ctx.dt;
        if self.time_to_spawn <= 0.0 {
            let range = spawn_range(
                ctx.settings.spawn_rate,
                ctx.settings.spawn_damper,
                ctx.elapsed,
            );
            if one_in(rng, range) {
                let kind = match ctx.settings.ruleset {
                    Ruleset::Basic => Some(EnemyKind::Blob),
                    Ruleset::Extended => pick_extended_kind(
                        rng.random_range(0..20),
                        ctx.score,
                        ctx.settings.tank_score_threshold,
                    ),
                };
                if let Some(enemy) = kind.and_then(|k| self.roll_wave(k, ctx.settings, rng)) {
                    newcomers.push(enemy);
                    report.spawned += 1;
                }
                self.time_to_spawn = ctx.settings.spawn_check_interval;
            }
        }

        // 3. Sweep the dead, splitting where allowed
        let max_generations = ctx.settings.max_generations;
        for enemy in self.enemies.iter().filter(|e| !e.is_alive()) {
            let children = if enemy.can_split(max_generations) {
                for _ in 0..SPLIT_CHILDREN {
                    let pos = gauss_vec2(rng, enemy.body.pos(), ctx.settings.split_jitter);
                    newcomers.push(Enemy::spawn(
                        enemy.kind,
                        enemy.generation + 1,
                        pos,
                        ctx.settings,
                        rng,
                    ));
                }
                SPLIT_CHILDREN
            } else {
                0
            };

            log::debug!(
                "{:?} {:?} (gen {}) died, {} children",
                enemy.kind,
                enemy.id,
                enemy.generation,
                children
            );
            report.kills.push(Kill {
                id: enemy.id,
                kind: enemy.kind,
                generation: enemy.generation,
                pos: enemy.body.pos(),
                score_value: enemy.score_value(),
                children,
            });
        }

        report.departed = departed.len();
        self.enemies
            .retain(|e| e.is_alive() && !departed.contains(&e.id));

        // 4. Newcomers join after the pass
        for enemy in newcomers {
            self.insert(enemy);
        }

        report
    }

    fn roll_wave<R: Rng + ?Sized>(
        &self,
        kind: EnemyKind,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<Enemy> {
        let spot = *self.spawn_spots.choose(rng)?;
        Some(Enemy::spawn(kind, 1, spot, settings, rng))
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}

/// Rejection-sample `count` points from the screen grown by `margin` on
/// every side, keeping only points outside the screen itself.
pub fn create_spawn_spots<R: Rng + ?Sized>(
    screen: &Rect,
    count: usize,
    margin: f32,
    rng: &mut R,
) -> Vec<Vec2> {
    let region = screen.inflate_fraction(margin);
    if !(region.size.x > screen.size.x || region.size.y > screen.size.y) {
        log::warn!("Spawn margin {} leaves no room outside the screen", margin);
        return Vec::new();
    }

    let mut spots = Vec::with_capacity(count);
    while spots.len() < count {
        let candidate = Vec2::new(
            region.left() + rng.random::<f32>() * region.size.x,
            region.top() + rng.random::<f32>() * region.size.y,
        );
        if !screen.contains_point(candidate) {
            spots.push(candidate);
        }
    }
    spots
}

/// Upper bound (exclusive) of the spawn draw: `ceil(rate / (elapsed / damper))`.
///
/// Shrinks as time passes, so each check is more likely to spawn. Clamped
/// to at least 1; no elapsed time yet gives the largest range.
pub fn spawn_range(spawn_rate: f32, damper: f32, elapsed: f32) -> u32 {
    let ramp = elapsed / damper;
    if !(ramp > 0.0) {
        return u32::MAX;
    }
    let range = (spawn_rate / ramp).ceil();
    if !range.is_finite() || range >= u32::MAX as f32 {
        u32::MAX
    } else {
        (range as u32).max(1)
    }
}

/// Chance that a single scheduler check spawns
pub fn spawn_probability(spawn_rate: f32, damper: f32, elapsed: f32) -> f64 {
    1.0 / spawn_range(spawn_rate, damper, elapsed) as f64
}

/// Weighted kind table for the extended ruleset. `roll` is in `[0, 20)`.
/// Tanks only appear once the score passes `tank_threshold`.
pub fn pick_extended_kind(roll: u32, score: f64, tank_threshold: f64) -> Option<EnemyKind> {
    match roll {
        0..13 => Some(EnemyKind::Slime),
        13..16 => Some(EnemyKind::Zombie),
        16..18 => Some(EnemyKind::Gunman),
        _ if score > tank_threshold => Some(EnemyKind::Tank),
        _ => None,
    }
}
