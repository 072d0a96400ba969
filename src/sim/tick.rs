//! Per-frame simulation step and input handling
//!
//! Frame order: player (movement, contact damage) → projectiles (move,
//! cull, collide) → actors (move, fire, spawn, deaths) → score.

use super::actors::FrameContext;
use super::state::{GameEvent, GamePhase, GameState};
use crate::input::{InputEvent, Key, MouseButton};

/// Advance the game by `dt` seconds. Does nothing unless playing.
pub fn update(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.elapsed += dt;
    state.frame += 1;
    let was_alive = state.player.is_alive();

    // 1. Player
    state.player.update(dt, state.actors.enemies());

    // 2. Projectiles
    let impacts = state.projectiles.update(
        dt,
        &state.screen,
        &mut state.actors,
        &mut state.player,
    );
    events.extend(impacts.into_iter().map(GameEvent::ProjectileHit));

    // 3. Actors
    let ctx = FrameContext {
        dt,
        elapsed: state.elapsed,
        screen: state.screen,
        player_mid: state.player.midpoint(),
        score: state.score.score(),
        settings: &state.settings,
    };
    let report = state.actors.update(&ctx, &mut state.rng);

    for projectile in report.fired {
        state.projectiles.add_projectile(projectile);
    }
    if report.spawned > 0 {
        events.push(GameEvent::EnemiesSpawned(report.spawned));
    }

    // 4. Score
    for kill in report.kills {
        state.score.record_kill(&kill);
        events.push(GameEvent::EnemyKilled(kill));
    }

    if was_alive && !state.player.is_alive() {
        log::info!("Player died after {:.1}s", state.elapsed);
        events.push(GameEvent::PlayerDied);

        if state.ruleset().has_game_over() {
            state.phase = GamePhase::GameOver;
            let summary = state.summary();
            log::info!(
                "Game over: score {} in {:.1}s",
                summary.score,
                summary.elapsed
            );
            events.push(GameEvent::GameOver(summary));
        }
    }

    events
}

/// Apply one input event. Returns true when the event asks for a restart
/// of a finished run.
pub fn handle_event(state: &mut GameState, event: &InputEvent) -> bool {
    match *event {
        InputEvent::KeyDown(key) => match key {
            Key::Escape => toggle_pause(state),
            Key::Restart => return state.phase == GamePhase::GameOver,
            _ => set_move_key(state, key, true),
        },
        InputEvent::KeyUp(key) => set_move_key(state, key, false),
        InputEvent::MouseMove(pos) => state.pointer = pos,
        InputEvent::MouseDown { button, pos } => {
            state.pointer = pos;
            if button == MouseButton::Left && state.phase == GamePhase::Playing {
                if let Some(projectile) = state.player.fire(pos) {
                    state.projectiles.add_projectile(projectile);
                    state.shots_fired += 1;
                }
            }
        }
    }
    false
}

fn set_move_key(state: &mut GameState, key: Key, held: bool) {
    let keys = &mut state.player.keys;
    match key {
        Key::Up => keys.up = held,
        Key::Down => keys.down = held,
        Key::Left => keys.left = held,
        Key::Right => keys.right = held,
        _ => {}
    }
}

fn toggle_pause(state: &mut GameState) {
    state.phase = match state.phase {
        GamePhase::Playing => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Playing,
        GamePhase::GameOver => GamePhase::GameOver,
    };
    log::info!("Phase now {:?}", state.phase);
}
