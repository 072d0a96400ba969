//! Rendering module
//!
//! Turns a game state into an owned list of draw commands. The list is a
//! snapshot: a host may hand it to another thread without touching the
//! live simulation.

pub mod shapes;

use glam::Vec2;

pub use shapes::{DrawCommand, Shape};

use crate::sim::{Color, GamePhase, GameState, Rect};

/// Pointer cursor radius
pub const CURSOR_RADIUS: f32 = 4.0;

/// Health bar geometry: 3/4 of the screen wide, 1/8 tall, at the origin
pub fn health_bar_rect(screen: &Rect) -> Rect {
    Rect::new(
        screen.pos,
        Vec2::new(screen.size.x * 0.75, screen.size.y / 8.0),
    )
}

/// Build the draw list for one frame
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        4 + state.projectiles.len() + state.actors.len(),
    );

    commands.push(shapes::rect(&state.screen, Color::WHITE));

    for projectile in state.projectiles.projectiles() {
        commands.push(shapes::body_ellipse(&projectile.body));
    }
    commands.push(shapes::body_rect(&state.player.body));
    for enemy in state.actors.enemies() {
        commands.push(shapes::body_rect(&enemy.body));
    }

    draw_hud(state, &mut commands);

    if state.phase == GamePhase::GameOver {
        let panel = Rect::new(state.screen.size * 0.25, state.screen.size * 0.5);
        commands.push(shapes::rect(&panel, Color::BLACK));
        commands.push(shapes::rect_outline(&panel, Color::BRIGHT_RED, 4.0));
    } else {
        commands.push(shapes::circle(state.pointer, CURSOR_RADIUS, Color::BRIGHT_RED));
    }

    commands
}

fn draw_hud(state: &GameState, commands: &mut Vec<DrawCommand>) {
    let bar = health_bar_rect(&state.screen);
    let hud = state.hud();
    let filled = Rect::new(bar.pos, Vec2::new(bar.size.x * hud.health_fraction, bar.size.y));

    commands.push(shapes::rect(&bar, Color::RED));
    commands.push(shapes::rect(&filled, Color::GREEN));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Ruleset, Settings};

    #[test]
    fn test_render_counts() {
        let state = GameState::new(Settings::for_ruleset(Ruleset::Basic), 1);
        let commands = render(&state);
        // background, player, one enemy, two health bars, cursor
        assert_eq!(commands.len(), 6);
        assert!(matches!(commands.last().unwrap().shape, Shape::Circle { .. }));
    }

    #[test]
    fn test_health_bar_shrinks_with_damage() {
        let mut state = GameState::new(Settings::for_ruleset(Ruleset::Basic), 1);
        state.player.take_damage(50.0);
        let commands = render(&state);
        let green = commands
            .iter()
            .find(|c| c.color == Color::GREEN)
            .expect("health bar drawn");
        let Shape::Rect { size, .. } = green.shape else {
            panic!("health bar is a rect");
        };
        let full = health_bar_rect(&state.screen);
        assert!((size.x - full.size.x * 0.5).abs() < 1e-3);
    }
}
