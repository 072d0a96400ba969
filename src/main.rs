//! Horde headless runner
//!
//! Drives the simulation at a fixed step with a scripted pointer that keeps
//! shooting at the nearest enemy, then logs a JSON summary.
//!
//! Usage: `horde [settings.json] [--frames N]`

use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use horde::consts::FRAME_DT;
use horde::input::{InputEvent, Key, MouseButton};
use horde::renderer::DrawCommand;
use horde::sim::GamePhase;
use horde::{Game, Settings, Vec2};

/// Frames simulated when `--frames` is absent (one minute)
const DEFAULT_FRAMES: u64 = 3600;

/// Frames between scripted shots
const SHOT_INTERVAL: u64 = 20;

struct Args {
    settings_path: Option<String>,
    frames: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        frames: DEFAULT_FRAMES,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .map_err(|e| format!("bad --frames value {:?}: {}", value, e))?;
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag {}", arg)),
            _ => args.settings_path = Some(arg),
        }
    }

    Ok(args)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Horde (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = match &args.settings_path {
        Some(path) => match Settings::load_or_default(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {}", e);
        return ExitCode::FAILURE;
    }

    let render_rate = settings.render_rate;
    let mut game = Game::new(settings);
    log::info!(
        "Game initialized with seed: {} ({} ruleset)",
        game.state().seed,
        game.state().ruleset().as_str()
    );

    let render = render_rate.map(spawn_renderer);
    let render_interval = render_rate.map(|hz| 1.0 / hz.max(1) as f32);
    let mut since_render = 0.0;

    let mut restarts = 0u32;
    for frame in 0..args.frames {
        if game.state().phase == GamePhase::GameOver {
            restarts += 1;
            game.handle_event(&InputEvent::KeyDown(Key::Restart));
        }

        if frame % SHOT_INTERVAL == 0 {
            if let Some(target) = nearest_enemy(&game) {
                game.handle_event(&InputEvent::MouseDown {
                    button: MouseButton::Left,
                    pos: target,
                });
            }
        }

        game.update(FRAME_DT);

        if let (Some((tx, _)), Some(interval)) = (&render, render_interval) {
            since_render += FRAME_DT;
            if since_render >= interval {
                since_render = 0.0;
                // Drop the snapshot if the renderer is still busy
                let _ = tx.try_send(game.render());
            }
        }
    }

    if let Some((tx, handle)) = render {
        drop(tx);
        match handle.join() {
            Ok(drawn) => log::info!("Renderer drew {} frames", drawn),
            Err(_) => log::warn!("Render thread panicked"),
        }
    }

    let state = game.state();
    let summary = serde_json::json!({
        "seed": state.seed,
        "ruleset": state.ruleset().as_str(),
        "frames": args.frames,
        "elapsed": state.elapsed,
        "score": state.score.display(),
        "player_health": state.player.health(),
        "enemies": state.actors.len(),
        "shots_fired": state.shots_fired,
        "restarts": restarts,
        "high_scores": game.high_scores(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => log::info!("Run summary:\n{}", json),
        Err(e) => log::warn!("Could not serialize summary: {}", e),
    }

    ExitCode::SUCCESS
}

fn nearest_enemy(game: &Game) -> Option<Vec2> {
    let origin = game.state().player.midpoint();
    game.state()
        .actors
        .enemies()
        .iter()
        .filter(|e| e.is_alive())
        .map(|e| e.body.midpoint())
        .min_by(|a, b| a.distance_squared(origin).total_cmp(&b.distance_squared(origin)))
}

/// Start a render thread fed with draw-list snapshots. Returns the sender
/// and a handle yielding the number of frames drawn.
fn spawn_renderer(rate: u32) -> (mpsc::SyncSender<Vec<DrawCommand>>, thread::JoinHandle<u64>) {
    let (tx, rx) = mpsc::sync_channel::<Vec<DrawCommand>>(1);
    log::info!("Rendering at {} Hz on a separate thread", rate);

    let handle = thread::spawn(move || {
        let mut drawn = 0u64;
        for commands in rx {
            drawn += 1;
            log::trace!("Frame {}: {} draw commands", drawn, commands.len());
        }
        drawn
    });

    (tx, handle)
}
