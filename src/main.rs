//! Bounce Arena entry point
//!
//! Headless demo driver: builds a simulation, scripts a short drag/flick
//! interaction, and runs a fixed number of ticks while logging what the
//! balls are doing. Hook a real renderer and pointer source up to the
//! library for the interactive version.
//!
//! Usage: `bounce-arena [seed] [config.json]`
//!
//! Set `RUST_LOG=debug` to see per-event interaction logs.

use glam::Vec2;

use bounce_arena::render::{RecordingRenderer, render};
use bounce_arena::sim::{PointerEvent, SimState, tick};
use bounce_arena::SimConfig;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .map(|s| s.parse().expect("seed must be an integer"))
        .unwrap_or(0xB0B);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read config {path}: {e}"));
            serde_json::from_str(&json)
                .unwrap_or_else(|e| panic!("cannot parse config {path}: {e}"))
        }
        None => SimConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("invalid config: {e}");
        std::process::exit(1);
    }

    let mut state = match SimState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("spawn failed: {e}");
            std::process::exit(1);
        }
    };

    log::info!("running 600 ticks with a scripted drag on ball 0");
    let drag_to = Vec2::new(
        state.config.arena_width / 2.0,
        state.config.arena_height / 2.0,
    );

    for frame in 0..600u32 {
        // Script: grab ball 0 wherever it is at tick 60, pull it toward the
        // arena center for two seconds of frames, release for the flick,
        // then let it fly.
        match frame {
            60 => {
                let grab_at = state.balls[0].pos;
                state.pointer_event(PointerEvent::Press(grab_at));
            }
            61..=180 => state.pointer_event(PointerEvent::Move(drag_to)),
            181 => state.pointer_event(PointerEvent::Release),
            _ => {}
        }

        tick(&mut state);

        if frame % 120 == 0 {
            let speed_sum: f32 = state.balls.iter().map(|b| b.vel.length()).sum();
            log::info!(
                "tick {:4}: ball 0 at ({:6.1}, {:6.1}), total speed {:.2}",
                state.time_ticks,
                state.balls[0].pos.x,
                state.balls[0].pos.y,
                speed_sum
            );
        }
    }

    // Final frame hand-off, stand-in for a real rendering surface
    let mut frame = RecordingRenderer::default();
    render(&state, &mut frame);
    println!("simulated {} ticks, {} balls drawn", state.time_ticks, frame.circles.len());
    for (center, radius, color) in &frame.circles {
        println!(
            "  ({:6.1}, {:6.1}) r={:4.1} rgb={:?}",
            center.x,
            center.y,
            radius,
            color.to_rgb8()
        );
    }
}
