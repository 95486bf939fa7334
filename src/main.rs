//! Motion Pong headless demo
//!
//! Runs the simulation at the nominal tick rate with a scripted control
//! signal standing in for the pose pipeline: the "player" tracks the ball
//! imperfectly, so both sides score. Prints the final snapshot as JSON.

use std::time::Duration;

use motion_pong::consts::TICK_RATE_HZ;
use motion_pong::{SimConfig, Simulation};

/// Demo length in ticks (one minute of play)
const DEMO_TICKS: u64 = 60 * TICK_RATE_HZ as u64;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut sim = match Simulation::new(SimConfig::default(), seed) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            std::process::exit(1);
        }
    };
    log::info!("running {DEMO_TICKS} ticks at {TICK_RATE_HZ} Hz (seed {seed})");

    let control = sim.control();
    let frame_time = Duration::from_secs(1) / TICK_RATE_HZ;
    let mut last_score = (0, 0);

    let mut snapshot = sim.frame();
    for _ in 1..DEMO_TICKS {
        // Scripted stand-in for the pose-derived signal: steer toward the
        // ball, saturating well before the edges so play stays fallible
        let gap = snapshot.ball.center_x() - snapshot.player.center_x();
        control.set((gap / 40.0).clamp(-1.0, 1.0));

        snapshot = sim.frame();

        let score = (snapshot.opponent_score, snapshot.player_score);
        if score != last_score {
            log::info!(
                "tick {}: opponent {} - player {}",
                snapshot.tick,
                score.0,
                score.1
            );
            last_score = score;
        }

        std::thread::sleep(frame_time);
    }

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
