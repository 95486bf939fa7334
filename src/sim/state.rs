//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: two paddles, one ball,
//! the score counters, the RNG stream and the pending ball respawn.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::OpponentAi;
use super::collision::Rect;
use super::rng::rng_from_seed;
use crate::config::SimConfig;

/// A paddle: fixed y for the lifetime of a match, x driven by `dx`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Current horizontal velocity (pixels per tick)
    pub dx: f32,
}

impl Paddle {
    /// A paddle centered horizontally at the given y
    pub fn centered(config: &SimConfig, y: f32) -> Self {
        Self {
            rect: Rect::new(
                config.field_width / 2.0 - config.paddle_width / 2.0,
                y,
                config.paddle_width,
                config.paddle_height,
            ),
            dx: 0.0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity (pixels per tick)
    pub vel: Vec2,
    /// While true the ball is inert: off-field after a miss, waiting for
    /// the scheduled respawn. Blocks duplicate scoring from the same miss.
    pub resetting: bool,
}

impl Ball {
    /// The ball at field center, serving straight down toward the player
    pub fn serve(config: &SimConfig) -> Self {
        Self {
            rect: Self::center_rect(config),
            vel: Vec2::new(0.0, config.ball_speed),
            resetting: false,
        }
    }

    /// Put the ball back into play after a point
    ///
    /// Recentered, horizontal velocity zeroed, vertical velocity aimed by
    /// `serve_dy` (toward the side that just lost the point).
    pub fn respawn(&mut self, config: &SimConfig, serve_dy: f32) {
        self.rect = Self::center_rect(config);
        self.vel = Vec2::new(0.0, serve_dy);
        self.resetting = false;
    }

    fn center_rect(config: &SimConfig) -> Rect {
        Rect::new(
            config.field_width / 2.0 - config.ball_size / 2.0,
            config.field_height / 2.0 - config.ball_size / 2.0,
            config.ball_size,
            config.ball_size,
        )
    }
}

/// A scheduled ball respawn
///
/// The deferred reset is an explicit event checked at the start of each
/// tick rather than a hidden timer callback, so tests can advance the
/// virtual clock tick by tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingReset {
    /// Tick at which the respawn executes
    pub fire_at_tick: u64,
    /// Vertical serve velocity after the respawn
    pub serve_dy: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream for the opponent's aim
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,

    /// AI-controlled paddle near the top
    pub opponent: Paddle,
    /// Human-controlled paddle near the bottom
    pub player: Paddle,
    /// Opponent targeting state
    pub ai: OpponentAi,
    pub ball: Ball,

    /// Points won by the opponent (player missed)
    pub opponent_score: u32,
    /// Points won by the player (opponent missed)
    pub player_score: u32,

    /// Scheduled respawn after a miss, if one is in flight
    pub pending_reset: Option<PendingReset>,
}

impl GameState {
    /// Create a fresh match with the given seed
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: rng_from_seed(seed),
            time_ticks: 0,
            opponent: Paddle::centered(config, config.opponent_y()),
            player: Paddle::centered(config, config.player_y()),
            ai: OpponentAi::default(),
            ball: Ball::serve(config),
            opponent_score: 0,
            player_score: 0,
            pending_reset: None,
        }
    }

    /// Immutable copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            opponent: self.opponent.rect,
            player: self.player.rect,
            ball: self.ball.rect,
            opponent_score: self.opponent_score,
            player_score: self.player_score,
            tick: self.time_ticks,
        }
    }
}

/// Per-tick render snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub opponent: Rect,
    pub player: Rect,
    pub ball: Rect,
    pub opponent_score: u32,
    pub player_score: u32,
    pub tick: u64,
}
