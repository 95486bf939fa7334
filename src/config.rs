//! Playfield and tuning configuration
//!
//! A validated bag of dimensions and per-tick speeds. The defaults
//! reproduce the classic layout: grid-thick side walls, paddles two grid
//! units off the top and three off the bottom.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Simulation configuration
///
/// All lengths are pixels, all speeds pixels per tick. Validation happens
/// once at [`crate::Simulation::new`]; a bad value there is a fatal setup
/// error, never a runtime fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Playfield width
    pub field_width: f32,
    /// Playfield height
    pub field_height: f32,
    /// Side wall thickness; the ball reflects off this margin
    pub wall_margin: f32,

    /// Paddle dimensions
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Opponent paddle speed cap
    pub opponent_max_speed: f32,
    /// Player paddle speed cap
    pub player_max_speed: f32,

    /// Ball edge length (the ball is square)
    pub ball_size: f32,
    /// Ball speed along each axis after a paddle hit
    pub ball_speed: f32,

    /// Ticks between a confirmed miss and the ball respawn
    pub reset_delay_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            wall_margin: WALL_MARGIN,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            opponent_max_speed: OPPONENT_MAX_SPEED,
            player_max_speed: PLAYER_MAX_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            reset_delay_ticks: RESET_DELAY_TICKS,
        }
    }
}

impl SimConfig {
    /// Smallest x a paddle's left edge may reach
    pub fn paddle_min_x(&self) -> f32 {
        self.wall_margin
    }

    /// Largest x a paddle's left edge may reach
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.wall_margin - self.paddle_width
    }

    /// Fixed y of the opponent paddle (near the top)
    pub fn opponent_y(&self) -> f32 {
        2.0 * self.wall_margin
    }

    /// Fixed y of the player paddle (near the bottom)
    pub fn player_y(&self) -> f32 {
        self.field_height - 3.0 * self.wall_margin
    }

    /// Check the configuration for values the simulation cannot run with
    ///
    /// The paddle half-width divides the bounce response, so a non-positive
    /// paddle width is rejected here rather than guarded per tick.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.paddle_width > 0.0) {
            return Err(SimError::Config(format!(
                "paddle width must be positive, got {}",
                self.paddle_width
            )));
        }
        if !(self.paddle_height > 0.0) {
            return Err(SimError::Config(format!(
                "paddle height must be positive, got {}",
                self.paddle_height
            )));
        }
        if !(self.ball_size > 0.0) || !(self.ball_speed > 0.0) {
            return Err(SimError::Config(format!(
                "ball size/speed must be positive, got {} / {}",
                self.ball_size, self.ball_speed
            )));
        }
        if !(self.field_width > 0.0) || !(self.field_height > 0.0) {
            return Err(SimError::Config(format!(
                "field dimensions must be positive, got {} x {}",
                self.field_width, self.field_height
            )));
        }
        if !(self.wall_margin >= 0.0) {
            return Err(SimError::Config(format!(
                "wall margin must be non-negative, got {}",
                self.wall_margin
            )));
        }
        if self.paddle_max_x() < self.paddle_min_x() {
            return Err(SimError::Config(format!(
                "playfield too narrow: paddle of width {} does not fit between walls",
                self.paddle_width
            )));
        }
        if !(self.opponent_max_speed > 0.0) || !(self.player_max_speed > 0.0) {
            return Err(SimError::Config(format!(
                "paddle speeds must be positive, got {} / {}",
                self.opponent_max_speed, self.player_max_speed
            )));
        }
        Ok(())
    }
}
