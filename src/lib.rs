//! Motion Pong - a headless, deterministic Pong simulation core
//!
//! The player paddle is driven by a normalized control signal in `[-1, 1]`
//! produced by an external collaborator (originally a webcam pose-estimation
//! pipeline). Rendering is equally external: each tick yields an immutable
//! [`sim::Snapshot`] for whatever draws the game.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, AI)
//! - `config`: Playfield dimensions and speed tuning with validation
//! - `control`: Shared last-write-wins control cell for input producers
//! - `runner`: Per-display-frame loop driver around the simulation

pub mod config;
pub mod control;
pub mod error;
pub mod runner;
pub mod sim;

pub use config::SimConfig;
pub use control::ControlSignal;
pub use error::SimError;
pub use runner::Simulation;

/// Game configuration constants
///
/// Everything derives from the grid unit, matching the playfield's
/// wall/paddle proportions. Velocities are in pixels per tick.
pub mod consts {
    /// Base size unit; walls, paddles and the ball are all grid-relative
    pub const GRID_SIZE: f32 = 6.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Side wall thickness (the ball reflects off this margin)
    pub const WALL_MARGIN: f32 = GRID_SIZE;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 5.0 * GRID_SIZE;
    pub const PADDLE_HEIGHT: f32 = GRID_SIZE;
    /// Opponent paddle speed cap (pixels per tick)
    pub const OPPONENT_MAX_SPEED: f32 = 4.0 * GRID_SIZE / 15.0;
    /// Player paddle speed cap (pixels per tick)
    pub const PLAYER_MAX_SPEED: f32 = 2.0 * GRID_SIZE / 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = GRID_SIZE;
    pub const BALL_SPEED: f32 = GRID_SIZE / 3.0;

    /// Nominal tick rate the reset delay is calibrated against
    pub const TICK_RATE_HZ: u32 = 60;
    /// Ticks between a confirmed miss and the ball respawn (1 second)
    pub const RESET_DELAY_TICKS: u64 = TICK_RATE_HZ as u64;
}
