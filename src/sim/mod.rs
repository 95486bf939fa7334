//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete per-frame ticks only
//! - Seeded RNG only
//! - No rendering, input-device or platform dependencies

pub mod ai;
pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use ai::OpponentAi;
pub use collision::{Rect, paddle_bounce_dx};
pub use rng::{gaussian, gaussian_from_uniforms};
pub use state::{Ball, GameState, Paddle, PendingReset, Snapshot};
pub use tick::{TickInput, tick};
