//! Shared control-signal cell
//!
//! The pose pipeline (or any other input device) runs at its own cadence,
//! usually slower than the simulation tick. It publishes a normalized
//! scalar into this cell; the simulation reads the latest value once per
//! tick and never blocks on it. Last write wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// A shared `[-1, 1]` control scalar
///
/// Cloning yields another handle to the same cell, so an input producer
/// can keep writing while the simulation loop reads. The value is stored
/// as `f32` bits in an atomic; a single write is always observed whole.
#[derive(Debug, Clone, Default)]
pub struct ControlSignal(Arc<AtomicU32>);

impl ControlSignal {
    /// A new cell reading as "no input" (0.0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new control value
    ///
    /// Out-of-range values are stored as-is and sanitized on read, so a
    /// sloppy producer cannot push the paddle past its speed cap.
    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Read the current control value, clamped to `[-1, 1]`
    ///
    /// A non-finite value (a producer fed us NaN or infinity) reads as
    /// "no input" rather than poisoning the paddle velocity.
    pub fn get(&self) -> f32 {
        let raw = f32::from_bits(self.0.load(Ordering::Relaxed));
        if raw.is_finite() { raw.clamp(-1.0, 1.0) } else { 0.0 }
    }
}
