//! Simulation error types

use thiserror::Error;

/// Errors the simulation core can surface
///
/// The tick itself is infallible; errors only arise at construction time
/// (bad configuration) or when an external uniform source breaks its
/// `(0, 1]` contract for the Gaussian sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Invalid configuration, rejected before the simulation starts
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Uniform sample outside the half-open interval `(0, 1]`
    #[error("uniform sample {0} outside (0, 1]")]
    Domain(f32),
}
