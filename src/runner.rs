//! Simulation loop driver
//!
//! The host owns the frame cadence (requestAnimationFrame, a game engine's
//! frame callback, or a plain timed loop); this type owns everything else.
//! Call [`Simulation::frame`] once per display frame: it reads the latest
//! control value, advances one tick and hands back a render snapshot.

use crate::config::SimConfig;
use crate::control::ControlSignal;
use crate::error::SimError;
use crate::sim::{GameState, Snapshot, TickInput, tick};

/// A running match: game state plus the shared control cell
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    state: GameState,
    control: ControlSignal,
}

impl Simulation {
    /// Build a simulation, validating the configuration up front
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let state = GameState::new(&config, seed);
        log::info!("simulation ready (seed {seed})");
        Ok(Self {
            config,
            state,
            control: ControlSignal::new(),
        })
    }

    /// Handle for input producers; clones share the same cell
    pub fn control(&self) -> ControlSignal {
        self.control.clone()
    }

    /// Advance one tick and return the snapshot for this frame
    ///
    /// Reads the control cell exactly once, so a producer updating
    /// mid-tick is picked up on the next frame.
    pub fn frame(&mut self) -> Snapshot {
        let input = TickInput {
            control: Some(self.control.get()),
        };
        tick(&mut self.state, &self.config, &input);
        self.state.snapshot()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
