//! The simulation engine: owner of all mutable simulation state
//!
//! `configure`, `tick`, `toggle_pause`, `reset` and the slow-motion toggles
//! are the only mutators. Everything else is a read accessor.

use super::forces::Forces;
use super::state::{BlockState, ControlParams, FinalSnapshot, RunState, SimulationClock};
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct SimulationEngine {
    pub(super) block: BlockState,
    pub(super) clock: SimulationClock,
    pub(super) run_state: RunState,
    pub(super) snapshot: Option<FinalSnapshot>,
    pub(super) slow_motion: bool,
    pub(super) params: ControlParams,
}

impl SimulationEngine {
    /// Create a freshly reset, paused engine
    pub fn new(now_ms: f64) -> Self {
        let params = ControlParams::default();
        Self {
            block: BlockState::at_rest(params.mass),
            clock: SimulationClock::new(now_ms),
            run_state: RunState::Paused,
            snapshot: None,
            slow_motion: false,
            params,
        }
    }

    /// Update the control params used by the next tick.
    ///
    /// Invalid params are rejected and the previous ones stay in effect.
    pub fn configure(&mut self, params: ControlParams) -> SimResult<()> {
        if !(params.mass.is_finite() && params.mass > 0.0) {
            log::warn!("Rejected mass {} (keeping {})", params.mass, self.params.mass);
            return Err(SimError::InvalidMass(params.mass));
        }
        for (name, value) in [
            ("angle", params.angle_degrees),
            ("friction coefficient", params.friction_coefficient),
        ] {
            if !value.is_finite() {
                log::warn!("Rejected {name} {value}");
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        self.params = params;
        Ok(())
    }

    /// Flip between Paused and Running. Does nothing once Completed.
    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
            RunState::Completed => return,
        };
        log::debug!("Run state -> {:?}", self.run_state);
    }

    /// Put the block back at the top of the track, paused
    pub fn reset(&mut self, now_ms: f64) {
        self.block = BlockState::at_rest(self.params.mass);
        self.clock = SimulationClock::new(now_ms);
        self.snapshot = None;
        self.run_state = RunState::Paused;
        log::debug!("Simulation reset");
    }

    pub fn toggle_slow_motion(&mut self) {
        self.slow_motion = !self.slow_motion;
    }

    pub fn set_slow_motion(&mut self, enabled: bool) {
        self.slow_motion = enabled;
    }

    /// Pause/resume key: resets a completed run, toggles pause otherwise
    pub fn pause_resume_requested(&mut self, now_ms: f64) {
        if self.run_state == RunState::Completed {
            self.reset(now_ms);
        } else {
            self.toggle_pause();
        }
    }

    /// Reset request; only honoured once the run has completed
    pub fn reset_requested(&mut self, now_ms: f64) {
        if self.run_state == RunState::Completed {
            self.reset(now_ms);
        }
    }

    pub fn block(&self) -> &BlockState {
        &self.block
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn final_snapshot(&self) -> Option<&FinalSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn slow_motion(&self) -> bool {
        self.slow_motion
    }

    pub fn params(&self) -> &ControlParams {
        &self.params
    }

    /// Force decomposition for the current params
    pub fn forces(&self) -> Forces {
        Forces::resolve(&self.params)
    }
}
