//! Per-frame integration
//!
//! Advances the block by the wall-clock time since the previous tick using
//! semi-implicit Euler: velocity first, then position with the new velocity.

use super::engine::SimulationEngine;
use super::forces::Forces;
use super::state::{BlockState, FinalSnapshot, RunState};
use crate::consts::*;

/// What a call to [`SimulationEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; only the tick timestamp was refreshed
    Idle,
    /// Integrated one step
    Advanced,
    /// This step carried the block to the end of the track
    Completed,
}

impl SimulationEngine {
    /// Advance the simulation to `now_ms` (monotonic milliseconds).
    ///
    /// While not running the timestamp is still refreshed, so resuming never
    /// integrates over the time spent paused.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if self.run_state != RunState::Running {
            self.clock.last_tick_ms = now_ms;
            return TickOutcome::Idle;
        }

        let scale = if self.slow_motion { SLOW_MOTION_FACTOR } else { 1.0 };
        let dt = self.clock.advance(now_ms, scale);

        self.block.mass = self.params.mass;
        debug_assert!(self.block.mass > 0.0);
        let forces = Forces::resolve(&self.params);

        if self.params.is_flat() {
            integrate_flat(&mut self.block, &forces, self.params.friction_coefficient, dt);
        } else {
            integrate_inclined(&mut self.block, &forces, dt);
        }

        // Reported as the final stats if this step finishes the run
        let pre_boundary = (self.block.acceleration, self.block.velocity);

        self.block.position += self.block.velocity * dt;

        if self.block.position <= 0.0 {
            self.block.pin(0.0);
        } else if self.block.position >= TRACK_LENGTH {
            self.block.pin(TRACK_LENGTH);
            self.run_state = RunState::Completed;
            self.snapshot = Some(FinalSnapshot {
                acceleration: pre_boundary.0,
                velocity: pre_boundary.1,
                elapsed: self.clock.elapsed,
            });
            log::debug!(
                "Track complete at {:.2}s (v={:.1}px/s)",
                self.clock.elapsed,
                pre_boundary.1
            );
            return TickOutcome::Completed;
        }

        TickOutcome::Advanced
    }
}

/// Flat ground: kinetic friction decelerates the block toward rest and never
/// pushes it backwards. A step that would reverse the velocity stops the block
/// where it is, so that tick contributes no position advance.
fn integrate_flat(block: &mut BlockState, forces: &Forces, friction_coefficient: f32, dt: f32) {
    if block.velocity.abs() < STOP_SPEED_THRESHOLD {
        block.velocity = 0.0;
        block.acceleration = 0.0;
        return;
    }

    let before = block.velocity;
    let direction = -before.signum();
    block.acceleration =
        direction * forces.flat_friction(friction_coefficient) / block.mass * PIXELS_PER_METER;
    block.velocity += block.acceleration * dt;

    let reversed = block.velocity.signum() != before.signum();
    if reversed || block.velocity.abs() < STOP_SPEED_THRESHOLD {
        block.velocity = 0.0;
        block.acceleration = 0.0;
    }
}

/// Incline: constant net force, no rest snapping. Velocity may cross zero;
/// the lower track boundary catches a block pushed back past the start.
fn integrate_inclined(block: &mut BlockState, forces: &Forces, dt: f32) {
    block.acceleration = forces.net_inclined() / block.mass * PIXELS_PER_METER;
    block.velocity += block.acceleration * dt;
}
