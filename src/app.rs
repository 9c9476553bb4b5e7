//! Render loop driver
//!
//! `Demo` ties the control panel, the engine and a time source together and
//! runs one configure/tick/present pass per display refresh. Input events
//! arrive on the same thread between frames.

use std::time::Instant;

use crate::controls::{ControlCommand, ControlPanel, Focus, Key};
use crate::hud::Readout;
use crate::renderer::{Frame, RenderSink, Scene};
use crate::settings::Settings;
use crate::sim::{RunState, SimulationEngine, TickOutcome};

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Demo instance holding all state
pub struct Demo<C: Clock> {
    engine: SimulationEngine,
    panel: ControlPanel,
    clock: C,
    last_state: RunState,
}

impl<C: Clock> Demo<C> {
    pub fn new(panel: ControlPanel, clock: C) -> Self {
        let mut engine = SimulationEngine::new(clock.now_ms());
        engine.set_slow_motion(panel.slow_motion());
        if let Err(err) = engine.configure(panel.params()) {
            log::warn!("Initial params rejected: {err}");
        }
        Self {
            last_state: engine.run_state(),
            engine,
            panel,
            clock,
        }
    }

    pub fn from_settings(settings: &Settings, clock: C) -> Self {
        let mut demo = Self::new(settings.control_panel(), clock);
        if settings.autostart {
            demo.engine.toggle_pause();
            demo.note_transition();
        }
        demo
    }

    /// One display refresh: read the panel, advance, present
    pub fn frame(&mut self, sink: &mut dyn RenderSink) -> TickOutcome {
        if let Err(err) = self.engine.configure(self.panel.params()) {
            log::warn!("Keeping previous params: {err}");
        }
        let outcome = self.engine.tick(self.clock.now_ms());
        self.note_transition();

        sink.present(&self.current_frame());
        outcome
    }

    /// Deliver a key press from the control surface
    pub fn key(&mut self, key: Key, focus: Focus) -> ControlCommand {
        let command = self.panel.handle_key(key, focus);
        match command {
            ControlCommand::PauseResume => {
                self.engine.pause_resume_requested(self.clock.now_ms());
            }
            ControlCommand::ToggleSlowMotion => {
                self.engine.set_slow_motion(self.panel.slow_motion());
            }
            ControlCommand::BlurFocus | ControlCommand::None => {}
        }
        self.note_transition();
        command
    }

    /// Slow-motion checkbox changed
    pub fn set_slow_motion(&mut self, enabled: bool) {
        self.panel.set_slow_motion(enabled);
        self.engine.set_slow_motion(enabled);
    }

    pub fn current_frame(&self) -> Frame {
        Frame::new(
            Scene::build(
                self.engine.params().angle_degrees,
                self.engine.block().position,
            ),
            Readout::capture(&self.engine),
        )
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Sliders
    pub fn panel_mut(&mut self) -> &mut ControlPanel {
        &mut self.panel
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn note_transition(&mut self) {
        let state = self.engine.run_state();
        if state != self.last_state {
            log::info!("{:?} -> {:?}", self.last_state, state);
            self.last_state = state;
        }
    }
}
