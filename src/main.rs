//! Ramp Slide entry point
//!
//! Runs the demo headless: a manual clock paced at the configured frame
//! rate drives the render loop, and a log sink reports what a canvas would
//! draw.

use ramp_slide::hud::Readout;
use ramp_slide::renderer::{Frame, RenderSink};
use ramp_slide::sim::TickOutcome;
use ramp_slide::{Demo, ManualClock, Settings};

/// Logs a readout line about twice a second
struct LogSink {
    frames: u64,
    every: u64,
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &Frame) {
        if self.frames % self.every == 0 {
            let readout = &frame.readout;
            let center = frame.scene.block_center();
            log::info!(
                "{} | block ({:.1}, {:.1}) | v {} | a {}",
                readout.time_text(),
                center.x,
                center.y,
                readout.velocity_text(),
                readout.acceleration_text(),
            );
        }
        self.frames += 1;
    }
}

fn print_summary(readout: &Readout) {
    println!(
        "mass {} kg | angle {}° | μ {}",
        readout.mass_text(),
        readout.angle_text(),
        readout.friction_text()
    );
    match readout.final_stats {
        Some(stats) => {
            for line in stats.lines() {
                println!("{line}");
            }
        }
        None => {
            let status = readout.status.map(|s| s.label()).unwrap_or("Running");
            println!("{status} | {}", readout.time_text());
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Ramp Slide (headless) starting...");

    let settings = Settings::load();
    let interval_ms = settings.frame_interval_ms();
    let mut sink = LogSink {
        frames: 0,
        every: u64::from(settings.frame_rate_hz.max(2) / 2),
    };

    let mut demo = Demo::from_settings(&settings, ManualClock::default());
    loop {
        demo.clock_mut().advance(interval_ms);
        let outcome = demo.frame(&mut sink);
        if outcome != TickOutcome::Advanced {
            // Completed, or sitting paused with nothing to integrate
            break;
        }
        if demo.engine().clock().elapsed >= settings.max_sim_seconds {
            log::info!("Stopping after {:.1}s of simulated time", settings.max_sim_seconds);
            break;
        }
    }

    print_summary(&demo.current_frame().readout);
}
