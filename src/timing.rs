//! Measuring elapsed time against the monotonic clock.

use std::hint;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::tour::{TourError, Transcript};

/// Remembers when it was started and reports how long ago that was.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time as fractional seconds.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let lap = now - self.start;
        self.start = now;
        lap
    }
}

/// Runs `action` once and returns how long it took in milliseconds.
pub fn time_action_ms<F: FnOnce()>(action: F) -> f64 {
    let watch = Stopwatch::start();
    action();
    watch.elapsed().as_secs_f64() * 1000.0
}

/// A loop that the optimizer is not allowed to remove.
pub fn busy_loop(iterations: u64) {
    for i in 0..iterations {
        let a = hint::black_box(i);
        hint::black_box(a * 10);
    }
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let watch = Stopwatch::start();
    busy_loop(1_000_000);
    let secs = watch.elapsed_secs();
    debug!(secs, "busy loop finished");
    out.token(format_args!("Seconds:{secs}"))?;

    let ms = time_action_ms(|| busy_loop(10_000));
    out.token(format_args!("Milliseconds:{ms:.3}"))?;

    Ok(())
}
