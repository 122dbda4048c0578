//! Simulated gesture producer.
//!
//! Stands in for the remote recognizer: a background thread posts a slowly
//! "breathing" hand at the recognizer's cadence (about two readings per
//! second), so the render loop sees sparse, stepwise input it has to smooth.

use particles_core::{GestureMailbox, GestureSignal};
use std::f32::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const SIM_INTERVAL: Duration = Duration::from_millis(500);
const BREATH_PERIOD_SEC: f32 = 6.0;
const DRIFT_PERIOD_X_SEC: f32 = 17.0;
const DRIFT_PERIOD_Y_SEC: f32 = 11.0;

/// Reading the simulated hand produces `t` seconds after it started.
pub fn breathing_signal(t: f32) -> GestureSignal {
    GestureSignal::new(
        0.5 - 0.5 * (TAU * t / BREATH_PERIOD_SEC).cos(),
        0.6 * (TAU * t / DRIFT_PERIOD_X_SEC).sin(),
        0.4 * (TAU * t / DRIFT_PERIOD_Y_SEC).sin(),
    )
}

pub struct BreathingSource {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl BreathingSource {
    pub fn spawn(mailbox: GestureMailbox) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("gesture-sim".into())
            .spawn(move || {
                let start = Instant::now();
                while !stop_flag.load(Ordering::Relaxed) {
                    mailbox.post(breathing_signal(start.elapsed().as_secs_f32()));
                    thread::park_timeout(SIM_INTERVAL);
                }
                log::debug!(
                    "[sim] gesture producer stopped after {} readings",
                    mailbox.posted_count()
                );
            })?;
        log::info!("[sim] breathing gesture producer started");
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::warn!("[sim] gesture producer panicked");
            }
        }
    }
}

impl Drop for BreathingSource {
    fn drop(&mut self) {
        self.shutdown();
    }
}
