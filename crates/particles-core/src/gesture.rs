//! Gesture input: the raw signal, its per-frame smoother and the
//! last-value-wins mailbox producers write into.
//!
//! Sign convention (including any webcam mirroring) belongs to the producer.
//! The engine uses `x` and `y` exactly as posted.

use crate::constants::SMOOTHING_FACTOR;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One hand reading. `openness` in \[0, 1\], `x` and `y` in \[-1, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSignal {
    pub openness: f32,
    pub x: f32,
    pub y: f32,
}

impl GestureSignal {
    /// Half-open hand, centered.
    pub const NEUTRAL: GestureSignal = GestureSignal {
        openness: 0.5,
        x: 0.0,
        y: 0.0,
    };

    pub const fn new(openness: f32, x: f32, y: f32) -> Self {
        Self { openness, x, y }
    }

    /// Clamp every channel into its documented range. NaN maps to the
    /// neutral value for that channel.
    pub fn clamped(self) -> Self {
        Self {
            openness: clamp_or(self.openness, 0.0, 1.0, Self::NEUTRAL.openness),
            x: clamp_or(self.x, -1.0, 1.0, Self::NEUTRAL.x),
            y: clamp_or(self.y, -1.0, 1.0, Self::NEUTRAL.y),
        }
    }
}

impl Default for GestureSignal {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(lo, hi)
    }
}

// ---------------- Smoother ----------------

/// Exponential smoothing with a fixed per-frame factor.
///
/// Each channel moves `factor * (raw - smoothed)` per update. With `factor`
/// in (0, 1] this converges monotonically and never overshoots.
#[derive(Clone, Debug)]
pub struct GestureSmoother {
    state: GestureSignal,
    factor: f32,
}

impl GestureSmoother {
    pub fn new(factor: f32) -> Self {
        Self::with_state(factor, GestureSignal::NEUTRAL)
    }

    /// `factor` is clamped into (0, 1]; NaN falls back to [`SMOOTHING_FACTOR`].
    pub fn with_state(factor: f32, state: GestureSignal) -> Self {
        let factor = if factor.is_nan() {
            SMOOTHING_FACTOR
        } else {
            factor.clamp(f32::MIN_POSITIVE, 1.0)
        };
        Self {
            state: state.clamped(),
            factor,
        }
    }

    pub fn update(&mut self, raw: GestureSignal) -> GestureSignal {
        let raw = raw.clamped();
        let k = self.factor;
        self.state.openness += (raw.openness - self.state.openness) * k;
        self.state.x += (raw.x - self.state.x) * k;
        self.state.y += (raw.y - self.state.y) * k;
        self.state
    }

    pub fn current(&self) -> GestureSignal {
        self.state
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

// ---------------- Mailbox ----------------

/// Single-slot, last-value-wins handoff between a gesture producer (any
/// thread, any cadence) and the render loop.
///
/// Clones share the slot. Reading never waits for a new value: the consumer
/// always gets the most recent reading, or the initial one if nothing has
/// been posted yet.
#[derive(Clone, Debug)]
pub struct GestureMailbox {
    slot: Arc<Mutex<GestureSignal>>,
    posted: Arc<AtomicU64>,
}

impl GestureMailbox {
    pub fn new(initial: GestureSignal) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial.clamped())),
            posted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the stored reading wholesale. Out-of-range values are clamped.
    pub fn post(&self, signal: GestureSignal) {
        let signal = signal.clamped();
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = signal;
        self.posted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn latest(&self) -> GestureSignal {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of readings posted so far, across all handles.
    pub fn posted_count(&self) -> u64 {
        self.posted.load(Ordering::Relaxed)
    }
}

impl Default for GestureMailbox {
    fn default() -> Self {
        Self::new(GestureSignal::NEUTRAL)
    }
}
