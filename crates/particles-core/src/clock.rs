use instant::Instant;

const FPS_WINDOW_SEC: f32 = 1.0;

/// Timing for one displayed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// Host-side frame clock: elapsed time for `tick` plus a rolling FPS figure.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    pub fn frame(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;

        self.window_frames += 1;
        let window = (now - self.window_start).as_secs_f32();
        if window >= FPS_WINDOW_SEC {
            self.fps = self.window_frames as f32 / window;
            self.window_frames = 0;
            self.window_start = now;
        }

        FrameTime {
            elapsed: (now - self.start).as_secs_f32(),
            dt,
        }
    }

    /// Frames per second over the last full window, 0 until one has elapsed.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
