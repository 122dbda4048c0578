use particles_core::GestureSignal;

// Mouse-driven stand-in for the camera gesture recognizer.

pub const WHEEL_OPENNESS_STEP: f32 = 0.1; // per wheel line
pub const PIXELS_PER_WHEEL_LINE: f32 = 40.0;

#[derive(Clone, Copy, Debug)]
pub struct PointerGesture {
    /// Cursor in window uv, \[0, 1\] with v growing downward.
    pub uv: [f32; 2],
    /// Left button held reads as a fully open hand.
    pub held: bool,
    /// Openness while the button is up, nudged by the wheel.
    pub resting_openness: f32,
}

impl Default for PointerGesture {
    fn default() -> Self {
        Self {
            uv: [0.5, 0.5],
            held: false,
            resting_openness: GestureSignal::NEUTRAL.openness,
        }
    }
}

impl PointerGesture {
    pub fn move_to(&mut self, px: f32, py: f32, width: f32, height: f32) {
        self.uv = window_uv(px, py, width, height);
    }

    pub fn wheel_lines(&mut self, lines: f32) {
        self.resting_openness =
            (self.resting_openness + lines * WHEEL_OPENNESS_STEP).clamp(0.0, 1.0);
    }

    pub fn signal(&self) -> GestureSignal {
        let [x, y] = uv_to_hand(self.uv);
        let openness = if self.held { 1.0 } else { self.resting_openness };
        GestureSignal::new(openness, x, y)
    }
}

#[inline]
pub fn window_uv(px: f32, py: f32, width: f32, height: f32) -> [f32; 2] {
    if width > 0.0 && height > 0.0 {
        [(px / width).clamp(0.0, 1.0), (py / height).clamp(0.0, 1.0)]
    } else {
        [0.5, 0.5]
    }
}

/// Window uv to hand coordinates: x right, y up, both in \[-1, 1\].
#[inline]
pub fn uv_to_hand(uv: [f32; 2]) -> [f32; 2] {
    [uv[0] * 2.0 - 1.0, 1.0 - uv[1] * 2.0]
}
