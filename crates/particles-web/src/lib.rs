//! Browser boundary for the particle engine.
//!
//! The page owns the camera, the remote gesture recognizer and the WebGL
//! draw call. It posts readings with `setGesture` whenever the recognizer
//! answers, calls `tick` from `requestAnimationFrame` and uploads
//! `positions()` into its point geometry.

use particles_core::{
    EngineConfig, FrameClock, ParticleEngine, ShapeId, DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particles-web ready");
}

#[wasm_bindgen]
pub struct WebParticles {
    engine: ParticleEngine,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebParticles {
    /// `count` defaults to the host default and is clamped to
    /// `MAX_PARTICLE_COUNT`; `seed` makes the clouds reproducible, otherwise
    /// they are seeded from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(count: Option<u32>, seed: Option<u32>) -> Result<WebParticles, JsError> {
        let requested = count.map_or(DEFAULT_PARTICLE_COUNT, |c| c as usize);
        let count = requested.min(MAX_PARTICLE_COUNT);
        if count != requested {
            log::warn!("[web] particle count {requested} clamped to {count}");
        }
        let config = EngineConfig::default().with_count(count);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(u64::from(seed)),
            None => StdRng::from_entropy(),
        };
        let engine = ParticleEngine::with_rng(config, rng)?;
        Ok(WebParticles {
            engine,
            clock: FrameClock::new(),
        })
    }

    /// Latest recognizer reading. Out-of-range values are clamped.
    #[wasm_bindgen(js_name = setGesture)]
    pub fn set_gesture(&self, openness: f32, x: f32, y: f32) {
        self.engine.set_gesture(openness, x, y);
    }

    /// Select a shape by name ("Heart", "saturn", ...). Unknown names
    /// collapse the cloud to the origin.
    #[wasm_bindgen(js_name = setShape)]
    pub fn set_shape(&mut self, name: &str) {
        match name.parse::<ShapeId>() {
            Ok(shape) => self.engine.set_shape(shape),
            Err(e) => {
                log::warn!("[web] {e}; collapsing to origin");
                self.engine.collapse_to_origin();
            }
        }
    }

    #[wasm_bindgen(js_name = setShapeIndex)]
    pub fn set_shape_index(&mut self, index: u32) {
        self.engine.set_shape_index(index);
    }

    #[wasm_bindgen(js_name = setParticleCount)]
    pub fn set_particle_count(&mut self, count: u32) {
        self.engine.set_particle_count(count as usize);
    }

    /// Advance one frame; call once per `requestAnimationFrame`.
    pub fn tick(&mut self, elapsed_secs: f32) {
        self.clock.frame();
        self.engine.tick(elapsed_secs);
    }

    /// Copy of the render positions, `particleCount * 3` floats.
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.engine.render_positions_flat())
    }

    #[wasm_bindgen(getter, js_name = rotationY)]
    pub fn rotation_y(&self) -> f32 {
        self.engine.transform().rotation_y
    }

    #[wasm_bindgen(getter, js_name = rotationZ)]
    pub fn rotation_z(&self) -> f32 {
        self.engine.transform().rotation_z
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.engine.particle_count() as u32
    }

    #[wasm_bindgen(getter, js_name = shapeName)]
    pub fn shape_name(&self) -> Option<String> {
        self.engine.shape().map(|s| s.name().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn openness(&self) -> f32 {
        self.engine.smoothed_gesture().openness
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
