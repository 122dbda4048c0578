mod input;
mod keys;
mod palette;
mod render;
mod sim;

use keys::Action;
use particles_core::{
    EngineConfig, FrameClock, FrameTime, ParticleEngine, ShapeId, MAX_PARTICLE_COUNT,
    SCATTER_PRESET,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::{FrameInputs, GpuState};
use sim::BreathingSource;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, WindowBuilder},
};

const TITLE_REFRESH_SEC: f32 = 0.25;

struct App {
    engine: ParticleEngine,
    clock: FrameClock,
    pointer: input::PointerGesture,
    color_index: usize,
    breathing: Option<BreathingSource>,
    scatter_on: bool,
    last_title_at: f32,
}

impl App {
    fn new(engine: ParticleEngine) -> Self {
        Self {
            engine,
            clock: FrameClock::new(),
            pointer: input::PointerGesture::default(),
            color_index: 0,
            breathing: None,
            scatter_on: false,
            last_title_at: f32::NEG_INFINITY,
        }
    }

    /// Mouse readings only reach the engine while the simulated producer is off.
    fn post_pointer(&self) {
        if self.breathing.is_none() {
            self.engine.gesture_mailbox().post(self.pointer.signal());
        }
    }

    /// Returns false when the app should exit.
    fn apply(&mut self, action: Action, window: &winit::window::Window) -> bool {
        match action {
            Action::Shape(shape) => self.set_shape(shape),
            Action::NextShape => {
                let next = self.engine.shape().map_or(ShapeId::Heart, ShapeId::next);
                self.set_shape(next);
            }
            Action::NextColor => self.color_index = palette::next_color_index(self.color_index),
            Action::MoreParticles | Action::FewerParticles => {
                let n = keys::step_particle_count(
                    self.engine.particle_count(),
                    action == Action::MoreParticles,
                    MAX_PARTICLE_COUNT,
                );
                self.engine.set_particle_count(n);
            }
            Action::ToggleFullscreen => {
                if window.fullscreen().is_some() {
                    window.set_fullscreen(None);
                } else {
                    window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                }
            }
            Action::ToggleScatter => {
                self.scatter_on = !self.scatter_on;
                let magnitude = if self.scatter_on { SCATTER_PRESET } else { 0.0 };
                self.engine.set_scatter_magnitude(magnitude);
                log::info!("[app] scatter {}", if self.scatter_on { "on" } else { "off" });
            }
            Action::ToggleBreathing => match self.breathing.take() {
                Some(source) => {
                    source.stop();
                    self.post_pointer();
                }
                None => match BreathingSource::spawn(self.engine.gesture_mailbox()) {
                    Ok(source) => self.breathing = Some(source),
                    Err(e) => log::error!("[app] could not start gesture producer: {e}"),
                },
            },
            Action::Quit => return false,
        }
        true
    }

    fn set_shape(&mut self, shape: ShapeId) {
        self.engine.set_shape(shape);
        log::info!("[app] shape -> {shape}");
    }

    fn refresh_title(&mut self, window: &winit::window::Window, time: FrameTime) {
        if time.elapsed - self.last_title_at < TITLE_REFRESH_SEC {
            return;
        }
        self.last_title_at = time.elapsed;
        let shape = self.engine.shape().map_or("(origin)", ShapeId::name);
        let g = self.engine.smoothed_gesture();
        let source = if self.breathing.is_some() { "sim" } else { "mouse" };
        window.set_title(&format!(
            "Gesture Particles | {shape} | {} pts | open {:.2} | {source} | {:.0} fps ({:.1} ms)",
            self.engine.particle_count(),
            g.openness,
            self.clock.fps(),
            time.dt * 1000.0
        ));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let engine = ParticleEngine::with_rng(EngineConfig::default(), StdRng::from_entropy())?;
    let mut app = App::new(engine);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Gesture Particles")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    log::info!(
        "keys: 1-5 shape, Tab next shape, C color, +/- count, F fullscreen, \
         S scatter, B simulated hand, Esc quit"
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let size = gpu.window.inner_size();
                app.pointer.move_to(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
                app.post_pointer();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                app.pointer.held = state == ElementState::Pressed;
                app.post_pointer();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / input::PIXELS_PER_WHEEL_LINE,
                };
                app.pointer.wheel_lines(lines);
                app.post_pointer();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let action = match logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) => Some(Action::Quit),
                    Key::Named(NamedKey::Tab) => Some(Action::NextShape),
                    Key::Character(c) => keys::action_for_key(c),
                    _ => None,
                };
                if let Some(action) = action {
                    if !app.apply(action, gpu.window) {
                        elwt.exit();
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let time = app.clock.frame();
            app.engine.tick(time.elapsed);
            let inputs = FrameInputs {
                positions: app.engine.render_positions_flat(),
                model: app.engine.transform().model_matrix(),
                color: palette::color_rgba(app.color_index),
            };
            match gpu.render(&inputs) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
            app.refresh_title(gpu.window, time);
        }
        _ => {}
    })?;
    Ok(())
}
