// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod raster;
pub mod scene;

pub use config::{Color, KnobConfig};
pub use error::{KnobError, KnobResult};
pub use geometry::{KnobState, Point, Surface};
pub use scene::{build_scene, DrawCommand, Scene};

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use input::{DragGesture, PointerId};
use raster::Canvas;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

type ValueListener = Box<dyn FnMut(f64)>;

/// Circular volume knob: a ring of dots, a draggable handle and a
/// percentage label.
pub struct Knob {
    config: KnobConfig,
    state: KnobState,
    on_value_changed: Option<ValueListener>,
}

impl std::fmt::Debug for Knob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Knob")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_value_changed", &self.on_value_changed.is_some())
            .finish()
    }
}

impl Knob {
    pub fn new(config: KnobConfig) -> Self {
        Self {
            config,
            state: KnobState::new(),
            on_value_changed: None,
        }
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    pub fn state(&self) -> &KnobState {
        &self.state
    }

    /// Registers the listener called with the volume percentage after
    /// every drag update.
    pub fn on_value_changed(&mut self, listener: impl FnMut(f64) + 'static) {
        self.on_value_changed = Some(Box::new(listener));
    }

    /// Applies one drag-change at `position` on `surface`, notifies the
    /// listener and returns the new volume percentage.
    pub fn handle_drag(&mut self, surface: Surface, position: Point) -> f64 {
        let value = self.state.drag_to(surface.center(), position);
        log::debug!(
            "Drag to ({:.1}, {:.1}): knob {:.1} deg, volume {:.1}%",
            position.x,
            position.y,
            self.state.knob_degree,
            value
        );
        if let Some(listener) = self.on_value_changed.as_mut() {
            listener(value);
        }
        value
    }

    pub fn scene(&self, surface: Surface, scale_factor: f64) -> Scene {
        build_scene(&self.state, &self.config, surface, scale_factor)
    }

    /// Opens a window with the knob and blocks until it is closed.
    pub fn show(&mut self) -> KnobResult<()> {
        log::info!(
            "Opening {:?} ({}x{}, {} dots)",
            self.config.title,
            self.config.window_width,
            self.config.window_height,
            self.config.dot_count()
        );
        self.run_window()
    }

    fn run_window(&mut self) -> KnobResult<()> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);

        let font = match raster::find_font(self.config.font_path.as_deref()) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("Volume label disabled: {}", e);
                None
            }
        };

        let window_clone = window.clone();
        let size = window.inner_size();
        let mut surface = Surface::new(size.width as f32, size.height as f32);
        let mut scale_factor = window.scale_factor();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut gesture = DragGesture::new(self.config.touch_slop * scale_factor as f32);
        let mut cursor = Point::default();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Wait);
            let Event::WindowEvent { event, .. } = event else {
                return;
            };
            match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    surface = Surface::new(new_size.width as f32, new_size.height as f32);
                    if let Err(e) = pixels.resize_buffer(new_size.width, new_size.height) {
                        log::error!("Failed to resize buffer: {}", e);
                    }
                    if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("Failed to resize surface: {}", e);
                    }
                    window_clone.request_redraw();
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor: new_scale,
                    ..
                } => {
                    scale_factor = new_scale;
                    gesture.set_slop(self.config.touch_slop * scale_factor as f32);
                    window_clone.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Point::new(position.x as f32, position.y as f32);
                    if let Some(position) = gesture.moved(PointerId::Mouse, cursor) {
                        self.handle_drag(surface, position);
                        window_clone.request_redraw();
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => gesture.press(PointerId::Mouse, cursor),
                    ElementState::Released => gesture.release(PointerId::Mouse),
                },
                WindowEvent::Touch(touch) => {
                    let pointer = PointerId::Touch(touch.id);
                    let position = Point::new(touch.location.x as f32, touch.location.y as f32);
                    match touch.phase {
                        TouchPhase::Started => gesture.press(pointer, position),
                        TouchPhase::Moved => {
                            if let Some(position) = gesture.moved(pointer, position) {
                                self.handle_drag(surface, position);
                                window_clone.request_redraw();
                            }
                        }
                        TouchPhase::Ended | TouchPhase::Cancelled => gesture.release(pointer),
                    }
                }
                WindowEvent::RedrawRequested => {
                    let scene = self.scene(surface, scale_factor);
                    let mut canvas = Canvas::new(
                        pixels.frame_mut(),
                        surface.width as usize,
                        surface.height as usize,
                    );
                    scene.render(&mut canvas, font.as_ref());
                    if let Err(e) = pixels.render() {
                        log::error!("Render failed: {}", e);
                        window_target.exit();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
