use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info, warn};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::engine::engine_state::EngineState;
use crate::core::actions::render_frame::render_frame_parallel::render_frame_parallel;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::dynamics::colour_mapping::map::FatouColourMap;
use crate::core::dynamics::maps::kinds::MapKinds;
use crate::core::dynamics::system::FatouSystem;
use crate::input::gui::keyboard::KeyboardState;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::input::gui::status_panel::show_status_panel;

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    presenter: P,
    state: EngineState,
    map: MapKinds,
    system: FatouSystem<MapKinds>,
    keyboard: KeyboardState,
    cursor: Option<Point>,
    rgb: Vec<u8>,
    slider_boxes: Vec<PixelRect>,
    last_render: Option<Duration>,
    last_error: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(window: &'static Window, event_loop: &EventLoop<()>, presenter: P, state: EngineState, map: MapKinds) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            state,
            map,
            system: FatouSystem::new(map),
            keyboard: KeyboardState::default(),
            cursor: None,
            rgb: Vec::new(),
            slider_boxes: Vec::new(),
            last_render: None,
            last_error: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or Escape is pressed.
    pub fn run(mut self, event_loop: EventLoop<()>) {
        let window = self.window;

        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                        let egui_consumed = self.egui_state.on_window_event(window, event).consumed;

                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::RedrawRequested => {
                                if let Err(err) = self.frame() {
                                    error!("Presenting frame failed: {}", err);
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => self.resize(*size),
                            WindowEvent::ScaleFactorChanged { .. } => self.resize(window.inner_size()),
                            WindowEvent::Focused(false) => self.keyboard.reset(),
                            WindowEvent::KeyboardInput { event: key_event, .. } => {
                                if let PhysicalKey::Code(code) = key_event.physical_key {
                                    self.keyboard.handle_key_event(code, key_event.state);
                                }
                                if self.keyboard.quit_requested() {
                                    elwt.exit();
                                }
                            }
                            WindowEvent::CursorMoved { position, .. } => {
                                self.cursor = Some(Point {
                                    x: position.x as i32,
                                    y: position.y as i32,
                                });
                            }
                            WindowEvent::CursorLeft { .. } => self.cursor = None,
                            WindowEvent::MouseInput {
                                state,
                                button: MouseButton::Left,
                                ..
                            } => match state {
                                ElementState::Pressed if !egui_consumed => {
                                    if let Some(cursor) = self.cursor {
                                        if let Some(id) = self.state.begin_drag(cursor) {
                                            debug!("Dragging slider {}", id);
                                        }
                                    }
                                }
                                ElementState::Released => self.state.end_drag(),
                                _ => {}
                            },
                            _ => {}
                        }
                    }
                    Event::AboutToWait => window.request_redraw(),
                    _ => {}
                }
            })
            .unwrap_or_else(|err| error!("Event loop error: {}", err));
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(size.width, size.height) {
            error!("Resizing surface failed: {}", err);
            return;
        }
        if let Err(err) = self.state.resize(size.width, size.height) {
            warn!("Keeping previous viewport: {}", err);
        }
    }

    /// One iteration of input, render and present.
    fn frame(&mut self) -> Result<(), pixels::Error> {
        let deltas = self.keyboard.deltas(self.egui_ctx.wants_keyboard_input());
        self.state.apply_deltas(&deltas);
        if let Some(cursor) = self.cursor {
            self.state.drag_to(cursor);
        }

        self.render_engine_frame();

        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            show_status_panel(
                ctx,
                &self.state,
                self.map,
                self.last_render,
                self.last_error.as_deref(),
            );
        });
        self.egui_state
            .handle_platform_output(self.window, std::mem::take(&mut egui_output.platform_output));

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn render_engine_frame(&mut self) {
        let size = self.window.inner_size();
        let snapshot = self.state.snapshot();
        let (width, height) = (snapshot.camera.width(), snapshot.camera.height());

        // Viewport and surface disagree until a resize succeeds on both
        if (width, height) != (size.width, size.height) {
            return;
        }

        self.rgb.resize(width as usize * height as usize * BYTES_PER_PIXEL, 0);

        let start = Instant::now();
        match render_frame_parallel(&mut self.rgb, width, height, &snapshot, &self.system, &FatouColourMap) {
            Ok(()) => {
                self.last_render = Some(start.elapsed());
                self.last_error = None;
            }
            Err(err) => {
                error!("Rendering frame failed: {}", err);
                self.last_error = Some(err.to_string());
                return;
            }
        }

        self.slider_boxes.clear();
        self.slider_boxes
            .extend(self.state.slider_boxes().map(|(_, rect)| rect));
        self.presenter.draw_frame(&self.rgb, &self.slider_boxes);

        debug!(
            "Frame {}x{} centre {} zoom {} in {:?}",
            width,
            height,
            snapshot.camera.center(),
            snapshot.camera.zoom(),
            self.last_render
        );
    }
}

/// Opens a window sized to the initial viewport and runs the explorer.
///
/// # Panics
/// Panics if the event loop, window or framebuffer cannot be created.
pub fn run_gui<P: GuiPresenterPort>(state: EngineState, map: MapKinds) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let camera = state.camera();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fatou Explorer")
            .with_inner_size(PhysicalSize::new(camera.width(), camera.height()))
            .with_min_inner_size(PhysicalSize::new(200u32, 200u32))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let presenter = P::new(window).expect("Failed to create pixels surface");
    let mut app = GuiApp::new(window, &event_loop, presenter, state, map);

    // The window manager may not honour the requested size
    app.resize(window.inner_size());
    info!("Explorer window open at {:?}", window.inner_size());

    app.run(event_loop);
}
