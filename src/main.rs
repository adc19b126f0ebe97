use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};
use std::sync::Arc;
use tracing::{error, info};

// Import from the library crate
use gokart::{controller, logging, model};

use controller::input::{self, InputEvent};
use controller::{FrameLoop, InputState, VehicleController};
use model::{ChaseCamera, OrbitalScene, TrackScene};

struct App {
    window: Arc<Window>,

    // Sandbox core
    frame_loop: FrameLoop,
    orbit: Option<OrbitalScene>,

    // Input handling
    cursor_pos: (f32, f32),

    // Frame timing
    last_frame_time: std::time::Instant,
    fps: f32,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let frame_loop = FrameLoop::new(
            InputState::new(size.width as f32, size.height as f32),
            VehicleController::new(10.0),
            ChaseCamera::default(),
            TrackScene::default(),
        );

        Self {
            window,
            frame_loop,
            orbit: None,
            cursor_pos: (0.0, 0.0),
            last_frame_time: std::time::Instant::now(),
            fps: 0.0,
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    // Toggle the orbital toy on O
                    if code == KeyCode::KeyO && key_event.state == ElementState::Pressed {
                        self.orbit = match self.orbit.take() {
                            Some(_) => {
                                info!("orbital toy off");
                                None
                            }
                            None => {
                                info!("orbital toy on");
                                Some(OrbitalScene::default())
                            }
                        };
                        return true;
                    }
                }
                if let Some(event) = input::winit::keyboard_event_to_input(key_event) {
                    self.frame_loop.input.process_event(&event);
                }
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.cursor_pos;
                if let Some(event) = input::winit::mouse_click_to_input(*button, *state, x, y) {
                    self.frame_loop.input.process_event(&event);
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_pos = (position.x as f32, position.y as f32);
                self.frame_loop.input.process_event(&InputEvent::DragMove {
                    x: self.cursor_pos.0,
                    y: self.cursor_pos.1,
                });
                true
            }
            WindowEvent::Focused(false) => {
                self.frame_loop.input.process_event(&InputEvent::FocusLost);
                true
            }
            _ => false,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.frame_loop.input.process_event(&InputEvent::ViewportResized {
                width: new_size.width as f32,
                height: new_size.height as f32,
            });
        }
    }

    fn update(&mut self, dt: f32) {
        // Update FPS
        self.frame_count += 1;
        self.fps_timer += dt;
        if self.fps_timer >= 1.0 {
            self.fps = self.frame_count as f32 / self.fps_timer;
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }

        let snapshot = match self.frame_loop.advance(dt) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("frame update failed: {e}");
                return;
            }
        };

        if let Some(orbit) = self.orbit.as_mut() {
            if let Err(e) = orbit.update(dt) {
                error!("orbital update failed: {e}");
            }
        }

        self.window.set_title(&format!(
            "gokart — pos ({:.1}, {:.1}) yaw {:.2} {} | {:.0} fps",
            snapshot.position.x,
            snapshot.position.z,
            snapshot.yaw,
            if snapshot.finished { "FINISH" } else { "" },
            self.fps,
        ));
    }
}

fn main() {
    logging::init();

    let event_loop = EventLoop::new().unwrap();
    let window_attributes = Window::default_attributes()
        .with_title("gokart")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
    let window = event_loop.create_window(window_attributes).unwrap();
    let window = Arc::new(window);

    info!("WASD / arrows to drive, hold the left mouse button and drag to steer, O for the orbital toy");

    let mut app = App::new(window.clone());

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = (now - app.last_frame_time).as_secs_f32();
                            app.last_frame_time = now;

                            app.update(dt);
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    }).unwrap();
}
