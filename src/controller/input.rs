/// Platform-agnostic input handling system
use glam::Vec2;

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    // Keyboard events
    KeyDown(String),
    KeyUp(String),

    // Mouse-drag events (viewport-relative pixel coordinates)
    DragStart { x: f32, y: f32 },
    DragMove { x: f32, y: f32 },
    DragEnd,

    // Window events
    ViewportResized { width: f32, height: f32 },
    FocusLost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Key mapping configuration
#[derive(Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
        }
    }
}

impl KeyBindings {
    /// Resolve a key name to a direction. Arrow keys are always accepted as
    /// alternates; anything else maps to `None`.
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        if key.eq_ignore_ascii_case(&self.forward) || key == "ArrowUp" {
            Some(Direction::Forward)
        } else if key.eq_ignore_ascii_case(&self.backward) || key == "ArrowDown" {
            Some(Direction::Backward)
        } else if key.eq_ignore_ascii_case(&self.left) || key == "ArrowLeft" {
            Some(Direction::Left)
        } else if key.eq_ignore_ascii_case(&self.right) || key == "ArrowRight" {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Unified input state: directional key flags plus the mouse-drag accumulator.
///
/// All mutation happens on the UI/event thread and all reads happen on the same
/// thread inside the per-frame update, so no synchronization is needed. In a
/// multi-threaded host, feed `InputEvent`s through a queue into `process_event`
/// instead of calling the mutators from foreign threads.
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    bindings: KeyBindings,
    viewport: Vec2,
    drag_active: bool,
    last_pointer: Vec2,
    drag_delta: Vec2,
}

impl InputState {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            bindings: KeyBindings::default(),
            viewport: Vec2::new(viewport_width, viewport_height),
            drag_active: false,
            last_pointer: Vec2::ZERO,
            drag_delta: Vec2::ZERO,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.set_key(key, true),
            InputEvent::KeyUp(key) => self.set_key(key, false),
            InputEvent::DragStart { x, y } => self.begin_drag(*x, *y),
            InputEvent::DragMove { x, y } => self.on_drag_move(*x, *y),
            InputEvent::DragEnd => self.end_drag(),
            InputEvent::ViewportResized { width, height } => self.set_viewport(*width, *height),
            InputEvent::FocusLost => self.clear_keys(),
        }
    }

    /// Set one of the four directional flags. Unrecognized keys are ignored.
    pub fn set_key(&mut self, key: &str, pressed: bool) {
        match self.bindings.direction_for(key) {
            Some(Direction::Forward) => self.forward = pressed,
            Some(Direction::Backward) => self.backward = pressed,
            Some(Direction::Left) => self.left = pressed,
            Some(Direction::Right) => self.right = pressed,
            None => {}
        }
    }

    pub fn clear_keys(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
    }

    /// Update the extents used to normalize pointer coordinates. Host calls
    /// this on window resize so drag sensitivity stays resolution independent.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag_active = true;
        self.last_pointer = self.normalize(x, y);
    }

    pub fn end_drag(&mut self) {
        self.drag_active = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_active
    }

    /// Accumulate pointer movement while a drag is active. Coordinates are
    /// normalized to [-1, 1] per axis (y up) before the delta is taken, so the
    /// accumulated value is independent of the viewport size.
    pub fn on_drag_move(&mut self, x: f32, y: f32) {
        if !self.drag_active {
            return;
        }
        let pointer = self.normalize(x, y);
        self.drag_delta += pointer - self.last_pointer;
        self.last_pointer = pointer;
    }

    /// Destructive read of the accumulated drag delta: returns the full
    /// accumulation and resets it to zero so it cannot be applied twice.
    pub fn consume_drag(&mut self) -> Vec2 {
        let result = self.drag_delta;
        self.drag_delta = Vec2::ZERO;
        result
    }

    fn normalize(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.viewport.x) * 2.0 - 1.0,
            -(y / self.viewport.y) * 2.0 + 1.0,
        )
    }
}

/// winit event conversions for the native host
pub mod winit {
    use super::InputEvent;
    use winit::event::{ElementState, KeyEvent, MouseButton};
    use winit::keyboard::{KeyCode, PhysicalKey};

    /// Key name as fed to `InputState::set_key`. Only the keys the sandbox
    /// binds are mapped; everything else is dropped here.
    pub fn key_name(code: KeyCode) -> Option<&'static str> {
        Some(match code {
            KeyCode::KeyW => "w",
            KeyCode::KeyA => "a",
            KeyCode::KeyS => "s",
            KeyCode::KeyD => "d",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            _ => return None,
        })
    }

    pub fn keyboard_event_to_input(event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let key = key_name(code)?.to_string();
        Some(match event.state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        })
    }

    pub fn mouse_click_to_input(
        button: MouseButton,
        state: ElementState,
        x: f32,
        y: f32,
    ) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        Some(match state {
            ElementState::Pressed => InputEvent::DragStart { x, y },
            ElementState::Released => InputEvent::DragEnd,
        })
    }
}
