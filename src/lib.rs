// Re-export all public modules so they can be used from main.rs
pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use controller::{ControlError, FrameLoop, FrameSnapshot, InputEvent, InputState, VehicleController};
pub use model::{ChaseCamera, VehicleState};
