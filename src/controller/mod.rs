// CONTROLLER: Input, vehicle logic, and update loop
pub mod input;
pub mod vehicle_controller;
pub mod arcade;
pub mod frame_loop;

pub use input::{InputEvent, InputState, KeyBindings};
pub use vehicle_controller::{ControlError, VehicleController};
pub use arcade::ArcadeController;
pub use frame_loop::{FrameLoop, FrameSnapshot};
