use glam::{Quat, Vec3};

use crate::controller::input::InputState;
use crate::controller::vehicle_controller::ControlError;
use crate::model::{MotionState, VehicleState};

/// Arcade drive model: velocity-based with linear damping, keys steer instead
/// of the mouse. Left/right rotate the heading; forward/backward accelerate
/// along it; velocity decays by `damping` per second so the vehicle coasts and
/// drifts to a stop.
pub struct ArcadeController {
    /// Acceleration along the heading, world units per second squared
    pub accel: f32,
    /// Steering rate in radians per second
    pub turn_rate: f32,
    /// Fraction of velocity retained after one second (0..1)
    pub damping: f32,
    velocity: Vec3,
    state: VehicleState,
}

impl ArcadeController {
    pub fn new(accel: f32) -> Self {
        Self {
            accel,
            turn_rate: 1.2,
            damping: 0.3,
            velocity: Vec3::ZERO,
            state: VehicleState::default(),
        }
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Vec3 {
        &mut self.velocity
    }

    pub fn update(
        &mut self,
        input: &InputState,
        elapsed: f32,
    ) -> Result<&VehicleState, ControlError> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(ControlError::InvalidElapsed(elapsed));
        }
        if elapsed == 0.0 {
            return Ok(&self.state);
        }

        // Same tie-break as the drag-steered controller: later flag wins
        let mut steer = 0.0;
        if input.left {
            steer = 1.0;
        }
        if input.right {
            steer = -1.0;
        }
        let mut throttle = 0.0;
        if input.forward {
            throttle = 1.0;
        }
        if input.backward {
            throttle = -1.0;
        }

        self.state.yaw += steer * self.turn_rate * elapsed;

        let heading = Quat::from_rotation_y(self.state.yaw) * Vec3::X;
        self.velocity += heading * (throttle * self.accel * elapsed);
        // Frame-rate-independent linear damping
        self.velocity *= self.damping.powf(elapsed);
        self.state.position += self.velocity * elapsed;

        self.state.motion = if throttle == 0.0 && steer == 0.0 {
            MotionState::Idle
        } else {
            MotionState::Running
        };

        Ok(&self.state)
    }
}
