use glam::{Quat, Vec2, Vec3};
use thiserror::Error;

use crate::controller::input::InputState;
use crate::model::{MotionState, VehicleState};

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("elapsed seconds must be finite and non-negative, got {0}")]
    InvalidElapsed(f32),
}

/// Per-frame vehicle update: directional key flags become planar displacement,
/// mouse-drag deltas become yaw/pitch.
///
/// Opposing keys resolve by sequential flag application: backward overrides
/// forward, right overrides left.
pub struct VehicleController {
    /// Planar movement speed in world units per second
    pub speed: f32,
    /// Drag-to-angle rate, radians per normalized drag unit per second
    pub drag_sensitivity: f32,
    state: VehicleState,
}

impl VehicleController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            drag_sensitivity: 5.0,
            state: VehicleState::default(),
        }
    }

    pub fn with_state(mut self, state: VehicleState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Scene logic (bounds, resets) may write the transform back between
    /// frames; the per-frame update itself stays the only mover.
    pub fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    /// Advance the vehicle by `elapsed` seconds of input.
    ///
    /// `elapsed == 0.0` is a no-op that leaves the state bit-identical and the
    /// pending drag delta accumulated for the next frame. Negative or
    /// non-finite elapsed is rejected before any mutation.
    pub fn update(
        &mut self,
        input: &mut InputState,
        elapsed: f32,
    ) -> Result<&VehicleState, ControlError> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(ControlError::InvalidElapsed(elapsed));
        }
        if elapsed == 0.0 {
            return Ok(&self.state);
        }

        // Sequential flag application; the later branch wins on conflicts
        let mut longitudinal = 0.0;
        if input.forward {
            longitudinal = 1.0;
        }
        if input.backward {
            longitudinal = -1.0;
        }
        let mut lateral = 0.0;
        if input.left {
            lateral = -1.0;
        }
        if input.right {
            lateral = 1.0;
        }

        let drag = input.consume_drag();
        if drag != Vec2::ZERO {
            self.state.yaw += drag.x * self.drag_sensitivity * elapsed;
            self.state.pitch += drag.y * self.drag_sensitivity * elapsed;
        }

        let rotation = Quat::from_rotation_y(self.state.yaw);
        let forward = rotation * Vec3::X;
        let right = rotation * Vec3::Z;
        self.state.position += (forward * longitudinal + right * lateral) * (self.speed * elapsed);

        self.state.motion = if longitudinal == 0.0 && lateral == 0.0 {
            MotionState::Idle
        } else {
            MotionState::Running
        };

        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    fn idle_input() -> InputState {
        InputState::new(1000.0, 1000.0)
    }

    #[test]
    fn zero_elapsed_changes_nothing() {
        let mut input = idle_input();
        input.forward = true;
        input.begin_drag(0.0, 0.0);
        input.on_drag_move(100.0, 50.0);

        let mut controller = VehicleController::new(10.0)
            .with_state(VehicleState::at(Vec3::new(1.0, 2.0, 3.0)));
        let before = *controller.state();
        let after = *controller.update(&mut input, 0.0).unwrap();

        assert_eq!(before.position, after.position);
        assert_eq!(before.yaw, after.yaw);
        assert_eq!(before.pitch, after.pitch);
        // Drag stays pending for the next real frame
        assert!(input.consume_drag().x != 0.0);
    }

    #[test]
    fn negative_or_non_finite_elapsed_is_rejected_without_mutation() {
        let mut input = idle_input();
        input.forward = true;
        let mut controller = VehicleController::new(10.0);

        assert_eq!(
            controller.update(&mut input, -0.1),
            Err(ControlError::InvalidElapsed(-0.1))
        );
        assert!(controller.update(&mut input, f32::NAN).is_err());
        assert!(controller.update(&mut input, f32::INFINITY).is_err());
        assert_eq!(controller.state().position, Vec3::ZERO);
    }

    #[test]
    fn forward_at_zero_yaw_moves_along_plus_x() {
        let mut input = idle_input();
        input.forward = true;
        let mut controller = VehicleController::new(10.0);

        let state = *controller.update(&mut input, 1.0).unwrap();
        assert_vec3_eq(state.position, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.motion, MotionState::Running);
    }

    #[test]
    fn opposing_keys_use_documented_tie_break() {
        let mut input = idle_input();
        input.forward = true;
        input.backward = true; // backward wins
        input.left = true;
        input.right = true; // right wins
        let mut controller = VehicleController::new(1.0);

        let state = *controller.update(&mut input, 1.0).unwrap();
        assert_vec3_eq(state.position, Vec3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn basis_rotation_at_canonical_yaws() {
        for (yaw, expected) in [
            (0.0, Vec3::new(1.0, 0.0, 0.0)),
            (PI / 2.0, Vec3::new(0.0, 0.0, -1.0)),
            (PI, Vec3::new(-1.0, 0.0, 0.0)),
            (3.0 * PI / 2.0, Vec3::new(0.0, 0.0, 1.0)),
        ] {
            let mut input = idle_input();
            input.forward = true;
            let mut controller = VehicleController::new(1.0)
                .with_state(VehicleState { yaw, ..VehicleState::default() });
            let state = *controller.update(&mut input, 1.0).unwrap();
            assert_vec3_eq(state.position, expected);
        }
    }

    #[test]
    fn drag_scales_by_sensitivity_and_elapsed() {
        let mut input = idle_input();
        input.begin_drag(0.0, 0.0);
        input.on_drag_move(100.0, 0.0);

        let mut controller = VehicleController::new(10.0);
        controller.drag_sensitivity = 3.0;
        let state = *controller.update(&mut input, 0.5).unwrap();

        // 100 px on a 1000 px viewport is 0.2 NDC; yaw += 0.2 * 3.0 * 0.5
        assert!((state.yaw - 0.3).abs() < 1e-6);
        assert_eq!(state.pitch, 0.0);
        // Consumed: a second frame with no new drag adds nothing
        let state = *controller.update(&mut input, 0.5).unwrap();
        assert!((state.yaw - 0.3).abs() < 1e-6);
    }

    #[test]
    fn yaw_and_pitch_accumulate_without_wrapping() {
        let mut controller = VehicleController::new(1.0);
        controller.drag_sensitivity = 1.0;
        let mut input = idle_input();
        for _ in 0..100 {
            input.begin_drag(0.0, 1000.0);
            input.on_drag_move(1000.0, 0.0);
            input.end_drag();
            controller.update(&mut input, 1.0).unwrap();
        }
        // 100 frames of a full-viewport diagonal drag: 2.0 per axis per frame
        let state = controller.state();
        assert!((state.yaw - 200.0).abs() < 1e-3);
        assert!((state.pitch - 200.0).abs() < 1e-3);
    }

    #[test]
    fn idle_when_no_direction_held() {
        let mut input = idle_input();
        let mut controller = VehicleController::new(10.0);
        let state = *controller.update(&mut input, 1.0).unwrap();
        assert_eq!(state.motion, MotionState::Idle);
        assert_eq!(state.position, Vec3::ZERO);
    }
}
