use glam::Vec3;

use crate::controller::input::InputState;
use crate::controller::vehicle_controller::{ControlError, VehicleController};
use crate::model::{ChaseCamera, MotionState, TrackScene};

/// Everything the render host needs to place the vehicle model and configure
/// the viewing transform after one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub motion: MotionState,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    pub finished: bool,
}

/// Per-frame orchestration of the sandbox core. All state is constructor
/// injected; multiple independent instances are fine.
///
/// `advance` enforces the update order: the vehicle moves first, then the
/// scene checks run, then the camera view is derived from the result — the
/// camera can never lead the vehicle by a frame.
pub struct FrameLoop {
    pub input: InputState,
    pub vehicle: VehicleController,
    pub camera: ChaseCamera,
    pub track: TrackScene,
}

impl FrameLoop {
    pub fn new(
        input: InputState,
        vehicle: VehicleController,
        camera: ChaseCamera,
        track: TrackScene,
    ) -> Self {
        Self {
            input,
            vehicle,
            camera,
            track,
        }
    }

    /// Advance the core by `elapsed` seconds.
    ///
    /// `elapsed` is taken exactly as the host supplies it; large deltas (for
    /// example after a backgrounded window resumes) are not clamped here.
    pub fn advance(&mut self, elapsed: f32) -> Result<FrameSnapshot, ControlError> {
        let state = *self.vehicle.update(&mut self.input, elapsed)?;

        // Finish detection sees the raw position; the clamp would otherwise
        // pin it exactly onto the line and mask the crossing
        let finished = self.track.check_finish(state.position);

        let mut position = state.position;
        self.track.clamp_position(&mut position);
        self.vehicle.state_mut().position = position;

        let (camera_eye, camera_target) = self.camera.compute_view(position, state.yaw);

        Ok(FrameSnapshot {
            position,
            yaw: state.yaw,
            pitch: state.pitch,
            motion: state.motion,
            camera_eye,
            camera_target,
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VehicleState;

    fn sandbox() -> FrameLoop {
        FrameLoop::new(
            InputState::new(1000.0, 1000.0),
            VehicleController::new(10.0),
            ChaseCamera::default(),
            TrackScene::default(),
        )
    }

    #[test]
    fn camera_tracks_the_updated_vehicle() {
        let mut frame_loop = sandbox();
        frame_loop.input.forward = true;

        let snapshot = frame_loop.advance(1.0).unwrap();
        assert!((snapshot.position.x - 10.0).abs() < 1e-5);
        // Chase offset (-5, 2, 0) at yaw 0
        assert!((snapshot.camera_eye.x - 5.0).abs() < 1e-5);
        assert!((snapshot.camera_eye.y - 2.0).abs() < 1e-5);
        assert_eq!(snapshot.camera_target, snapshot.position);
    }

    #[test]
    fn camera_ignores_pitch_changes() {
        let mut frame_loop = sandbox();
        let baseline = frame_loop.advance(0.5).unwrap();

        // A purely vertical drag changes pitch only
        frame_loop.input.begin_drag(500.0, 0.0);
        frame_loop.input.on_drag_move(500.0, 400.0);
        frame_loop.input.end_drag();
        let snapshot = frame_loop.advance(0.5).unwrap();

        assert!(snapshot.pitch != baseline.pitch);
        assert_eq!(snapshot.camera_eye, baseline.camera_eye);
        assert_eq!(snapshot.camera_target, baseline.camera_target);
    }

    #[test]
    fn bounds_are_applied_after_the_move() {
        let mut frame_loop = sandbox();
        frame_loop.input.forward = true;
        for _ in 0..120 {
            frame_loop.advance(0.1).unwrap();
        }
        let snapshot = frame_loop.advance(0.1).unwrap();
        assert!((snapshot.position.x - 50.0).abs() < 1e-5);
    }

    #[test]
    fn finish_line_is_reported_once() {
        let mut frame_loop = FrameLoop::new(
            InputState::new(1000.0, 1000.0),
            VehicleController::new(10.0).with_state(VehicleState {
                position: Vec3::new(0.0, 0.0, -49.5),
                yaw: std::f32::consts::FRAC_PI_2,
                ..VehicleState::default()
            }),
            ChaseCamera::default(),
            TrackScene::default(),
        );
        // At yaw π/2 the forward basis points toward -z
        frame_loop.input.forward = true;

        let first = frame_loop.advance(0.2).unwrap();
        assert!(first.finished);
        let second = frame_loop.advance(0.2).unwrap();
        assert!(!second.finished);
    }

    #[test]
    fn error_propagates_from_the_controller() {
        let mut frame_loop = sandbox();
        assert!(frame_loop.advance(-1.0).is_err());
    }
}
