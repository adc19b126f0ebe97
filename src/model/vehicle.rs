use glam::Vec3;

/// Whether the vehicle is currently being driven. Hosts use this to pick an
/// animation clip (idle vs. run), the core only tracks the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Running,
}

/// Vehicle transform: world-space position plus accumulated yaw/pitch.
///
/// Yaw and pitch are free-look accumulators in radians, unbounded on purpose
/// (no wrapping to [0, 2π)). Owned exclusively by the controller that updates
/// it once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub motion: MotionState,
}

impl VehicleState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}
