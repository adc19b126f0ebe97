use glam::{Quat, Vec3};

/// Third-person chase camera: derives a viewpoint each frame from the tracked
/// vehicle's transform plus two fixed offsets. No state beyond the offsets.
pub struct ChaseCamera {
    position_offset: Vec3,
    look_offset: Vec3,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        // Behind and above the vehicle, looking at its origin
        Self::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::ZERO)
    }
}

impl ChaseCamera {
    pub fn new(position_offset: Vec3, look_offset: Vec3) -> Self {
        Self {
            position_offset,
            look_offset,
        }
    }

    /// Compute the camera position and look-at point for the given vehicle
    /// transform.
    ///
    /// Only yaw rotates the position offset; pitch is deliberately excluded so
    /// the camera stays level while the vehicle free-looks. That asymmetry is
    /// intended, not a bug.
    pub fn compute_view(&self, vehicle_position: Vec3, vehicle_yaw: f32) -> (Vec3, Vec3) {
        let eye = vehicle_position + Quat::from_rotation_y(vehicle_yaw) * self.position_offset;
        let target = vehicle_position + self.look_offset;
        (eye, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn zero_yaw_applies_raw_offsets() {
        let camera = ChaseCamera::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let (eye, target) = camera.compute_view(Vec3::new(10.0, 0.0, 3.0), 0.0);
        assert_vec3_eq(eye, Vec3::new(5.0, 2.0, 3.0));
        assert_vec3_eq(target, Vec3::new(10.0, 1.0, 3.0));
    }

    #[test]
    fn yaw_rotates_position_offset_about_up_axis() {
        let camera = ChaseCamera::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::ZERO);
        // Half a turn puts the camera on the opposite side, same height
        let (eye, _) = camera.compute_view(Vec3::ZERO, PI);
        assert_vec3_eq(eye, Vec3::new(5.0, 2.0, 0.0));
    }

    #[test]
    fn look_at_point_is_never_rotated() {
        let camera = ChaseCamera::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let (_, target_a) = camera.compute_view(Vec3::ZERO, 0.0);
        let (_, target_b) = camera.compute_view(Vec3::ZERO, PI / 2.0);
        assert_vec3_eq(target_a, target_b);
    }
}
