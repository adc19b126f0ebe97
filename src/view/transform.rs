use glam::{Mat4, Vec3};

use crate::model::VehicleState;

/// Model matrix for the vehicle mesh. Only yaw is applied to the visual
/// model; pitch is recorded orientation state and never tilts the mesh.
pub fn vehicle_matrix(state: &VehicleState) -> Mat4 {
    Mat4::from_translation(state.position) * Mat4::from_rotation_y(state.yaw)
}

/// Right-handed look-at for the chase-camera output pair, +Y up.
pub fn view_matrix(eye: Vec3, target: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, Vec3::Y)
}

/// Perspective projection parameters the host feeds its renderer.
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fov_y: 75f32.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }
}
