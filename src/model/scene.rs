use glam::Vec3;
use tracing::info;

/// Surrounding scene logic for the driving sandbox: a square track with hard
/// bounds and a finish line across the -z end. Boundary and finish checks live
/// here rather than in the controllers.
pub struct TrackScene {
    /// Track half size; positions are clamped to [-half_extent, half_extent]
    /// on x and z
    pub half_extent: f32,
    /// Finish line plane; crossing means position.z < finish_line_z
    pub finish_line_z: f32,
    crossed: bool,
}

impl Default for TrackScene {
    fn default() -> Self {
        Self {
            half_extent: 50.0,
            finish_line_z: -50.0,
            crossed: false,
        }
    }
}

impl TrackScene {
    pub fn new(half_extent: f32, finish_line_z: f32) -> Self {
        Self {
            half_extent,
            finish_line_z,
            crossed: false,
        }
    }

    pub fn clamp_position(&self, position: &mut Vec3) {
        position.x = position.x.clamp(-self.half_extent, self.half_extent);
        position.z = position.z.clamp(-self.half_extent, self.half_extent);
    }

    /// Clamp and kill the velocity component pushing into the wall, for the
    /// velocity-based drive model.
    pub fn clamp_with_velocity(&self, position: &mut Vec3, velocity: &mut Vec3) {
        if position.x.abs() > self.half_extent {
            velocity.x = 0.0;
        }
        if position.z.abs() > self.half_extent {
            velocity.z = 0.0;
        }
        self.clamp_position(position);
    }

    /// True once, on the frame the vehicle first crosses the finish line.
    pub fn check_finish(&mut self, position: Vec3) -> bool {
        if !self.crossed && position.z < self.finish_line_z {
            self.crossed = true;
            info!(x = position.x, z = position.z, "crossed the finish line");
            return true;
        }
        false
    }

    pub fn finished(&self) -> bool {
        self.crossed
    }

    pub fn reset(&mut self) {
        self.crossed = false;
    }
}
