// MODEL: Vehicle, camera, and scene state
pub mod vehicle;
pub mod camera;
pub mod scene;
pub mod orbit;

pub use vehicle::{MotionState, VehicleState};
pub use camera::ChaseCamera;
pub use scene::TrackScene;
pub use orbit::{OrbitEvent, OrbitalScene};
