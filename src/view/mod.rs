// VIEW: Pure transform construction for the render host
pub mod transform;

pub use transform::{vehicle_matrix, view_matrix, Projection};
