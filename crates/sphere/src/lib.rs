//! Spherical rotation and projection-scale helpers.

pub mod projection;
pub mod rotation;

pub use projection::mercator_scale;
pub use rotation::{Rotation, angular_distance, build_rotation};
