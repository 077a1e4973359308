//! Rigid rotations of the sphere built from a pair of anchor points.
//!
//! A [`Rotation`] carries the axis and the precomputed sine/cosine of the angle,
//! so one build per drag update can be applied to every vertex of a shape.

use truesize_core::LonLat;
use truesize_core::constants::EPSILON;
use truesize_core::coords::{to_lon_lat, to_vector};
use truesize_core::units::clamp;
use truesize_core::vector::{self, Vector3};

/// Rotation about an axis through the sphere's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Source and destination coincide; points are returned untouched.
    Identity,
    /// Rodrigues rotation by `angle` radians about the unit vector `axis`.
    AxisAngle {
        axis: Vector3,
        angle: f64,
        sin: f64,
        cos: f64,
    },
}

impl Rotation {
    /// Rotation that carries `from` onto `to` along their great circle.
    pub fn between(from: LonLat, to: LonLat) -> Self {
        let from_vec = to_vector(from);
        let to_vec = to_vector(to);
        let angle = clamp(vector::dot(&from_vec, &to_vec), -1.0, 1.0).acos();
        if angle < EPSILON {
            return Self::Identity;
        }

        let raw_axis = vector::cross(&from_vec, &to_vec);
        let axis = if vector::norm(&raw_axis) < EPSILON {
            // Antipodal endpoints: any axis perpendicular to `from` works.
            let reference = if from_vec[0].abs() > 0.9 {
                [0.0, 1.0, 0.0]
            } else {
                [1.0, 0.0, 0.0]
            };
            vector::normalize(&vector::cross(&from_vec, &reference))
        } else {
            vector::normalize(&raw_axis)
        };

        Self::from_axis_angle(axis, angle)
    }

    /// Rotation by `angle` radians about `axis` (assumed unit length).
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        Self::AxisAngle {
            axis,
            angle,
            sin: angle.sin(),
            cos: angle.cos(),
        }
    }

    /// Rotation angle in radians; zero for the identity.
    pub fn angle(&self) -> f64 {
        match self {
            Self::Identity => 0.0,
            Self::AxisAngle { angle, .. } => *angle,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Rotate a unit vector.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        match self {
            Self::Identity => *v,
            Self::AxisAngle { axis, sin, cos, .. } => {
                // v cosθ + (k × v) sinθ + k (k · v)(1 − cosθ)
                let k_cross_v = vector::cross(axis, v);
                let k_dot_v = vector::dot(axis, v);
                let along = vector::scale(v, *cos);
                let across = vector::scale(&k_cross_v, *sin);
                let axial = vector::scale(axis, k_dot_v * (1.0 - cos));
                vector::add(&vector::add(&along, &across), &axial)
            }
        }
    }

    /// Rotate a geographic point.
    pub fn apply(&self, p: LonLat) -> LonLat {
        match self {
            Self::Identity => p,
            Self::AxisAngle { .. } => to_lon_lat(&self.rotate_vector(&to_vector(p))),
        }
    }
}

/// Build the rotation mapping `from` onto `to`. See [`Rotation::between`].
pub fn build_rotation(from: LonLat, to: LonLat) -> Rotation {
    Rotation::between(from, to)
}

/// Great-circle angle between two points, in radians.
pub fn angular_distance(a: LonLat, b: LonLat) -> f64 {
    let dot = vector::dot(&to_vector(a), &to_vector(b));
    clamp(dot, -1.0, 1.0).acos()
}
