//! Per-vertex transforms over whole geometry trees.
//!
//! Every function here returns a fresh geometry of the same shape as its input;
//! extra coordinate dimensions beyond lon/lat are carried through unchanged.

use truesize_core::LonLat;
use truesize_core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use truesize_core::units::clamp;
use truesize_sphere::build_rotation;

use crate::geometry::{Geometry, Position};

/// Apply `f` to the lon/lat of a single position, keeping any trailing values.
///
/// Positions with fewer than two values are copied unchanged.
pub fn transform_position<F>(position: &[f64], f: &F) -> Position
where
    F: Fn(LonLat) -> LonLat,
{
    let [lon, lat, rest @ ..] = position else {
        return position.to_vec();
    };
    let moved = f(LonLat::new(*lon, *lat));
    let mut out = Vec::with_capacity(position.len());
    out.push(moved.lon);
    out.push(moved.lat);
    out.extend_from_slice(rest);
    out
}

/// Apply a point transform (typically [`truesize_sphere::Rotation::apply`]) to every vertex.
pub fn rotate_geometry<F>(geometry: &Geometry, rotate: F) -> Geometry
where
    F: Fn(LonLat) -> LonLat,
{
    geometry.map_positions(&|position: &[f64]| transform_position(position, &rotate))
}

/// Scale one point's offset from `center` by `factor`, clamped to renderable bounds.
pub fn scale_point(p: LonLat, center: LonLat, factor: f64) -> LonLat {
    LonLat {
        lon: clamp(
            center.lon + (p.lon - center.lon) * factor,
            -MAX_LONGITUDE,
            MAX_LONGITUDE,
        ),
        lat: clamp(
            center.lat + (p.lat - center.lat) * factor,
            -MAX_LATITUDE,
            MAX_LATITUDE,
        ),
    }
}

/// Scale every vertex about `center` by a linear `factor`.
pub fn scale_geometry(geometry: &Geometry, center: LonLat, factor: f64) -> Geometry {
    rotate_geometry(geometry, |p| scale_point(p, center, factor))
}

/// Rigidly move a geometry so that `from` lands on `to`.
pub fn relocate(geometry: &Geometry, from: LonLat, to: LonLat) -> Geometry {
    let rotation = build_rotation(from, to);
    rotate_geometry(geometry, |p| rotation.apply(p))
}

/// Resize a geometry for a body `factor` times smaller than Earth, then move it to `to`.
///
/// Scaling happens about the original `centroid` before the rotation; the
/// reverse order gives a different shape because scaling is centre-relative.
pub fn relocate_on_body(
    geometry: &Geometry,
    centroid: LonLat,
    to: LonLat,
    factor: f64,
) -> Geometry {
    let scaled = scale_geometry(geometry, centroid, factor);
    relocate(&scaled, centroid, to)
}
