//! Closed-form projection scale factors.

/// Apparent-size multiplier under Mercator when a shape moves from
/// `original_lat` to `current_lat` (degrees).
///
/// `cos(original) / cos(current)`. Unclamped: approaching the poles the
/// result grows without bound, and exactly at ±90° it is infinite or huge.
pub fn mercator_scale(original_lat: f64, current_lat: f64) -> f64 {
    original_lat.to_radians().cos() / current_lat.to_radians().cos()
}
