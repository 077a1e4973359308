//! Core constants, numeric helpers, and shared primitives for the truesize workspace.

/// Geometric constants shared across crates.
pub mod constants {
    /// Latitude bound kept after scaling to stay clear of projection poles (degrees).
    pub const MAX_LATITUDE: f64 = 89.9;
    /// Longitude bound (degrees).
    pub const MAX_LONGITUDE: f64 = 180.0;
    /// Threshold below which angles (radians) and vector magnitudes count as zero.
    pub const EPSILON: f64 = 1e-6;
    /// Mean diameter of Earth (km), the reference body for size comparisons.
    pub const EARTH_DIAMETER_KM: f64 = 12_742.0;
}

/// Numeric helpers.
pub mod units {
    /// Clamp `value` into `[min, max]`.
    ///
    /// Unlike `f64::clamp` this never panics on inverted bounds; NaN passes through.
    #[inline]
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    use super::constants::EPSILON;

    /// Alias for a 3D vector on (or through) the unit sphere.
    pub type Vector3 = [f64; 3];

    /// The zero vector.
    pub const ZERO: Vector3 = [0.0, 0.0, 0.0];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Unit vector in the direction of `v`, or the zero vector when `|v| < EPSILON`.
    #[inline]
    pub fn normalize(v: &Vector3) -> Vector3 {
        let len = norm(v);
        if len < EPSILON {
            return ZERO;
        }
        scale(v, 1.0 / len)
    }
}

/// Geographic coordinates and their Cartesian embedding.
pub mod coords {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use super::vector::Vector3;

    /// Longitude/latitude pair in degrees.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct LonLat {
        pub lon: f64,
        pub lat: f64,
    }

    impl LonLat {
        pub const fn new(lon: f64, lat: f64) -> Self {
            Self { lon, lat }
        }
    }

    impl From<(f64, f64)> for LonLat {
        fn from((lon, lat): (f64, f64)) -> Self {
            Self { lon, lat }
        }
    }

    impl fmt::Display for LonLat {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{},{}", self.lon, self.lat)
        }
    }

    /// Errors raised when parsing a `"lon,lat"` string.
    #[derive(Debug, Error, PartialEq)]
    pub enum ParseLonLatError {
        #[error("expected \"lon,lat\", got '{0}'")]
        Format(String),
        #[error("invalid number '{0}'")]
        Number(String),
    }

    impl FromStr for LonLat {
        type Err = ParseLonLatError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let (lon, lat) = s
                .split_once(',')
                .ok_or_else(|| ParseLonLatError::Format(s.to_string()))?;
            let parse = |part: &str| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| ParseLonLatError::Number(part.trim().to_string()))
            };
            Ok(Self {
                lon: parse(lon)?,
                lat: parse(lat)?,
            })
        }
    }

    /// Map a lon/lat pair (degrees) onto the unit sphere.
    ///
    /// `x = cos(lat)·cos(lon)`, `y = cos(lat)·sin(lon)`, `z = sin(lat)`.
    #[inline]
    pub fn to_vector(p: LonLat) -> Vector3 {
        let lon = p.lon.to_radians();
        let lat = p.lat.to_radians();
        let cos_lat = lat.cos();
        [cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()]
    }

    /// Inverse of [`to_vector`]. The input need not be normalised.
    #[inline]
    pub fn to_lon_lat(v: &Vector3) -> LonLat {
        let lon = v[1].atan2(v[0]);
        let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt());
        LonLat {
            lon: lon.to_degrees(),
            lat: lat.to_degrees(),
        }
    }
}

pub use coords::{LonLat, ParseLonLatError};
