//! Country features: a geometry with a stable identity and its original anchor point.

use truesize_core::LonLat;
use truesize_core::coords::{to_lon_lat, to_vector};
use truesize_core::vector::{self, ZERO};

use crate::geometry::Geometry;
use crate::transform::{relocate, relocate_on_body};

/// A draggable shape. Transforms derive new features and leave this one untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    pub id: String,
    pub name: Option<String>,
    pub geometry: Geometry,
    /// Anchor used as the pivot for every rotation and scale.
    pub centroid: LonLat,
}

impl CountryFeature {
    /// Build a feature whose centroid is computed from the geometry.
    ///
    /// Geometries without positions, including [`Geometry::Unknown`] kinds whose
    /// coordinates are never read, are anchored at `(0, 0)`.
    pub fn new(id: impl Into<String>, name: Option<String>, geometry: Geometry) -> Self {
        let centroid = centroid(&geometry).unwrap_or_default();
        Self {
            id: id.into(),
            name,
            geometry,
            centroid,
        }
    }

    /// Same identity and anchor, different geometry.
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            geometry,
            centroid: self.centroid,
        }
    }

    /// Copy of this feature rotated so its centroid sits on `target`.
    pub fn relocated(&self, target: LonLat) -> Self {
        self.with_geometry(relocate(&self.geometry, self.centroid, target))
    }

    /// Copy of this feature scaled by `factor` about its centroid, then moved to `target`.
    pub fn relocated_on_body(&self, target: LonLat, factor: f64) -> Self {
        self.with_geometry(relocate_on_body(
            &self.geometry,
            self.centroid,
            target,
            factor,
        ))
    }

    /// Display label: the name when present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Spherical vertex centroid: the normalised mean of every vertex's unit vector.
///
/// Ring closures are not counted twice. Returns `None` for geometries without
/// positions. A single vertex is returned as given. When the mean vector
/// vanishes (vertices balanced around the sphere) the first vertex is used.
pub fn centroid(geometry: &Geometry) -> Option<LonLat> {
    let mut sum = ZERO;
    let mut first = None;
    let mut count = 0usize;
    geometry.for_each_vertex(&mut |position: &[f64]| {
        if let [lon, lat, ..] = position {
            let p = LonLat::new(*lon, *lat);
            first.get_or_insert(p);
            sum = vector::add(&sum, &to_vector(p));
            count += 1;
        }
    });

    let first = first?;
    if count == 1 {
        return Some(first);
    }
    let mean = vector::normalize(&sum);
    if mean == ZERO {
        return Some(first);
    }
    Some(to_lon_lat(&mean))
}
