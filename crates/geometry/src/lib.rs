//! GeoJSON-shaped geometry and the per-vertex transforms that move it over the sphere.

pub mod feature;
pub mod geojson;
pub mod geometry;
pub mod transform;

pub use feature::{CountryFeature, centroid};
pub use geojson::{GeoJsonError, load_features, parse_feature_collection, parse_geometry};
pub use geometry::{Geometry, Position, RawGeometry};
pub use transform::{relocate, relocate_on_body, rotate_geometry, scale_geometry};
