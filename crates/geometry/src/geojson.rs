//! GeoJSON import for feature collections and bare geometries.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;
use truesize_core::LonLat;

use crate::feature::{CountryFeature, centroid};
use crate::geometry::Geometry;

/// Errors raised while reading GeoJSON input.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("failed to read GeoJSON: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a FeatureCollection, found '{0}'")]
    NotFeatureCollection(String),
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

/// Parse a single GeoJSON geometry object.
pub fn parse_geometry(json: &str) -> Result<Geometry, GeoJsonError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a FeatureCollection into country features.
///
/// Identity comes from the feature `id`, then `properties.name`, then the
/// feature's index. A `properties.centroid` of `[lon, lat]` overrides the
/// computed centroid. Features without geometry are skipped.
pub fn parse_feature_collection(json: &str) -> Result<Vec<CountryFeature>, GeoJsonError> {
    let collection: RawCollection = serde_json::from_str(json)?;
    if collection.kind != "FeatureCollection" {
        return Err(GeoJsonError::NotFeatureCollection(collection.kind));
    }

    let mut features = Vec::with_capacity(collection.features.len());
    for (index, raw) in collection.features.into_iter().enumerate() {
        let properties = raw.properties.unwrap_or_default();
        let name = properties
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let id = match raw.id {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => name.clone().unwrap_or_else(|| index.to_string()),
        };
        let Some(geometry) = raw.geometry else {
            warn!(feature = %id, "skipping feature without geometry");
            continue;
        };

        let anchor = properties
            .get("centroid")
            .and_then(lon_lat_from_value)
            .or_else(|| centroid(&geometry))
            .unwrap_or_default();
        features.push(CountryFeature {
            id,
            name,
            geometry,
            centroid: anchor,
        });
    }
    Ok(features)
}

/// Read and parse a FeatureCollection file.
pub fn load_features<P: AsRef<Path>>(path: P) -> Result<Vec<CountryFeature>, GeoJsonError> {
    let contents = std::fs::read_to_string(path)?;
    parse_feature_collection(&contents)
}

fn lon_lat_from_value(value: &Value) -> Option<LonLat> {
    match value.as_array()?.as_slice() {
        [lon, lat, ..] => Some(LonLat::new(lon.as_f64()?, lat.as_f64()?)),
        _ => None,
    }
}
