//! Geometry tree mirroring the GeoJSON geometry kinds.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `type` names with a structured representation in [`Geometry`].
pub const KNOWN_KINDS: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// A coordinate tuple: longitude, latitude, then any extra dimensions (elevation, measure).
pub type Position = Vec<f64>;

/// GeoJSON geometry, tagged by its `type` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    /// Any other `type`, kept verbatim. Transforms pass it through unchanged.
    #[serde(untagged)]
    Unknown(RawGeometry),
}

/// A geometry object of an unrecognised `type`, stored exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawGeometry(Map<String, Value>);

impl RawGeometry {
    /// The object's `type` member.
    pub fn kind(&self) -> &str {
        self.0.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn members(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawGeometry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        match object.get("type").and_then(Value::as_str) {
            Some(kind) if KNOWN_KINDS.contains(&kind) => Err(de::Error::custom(format!(
                "malformed {kind} geometry"
            ))),
            Some(_) => Ok(Self(object)),
            None => Err(de::Error::missing_field("type")),
        }
    }
}

impl Geometry {
    /// GeoJSON `type` name of this geometry.
    pub fn kind(&self) -> &str {
        match self {
            Self::Point { .. } => "Point",
            Self::MultiPoint { .. } => "MultiPoint",
            Self::LineString { .. } => "LineString",
            Self::MultiLineString { .. } => "MultiLineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
            Self::GeometryCollection { .. } => "GeometryCollection",
            Self::Unknown(raw) => raw.kind(),
        }
    }

    /// Build a new geometry of identical shape with every position replaced by `f(position)`.
    pub fn map_positions<F>(&self, f: &F) -> Geometry
    where
        F: Fn(&[f64]) -> Position,
    {
        match self {
            Self::Point { coordinates } => Self::Point {
                coordinates: f(coordinates.as_slice()),
            },
            Self::MultiPoint { coordinates } => Self::MultiPoint {
                coordinates: map_line(coordinates, f),
            },
            Self::LineString { coordinates } => Self::LineString {
                coordinates: map_line(coordinates, f),
            },
            Self::MultiLineString { coordinates } => Self::MultiLineString {
                coordinates: map_rings(coordinates, f),
            },
            Self::Polygon { coordinates } => Self::Polygon {
                coordinates: map_rings(coordinates, f),
            },
            Self::MultiPolygon { coordinates } => Self::MultiPolygon {
                coordinates: coordinates
                    .iter()
                    .map(|polygon| map_rings(polygon, f))
                    .collect(),
            },
            Self::GeometryCollection { geometries } => Self::GeometryCollection {
                geometries: geometries.iter().map(|g| g.map_positions(f)).collect(),
            },
            Self::Unknown(raw) => Self::Unknown(raw.clone()),
        }
    }

    /// Visit every position in document order.
    pub fn for_each_position<F>(&self, f: &mut F)
    where
        F: FnMut(&[f64]),
    {
        match self {
            Self::Point { coordinates } => f(coordinates.as_slice()),
            Self::MultiPoint { coordinates } | Self::LineString { coordinates } => {
                coordinates.iter().for_each(|p| f(p.as_slice()));
            }
            Self::MultiLineString { coordinates } | Self::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(|p| f(p.as_slice()));
            }
            Self::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().flatten().for_each(|p| f(p.as_slice()));
            }
            Self::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.for_each_position(f);
                }
            }
            Self::Unknown(_) => {}
        }
    }

    /// Visit every distinct vertex: like [`Self::for_each_position`] but a
    /// polygon ring's closing position is skipped when it repeats the first.
    pub fn for_each_vertex<F>(&self, f: &mut F)
    where
        F: FnMut(&[f64]),
    {
        match self {
            Self::Polygon { coordinates } => {
                coordinates.iter().for_each(|ring| visit_ring(ring, f));
            }
            Self::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().for_each(|ring| visit_ring(ring, f));
            }
            Self::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.for_each_vertex(f);
                }
            }
            other => other.for_each_position(f),
        }
    }

    /// Total number of positions, including repeated ring closures.
    pub fn position_count(&self) -> usize {
        let mut count = 0;
        self.for_each_position(&mut |_| count += 1);
        count
    }
}

fn map_line<F>(line: &[Position], f: &F) -> Vec<Position>
where
    F: Fn(&[f64]) -> Position,
{
    line.iter().map(|p| f(p.as_slice())).collect()
}

fn map_rings<F>(rings: &[Vec<Position>], f: &F) -> Vec<Vec<Position>>
where
    F: Fn(&[f64]) -> Position,
{
    rings.iter().map(|ring| map_line(ring, f)).collect()
}

fn visit_ring<F>(ring: &[Position], f: &mut F)
where
    F: FnMut(&[f64]),
{
    let open = match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };
    open.iter().for_each(|p| f(p.as_slice()));
}
