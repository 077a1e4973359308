//! Configuration models and loaders for truesize.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use truesize_core::constants::EARTH_DIAMETER_KM;

/// Default location of the shipped body catalog.
pub const DEFAULT_BODIES_PATH: &str = "data/bodies.yaml";

/// A celestial body a country can be placed on.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub diameter_km: f64,
    #[serde(default)]
    pub kind: Option<BodyKind>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Asteroid,
}

impl BodyConfig {
    /// Linear factor applied to a shape's angular extent when moved from Earth to this body.
    ///
    /// A body half Earth's diameter doubles the angle a country spans.
    pub fn scale_factor(&self) -> f64 {
        scale_factor(self.diameter_km)
    }
}

/// `EARTH_DIAMETER_KM / diameter_km`.
pub fn scale_factor(diameter_km: f64) -> f64 {
    EARTH_DIAMETER_KM / diameter_km
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{name}' has invalid diameter {diameter_km} (must be finite and positive)")]
    InvalidDiameter { name: String, diameter_km: f64 },
}

/// Load body records from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    validate_bodies(load_records(path)?)
}

/// Parse a YAML body list held in memory.
pub fn parse_bodies_yaml(contents: &str) -> Result<Vec<BodyConfig>, ConfigError> {
    validate_bodies(serde_yaml::from_str(contents)?)
}

fn validate_bodies(bodies: Vec<BodyConfig>) -> Result<Vec<BodyConfig>, ConfigError> {
    if let Some(body) = bodies
        .iter()
        .find(|b| !b.diameter_km.is_finite() || b.diameter_km <= 0.0)
    {
        return Err(ConfigError::InvalidDiameter {
            name: body.name.clone(),
            diameter_km: body.diameter_km,
        });
    }
    Ok(bodies)
}

/// Find a body by name, ignoring case.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Option<&'a BodyConfig> {
    bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
