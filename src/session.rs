//! Drag session: the original features, where each one was dropped, and the body they sit on.
//!
//! Placements are never cached. Every call to [`DragSession::placed`] rebuilds
//! the moved geometry from the untouched originals and the current targets.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;
use truesize_config::BodyConfig;
use truesize_core::LonLat;
use truesize_export::summary;
use truesize_geometry::CountryFeature;
use truesize_sphere::{angular_distance, mercator_scale};

/// Errors surfaced by session lookups.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("feature '{0}' not found")]
    UnknownFeature(String),
}

/// A feature moved to its drop target.
#[derive(Debug, Clone)]
pub struct Placement {
    pub feature: CountryFeature,
    pub origin: LonLat,
    pub target: LonLat,
    /// Great-circle distance dragged, in radians.
    pub distance_rad: f64,
    /// Apparent size change on a Mercator map; may be huge or infinite near the poles.
    pub mercator_scale: f64,
    /// Linear scale applied for the target body, if any.
    pub body_factor: Option<f64>,
}

impl Placement {
    /// CSV row for this placement.
    pub fn summary_record<'a>(&'a self, body: Option<&'a str>) -> summary::Record<'a> {
        summary::Record {
            id: &self.feature.id,
            name: self.feature.name.as_deref().unwrap_or(""),
            origin_lon: self.origin.lon,
            origin_lat: self.origin.lat,
            target_lon: self.target.lon,
            target_lat: self.target.lat,
            distance_deg: self.distance_rad.to_degrees(),
            mercator_scale: self.mercator_scale,
            body: body.unwrap_or("Earth"),
            body_factor: self.body_factor.unwrap_or(1.0),
        }
    }
}

/// Interactive state for dragging features around.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    features: Vec<CountryFeature>,
    targets: BTreeMap<String, LonLat>,
    body: Option<BodyConfig>,
}

impl DragSession {
    pub fn new(features: Vec<CountryFeature>) -> Self {
        Self {
            features,
            targets: BTreeMap::new(),
            body: None,
        }
    }

    /// Original, untransformed features.
    pub fn features(&self) -> &[CountryFeature] {
        &self.features
    }

    pub fn feature(&self, id: &str) -> Option<&CountryFeature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Drop target of a feature, if it has been dragged.
    pub fn target(&self, id: &str) -> Option<LonLat> {
        self.targets.get(id).copied()
    }

    /// Record that feature `id` was dropped at `target`.
    pub fn drag(&mut self, id: &str, target: LonLat) -> Result<(), SessionError> {
        let feature = self
            .feature(id)
            .ok_or_else(|| SessionError::UnknownFeature(id.to_string()))?;
        debug!(feature = %feature.id, %target, "drag");
        self.targets.insert(id.to_string(), target);
        Ok(())
    }

    /// Return feature `id` to its original position.
    pub fn reset(&mut self, id: &str) -> Result<(), SessionError> {
        if self.feature(id).is_none() {
            return Err(SessionError::UnknownFeature(id.to_string()));
        }
        self.targets.remove(id);
        Ok(())
    }

    /// Forget every drop target.
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Body that dragged features are shown on; `None` means Earth.
    pub fn body(&self) -> Option<&BodyConfig> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, body: Option<BodyConfig>) {
        debug!(body = body.as_ref().map(|b| b.name.as_str()), "target body changed");
        self.body = body;
    }

    /// Placement of a single dragged feature.
    ///
    /// A feature that has not been dragged is placed at its own centroid.
    pub fn place(&self, id: &str) -> Result<Placement, SessionError> {
        let feature = self
            .feature(id)
            .ok_or_else(|| SessionError::UnknownFeature(id.to_string()))?;
        let target = self.target(id).unwrap_or(feature.centroid);
        Ok(self.place_feature(feature, target))
    }

    /// Placements of every dragged feature, in catalog order.
    pub fn placed(&self) -> Vec<Placement> {
        self.features
            .iter()
            .filter_map(|feature| {
                let target = self.targets.get(&feature.id)?;
                Some(self.place_feature(feature, *target))
            })
            .collect()
    }

    fn place_feature(&self, feature: &CountryFeature, target: LonLat) -> Placement {
        let origin = feature.centroid;
        let body_factor = self.body.as_ref().map(BodyConfig::scale_factor);
        let moved = match body_factor {
            Some(factor) => feature.relocated_on_body(target, factor),
            None => feature.relocated(target),
        };
        Placement {
            feature: moved,
            origin,
            target,
            distance_rad: angular_distance(origin, target),
            mercator_scale: mercator_scale(origin.lat, target.lat),
            body_factor,
        }
    }
}
