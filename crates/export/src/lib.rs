//! Export helpers for GeoJSON and CSV artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod geojson {
    use std::io::{self, Write};

    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use truesize_geometry::{CountryFeature, Geometry};

    #[derive(Serialize)]
    struct FeatureCollection<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        features: Vec<Feature<'a>>,
    }

    #[derive(Serialize)]
    struct Feature<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        id: &'a str,
        properties: Properties<'a>,
        geometry: &'a Geometry,
    }

    #[derive(Serialize)]
    struct Properties<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<&'a str>,
        centroid: [f64; 2],
    }

    /// Write features as a pretty-printed FeatureCollection.
    ///
    /// The original centroid is kept in `properties.centroid`, so re-importing
    /// a moved feature keeps its anchor.
    pub fn write_feature_collection(
        writer: &mut dyn Write,
        features: &[CountryFeature],
    ) -> io::Result<()> {
        let collection = FeatureCollection {
            kind: "FeatureCollection",
            features: features
                .iter()
                .map(|f| Feature {
                    kind: "Feature",
                    id: &f.id,
                    properties: Properties {
                        name: f.name.as_deref(),
                        centroid: [f.centroid.lon, f.centroid.lat],
                    },
                    geometry: &f.geometry,
                })
                .collect(),
        };
        to_writer_pretty(&mut *writer, &collection)?;
        writeln!(writer)?;
        writer.flush()
    }
}

pub mod summary {
    use std::io::Write;

    use serde::Serialize;

    /// One CSV row describing where a feature was placed.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub id: &'a str,
        pub name: &'a str,
        pub origin_lon: f64,
        pub origin_lat: f64,
        pub target_lon: f64,
        pub target_lat: f64,
        pub distance_deg: f64,
        pub mercator_scale: f64,
        pub body: &'a str,
        pub body_factor: f64,
    }

    /// Write the records as CSV with a header row.
    pub fn write_records<W: Write>(writer: W, records: &[Record<'_>]) -> csv::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()?;
        Ok(())
    }
}
