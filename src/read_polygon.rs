use crate::point::WGS84Point;
use crate::polygon::Polygon;
use geojson::{Feature, GeoJson, Geometry, Value};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("invalid GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error("no polygon in input")]
    Empty,
    #[error("expected a Polygon geometry, got {0}")]
    NotAPolygon(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

// Accepts the upload format: a FeatureCollection whose first feature
// carries a Polygon geometry, a single Feature, or a bare geometry
// object. Only the exterior ring is taken; holes are out of scope.
pub fn read_polygon(content: &str) -> Result<Polygon, ReadError> {
    let geojson: GeoJson = content.parse()?;
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            let feature = collection
                .features
                .into_iter()
                .next()
                .ok_or(ReadError::Empty)?;
            feature_polygon(feature)
        }
        GeoJson::Feature(feature) => feature_polygon(feature),
        GeoJson::Geometry(geometry) => geometry_polygon(geometry),
    }
}

pub fn read_polygon_file(path: &str) -> Result<Polygon, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_string(),
        source,
    })?;
    read_polygon(&content)
}

fn feature_polygon(feature: Feature) -> Result<Polygon, ReadError> {
    match feature.geometry {
        Some(geometry) => geometry_polygon(geometry),
        None => Err(ReadError::NotAPolygon("no geometry".to_string())),
    }
}

fn geometry_polygon(geometry: Geometry) -> Result<Polygon, ReadError> {
    match geometry.value {
        Value::Polygon(coords) => {
            let ring = coords.into_iter().next().ok_or(ReadError::Empty)?;
            if ring.is_empty() {
                return Err(ReadError::Empty);
            }
            let wgs = ring
                .iter()
                .map(|p| WGS84Point {
                    lon: p[0],
                    lat: p[1],
                })
                .collect();
            Ok(Polygon { wgs })
        }
        other => Err(ReadError::NotAPolygon(other.type_name().to_string())),
    }
}
