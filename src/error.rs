#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("coordinate out of range: lon {lon}, lat {lat}")]
    InvalidCoordinate { lon: f64, lat: f64 },
    #[error("invalid row width {row_width}: {detail}")]
    InvalidSpacing { row_width: f64, detail: String },
    #[error("polygon has {distinct} distinct vertices, need at least 3")]
    DegeneratePolygon { distinct: usize },
}
