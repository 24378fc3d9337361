use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::Direction;
use geo::{Area, Coord, Orient, Polygon};

use crate::point::{MercatorPoint, WGS84Point};

pub fn geodesic_area(polygon: &[WGS84Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    // Convert WGS84Point to geo::Coord
    let coords: Vec<Coord<f64>> = polygon
        .iter()
        .map(|p| Coord { x: p.lon, y: p.lat })
        .collect();

    // Create a geo::Polygon (exterior ring, no holes)
    let mut geo_polygon = Polygon::new(coords.into(), vec![]);
    geo_polygon = geo_polygon.orient(Direction::Default);

    // Compute geodesic area in square meters
    geo_polygon.geodesic_area_unsigned()
}

pub fn planar_area(polygon: &[MercatorPoint]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = polygon.iter().map(|p| Coord { x: p.x, y: p.y }).collect();

    let mut geo_polygon = Polygon::new(coords.into(), vec![]);
    geo_polygon = geo_polygon.orient(Direction::Default);

    geo_polygon.unsigned_area()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_area_rectangle() {
        let ring = vec![
            MercatorPoint { x: 0.0, y: 0.0 },
            MercatorPoint { x: 100.0, y: 0.0 },
            MercatorPoint { x: 100.0, y: 50.0 },
            MercatorPoint { x: 0.0, y: 50.0 },
        ];
        assert!((planar_area(&ring) - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_is_zero() {
        let line = vec![
            WGS84Point { lon: 0.0, lat: 0.0 },
            WGS84Point { lon: 1.0, lat: 1.0 },
        ];
        assert_eq!(geodesic_area(&line), 0.0);
    }
}
