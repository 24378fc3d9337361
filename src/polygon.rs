use crate::{
    error::GeometryError,
    mercator::WebMercatorProjection,
    point::{MercatorBoundingBox, MercatorPoint, WGS84BoundingBox, WGS84Point},
};

pub struct Polygon {
    pub wgs: Vec<WGS84Point>,
}

impl Polygon {
    pub fn info(&self) {
        log::info!("polygon: len: {}", self.wgs.len());
        log::info!("polygon: distinct: {}", self.distinct_vertices());
        log::info!("polygon: wgs bbox: {}", self.wgsbbox());
        if let Ok(bbox) = self.mercatorbbox() {
            log::info!("polygon: mercator bbox: {}", bbox);
            log::info!("polygon: width: {:.1}", bbox.width());
            log::info!("polygon: height: {:.1}", bbox.height());
            log::info!("polygon: bbox area: {:.1}", bbox.area());
        }
    }

    pub fn wgsbbox(&self) -> WGS84BoundingBox {
        let (min, max) = self.wgs.iter().fold(
            (self.wgs[0].clone(), self.wgs[0].clone()), // Initialize with the first coordinate
            |(min, max), curr| {
                (
                    WGS84Point {
                        lon: min.lon.min(curr.lon),
                        lat: min.lat.min(curr.lat),
                    }, // New min
                    WGS84Point {
                        lon: max.lon.max(curr.lon),
                        lat: max.lat.max(curr.lat),
                    }, // New max
                )
            },
        );
        WGS84BoundingBox { min, max }
    }

    pub fn mercatorbbox(&self) -> Result<MercatorBoundingBox, GeometryError> {
        Ok(metric_bounds(&self.mercator()?))
    }

    pub fn mercator(&self) -> Result<Vec<MercatorPoint>, GeometryError> {
        let proj = WebMercatorProjection::make();
        proj.to_metric(&self.wgs)
    }

    // Count vertices that differ from every earlier one. The closing
    // point of a closed ring never counts twice.
    pub fn distinct_vertices(&self) -> usize {
        let mut seen: Vec<&WGS84Point> = Vec::new();
        for w in &self.wgs {
            if !seen.iter().any(|s| **s == *w) {
                seen.push(w);
            }
        }
        seen.len()
    }

    // Planar area in square meters: project to the metric frame, then
    // shoelace. Collinear or near-empty rings give 0, not an error.
    pub fn area(&self) -> Result<f64, GeometryError> {
        if self.distinct_vertices() < 3 {
            return Ok(0.0);
        }
        Ok(shoelace_area(&self.mercator()?))
    }

    // Unweighted mean of the listed coordinates, the duplicated closing
    // point included. Only good enough for centering a map view.
    pub fn centroid(&self) -> WGS84Point {
        assert!(!self.wgs.is_empty());
        let n = self.wgs.len() as f64;
        let (lon, lat) = self
            .wgs
            .iter()
            .fold((0.0, 0.0), |(lon, lat), w| (lon + w.lon, lat + w.lat));
        WGS84Point {
            lon: lon / n,
            lat: lat / n,
        }
    }
}

pub fn metric_bounds(points: &[MercatorPoint]) -> MercatorBoundingBox {
    let (min, max) = points.iter().fold(
        (points[0].clone(), points[0].clone()), // Initialize with the first coordinate
        |(min, max), curr| {
            (
                MercatorPoint {
                    x: min.x.min(curr.x),
                    y: min.y.min(curr.y),
                }, // New min
                MercatorPoint {
                    x: max.x.max(curr.x),
                    y: max.y.max(curr.y),
                }, // New max
            )
        },
    );
    MercatorBoundingBox { min, max }
}

pub fn shoelace_area(ring: &[MercatorPoint]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    // Signed sum of cross products of consecutive vertices. The wrap via
    // modulo closes the ring, so an explicit closing point only adds a
    // zero term and open and closed rings agree.
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let p1 = &ring[i];
        let p2 = &ring[(i + 1) % ring.len()];
        sum += (p1.x * p2.y) - (p1.y * p2.x);
    }

    (sum / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    fn field() -> Polygon {
        Polygon {
            wgs: vec![
                WGS84Point {
                    lon: 80.65,
                    lat: 16.5,
                },
                WGS84Point {
                    lon: 80.653,
                    lat: 16.5005,
                },
                WGS84Point {
                    lon: 80.652,
                    lat: 16.503,
                },
                WGS84Point {
                    lon: 80.649,
                    lat: 16.502,
                },
                WGS84Point {
                    lon: 80.65,
                    lat: 16.5,
                },
            ],
        }
    }

    #[test]
    fn test_shoelace_rectangle() {
        // 100 m x 50 m axis-aligned rectangle in the metric frame.
        let ring = vec![
            MercatorPoint { x: 0.0, y: 0.0 },
            MercatorPoint { x: 100.0, y: 0.0 },
            MercatorPoint { x: 100.0, y: 50.0 },
            MercatorPoint { x: 0.0, y: 50.0 },
            MercatorPoint { x: 0.0, y: 0.0 },
        ];
        assert!((shoelace_area(&ring) - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_shoelace_open_ring_agrees() {
        let closed = vec![
            MercatorPoint { x: 0.0, y: 0.0 },
            MercatorPoint { x: 30.0, y: 0.0 },
            MercatorPoint { x: 30.0, y: 20.0 },
            MercatorPoint { x: 0.0, y: 0.0 },
        ];
        let open = &closed[..3];
        assert_eq!(shoelace_area(&closed), shoelace_area(open));
        assert!((shoelace_area(open) - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_shoelace_matches_geo_crate() {
        let metric = field().mercator().unwrap();
        let reference = reference::planar_area(&metric);
        assert!(
            (shoelace_area(&metric) - reference).abs() < 1e-6 * reference,
            "{} vs {}",
            shoelace_area(&metric),
            reference
        );
    }

    #[test]
    fn test_area_of_degenerate_polygon_is_zero() {
        // Two distinct vertices plus the closing point, a line.
        let line = Polygon {
            wgs: vec![
                WGS84Point {
                    lon: 80.65,
                    lat: 16.5,
                },
                WGS84Point {
                    lon: 80.66,
                    lat: 16.51,
                },
                WGS84Point {
                    lon: 80.65,
                    lat: 16.5,
                },
            ],
        };
        assert_eq!(line.distinct_vertices(), 2);
        assert_eq!(line.area().unwrap(), 0.0);
    }

    #[test]
    fn test_area_rejects_bad_coordinates() {
        let polygon = Polygon {
            wgs: vec![
                WGS84Point {
                    lon: 200.0,
                    lat: 0.0,
                },
                WGS84Point { lon: 1.0, lat: 0.0 },
                WGS84Point { lon: 1.0, lat: 1.0 },
            ],
        };
        assert!(matches!(
            polygon.area(),
            Err(GeometryError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_centroid_includes_closing_point() {
        let polygon = Polygon {
            wgs: vec![
                WGS84Point { lon: 0.0, lat: 0.0 },
                WGS84Point { lon: 2.0, lat: 0.0 },
                WGS84Point { lon: 2.0, lat: 2.0 },
                WGS84Point { lon: 0.0, lat: 2.0 },
                WGS84Point { lon: 0.0, lat: 0.0 },
            ],
        };
        // Mean over all five listed points, closing duplicate included.
        let c = polygon.centroid();
        assert!((c.lon - 0.8).abs() < 1e-12);
        assert!((c.lat - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_bounds() {
        let bbox = field().wgsbbox();
        assert_eq!(bbox.min.lon, 80.649);
        assert_eq!(bbox.min.lat, 16.5);
        assert_eq!(bbox.max.lon, 80.653);
        assert_eq!(bbox.max.lat, 16.503);
        assert!(bbox.contains(&WGS84Point {
            lon: 80.65,
            lat: 16.501
        }));
    }
}
