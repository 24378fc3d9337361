use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct WGS84Point {
    pub lon: f64,
    pub lat: f64,
}

impl WGS84Point {
    pub fn in_bounds(&self) -> bool {
        -180.0 <= self.lon && self.lon <= 180.0 && -90.0 <= self.lat && self.lat <= 90.0
    }
}

impl fmt::Display for WGS84Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgs(lat: {:.5}, lon: {:.5})", self.lat, self.lon)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for MercatorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mercator(x: {:.2}, y: {:.2})", self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct WGS84BoundingBox {
    pub min: WGS84Point,
    pub max: WGS84Point,
}

impl WGS84BoundingBox {
    pub fn contains(&self, w: &WGS84Point) -> bool {
        w.lon >= self.min.lon
            && w.lon <= self.max.lon
            && w.lat >= self.min.lat
            && w.lat <= self.max.lat
    }
}

impl fmt::Display for WGS84BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgsbbox(min: {}, max: {})", self.min, self.max)
    }
}

#[derive(Clone, Debug)]
pub struct MercatorBoundingBox {
    pub min: MercatorPoint,
    pub max: MercatorPoint,
}

impl MercatorBoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl fmt::Display for MercatorBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mercatorbbox(min: {}, max: {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(
            WGS84Point {
                lon: 80.65,
                lat: 16.5
            }
            .in_bounds()
        );
        assert!(
            WGS84Point {
                lon: -180.0,
                lat: 90.0
            }
            .in_bounds()
        );
        assert!(
            !WGS84Point {
                lon: 181.0,
                lat: 0.0
            }
            .in_bounds()
        );
        assert!(
            !WGS84Point {
                lon: 0.0,
                lat: -90.5
            }
            .in_bounds()
        );
    }

    #[test]
    fn test_mercator_bbox_dimensions() {
        let bbox = MercatorBoundingBox {
            min: MercatorPoint { x: 10.0, y: 20.0 },
            max: MercatorPoint { x: 110.0, y: 70.0 },
        };
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 50.0);
        assert_eq!(bbox.area(), 5000.0);
    }
}
