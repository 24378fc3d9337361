use crate::error::GeometryError;
use crate::point::{MercatorPoint, WGS84Point};

pub struct WebMercatorProjection {
    wgs84_spec: proj4rs::proj::Proj,
    dst_spec: proj4rs::proj::Proj,
}

impl WebMercatorProjection {
    pub fn make() -> WebMercatorProjection {
        // The PROJ.4 parameters for EPSG:3857 (also known as Web Mercator or Pseudo-Mercator) are:
        // +proj=merc +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs
        // https://gis.stackexchange.com/questions/159572/proj4-for-epsg3857
        use proj4rs::proj::Proj;
        let spec =
            "+proj=merc +a=6378137 +b=6378137 +lon_0=0.0 +x_0=0.0 +y_0=0 +k=1.0 +units=m +no_defs";
        let dst_spec = Proj::from_proj_string(spec).unwrap();

        let spec = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";
        let wgs84_spec = Proj::from_proj_string(spec).unwrap();
        WebMercatorProjection {
            wgs84_spec,
            dst_spec,
        }
    }

    pub fn project(&self, wgs: &WGS84Point) -> Result<MercatorPoint, GeometryError> {
        if !wgs.in_bounds() {
            return Err(GeometryError::InvalidCoordinate {
                lon: wgs.lon,
                lat: wgs.lat,
            });
        }
        let mut p = (wgs.lon.to_radians(), wgs.lat.to_radians());
        // The spherical Mercator formula diverges at the poles; proj4rs
        // rejects those inputs and we surface that as InvalidCoordinate.
        proj4rs::transform::transform(&self.wgs84_spec, &self.dst_spec, &mut p).map_err(|_| {
            GeometryError::InvalidCoordinate {
                lon: wgs.lon,
                lat: wgs.lat,
            }
        })?;
        Ok(MercatorPoint { x: p.0, y: p.1 })
    }

    pub fn unproject(&self, m: &MercatorPoint) -> Result<WGS84Point, GeometryError> {
        let mut p = (m.x, m.y);
        proj4rs::transform::transform(&self.dst_spec, &self.wgs84_spec, &mut p).map_err(|_| {
            GeometryError::InvalidCoordinate { lon: m.x, lat: m.y }
        })?;
        Ok(WGS84Point {
            lon: p.0.to_degrees(),
            lat: p.1.to_degrees(),
        })
    }

    pub fn to_metric(&self, ring: &[WGS84Point]) -> Result<Vec<MercatorPoint>, GeometryError> {
        if ring.is_empty() {
            return Err(GeometryError::DegeneratePolygon { distinct: 0 });
        }
        ring.iter().map(|w| self.project(w)).collect()
    }

    pub fn to_geographic(&self, ring: &[MercatorPoint]) -> Result<Vec<WGS84Point>, GeometryError> {
        if ring.is_empty() {
            return Err(GeometryError::DegeneratePolygon { distinct: 0 });
        }
        ring.iter().map(|m| self.unproject(m)).collect()
    }
}
