use crate::{
    error::GeometryError,
    mercator::WebMercatorProjection,
    point::{MercatorPoint, WGS84Point},
    polygon::{Polygon, metric_bounds},
};

// Upper bound on probe lines per scan. Guards against a row width that
// is tiny relative to the field extent looping effectively forever.
const MAX_PROBES: usize = 100_000;

// A probe landing on max_x within this tolerance is still scanned.
const SCAN_EPS: f64 = 1e-9;

// Crossing ordinates closer than this are one vertex touch, and
// intervals closer than this are one chain.
const MERGE_EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub wgs: Vec<WGS84Point>,
}

// Vertical rows across the field, west to east, each clipped to the
// boundary. Chains sharing a probe line are ordered south to north.
pub fn generate_paths(polygon: &Polygon, row_width: f64) -> Result<Vec<Path>, GeometryError> {
    let distinct = polygon.distinct_vertices();
    if distinct < 3 {
        return Err(GeometryError::DegeneratePolygon { distinct });
    }
    let proj = WebMercatorProjection::make();
    let ring = proj.to_metric(&polygon.wgs)?;
    let chains = scan_paths(&ring, row_width)?;
    let mut paths = Vec::with_capacity(chains.len());
    for chain in &chains {
        paths.push(Path {
            wgs: proj.to_geographic(chain)?,
        });
    }
    Ok(paths)
}

// The metric-frame scan: probe lines at x = min_x, min_x + row_width, ...
// up to and including max_x.
fn scan_paths(
    ring: &[MercatorPoint],
    row_width: f64,
) -> Result<Vec<Vec<MercatorPoint>>, GeometryError> {
    if !row_width.is_finite() || row_width <= 0.0 {
        return Err(GeometryError::InvalidSpacing {
            row_width,
            detail: "row width must be a positive number of meters".to_string(),
        });
    }
    let bbox = metric_bounds(ring);
    // Probes sit at min_x + i * row_width while that stays at or below
    // max_x; the tolerance keeps a probe landing exactly on max_x.
    let implied = ((bbox.width() + SCAN_EPS) / row_width).floor();
    if implied >= MAX_PROBES as f64 {
        return Err(GeometryError::InvalidSpacing {
            row_width,
            detail: format!(
                "would scan {:.0} probe lines over a {:.1} m extent (limit {})",
                implied,
                bbox.width(),
                MAX_PROBES
            ),
        });
    }
    let count = implied as usize + 1;

    let mut chains = Vec::new();
    for i in 0..count {
        let x = bbox.min.x + i as f64 * row_width;
        let intervals = clip_vertical(ring, x);
        log::trace!("probe x={:.2}: {} chains", x, intervals.len());
        for (y0, y1) in intervals {
            chains.push(vec![
                MercatorPoint { x, y: y0 },
                MercatorPoint { x, y: y1 },
            ]);
        }
    }
    Ok(chains)
}

// Intersect the infinite vertical line at x with the ring, returning
// disjoint inside intervals sorted by ascending y. Edges collinear with
// the probe keep their full span; every other edge touching the probe
// contributes a crossing ordinate, and the gap between two consecutive
// crossings is kept iff its midpoint lies inside the ring. A bare vertex
// touch dedupes to a single crossing and yields nothing.
fn clip_vertical(ring: &[MercatorPoint], x: f64) -> Vec<(f64, f64)> {
    let n = ring.len();
    let mut intervals: Vec<(f64, f64)> = Vec::new();
    let mut crossings: Vec<f64> = Vec::new();
    for i in 0..n {
        let p = &ring[i];
        let q = &ring[(i + 1) % n];
        if p.x == x && q.x == x {
            if p.y != q.y {
                intervals.push((p.y.min(q.y), p.y.max(q.y)));
            }
        } else if (p.x - x) * (q.x - x) <= 0.0 {
            let t = (x - p.x) / (q.x - p.x);
            crossings.push(p.y + t * (q.y - p.y));
        }
    }

    crossings.sort_by(|a, b| a.total_cmp(b));
    crossings.dedup_by(|a, b| (*a - *b).abs() <= MERGE_EPS);
    for pair in crossings.windows(2) {
        let mid = (pair[0] + pair[1]) / 2.0;
        if point_in_ring(ring, x, mid) {
            intervals.push((pair[0], pair[1]));
        }
    }

    merge_intervals(intervals)
}

fn merge_intervals(mut intervals: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    intervals.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    let mut merged: Vec<(f64, f64)> = Vec::new();
    for (lo, hi) in intervals {
        if let Some(last) = merged.last_mut() {
            if lo <= last.1 + MERGE_EPS {
                last.1 = last.1.max(hi);
                continue;
            }
        }
        merged.push((lo, hi));
    }
    merged
}

// Ray casting: cast to the right and count edge crossings. Odd means
// inside. Points exactly on the boundary are not this function's
// problem; the caller only asks about gap midpoints.
fn point_in_ring(ring: &[MercatorPoint], px: f64, py: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = ring[i].x_y();
        let (xj, yj) = ring[j].x_y();
        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}
