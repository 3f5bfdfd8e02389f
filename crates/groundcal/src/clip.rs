//! Sutherland–Hodgman clipping of ground footprints against horizontal bands.
//!
//! Footprints live on the ground plane with `y` pointing away from the camera. The
//! only clip region ever needed is a depth band `y_min <= y <= y_max`, so the
//! polygon goes through two half-plane passes with fixed directions.

use glam::DVec2;

/// Ordered ground-plane vertices of a footprint. May be empty after clipping.
pub type FootprintPolygon = Vec<DVec2>;

/// Slack allowed when deciding whether a vertex is inside a half-plane.
pub const INSIDE_EPS: f64 = 1e-12;

/// Edges with a smaller `y` extent are treated as horizontal.
pub const HORIZONTAL_EPS: f64 = 1e-12;

/// Clip a polygon to the band `y_min <= y <= y_max`.
///
/// # Arguments
///
/// * `polygon` - Footprint vertices in order. Orientation does not matter.
/// * `y_min` - Lower bound of the band.
/// * `y_max` - Upper bound of the band.
///
/// # Returns
///
/// The clipped vertices. Fewer than three vertices means no usable area survives.
///
/// Example:
///
/// ```
/// use glam::DVec2;
/// use groundcal::clip::clip_to_depth_band;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(2.0, 2.0),
///     DVec2::new(0.0, 2.0),
/// ];
/// let clipped = clip_to_depth_band(&square, 0.5, 1.5);
/// assert_eq!(clipped.len(), 4);
/// assert!(clipped.iter().all(|p| p.y >= 0.5 && p.y <= 1.5));
/// ```
pub fn clip_to_depth_band(polygon: &[DVec2], y_min: f64, y_max: f64) -> FootprintPolygon {
    let above_min = clip_half_plane(polygon, y_min, |p| p.y >= y_min - INSIDE_EPS);
    clip_half_plane(&above_min, y_max, |p| p.y <= y_max + INSIDE_EPS)
}

/// One Sutherland–Hodgman pass against the boundary line `y = boundary`.
fn clip_half_plane(
    polygon: &[DVec2],
    boundary: f64,
    inside: impl Fn(&DVec2) -> bool,
) -> FootprintPolygon {
    let mut clipped = Vec::with_capacity(polygon.len() + 2);

    let n = polygon.len();
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];

        match (inside(&p), inside(&q)) {
            (true, true) => clipped.push(q),
            (true, false) => clipped.extend(intersect_boundary(p, q, boundary)),
            (false, true) => {
                clipped.extend(intersect_boundary(p, q, boundary));
                clipped.push(q);
            }
            (false, false) => {}
        }
    }

    clipped
}

/// Point where the edge `p -> q` crosses `y = boundary`.
///
/// Horizontal edges have no unique crossing and yield `None`.
fn intersect_boundary(p: DVec2, q: DVec2, boundary: f64) -> Option<DVec2> {
    let dy = q.y - p.y;
    if dy.abs() < HORIZONTAL_EPS {
        return None;
    }
    let t = (boundary - p.y) / dy;
    Some(DVec2::new(p.x + t * (q.x - p.x), boundary))
}
