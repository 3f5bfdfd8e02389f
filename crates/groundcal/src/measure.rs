use glam::DVec2;

use crate::camera::{CameraIntrinsics, CameraPose, PixelPoint};
use crate::clip::clip_to_depth_band;
use crate::raycast::cast_all_to_ground;

/// Physical extent of a ground footprint, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Span along world X, across the view.
    pub width: f64,
    /// Span along world Y, away from the camera.
    pub depth: f64,
}

impl Measurement {
    /// No usable footprint.
    pub const ZERO: Self = Self {
        width: 0.0,
        depth: 0.0,
    };

    /// Creates a measurement, clamping negative or NaN spans to zero.
    pub fn new(width: f64, depth: f64) -> Self {
        Self {
            width: width.max(0.0),
            depth: depth.max(0.0),
        }
    }

    /// Returns `true` when the footprint has no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.depth == 0.0
    }
}

impl From<Measurement> for (f64, f64) {
    fn from(m: Measurement) -> Self {
        (m.width, m.depth)
    }
}

/// Measure the ground footprint outlined by a set of pixels.
///
/// # Arguments
///
/// * `pose` - Mounting height and orientation of the camera.
/// * `intrinsics` - Pinhole intrinsics of the camera.
/// * `pixel_points` - Pixels outlining the footprint, usually four corners.
/// * `depth_scale` - Optional maximum usable depth, in meters.
///
/// # Returns
///
/// The width and depth of the axis-aligned bounding box of the footprint.
///
/// Pixels that do not reach the ground are dropped. With fewer than two ground
/// samples the result is [`Measurement::ZERO`]. Two samples are treated as
/// opposite corners of a box. Three or more form a polygon that is clipped to
/// `0 <= y <= depth_scale` before measuring. This function never fails: invalid
/// intrinsics also produce [`Measurement::ZERO`].
pub fn compute_ground_dimensions(
    pose: &CameraPose,
    intrinsics: &CameraIntrinsics,
    pixel_points: &[PixelPoint],
    depth_scale: Option<f64>,
) -> Measurement {
    if !intrinsics.is_valid() {
        log::warn!(
            "invalid intrinsics focal_length={:?} principal_point={:?}, skipping measurement",
            intrinsics.focal_length,
            intrinsics.principal_point
        );
        return Measurement::ZERO;
    }

    let hits: Vec<DVec2> = cast_all_to_ground(pixel_points, intrinsics, pose)
        .iter()
        .map(|hit| hit.xy())
        .collect();

    log::debug!(
        "{} of {} pixels reach the ground",
        hits.len(),
        pixel_points.len()
    );

    match hits.as_slice() {
        [] | [_] => Measurement::ZERO,
        [a, b] => measure_diagonal(*a, *b, depth_scale),
        polygon => measure_polygon(polygon, depth_scale),
    }
}

/// Measure the ground footprint from plain values.
///
/// Lengths are in meters, angles in degrees and pixels in image coordinates.
/// Equivalent to [`compute_ground_dimensions`] without constructing the camera
/// types first.
#[allow(clippy::too_many_arguments)]
pub fn ground_dimensions(
    camera_height_m: f64,
    roll_deg: f64,
    pitch_deg: f64,
    yaw_deg: f64,
    focal_length: (f64, f64),
    principal_point: (f64, f64),
    pixel_points: &[(f64, f64)],
    depth_scale_m: Option<f64>,
) -> (f64, f64) {
    let pose = CameraPose {
        height: camera_height_m,
        yaw: yaw_deg,
        pitch: pitch_deg,
        roll: roll_deg,
    };
    let intrinsics = CameraIntrinsics {
        focal_length,
        principal_point,
    };
    let pixels: Vec<PixelPoint> = pixel_points.iter().map(|&p| PixelPoint::from(p)).collect();

    compute_ground_dimensions(&pose, &intrinsics, &pixels, depth_scale_m).into()
}

/// Two samples span a box from corner to corner.
fn measure_diagonal(a: DVec2, b: DVec2, depth_scale: Option<f64>) -> Measurement {
    let width = (a.x - b.x).abs();
    let depth = match depth_scale {
        Some(max_depth) => {
            let near = a.y.min(b.y).max(0.0);
            let far = a.y.max(b.y).min(max_depth);
            far - near
        }
        None => (a.y - b.y).abs(),
    };
    Measurement::new(width, depth)
}

fn measure_polygon(polygon: &[DVec2], depth_scale: Option<f64>) -> Measurement {
    let clipped;
    let footprint = match depth_scale {
        Some(max_depth) => {
            clipped = clip_to_depth_band(polygon, 0.0, max_depth);
            log::debug!(
                "clipped footprint to depth {max_depth}: {} -> {} vertices",
                polygon.len(),
                clipped.len()
            );
            if clipped.len() < 3 {
                return Measurement::ZERO;
            }
            clipped.as_slice()
        }
        None => polygon,
    };

    let (min, max) = footprint.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    let span = max - min;
    Measurement::new(span.x, span.y)
}
