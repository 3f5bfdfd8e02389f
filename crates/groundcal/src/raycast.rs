use glam::{DMat3, DVec2, DVec3};

use crate::camera::{CameraIntrinsics, CameraPose, PixelPoint};

/// Rays whose downward component is smaller than this never reach the ground.
pub const DOWNWARD_EPS: f64 = 1e-12;

/// Intersection of a back-projected pixel ray with the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldGroundPoint {
    /// Lateral coordinate, in meters.
    pub x: f64,
    /// Forward coordinate, in meters.
    pub y: f64,
    /// Always exactly zero.
    pub z: f64,
}

impl WorldGroundPoint {
    /// The point projected onto the ground plane, dropping `z`.
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Back-project a pixel into a unit direction in the camera frame.
pub fn pixel_to_camera_ray(pixel: PixelPoint, intrinsics: &CameraIntrinsics) -> DVec3 {
    let xy = intrinsics.pixel_to_normalized(pixel);
    // the norm is at least one since z = 1
    DVec3::new(xy.x, xy.y, 1.0).normalize()
}

/// Cast a pixel onto the ground plane.
///
/// # Arguments
///
/// * `pixel` - The pixel selected on the frame.
/// * `intrinsics` - The pinhole intrinsics of the camera.
/// * `pose` - The mounting height and orientation of the camera.
///
/// # Returns
///
/// The ground intersection, or `None` when the ray points at or above the horizon.
pub fn cast_to_ground(
    pixel: PixelPoint,
    intrinsics: &CameraIntrinsics,
    pose: &CameraPose,
) -> Option<WorldGroundPoint> {
    cast_with_rotation(pixel, intrinsics, pose, &pose.world_from_camera())
}

/// Cast every pixel onto the ground, keeping the hits in input order.
///
/// The rotation is composed once for the whole batch.
pub fn cast_all_to_ground(
    pixels: &[PixelPoint],
    intrinsics: &CameraIntrinsics,
    pose: &CameraPose,
) -> Vec<WorldGroundPoint> {
    let world_r_camera = pose.world_from_camera();
    pixels
        .iter()
        .filter_map(|&pixel| {
            let hit = cast_with_rotation(pixel, intrinsics, pose, &world_r_camera);
            if hit.is_none() {
                log::debug!("pixel ({}, {}) does not reach the ground", pixel.u, pixel.v);
            }
            hit
        })
        .collect()
}

fn cast_with_rotation(
    pixel: PixelPoint,
    intrinsics: &CameraIntrinsics,
    pose: &CameraPose,
    world_r_camera: &DMat3,
) -> Option<WorldGroundPoint> {
    let ray = *world_r_camera * pixel_to_camera_ray(pixel, intrinsics);

    if ray.z.is_nan() || ray.z >= -DOWNWARD_EPS {
        return None;
    }

    let t = -pose.height / ray.z;
    let hit = pose.center() + t * ray;
    if !(hit.x.is_finite() && hit.y.is_finite()) {
        return None;
    }

    Some(WorldGroundPoint {
        x: hit.x,
        y: hit.y,
        z: 0.0,
    })
}
