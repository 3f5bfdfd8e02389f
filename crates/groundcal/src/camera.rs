use glam::{DMat3, DVec2, DVec3};

use crate::error::{ensure_finite, GroundError};
use crate::pose;

/// Intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// The focal length in pixels (fx, fy)
    pub focal_length: (f64, f64),
    /// The principal point in pixels (cx, cy)
    pub principal_point: (f64, f64),
}

impl CameraIntrinsics {
    /// Creates new intrinsics, rejecting a zero or non-finite focal length.
    pub fn new(focal_length: (f64, f64), principal_point: (f64, f64)) -> Result<Self, GroundError> {
        let intrinsics = Self {
            focal_length,
            principal_point,
        };
        if !intrinsics.has_valid_focal_length() {
            return Err(GroundError::InvalidFocalLength(focal_length.0, focal_length.1));
        }
        ensure_finite("principal point x", principal_point.0)?;
        ensure_finite("principal point y", principal_point.1)?;
        Ok(intrinsics)
    }

    fn has_valid_focal_length(&self) -> bool {
        let (fx, fy) = self.focal_length;
        fx.is_finite() && fy.is_finite() && fx != 0.0 && fy != 0.0
    }

    /// Returns `true` when the focal lengths can be used as divisors and the
    /// principal point is finite.
    pub fn is_valid(&self) -> bool {
        self.has_valid_focal_length()
            && self.principal_point.0.is_finite()
            && self.principal_point.1.is_finite()
    }

    /// Convert a pixel into normalized image coordinates on the `z = 1` plane.
    pub fn pixel_to_normalized(&self, pixel: PixelPoint) -> DVec2 {
        let (fx, fy) = self.focal_length;
        let (cx, cy) = self.principal_point;
        DVec2::new((pixel.u - cx) / fx, (pixel.v - cy) / fy)
    }
}

/// Mounting height and orientation of a camera.
///
/// Angles are in degrees, as configured by the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Height of the optical center above the ground, in meters.
    pub height: f64,
    /// Rotation about the world up axis, in degrees.
    pub yaw: f64,
    /// Tilt about the camera right axis, in degrees. Negative looks down.
    pub pitch: f64,
    /// Rotation about the optical axis, in degrees.
    pub roll: f64,
}

impl CameraPose {
    /// Creates a new pose, rejecting non-finite values.
    ///
    /// # Arguments
    ///
    /// * `height` - Height of the optical center above the ground, in meters.
    /// * `yaw` - Yaw in degrees.
    /// * `pitch` - Pitch in degrees.
    /// * `roll` - Roll in degrees.
    pub fn new(height: f64, yaw: f64, pitch: f64, roll: f64) -> Result<Self, GroundError> {
        Ok(Self {
            height: ensure_finite("camera height", height)?,
            yaw: ensure_finite("yaw", yaw)?,
            pitch: ensure_finite("pitch", pitch)?,
            roll: ensure_finite("roll", roll)?,
        })
    }

    /// Rotation taking camera-frame directions into the world frame.
    pub fn world_from_camera(&self) -> DMat3 {
        pose::compose_world_rotation(self.yaw, self.pitch, self.roll)
    }

    /// Optical center in the world frame. The camera stands above the origin.
    pub fn center(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, self.height)
    }
}

/// A pixel coordinate selected on the displayed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    /// Column, in pixels.
    pub u: f64,
    /// Row, in pixels.
    pub v: f64,
}

impl PixelPoint {
    /// Creates a new pixel point.
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((u, v): (f64, f64)) -> Self {
        Self { u, v }
    }
}

impl From<[f64; 2]> for PixelPoint {
    fn from([u, v]: [f64; 2]) -> Self {
        Self { u, v }
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((u, v): (i32, i32)) -> Self {
        Self {
            u: u as f64,
            v: v as f64,
        }
    }
}
