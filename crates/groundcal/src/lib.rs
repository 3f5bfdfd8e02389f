#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Ground setting
//!
//! An operator picks four pixels on a live frame that should be the corners of a
//! rectangle on the ground. Given the camera mounting height, its orientation and
//! its pinhole intrinsics, each pixel is back-projected into a ray, the ray is
//! intersected with the ground plane `z = 0`, and the physical width and depth of
//! the resulting footprint are measured.
//!
//! ```rust
//! use groundcal::camera::{CameraIntrinsics, CameraPose, PixelPoint};
//! use groundcal::measure::compute_ground_dimensions;
//!
//! // 3 m high, looking straight down.
//! let pose = CameraPose::new(3.0, 0.0, -90.0, 0.0).unwrap();
//! let intrinsics = CameraIntrinsics::new((1000.0, 1000.0), (960.0, 540.0)).unwrap();
//! let pixels = [
//!     PixelPoint::new(460.0, 40.0),
//!     PixelPoint::new(1460.0, 40.0),
//!     PixelPoint::new(1460.0, 1040.0),
//!     PixelPoint::new(460.0, 1040.0),
//! ];
//!
//! let measurement = compute_ground_dimensions(&pose, &intrinsics, &pixels, None);
//! assert!((measurement.width - 3.0).abs() < 1e-9);
//! assert!((measurement.depth - 3.0).abs() < 1e-9);
//! ```

/// Camera pose, intrinsics and pixel types.
pub mod camera;

/// Half-plane clipping of ground footprints.
pub mod clip;

/// Error types for the crate.
pub mod error;

/// Footprint measurement and fallback policy.
pub mod measure;

/// World-from-camera rotation composition.
pub mod pose;

/// Pixel back-projection onto the ground plane.
pub mod raycast;

/// Persisted per-camera ground setting.
pub mod setting;

pub use error::GroundError;
pub use measure::{compute_ground_dimensions, ground_dimensions, Measurement};
