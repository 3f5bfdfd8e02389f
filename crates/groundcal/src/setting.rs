//! Per-camera ground setting as persisted by the configuration console.
//!
//! The record keeps the console's field names and units: the camera height is
//! stored in centimeters while the engine works in meters. The console keeps
//! its settings in YAML; JSON is accepted as well.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{CameraIntrinsics, CameraPose, PixelPoint};
use crate::error::{ensure_finite, GroundError};
use crate::measure::{compute_ground_dimensions, Measurement};

const CENTIMETERS_PER_METER: f64 = 100.0;

/// Ground calibration of a single camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundSetting {
    /// Height of the camera above the ground, in centimeters.
    pub camera_height: f64,
    /// Roll in degrees.
    pub roll_angle: f64,
    /// Pitch in degrees.
    pub pitch_angle: f64,
    /// Yaw in degrees.
    pub yaw_angle: f64,
    /// Focal length `[fx, fy]` in pixels.
    pub focal_length: [f64; 2],
    /// Principal point `[cx, cy]` in pixels.
    pub principal_coord: [f64; 2],
    /// Pixels picked by the operator, usually the four corners of a ground rectangle.
    #[serde(default)]
    pub ground_coords: Vec<[f64; 2]>,
    /// Maximum usable depth in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_scale: Option<f64>,
    /// Confirmed footprint width in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_width: Option<f64>,
    /// Confirmed footprint depth in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_depth: Option<f64>,
}

impl GroundSetting {
    /// Camera pose with the height converted to meters.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            height: self.camera_height / CENTIMETERS_PER_METER,
            yaw: self.yaw_angle,
            pitch: self.pitch_angle,
            roll: self.roll_angle,
        }
    }

    /// Validated camera intrinsics.
    pub fn intrinsics(&self) -> Result<CameraIntrinsics, GroundError> {
        let [fx, fy] = self.focal_length;
        let [cx, cy] = self.principal_coord;
        CameraIntrinsics::new((fx, fy), (cx, cy))
    }

    /// The operator's pixels.
    pub fn pixel_points(&self) -> Vec<PixelPoint> {
        self.ground_coords.iter().map(|&p| PixelPoint::from(p)).collect()
    }

    /// Check every parameter the engine relies on.
    pub fn validate(&self) -> Result<(), GroundError> {
        CameraPose::new(
            self.camera_height,
            self.yaw_angle,
            self.pitch_angle,
            self.roll_angle,
        )?;
        self.intrinsics()?;
        for &[u, v] in &self.ground_coords {
            ensure_finite("ground coordinate u", u)?;
            ensure_finite("ground coordinate v", v)?;
        }
        if let Some(depth_scale) = self.depth_scale {
            if !depth_scale.is_finite() || depth_scale < 0.0 {
                return Err(GroundError::InvalidDepthScale(depth_scale));
            }
        }
        Ok(())
    }

    /// Validate the setting and measure the footprint of its pixels.
    pub fn measure(&self) -> Result<Measurement, GroundError> {
        self.validate()?;
        let intrinsics = self.intrinsics()?;
        Ok(compute_ground_dimensions(
            &self.pose(),
            &intrinsics,
            &self.pixel_points(),
            self.depth_scale,
        ))
    }

    /// Store a measurement confirmed by the operator.
    pub fn apply_measurement(&mut self, measurement: Measurement) {
        self.ground_width = Some(measurement.width);
        self.ground_depth = Some(measurement.depth);
    }

    /// The stored measurement, if one was confirmed.
    pub fn measurement(&self) -> Option<Measurement> {
        match (self.ground_width, self.ground_depth) {
            (Some(width), Some(depth)) => Some(Measurement::new(width, depth)),
            _ => None,
        }
    }

    /// Parse a setting from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GroundError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the setting as YAML.
    pub fn to_yaml_string(&self) -> Result<String, GroundError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse a setting from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, GroundError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the setting as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, GroundError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// On-disk encoding of a setting file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingFormat {
    Yaml,
    Json,
}

impl SettingFormat {
    fn from_path(path: &Path) -> Result<Self, GroundError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            other => Err(GroundError::InvalidFileExtension(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

/// Read a ground setting from a `.yaml`, `.yml` or `.json` file.
///
/// # Arguments
///
/// * `path` - Path to the setting file.
pub fn read_ground_setting(path: impl AsRef<Path>) -> Result<GroundSetting, GroundError> {
    let path = path.as_ref();
    let format = SettingFormat::from_path(path)?;
    let reader = std::io::BufReader::new(std::fs::File::open(path)?);
    let setting: GroundSetting = match format {
        SettingFormat::Yaml => serde_yaml::from_reader(reader)?,
        SettingFormat::Json => serde_json::from_reader(reader)?,
    };
    log::debug!("loaded ground setting from {}", path.display());
    Ok(setting)
}

/// Write a ground setting to a `.yaml`, `.yml` or `.json` file, replacing its contents.
///
/// # Arguments
///
/// * `path` - Path to the setting file.
/// * `setting` - The setting to persist.
pub fn write_ground_setting(
    path: impl AsRef<Path>,
    setting: &GroundSetting,
) -> Result<(), GroundError> {
    let path = path.as_ref();
    let contents = match SettingFormat::from_path(path)? {
        SettingFormat::Yaml => setting.to_yaml_string()?,
        SettingFormat::Json => setting.to_json_string()?,
    };
    std::fs::write(path, contents)?;
    log::debug!("saved ground setting to {}", path.display());
    Ok(())
}
