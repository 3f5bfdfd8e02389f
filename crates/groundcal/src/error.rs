/// Error types for the ground setting crate.
///
/// The geometric engine itself never fails. These errors come from validating
/// operator input before it reaches the engine, and from reading or writing
/// ground setting files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GroundError {
    /// Focal length is zero or not finite.
    #[error("Focal length must be finite and non-zero. Got: ({0}, {1})")]
    InvalidFocalLength(f64, f64),

    /// A scalar parameter is NaN or infinite.
    #[error("{name} must be finite. Got: {value}")]
    NonFiniteValue {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// Depth scale is negative or not finite.
    #[error("Depth scale must be finite and non-negative. Got: {0}")]
    InvalidDepthScale(f64),

    /// Failed to read or write a ground setting file.
    #[error("Failed to access ground setting file")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize a ground setting.
    #[error("Failed to parse ground setting")]
    Json(#[from] serde_json::Error),

    /// Failed to parse or serialize a ground setting as YAML.
    #[error("Failed to parse ground setting yaml")]
    Yaml(#[from] serde_yaml::Error),

    /// Ground setting files must be `.yaml`, `.yml` or `.json`.
    #[error("Invalid ground setting file extension. Got:{0}")]
    InvalidFileExtension(String),
}

/// Reject NaN and infinite values, naming the parameter in the error.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, GroundError> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(GroundError::NonFiniteValue { name, value }),
    }
}
