use glam::{DMat3, DVec3};

/// Axis alignment from the camera optical frame to the world frame.
///
/// Camera frame: +X right, +Y down, +Z forward along the optical axis.
/// World frame: +Z up, the ground is the plane `z = 0`.
///
/// A camera-frame vector `(x, y, z)` maps to the world vector `(x, z, -y)`, so the
/// optical axis lies along world +Y and image-down points to world -Z. Every stored
/// ground setting depends on this convention.
pub const R_ALIGN: DMat3 = DMat3::from_cols(
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 0.0),
);

/// Compose the world-from-camera rotation from Euler angles in degrees.
///
/// # Arguments
///
/// * `yaw` - Rotation about world Z, in degrees.
/// * `pitch` - Rotation about world X, in degrees. Negative tilts the camera down.
/// * `roll` - Rotation about the optical axis, in degrees.
///
/// # Returns
///
/// The rotation `Rz(yaw) * Rx(pitch) * Ry(roll) * R_ALIGN`.
///
/// Example:
///
/// ```
/// use glam::DVec3;
/// use groundcal::pose::compose_world_rotation;
///
/// // looking straight down, the optical axis points at the ground
/// let rotation = compose_world_rotation(0.0, -90.0, 0.0);
/// let forward = rotation * DVec3::Z;
/// assert!((forward.z + 1.0).abs() < 1e-12);
/// ```
pub fn compose_world_rotation(yaw: f64, pitch: f64, roll: f64) -> DMat3 {
    rotation_from_radians(yaw.to_radians(), pitch.to_radians(), roll.to_radians())
}

/// Same as [`compose_world_rotation`] with the angles already in radians.
pub fn rotation_from_radians(yaw: f64, pitch: f64, roll: f64) -> DMat3 {
    // the multiplication order is part of the stored calibration format
    DMat3::from_rotation_z(yaw)
        * DMat3::from_rotation_x(pitch)
        * DMat3::from_rotation_y(roll)
        * R_ALIGN
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat_eq(actual: &DMat3, expected: &[[f64; 3]; 3], epsilon: f64) {
        for (i, row) in expected.iter().enumerate() {
            let actual_row = actual.row(i);
            assert_relative_eq!(actual_row.x, row[0], epsilon = epsilon);
            assert_relative_eq!(actual_row.y, row[1], epsilon = epsilon);
            assert_relative_eq!(actual_row.z, row[2], epsilon = epsilon);
        }
    }

    #[test]
    fn test_alignment_axes() {
        assert_eq!(R_ALIGN * DVec3::X, DVec3::X);
        assert_eq!(R_ALIGN * DVec3::Y, DVec3::NEG_Z);
        assert_eq!(R_ALIGN * DVec3::Z, DVec3::Y);
    }

    #[test]
    fn test_zero_angles_is_alignment() {
        let rotation = compose_world_rotation(0.0, 0.0, 0.0);
        assert_mat_eq(
            &rotation,
            &[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
            1e-15,
        );
    }

    #[test]
    fn test_composition_order_fixture() {
        // yaw = 30, pitch = -25, roll = 12
        let rotation = compose_world_rotation(30.0, -25.0, 12.0);
        assert_mat_eq(
            &rotation,
            &[
                [0.891034309570760, 0.026634713382023, -0.453153893518325],
                [0.412978506004000, -0.461956058458217, 0.784885567221396],
                [-0.188431984404092, -0.886502787416264, -0.422618261740699],
            ],
            1e-12,
        );
    }

    #[test]
    fn test_composition_order_matters() {
        let (yaw, pitch, roll) = (30f64.to_radians(), (-25f64).to_radians(), 12f64.to_radians());
        let expected = rotation_from_radians(yaw, pitch, roll);
        let swapped = DMat3::from_rotation_y(roll)
            * DMat3::from_rotation_x(pitch)
            * DMat3::from_rotation_z(yaw)
            * R_ALIGN;
        assert!(!expected.abs_diff_eq(swapped, 1e-3));
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let rotation = compose_world_rotation(-137.0, 61.5, 203.0);
        let identity = rotation * rotation.transpose();
        assert!(identity.abs_diff_eq(DMat3::IDENTITY, 1e-12));
        assert_relative_eq!(rotation.determinant(), 1.0, epsilon = 1e-12);
    }
}
