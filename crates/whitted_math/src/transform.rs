// Transform utilities for Mat4
//
// The camera-to-world matrix is a rigid transform built from an orthonormal
// basis plus a translation. Points pick up the translation, directions don't.

use glam::{Mat4, Vec3, Vec4};

/// Extension trait for Mat4 distinguishing positions from directions.
pub trait Mat4Ext {
    /// Transform a position (implicit w=1, translation applies).
    fn transform_position(&self, point: Vec3) -> Vec3;

    /// Transform a direction (implicit w=0, translation is ignored).
    fn transform_direction(&self, direction: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn transform_position(&self, point: Vec3) -> Vec3 {
        let transformed = *self * point.extend(1.0);
        transformed.truncate()
    }

    fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let transformed = *self * direction.extend(0.0);
        transformed.truncate()
    }
}

/// Build the camera-to-world matrix for a camera at `position` looking at
/// `look_at`.
///
/// The camera looks down its local -Z axis:
/// - Z = normalize(position - look_at)
/// - X = normalize(up × Z)
/// - Y = normalize(Z × X)
///
/// `up` only needs to be non-parallel to the viewing direction; it is
/// re-orthogonalized here.
pub fn camera_to_world(position: Vec3, look_at: Vec3, up: Vec3) -> Mat4 {
    let z = (position - look_at).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x).normalize();

    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        Vec4::new(position.x, position.y, position.z, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_position_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let point = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(mat.transform_position(point), Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_transform_direction_no_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let direction = Vec3::new(1.0, 0.0, 0.0);

        // Translation should NOT affect directions (w=0)
        assert_eq!(mat.transform_direction(direction), direction);
    }

    #[test]
    fn test_camera_to_world_identity_view() {
        // Camera at the origin looking down -Z with +Y up is the identity basis
        let mat = camera_to_world(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

        assert!((mat.transform_direction(Vec3::X) - Vec3::X).length() < 1e-6);
        assert!((mat.transform_direction(Vec3::Y) - Vec3::Y).length() < 1e-6);
        assert!((mat.transform_direction(Vec3::NEG_Z) - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_to_world_origin_is_position() {
        let position = Vec3::new(1.0, 2.0, 5.0);
        let mat = camera_to_world(position, Vec3::ZERO, Vec3::Y);

        assert!((mat.transform_position(Vec3::ZERO) - position).length() < 1e-6);
    }

    #[test]
    fn test_camera_to_world_forward_points_at_target() {
        let position = Vec3::new(3.0, 0.0, 0.0);
        let mat = camera_to_world(position, Vec3::ZERO, Vec3::Y);

        // Camera-space forward (-Z) must map to the direction of the target
        let forward = mat.transform_direction(Vec3::NEG_Z);
        assert!((forward - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_camera_to_world_orthonormalizes_up() {
        // A tilted up vector still yields an orthonormal basis
        let mat = camera_to_world(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::new(0.3, 1.0, 0.2));

        let x = mat.transform_direction(Vec3::X);
        let y = mat.transform_direction(Vec3::Y);
        let z = mat.transform_direction(Vec3::Z);

        assert!((x.length() - 1.0).abs() < 1e-5);
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
        assert!(z.dot(x).abs() < 1e-5);
    }
}
