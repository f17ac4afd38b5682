//! Rotation matrices built directly from angles, without going through a
//! quaternion.

use crate::{
    angle::Angle,
    matrix::{Matrix3, Matrix4},
    vector::Vector3,
};

/// Builds the affine rotation matrix for the given Euler angles, with `bank`
/// about the x-axis, `heading` about the y-axis and `attitude` about the
/// z-axis.
///
/// The result is `Ry(heading) * Rz(attitude) * Rx(bank)`, the same rotation
/// as [`UnitQuaternion::from_euler_angles`](crate::quaternion::UnitQuaternion::from_euler_angles).
pub fn euler_rotation_matrix(bank: impl Angle, heading: impl Angle, attitude: impl Angle) -> Matrix4 {
    let (sh, ch) = heading.radians().sin_cos();
    let (sa, ca) = attitude.radians().sin_cos();
    let (sb, cb) = bank.radians().sin_cos();

    Matrix4::from_upper_left_3x3(&Matrix3::new(
        ch * ca,
        sh * sb - ch * sa * cb,
        ch * sa * sb + sh * cb,
        sa,
        ca * cb,
        -ca * sb,
        -sh * ca,
        sh * sa * cb + ch * sb,
        -sh * sa * sb + ch * cb,
    ))
}

/// Builds the affine matrix rotating by `angle` about `axis` using Rodrigues'
/// formula. The axis is normalized first and must not be zero.
pub fn axis_angle_rotation_matrix(angle: impl Angle, axis: &Vector3) -> Matrix4 {
    let (s, c) = angle.radians().sin_cos();
    let t = 1.0 - c;
    let axis = axis.normalized();
    let (x, y, z) = (axis.x(), axis.y(), axis.z());

    Matrix4::from_upper_left_3x3(&Matrix3::new(
        t * x * x + c,
        t * x * y - z * s,
        t * x * z + y * s,
        t * x * y + z * s,
        t * y * y + c,
        t * y * z - x * s,
        t * x * z - y * s,
        t * y * z + x * s,
        t * z * z + c,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{angle::Degrees, quaternion::UnitQuaternion};
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn deg(value: f32) -> Degrees {
        Degrees(value)
    }

    fn affine(rows: [[f32; 3]; 3]) -> Matrix4 {
        Matrix4::from_upper_left_3x3(&Matrix3::from_rows(rows))
    }

    #[test]
    fn euler_rotation_about_x_works() {
        assert_abs_diff_eq!(
            euler_rotation_matrix(deg(90.0), deg(0.0), deg(0.0)),
            affine([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]),
            epsilon = EPSILON
        );
    }

    #[test]
    fn euler_rotation_about_y_works() {
        assert_abs_diff_eq!(
            euler_rotation_matrix(deg(0.0), deg(90.0), deg(0.0)),
            affine([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]),
            epsilon = EPSILON
        );
    }

    #[test]
    fn euler_rotation_about_z_works() {
        assert_abs_diff_eq!(
            euler_rotation_matrix(deg(0.0), deg(0.0), deg(90.0)),
            affine([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]),
            epsilon = EPSILON
        );
    }

    #[test]
    fn combined_euler_rotations_work() {
        assert_abs_diff_eq!(
            euler_rotation_matrix(deg(0.0), deg(90.0), deg(90.0)),
            affine([[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            euler_rotation_matrix(deg(0.0), deg(90.0), deg(-90.0)),
            affine([[0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]]),
            epsilon = EPSILON
        );
    }

    #[test]
    fn euler_rotation_matrix_matches_quaternion_path() {
        for (bank, heading, attitude) in [
            (10.0, 20.0, 30.0),
            (-45.0, 120.0, 5.0),
            (90.0, -90.0, 60.0),
            (0.0, 180.0, 90.0),
        ] {
            let quaternion =
                UnitQuaternion::from_euler_angles(deg(bank), deg(heading), deg(attitude));
            assert_abs_diff_eq!(
                euler_rotation_matrix(deg(bank), deg(heading), deg(attitude)),
                quaternion.to_homogeneous_matrix(),
                epsilon = 2e-6
            );
        }
    }

    #[test]
    fn axis_angle_rotation_about_x_works() {
        assert_abs_diff_eq!(
            axis_angle_rotation_matrix(deg(90.0), &Vector3::unit_x()),
            affine([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]),
            epsilon = EPSILON
        );
    }

    #[test]
    fn axis_angle_rotation_matrix_matches_quaternion_path() {
        for (angle, axis) in [
            (45.0, Vector3::new(1.0, 0.0, 1.0)),
            (-130.0, Vector3::new(0.3, -2.0, 1.5)),
            (90.0, Vector3::unit_y()),
        ] {
            let quaternion = UnitQuaternion::from_axis_angle(deg(angle), &axis);
            assert_abs_diff_eq!(
                axis_angle_rotation_matrix(deg(angle), &axis),
                quaternion.to_homogeneous_matrix(),
                epsilon = 2e-6
            );
        }
    }

    #[test]
    fn rotating_about_y_by_matrix_and_quaternion_agree() {
        let point = Vector3::new(5.0, 0.0, 0.0);
        let by_matrix = axis_angle_rotation_matrix(deg(90.0), &Vector3::unit_y()) * point;
        let by_quaternion =
            UnitQuaternion::from_axis_angle(deg(90.0), &Vector3::unit_y()).rotate_vector(&point);
        assert_abs_diff_eq!(by_matrix, Vector3::new(0.0, 0.0, -5.0), epsilon = 1e-5);
        assert_abs_diff_eq!(by_matrix, by_quaternion, epsilon = 1e-5);
    }
}
