//! Quaternions.
//!
//! Components are stored as `(x, y, z, w)`, where `(x, y, z)` is the vector
//! (imaginary) part and `w` is the scalar (real) part.

use crate::{
    angle::Angle,
    format,
    matrix::{Matrix3, Matrix4},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Div, Mul},
};

/// Largest absolute difference between corresponding components for two
/// quaternions to compare equal with `==`.
pub const EQUALITY_TOLERANCE: f32 = 1e-5;

/// A quaternion with no constraint on its norm.
///
/// Equality is tolerance based: two quaternions are `==` when every
/// component differs by at most [`EQUALITY_TOLERANCE`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Zeroable, Pod)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

/// A quaternion with unit norm, representing a rotation.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitQuaternion {
    inner: Quaternion,
}

impl Quaternion {
    /// Creates a quaternion with the given components. No normalization is
    /// performed.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    #[inline]
    pub const fn from_imag(imag: Vector3) -> Self {
        Self::from_parts(0.0, imag)
    }

    /// Creates the multiplicative identity `(0, 0, 0, 1)`.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates the quaternion rotating by `angle` about `axis`. The axis does
    /// not have to be normalized, but must not be zero.
    pub fn from_axis_angle(angle: impl Angle, axis: &Vector3) -> Self {
        let (sin_half, cos_half) = angle.half_sin_cos();
        Self::from_parts(cos_half, axis.normalized() * sin_half)
    }

    /// Creates the quaternion for the given Euler angles, where `bank` rotates
    /// about the x-axis, `heading` about the y-axis and `attitude` about the
    /// z-axis.
    ///
    /// The rotations are applied in the order bank, attitude, heading, so the
    /// equivalent rotation matrix is `Ry(heading) * Rz(attitude) * Rx(bank)`.
    pub fn from_euler_angles(bank: impl Angle, heading: impl Angle, attitude: impl Angle) -> Self {
        let (sh, ch) = heading.half_sin_cos();
        let (sa, ca) = attitude.half_sin_cos();
        let (sb, cb) = bank.half_sin_cos();
        Self::new(
            sh * sa * cb + ch * ca * sb,
            sh * ca * cb + ch * sa * sb,
            ch * sa * cb - sh * ca * sb,
            ch * ca * cb - sh * sa * sb,
        )
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The scalar part `w`.
    #[inline]
    pub const fn real(&self) -> f32 {
        self.w
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns `(-x, -y, -z, w)`.
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns the multiplicative inverse `conjugate / norm²`. The zero
    /// quaternion gives non-finite components.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Returns this quaternion divided by its norm. The zero quaternion gives
    /// non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the Hamilton product `self * other`.
    #[inline]
    pub fn hamilton_product(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    #[inline]
    fn mapped(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= EQUALITY_TOLERANCE)
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    a + (-b)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    a.hamilton_product(b)
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    a.mapped(|c| c * b)
});

impl_binop!(Mul, mul, f32, Quaternion, Quaternion, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Quaternion, f32, Quaternion, |a, b| {
    a.mapped(|c| c / b)
});

// a / b = a * b⁻¹ = (a * conj(b)) / |b|²
impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |a, b| {
    (a * b.conjugate()).div(b.norm_squared())
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |q| { q.mapped(|c| -c) });

impl_approx_eq!(Quaternion, |q| q.to_array());

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}i{:+}j{:+}k{:+}",
            format::rounded(self.x),
            format::rounded(self.y),
            format::rounded(self.z),
            format::rounded(self.w)
        )
    }
}

impl UnitQuaternion {
    #[inline]
    pub const fn identity() -> Self {
        Self::unchecked_from(Quaternion::identity())
    }

    /// Creates a unit quaternion by normalizing the given quaternion.
    #[inline]
    pub fn normalized_from(quaternion: Quaternion) -> Self {
        Self::unchecked_from(quaternion.normalized())
    }

    /// Wraps the given quaternion without normalizing it. The caller is
    /// responsible for it having unit norm.
    #[inline]
    pub const fn unchecked_from(quaternion: Quaternion) -> Self {
        Self { inner: quaternion }
    }

    /// Creates the rotation by `angle` about `axis`, see
    /// [`Quaternion::from_axis_angle`].
    #[inline]
    pub fn from_axis_angle(angle: impl Angle, axis: &Vector3) -> Self {
        Self::normalized_from(Quaternion::from_axis_angle(angle, axis))
    }

    /// Creates the rotation for the given Euler angles, see
    /// [`Quaternion::from_euler_angles`].
    #[inline]
    pub fn from_euler_angles(bank: impl Angle, heading: impl Angle, attitude: impl Angle) -> Self {
        Self::normalized_from(Quaternion::from_euler_angles(bank, heading, attitude))
    }

    #[inline]
    pub const fn as_quaternion(&self) -> &Quaternion {
        &self.inner
    }

    #[inline]
    pub const fn real(&self) -> f32 {
        self.inner.real()
    }

    #[inline]
    pub const fn imag(&self) -> Vector3 {
        self.inner.imag()
    }

    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::unchecked_from(self.inner.conjugate())
    }

    /// For a unit quaternion the inverse is the conjugate.
    #[inline]
    pub const fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Computes the 3x3 rotation matrix for this rotation.
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let Quaternion { x, y, z, w } = self.inner;
        Matrix3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - z * w),
            2.0 * (x * z + y * w),
            2.0 * (x * y + z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - x * w),
            2.0 * (x * z - y * w),
            2.0 * (y * z + x * w),
            1.0 - 2.0 * (x * x + y * y),
        )
    }

    /// Computes the 4x4 affine matrix for this rotation.
    #[inline]
    pub fn to_homogeneous_matrix(&self) -> Matrix4 {
        Matrix4::from_upper_left_3x3(&self.to_rotation_matrix())
    }

    /// Rotates the given vector using the sandwich product `q v q*`.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let q = &self.inner;
        (q * Quaternion::from_imag(*vector) * q.conjugate()).imag()
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitQuaternion> for Quaternion {
    #[inline]
    fn from(rotation: UnitQuaternion) -> Self {
        rotation.inner
    }
}

impl From<UnitQuaternion> for Matrix4 {
    #[inline]
    fn from(rotation: UnitQuaternion) -> Self {
        rotation.to_homogeneous_matrix()
    }
}

impl_binop!(
    Mul,
    mul,
    UnitQuaternion,
    UnitQuaternion,
    UnitQuaternion,
    |a, b| { UnitQuaternion::unchecked_from(a.inner * b.inner) }
);

impl_approx_eq!(UnitQuaternion, |q| q.inner.to_array());

impl fmt::Display for UnitQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::angle::{Degrees, Radians};
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn abc() -> (Quaternion, Quaternion, Quaternion) {
        (
            Quaternion::new(1.0, 2.0, 3.0, 4.0),
            Quaternion::new(8.0, 7.0, 6.0, 5.0),
            Quaternion::new(9.0, 11.0, 13.0, 10.0),
        )
    }

    fn nalgebra_rotation(q: &UnitQuaternion) -> nalgebra::Rotation3<f32> {
        let [x, y, z, w] = q.as_quaternion().to_array();
        nalgebra::UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(w, x, y, z))
            .to_rotation_matrix()
    }

    #[test]
    fn quaternion_from_parts_works() {
        let q = Quaternion::from_parts(4.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.real(), 4.0);
        assert_eq!(q.imag(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn quaternion_equality_is_tolerant() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.000_005));
        assert_ne!(q, Quaternion::new(1.0, 2.0, 3.0, 4.001));
    }

    #[test]
    fn quaternion_addition_is_commutative() {
        let (a, b, c) = abc();
        assert_eq!(a + b + c, c + b + a);
        assert_eq!(a + b + c, Quaternion::new(18.0, 20.0, 22.0, 19.0));
    }

    #[test]
    fn quaternion_subtraction_is_addition_of_negation() {
        let (a, b, _) = abc();
        assert_eq!(&a - &b, a + (-b));
        assert_eq!(a - b, Quaternion::new(-7.0, -5.0, -3.0, -1.0));
    }

    #[test]
    fn quaternion_multiplication_works() {
        let (a, b, _) = abc();
        let a_na = nalgebra::Quaternion::new(4.0, 1.0, 2.0, 3.0);
        let b_na = nalgebra::Quaternion::new(5.0, 8.0, 7.0, 6.0);
        let product = a_na * b_na;
        assert_eq!(
            a * b,
            Quaternion::new(product.i, product.j, product.k, product.w)
        );
    }

    #[test]
    fn quaternion_multiplication_is_not_commutative() {
        let (a, b, _) = abc();
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn quaternion_multiplication_is_associative() {
        let (a, b, c) = abc();
        assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn quaternion_multiplication_distributes_over_addition() {
        let (a, b, c) = abc();
        assert_eq!((a + b) * c, a * c + b * c);
    }

    #[test]
    fn quaternion_scalar_multiplication_commutes() {
        let (a, _, _) = abc();
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(2.0 * a, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a * 2.0 / 2.0, a);
    }

    #[test]
    fn quaternion_conjugate_negates_vector_part() {
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0).conjugate();
        assert_eq!(q.to_array(), [-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn quaternion_norm_works() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.norm_squared(), 25.0);
        assert_eq!(q.norm(), 5.0);
        assert_abs_diff_eq!(q.normalized().norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_times_inverse_is_identity() {
        let (a, b, _) = abc();
        assert_abs_diff_eq!(a * a.inverse(), Quaternion::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(b.inverse() * b, Quaternion::identity(), epsilon = EPSILON);
    }

    #[test]
    fn quaternion_division_is_multiplication_by_inverse() {
        let (a, b, _) = abc();
        assert_abs_diff_eq!(a / b, a * b.inverse(), epsilon = EPSILON);
        assert_abs_diff_eq!((a / b) * b, a, epsilon = 1e-5);
    }

    #[test]
    fn quaternion_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(Degrees(45.0), &Vector3::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(
            q,
            Quaternion::new(0.270_598, 0.0, 0.270_598, 0.923_879_5),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_from_axis_angle_accepts_radians() {
        let from_degrees = Quaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_z());
        let from_radians =
            Quaternion::from_axis_angle(Radians(std::f32::consts::FRAC_PI_2), &Vector3::unit_z());
        assert_abs_diff_eq!(from_degrees, from_radians, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_from_euler_angles_works() {
        let q = Quaternion::from_euler_angles(Degrees(0.0), Degrees(180.0), Degrees(90.0));
        assert_abs_diff_eq!(
            q,
            Quaternion::new(
                std::f32::consts::FRAC_1_SQRT_2,
                std::f32::consts::FRAC_1_SQRT_2,
                0.0,
                0.0
            ),
            epsilon = EPSILON
        );
    }

    #[test]
    fn single_axis_euler_angles_match_axis_angle() {
        let angle = Degrees(37.0);
        let zero = Degrees(0.0);
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(angle, zero, zero),
            Quaternion::from_axis_angle(angle, &Vector3::unit_x()),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(zero, angle, zero),
            Quaternion::from_axis_angle(angle, &Vector3::unit_y()),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(zero, zero, angle),
            Quaternion::from_axis_angle(angle, &Vector3::unit_z()),
            epsilon = EPSILON
        );
    }

    #[test]
    fn euler_angles_apply_bank_then_attitude_then_heading() {
        let (bank, heading, attitude) = (Degrees(10.0), Degrees(20.0), Degrees(30.0));
        let composed = Quaternion::from_axis_angle(heading, &Vector3::unit_y())
            * Quaternion::from_axis_angle(attitude, &Vector3::unit_z())
            * Quaternion::from_axis_angle(bank, &Vector3::unit_x());
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(bank, heading, attitude),
            composed,
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_display_puts_scalar_last() {
        let q = Quaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_x());
        assert_eq!(q.to_string(), "0.71i+0j+0k+0.71");
        assert_eq!(
            Quaternion::new(1.0, -0.5, 2.0, -3.0).to_string(),
            "1i-0.5j+2k-3"
        );
    }

    #[test]
    fn unit_quaternion_identity_works() {
        let q = UnitQuaternion::identity();
        assert_eq!(q.real(), 1.0);
        assert_eq!(q.imag(), Vector3::zeros());
        assert_eq!(q.to_rotation_matrix(), Matrix3::identity());
    }

    #[test]
    fn unit_quaternion_normalized_from_works() {
        let q = UnitQuaternion::normalized_from(Quaternion::new(0.0, 0.0, 3.0, 4.0));
        assert_abs_diff_eq!(
            *q.as_quaternion(),
            Quaternion::new(0.0, 0.0, 0.6, 0.8),
            epsilon = EPSILON
        );
    }

    #[test]
    fn unit_quaternion_times_inverse_is_identity() {
        let q = UnitQuaternion::from_euler_angles(Degrees(12.0), Degrees(-70.0), Degrees(33.0));
        assert_abs_diff_eq!(q * q.inverse(), UnitQuaternion::identity(), epsilon = EPSILON);
    }

    #[test]
    fn unit_quaternion_to_rotation_matrix_about_x_works() {
        let expected = Matrix4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        let from_axis_angle = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_x());
        let from_euler = UnitQuaternion::from_euler_angles(Degrees(90.0), Degrees(0.0), Degrees(0.0));
        assert_abs_diff_eq!(from_axis_angle.to_homogeneous_matrix(), expected, epsilon = EPSILON);
        assert_abs_diff_eq!(Matrix4::from(from_euler), expected, epsilon = EPSILON);
    }

    #[test]
    fn unit_quaternion_to_rotation_matrix_matches_nalgebra() {
        let q = UnitQuaternion::from_axis_angle(Degrees(73.0), &Vector3::new(1.0, -2.0, 0.5));
        let m = q.to_rotation_matrix();
        let reference = nalgebra_rotation(&q);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m[(i, j)], reference[(i, j)], epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn unit_quaternion_rotate_vector_works() {
        let q = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_y());
        let rotated = q.rotate_vector(&Vector3::new(5.0, 0.0, 0.0));
        assert_abs_diff_eq!(rotated, Vector3::new(0.0, 0.0, -5.0), epsilon = 1e-5);
        assert_abs_diff_eq!(
            rotated,
            q.to_rotation_matrix() * Vector3::new(5.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn unit_quaternion_multiplication_composes_rotations() {
        let first = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_x());
        let second = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_z());
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(
            (second * first).rotate_vector(&v),
            second.rotate_vector(&first.rotate_vector(&v)),
            epsilon = 1e-5
        );
    }
}
