//! Matrices.
//!
//! All matrices are stored row-major, so `m[(i, j)]` is the element in row
//! `i` and column `j`, and vectors multiply from the right as columns.

use crate::{
    error::MathError,
    format,
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

/// A 2x2 matrix.
///
/// Only used to supply minor determinants when computing the cofactor
/// matrix of a [`Matrix3`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix2 {
    rows: [[f32; 2]; 2],
}

/// A 3x3 matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    rows: [[f32; 3]; 3],
}

/// A 4x4 matrix.
///
/// When used as an affine transform the bottom row is assumed to be
/// `(0, 0, 0, 1)`, so no perspective division is ever performed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    rows: [[f32; 4]; 4],
}

macro_rules! impl_square_matrix {
    ($t:ident, $n:literal) => {
        impl $t {
            /// Creates the identity matrix.
            #[inline]
            pub const fn identity() -> Self {
                let mut rows = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    rows[i][i] = 1.0;
                    i += 1;
                }
                Self { rows }
            }

            /// Creates a matrix with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self {
                    rows: [[0.0; $n]; $n],
                }
            }

            /// Creates a matrix with the given rows.
            #[inline]
            pub const fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self { rows }
            }

            /// Creates a matrix from a flat slice of elements in row-major
            /// order.
            ///
            /// # Errors
            /// Returns [`MathError::ShapeMismatch`] if the slice does not hold
            /// exactly as many elements as the matrix.
            pub fn try_from_slice(elements: &[f32]) -> Result<Self, MathError> {
                MathError::check_flat_len::<$n, $n>(elements.len())?;
                let mut m = Self::zeros();
                for (idx, &value) in elements.iter().enumerate() {
                    m.rows[idx / $n][idx % $n] = value;
                }
                Ok(m)
            }

            /// Creates a matrix from a sequence of rows.
            ///
            /// # Errors
            /// Returns [`MathError::ShapeMismatch`] if there is not exactly one
            /// row per matrix row, or if any row has the wrong length.
            pub fn try_from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, MathError> {
                MathError::check_rows::<$n, $n>(rows)?;
                let mut m = Self::zeros();
                for (i, row) in rows.iter().enumerate() {
                    m.rows[i].copy_from_slice(row.as_ref());
                }
                Ok(m)
            }

            /// The rows of the matrix.
            #[inline]
            pub const fn rows(&self) -> &[[f32; $n]; $n] {
                &self.rows
            }

            /// Returns the element at row `i` and column `j`.
            ///
            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            pub const fn element(&self, i: usize, j: usize) -> f32 {
                self.rows[i][j]
            }

            /// Returns a mutable reference to the element at row `i` and
            /// column `j`.
            ///
            /// # Panics
            /// If the indices are outside the matrix.
            #[inline]
            pub const fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
                &mut self.rows[i][j]
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transposed(&self) -> Self {
                let mut m = Self::zeros();
                for i in 0..$n {
                    for j in 0..$n {
                        m.rows[j][i] = self.rows[i][j];
                    }
                }
                m
            }

            /// Returns a matrix with the given closure applied to each element.
            #[inline]
            pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
                Self {
                    rows: self.rows.map(|row| row.map(&mut f)),
                }
            }

            /// Returns the matrix obtained by combining corresponding elements
            /// of this and another matrix with the given closure.
            #[inline]
            fn zipped_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut m = Self::zeros();
                for i in 0..$n {
                    for j in 0..$n {
                        m.rows[i][j] = f(self.rows[i][j], other.rows[i][j]);
                    }
                }
                m
            }

            #[inline]
            fn flat(&self) -> [f32; $n * $n] {
                bytemuck::cast(self.rows)
            }
        }

        impl From<[[f32; $n]; $n]> for $t {
            #[inline]
            fn from(rows: [[f32; $n]; $n]) -> Self {
                Self::from_rows(rows)
            }
        }

        impl TryFrom<&[f32]> for $t {
            type Error = MathError;

            fn try_from(elements: &[f32]) -> Result<Self, Self::Error> {
                Self::try_from_slice(elements)
            }
        }

        impl Index<(usize, usize)> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
                &self.rows[i][j]
            }
        }

        impl IndexMut<(usize, usize)> for $t {
            #[inline]
            fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
                &mut self.rows[i][j]
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| { a.zipped_with(b, |x, y| x + y) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { a + (-b) });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| { a.mapped(|x| x * b) });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { b.mul(*a) });

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| {
            let mut m = $t::zeros();
            for i in 0..$n {
                for j in 0..$n {
                    let mut sum = 0.0;
                    for k in 0..$n {
                        sum += a.rows[i][k] * b.rows[k][j];
                    }
                    m.rows[i][j] = sum;
                }
            }
            m
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            *a = &*a * b;
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { val.mapped(|x| -x) });

        impl_approx_eq!($t, |m| m.flat());

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format::write_rows(f, &self.rows)
            }
        }
    };
}

impl_square_matrix!(Matrix2, 2);
impl_square_matrix!(Matrix3, 3);
impl_square_matrix!(Matrix4, 4);

impl Matrix2 {
    /// Creates a matrix with the given elements, listed row by row.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self::from_rows([[m00, m01], [m10, m11]])
    }

    /// Computes the determinant `m00 * m11 - m10 * m01`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.rows;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }
}

impl Matrix3 {
    /// Creates a matrix with the given elements, listed row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Self {
        Self::from_rows([[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]])
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector3) -> Self {
        let mut m = Self::zeros();
        m.rows[0][0] = diagonal.x();
        m.rows[1][1] = diagonal.y();
        m.rows[2][2] = diagonal.z();
        m
    }

    /// The row with the given index as a vector.
    #[inline]
    pub const fn row(&self, i: usize) -> Vector3 {
        let [x, y, z] = self.rows[i];
        Vector3::new(x, y, z)
    }

    /// The column with the given index as a vector.
    #[inline]
    pub const fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self.rows[0][j], self.rows[1][j], self.rows[2][j])
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub const fn diagonal(&self) -> Vector3 {
        Vector3::new(self.rows[0][0], self.rows[1][1], self.rows[2][2])
    }

    /// The 2x2 matrix left after removing row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Matrix2 {
        let mut minor = Matrix2::zeros();
        let kept_rows = (0..3).filter(|&row| row != i);
        for (mi, row) in kept_rows.enumerate() {
            let kept_columns = (0..3).filter(|&column| column != j);
            for (mj, column) in kept_columns.enumerate() {
                minor.rows[mi][mj] = self.rows[row][column];
            }
        }
        minor
    }

    /// Computes the determinant by expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the cofactor matrix, whose element `(i, j)` is the signed
    /// determinant `(-1)^(i+j) * det(minor(i, j))`.
    pub fn cofactor(&self) -> Self {
        let mut m = Self::zeros();
        for i in 0..3 {
            for j in 0..3 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                m.rows[i][j] = sign * self.minor(i, j).determinant();
            }
        }
        m
    }

    /// Returns the adjoint (adjugate) matrix, the transpose of the cofactor
    /// matrix.
    #[inline]
    pub fn adjoint(&self) -> Self {
        self.cofactor().transposed()
    }

    /// Returns the inverse `adjoint / determinant`. If the matrix is not
    /// invertible, the result will be non-finite.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.determinant().recip() * self.adjoint()
    }

    /// Returns the inverse of this matrix.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the determinant is zero (or
    /// not finite), in which case there is no inverse.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            log::debug!("Refusing to invert singular matrix with determinant {determinant}");
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(determinant.recip() * self.adjoint())
    }
}

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    Vector3::new(a.row(0).dot(b), a.row(1).dot(b), a.row(2).dot(b))
});

impl Matrix4 {
    /// Creates a matrix with the given elements, listed row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self::from_rows([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }

    /// Creates the affine matrix whose upper-left 3x3 block is the given
    /// matrix and whose translation is zero.
    #[inline]
    pub const fn from_upper_left_3x3(linear: &Matrix3) -> Self {
        let mut m = Self::identity();
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                m.rows[i][j] = linear.rows[i][j];
                j += 1;
            }
            i += 1;
        }
        m
    }

    /// Creates the matrix scaling each axis by the corresponding component
    /// of the given vector.
    #[inline]
    pub const fn from_nonuniform_scaling(scaling: &Vector3) -> Self {
        Self::from_upper_left_3x3(&Matrix3::from_diagonal(scaling))
    }

    /// Creates the matrix translating by the given vector.
    #[inline]
    pub const fn from_translation(translation: &Vector3) -> Self {
        let mut m = Self::identity();
        m.rows[0][3] = translation.x();
        m.rows[1][3] = translation.y();
        m.rows[2][3] = translation.z();
        m
    }

    /// The upper-left 3x3 block, which is the linear part of an affine
    /// transform.
    #[inline]
    pub const fn upper_left_3x3(&self) -> Matrix3 {
        let m = &self.rows;
        Matrix3::new(
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        )
    }

    /// The translation part of an affine transform.
    #[inline]
    pub const fn translation(&self) -> Vector3 {
        Vector3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// The row with the given index as a vector.
    #[inline]
    pub const fn row(&self, i: usize) -> Vector4 {
        let [x, y, z, w] = self.rows[i];
        Vector4::new(x, y, z, w)
    }

    /// The column with the given index as a vector.
    #[inline]
    pub const fn column(&self, j: usize) -> Vector4 {
        let m = &self.rows;
        Vector4::new(m[0][j], m[1][j], m[2][j], m[3][j])
    }

    /// Transforms the given point by appending a unit w-component,
    /// multiplying and dropping the resulting w-component.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self * point
    }
}

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::new(
        a.row(0).dot(b),
        a.row(1).dot(b),
        a.row(2).dot(b),
        a.row(3).dot(b),
    )
});

// Column vector in homogeneous coordinates with `w = 1`.
impl_binop!(Mul, mul, Matrix4, Vector3, Vector3, |a, b| {
    (a * b.extended(1.0)).xyz()
});

// Row vector in homogeneous coordinates with `w = 1`.
impl_binop!(Mul, mul, Vector3, Matrix4, Vector3, |a, b| {
    let row = a.extended(1.0);
    Vector3::new(
        row.dot(&b.column(0)),
        row.dot(&b.column(1)),
        row.dot(&b.column(2)),
    )
});
