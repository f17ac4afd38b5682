//! Vectors, square matrices, quaternions and the composition of translation,
//! rotation and scaling into 4x4 affine transforms.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
mod format;
pub mod matrix;
pub mod quaternion;
pub mod rotation;
pub mod transform;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use error::MathError;
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use quaternion::{Quaternion, UnitQuaternion};
pub use transform::{TrsComponents, TrsState, TrsTransform};
pub use vector::{Vector3, Vector4};
