//! Composition of translation, rotation and scaling into one affine
//! transform.

use crate::{
    angle::Angle,
    matrix::Matrix4,
    quaternion::{Quaternion, UnitQuaternion},
    vector::Vector3,
};
use bitflags::bitflags;

bitflags! {
    /// Bitflags recording which components of a [`TrsTransform`] have been
    /// explicitly set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TrsComponents: u8 {
        const SCALE       = 1 << 0;
        const ROTATION    = 1 << 1;
        const TRANSLATION = 1 << 2;
    }
}

/// How much of a [`TrsTransform`] has been specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrsState {
    /// No component has been set and the transform is the identity.
    Uninitialized,
    /// One or two of the components have been set.
    PartiallySet,
    /// Scale, rotation and translation have all been set.
    FullySet,
}

/// An affine transform staged as separate scale, rotation and translation
/// matrices.
///
/// Each component starts out as the identity and is replaced independently
/// by its setter. The composed matrix is kept equal to
/// `translation * rotation * scale`, so points are first scaled, then
/// rotated and finally translated.
#[derive(Clone, Debug, PartialEq)]
pub struct TrsTransform {
    scale: Matrix4,
    rotation: Matrix4,
    translation: Matrix4,
    components: TrsComponents,
    matrix: Matrix4,
}

impl TrsTransform {
    /// Creates the identity transform with no component set.
    pub const fn new() -> Self {
        Self {
            scale: Matrix4::identity(),
            rotation: Matrix4::identity(),
            translation: Matrix4::identity(),
            components: TrsComponents::empty(),
            matrix: Matrix4::identity(),
        }
    }

    /// The composed transform matrix.
    #[inline]
    pub const fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    #[inline]
    pub const fn scale_matrix(&self) -> &Matrix4 {
        &self.scale
    }

    #[inline]
    pub const fn rotation_matrix(&self) -> &Matrix4 {
        &self.rotation
    }

    #[inline]
    pub const fn translation_matrix(&self) -> &Matrix4 {
        &self.translation
    }

    /// The components that have been explicitly set.
    #[inline]
    pub const fn components(&self) -> TrsComponents {
        self.components
    }

    pub fn state(&self) -> TrsState {
        if self.components.is_empty() {
            TrsState::Uninitialized
        } else if self.components.is_all() {
            TrsState::FullySet
        } else {
            TrsState::PartiallySet
        }
    }

    /// Sets the scale component to scale each axis by the corresponding
    /// component of `scaling`.
    pub fn set_scale(&mut self, scaling: &Vector3) {
        self.scale = Matrix4::from_nonuniform_scaling(scaling);
        self.mark_set_and_recompose(TrsComponents::SCALE);
    }

    /// Sets the rotation component from the given quaternion, which is
    /// normalized first.
    pub fn set_rotation(&mut self, rotation: impl Into<Quaternion>) {
        let rotation = UnitQuaternion::normalized_from(rotation.into());
        self.rotation = rotation.to_homogeneous_matrix();
        self.mark_set_and_recompose(TrsComponents::ROTATION);
    }

    /// Sets the rotation component to rotate by `angle` about `axis`.
    pub fn set_rotation_axis_angle(&mut self, angle: impl Angle, axis: &Vector3) {
        self.set_rotation(Quaternion::from_axis_angle(angle, axis));
    }

    /// Sets the rotation component from Euler angles, see
    /// [`Quaternion::from_euler_angles`] for the convention.
    pub fn set_rotation_euler(
        &mut self,
        bank: impl Angle,
        heading: impl Angle,
        attitude: impl Angle,
    ) {
        self.set_rotation(Quaternion::from_euler_angles(bank, heading, attitude));
    }

    /// Sets the translation component.
    pub fn set_translation(&mut self, translation: &Vector3) {
        self.translation = Matrix4::from_translation(translation);
        self.mark_set_and_recompose(TrsComponents::TRANSLATION);
    }

    /// Sets all three components at once.
    pub fn set_trs(
        &mut self,
        translation: &Vector3,
        rotation: impl Into<Quaternion>,
        scaling: &Vector3,
    ) {
        self.translation = Matrix4::from_translation(translation);
        self.rotation = UnitQuaternion::normalized_from(rotation.into()).to_homogeneous_matrix();
        self.scale = Matrix4::from_nonuniform_scaling(scaling);
        self.mark_set_and_recompose(TrsComponents::all());
    }

    /// Applies the composed transform to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.matrix.transform_point(point)
    }

    fn mark_set_and_recompose(&mut self, components: TrsComponents) {
        self.components |= components;
        self.matrix = self.translation * self.rotation * self.scale;
        log::trace!(
            "Recomposed TRS transform with components {:?} set",
            self.components
        );
    }
}

impl Default for TrsTransform {
    fn default() -> Self {
        Self::new()
    }
}
