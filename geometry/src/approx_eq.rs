//! Tolerance based comparison of scalars, vectors, matrices and rotations.

use {
    approx::{AbsDiffEq as _, RelativeEq as _},
    nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector2, Vector3, Vector4},
};

pub trait ApproxEq {
    /// Every scalar differs by no more than `absolute`.
    fn is_approx_eq(&self, other: &Self, absolute: f32) -> bool;

    /// Every scalar differs by no more than `absolute`,
    /// or by no more than `relative` fraction of the larger magnitude.
    fn is_approx_eq_rel(
        &self,
        other: &Self,
        absolute: f32,
        relative: f32,
    ) -> bool;
}

macro_rules! scalarwise_approx_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApproxEq for $ty {
                #[inline]
                fn is_approx_eq(&self, other: &Self, absolute: f32) -> bool {
                    self.abs_diff_eq(other, absolute)
                }

                #[inline]
                fn is_approx_eq_rel(
                    &self,
                    other: &Self,
                    absolute: f32,
                    relative: f32,
                ) -> bool {
                    self.relative_eq(other, absolute, relative)
                }
            }
        )*
    };
}

scalarwise_approx_eq!(
    f32,
    Vector2<f32>,
    Vector3<f32>,
    Vector4<f32>,
    Matrix3<f32>,
    Matrix4<f32>,
);

/// `q` and `-q` describe the same rotation and compare equal.
impl ApproxEq for UnitQuaternion<f32> {
    fn is_approx_eq(&self, other: &Self, absolute: f32) -> bool {
        self.coords.abs_diff_eq(&other.coords, absolute)
            || self.coords.abs_diff_eq(&-other.coords, absolute)
    }

    fn is_approx_eq_rel(
        &self,
        other: &Self,
        absolute: f32,
        relative: f32,
    ) -> bool {
        self.coords.relative_eq(&other.coords, absolute, relative)
            || self.coords.relative_eq(&-other.coords, absolute, relative)
    }
}
