//! Decomposition of 4x4 transforms.
//!
//! Follows the decomposition used by browser engines for CSS transforms:
//! perspective is isolated first, then translation, then Gram-Schmidt
//! orthogonalization of the linear part yields scale and skew, and the
//! remaining orthonormal basis is turned into a quaternion.

use {
    crate::{ext::Vector3Ext as _, skew::Skew},
    nalgebra::{
        Matrix3, Matrix4, Quaternion, UnitQuaternion, Vector3, Vector4,
    },
};

/// Components of a 4x4 transform.
///
/// Applying them in order scale, skew, rotate, translate, perspective
/// reproduces the decomposed matrix. See [`TransformComponents::recompose`].
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct TransformComponents {
    /// Bottom row correction. `(0, 0, 0, 1)` for affine transforms.
    pub perspective: Vector4<f32>,
    pub translate: Vector3<f32>,

    /// Length of each basis axis after orthogonalization.
    ///
    /// When the basis is a reflection all three components are negated.
    /// Which axes were mirrored originally is not recoverable.
    pub scale: Vector3<f32>,
    pub skew: Skew,
    pub rotation: UnitQuaternion<f32>,
}

/// Reason why a matrix can't be decomposed.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DecomposeError {
    #[error("Homogeneous scale element is zero")]
    ZeroHomogeneousScale,

    #[error("Linear part is singular (determinant {determinant})")]
    SingularLinearPart { determinant: f32 },
}

impl TransformComponents {
    /// Components of the identity transform.
    pub fn identity() -> Self {
        TransformComponents {
            perspective: Vector4::new(0.0, 0.0, 0.0, 1.0),
            translate: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            skew: Skew::ZERO,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Builds the transform back from components.
    ///
    /// The result equals the decomposed matrix divided by its `(3, 3)`
    /// element, up to rounding.
    pub fn recompose(&self) -> Matrix4<f32> {
        let linear = self.rotation.to_rotation_matrix().into_inner()
            * self.skew.to_matrix()
            * Matrix3::from_diagonal(&self.scale);

        let mut matrix = linear.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translate);

        let perspective = self.perspective.xyz();
        for column in 0..3 {
            matrix[(3, column)] = perspective.dot(&linear.column(column));
        }
        matrix[(3, 3)] = self.perspective.w;
        matrix
    }
}

impl Default for TransformComponents {
    fn default() -> Self {
        TransformComponents::identity()
    }
}

/// Decomposes transform into components.
///
/// Returns `None` when the matrix is not decomposable, see
/// [`try_decompose`] for the reasons.
///
/// Negative scale is not preserved. A basis with an odd number of mirrored
/// axes comes out as all three scale components negated together with a
/// compensating rotation.
pub fn decompose(matrix: &Matrix4<f32>) -> Option<TransformComponents> {
    try_decompose(matrix).ok()
}

/// Decomposes transform into components, reporting why it is not possible.
pub fn try_decompose(
    matrix: &Matrix4<f32>,
) -> Result<TransformComponents, DecomposeError> {
    let w = matrix[(3, 3)];
    if w == 0.0 {
        tracing::trace!("Can't decompose matrix with zero homogeneous scale");
        return Err(DecomposeError::ZeroHomogeneousScale);
    }

    let local = matrix / w;

    // Upper 3x3 alone. Used to solve for perspective,
    // and its determinant tells whether the linear part is singular.
    let perspective_matrix =
        local.fixed_view::<3, 3>(0, 0).into_owned().to_homogeneous();

    let determinant = perspective_matrix.determinant();
    if !determinant.is_normal() {
        tracing::trace!(
            "Can't decompose matrix with singular linear part: {}",
            determinant
        );
        return Err(DecomposeError::SingularLinearPart { determinant });
    }

    let perspective = if local[(3, 0)] != 0.0
        || local[(3, 1)] != 0.0
        || local[(3, 2)] != 0.0
    {
        let rhs = Vector4::new(
            local[(3, 0)],
            local[(3, 1)],
            local[(3, 2)],
            local[(3, 3)],
        );

        let inverse = perspective_matrix
            .try_inverse()
            .ok_or(DecomposeError::SingularLinearPart { determinant })?;

        inverse.transpose() * rhs
    } else {
        Vector4::new(0.0, 0.0, 0.0, 1.0)
    };

    let translate = local.fixed_view::<3, 1>(0, 3).into_owned();

    let mut column: [Vector3<f32>; 3] = [
        local.fixed_view::<3, 1>(0, 0).into_owned(),
        local.fixed_view::<3, 1>(0, 1).into_owned(),
        local.fixed_view::<3, 1>(0, 2).into_owned(),
    ];

    let mut scale = Vector3::zeros();
    let mut skew = Skew::ZERO;

    scale.x = column[0].norm();
    column[0].scale_to(1.0);

    // Make 2nd column orthogonal to the 1st.
    skew.xy = column[0].dot(&column[1]);
    column[1] -= column[0] * skew.xy;

    scale.y = column[1].norm();
    column[1].scale_to(1.0);
    skew.xy /= scale.y;

    // Make 3rd column orthogonal to both.
    skew.xz = column[0].dot(&column[2]);
    column[2] -= column[0] * skew.xz;
    skew.yz = column[1].dot(&column[2]);
    column[2] -= column[1] * skew.yz;

    scale.z = column[2].norm();
    column[2].scale_to(1.0);
    skew.xz /= scale.z;
    skew.yz /= scale.z;

    // Basis is orthonormal now. Negative triple product means reflection.
    let pdum3 = column[1].cross(&column[2]);
    if column[0].dot(&pdum3) < 0.0 {
        scale = -scale;
        for axis in &mut column {
            *axis = -*axis;
        }
    }

    Ok(TransformComponents {
        perspective,
        translate,
        scale,
        skew,
        rotation: quaternion_from_basis(&column),
    })
}

/// Extracts rotation from orthonormal basis columns.
///
/// `column[j][i]` is the element at row `i`, column `j` of the rotation
/// matrix. Branches on the trace so that the divisor never approaches zero,
/// which happens for rotations close to half a turn.
fn quaternion_from_basis(column: &[Vector3<f32>; 3]) -> UnitQuaternion<f32> {
    let [c0, c1, c2] = column;
    let trace = c0[0] + c1[1] + c2[2];

    let (x, y, z, w) = if 1.0 + trace > 0.001 {
        let r = (1.0 + trace).sqrt();
        let s = 0.5 / r;
        (
            (c1[2] - c2[1]) * s,
            (c2[0] - c0[2]) * s,
            (c0[1] - c1[0]) * s,
            0.5 * r,
        )
    } else if c0[0] > c1[1] && c0[0] > c2[2] {
        // `y` uses the symmetric sum like the other branches. The difference
        // form loses `y` for half turns around axes off the X axis.
        let r = (1.0 + c0[0] - c1[1] - c2[2]).sqrt();
        let s = 0.5 / r;
        (
            0.5 * r,
            (c1[0] + c0[1]) * s,
            (c2[0] + c0[2]) * s,
            (c1[2] - c2[1]) * s,
        )
    } else if c1[1] > c2[2] {
        let r = (1.0 - c0[0] + c1[1] - c2[2]).sqrt();
        let s = 0.5 / r;
        (
            (c1[0] + c0[1]) * s,
            0.5 * r,
            (c2[1] + c1[2]) * s,
            (c2[0] - c0[2]) * s,
        )
    } else {
        let r = (1.0 - c0[0] - c1[1] + c2[2]).sqrt();
        let s = 0.5 / r;
        (
            (c2[0] + c0[2]) * s,
            (c2[1] + c1[2]) * s,
            0.5 * r,
            (c0[1] - c1[0]) * s,
        )
    };

    UnitQuaternion::new_unchecked(Quaternion::new(w, x, y, z))
}
