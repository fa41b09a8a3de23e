//! Affine transform math for 3D graphics.
//!
//! Builds on `nalgebra` primitives and adds what a renderer needs around
//! them: typed angles, camera and projection matrices, and decomposition of
//! arbitrary 4x4 transforms into perspective, translation, scale, skew and
//! rotation.

pub mod angle;
pub mod approx_eq;
pub mod bounds;
pub mod camera_cone;
pub mod decompose;
pub mod euler;
pub mod ext;
pub mod look_at;
pub mod packed;
pub mod projection;
pub mod range;
pub mod skew;

pub use self::{
    angle::Angle,
    approx_eq::ApproxEq,
    bounds::BoundingBox,
    camera_cone::{CameraCone, CameraConeParameters},
    decompose::{decompose, try_decompose, DecomposeError, TransformComponents},
    euler::{Euler, EulerOrder},
    ext::{Matrix4Ext, Vector3Ext, Vector4Ext},
    look_at::LookAt,
    packed::Packed3,
    projection::{DepthMode, PerspectiveProjection, Projection},
    range::RangeExt,
    skew::Skew,
};
