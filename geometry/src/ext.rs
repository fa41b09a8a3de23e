//! Conveniences on top of `nalgebra` types.
//!
//! Matrices here are the usual column-major `nalgebra` matrices indexed with
//! `(row, column)`.

use {
    crate::angle::Angle,
    nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4},
};

pub trait Vector3Ext {
    /// Rescales vector in place to have specified length.
    /// Zero vector is left untouched.
    fn scale_to(&mut self, length: f32);

    fn set_xy(&mut self, xy: Vector2<f32>);
}

impl Vector3Ext for Vector3<f32> {
    #[inline]
    fn scale_to(&mut self, length: f32) {
        let current = self.norm();
        if current != 0.0 {
            *self *= length / current;
        }
    }

    #[inline]
    fn set_xy(&mut self, xy: Vector2<f32>) {
        self.x = xy.x;
        self.y = xy.y;
    }
}

pub trait Vector4Ext {
    fn set_xyz(&mut self, xyz: Vector3<f32>);
}

impl Vector4Ext for Vector4<f32> {
    #[inline]
    fn set_xyz(&mut self, xyz: Vector3<f32>) {
        self.x = xyz.x;
        self.y = xyz.y;
        self.z = xyz.z;
    }
}

pub trait Matrix4Ext: Sized {
    /// Rotation around X axis.
    ///
    /// Positive angle rotates clockwise when looking from the positive end
    /// of the axis, i.e. `+Y` is rotated towards `-Z`.
    fn x_rotation(angle: Angle) -> Self;

    /// Rotation around Y axis. `+X` is rotated towards `+Z`.
    fn y_rotation(angle: Angle) -> Self;

    /// Rotation around Z axis. `+X` is rotated towards `-Y`.
    fn z_rotation(angle: Angle) -> Self;

    fn can_invert(&self) -> bool;

    fn translation(&self) -> Vector3<f32>;

    fn set_translation(&mut self, translation: Vector3<f32>);

    fn upper_left(&self) -> Matrix3<f32>;

    /// All 16 elements in column-major order.
    fn scalars(&self) -> [f32; 16];

    /// Human readable dump, one row per line.
    fn formatted(&self) -> String;
}

impl Matrix4Ext for Matrix4<f32> {
    fn x_rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix4::from_columns(&[
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, c, -s, 0.0),
            Vector4::new(0.0, s, c, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn y_rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix4::from_columns(&[
            Vector4::new(c, 0.0, s, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(-s, 0.0, c, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn z_rotation(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix4::from_columns(&[
            Vector4::new(c, -s, 0.0, 0.0),
            Vector4::new(s, c, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ])
    }

    fn can_invert(&self) -> bool {
        self.determinant() != 0.0
    }

    fn translation(&self) -> Vector3<f32> {
        self.fixed_view::<3, 1>(0, 3).into_owned()
    }

    fn set_translation(&mut self, translation: Vector3<f32>) {
        self.fixed_view_mut::<3, 1>(0, 3).copy_from(&translation);
    }

    fn upper_left(&self) -> Matrix3<f32> {
        self.fixed_view::<3, 3>(0, 0).into_owned()
    }

    fn scalars(&self) -> [f32; 16] {
        let mut scalars = [0.0; 16];
        scalars.copy_from_slice(self.as_slice());
        scalars
    }

    fn formatted(&self) -> String {
        let mut out = String::new();
        for row in 0..4 {
            if row > 0 {
                out.push('\n');
            }
            for column in 0..4 {
                if column > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format!("{:.4}", self[(row, column)]));
            }
        }
        out
    }
}
