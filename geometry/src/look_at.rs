use nalgebra::{Matrix3, Matrix4, Vector3};

/// Camera placement described by eye position, point of interest
/// and up direction.
///
/// Camera looks along its local `-Z`, with `+Y` up and `+X` to the right.
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct LookAt {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl LookAt {
    pub fn new(
        position: Vector3<f32>,
        target: Vector3<f32>,
        up: Vector3<f32>,
    ) -> Self {
        LookAt {
            position,
            target,
            up,
        }
    }

    /// Camera-to-world transform.
    pub fn camera_matrix(&self) -> Matrix4<f32> {
        let (r, u, f) = self.basis();
        Matrix4::from_columns(&[
            r.push(0.0),
            u.push(0.0),
            (-f).push(0.0),
            self.position.push(1.0),
        ])
    }

    /// World-to-camera transform. Inverse of [`LookAt::camera_matrix`].
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let (r, u, f) = self.basis();

        // Inverse of the rotation is its transpose.
        let rotation = Matrix3::from_rows(&[
            r.transpose(),
            u.transpose(),
            (-f).transpose(),
        ]);
        let translation = -(rotation * self.position);

        let mut view = rotation.to_homogeneous();
        view.set_column(3, &translation.push(1.0));
        view
    }

    /// Right, up and forward directions.
    fn basis(&self) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
        let f = (self.target - self.position).normalize();
        let r = f.cross(&self.up).normalize();
        let u = r.cross(&f).normalize();
        (r, u, f)
    }
}
