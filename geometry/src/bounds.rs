use nalgebra::{Matrix4, Point3, Vector3};

/// Axis aligned bounding box.
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct BoundingBox {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl BoundingBox {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        BoundingBox { min, max }
    }

    /// Box around all 8 corners after transformation.
    ///
    /// Corners are transformed as points with `w = 1`.
    /// No perspective divide is performed.
    pub fn transformed(&self, transform: &Matrix4<f32>) -> Self {
        let (min, max) = (self.min, self.max);
        let corners = [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z),
        ];

        let mut new_min = Vector3::repeat(f32::INFINITY);
        let mut new_max = Vector3::repeat(f32::NEG_INFINITY);

        for corner in &corners {
            let point = (transform * Point3::from(*corner).to_homogeneous())
                .xyz();
            new_min = new_min.inf(&point);
            new_max = new_max.sup(&point);
        }

        BoundingBox {
            min: new_min,
            max: new_max,
        }
    }
}
