//! Camera orbiting around a truncated cone.
//!
//! The cone spans between circle A and circle B, both perpendicular to the
//! cone axis. Camera slides along the cone surface by height parameter `t`
//! and around the axis by angle, always looking at the center of circle A.

use {
    crate::{angle::Angle, look_at::LookAt, range::RangeExt as _},
    nalgebra::{Matrix4, Unit, UnitQuaternion, Vector3},
};

/// Shape of the cone.
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct CameraConeParameters {
    pub center_a: Vector3<f32>,
    pub radius_a: f32,
    pub radius_b: f32,

    /// Unit direction from circle A to circle B.
    pub axis: Vector3<f32>,

    /// Distance between circle centers along the axis.
    pub distance: f32,
}

impl CameraConeParameters {
    pub fn new(
        center_a: Vector3<f32>,
        radius_a: f32,
        radius_b: f32,
        axis: Vector3<f32>,
        distance: f32,
    ) -> Self {
        CameraConeParameters {
            center_a,
            radius_a,
            radius_b,
            axis: axis.normalize(),
            distance,
        }
    }

    /// Cone between two circle centers.
    /// Coincident centers produce zero distance along `+Y`.
    pub fn from_centers(
        center_a: Vector3<f32>,
        center_b: Vector3<f32>,
        radius_a: f32,
        radius_b: f32,
    ) -> Self {
        let delta = center_b - center_a;
        let distance = delta.norm();
        let axis = if distance > 0.0 {
            delta / distance
        } else {
            Vector3::y()
        };

        CameraConeParameters {
            center_a,
            radius_a,
            radius_b,
            axis,
            distance,
        }
    }

    pub fn center_b(&self) -> Vector3<f32> {
        self.center_a + self.axis * self.distance
    }

    /// Point on the cone surface.
    ///
    /// `t` is clamped to `[0, 1]`, where `0` is circle A and `1` is circle B.
    pub fn camera_position(&self, angle: f32, t: f32) -> Vector3<f32> {
        let t = t.clamped(0.0..=1.0);

        let center = self.center_a + self.axis * (self.distance * t);
        let radius = self.radius_a + (self.radius_b - self.radius_a) * t;

        let arbitrary = if self.axis.y.abs() == 1.0 {
            Vector3::z()
        } else {
            Vector3::y()
        };
        let base = self.axis.cross(&arbitrary).normalize() * radius;

        let rotation = UnitQuaternion::from_axis_angle(
            &Unit::new_unchecked(-self.axis),
            angle,
        );

        center + rotation * base
    }

    /// Point camera looks at.
    pub fn eye_position(&self, _angle: f32, _t: f32) -> Vector3<f32> {
        self.center_a
    }

    pub fn camera_matrix(
        &self,
        angle: f32,
        t: f32,
        up: Vector3<f32>,
    ) -> Matrix4<f32> {
        LookAt::new(
            self.camera_position(angle, t),
            self.eye_position(angle, t),
            up,
        )
        .camera_matrix()
    }
}

/// Camera placed on a cone.
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct CameraCone {
    pub parameters: CameraConeParameters,
    pub rotation: Angle,
    pub height: f32,
}

impl CameraCone {
    pub fn new(
        parameters: CameraConeParameters,
        rotation: Angle,
        height: f32,
    ) -> Self {
        CameraCone {
            parameters,
            rotation,
            height,
        }
    }

    /// Camera-to-world transform with `+Y` up.
    pub fn camera_transform(&self) -> Matrix4<f32> {
        self.parameters.camera_matrix(
            self.rotation.radians(),
            self.height,
            Vector3::y(),
        )
    }
}

#[cfg(test)]
mod tests {
    use {super::*, approx::assert_abs_diff_eq, std::f32::consts::PI};

    fn vertical(
        radius_a: f32,
        radius_b: f32,
        distance: f32,
    ) -> CameraConeParameters {
        CameraConeParameters::new(
            Vector3::zeros(),
            radius_a,
            radius_b,
            Vector3::y(),
            distance,
        )
    }

    #[test]
    fn construction() {
        let params = CameraConeParameters::new(
            Vector3::zeros(),
            1.0,
            2.0,
            Vector3::new(0.0, 3.0, 0.0),
            10.0,
        );
        assert_eq!(params.axis, Vector3::y());
        assert_eq!(params.distance, 10.0);

        let params = CameraConeParameters::from_centers(
            Vector3::zeros(),
            Vector3::new(0.0, 10.0, 0.0),
            1.0,
            2.0,
        );
        assert_eq!(params.axis, Vector3::y());
        assert_abs_diff_eq!(params.distance, 10.0, epsilon = 1e-6);
        assert_eq!(params.center_b(), Vector3::new(0.0, 10.0, 0.0));

        let params = CameraConeParameters::new(
            Vector3::new(1.0, 2.0, 3.0),
            1.0,
            2.0,
            Vector3::z(),
            5.0,
        );
        assert_eq!(params.center_b(), Vector3::new(1.0, 2.0, 8.0));
    }

    #[test]
    fn positions_at_base_and_top() {
        let params = vertical(1.0, 2.0, 10.0);
        assert_abs_diff_eq!(
            params.camera_position(0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            params.camera_position(0.0, 1.0),
            Vector3::new(2.0, 10.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn rotation_around_axis() {
        let params = vertical(1.0, 1.0, 10.0);
        assert_abs_diff_eq!(
            params.camera_position(PI / 2.0, 0.5),
            Vector3::new(0.0, 5.0, 1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn height_is_clamped() {
        let params = CameraConeParameters::new(
            Vector3::zeros(),
            1.0,
            3.0,
            Vector3::z(),
            10.0,
        );

        let below = params.camera_position(0.0, -1.0);
        assert_abs_diff_eq!(below.z, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(below.x.abs(), 1.0, epsilon = 1e-6);

        let above = params.camera_position(0.0, 2.0);
        assert_abs_diff_eq!(above.z, 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(above.xy().norm(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_axis() {
        let params = CameraConeParameters::from_centers(
            Vector3::zeros(),
            Vector3::zeros(),
            1.0,
            1.0,
        );
        assert_eq!(params.axis, Vector3::y());
        assert_eq!(params.distance, 0.0);

        let position = params.camera_position(PI / 2.0, 0.5);
        assert_abs_diff_eq!(position.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn camera_matrix_looks_at_eye() {
        let params = CameraConeParameters::new(
            Vector3::new(1.0, 2.0, 3.0),
            2.0,
            3.0,
            Vector3::y(),
            4.0,
        );
        let (angle, t, up) = (PI / 3.0, 0.25, Vector3::z());

        let expected = LookAt::new(
            params.camera_position(angle, t),
            params.eye_position(angle, t),
            up,
        )
        .camera_matrix();
        assert_abs_diff_eq!(
            params.camera_matrix(angle, t, up),
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn cone_transform_uses_rotation_and_height() {
        let cone = CameraCone::new(
            vertical(1.0, 2.0, 5.0),
            Angle::from_degrees(30.0),
            0.6,
        );
        let expected = cone.parameters.camera_matrix(
            Angle::from_degrees(30.0).radians(),
            0.6,
            Vector3::y(),
        );
        assert_abs_diff_eq!(
            cone.camera_transform(),
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn ron_round_trip() {
        let params = CameraConeParameters::new(
            Vector3::new(1.0, -2.0, 3.0),
            0.5,
            1.75,
            Vector3::new(0.0, 0.0, -1.0),
            12.0,
        );
        let text = ron::to_string(&params).unwrap();
        let back: CameraConeParameters = ron::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}
