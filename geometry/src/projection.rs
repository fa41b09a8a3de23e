use {
    crate::angle::Angle,
    nalgebra::{Matrix4, Vector2, Vector4},
    std::ops::RangeInclusive,
};

/// Something that produces projection matrix for a viewport.
pub trait Projection {
    fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4<f32>;

    fn projection_matrix_for_size(
        &self,
        size: Vector2<f32>,
    ) -> Matrix4<f32> {
        self.projection_matrix(size.x / size.y)
    }

    fn projection_matrix_wh(&self, width: f32, height: f32) -> Matrix4<f32> {
        self.projection_matrix_for_size(Vector2::new(width, height))
    }
}

/// How depth is mapped into clip space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DepthMode {
    /// Near plane maps to `-1` and far plane to `1`.
    Standard { z_clip: RangeInclusive<f32> },

    /// Near plane at `z_min` maps to `1`, infinity maps to `0`.
    Reversed { z_min: f32 },
}

impl Default for DepthMode {
    fn default() -> Self {
        DepthMode::Standard { z_clip: 0.01..=100.0 }
    }
}

/// Right handed perspective projection looking along `-Z`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerspectiveProjection {
    pub vertical_angle_of_view: Angle,
    pub depth_mode: DepthMode,
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        PerspectiveProjection {
            vertical_angle_of_view: Angle::from_degrees(90.0),
            depth_mode: DepthMode::default(),
        }
    }
}

impl Projection for PerspectiveProjection {
    fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4<f32> {
        let f = 1.0 / (self.vertical_angle_of_view.radians() * 0.5).tan();

        match self.depth_mode {
            DepthMode::Reversed { z_min } => Matrix4::from_columns(&[
                Vector4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
                Vector4::new(0.0, f, 0.0, 0.0),
                Vector4::new(0.0, 0.0, 0.0, -1.0),
                Vector4::new(0.0, 0.0, z_min, 0.0),
            ]),

            DepthMode::Standard { ref z_clip } => {
                let near = *z_clip.start();
                let far = *z_clip.end();
                let range_inv = 1.0 / (near - far);

                Matrix4::from_columns(&[
                    Vector4::new(f / aspect_ratio, 0.0, 0.0, 0.0),
                    Vector4::new(0.0, f, 0.0, 0.0),
                    Vector4::new(0.0, 0.0, (far + near) * range_inv, -1.0),
                    Vector4::new(0.0, 0.0, 2.0 * far * near * range_inv, 0.0),
                ])
            }
        }
    }
}

/// Standard depth perspective from raw parameters.
///
/// Prefer [`PerspectiveProjection`].
pub fn perspective(
    aspect_ratio: f32,
    fovy: f32,
    near: f32,
    far: f32,
) -> Matrix4<f32> {
    let y_scale = 1.0 / (fovy * 0.5).tan();
    let x_scale = y_scale / aspect_ratio;
    let z_range = far - near;
    let z_scale = -(far + near) / z_range;
    let wz_scale = -2.0 * far * near / z_range;

    Matrix4::from_columns(&[
        Vector4::new(x_scale, 0.0, 0.0, 0.0),
        Vector4::new(0.0, y_scale, 0.0, 0.0),
        Vector4::new(0.0, 0.0, z_scale, -1.0),
        Vector4::new(0.0, 0.0, wz_scale, 0.0),
    ])
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        approx::{assert_abs_diff_eq, assert_relative_eq},
        std::f32::consts::PI,
    };

    #[test]
    fn default_projection() {
        let projection = PerspectiveProjection::default();
        assert_abs_diff_eq!(
            projection.vertical_angle_of_view.degrees(),
            90.0,
            epsilon = 1e-4
        );
        assert_eq!(
            projection.depth_mode,
            DepthMode::Standard { z_clip: 0.01..=100.0 }
        );
    }

    #[test]
    fn size_overloads_match() {
        let projection = PerspectiveProjection {
            vertical_angle_of_view: Angle::from_degrees(45.0),
            depth_mode: DepthMode::Standard { z_clip: 0.5..=150.0 },
        };

        let direct = projection.projection_matrix(16.0 / 9.0);
        assert_abs_diff_eq!(
            projection.projection_matrix_for_size(Vector2::new(16.0, 9.0)),
            direct,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            projection.projection_matrix_wh(16.0, 9.0),
            direct,
            epsilon = 1e-6
        );
    }

    #[test]
    fn standard_depth() {
        let (near, far, aspect) = (1.0f32, 10.0f32, 4.0f32 / 3.0);
        let projection = PerspectiveProjection {
            vertical_angle_of_view: Angle::from_degrees(90.0),
            depth_mode: DepthMode::Standard { z_clip: near..=far },
        };
        let matrix = projection.projection_matrix(aspect);

        let f = 1.0 / (PI / 4.0).tan();
        let range_inv = 1.0 / (near - far);
        let expected = Matrix4::from_columns(&[
            Vector4::new(f / aspect, 0.0, 0.0, 0.0),
            Vector4::new(0.0, f, 0.0, 0.0),
            Vector4::new(0.0, 0.0, (far + near) * range_inv, -1.0),
            Vector4::new(0.0, 0.0, 2.0 * far * near * range_inv, 0.0),
        ]);
        assert_abs_diff_eq!(matrix, expected, epsilon = 1e-6);

        // Near plane lands on -1, far plane on 1.
        let clip = matrix * Vector4::new(0.0, 0.0, -near, 1.0);
        assert_relative_eq!(clip.z / clip.w, -1.0, epsilon = 1e-5);
        let clip = matrix * Vector4::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(clip.z / clip.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn reversed_depth() {
        let projection = PerspectiveProjection {
            vertical_angle_of_view: Angle::from_degrees(60.0),
            depth_mode: DepthMode::Reversed { z_min: 0.5 },
        };
        let aspect = 21.0 / 9.0;
        let matrix = projection.projection_matrix(aspect);

        let half = projection.vertical_angle_of_view.radians() * 0.5;
        let f = 1.0 / half.tan();
        let expected = Matrix4::from_columns(&[
            Vector4::new(f / aspect, 0.0, 0.0, 0.0),
            Vector4::new(0.0, f, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, -1.0),
            Vector4::new(0.0, 0.0, 0.5, 0.0),
        ]);
        assert_abs_diff_eq!(matrix, expected, epsilon = 1e-6);

        let clip = matrix * Vector4::new(0.0, 0.0, -0.5, 1.0);
        assert_relative_eq!(clip.z / clip.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn legacy_perspective_agrees_with_standard_depth() {
        let (aspect, fovy, near, far) =
            (2.0f32, PI / 3.0, 0.25f32, 400.0f32);
        let legacy = perspective(aspect, fovy, near, far);

        let y_scale = 1.0 / (fovy * 0.5).tan();
        assert_abs_diff_eq!(
            legacy[(0, 0)],
            y_scale / aspect,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(legacy[(1, 1)], y_scale, epsilon = 1e-6);
        assert_eq!(legacy[(3, 2)], -1.0);
        assert_eq!(legacy[(3, 3)], 0.0);

        let projection = PerspectiveProjection {
            vertical_angle_of_view: Angle::from_radians(fovy),
            depth_mode: DepthMode::Standard { z_clip: near..=far },
        };
        assert_relative_eq!(
            legacy,
            projection.projection_matrix(aspect),
            epsilon = 1e-6,
            max_relative = 1e-5
        );
    }

    #[test]
    fn serde_round_trip() {
        let projection = PerspectiveProjection {
            vertical_angle_of_view: Angle::from_degrees(60.0),
            depth_mode: DepthMode::Reversed { z_min: 0.1 },
        };
        let text = ron::to_string(&projection).unwrap();
        let back: PerspectiveProjection = ron::from_str(&text).unwrap();
        assert_eq!(back, projection);
    }
}
