use {nalgebra::UnitQuaternion, std::f32::consts::FRAC_PI_2};

/// Order in which Euler rotations are applied.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum EulerOrder {
    /// Yaw around Z, then pitch around Y, then roll around X.
    #[default]
    Zyx,
}

/// Euler angles in radians.
#[derive(
    Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct Euler {
    pub order: EulerOrder,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Euler {
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Euler {
            order: EulerOrder::Zyx,
            roll,
            pitch,
            yaw,
        }
    }

    /// Converts rotation to Euler angles.
    ///
    /// At gimbal lock, when pitch reaches a quarter turn, pitch is clamped
    /// to exactly `±π/2` and roll and yaw share the remaining rotation.
    pub fn from_quaternion(q: &UnitQuaternion<f32>) -> Self {
        let (x, y, z, w) = (q.i, q.j, q.k, q.w);

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));

        let s = 2.0 * (w * y - z * x);
        let pitch = if s.abs() >= 1.0 {
            FRAC_PI_2.copysign(s)
        } else {
            s.asin()
        };

        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        Euler::new(roll, pitch, yaw)
    }

    /// Rotation composed from these angles.
    pub fn to_quaternion(&self) -> UnitQuaternion<f32> {
        match self.order {
            EulerOrder::Zyx => UnitQuaternion::from_euler_angles(
                self.roll, self.pitch, self.yaw,
            ),
        }
    }
}

impl Default for Euler {
    fn default() -> Self {
        Euler::new(0.0, 0.0, 0.0)
    }
}

impl From<UnitQuaternion<f32>> for Euler {
    fn from(q: UnitQuaternion<f32>) -> Self {
        Euler::from_quaternion(&q)
    }
}

impl From<&UnitQuaternion<f32>> for Euler {
    fn from(q: &UnitQuaternion<f32>) -> Self {
        Euler::from_quaternion(q)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        approx::assert_abs_diff_eq,
        nalgebra::{Quaternion, Vector3},
        std::f32::consts::PI,
    };

    #[test]
    fn identity_is_zero() {
        let euler = Euler::from(UnitQuaternion::<f32>::identity());
        assert_eq!(euler, Euler::default());
        assert_eq!(euler.order, EulerOrder::Zyx);
    }

    #[test]
    fn single_axis_rotations() {
        let roll = Euler::from(UnitQuaternion::from_axis_angle(
            &Vector3::x_axis(),
            PI / 2.0,
        ));
        assert_abs_diff_eq!(roll.roll, PI / 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(roll.pitch, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(roll.yaw, 0.0, epsilon = 1e-5);

        let pitch = Euler::from(UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            PI / 4.0,
        ));
        assert_abs_diff_eq!(pitch.roll, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pitch.pitch, PI / 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pitch.yaw, 0.0, epsilon = 1e-5);

        let yaw = Euler::from(UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            -PI / 3.0,
        ));
        assert_abs_diff_eq!(yaw.roll, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(yaw.pitch, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(yaw.yaw, -PI / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn round_trip_away_from_poles() {
        let euler = Euler::new(0.3, -0.7, 1.2);
        let back = Euler::from(euler.to_quaternion());
        assert_abs_diff_eq!(back.roll, 0.3, epsilon = 1e-5);
        assert_abs_diff_eq!(back.pitch, -0.7, epsilon = 1e-5);
        assert_abs_diff_eq!(back.yaw, 1.2, epsilon = 1e-5);
    }

    #[test]
    fn pitch_is_clamped_at_gimbal_lock() {
        // Not normalized, `s` ends up well outside of `[-1, 1]`.
        let q = UnitQuaternion::new_unchecked(Quaternion::new(
            1.0, 0.0, 1.0, 0.0,
        ));
        assert_eq!(Euler::from(q).pitch, FRAC_PI_2);

        let q = UnitQuaternion::new_unchecked(Quaternion::new(
            1.0, 0.0, -1.0, 0.0,
        ));
        assert_eq!(Euler::from(q).pitch, -FRAC_PI_2);

        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
        let euler = Euler::from(q);
        assert!(!euler.pitch.is_nan());
        assert_abs_diff_eq!(euler.pitch, FRAC_PI_2, epsilon = 1e-3);
    }
}
