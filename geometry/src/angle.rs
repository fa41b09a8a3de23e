//! Rotation angle.
//!
//! Stored in radians. Degrees are converted on the way in and out.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Plane angle.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Self = Angle { radians: 0.0 };

    pub const fn from_radians(radians: f32) -> Self {
        Angle { radians }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Angle {
            radians: degrees.to_radians(),
        }
    }

    pub fn radians(self) -> f32 {
        self.radians
    }

    pub fn degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    pub fn set_radians(&mut self, radians: f32) {
        self.radians = radians;
    }

    pub fn set_degrees(&mut self, degrees: f32) {
        self.radians = degrees.to_radians();
    }

    pub fn sin_cos(self) -> (f32, f32) {
        self.radians.sin_cos()
    }

    pub fn tan(self) -> f32 {
        self.radians.tan()
    }
}

impl From<f32> for Angle {
    /// Interprets value as radians.
    fn from(radians: f32) -> Self {
        Angle::from_radians(radians)
    }
}

macro_rules! angle_ops {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident;)*) => {$(
        impl $op for Angle {
            type Output = Angle;

            #[inline]
            fn $f(self, rhs: Angle) -> Angle {
                Angle {
                    radians: $op::$f(self.radians, rhs.radians),
                }
            }
        }

        impl $op<f32> for Angle {
            type Output = Angle;

            #[inline]
            fn $f(self, rhs: f32) -> Angle {
                Angle {
                    radians: $op::$f(self.radians, rhs),
                }
            }
        }

        impl $op_assign for Angle {
            #[inline]
            fn $f_assign(&mut self, rhs: Angle) {
                *self = $op::$f(*self, rhs);
            }
        }

        impl $op_assign<f32> for Angle {
            #[inline]
            fn $f_assign(&mut self, rhs: f32) {
                *self = $op::$f(*self, rhs);
            }
        }
    )*};
}

angle_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}
