use {
    nalgebra::Matrix3,
    std::ops::{Add, Neg, Sub},
};

/// Shear coefficients between pairs of basis axes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Skew {
    pub xy: f32,
    pub xz: f32,
    pub yz: f32,
}

impl Skew {
    pub const ZERO: Self = Skew {
        xy: 0.0,
        xz: 0.0,
        yz: 0.0,
    };

    pub const fn new(xy: f32, xz: f32, yz: f32) -> Self {
        Skew { xy, xz, yz }
    }

    /// Upper unit-triangular matrix applying this shear.
    ///
    /// Second basis column gains `xy` of the first one,
    /// third gains `xz` of the first and `yz` of the second.
    pub fn to_matrix(&self) -> Matrix3<f32> {
        Matrix3::new(
            1.0, self.xy, self.xz, //
            0.0, 1.0, self.yz, //
            0.0, 0.0, 1.0,
        )
    }
}

impl Add for Skew {
    type Output = Skew;

    fn add(self, rhs: Skew) -> Skew {
        Skew {
            xy: self.xy + rhs.xy,
            xz: self.xz + rhs.xz,
            yz: self.yz + rhs.yz,
        }
    }
}

impl Sub for Skew {
    type Output = Skew;

    fn sub(self, rhs: Skew) -> Skew {
        Skew {
            xy: self.xy - rhs.xy,
            xz: self.xz - rhs.xz,
            yz: self.yz - rhs.yz,
        }
    }
}

impl Neg for Skew {
    type Output = Skew;

    fn neg(self) -> Skew {
        Skew {
            xy: -self.xy,
            xz: -self.xz,
            yz: -self.yz,
        }
    }
}
