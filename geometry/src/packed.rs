use {
    bytemuck::{Pod, Zeroable},
    nalgebra::{Scalar, Vector3},
    std::ops::{Index, IndexMut, Mul},
};

/// Three components without padding, as laid out in vertex and uniform
/// buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Packed3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

unsafe impl<T: Zeroable> Zeroable for Packed3<T> {}
unsafe impl<T: Pod> Pod for Packed3<T> {}

impl<T> Packed3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Packed3 { x, y, z }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Packed3<U> {
        Packed3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl<T> Index<usize> for Packed3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Packed3 index {} is out of bounds", index),
        }
    }
}

impl<T> IndexMut<usize> for Packed3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Packed3 index {} is out of bounds", index),
        }
    }
}

impl<T> Mul<T> for Packed3<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Packed3<T>;

    fn mul(self, rhs: T) -> Packed3<T> {
        self.map(|v| v * rhs)
    }
}

impl<T: Scalar> From<Vector3<T>> for Packed3<T> {
    fn from(v: Vector3<T>) -> Self {
        Packed3::new(v.x.clone(), v.y.clone(), v.z.clone())
    }
}

impl<T: Scalar> From<Packed3<T>> for Vector3<T> {
    fn from(p: Packed3<T>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl<T> From<[T; 3]> for Packed3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Packed3 { x, y, z }
    }
}
