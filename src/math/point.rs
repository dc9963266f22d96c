use approx::{AbsDiffEq, RelativeEq};
use num::Float;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub};

use super::vector::Vec3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about point ops:
// Some don't make strict mathematical sense but are useful in weighted sums,
// point + point = point
// point * scalar = point

/// Generic three-component point
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T>
where
    T: Float,
{
    /// Constructs a new point.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the distance to `other`.
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }

    /// Returns the squared distance to `other`.
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Returns the component-wise minimum of the two points.
    pub fn min(&self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of the two points.
    pub fn max(&self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl<T: Float> Sub for Point3<T> {
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Float> Add<Vec3<T>> for Point3<T> {
    type Output = Self;

    fn add(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Float> Sub<Vec3<T>> for Point3<T> {
    type Output = Self;

    fn sub(self, other: Vec3<T>) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Float> Add for Point3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Float> AddAssign<Vec3<T>> for Point3<T> {
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Float> Mul<T> for Point3<T> {
    type Output = Self;

    fn mul(self, other: T) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl<T: Float> Div<T> for Point3<T> {
    type Output = Self;

    fn div(self, other: T) -> Self {
        Self {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl<T: Float> From<Vec3<T>> for Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl<T: Float> From<Point3<T>> for Vec3<T> {
    fn from(p: Point3<T>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl<T> Index<usize> for Point3<T>
where
    T: Float,
{
    type Output = T;

    fn index(&self, component: usize) -> &Self::Output {
        match component {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => {
                panic!("Out of bounds Point3 access with component {}", component);
            }
        }
    }
}

impl<T> IndexMut<usize> for Point3<T>
where
    T: Float,
{
    fn index_mut(&mut self, component: usize) -> &mut Self::Output {
        match component {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => {
                panic!("Out of bounds Point3 access with component {}", component);
            }
        }
    }
}

impl<T> AbsDiffEq for Point3<T>
where
    T: Float + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T> RelativeEq for Point3<T>
where
    T: Float + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
