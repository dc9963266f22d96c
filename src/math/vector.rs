use approx::{AbsDiffEq, RelativeEq};
use num::Float;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// Generic two-component vector
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
}

/// Generic three-component vector
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: Float,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

macro_rules! impl_elementwise_ops {
    ($v:ident { $($c:ident)+ }) => {
        impl<T: Float> Add for $v<T> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self { $($c: self.$c + other.$c),+ }
            }
        }

        impl<T: Float> Sub for $v<T> {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self { $($c: self.$c - other.$c),+ }
            }
        }

        impl<T: Float> Mul for $v<T> {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self { $($c: self.$c * other.$c),+ }
            }
        }

        impl<T: Float> Mul<T> for $v<T> {
            type Output = Self;
            fn mul(self, other: T) -> Self {
                Self { $($c: self.$c * other),+ }
            }
        }

        impl<T: Float> Div<T> for $v<T> {
            type Output = Self;
            fn div(self, other: T) -> Self {
                Self { $($c: self.$c / other),+ }
            }
        }

        impl<T: Float> Neg for $v<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }

        impl<T: Float> AddAssign for $v<T> {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl<T: Float> SubAssign for $v<T> {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl<T: Float> MulAssign<T> for $v<T> {
            fn mul_assign(&mut self, other: T) {
                *self = *self * other;
            }
        }

        impl<T: Float> DivAssign<T> for $v<T> {
            fn div_assign(&mut self, other: T) {
                *self = *self / other;
            }
        }

        impl<T: Float> From<T> for $v<T> {
            fn from(v: T) -> Self {
                Self { $($c: v),+ }
            }
        }
    };
}

impl_elementwise_ops!(Vec2 { x y });
impl_elementwise_ops!(Vec3 { x y z });

impl<T> Vec2<T>
where
    T: Float,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T) -> Self {
        let v = Self { x, y };
        debug_assert!(!v.has_nans());
        v
    }

    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Returns the vector's squared length.
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the vector's length.
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }
}

impl<T> Vec3<T>
where
    T: Float,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans());
        v
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

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of the two vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the vector's squared length.
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the vector's length.
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized vector.
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    /// Returns the component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Returns the component-wise minimum of the two vectors.
    pub fn min(&self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Returns the component-wise maximum of the two vectors.
    pub fn max(&self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Returns the value of the maximum component.
    pub fn max_comp(&self) -> T {
        self.x.max(self.y.max(self.z))
    }

    /// Returns the index of the maximum component.
    pub fn max_dimension(&self) -> usize {
        if self.x > self.y {
            if self.x > self.z {
                0
            } else {
                2
            }
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }

    /// Returns the vector with each component raised to `e`.
    pub fn powf(&self, e: T) -> Self {
        Self {
            x: self.x.powf(e),
            y: self.y.powf(e),
            z: self.z.powf(e),
        }
    }

    /// Returns the vector with each component clamped to `[min, max]`.
    pub fn clamped(&self, min: T, max: T) -> Self {
        Self {
            x: self.x.max(min).min(max),
            y: self.y.max(min).min(max),
            z: self.z.max(min).min(max),
        }
    }
}

impl<T> AbsDiffEq for Vec3<T>
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

impl<T> RelativeEq for Vec3<T>
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

impl<T> Index<usize> for Vec3<T>
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
                panic!("Out of bounds Vec3 access with component {}", component);
            }
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T>
where
    T: Float,
{
    fn index_mut(&mut self, component: usize) -> &mut Self::Output {
        match component {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => {
                panic!("Out of bounds Vec3 access with component {}", component);
            }
        }
    }
}
