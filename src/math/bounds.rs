use num::Float;

use super::{point::Point3, vector::Vec3};
use crate::ray::Ray;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Axis-aligned three-dimensional bounds
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: Float,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

/// The default is inverted bounds, the neutral element for unions
impl<T: Float> Default for Bounds3<T> {
    fn default() -> Self {
        Self {
            p_min: Point3::new(T::max_value(), T::max_value(), T::max_value()),
            p_max: Point3::new(T::min_value(), T::min_value(), T::min_value()),
        }
    }
}

impl<T> Bounds3<T>
where
    T: Float,
{
    /// Creates a new `Bounds3` spanning the two points.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns `true` if no point has been merged into these bounds.
    pub fn is_empty(&self) -> bool {
        self.p_min.x > self.p_max.x || self.p_min.y > self.p_max.y || self.p_min.z > self.p_max.z
    }

    /// Returns these bounds extended to contain `p`.
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns these bounds extended to contain `other`.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the vector from the minimum to the maximum extent.
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Returns the center point of the bounds.
    pub fn mid_point(&self) -> Point3<T> {
        (self.p_min + self.p_max) / (T::one() + T::one())
    }

    /// Returns `true` if `p` lies inside the bounds.
    pub fn inside(&self, p: Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Returns `true` if the bounds overlap `other`.
    pub fn overlaps(&self, other: Self) -> bool {
        self.p_min.x <= other.p_max.x
            && self.p_max.x >= other.p_min.x
            && self.p_min.y <= other.p_max.y
            && self.p_max.y >= other.p_min.y
            && self.p_min.z <= other.p_max.z
            && self.p_max.z >= other.p_min.z
    }

    /// Returns `true` if these bounds contain the whole of `other`.
    pub fn contains_b(&self, other: Self) -> bool {
        self.inside(other.p_min) && self.inside(other.p_max)
    }

    /// Finds the index of the axis with the maximum extent.
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Returns the axis indices ordered from largest to smallest extent.
    pub fn axes_by_extent(&self) -> [usize; 3] {
        let d = self.diagonal();
        let mut axes = [0, 1, 2];
        axes.sort_by(|&a, &b| d[b].partial_cmp(&d[a]).unwrap_or(std::cmp::Ordering::Equal));
        axes
    }
}

impl Bounds3<f32> {
    /// Slab test against `ray`, ignoring the ray's attenuation and kind.
    /// Returns the parametric distances of the entry and exit intersections,
    /// or `None` if the ray misses the bounds or they lie fully behind it.
    pub fn intersections(&self, ray: &Ray) -> Option<(f32, f32)> {
        let mut t0 = f32::NEG_INFINITY;
        let mut t1 = f32::INFINITY;
        for i in 0..3 {
            let inv_d = 1.0 / ray.d[i];
            let mut t_near = (self.p_min[i] - ray.o[i]) * inv_d;
            let mut t_far = (self.p_max[i] - ray.o[i]) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t0 = t0.max(t_near);
            t1 = t1.min(t_far);
            if t0 > t1 {
                return None;
            }
        }
        if t1 < 0.0 {
            return None;
        }
        Some((t0, t1))
    }
}
