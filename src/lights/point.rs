use crate::math::{Point3, Vec3};

/// A point light with constant, linear and quadratic distance falloff.
pub struct PointLight {
    pub position: Point3<f32>,
    pub color: Vec3<f32>,
    constant_term: f32,
    linear_term: f32,
    quadratic_term: f32,
}

impl PointLight {
    pub fn new(
        position: Point3<f32>,
        color: Vec3<f32>,
        constant_term: f32,
        linear_term: f32,
        quadratic_term: f32,
    ) -> Self {
        Self {
            position,
            color,
            constant_term,
            linear_term,
            quadratic_term,
        }
    }

    /// Returns the normalized direction from `p` toward the light.
    pub fn direction_from(&self, p: Point3<f32>) -> Vec3<f32> {
        (self.position - p).normalized()
    }

    /// Returns the falloff factor at `p`. Intensity only ever gets weaker
    /// with distance so the factor is clamped to `[0, 1]`.
    pub fn distance_attenuation(&self, p: Point3<f32>) -> f32 {
        let d = p.dist(self.position);
        let attenuation =
            1.0 / (self.constant_term + self.linear_term * d + self.quadratic_term * d * d);
        attenuation.clamp(0.0, 1.0)
    }
}
