use crate::math::{Point3, Vec3};

/// Hit distance below which intersections are rejected as self-hits
pub const RAY_EPSILON: f32 = 1e-4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RayKind {
    Primary,
    Reflection,
    Refraction,
    Shadow,
}

/// A ray with its accumulated color weight and the medium it travels in.
/// Immutable, recursion steps construct new rays instead of mutating.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub o: Point3<f32>,
    pub d: Vec3<f32>,
    /// Attenuation accumulated along the path so far
    pub atten: Vec3<f32>,
    pub kind: RayKind,
    /// Refractive index of the medium the ray currently travels through
    pub medium_ior: f32,
}

impl Ray {
    pub fn new(o: Point3<f32>, d: Vec3<f32>, atten: Vec3<f32>, kind: RayKind) -> Self {
        Self {
            o,
            d,
            atten,
            kind,
            medium_ior: 1.0,
        }
    }

    pub fn in_medium(
        o: Point3<f32>,
        d: Vec3<f32>,
        atten: Vec3<f32>,
        kind: RayKind,
        medium_ior: f32,
    ) -> Self {
        Self {
            o,
            d,
            atten,
            kind,
            medium_ior,
        }
    }

    /// Returns the position at `t` along the ray.
    pub fn point(&self, t: f32) -> Point3<f32> {
        self.o + self.d * t
    }
}
