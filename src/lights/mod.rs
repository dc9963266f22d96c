mod directional;
mod point;

pub use directional::DirectionalLight;
pub use point::PointLight;

use crate::{
    math::{Point3, Vec3},
    ray::{Ray, RayKind},
    scene::Scene,
};

/// Transparent surface crossings a shadow ray is allowed before the walk
/// gives up and returns the attenuation gathered so far
const MAX_SHADOW_SEGMENTS: usize = 64;

/// The light variants of a scene. The set is closed, shading matches on it
/// directly.
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    /// Returns the normalized direction from `p` toward the light.
    pub fn direction_to(&self, p: Point3<f32>) -> Vec3<f32> {
        match self {
            Light::Directional(light) => light.direction(),
            Light::Point(light) => light.direction_from(p),
        }
    }

    /// Returns the distance falloff factor at `p`.
    pub fn distance_attenuation(&self, p: Point3<f32>) -> f32 {
        match self {
            Light::Directional(_) => 1.0,
            Light::Point(light) => light.distance_attenuation(p),
        }
    }

    /// Walks a shadow ray from `p` toward the light. Opaque surfaces block
    /// the light outright, transmissive ones absorb by their transmissivity
    /// raised to the distance traveled inside.
    pub fn shadow_attenuation(&self, scene: &Scene, p: Point3<f32>) -> Vec3<f32> {
        let (color, position) = match self {
            Light::Directional(light) => (light.color, None),
            Light::Point(light) => (light.color, Some(light.position)),
        };

        let mut ray = Ray::new(p, self.direction_to(p), Vec3::from(1.0), RayKind::Shadow);

        for _ in 0..MAX_SHADOW_SEGMENTS {
            let hit = match scene.intersect(&ray) {
                Some(hit) => hit,
                None => return color * ray.atten,
            };
            let hit_point = ray.point(hit.t);

            // An occluder behind a point light can't block it
            if let Some(light_position) = position {
                if ray.o.dist(light_position) <= ray.o.dist(hit_point) {
                    return color * ray.atten;
                }
            }

            let entering = Vec3::from(hit.n).dot(ray.d) < 0.0;
            let atten = if entering {
                if !hit.material.transmissive() {
                    return Vec3::zeros();
                }
                ray.atten
            } else {
                ray.atten * hit.material.kt.value(hit.uv).powf(hit_point.dist(ray.o))
            };

            ray = Ray::new(hit_point, ray.d, atten, RayKind::Shadow);
        }

        color * ray.atten
    }
}
