use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    hit::Hit,
    math::Vec3,
    ray::{Ray, RayKind, RAY_EPSILON},
    scene::Scene,
};

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Params {
    pub max_depth: u32,
    /// Sample the scene's environment map on misses
    pub environment: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 3,
            environment: true,
        }
    }
}

/// Recursive direct + specular light transport.
pub struct Whitted {
    max_depth: u32,
    environment: bool,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
            environment: params.environment,
        }
    }

    /// Traces a primary ray through normalized image coordinates and clamps
    /// the result to `[0, 1]` per channel. Recursion below never clamps.
    pub fn trace(&self, scene: &Scene, camera: &Camera, x: f32, y: f32) -> Vec3<f32> {
        let ray = camera.ray_through(x, y);
        self.radiance(scene, &ray, self.max_depth).clamped(0.0, 1.0)
    }

    /// Evaluates the color along `ray` with `depth` recursion steps left.
    pub fn radiance(&self, scene: &Scene, ray: &Ray, depth: u32) -> Vec3<f32> {
        let hit = match scene.intersect(ray) {
            Some(hit) => hit,
            None => {
                return match &scene.environment {
                    Some(env) if self.environment => env.color(ray),
                    _ => Vec3::zeros(),
                };
            }
        };

        let mut color = hit.material.shade(scene, ray, &hit);
        if depth == 0 {
            return color;
        }

        if hit.material.reflective() {
            color += self.reflected(scene, ray, &hit, depth) * hit.material.kr.value(hit.uv);
        }

        if hit.material.transmissive() {
            color += self.refracted(scene, ray, &hit, depth);
        }

        color
    }

    fn reflected(&self, scene: &Scene, ray: &Ray, hit: &Hit, depth: u32) -> Vec3<f32> {
        let p = ray.point(hit.t);
        let d = reflect(ray.d, Vec3::from(hit.n)).normalized();

        let reflection = Ray::new(p, d, Vec3::from(1.0), RayKind::Reflection);
        self.radiance(scene, &reflection, depth - 1)
    }

    fn refracted(&self, scene: &Scene, ray: &Ray, hit: &Hit, depth: u32) -> Vec3<f32> {
        let p = ray.point(hit.t);
        let mut n = Vec3::from(hit.n);
        let mut ior = hit.material.ior;

        let entering = ray.d.dot(n) < 0.0;
        if !entering {
            n = -n;
        }

        // Exiting the interface the carried index came from means leaving
        // the medium back into vacuum
        if !entering && (ray.medium_ior - ior).abs() <= RAY_EPSILON {
            ior = 1.0;
        }

        let eta = ray.medium_ior / ior;
        // Beer's law style absorption over the distance covered inside
        let absorption = hit.material.kt.value(hit.uv).powf(p.dist(ray.o));

        match refract(ray.d, n, eta) {
            Some(d) => {
                let refraction =
                    Ray::in_medium(p, d.normalized(), Vec3::from(1.0), RayKind::Refraction, ior);
                let color = self.radiance(scene, &refraction, depth - 1);
                if entering {
                    color
                } else {
                    color * absorption
                }
            }
            None => {
                // Total internal reflection
                let d = reflect(ray.d, n).normalized();
                let reflection = Ray::new(p, d, Vec3::from(1.0), RayKind::Reflection);
                self.radiance(scene, &reflection, depth - 1) * absorption
            }
        }
    }
}

fn reflect(i: Vec3<f32>, n: Vec3<f32>) -> Vec3<f32> {
    i - n * (2.0 * i.dot(n))
}

/// Refracts `i` about `n` with the refractive index ratio `eta`. Returns
/// `None` when there is no valid transmitted direction.
fn refract(i: Vec3<f32>, n: Vec3<f32>, eta: f32) -> Option<Vec3<f32>> {
    let cos_i = -i.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    let t = i * eta + n * (eta * cos_i - k.sqrt());
    if t.has_nans() || t.len_sqr() == 0.0 {
        return None;
    }
    Some(t)
}
