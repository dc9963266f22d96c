use std::{
    ops::{AddAssign, Mul},
    sync::Arc,
};

use crate::{
    hit::Hit,
    math::{Vec2, Vec3},
    ray::Ray,
    scene::Scene,
    textures::TextureMap,
};

/// A material coefficient, either a constant color or a texture lookup.
#[derive(Clone)]
pub struct MaterialParameter {
    value: Vec3<f32>,
    map: Option<Arc<TextureMap>>,
}

impl MaterialParameter {
    pub fn constant(value: Vec3<f32>) -> Self {
        Self { value, map: None }
    }

    pub fn map(map: Arc<TextureMap>) -> Self {
        Self {
            value: Vec3::from(1.0),
            map: Some(map),
        }
    }

    /// Evaluates the parameter at the given texture coordinates.
    pub fn value(&self, uv: Vec2<f32>) -> Vec3<f32> {
        match &self.map {
            Some(map) => map.sample(uv),
            None => self.value,
        }
    }

    /// Evaluates the parameter as a Rec. 601 luma.
    pub fn intensity(&self, uv: Vec2<f32>) -> f32 {
        let v = self.value(uv);
        0.299 * v.x + 0.587 * v.y + 0.114 * v.z
    }

    pub fn is_zero(&self) -> bool {
        self.map.is_none() && self.value == Vec3::zeros()
    }
}

impl Default for MaterialParameter {
    fn default() -> Self {
        Self::constant(Vec3::zeros())
    }
}

// Weighted blending ops for interpolating per-vertex materials.
// Scaling applies to the constant part, a texture binding is carried along.

impl Mul<f32> for MaterialParameter {
    type Output = Self;

    fn mul(self, weight: f32) -> Self {
        Self {
            value: self.value * weight,
            map: self.map,
        }
    }
}

impl AddAssign for MaterialParameter {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
        if self.map.is_none() {
            self.map = other.map;
        }
    }
}

/// A phong material. Coefficients may come from textures, see
/// [MaterialParameter].
#[derive(Clone)]
pub struct Material {
    /// Emissive color
    pub ke: MaterialParameter,
    /// Ambient coefficient
    pub ka: MaterialParameter,
    /// Diffuse coefficient
    pub kd: MaterialParameter,
    /// Specular coefficient
    pub ks: MaterialParameter,
    /// Reflectivity
    pub kr: MaterialParameter,
    /// Transmissivity
    pub kt: MaterialParameter,
    pub shininess: f32,
    /// Refractive index
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ke: MaterialParameter::default(),
            ka: MaterialParameter::default(),
            kd: MaterialParameter::default(),
            ks: MaterialParameter::default(),
            kr: MaterialParameter::default(),
            kt: MaterialParameter::default(),
            shininess: 0.0,
            ior: 1.0,
        }
    }
}

impl Material {
    /// Returns `true` if the reflective coefficient can be non-zero.
    pub fn reflective(&self) -> bool {
        !self.kr.is_zero()
    }

    /// Returns `true` if the transmissive coefficient can be non-zero.
    pub fn transmissive(&self) -> bool {
        !self.kt.is_zero()
    }

    /// Evaluates the phong model at the hit: emission, ambient and a
    /// shadowed, distance-attenuated diffuse and specular term per light.
    pub fn shade(&self, scene: &Scene, ray: &Ray, hit: &Hit) -> Vec3<f32> {
        let p = ray.point(hit.t);
        let uv = hit.uv;

        let mut color = self.ke.value(uv) + self.ka.value(uv) * scene.ambient;

        for light in &scene.lights {
            let l = light.direction_to(p);
            let light_color = light.shadow_attenuation(scene, p);

            // Flip the normal to face the viewer for back side hits
            let mut n = Vec3::from(hit.n).normalized();
            if ray.d.dot(n) >= 0.0 {
                n = -n;
            }

            let v = (-ray.d).normalized();
            // Mirror direction of the light about the normal
            let r = n * (2.0 * n.dot(l)) - l;

            // Transmissive surfaces can be lit from behind
            let lambert = if self.transmissive() {
                n.dot(l).abs()
            } else {
                n.dot(l).max(0.0)
            };

            let diffuse = self.kd.value(uv) * lambert;
            let specular = self.ks.value(uv) * v.dot(r).max(0.0).powf(self.shininess);

            color += light_color * (diffuse + specular) * light.distance_attenuation(p);
        }

        color
    }
}

impl Mul<f32> for Material {
    type Output = Self;

    fn mul(self, weight: f32) -> Self {
        Self {
            ke: self.ke * weight,
            ka: self.ka * weight,
            kd: self.kd * weight,
            ks: self.ks * weight,
            kr: self.kr * weight,
            kt: self.kt * weight,
            shininess: self.shininess * weight,
            ior: self.ior * weight,
        }
    }
}

impl AddAssign for Material {
    fn add_assign(&mut self, other: Self) {
        self.ke += other.ke;
        self.ka += other.ka;
        self.kd += other.kd;
        self.ks += other.ks;
        self.kr += other.kr;
        self.kt += other.kt;
        self.shininess += other.shininess;
        self.ior += other.ior;
    }
}
