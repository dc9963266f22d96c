use super::TextureMap;
use crate::{
    math::{Vec2, Vec3},
    ray::Ray,
};

/// Environment lookup for rays that leave the scene.
/// Faces are stored in +x, -x, +y, -y, -z, +z order.
pub struct CubeMap {
    faces: [TextureMap; 6],
}

impl CubeMap {
    pub fn new(faces: [TextureMap; 6]) -> Self {
        Self { faces }
    }

    /// Samples the face the ray direction points at.
    pub fn color(&self, ray: &Ray) -> Vec3<f32> {
        let d = ray.d;
        let abs = d.abs();

        let (face, major, uc, vc) = if abs.x >= abs.y && abs.x >= abs.z {
            if d.x > 0.0 {
                (0, abs.x, d.z, d.y)
            } else {
                (1, abs.x, -d.z, d.y)
            }
        } else if abs.y >= abs.x && abs.y >= abs.z {
            if d.y > 0.0 {
                (2, abs.y, d.x, -d.z)
            } else {
                (3, abs.y, d.x, d.z)
            }
        } else if d.z > 0.0 {
            (5, abs.z, -d.x, d.y)
        } else {
            (4, abs.z, d.x, d.y)
        };

        let u = 0.5 * (uc / major + 1.0);
        let v = 0.5 * (vc / major + 1.0);
        self.faces[face].sample(Vec2::new(u, v))
    }
}
