use std::sync::Arc;

use super::Mesh;
use crate::{
    hit::Hit,
    math::{Bounds3, Normal, Vec2, Vec3},
    ray::{Ray, RAY_EPSILON},
};

/// A triangle face. Holds its geometry through vertex indices into the
/// parent mesh and caches its own plane normal and bounds.
pub struct Triangle {
    mesh: Arc<Mesh>,
    vertices: [usize; 3],
    normal: Normal<f32>,
    bounds: Bounds3<f32>,
}

impl Triangle {
    /// Creates a new `Triangle`.
    /// `first_index` is the offset of the face's first vertex index in
    /// `mesh`'s index list. Returns `None` for zero-area faces.
    /// Expects counter clockwise winding.
    pub fn new(mesh: Arc<Mesh>, first_index: usize) -> Option<Self> {
        let vertices = [
            mesh.indices[first_index],
            mesh.indices[first_index + 1],
            mesh.indices[first_index + 2],
        ];

        let a = mesh.vertices[vertices[0]];
        let b = mesh.vertices[vertices[1]];
        let c = mesh.vertices[vertices[2]];

        let n = (b - a).cross(c - a);
        if n.len_sqr() == 0.0 {
            return None;
        }

        let bounds = Bounds3::new(a, b).union_p(c);

        Some(Self {
            mesh,
            vertices,
            normal: Normal::from(n.normalized()),
            bounds,
        })
    }

    /// Returns the cached world bounds of this `Triangle`.
    pub fn bounds(&self) -> Bounds3<f32> {
        self.bounds
    }

    /// Returns the cached plane normal of this `Triangle`.
    pub fn normal(&self) -> Normal<f32> {
        self.normal
    }

    /// Intersects `ray` with this `Triangle`, returning the nearest valid hit.
    /// Hits closer than `RAY_EPSILON` are rejected to keep secondary rays from
    /// hitting the surface they originate on.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let a = self.mesh.vertices[self.vertices[0]];
        let b = self.mesh.vertices[self.vertices[1]];
        let c = self.mesh.vertices[self.vertices[2]];
        let n = Vec3::from(self.normal);

        // Parallel rays can't produce a stable plane hit
        let denom = n.dot(ray.d);
        if denom.abs() < RAY_EPSILON {
            return None;
        }

        let t = n.dot(b - ray.o) / denom;
        if t < RAY_EPSILON {
            return None;
        }

        let p = ray.point(t);

        let m2 = (c - a).cross(p - a).dot(n) / (c - a).cross(b - a).dot(n);
        let m3 = (b - a).cross(p - a).dot(n) / (b - a).cross(c - a).dot(n);
        let m1 = 1.0 - m2 - m3;

        let outside = |m: f32| m < RAY_EPSILON || m > 1.0;
        if outside(m1) || outside(m2) || outside(m3) || outside(m2 + m3) {
            return None;
        }

        let n = if self.mesh.normals.is_empty() {
            self.normal
        } else {
            (self.mesh.normals[self.vertices[0]] * m1
                + self.mesh.normals[self.vertices[1]] * m2
                + self.mesh.normals[self.vertices[2]] * m3)
                .normalized()
        };

        let material = if self.mesh.materials.is_empty() {
            self.mesh.material.clone()
        } else {
            let mut material = self.mesh.materials[self.vertices[0]].clone() * m1;
            material += self.mesh.materials[self.vertices[1]].clone() * m2;
            material += self.mesh.materials[self.vertices[2]].clone() * m3;
            material
        };

        Some(Hit {
            t,
            n,
            bary: [m1, m2, m3],
            uv: Vec2::new(m2, m3),
            material,
            face: self,
        })
    }
}
