use std::sync::Arc;

use super::Triangle;
use crate::{
    halla_debug,
    materials::Material,
    math::{Normal, Point3, Vec3},
};

/// Stores the geometry data of a triangle mesh. Vertices, normals and
/// per-vertex materials are owned here, faces refer back through indices.
pub struct Mesh {
    /// Triangle vertex indices stored as triplets
    pub indices: Vec<usize>,
    /// Points in world space
    pub vertices: Vec<Point3<f32>>,
    /// Per-vertex normals, empty unless supplied or generated
    pub normals: Vec<Normal<f32>>,
    /// Per-vertex materials, empty unless supplied
    pub materials: Vec<Material>,
    /// Material used when no per-vertex materials are present
    pub material: Material,
}

impl Mesh {
    /// Creates a new `Mesh` with flat shading and a single material.
    pub fn new(indices: Vec<usize>, vertices: Vec<Point3<f32>>, material: Material) -> Self {
        Self {
            indices,
            vertices,
            normals: Vec::new(),
            materials: Vec::new(),
            material,
        }
    }

    /// Fills per-vertex normals by averaging the plane normals of the
    /// neighboring faces.
    pub fn generate_normals(&mut self) {
        let mut sums = vec![Vec3::zeros(); self.vertices.len()];
        let mut face_counts = vec![0u32; self.vertices.len()];

        for face in self.indices.chunks_exact(3) {
            let a = self.vertices[face[0]];
            let b = self.vertices[face[1]];
            let c = self.vertices[face[2]];
            let n = (b - a).cross(c - a);
            if n.len_sqr() == 0.0 {
                continue;
            }
            let n = n.normalized();

            for &v in face {
                sums[v] += n;
                face_counts[v] += 1;
            }
        }

        self.normals = sums
            .iter()
            .zip(&face_counts)
            .map(|(&sum, &count)| {
                if count > 0 {
                    Normal::from(sum / (count as f32))
                } else {
                    Normal::from(sum)
                }
            })
            .collect();
    }

    /// Builds the face list of `mesh`. Zero-area faces are dropped, not
    /// errored on.
    pub fn faces(mesh: &Arc<Mesh>) -> Vec<Arc<Triangle>> {
        let mut faces = Vec::new();
        let mut dropped = 0;
        for first_index in (0..mesh.indices.len()).step_by(3) {
            match Triangle::new(Arc::clone(mesh), first_index) {
                Some(face) => faces.push(Arc::new(face)),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            halla_debug!("Mesh: Dropped {} degenerate faces", dropped);
        }
        faces
    }
}
