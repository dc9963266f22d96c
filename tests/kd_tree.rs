use std::sync::Arc;

use rand::Rng;
use rand_pcg::Pcg32;

use halla::kd_tree::{KdNode, KdTree, TreeSettings};
use halla::materials::Material;
use halla::math::{Point3, Vec3};
use halla::ray::{Ray, RayKind};
use halla::shapes::{Mesh, Triangle};

fn random_triangle_soup(rng: &mut Pcg32, triangle_count: usize) -> Vec<Arc<Triangle>> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for i in 0..triangle_count {
        for _ in 0..3 {
            vertices.push(Point3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ));
        }
        indices.extend_from_slice(&[i * 3, i * 3 + 1, i * 3 + 2]);
    }
    let mesh = Arc::new(Mesh::new(indices, vertices, Material::default()));
    Mesh::faces(&mesh)
}

fn random_ray(rng: &mut Pcg32) -> Ray {
    let o = Point3::new(
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-2.0..2.0),
    );
    // Rejection sample a usable direction
    let d = loop {
        let d = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if d.len_sqr() > 1e-4 {
            break d.normalized();
        }
    };
    Ray::new(o, d, Vec3::from(1.0), RayKind::Primary)
}

#[test]
fn agrees_with_brute_force() {
    let mut rng = Pcg32::new(0xDEADCAFE, 0);
    let faces = random_triangle_soup(&mut rng, 64);
    let tree = KdTree::new(faces.clone(), TreeSettings::default());

    for _ in 0..256 {
        let ray = random_ray(&mut rng);

        let brute = faces
            .iter()
            .filter_map(|f| f.intersect(&ray))
            .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
        let tree_hit = tree.intersect(&ray);

        match (brute, tree_hit) {
            (None, None) => (),
            (Some(b), Some(t)) => {
                assert!(
                    (b.t - t.t).abs() < 1e-5,
                    "nearest distances diverge: {} vs {}",
                    b.t,
                    t.t
                );
            }
            (b, t) => panic!(
                "hit disagreement: brute force {:?} vs tree {:?}",
                b.map(|h| h.t),
                t.map(|h| h.t)
            ),
        }
    }
}

fn check_node(node: &KdNode) {
    match node.children() {
        Some((left, right)) => {
            // An interior node's bounds are exactly the union of its children's
            assert_eq!(node.bounds(), left.bounds().union_b(right.bounds()));
            check_node(left);
            check_node(right);
        }
        None => {
            for face in node.faces() {
                assert!(
                    node.bounds().contains_b(face.bounds()),
                    "leaf bounds don't contain a face's bounds"
                );
            }
        }
    }
}

#[test]
fn node_bounds_invariants() {
    let mut rng = Pcg32::new(0xBADC0DE, 0);
    let faces = random_triangle_soup(&mut rng, 128);
    let tree = KdTree::new(faces, TreeSettings::default());

    check_node(tree.root());
}

#[test]
fn every_face_lands_in_a_leaf() {
    let mut rng = Pcg32::new(0x5EED, 0);
    let faces = random_triangle_soup(&mut rng, 97);
    let face_count = faces.len();
    let tree = KdTree::new(faces, TreeSettings::default());

    assert_eq!(tree.leaf_face_count(), face_count);
}

#[test]
fn coincident_faces_terminate() {
    // Identical triangles can't be partitioned on any axis
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for i in 0..32 {
        vertices.push(Point3::new(0.0, 0.0, 0.0));
        vertices.push(Point3::new(1.0, 0.0, 0.0));
        vertices.push(Point3::new(0.0, 1.0, 0.0));
        indices.extend_from_slice(&[i * 3, i * 3 + 1, i * 3 + 2]);
    }
    let mesh = Arc::new(Mesh::new(indices, vertices, Material::default()));
    let faces = Mesh::faces(&mesh);
    assert_eq!(faces.len(), 32);

    let settings = TreeSettings {
        leaf_size: 4,
        max_depth: 16,
    };
    let tree = KdTree::new(faces, settings);
    assert_eq!(tree.leaf_face_count(), 32);
    assert!(tree.max_depth() <= settings.max_depth + 1);
}

#[test]
fn respects_max_depth() {
    let mut rng = Pcg32::new(0xFEED, 0);
    let faces = random_triangle_soup(&mut rng, 256);
    let settings = TreeSettings {
        leaf_size: 1,
        max_depth: 4,
    };
    let tree = KdTree::new(faces, settings);

    assert!(tree.max_depth() <= settings.max_depth + 1);
}
