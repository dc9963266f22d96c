use std::sync::Arc;

use approx::assert_relative_eq;

use halla::materials::{Material, MaterialParameter};
use halla::math::{Point3, Vec2, Vec3};
use halla::ray::{Ray, RayKind};
use halla::shapes::Mesh;

fn constant(v: Vec3<f32>) -> MaterialParameter {
    MaterialParameter::constant(v)
}

#[test]
fn degenerate_faces_are_dropped() {
    // Second face reuses a vertex and has zero area
    let mesh = Arc::new(Mesh::new(
        vec![0, 1, 2, 0, 0, 1],
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        Material::default(),
    ));

    let faces = Mesh::faces(&mesh);
    assert_eq!(faces.len(), 1);
}

#[test]
fn generated_normals_average_face_planes() {
    let mut mesh = Mesh::new(
        vec![0, 1, 2, 0, 2, 3],
        vec![
            Point3::new(-1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(-1.0, 0.0, -1.0),
        ],
        Material::default(),
    );
    mesh.generate_normals();

    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    for n in &mesh.normals {
        assert_relative_eq!(Vec3::from(*n), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }
}

#[test]
fn material_blend_is_weighted() {
    let a = Material {
        kd: constant(Vec3::new(1.0, 0.0, 0.0)),
        shininess: 10.0,
        ior: 1.0,
        ..Material::default()
    };
    let b = Material {
        kd: constant(Vec3::new(0.0, 0.0, 1.0)),
        shininess: 30.0,
        ior: 2.0,
        ..Material::default()
    };

    let mut blended = a * 0.25;
    blended += b * 0.75;

    let uv = Vec2::new(0.0, 0.0);
    assert_relative_eq!(
        blended.kd.value(uv),
        Vec3::new(0.25, 0.0, 0.75),
        epsilon = 1e-6
    );
    assert_relative_eq!(blended.shininess, 25.0, epsilon = 1e-5);
    assert_relative_eq!(blended.ior, 1.75, epsilon = 1e-5);
}

#[test]
fn hit_interpolates_vertex_materials() {
    let mut mesh = Mesh::new(
        vec![0, 1, 2],
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ],
        Material::default(),
    );
    mesh.materials = vec![
        Material {
            kd: constant(Vec3::new(1.0, 0.0, 0.0)),
            ..Material::default()
        },
        Material {
            kd: constant(Vec3::new(0.0, 1.0, 0.0)),
            ..Material::default()
        },
        Material {
            kd: constant(Vec3::new(0.0, 0.0, 1.0)),
            ..Material::default()
        },
    ];
    let mesh = Arc::new(mesh);
    let faces = Mesh::faces(&mesh);

    // Perpendicular hit at (0.5, 0.5): the barycentric weights are
    // (0.5, 0.25, 0.25)
    let ray = Ray::new(
        Point3::new(0.5, 0.5, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::from(1.0),
        RayKind::Primary,
    );
    let hit = faces[0].intersect(&ray).unwrap();

    assert_relative_eq!(hit.bary[0], 0.5, epsilon = 1e-5);
    assert_relative_eq!(hit.bary[1], 0.25, epsilon = 1e-5);
    assert_relative_eq!(hit.bary[2], 0.25, epsilon = 1e-5);
    assert_relative_eq!(
        hit.material.kd.value(hit.uv),
        Vec3::new(0.5, 0.25, 0.25),
        epsilon = 1e-5
    );
    assert_relative_eq!(hit.t, 1.0, epsilon = 1e-5);
}

#[test]
fn hit_rejects_near_origin_intersections() {
    let mesh = Arc::new(Mesh::new(
        vec![0, 1, 2],
        vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        Material::default(),
    ));
    let faces = Mesh::faces(&mesh);

    // A secondary ray starting on the surface must not see it again
    let ray = Ray::new(
        Point3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::from(1.0),
        RayKind::Reflection,
    );
    assert!(faces[0].intersect(&ray).is_none());
}
