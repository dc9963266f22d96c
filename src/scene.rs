use std::sync::Arc;

use crate::{
    camera::CameraParameters,
    halla_info,
    hit::Hit,
    kd_tree::{KdTree, TreeSettings},
    lights::{DirectionalLight, Light, PointLight},
    materials::{Material, MaterialParameter},
    math::{Point3, Vec3},
    ray::Ray,
    shapes::{Mesh, Triangle},
    textures::CubeMap,
};

/// An immutable scene, ready for concurrent nearest-hit queries.
pub struct Scene {
    pub meshes: Vec<Arc<Mesh>>,
    pub faces: Vec<Arc<Triangle>>,
    pub tree: KdTree,
    pub lights: Vec<Light>,
    pub ambient: Vec3<f32>,
    pub environment: Option<CubeMap>,
}

impl Scene {
    /// Creates a new `Scene` over the meshes, building the accelerator over
    /// every non-degenerate face.
    pub fn new(
        meshes: Vec<Arc<Mesh>>,
        lights: Vec<Light>,
        ambient: Vec3<f32>,
        environment: Option<CubeMap>,
        tree_settings: TreeSettings,
    ) -> Self {
        let faces: Vec<Arc<Triangle>> = meshes.iter().flat_map(Mesh::faces).collect();
        let tree = KdTree::new(faces.clone(), tree_settings);

        halla_info!(
            "Scene: {} faces across {} meshes, tree depth {}",
            faces.len(),
            meshes.len(),
            tree.max_depth()
        );

        Self {
            meshes,
            faces,
            tree,
            lights,
            ambient,
            environment,
        }
    }

    /// Returns the nearest intersection of `ray` with the scene.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.tree.intersect(ray)
    }

    /// Hard-coded demo: a floor, a mirror panel, a diffuse box and a glass
    /// slab under a point light with a directional fill.
    pub fn demo() -> (Self, CameraParameters) {
        let gray = |v| MaterialParameter::constant(Vec3::from(v));
        let rgb = |r, g, b| MaterialParameter::constant(Vec3::new(r, g, b));

        let floor = Material {
            ka: gray(0.7),
            kd: gray(0.7),
            ..Material::default()
        };
        let red = Material {
            ka: rgb(0.8, 0.15, 0.1),
            kd: rgb(0.8, 0.15, 0.1),
            ks: gray(0.2),
            shininess: 16.0,
            ..Material::default()
        };
        let mirror = Material {
            kd: gray(0.05),
            ks: gray(0.4),
            kr: gray(0.9),
            shininess: 64.0,
            ..Material::default()
        };
        let glass = Material {
            ks: gray(0.3),
            kr: gray(0.1),
            kt: gray(0.85),
            shininess: 128.0,
            ior: 1.5,
            ..Material::default()
        };

        let meshes = vec![
            Arc::new(quad_mesh(
                [
                    Point3::new(-4.0, 0.0, 4.0),
                    Point3::new(4.0, 0.0, 4.0),
                    Point3::new(4.0, 0.0, -4.0),
                    Point3::new(-4.0, 0.0, -4.0),
                ],
                floor,
            )),
            Arc::new(quad_mesh(
                [
                    Point3::new(-1.5, 0.2, -2.5),
                    Point3::new(1.5, 0.2, -2.5),
                    Point3::new(1.5, 2.2, -2.5),
                    Point3::new(-1.5, 2.2, -2.5),
                ],
                mirror,
            )),
            Arc::new(box_mesh(
                Point3::new(-2.2, 0.0, -1.5),
                Point3::new(-0.7, 1.5, 0.0),
                red,
            )),
            Arc::new(box_mesh(
                Point3::new(0.8, 0.0, 0.5),
                Point3::new(2.0, 1.8, 0.8),
                glass,
            )),
        ];

        let lights = vec![
            Light::Point(PointLight::new(
                Point3::new(0.0, 3.5, 2.0),
                Vec3::from(0.9),
                1.0,
                0.06,
                0.003,
            )),
            Light::Directional(DirectionalLight::new(
                Vec3::new(-0.3, -1.0, -0.4),
                Vec3::from(0.25),
            )),
        ];

        let scene = Self::new(
            meshes,
            lights,
            Vec3::from(0.08),
            None,
            TreeSettings::default(),
        );

        let camera_params = CameraParameters {
            position: Point3::new(0.0, 1.8, 5.0),
            target: Point3::new(0.0, 1.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 55.0,
        };

        (scene, camera_params)
    }
}

/// Builds a single-sided quad from four corners in counter clockwise order.
pub fn quad_mesh(corners: [Point3<f32>; 4], material: Material) -> Mesh {
    Mesh::new(vec![0, 1, 2, 0, 2, 3], corners.to_vec(), material)
}

/// Builds an axis-aligned box between two corners, faces wound outward.
pub fn box_mesh(p_min: Point3<f32>, p_max: Point3<f32>, material: Material) -> Mesh {
    let vertices = vec![
        Point3::new(p_min.x, p_min.y, p_min.z),
        Point3::new(p_max.x, p_min.y, p_min.z),
        Point3::new(p_max.x, p_max.y, p_min.z),
        Point3::new(p_min.x, p_max.y, p_min.z),
        Point3::new(p_min.x, p_min.y, p_max.z),
        Point3::new(p_max.x, p_min.y, p_max.z),
        Point3::new(p_max.x, p_max.y, p_max.z),
        Point3::new(p_min.x, p_max.y, p_max.z),
    ];
    #[rustfmt::skip]
    let indices = vec![
        4, 5, 6,  4, 6, 7, // front
        1, 0, 3,  1, 3, 2, // back
        0, 4, 7,  0, 7, 3, // left
        5, 1, 2,  5, 2, 6, // right
        3, 7, 6,  3, 6, 2, // top
        0, 1, 5,  0, 5, 4, // bottom
    ];
    Mesh::new(indices, vertices, material)
}
