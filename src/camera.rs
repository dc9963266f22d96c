use crate::{
    math::{Point3, Vec3},
    ray::{Ray, RayKind},
};

#[derive(Copy, Clone)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 60.0,
        }
    }
}

/// A simple pinhole camera
#[derive(Clone)]
pub struct Camera {
    position: Point3<f32>,
    look: Vec3<f32>,
    horizontal: Vec3<f32>,
    vertical: Vec3<f32>,
}

impl Camera {
    pub fn new(params: CameraParameters, aspect_ratio: f32) -> Self {
        let look = (params.target - params.position).normalized();
        let right = look.cross(params.up).normalized();
        let up = right.cross(look);

        let half_height = (params.fov_y.to_radians() / 2.0).tan();

        Self {
            position: params.position,
            look,
            horizontal: right * (half_height * aspect_ratio),
            vertical: up * half_height,
        }
    }

    /// Maps normalized image coordinates, x right and y down, both in
    /// `[0, 1]`, to a world-space primary ray.
    pub fn ray_through(&self, x: f32, y: f32) -> Ray {
        let d = self.look + self.horizontal * (2.0 * x - 1.0) + self.vertical * (1.0 - 2.0 * y);
        Ray::new(self.position, d.normalized(), Vec3::from(1.0), RayKind::Primary)
    }
}
