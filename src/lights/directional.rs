use crate::math::Vec3;

/// A light infinitely far away, shining along a fixed orientation.
pub struct DirectionalLight {
    orientation: Vec3<f32>,
    pub color: Vec3<f32>,
}

impl DirectionalLight {
    pub fn new(orientation: Vec3<f32>, color: Vec3<f32>) -> Self {
        Self {
            orientation: orientation.normalized(),
            color,
        }
    }

    /// Returns the direction toward the light.
    pub fn direction(&self) -> Vec3<f32> {
        -self.orientation
    }
}
