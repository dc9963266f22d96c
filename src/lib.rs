pub mod camera;
pub mod film;
pub mod hit;
pub mod integrators;
pub mod kd_tree;
pub mod lights;
mod macros;
pub mod materials;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod shapes;
pub mod textures;
