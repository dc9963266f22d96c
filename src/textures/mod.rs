mod cube_map;
mod texture_map;

pub use cube_map::CubeMap;
pub use texture_map::{LoadError, TextureMap};
