use crate::{
    materials::Material,
    math::{Normal, Vec2},
    shapes::Triangle,
};

/// Info of a surface hit. Built fresh per query and owned by the caller
/// for the query's duration.
pub struct Hit<'a> {
    /// Hit distance along the ray
    pub t: f32,
    /// Surface normal, interpolated when the mesh carries vertex normals
    pub n: Normal<f32>,
    /// Barycentric coordinates of the hit
    pub bary: [f32; 3],
    /// Texture coordinates of the hit
    pub uv: Vec2<f32>,
    /// Material resolved at the hit, blended when the mesh carries vertex materials
    pub material: Material,
    /// The face that was hit
    pub face: &'a Triangle,
}
