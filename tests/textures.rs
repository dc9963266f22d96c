use approx::assert_relative_eq;

use halla::math::{Point3, Vec2, Vec3};
use halla::ray::{Ray, RayKind};
use halla::textures::{CubeMap, TextureMap};

// 2x2 RGB pixels: red, green, blue, white
fn checker() -> TextureMap {
    let data = vec![
        255, 0, 0, //
        0, 255, 0, //
        0, 0, 255, //
        255, 255, 255,
    ];
    TextureMap::new(2, 2, data).unwrap()
}

#[test]
fn rejects_short_buffer() {
    assert!(TextureMap::new(2, 2, vec![0; 9]).is_err());
}

#[test]
fn exact_grid_coordinates_return_exact_pixels() {
    let map = checker();

    assert_eq!(map.sample(Vec2::new(0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(map.sample(Vec2::new(1.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(map.sample(Vec2::new(0.0, 1.0)), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(map.sample(Vec2::new(1.0, 1.0)), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn midpoint_returns_unweighted_average() {
    let map = checker();

    let expected = (Vec3::new(1.0, 0.0, 0.0)
        + Vec3::new(0.0, 1.0, 0.0)
        + Vec3::new(0.0, 0.0, 1.0)
        + Vec3::new(1.0, 1.0, 1.0))
        / 4.0;
    assert_relative_eq!(map.sample(Vec2::new(0.5, 0.5)), expected, epsilon = 1e-6);
}

#[test]
fn single_integer_axis_degenerates_to_lerp() {
    let map = checker();

    // u exactly on the left column, v halfway between red and blue
    let expected = (Vec3::new(1.0, 0.0, 0.0) + Vec3::new(0.0, 0.0, 1.0)) / 2.0;
    assert_relative_eq!(map.sample(Vec2::new(0.0, 0.5)), expected, epsilon = 1e-6);

    // v exactly on the top row, u halfway between red and green
    let expected = (Vec3::new(1.0, 0.0, 0.0) + Vec3::new(0.0, 1.0, 0.0)) / 2.0;
    assert_relative_eq!(map.sample(Vec2::new(0.5, 0.0)), expected, epsilon = 1e-6);
}

fn solid(r: u8, g: u8, b: u8) -> TextureMap {
    TextureMap::new(1, 1, vec![r, g, b]).unwrap()
}

fn env_ray(d: Vec3<f32>) -> Ray {
    Ray::new(
        Point3::zeros(),
        d.normalized(),
        Vec3::from(1.0),
        RayKind::Primary,
    )
}

#[test]
fn cube_map_picks_dominant_axis_face() {
    let env = CubeMap::new([
        solid(255, 0, 0),     // +x
        solid(0, 255, 0),     // -x
        solid(0, 0, 255),     // +y
        solid(255, 255, 0),   // -y
        solid(0, 255, 255),   // -z
        solid(255, 0, 255),   // +z
    ]);

    let cases = [
        (Vec3::new(1.0, 0.1, 0.1), Vec3::new(1.0, 0.0, 0.0)),
        (Vec3::new(-1.0, 0.1, 0.1), Vec3::new(0.0, 1.0, 0.0)),
        (Vec3::new(0.1, 1.0, 0.1), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(0.1, -1.0, 0.1), Vec3::new(1.0, 1.0, 0.0)),
        (Vec3::new(0.1, 0.1, -1.0), Vec3::new(0.0, 1.0, 1.0)),
        (Vec3::new(0.1, 0.1, 1.0), Vec3::new(1.0, 0.0, 1.0)),
    ];
    for (d, expected) in cases {
        assert_eq!(env.color(&env_ray(d)), expected);
    }
}
