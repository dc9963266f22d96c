use halla::math::{Bounds3, Point3, Vec3};
use halla::ray::{Ray, RayKind};

fn ray(o: Point3<f32>, d: Vec3<f32>) -> Ray {
    Ray::new(o, d.normalized(), Vec3::from(1.0), RayKind::Primary)
}

#[test]
fn default_is_empty() {
    let bb = Bounds3::<f32>::default();
    assert!(bb.is_empty());

    let bb = bb.union_p(Point3::new(1.0, 2.0, 3.0));
    assert!(!bb.is_empty());
    assert_eq!(bb.p_min, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(bb.p_max, Point3::new(1.0, 2.0, 3.0));
}

#[test]
fn default_is_union_neutral() {
    let bb = Bounds3::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(3.0, 1.0, 4.0));
    assert_eq!(Bounds3::default().union_b(bb), bb);
    assert_eq!(bb.union_b(Bounds3::default()), bb);
}

#[test]
fn new_swaps_extents() {
    let bb = Bounds3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(0.0, 0.0, 0.0));
    assert_eq!(bb.p_min, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(bb.p_max, Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn union_p() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
    assert_eq!(bb.union_p(Point3::new(1.0, 1.0, 1.0)), bb);
    assert_eq!(
        bb.union_p(Point3::new(3.0, -1.0, 1.0)),
        Bounds3::new(Point3::new(0.0, -1.0, 0.0), Point3::new(3.0, 2.0, 2.0))
    );
}

#[test]
fn inside() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    assert!(bb.inside(Point3::new(0.5, 0.5, 0.5)));
    assert!(bb.inside(Point3::new(0.0, 0.0, 0.0)));
    assert!(!bb.inside(Point3::new(1.5, 0.5, 0.5)));
}

#[test]
fn overlaps() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    let other = Bounds3::new(Point3::new(0.5, 0.5, 0.5), Point3::new(2.0, 2.0, 2.0));
    assert!(bb.overlaps(other));
    assert!(other.overlaps(bb));

    let far = Bounds3::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
    assert!(!bb.overlaps(far));
}

#[test]
fn axes_by_extent() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 3.0, 2.0));
    assert_eq!(bb.axes_by_extent(), [1, 2, 0]);

    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 3.0, 2.0));
    assert_eq!(bb.axes_by_extent(), [0, 1, 2]);
}

#[test]
fn slab_entry_and_exit() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

    let (t0, t1) = bb
        .intersections(&ray(Point3::new(-1.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();
    assert_eq!(t0, 1.0);
    assert_eq!(t1, 2.0);
}

#[test]
fn slab_miss() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

    assert!(bb
        .intersections(&ray(Point3::new(-1.0, 2.0, 0.5), Vec3::new(1.0, 0.0, 0.0)))
        .is_none());
    // Behind the ray
    assert!(bb
        .intersections(&ray(Point3::new(2.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0)))
        .is_none());
}

#[test]
fn slab_origin_inside() {
    let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

    let (t0, t1) = bb
        .intersections(&ray(Point3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 1.0)))
        .unwrap();
    assert!(t0 < 0.0);
    assert_eq!(t1, 0.5);
}
