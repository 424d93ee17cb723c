#![cfg(test)]

use glam::{Mat4, Vec3, Vec4};
use proptest::prelude::*;

use super::*;
use crate::tour::Transcript;

const TOLERANCE: f32 = 1e-4;

fn close(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, TOLERANCE)
}

#[test]
fn test_display() {
    assert_eq!(shown(Vec4::new(1.1, 2.2, 3.3, 4.4)).to_string(), "(1.1, 2.2, 3.3, 4.4)");
    assert_eq!(shown(Vec3::new(-0.0, 0.5, 25.6)).to_string(), "(0, 0.5, 25.6)");
    assert_eq!(Shown::with_precision(1.23456_f32, 3).to_string(), "1.23");
    assert_eq!(
        shown(Mat4::IDENTITY).to_string(),
        "1\t0\t0\t0\t\n0\t1\t0\t0\t\n0\t0\t1\t0\t\n0\t0\t0\t1\t\n"
    );
}

#[test]
fn test_components_from_normal() {
    let w = Vec3::new(0.8, 0.7, 0.0);
    let (parallel, perpendicular) = components_from_normal(w, Vec3::X);
    assert!(close(parallel, Vec3::new(0.8, 0.0, 0.0)));
    assert!(close(perpendicular, Vec3::new(0.0, 0.7, 0.0)));
    assert!(
        (parallel.angle_between(perpendicular) - std::f32::consts::FRAC_PI_2).abs() < TOLERANCE,
        "The two components should be perpendicular!"
    );
}

#[test]
fn test_vector_helpers() {
    assert_eq!(saturate(Vec4::new(2.3, -1.5, 0.7, 1.1)), Vec4::new(1.0, 0.0, 0.7, 1.0));
    assert_eq!(pow4(Vec4::splat(2.0), Vec4::new(0.0, 1.0, 2.0, 3.0)), Vec4::new(1.0, 2.0, 4.0, 8.0));
    assert_eq!(map4(Vec4::new(1.0, 4.0, 9.0, 16.0), f32::sqrt), Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(with_lane(Vec4::ZERO, 1, 5.0), Vec4::new(0.0, 5.0, 0.0, 0.0));
    assert_eq!(with_lane(Vec4::ZERO, 9, 5.0), Vec4::ZERO, "Out of range lanes should be ignored!");
    assert!(near_equal3(Vec3::ONE, Vec3::splat(1.0 + f32::EPSILON / 2.0), f32::EPSILON));
    assert!(!near_equal3(Vec3::ONE, Vec3::splat(1.1), f32::EPSILON));
}

#[test]
fn test_plane_construction() {
    let plane = Plane::from_point_normal(Vec3::X, Vec3::Y);
    assert_eq!(plane.normal(), Vec3::Y);
    assert_eq!(plane.d(), 0.0);

    let (p0, p1, p2) = (Vec3::new(0.0, 1.0, 0.0), Vec3::new(-1.0, 3.0, 6.0), Vec3::new(8.0, 5.0, 3.0));
    let plane = Plane::from_points(p0, p1, p2).unwrap();
    for point in [p0, p1, p2] {
        assert!(plane.dot_coord(point).abs() < TOLERANCE, "Every source point should be on the plane!");
    }
    assert!((plane.normal().length() - 1.0).abs() < TOLERANCE);

    assert_eq!(Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0), None);
}

#[test]
fn test_plane_normalize() {
    let plane = Plane::new(0.0, 3.0, 4.0, 10.0).normalize();
    assert_eq!(plane, Plane::new(0.0, 0.6, 0.8, 2.0));
    let degenerate = Plane::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(degenerate.normalize(), degenerate);
}

#[test]
fn test_side_of() {
    let plane = Plane::new(0.0, 1.0, 0.0, 0.0);
    assert!(plane.side_of(Vec3::new(3.0, 5.0, 2.0)).is_positive());
    assert!(plane.side_of(Vec3::new(3.0, -5.0, 2.0)).is_negative());
    assert!(plane.side_of(Vec3::ZERO).is_coplanar());
}

#[test]
fn test_intersect_line() {
    let third = 1.0 / 3.0_f32.sqrt();
    let plane = Plane::new(third, third, third, -5.0);
    let hit = plane.intersect_line(Vec3::new(-1.0, 1.0, -1.0), Vec3::new(0.0, 1.0, -1.0)).unwrap();
    assert!(close(hit, Vec3::new(5.0 * 3.0_f32.sqrt(), 1.0, -1.0)));
    assert!(plane.dot_coord(hit).abs() < TOLERANCE);

    let floor = Plane::new(0.0, 1.0, 0.0, 0.0);
    assert_eq!(floor.intersect_line(Vec3::Y, Vec3::new(1.0, 1.0, 0.0)), None, "Parallel lines never hit!");
}

#[test]
fn test_transform() {
    let floor = Plane::new(0.0, 1.0, 0.0, 0.0);
    let lifted = floor.transform(Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0))).unwrap();
    assert!(lifted.dot_coord(Vec3::new(7.0, 2.0, -3.0)).abs() < TOLERANCE);
    assert!(lifted.side_of(Vec3::ZERO).is_negative());

    assert_eq!(floor.transform(Mat4::ZERO), None);
}

#[test]
fn test_reflections_agree() {
    let half = 1.0 / 2.0_f32.sqrt();
    let mirror = Plane::new(-half, half, 0.0, 5.0 * half).normalize();
    let point = Vec3::new(0.0, 1.0, 0.0);
    let expected = Vec3::new(6.0, -5.0, 0.0);
    assert!(close(mirror.reflect_by_matrix(point), expected));
    assert!(close(mirror.reflect_by_formula(point), expected));
    assert!(close(mirror.reflect_by_projection(point), expected));
    assert_eq!(mirror.reflect_point(point), mirror.reflect_by_formula(point));
}

#[test]
fn test_graphics_transcript() {
    let mut out = Transcript::new();
    run(&mut out).unwrap();
    let lines: Vec<&str> = out.as_str().lines().collect();
    for expected in [
        "set: (1.1, 2.2, 3.3, 4.4)",
        "zero: (0, 0, 0, 0)",
        "splat z: (3, 3, 3, 3)",
        "with w: (1, 2, 3, 44)",
        "load2: (1.1, 2.8, 0, 0)",
        "store2: (1, 2)",
        "u+v: (1, 4.5, 1.2, 0)",
        "8*u: (16, 12, 25.6, 0)",
        "projW + perpW == w: true",
        "min: (2, 3, 5, 6)",
        "max: (4, 7, 9, 8)",
        "det(A): 6",
        "A * inverse(A) is identity: true",
        "point: (4, 6, 12)",
        "vector: (2, 2, 9)",
        "xxyy: (5, 5, 8, 8)",
        "wwxz: (20, 20, 5, 10)",
        "zyzw: (10, 8, 10, 20)",
        "radians(90): 1.57079637",
        "v1: Positive",
        "v2: Negative",
        "v3: Coplanar",
        "Plane1: (0.5, 1, 0.5, 0.3)",
        "Plane2: (0, 1, 0, 0)",
        "Reflected point (matrix): (6, -5, 0)",
        "Reflected point (formula): (6, -5, 0)",
        "Reflected point (projection): (6, -5, 0)",
    ] {
        assert!(lines.contains(&expected), "Missing line {expected:?}!");
    }
}

proptest! {
    #[test]
    fn test_reflection_is_an_involution(
        x in -10.0_f32..10.0,
        y in -10.0_f32..10.0,
        z in -10.0_f32..10.0,
        d in -5.0_f32..5.0,
    ) {
        let mirror = Plane::new(1.0, 2.0, 2.0, d).normalize();
        let point = Vec3::new(x, y, z);
        let back = mirror.reflect_point(mirror.reflect_point(point));
        prop_assert!(back.abs_diff_eq(point, 1e-3));
        prop_assert!(mirror.reflect_by_matrix(point).abs_diff_eq(mirror.reflect_by_projection(point), 1e-3));
    }
}
