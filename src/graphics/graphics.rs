use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};
use tracing::trace;

use super::{
    Plane, Shown, components_from_normal, map4, near_equal3, pow4, saturate, shown, with_lane,
};
use crate::tour::{TourError, Transcript};

fn line<T: std::fmt::Display>(out: &mut Transcript, label: &str, value: T) -> Result<(), TourError> {
    if label.is_empty() {
        out.raw(value)?;
    } else {
        out.raw(format_args!("{label}: {value}"))?;
    }
    out.newline()?;
    Ok(())
}

/// A matrix written row by row, the way it reads on paper.
fn matrix_from_rows(rows: [f32; 16]) -> Mat4 {
    Mat4::from_cols_array(&rows).transpose()
}

fn vectors(out: &mut Transcript) -> Result<(), TourError> {
    let v = Vec4::new(1.0, 2.0, 3.0, 0.0);
    line(out, "set", shown(Vec4::new(1.1, 2.2, 3.3, 4.4)))?;
    line(out, "zero", shown(Vec4::ZERO))?;
    line(out, "one", shown(Vec4::ONE))?;
    line(out, "replicate", shown(Vec4::splat(-1.0)))?;
    line(out, "splat z", shown(Vec4::splat(v.z)))?;
    line(out, "x", shown(v.x))?;
    line(out, "with w", shown(with_lane(v, 3, 44.0)))?;

    line(out, "load2", shown(Vec2::new(1.1, 2.8).extend(0.0).extend(0.0)))?;
    line(out, "load3", shown(Vec3::new(2.3, 3.4, 1.6).extend(0.0)))?;
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    line(out, "store2", shown(v.truncate().truncate()))?;
    line(out, "store3", shown(v.truncate()))?;

    let u = Vec4::new(2.0, 1.5, 3.2, 0.0);
    let v = Vec4::new(-1.0, 3.0, -2.0, 0.0);
    line(out, "-v", shown(-v))?;
    line(out, "u+v", shown(u + v))?;
    line(out, "u-v", shown(u - v))?;
    line(out, "8*u", shown(8.0 * u))?;

    let v = Vec3::new(3.4641, 3.0, 2.0);
    let u = Vec3::new(1.0, 2.0, 3.0);
    line(out, "|v|", shown(v.length()))?;
    line(out, "|v|^2", shown(v.length_squared()))?;
    line(out, "v/|v|", shown(v.normalize()))?;
    line(out, "v.u", shown(v.dot(u)))?;
    line(out, "v x u", shown(v.cross(u)))?;

    let n = Vec3::X;
    let w = Vec3::new(0.8, 0.7, 0.0);
    let (parallel, perpendicular) = components_from_normal(w, n);
    line(out, "projW", shown(parallel))?;
    line(out, "perpW", shown(perpendicular))?;
    line(out, "projW + perpW == w", near_equal3(parallel + perpendicular, w, f32::EPSILON))?;
    line(out, "angle [deg]", shown(parallel.angle_between(perpendicular).to_degrees()))?;

    let v = Vec3::new(8.0, 13.0, 2.67);
    let ov = v.any_orthogonal_vector();
    line(out, "ov.v", shown(ov.dot(v).abs()))?;

    line(out, "v1*v2", shown(Vec4::new(2.0, 3.0, 5.0, 8.0) * Vec4::new(4.0, 7.0, 5.0, 6.0)))?;
    line(out, "saturate", shown(saturate(Vec4::new(2.0, -0.5, 0.5, 0.1))))?;
    let (v1, v2) = (Vec4::new(2.0, 7.0, 5.0, 8.0), Vec4::new(4.0, 3.0, 9.0, 6.0));
    line(out, "min", shown(v1.min(v2)))?;
    line(out, "max", shown(v1.max(v2)))?;

    let len = Vec3::ONE.normalize().length();
    trace!(len, "normalized length");
    line(out, "|n| near 1", near_equal3(Vec3::splat(len), Vec3::ONE, f32::EPSILON))?;
    Ok(())
}

fn matrices(out: &mut Transcript) -> Result<(), TourError> {
    let a = matrix_from_rows([
        2.0, 0.0, 0.0, 2.0, //
        0.0, 1.0, 0.0, 4.0, //
        0.0, 0.0, 3.0, 3.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    let b = matrix_from_rows([
        2.0, 0.0, 1.0, 2.0, //
        5.0, 1.0, 2.0, 0.0, //
        3.0, 0.0, 3.0, 2.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    out.raw(format_args!("A\n{}", shown(a)))?;
    line(out, "A is identity", a == Mat4::IDENTITY)?;
    out.raw(format_args!("A * B\n{}", Shown::with_precision(a * b, 4)))?;
    out.raw(format_args!("transpose(A)\n{}", shown(a.transpose())))?;
    line(out, "det(A)", shown(a.determinant()))?;
    let inverse = a.inverse();
    out.raw(format_args!("inverse(A)\n{}", Shown::with_precision(inverse, 4)))?;
    line(out, "A * inverse(A) is identity", (a * inverse).abs_diff_eq(Mat4::IDENTITY, 1e-6))?;

    out.raw(format_args!("scaling\n{}", shown(Mat4::from_scale(Vec3::new(1.0, 1.0, 1.5)))))?;
    out.raw(format_args!(
        "rotation x\n{}",
        Shown::with_precision(Mat4::from_rotation_x(FRAC_PI_4), 4)
    ))?;
    let axis = Vec3::new(1.0, 2.0, 1.0).normalize();
    out.raw(format_args!(
        "rotation axis\n{}",
        Shown::with_precision(Mat4::from_axis_angle(axis, FRAC_PI_4), 4)
    ))?;
    out.raw(format_args!("translation\n{}", shown(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)))))?;

    let point = Vec3::new(1.0, 2.0, 3.0);
    line(out, "point", shown(a.transform_point3(point)))?;
    line(out, "vector", shown(a.transform_vector3(point)))?;
    line(out, "A + B", shown((a + b).row(0)))?;
    line(out, "A - B", shown((a - b).row(0)))?;
    line(out, "2 * A", shown((a * 2.0).row(0)))?;
    Ok(())
}

fn operations(out: &mut Transcript) -> Result<(), TourError> {
    line(out, "abs", shown(Vec4::new(-1.5, 2.8, -5.0, 3.0).abs()))?;
    line(out, "cos", Shown::with_precision(map4(Vec4::new(0.0, FRAC_PI_4, PI, TAU), f32::cos), 4))?;
    line(out, "log2", shown(map4(Vec4::new(1.0, 2.0, 4.0, 8.0), f32::log2)))?;
    line(out, "exp2", shown(map4(Vec4::new(2.0, 3.0, 4.0, 5.0), f32::exp2)))?;
    line(
        out,
        "pow",
        shown(pow4(Vec4::new(2.0, 3.0, 4.0, 5.0), Vec4::new(4.0, 3.0, 2.0, 1.0))),
    )?;
    line(out, "sqrt", Shown::with_precision(map4(Vec4::new(121.0, 256.0, 4.0, 27.0), f32::sqrt), 4))?;

    let v = Vec4::new(5.0, 8.0, 10.0, 20.0);
    line(out, "xxyy", shown(v.xxyy()))?;
    line(out, "wwxz", shown(v.wwxz()))?;
    line(out, "zyzw", shown(v.zyzw()))?;

    line(out, "radians(90)", Shown::with_precision(90.0_f32.to_radians(), 9))?;
    line(out, "degrees(pi/2)", shown(FRAC_PI_2.to_degrees()))?;
    Ok(())
}

fn planes(out: &mut Transcript) -> Result<(), TourError> {
    let p = Plane::new(0.0, 1.0, 0.0, 0.0);
    for (name, point) in [
        ("v1", Vec3::new(3.0, 5.0, 2.0)),
        ("v2", Vec3::new(3.0, -5.0, 2.0)),
        ("v3", Vec3::ZERO),
    ] {
        line(out, name, format_args!("{:?}", p.side_of(point)))?;
    }
    let direction = Vec3::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0);
    line(out, "Angle", shown(p.dot_normal(direction).acos().to_degrees()))?;

    let plane = Plane::new(0.5, 1.0, 0.5, 0.3);
    line(out, "Plane1", shown(plane.0))?;
    let plane2 = Plane::from_point_normal(Vec3::X, Vec3::Y);
    line(out, "Plane2", shown(plane2.0))?;
    let (p0, p1, p2) = (Vec3::new(0.0, 1.0, 0.0), Vec3::new(-1.0, 3.0, 6.0), Vec3::new(8.0, 5.0, 3.0));
    if let Some(plane3) = Plane::from_points(p0, p1, p2) {
        line(out, "Plane3", Shown::with_precision(plane3.0, 4))?;
    }

    let normalized = plane.normalize();
    line(out, "Normalized plane", shown(normalized.0))?;
    let t = matrix_from_rows([
        2.0, 0.0, 0.0, 2.0, //
        0.0, 1.0, 0.0, 4.0, //
        0.0, 0.0, 3.0, 3.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    if let Some(transformed) = normalized.transform(t) {
        line(out, "Transformed plane", Shown::with_precision(transformed.0, 4))?;
    }

    let third = 1.0 / 3.0_f32.sqrt();
    let plane = Plane::new(third, third, third, -5.0);
    if let Some(hit) = plane.intersect_line(Vec3::new(-1.0, 1.0, -1.0), Vec3::new(0.0, 1.0, -1.0)) {
        line(out, "Intersection", Shown::with_precision(hit, 4))?;
    }

    let half = 1.0 / 2.0_f32.sqrt();
    let mirror = Plane::new(-half, half, 0.0, 5.0 * half).normalize();
    let point = Vec3::new(0.0, 1.0, 0.0);
    line(out, "Reflected point (matrix)", Shown::with_precision(mirror.reflect_by_matrix(point), 4))?;
    line(out, "Reflected point (formula)", Shown::with_precision(mirror.reflect_by_formula(point), 4))?;
    line(
        out,
        "Reflected point (projection)",
        Shown::with_precision(mirror.reflect_by_projection(point), 4),
    )?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    vectors(out)?;
    matrices(out)?;
    operations(out)?;
    planes(out)?;
    Ok(())
}
