use glam::{Vec3, Vec4};

/// Splits `v` into the part parallel to the unit vector `normal` and the part perpendicular to it.
pub fn components_from_normal(v: Vec3, normal: Vec3) -> (Vec3, Vec3) {
    let parallel = normal * v.dot(normal);
    (parallel, v - parallel)
}

/// Whether the first three components of `a` and `b` are within `epsilon` of each other.
pub fn near_equal3(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    (a - b).abs().cmple(Vec3::splat(epsilon)).all()
}

/// Clamps every component into `[0, 1]`.
pub fn saturate(v: Vec4) -> Vec4 {
    v.clamp(Vec4::ZERO, Vec4::ONE)
}

/// Applies `f` to every component.
pub fn map4<F: Fn(f32) -> f32>(v: Vec4, f: F) -> Vec4 {
    Vec4::from_array(v.to_array().map(f))
}

/// Raises every component of `base` to the matching component of `exp`.
pub fn pow4(base: Vec4, exp: Vec4) -> Vec4 {
    Vec4::new(
        base.x.powf(exp.x),
        base.y.powf(exp.y),
        base.z.powf(exp.z),
        base.w.powf(exp.w),
    )
}

/// A copy of `v` with a single lane replaced.
pub fn with_lane(mut v: Vec4, lane: usize, value: f32) -> Vec4 {
    if let Some(slot) = v.as_mut().get_mut(lane) {
        *slot = value;
    }
    v
}
