use derive_more::IsVariant;
use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

use super::components_from_normal;

/// Which half-space of a plane a point lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Side {
    Positive,
    Negative,
    Coplanar,
}

/// A plane stored as the coefficients `(a, b, c, d)` of `ax + by + cz + d = 0`.
///
/// `(a, b, c)` is the plane's normal. Most operations expect it to have unit length, which
/// [`Plane::normalize`] ensures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane(pub Vec4);

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Plane {
        Plane(Vec4::new(a, b, c, d))
    }

    /// The plane through `point` perpendicular to `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Plane {
        Plane(normal.extend(-normal.dot(point)))
    }

    /// The plane through three points, facing the side from which they appear
    /// counterclockwise.
    ///
    /// Returns `None` when the points are collinear.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Option<Plane> {
        let normal = (p1 - p0).cross(p2 - p0).try_normalize()?;
        Some(Plane::from_point_normal(p0, normal))
    }

    pub fn normal(&self) -> Vec3 {
        self.0.xyz()
    }

    pub fn d(&self) -> f32 {
        self.0.w
    }

    /// Scales all four coefficients so the normal has unit length.
    pub fn normalize(&self) -> Plane {
        let length = self.normal().length();
        if length == 0.0 {
            return *self;
        }
        Plane(self.0 / length)
    }

    /// The plane equation evaluated at a point, which is its signed distance for a normalized
    /// plane.
    pub fn dot_coord(&self, point: Vec3) -> f32 {
        self.0.dot(point.extend(1.0))
    }

    /// The dot product of the normal with a direction.
    pub fn dot_normal(&self, direction: Vec3) -> f32 {
        self.0.dot(direction.extend(0.0))
    }

    pub fn side_of(&self, point: Vec3) -> Side {
        let distance = self.dot_coord(point);
        if distance.abs() < f32::EPSILON {
            Side::Coplanar
        } else if distance > 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }

    /// Where the line through `p1` and `p2` crosses the plane, or `None` when they are parallel.
    pub fn intersect_line(&self, p1: Vec3, p2: Vec3) -> Option<Vec3> {
        let denominator = self.dot_normal(p1 - p2);
        if denominator.abs() < f32::EPSILON {
            return None;
        }
        let t = self.dot_coord(p1) / denominator;
        Some(p1 + (p2 - p1) * t)
    }

    /// The plane after every point of it went through `transform`.
    ///
    /// Planes transform by the inverse transpose of the point transform. Returns `None` for a
    /// transform that can't be inverted.
    pub fn transform(&self, transform: Mat4) -> Option<Plane> {
        if transform.determinant().abs() < f32::EPSILON {
            return None;
        }
        Some(Plane(transform.inverse().transpose() * self.0))
    }

    /// The matrix that mirrors points across this plane. The plane must be normalized.
    pub fn reflection_matrix(&self) -> Mat4 {
        let n = self.normal();
        let d = self.d();
        Mat4::from_cols(
            (Vec3::X - 2.0 * n.x * n).extend(0.0),
            (Vec3::Y - 2.0 * n.y * n).extend(0.0),
            (Vec3::Z - 2.0 * n.z * n).extend(0.0),
            (-2.0 * d * n).extend(1.0),
        )
    }

    /// Mirrors `point` by applying [`Plane::reflection_matrix`].
    pub fn reflect_by_matrix(&self, point: Vec3) -> Vec3 {
        self.reflection_matrix().transform_point3(point)
    }

    /// Mirrors `point` with `p - 2(n·p + d)n`.
    pub fn reflect_by_formula(&self, point: Vec3) -> Vec3 {
        point - 2.0 * self.dot_coord(point) * self.normal()
    }

    /// Mirrors `point` by removing twice its offset from the plane along the normal, measured from
    /// the point of the plane closest to the origin.
    pub fn reflect_by_projection(&self, point: Vec3) -> Vec3 {
        let n = self.normal();
        let origin = -self.d() * n;
        let (parallel, _) = components_from_normal(point - origin, n);
        point - 2.0 * parallel
    }

    pub fn reflect_point(&self, point: Vec3) -> Vec3 {
        self.reflect_by_formula(point)
    }
}

impl From<Vec4> for Plane {
    fn from(value: Vec4) -> Self {
        Plane(value)
    }
}
