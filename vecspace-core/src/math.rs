/// Vector and matrix primitives used by the projection pipeline
///
/// Matrices are written in mathematical row/column order: `m[(row, col)]`,
/// with translation stored in column 3. Points are column vectors multiplied
/// on the right (`m * p`).
use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;
pub type Mat4 = Matrix4<f32>;

/// Component-wise `a - b`
pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// Euclidean length of `v`
pub fn length(v: &Vec3) -> f32 {
    v.norm()
}

/// Scale `v` to unit length.
///
/// Returns `None` for vectors too short to carry a direction.
pub fn normalize(v: &Vec3) -> Option<Vec3> {
    v.try_normalize(f32::EPSILON)
}

/// Right-handed cross product
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a.dot(b)
}

/// Matrix product `a * b`
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    a * b
}

/// Multiply `v` as a homogeneous point (w = 1) and keep all four components
pub fn apply_to_point4(m: &Mat4, v: &Vec3) -> Vec4 {
    m * v.push(1.0)
}

/// Multiply `v` as a homogeneous point (w = 1) and drop the resulting w.
///
/// No perspective divide happens here.
pub fn apply_to_point3(m: &Mat4, v: &Vec3) -> Vec3 {
    apply_to_point4(m, v).xyz()
}
