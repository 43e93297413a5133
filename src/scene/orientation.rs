use crate::error::GeometryError;
use glam::f64::DMat3;
use glam::i32::IVec3;

/// Squared length below which the orthogonalized second direction is
/// considered parallel to the first.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Turns three integer direction triples into an orthonormal rotation basis.
///
/// Gram-Schmidt: the first column is the normalized `a_dir`; the second is
/// `b_dir` orthogonalized against it and normalized; the third is always
/// `a × b`, so the resolved frame is right-handed regardless of the supplied
/// `c_dir` (a `c_dir` that disagrees in sign with the cross product is
/// replaced rather than honored, deterministically).
///
/// Fails with `DegenerateOrientation` when `a_dir` or `b_dir` is zero or the
/// two are parallel.
pub fn resolve_orientation(
    a_dir: IVec3,
    b_dir: IVec3,
    _c_dir: IVec3,
) -> Result<DMat3, GeometryError> {
    let a = a_dir.as_dvec3();
    let b = b_dir.as_dvec3();
    if a == glam::f64::DVec3::ZERO || b == glam::f64::DVec3::ZERO {
        return Err(GeometryError::DegenerateOrientation { a_dir, b_dir });
    }

    let u = a.normalize();
    let b_perp = b - u * b.dot(u);
    if b_perp.length_squared() < PARALLEL_EPSILON {
        return Err(GeometryError::DegenerateOrientation { a_dir, b_dir });
    }
    let v = b_perp.normalize();

    // u and v are orthonormal, so the cross product is already unit length.
    let w = u.cross(v);

    Ok(DMat3::from_cols(u, v, w))
}
