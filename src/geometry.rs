// src/geometry.rs
//! Geometric free functions over [`Vector`].
//!
//! Norms and distances accumulate in `f64` regardless of the component type,
//! so integer vectors whose squared components overflow `T` still measure
//! correctly.

use crate::scalar::Scalar;
use crate::vector::Vector;
use num_traits::Float;

/// Dot product: Σ v\[i\]·w\[i\], accumulated in `T`.
#[inline]
pub fn dot<T: Scalar, const N: usize>(v: &Vector<T, N>, w: &Vector<T, N>) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + v.data[i] * w.data[i];
    }
    sum
}

/// Cross product of two 3-D vectors.
#[inline(always)]
pub fn cross<T: Scalar>(v: &Vector<T, 3>, w: &Vector<T, 3>) -> Vector<T, 3> {
    Vector::new([
        v.y() * w.z() - v.z() * w.y(),
        v.z() * w.x() - v.x() * w.z(),
        v.x() * w.y() - v.y() * w.x(),
    ])
}

/// Squared Euclidean norm, in `f64`.
#[inline]
pub fn squared_norm<T: Scalar, const N: usize>(v: &Vector<T, N>) -> f64 {
    let mut sum = 0.0;
    for i in 0..N {
        let c = v.data[i].widen();
        sum += c * c;
    }
    sum
}

/// Euclidean norm (length), in `f64`.
#[inline]
pub fn norm<T: Scalar, const N: usize>(v: &Vector<T, N>) -> f64 {
    squared_norm(v).sqrt()
}

/// Scale `v` to unit length in place: `v := v · (1/norm(v))`.
///
/// The reciprocal norm is formed without a zero guard: a zero vector yields
/// NaN components, per IEEE 754.
#[inline]
pub fn normalize<T: Scalar + Float, const N: usize>(v: &mut Vector<T, N>) {
    let inv = T::one() / T::from(norm(v)).unwrap_or_else(T::nan);
    *v *= inv;
}

/// Squared distance between `v` and `w`, with each component difference
/// widened to `f64` before squaring.
#[inline]
pub fn squared_distance<T: Scalar, const N: usize>(v: &Vector<T, N>, w: &Vector<T, N>) -> f64 {
    let mut sum = 0.0;
    for i in 0..N {
        let d = v.data[i].widen() - w.data[i].widen();
        sum += d * d;
    }
    sum
}

/// Distance between `v` and `w`, in `f64`.
#[inline]
pub fn distance<T: Scalar, const N: usize>(v: &Vector<T, N>, w: &Vector<T, N>) -> f64 {
    squared_distance(v, w).sqrt()
}

/// Scalar triple product of three 3-D vectors: the determinant of the 3×3
/// matrix with `v1`, `v2`, `v3` as rows, in `f64`.
pub fn determinant<T: Scalar>(v1: &Vector<T, 3>, v2: &Vector<T, 3>, v3: &Vector<T, 3>) -> f64 {
    let (x1, y1, z1) = (v1.x().widen(), v1.y().widen(), v1.z().widen());
    let (x2, y2, z2) = (v2.x().widen(), v2.y().widen(), v2.z().widen());
    let (x3, y3, z3) = (v3.x().widen(), v3.y().widen(), v3.z().widen());
    x1 * (y2 * z3 - z2 * y3) - x2 * (y1 * z3 - z1 * y3) + x3 * (y1 * z2 - z1 * y2)
}
