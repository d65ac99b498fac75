// src/vector.rs
//! Generic fixed-dimension vector type and its operator algebra.

use crate::scalar::Scalar;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A fixed-dimension vector of `N` components of scalar type `T`.
///
/// A plain value type over a `[T; N]` array: `Copy`, no heap, no drop side
/// effects. Components are addressed by position via `Index`/`IndexMut`, and
/// for N ∈ {2, 3, 4} additionally by the named accessors in [`crate::named`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    /// Underlying components array
    pub data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Construct from a full array of components.
    #[inline(always)]
    pub fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self { data: [T::zero(); N] }
    }

    /// Construct from up to `N` leading components; the remainder is zero.
    ///
    /// Panics if `values` holds more than `N` elements.
    pub fn from_partial(values: &[T]) -> Self {
        assert!(
            values.len() <= N,
            "{} components exceed dimension {}",
            values.len(),
            N
        );
        let mut data = [T::zero(); N];
        data[..values.len()].copy_from_slice(values);
        Self { data }
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// Positional access; out-of-range indices hit the array's bounds check.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// Arithmetic operators
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.data;
        for i in 0..N {
            sum[i] = sum[i] + rhs.data[i];
        }
        Self { data: sum }
    }
}

impl<T: Scalar, const N: usize> Add<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        let mut sum = self.data;
        for v in &mut sum {
            *v = *v + rhs;
        }
        Self { data: sum }
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] + rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> AddAssign<T> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        for v in &mut self.data {
            *v = *v + rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut diff = self.data;
        for i in 0..N {
            diff[i] = diff[i] - rhs.data[i];
        }
        Self { data: diff }
    }
}

impl<T: Scalar, const N: usize> Sub<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        let mut diff = self.data;
        for v in &mut diff {
            *v = *v - rhs;
        }
        Self { data: diff }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] = self.data[i] - rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign<T> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        for v in &mut self.data {
            *v = *v - rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        let mut scaled = self.data;
        for v in &mut scaled {
            *v = *v * rhs;
        }
        Self { data: scaled }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for v in &mut self.data {
            *v = *v * rhs;
        }
    }
}

// No zero guard: division follows T's native semantics (IEEE Inf/NaN for
// floats, panic for integers).
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        let mut quot = self.data;
        for v in &mut quot {
            *v = *v / rhs;
        }
        Self { data: quot }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for v in &mut self.data {
            *v = *v / rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        let mut negated = self.data;
        for v in &mut negated {
            *v = -*v;
        }
        Self { data: negated }
    }
}

// Scalar-on-the-left multiplication for the alias scalar types.
macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )+};
}
scalar_lhs_mul!(i32, f32, f64);

// Conversions
impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline(always)]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.data
    }
}

// Diagnostic display: components space-separated in index order.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// Common instantiations
pub type Vec2i = Vector<i32, 2>;
pub type Vec2f = Vector<f32, 2>;
pub type Vec2d = Vector<f64, 2>;
pub type Vec3i = Vector<i32, 3>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec3d = Vector<f64, 3>;
pub type Vec4i = Vector<i32, 4>;
pub type Vec4f = Vector<f32, 4>;
pub type Vec4d = Vector<f64, 4>;
