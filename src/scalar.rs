// src/scalar.rs
//! Numeric bound for vector components.

use num_traits::{Num, NumCast};
use std::ops::Neg;

/// Bound for types usable as vector components: the four arithmetic operations,
/// a zero, negation, and a (possibly lossy) widening cast to `f64`.
///
/// Blanket-implemented for every signed primitive scalar (`i32`, `f32`, `f64`, …).
pub trait Scalar: Num + NumCast + Neg<Output = Self> + Copy {
    /// Widen to `f64` for norm/distance accumulation.
    #[inline(always)]
    fn widen(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where T: Num + NumCast + Neg<Output = T> + Copy {}
