// src/named.rs
//! Named component access for 2-, 3- and 4-dimensional vectors.
//!
//! Each dimension exposes three alias families over the same storage slots:
//! position (`x y z w`), color (`a b` / `r g b` / `r g b a`) and texture
//! (`s t` / `s t p` / `s t p q`). `x()`, `r()` and `s()` all read slot 0, so
//! a write through `x_mut()` is visible through every other name and through
//! positional indexing.

use crate::scalar::Scalar;
use crate::vector::Vector;

macro_rules! named_slots {
    ($dim:literal => $($name:ident / $name_mut:ident -> $idx:literal),+ $(,)?) => {
        impl<T: Scalar> Vector<T, $dim> {
            $(
                #[inline(always)]
                pub fn $name(&self) -> T {
                    self.data[$idx]
                }
                #[inline(always)]
                pub fn $name_mut(&mut self) -> &mut T {
                    &mut self.data[$idx]
                }
            )+
        }
    };
}

named_slots!(2 =>
    x / x_mut -> 0, y / y_mut -> 1,
    a / a_mut -> 0, b / b_mut -> 1,
    s / s_mut -> 0, t / t_mut -> 1,
);

named_slots!(3 =>
    x / x_mut -> 0, y / y_mut -> 1, z / z_mut -> 2,
    r / r_mut -> 0, g / g_mut -> 1, b / b_mut -> 2,
    s / s_mut -> 0, t / t_mut -> 1, p / p_mut -> 2,
);

named_slots!(4 =>
    x / x_mut -> 0, y / y_mut -> 1, z / z_mut -> 2, w / w_mut -> 3,
    r / r_mut -> 0, g / g_mut -> 1, b / b_mut -> 2, a / a_mut -> 3,
    s / s_mut -> 0, t / t_mut -> 1, p / p_mut -> 2, q / q_mut -> 3,
);

/// Construct a 2-D vector from components.
#[inline(always)]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vector<T, 2> {
    Vector::new([x, y])
}

/// Construct a 3-D vector from components.
#[inline(always)]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::new([x, y, z])
}

/// Construct a 4-D vector from components.
#[inline(always)]
pub fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::new([x, y, z, w])
}
