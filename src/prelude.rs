// src/prelude.rs
//! The “everything” import for veclite.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use veclite::prelude::*;
//! ```

// core data types
pub use crate::scalar::Scalar;
pub use crate::vector::{Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i, Vec4d, Vec4f, Vec4i, Vector};

// constructors
pub use crate::named::{vec2, vec3, vec4};

// geometric operations
pub use crate::geometry::{
    cross, determinant, distance, dot, norm, normalize, squared_distance, squared_norm,
};
