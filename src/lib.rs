//! # veclite Quickstart
//!
//! ```rust
//! use veclite::prelude::*;
//!
//! let a: Vec3d = vec3(1.0, 0.0, 0.0);
//! let b: Vec3d = vec3(0.0, 1.0, 0.0);
//!
//! // e1 × e2 = e3
//! let c = cross(&a, &b);
//!
//! const EPS: f64 = 1e-12;
//! assert!((c.z() - 1.0).abs() < EPS);
//! assert!((norm(&(a + b)) - 2.0f64.sqrt()).abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod geometry;
pub mod named;
pub mod prelude;
pub mod scalar;
pub mod vector;

// --- Public API exports ---

pub use geometry::{
    cross, determinant, distance, dot, norm, normalize, squared_distance, squared_norm,
};
pub use named::{vec2, vec3, vec4};
pub use scalar::Scalar;
pub use vector::{Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i, Vec4d, Vec4f, Vec4i, Vector};
