//! redeem-linalg: fixed-size matrices and vectors without heap allocation.
//!
//! The crate provides a const-generic `Matrix<T, R, C>` whose elements live
//! inline in a row-major array, runtime-shaped `MatrixView`/`MatrixViewMut`
//! types over caller-owned buffers, pluggable fill policies, bounds-checked
//! element access and shape-checked multiplication.
//!
//! Owned matrices have their shapes checked by the type system. Views carry
//! their shape at runtime and report violations as `MatrixError`, so callers
//! that receive flat buffers from elsewhere can still validate them.
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

pub use error::{MatrixError, Result};
