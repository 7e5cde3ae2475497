//! Fixed-size linear algebra types.
//!
//! `Matrix` (2D) and `Vector` (1D) own their elements inline, so creating one
//! never allocates. `MatrixView`/`MatrixViewMut` lend a runtime shape to an
//! existing slice; the checked operations in `ops` work on views.
pub mod fill;
mod macros;
pub mod matrix;
pub mod ops;
pub mod vector;
pub mod view;

pub use fill::{Constant, Diagonal, FillPolicy, FromFn, Random, Zeros};
pub use matrix::Matrix;
pub use vector::Vector;
pub use view::{MatrixView, MatrixViewMut};
