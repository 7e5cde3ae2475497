//! Initialization policies.
//!
//! A policy maps a cell coordinate to the value stored there. `init` calls it
//! exactly once per cell, in row-major order, and hands it a read-only view of
//! the matrix so shape-dependent policies can inspect `nrows`/`ncols`.
use num_traits::{One, Zero};
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::math::view::MatrixView;

/// Produces the value of a single matrix cell during initialization.
pub trait FillPolicy<T> {
    fn entry(&mut self, matrix: MatrixView<'_, T>, row: usize, col: usize) -> T;
}

impl<T, P> FillPolicy<T> for &mut P
where
    P: FillPolicy<T> + ?Sized,
{
    fn entry(&mut self, matrix: MatrixView<'_, T>, row: usize, col: usize) -> T {
        (**self).entry(matrix, row, col)
    }
}

/// Every cell becomes the additive identity. This is the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zeros;

impl<T: Zero> FillPolicy<T> for Zeros {
    fn entry(&mut self, _matrix: MatrixView<'_, T>, _row: usize, _col: usize) -> T {
        T::zero()
    }
}

/// One on the main diagonal, zero elsewhere. Non-square matrices get ones at
/// every `(i, i)` that exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagonal;

impl<T: Zero + One> FillPolicy<T> for Diagonal {
    fn entry(&mut self, _matrix: MatrixView<'_, T>, row: usize, col: usize) -> T {
        if row == col {
            T::one()
        } else {
            T::zero()
        }
    }
}

/// Every cell becomes the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T>(pub T);

impl<T: Copy> FillPolicy<T> for Constant<T> {
    fn entry(&mut self, _matrix: MatrixView<'_, T>, _row: usize, _col: usize) -> T {
        self.0
    }
}

/// Pseudo-random values drawn from a seeded generator.
///
/// For floating point elements values are uniform in `[0, 1)`. The same seed
/// always produces the same matrix.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<T> FillPolicy<T> for Random
where
    Standard: Distribution<T>,
{
    fn entry(&mut self, _matrix: MatrixView<'_, T>, _row: usize, _col: usize) -> T {
        self.rng.gen()
    }
}

/// A policy backed by a closure. Build it with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap a closure `(matrix, row, col) -> value` as a fill policy.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(MatrixView<'_, T>, usize, usize) -> T,
{
    FromFn(f)
}

impl<T, F> FillPolicy<T> for FromFn<F>
where
    F: FnMut(MatrixView<'_, T>, usize, usize) -> T,
{
    fn entry(&mut self, matrix: MatrixView<'_, T>, row: usize, col: usize) -> T {
        (self.0)(matrix, row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix;

    #[test]
    fn test_diagonal_on_wide_matrix() {
        let mut m = Matrix::<i32, 2, 4>::zeros();
        m.init(Diagonal);
        assert_eq!(m.as_slice(), &[1, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_diagonal_on_tall_matrix() {
        let mut m = Matrix::<i32, 4, 2>::from_array([[5; 2]; 4]);
        m.init(Diagonal);
        assert_eq!(m.as_slice(), &[1, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut a = Matrix::<f64, 3, 3>::zeros();
        let mut b = Matrix::<f64, 3, 3>::zeros();
        a.init(Random::seeded(42));
        b.init(Random::seeded(42));
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_stateful_policy_by_reference() {
        let mut random = Random::seeded(7);
        let mut first = Matrix::<f32, 2, 2>::zeros();
        let mut second = Matrix::<f32, 2, 2>::zeros();

        first.init(&mut random);
        second.init(&mut random);
        // The generator advanced, so the second draw differs.
        assert_ne!(first, second);
    }

    #[test]
    fn test_from_fn_sees_shape_and_prior_cells() {
        let mut m = Matrix::<u32, 2, 3>::zeros();
        m.init(from_fn(|view: MatrixView<'_, u32>, row, col| {
            if col == 0 {
                (row * view.ncols()) as u32
            } else {
                view[(row, col - 1)] + 1
            }
        }));
        assert_eq!(m.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }
}
