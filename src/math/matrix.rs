use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{Float, Num};

use crate::error::{MatrixError, Result, Shape};
use crate::math::fill::{Diagonal, FillPolicy};
use crate::math::ops::{elementwise_kernel, mul_kernel};
use crate::math::vector::Vector;
use crate::math::view::{MatrixView, MatrixViewMut};

/// A row-major `R x C` matrix stored inline.
///
/// The element array is part of the value, so a `Matrix` lives wherever it is
/// declared (usually the stack) and never allocates. Both dimensions must be
/// positive; `Matrix<T, 0, C>` fails to compile as soon as it is constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be positive");

    pub const NUM_ELEMENTS: usize = R * C;

    /// Wrap a nested row array.
    pub const fn from_array(data: [[T; C]; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Build a matrix by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::from_array(std::array::from_fn(|row| {
            std::array::from_fn(|col| f(row, col))
        }))
    }

    pub const fn nrows(&self) -> usize {
        R
    }

    pub const fn ncols(&self) -> usize {
        C
    }

    pub const fn shape(&self) -> Shape {
        (R, C)
    }

    pub const fn as_array(&self) -> &[[T; C]; R] {
        &self.data
    }

    pub fn into_array(self) -> [[T; C]; R] {
        self.data
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(self.data.as_flattened(), R, C)
    }

    pub fn as_view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::from_parts(self.data.as_flattened_mut(), R, C)
    }

    /// Row `row` as a slice. Panics when `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[T] {
        &self.data[row]
    }

    /// Overwrite the element at `(row, col)`. Nothing is written on error.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.as_view_mut().set(row, col, value)
    }

    /// Populate every cell from `policy`, visiting cells in row-major order.
    pub fn init<P>(&mut self, policy: P)
    where
        P: FillPolicy<T>,
    {
        self.as_view_mut().init(policy)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_fn(|row, col| f(&self.data[row][col]))
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Build a matrix from a row-major flat source of exactly `R * C` elements.
    pub fn from_flat(source: &[T]) -> Result<Self> {
        if source.len() != Self::NUM_ELEMENTS {
            return Err(MatrixError::length_mismatch(
                Self::NUM_ELEMENTS,
                source.len(),
            ));
        }
        Ok(Self::from_fn(|row, col| source[row * C + col]))
    }

    /// Overwrite every cell from a row-major flat source.
    pub fn copy_from_flat(&mut self, source: &[T]) -> Result<()> {
        self.as_view_mut().copy_from_flat(source)
    }

    /// Read the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.as_view().get(row, col)
    }

    pub fn row(&self, row: usize) -> Result<Vector<T, C>> {
        if row >= R {
            return Err(MatrixError::out_of_bounds(row, 0, R, C));
        }
        Ok(Vector::from_array(self.data[row]))
    }

    pub fn column(&self, col: usize) -> Result<Vector<T, R>> {
        if col >= C {
            return Err(MatrixError::out_of_bounds(0, col, R, C));
        }
        Ok(Vector::from_array(std::array::from_fn(|row| {
            self.data[row][col]
        })))
    }

    pub fn set_row(&mut self, row: usize, values: &Vector<T, C>) -> Result<()> {
        if row >= R {
            return Err(MatrixError::out_of_bounds(row, 0, R, C));
        }
        self.data[row] = values.to_array();
        Ok(())
    }

    pub fn set_column(&mut self, col: usize, values: &Vector<T, R>) -> Result<()> {
        if col >= C {
            return Err(MatrixError::out_of_bounds(0, col, R, C));
        }
        for (row, value) in values.iter().enumerate() {
            self.data[row][col] = *value;
        }
        Ok(())
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix filled with the additive identity.
    pub fn zeros() -> Self {
        Self::from_array([[T::zero(); C]; R])
    }

    /// Multiply every element by `factor` in place.
    pub fn scale(&mut self, factor: T) {
        self.as_view_mut().scale(factor)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Inner dimensions are enforced by the type system, so this cannot fail.
    pub fn multiply<const K: usize>(&self, rhs: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut out = Matrix::zeros();
        self.multiply_into(rhs, &mut out);
        out
    }

    /// Matrix product written into a caller-provided output.
    pub fn multiply_into<const K: usize>(
        &self,
        rhs: &Matrix<T, C, K>,
        out: &mut Matrix<T, R, K>,
    ) {
        mul_kernel(self.as_slice(), rhs.as_slice(), out.as_mut_slice(), R, C, K);
    }
}

impl<T: Num + Copy, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        m.init(Diagonal);
        m
    }
}

impl<T: Float, const R: usize, const C: usize> Matrix<T, R, C> {
    /// True when every pair of elements differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(value: [[T; C]; R]) -> Self {
        Matrix::from_array(value)
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0][index.1]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index.0][index.1]
    }
}

impl<T: Num + Copy, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, K, C>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Num + Copy, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        elementwise_kernel(rhs.as_slice(), self.as_mut_slice(), |a, b| a + b);
        self
    }
}

impl<T: Num + Copy, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        elementwise_kernel(rhs.as_slice(), self.as_mut_slice(), |a, b| a - b);
        self
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let m = Matrix::<usize, 2, 3>::from_fn(|row, col| row * 10 + col);
        assert_eq!(m.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_array(), &[[1, 4], [2, 5], [3, 6]]);
    }

    #[test]
    fn test_rows_and_columns() {
        let mut m = Matrix::from_array([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.row(1).unwrap().to_array(), [3.0, 4.0]);
        assert_eq!(m.column(1).unwrap().to_array(), [2.0, 4.0, 6.0]);
        assert!(m.row(3).is_err());
        assert!(m.column(2).is_err());

        m.set_column(0, &Vector::from_array([0.0, 0.0, 0.0])).unwrap();
        m.set_row(2, &Vector::from_array([9.0, 9.0])).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 2.0, 0.0, 4.0, 9.0, 9.0]);
    }

    #[test]
    fn test_add_sub_scale() {
        let a = Matrix::from_array([[1, 2], [3, 4]]);
        let b = Matrix::from_array([[4, 3], [2, 1]]);
        assert_eq!((a + b).as_slice(), &[5, 5, 5, 5]);
        assert_eq!((a - b).as_slice(), &[-3, -1, 1, 3]);

        let mut c = a;
        c.scale(3);
        assert_eq!(c.as_slice(), &[3, 6, 9, 12]);
    }

    #[test]
    fn test_rectangular_product() {
        let a = Matrix::from_array([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from_array([[7, 8], [9, 10], [11, 12]]);
        let c = &a * &b;
        assert_eq!(c.as_array(), &[[58, 64], [139, 154]]);
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::from_array([[0.1f64 + 0.2, 1.0]]);
        let b = Matrix::from_array([[0.3f64, 1.0]]);
        assert!(a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&Matrix::from_array([[0.3, 1.1]]), 1e-12));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_array([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
    }
}
