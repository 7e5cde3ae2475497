use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Num;

use crate::error::{MatrixError, Result, Shape};
use crate::math::fill::FillPolicy;

/// Validate that a buffer of `len` elements can back a `rows x cols` matrix.
fn check_buffer(len: usize, rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid_shape(rows, cols));
    }
    match rows.checked_mul(cols) {
        Some(expected) if expected == len => Ok(()),
        Some(expected) => Err(MatrixError::length_mismatch(expected, len)),
        None => Err(MatrixError::invalid_shape(rows, cols)),
    }
}

fn checked_offset(row: usize, col: usize, rows: usize, cols: usize) -> Result<usize> {
    if row >= rows || col >= cols {
        return Err(MatrixError::out_of_bounds(row, col, rows, cols));
    }
    Ok(row * cols + col)
}

/// A read-only, row-major matrix over a borrowed slice.
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

// Manual impls so views stay `Copy` regardless of `T`.
impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    /// Interpret `data` as a `rows x cols` matrix.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        check_buffer(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Caller guarantees `data.len() == rows * cols` with both dimensions positive.
    pub(crate) fn from_parts(data: &'a [T], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Row `row` as a slice. Panics when `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &'a [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Read the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T>
    where
        T: Copy,
    {
        let offset = checked_offset(row, col, self.rows, self.cols)?;
        Ok(self.data[offset])
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[index.0 * self.cols + index.1]
    }
}

impl<T: PartialEq> PartialEq for MatrixView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixView")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row != 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// A mutable, row-major matrix over a borrowed slice.
///
/// The shape is fixed when the view is created; no operation changes it or
/// reallocates the underlying buffer.
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Interpret `data` as a `rows x cols` matrix.
    pub fn new(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        check_buffer(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    pub(crate) fn from_parts(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(&*self.data, self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T>
    where
        T: Copy,
    {
        self.as_view().get(row, col)
    }

    /// Overwrite the element at `(row, col)`. Nothing is written on error.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = checked_offset(row, col, self.rows, self.cols)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Populate every cell from `policy`.
    ///
    /// Cells are visited in row-major order and the policy is called exactly
    /// once per cell. The policy sees the matrix as it stands at that point,
    /// i.e. cells before `(row, col)` already hold their new values.
    pub fn init<P>(&mut self, mut policy: P)
    where
        P: FillPolicy<T>,
    {
        log::trace!("initialising {}x{} matrix", self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = policy.entry(self.as_view(), row, col);
                self.data[row * self.cols + col] = value;
            }
        }
    }

    /// Overwrite every cell from a row-major flat source.
    ///
    /// `source` must hold exactly `rows * cols` elements; otherwise the view is
    /// left untouched and `LengthMismatch` is returned.
    pub fn copy_from_flat(&mut self, source: &[T]) -> Result<()>
    where
        T: Copy,
    {
        if source.len() != self.data.len() {
            return Err(MatrixError::length_mismatch(self.data.len(), source.len()));
        }
        self.data.copy_from_slice(source);
        Ok(())
    }

    /// Multiply every element by `factor` in place.
    pub fn scale(&mut self, factor: T)
    where
        T: Num + Copy,
    {
        for value in self.data.iter_mut() {
            *value = *value * factor;
        }
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[index.0 * self.cols + index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &mut self.data[index.0 * self.cols + index.1]
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixViewMut")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for MatrixViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fill::{Diagonal, Zeros};

    #[test]
    fn test_view_rejects_wrong_length() {
        let data = [0.0f64; 8];
        let err = MatrixView::new(&data, 3, 3).unwrap_err();
        assert_eq!(
            err,
            MatrixError::LengthMismatch {
                expected: 9,
                found: 8
            }
        );
    }

    #[test]
    fn test_view_rejects_zero_dimension() {
        let data: [f64; 0] = [];
        assert_eq!(
            MatrixView::new(&data, 0, 3).unwrap_err(),
            MatrixError::InvalidShape { rows: 0, cols: 3 }
        );
    }

    #[test]
    fn test_view_rejects_overflowing_shape() {
        let data = [0u8; 4];
        assert!(matches!(
            MatrixView::new(&data, usize::MAX, 2),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_get_over_existing_buffer() {
        let data = [1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.1];
        let m = MatrixView::new(&data, 3, 3).unwrap();

        assert_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 0).unwrap(), 0.0);
        assert_eq!(m.get(2, 2).unwrap(), 0.1);
        assert!(matches!(
            m.get(3, 3),
            Err(MatrixError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_set_out_of_bounds_leaves_buffer_untouched() {
        let mut data = [7i32; 6];
        let mut m = MatrixViewMut::new(&mut data, 2, 3).unwrap();

        assert!(m.set(2, 0, 1).is_err());
        assert!(m.set(0, 3, 1).is_err());
        assert_eq!(data, [7; 6]);
    }

    #[test]
    fn test_init_zero_then_diagonal() {
        let mut data = [9.0f32; 6];
        let mut m = MatrixViewMut::new(&mut data, 2, 3).unwrap();

        m.init(Zeros);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));

        m.init(Diagonal);
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_copy_from_flat_checks_length() {
        let mut data = [0.0f64; 4];
        let mut m = MatrixViewMut::new(&mut data, 2, 2).unwrap();

        assert!(m.copy_from_flat(&[1.0, 2.0, 3.0]).is_err());
        assert_eq!(m.as_slice(), &[0.0; 4]);

        m.copy_from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn test_display() {
        let data = [1, 2, 3, 4];
        let m = MatrixView::new(&data, 2, 2).unwrap();
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 4]]");
    }
}
