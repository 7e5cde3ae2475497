use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{Num, One, Zero};

use crate::error::{MatrixError, Result};

/// A fixed-length vector stored inline.
///
/// Used for matrix rows and columns. Index errors report the vector as an
/// `N x 1` column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn mapv<U, F>(&self, f: F) -> Vector<U, N>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_array(self.data.each_ref().map(f))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| MatrixError::out_of_bounds(index, 0, N, 1))?;
        *slot = value;
        Ok(())
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let data: [T; N] = values
            .try_into()
            .map_err(|_| MatrixError::length_mismatch(N, values.len()))?;
        Ok(Self { data })
    }

    pub fn to_array(&self) -> [T; N] {
        self.data
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| MatrixError::out_of_bounds(index, 0, N, 1))
    }
}

impl<T: Copy + Zero, const N: usize> Vector<T, N> {
    pub fn zeros() -> Self {
        Self::from_array([T::zero(); N])
    }
}

impl<T: Copy + One, const N: usize> Vector<T, N> {
    pub fn ones() -> Self {
        Self::from_array([T::one(); N])
    }
}

impl<T: Num + Copy, const N: usize> Vector<T, N> {
    pub fn dot(&self, other: &Vector<T, N>) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Vector::from_array(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != N {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
