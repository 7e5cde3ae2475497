//! Shape-checked arithmetic over matrix views.
//!
//! Every function validates all shapes before writing anything, so a failed
//! call leaves `out` exactly as it was. `out` is borrowed mutably while the
//! operands are borrowed shared, which rules out aliasing at compile time.
use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::math::view::{MatrixView, MatrixViewMut};

/// Compute `out = a * b`.
///
/// Requires `a.ncols() == b.nrows()` and `out.shape() == (a.nrows(), b.ncols())`.
/// Each output cell is accumulated in `T` with `k` ascending.
pub fn multiply<T>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
) -> Result<()>
where
    T: Num + Copy,
{
    if a.ncols() != b.nrows() {
        return Err(MatrixError::shape_mismatch(
            "multiply",
            (a.ncols(), b.ncols()),
            b.shape(),
        ));
    }
    let expected = (a.nrows(), b.ncols());
    if out.shape() != expected {
        return Err(MatrixError::shape_mismatch("multiply", expected, out.shape()));
    }

    log::trace!(
        "multiply {}x{} by {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols()
    );
    mul_kernel(
        a.as_slice(),
        b.as_slice(),
        out.as_mut_slice(),
        a.nrows(),
        a.ncols(),
        b.ncols(),
    );
    Ok(())
}

/// Compute `out = a + b` elementwise. All three shapes must match.
pub fn add<T>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
) -> Result<()>
where
    T: Num + Copy,
{
    zip_into("add", a, b, out, |x, y| x + y)
}

/// Compute `out = a - b` elementwise. All three shapes must match.
pub fn sub<T>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
) -> Result<()>
where
    T: Num + Copy,
{
    zip_into("sub", a, b, out, |x, y| x - y)
}

fn zip_into<T, F>(
    op: &'static str,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    out: &mut MatrixViewMut<'_, T>,
    f: F,
) -> Result<()>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    if b.shape() != a.shape() {
        return Err(MatrixError::shape_mismatch(op, a.shape(), b.shape()));
    }
    if out.shape() != a.shape() {
        return Err(MatrixError::shape_mismatch(op, a.shape(), out.shape()));
    }

    let out = out.as_mut_slice();
    out.copy_from_slice(a.as_slice());
    elementwise_kernel(b.as_slice(), out, f);
    Ok(())
}

/// Row-major triple loop: `out[i][j] = sum_k a[i][k] * b[k][j]`.
///
/// `a` is `m x k`, `b` is `k x n`, `out` is `m x n`; callers have already
/// validated the lengths.
pub(crate) fn mul_kernel<T>(
    a: &[T],
    b: &[T],
    out: &mut [T],
    m: usize,
    k: usize,
    n: usize,
)
where
    T: Num + Copy,
{
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    for i in 0..m {
        let lhs = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut acc = T::zero();
            for (p, &x) in lhs.iter().enumerate() {
                acc = acc + x * b[p * n + j];
            }
            out[i * n + j] = acc;
        }
    }
}

/// `acc[i] = f(acc[i], rhs[i])` for equally sized slices.
pub(crate) fn elementwise_kernel<T, F>(rhs: &[T], acc: &mut [T], f: F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    debug_assert_eq!(rhs.len(), acc.len());
    for (slot, &value) in acc.iter_mut().zip(rhs) {
        *slot = f(*slot, value);
    }
}
