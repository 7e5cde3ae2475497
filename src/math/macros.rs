/// Declare a matrix inline.
///
/// `matrix![[1.0, 2.0], [3.0, 4.0]]` builds a `Matrix<_, 2, 2>` from rows.
/// `matrix![f64; 3, 3]` declares a zero-filled `Matrix<f64, 3, 3>`.
///
/// ```
/// use redeem_linalg::matrix;
///
/// let a = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(a.shape(), (2, 3));
///
/// let z = matrix![f32; 2, 4];
/// assert!(z.as_slice().iter().all(|&v| v == 0.0));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::math::Matrix::from_array([$([$($x),*]),+])
    };
    ($t:ty; $rows:expr, $cols:expr) => {
        $crate::math::Matrix::<$t, { $rows }, { $cols }>::zeros()
    };
}

/// Declare a vector inline: `vector![1.0, 2.0, 3.0]`.
#[macro_export]
macro_rules! vector {
    ($($x:expr),+ $(,)?) => {
        $crate::math::Vector::from_array([$($x),+])
    };
}
