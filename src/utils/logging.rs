use std::fmt;

use log::LevelFilter;

use crate::math::MatrixView;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "REDEEM_LINALG_LOG";

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::default();
    builder
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, "error,redeem_linalg=info"));
    builder
}

/// Install an `env_logger` driven by `REDEEM_LINALG_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = builder().try_init();
}

/// Like [`init_logging`], but routes output through the test harness.
pub fn init_test_logging() {
    let _ = builder().is_test(true).try_init();
}

/// Truncated, scientific-notation rendering of a matrix for log lines.
///
/// Wide rows show the first and last `max_cols` entries separated by `...`;
/// rows beyond `max_rows` are elided.
pub struct MatrixSummary<'a, T> {
    view: MatrixView<'a, T>,
    decimal_places: usize,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
}

pub fn summarize<T>(
    view: MatrixView<'_, T>,
    decimal_places: usize,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) -> MatrixSummary<'_, T> {
    MatrixSummary {
        view,
        decimal_places,
        max_rows,
        max_cols,
    }
}

impl<T: fmt::LowerExp> fmt::Display for MatrixSummary<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.view.shape();
        let rows_to_print = self.max_rows.unwrap_or(rows).min(rows);
        let cols_to_print = self.max_cols.unwrap_or(cols).min(cols);

        writeln!(f, "matrix({}x{}, [", rows, cols)?;
        for r in 0..rows_to_print {
            let row = self.view.row_slice(r);
            write!(f, "  [")?;
            if cols_to_print * 2 < cols {
                for value in &row[..cols_to_print] {
                    write!(f, "{:.*e}, ", self.decimal_places, value)?;
                }
                write!(f, "...")?;
                for value in &row[cols - cols_to_print..] {
                    write!(f, ", {:.*e}", self.decimal_places, value)?;
                }
            } else {
                for (c, value) in row.iter().enumerate() {
                    if c != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.*e}", self.decimal_places, value)?;
                }
            }
            writeln!(f, "],")?;
        }
        if rows_to_print < rows {
            writeln!(f, "  ...")?;
        }
        write!(f, "])")
    }
}
