use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::math::fill::{Constant, Diagonal, Random, Zeros};
use crate::math::{Matrix, MatrixViewMut};

/// Element type used when the caller does not pick one.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Element type used when the caller does not pick one.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Seed used by `"random"` when none is configured.
pub const DEFAULT_SEED: u64 = 0;

/// Selectable initialization policy, e.g. from an application config file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Zero,
    Diagonal,
    Constant { value: Real },
    Random { seed: u64 },
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Zero
    }
}

impl Fill {
    /// Populate `view` with this policy.
    pub fn apply(&self, view: &mut MatrixViewMut<'_, Real>) {
        log::trace!("applying {:?} fill to {}x{} matrix", self, view.nrows(), view.ncols());
        match *self {
            Fill::Zero => view.init(Zeros),
            Fill::Diagonal => view.init(Diagonal),
            Fill::Constant { value } => view.init(Constant(value)),
            Fill::Random { seed } => view.init(Random::seeded(seed)),
        }
    }

    /// Build a new matrix populated with this policy.
    pub fn build<const R: usize, const C: usize>(&self) -> Matrix<Real, R, C> {
        let mut m = Matrix::zeros();
        self.apply(&mut m.as_view_mut());
        m
    }
}

impl FromStr for Fill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "zeros" | "empty" => Ok(Fill::Zero),
            "diagonal" | "identity" => Ok(Fill::Diagonal),
            "random" => Ok(Fill::Random { seed: DEFAULT_SEED }),
            _ => Err(format!(
                "Unknown fill policy: {}. Expected one of: zero, diagonal, random",
                s
            )),
        }
    }
}
