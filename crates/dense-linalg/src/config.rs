use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::math::{DenseMatrix, DenseVector, Orientation, DEFAULT_TOLERANCE};

/// Environment variable overriding [`LinalgConfig::tolerance`].
pub const TOLERANCE_ENV: &str = "DENSE_LINALG_TOLERANCE";
/// Environment variable overriding [`LinalgConfig::default_orientation`].
pub const ORIENTATION_ENV: &str = "DENSE_LINALG_ORIENTATION";

/// Crate-wide defaults for comparisons and matrix construction.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LinalgConfig {
    /// Absolute tolerance for approximate equality.
    pub tolerance: f64,
    /// Dominant space for matrices built through [`LinalgConfig::zeros`].
    pub default_orientation: Orientation,
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            default_orientation: Orientation::ColumnMajor,
        }
    }
}

impl LinalgConfig {
    pub fn new(tolerance: f64, default_orientation: Orientation) -> Self {
        Self {
            tolerance,
            default_orientation,
        }
    }

    /// Defaults overridden by whatever `lookup` returns for
    /// [`TOLERANCE_ENV`] and [`ORIENTATION_ENV`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TOLERANCE_ENV) {
            config.tolerance = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid {} value '{}'", TOLERANCE_ENV, raw))?;
        }
        if let Some(raw) = lookup(ORIENTATION_ENV) {
            config.default_orientation = raw
                .parse::<Orientation>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {} value", ORIENTATION_ENV))?;
        }

        config.validate()?;
        log::debug!("Loaded linear algebra config: {:?}", config);
        Ok(config)
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            bail!(
                "Tolerance must be a finite, non-negative number, got {}",
                self.tolerance
            );
        }
        Ok(())
    }

    pub fn zeros(&self, rows: usize, cols: usize) -> DenseMatrix {
        DenseMatrix::zeros_with_orientation(rows, cols, self.default_orientation)
    }

    pub fn vectors_equal(&self, a: &DenseVector, b: &DenseVector) -> bool {
        a.approx_eq(b, self.tolerance)
    }

    pub fn matrices_equal(&self, a: &DenseMatrix, b: &DenseMatrix) -> bool {
        a.approx_eq(b, self.tolerance)
    }
}
