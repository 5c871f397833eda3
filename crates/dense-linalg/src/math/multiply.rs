use std::ops::Mul;

use crate::error::{LinalgError, Result};
use crate::math::iter;
use crate::math::matrix::DenseMatrix;

impl DenseMatrix {
    /// Matrix product over the effective extents of both operands.
    ///
    /// Each cell is the cursor dot product of a row of `self` with a column of
    /// `rhs`, so neither operand's storage orientation matters.
    pub fn try_mul(&self, rhs: &DenseMatrix) -> Result<DenseMatrix> {
        if self.effective_cols() != rhs.effective_rows() {
            return Err(LinalgError::DimensionMismatch {
                left_cols: self.effective_cols(),
                right_rows: rhs.effective_rows(),
            });
        }

        let rows = self.effective_rows();
        let cols = rhs.effective_cols();
        let mut product = DenseMatrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let value = iter::dot(
                    self.row_begin(i),
                    &self.row_end(i),
                    rhs.col_begin(j),
                    &rhs.col_end(j),
                );
                product.set_value_at(i, j, value)?;
            }
        }

        log::debug!(
            "Multiplied {}x{} ({:?}) by {}x{} ({:?})",
            rows,
            self.effective_cols(),
            self.orientation(),
            rhs.effective_rows(),
            cols,
            rhs.orientation()
        );
        Ok(product)
    }
}

/// Falls back to an empty matrix when the inner dimensions disagree.
impl<'a, 'b> Mul<&'b DenseMatrix> for &'a DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: &'b DenseMatrix) -> Self::Output {
        self.try_mul(rhs).unwrap_or_else(|e| {
            log::warn!("Matrix * produced an empty matrix: {}", e);
            DenseMatrix::new()
        })
    }
}

impl Mul for DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, rhs: DenseMatrix) -> Self::Output {
        &self * &rhs
    }
}
