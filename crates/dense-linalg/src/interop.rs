//! Conversions between this crate's types and `ndarray` arrays.
//!
//! Only the logical extent is copied; operation size overrides and the
//! storage orientation of a `DenseMatrix` do not survive the round trip.
use ndarray::{Array1, Array2};

use crate::math::{DenseMatrix, DenseVector};

impl From<&DenseVector> for Array1<f64> {
    fn from(value: &DenseVector) -> Self {
        Array1::from_vec(value.to_vec())
    }
}

impl From<&Array1<f64>> for DenseVector {
    fn from(value: &Array1<f64>) -> Self {
        value.iter().copied().collect()
    }
}

impl From<&DenseMatrix> for Array2<f64> {
    fn from(value: &DenseMatrix) -> Self {
        Array2::from_shape_fn(value.shape(), |(r, c)| value[(r, c)])
    }
}

impl From<&Array2<f64>> for DenseMatrix {
    fn from(value: &Array2<f64>) -> Self {
        let mut mat = DenseMatrix::zeros(value.nrows(), value.ncols());
        for ((r, c), &v) in value.indexed_iter() {
            mat[(r, c)] = v;
        }
        mat
    }
}
