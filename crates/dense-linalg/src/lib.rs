//! dense-linalg: small dense vectors and matrices.
//!
//! The matrix stores its elements as a list of row or column vectors and can
//! transpose itself by flipping that orientation instead of moving data.
//! Row/column cursors hide the orientation, so multiplication and the other
//! line-wise algorithms are written once for both layouts.
//!
//! The optional `ndarray` feature adds conversions to and from `ndarray`
//! arrays.
pub mod config;
pub mod error;
#[cfg(feature = "ndarray")]
pub mod interop;
pub mod math;

pub use config::LinalgConfig;
pub use error::{LinalgError, Result};
pub use math::{
    find_projection, map_axes, Axis, AxisCursor, AxisIter, AxisIterMut, DenseMatrix, DenseVector,
    Orientation,
};
