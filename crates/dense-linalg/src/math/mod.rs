//! Dense vector and matrix types.
//!
//! `DenseVector` is a growable `f64` buffer with power-of-two storage.
//! `DenseMatrix` keeps its elements as a list of such vectors, either rows or
//! columns depending on its `Orientation`, and walks rows and columns through
//! the orientation-agnostic cursors in [`iter`].
pub mod iter;
pub mod matrix;
mod multiply;
pub mod ops;
pub mod orientation;
pub mod vector;

pub use iter::{AxisCursor, AxisIter, AxisIterMut};
pub use matrix::DenseMatrix;
pub use ops::{add, dot_product, find_projection, scalar_multiply};
pub use orientation::{map_axes, Axis, Orientation};
pub use vector::{DenseVector, DEFAULT_TOLERANCE};
