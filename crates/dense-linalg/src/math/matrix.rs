use std::fmt;
use std::ops::{Index, IndexMut};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{LinalgError, Result};
use crate::math::iter::{AxisCursor, AxisIter, AxisIterMut};
use crate::math::orientation::{map_axes, Axis, Orientation};
use crate::math::vector::{approx_eq, DenseVector, DEFAULT_TOLERANCE};

/// A dense matrix stored as a list of [`DenseVector`]s.
///
/// The backing vectors are the matrix's rows when it is
/// [`Orientation::RowMajor`] and its columns when it is
/// [`Orientation::ColumnMajor`]. The vector index is the *primary* coordinate
/// and the offset inside a vector the *secondary* one; see [`map_axes`].
///
/// Row and column counts may be narrowed with operation size overrides, in
/// which case row operations, iteration and multiplication only see the
/// leading `effective_rows() x effective_cols()` block.
#[derive(Clone, Debug, Default)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    operation_rows: Option<usize>,
    operation_cols: Option<usize>,
    orientation: Orientation,
    // invariant: one vector per primary index, each of secondary length
    vectors: Vec<DenseVector>,
}

impl DenseMatrix {
    /// An empty 0x0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-filled, column-major matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::zeros_with_orientation(rows, cols, Orientation::ColumnMajor)
    }

    pub fn zeros_with_orientation(rows: usize, cols: usize, orientation: Orientation) -> Self {
        let (primary, secondary) = map_axes(rows, cols, orientation);
        let mut vectors = Vec::with_capacity(primary.next_power_of_two());
        vectors.extend((0..primary).map(|_| DenseVector::zeros(secondary)));
        Self {
            rows,
            cols,
            operation_rows: None,
            operation_cols: None,
            orientation,
            vectors,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Self::zeros(n, n);
        for (i, column) in mat.vectors.iter_mut().enumerate() {
            column[i] = 1.0;
        }
        mat
    }

    /// A 1xN matrix when `axis` is [`Axis::Row`], Nx1 for [`Axis::Column`].
    ///
    /// The vector becomes the single backing vector, so no element is moved.
    pub fn from_vector(v: &DenseVector, axis: Axis) -> Self {
        let (rows, cols) = match axis {
            Axis::Row => (1, v.len()),
            Axis::Column => (v.len(), 1),
        };
        Self {
            rows,
            cols,
            operation_rows: None,
            operation_cols: None,
            orientation: axis.storage(),
            vectors: vec![DenseVector::from_slice(v.as_slice())],
        }
    }

    /// Outer product `col * row^T`: element `(r, c)` is `col[r] * row[c]`.
    pub fn outer(col: &DenseVector, row: &DenseVector) -> Self {
        let mut vectors = Vec::with_capacity(row.len().next_power_of_two());
        vectors.extend(
            row.iter()
                .map(|&scale| col.iter().map(|&v| v * scale).collect::<DenseVector>()),
        );
        log::debug!(
            "Built {}x{} outer product matrix",
            col.len(),
            row.len()
        );
        Self {
            rows: col.len(),
            cols: row.len(),
            operation_rows: None,
            operation_cols: None,
            orientation: Orientation::ColumnMajor,
            vectors,
        }
    }

    /// Build from a table of rows. Every row must be as long as the first.
    pub fn from_rows<R: AsRef<[f64]>>(table: &[R]) -> Result<Self> {
        let cols = table.first().map_or(0, |row| row.as_ref().len());
        for (idx, row) in table.iter().enumerate() {
            let found = row.as_ref().len();
            if found != cols {
                log::warn!(
                    "Rejecting ragged table: row {} has {} entries, expected {}",
                    idx,
                    found,
                    cols
                );
                return Err(LinalgError::RaggedRows {
                    row: idx,
                    expected: cols,
                    found,
                });
            }
        }

        let mut mat = Self::zeros(table.len(), cols);
        for (r, row) in table.iter().enumerate() {
            for (c, &value) in row.as_ref().iter().enumerate() {
                mat.vectors[c][r] = value;
            }
        }
        Ok(mat)
    }

    /// Uniform samples in `[low, high)`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Self {
        let dist = Uniform::new(low, high);
        let mut mat = Self::zeros(rows, cols);
        for column in mat.vectors.iter_mut() {
            for v in column.iter_mut() {
                *v = dist.sample(rng);
            }
        }
        mat
    }

    /// The same matrix re-laid out with the requested dominant space.
    pub fn to_orientation(&self, orientation: Orientation) -> Self {
        if orientation == self.orientation {
            return self.clone();
        }
        let mut mat = Self::zeros_with_orientation(self.rows, self.cols, orientation);
        for r in 0..self.rows {
            for c in 0..self.cols {
                let (p, s) = map_axes(r, c, orientation);
                mat.vectors[p][s] = self[(r, c)];
            }
        }
        mat.operation_rows = self.operation_rows;
        mat.operation_cols = self.operation_cols;
        mat
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn effective_rows(&self) -> usize {
        self.operation_rows.unwrap_or(self.rows)
    }

    #[inline]
    pub fn effective_cols(&self) -> usize {
        self.operation_cols.unwrap_or(self.cols)
    }

    pub fn set_operation_rows(&mut self, rows: usize) -> Result<()> {
        if rows > self.rows {
            return Err(LinalgError::OperationSizeTooLarge {
                requested: rows,
                len: self.rows,
            });
        }
        self.operation_rows = Some(rows);
        Ok(())
    }

    pub fn set_operation_cols(&mut self, cols: usize) -> Result<()> {
        if cols > self.cols {
            return Err(LinalgError::OperationSizeTooLarge {
                requested: cols,
                len: self.cols,
            });
        }
        self.operation_cols = Some(cols);
        Ok(())
    }

    pub fn reset_operation_sizes(&mut self) {
        self.operation_rows = None;
        self.operation_cols = None;
    }

    /// Number of lines along `axis` and the extent of each, both effective.
    fn effective_extent(&self, axis: Axis) -> (usize, usize) {
        match axis {
            Axis::Row => (self.effective_rows(), self.effective_cols()),
            Axis::Column => (self.effective_cols(), self.effective_rows()),
        }
    }

    /// Storage coordinates of element `offset` on line `line` of `axis`.
    #[inline]
    fn locate(&self, axis: Axis, line: usize, offset: usize) -> (usize, usize) {
        match axis {
            Axis::Row => map_axes(line, offset, self.orientation),
            Axis::Column => map_axes(offset, line, self.orientation),
        }
    }

    fn check_line(&self, axis: Axis, line: usize) -> Result<()> {
        let (bound, _) = self.effective_extent(axis);
        if line >= bound {
            return Err(LinalgError::IndexOutOfBounds { index: line, bound });
        }
        Ok(())
    }

    /// `NaN` outside the logical shape.
    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).unwrap_or(f64::NAN)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let (p, s) = map_axes(row, col, self.orientation);
        Some(self.vectors[p][s])
    }

    pub fn set_value_at(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LinalgError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let (p, s) = map_axes(row, col, self.orientation);
        self.vectors[p][s] = value;
        Ok(())
    }

    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.swap_lines(Axis::Row, row1, row2)
    }

    pub fn swap_cols(&mut self, col1: usize, col2: usize) -> Result<()> {
        self.swap_lines(Axis::Column, col1, col2)
    }

    fn swap_lines(&mut self, axis: Axis, first: usize, second: usize) -> Result<()> {
        self.check_line(axis, first)?;
        self.check_line(axis, second)?;
        if first == second {
            return Ok(());
        }
        let (_, extent) = self.effective_extent(axis);
        for k in 0..extent {
            let (p1, s1) = self.locate(axis, first, k);
            let (p2, s2) = self.locate(axis, second, k);
            let tmp = self.vectors[p1][s1];
            self.vectors[p1][s1] = self.vectors[p2][s2];
            self.vectors[p2][s2] = tmp;
        }
        Ok(())
    }

    pub fn scale_row(&mut self, row: usize, k: f64) -> Result<()> {
        self.check_line(Axis::Row, row)?;
        self.row_iter_mut(row).for_each(|v| *v *= k);
        Ok(())
    }

    pub fn scale_col(&mut self, col: usize, k: f64) -> Result<()> {
        self.check_line(Axis::Column, col)?;
        self.col_iter_mut(col).for_each(|v| *v *= k);
        Ok(())
    }

    /// `row[target] += multiple * row[source]`, the elimination row operation.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, multiple: f64) -> Result<()> {
        self.check_line(Axis::Row, target)?;
        self.check_line(Axis::Row, source)?;
        let (_, extent) = self.effective_extent(Axis::Row);
        for c in 0..extent {
            let (ps, ss) = self.locate(Axis::Row, source, c);
            let (pt, st) = self.locate(Axis::Row, target, c);
            let addend = multiple * self.vectors[ps][ss];
            self.vectors[pt][st] += addend;
        }
        Ok(())
    }

    /// Transpose in place by relabeling: counts and overrides swap and the
    /// orientation flips, the stored elements stay where they are.
    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.rows, &mut self.cols);
        std::mem::swap(&mut self.operation_rows, &mut self.operation_cols);
        self.orientation = self.orientation.flipped();
        log::trace!(
            "Transposed to {}x{} ({:?})",
            self.rows,
            self.cols,
            self.orientation
        );
        self
    }

    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    pub fn add_row(&mut self, row: &DenseVector) -> Result<()> {
        self.add_line(Axis::Row, row)
    }

    pub fn add_col(&mut self, col: &DenseVector) -> Result<()> {
        self.add_line(Axis::Column, col)
    }

    fn add_line(&mut self, axis: Axis, line: &DenseVector) -> Result<()> {
        if self.rows == 0 && self.cols == 0 {
            let (rows, cols) = match axis {
                Axis::Row => (0, line.len()),
                Axis::Column => (line.len(), 0),
            };
            *self = Self::zeros_with_orientation(rows, cols, self.orientation);
        }

        let required = match axis {
            Axis::Row => self.cols,
            Axis::Column => self.rows,
        };
        if line.len() != required {
            return Err(LinalgError::SizeMismatch {
                expected: required,
                found: line.len(),
            });
        }

        if self.orientation == axis.storage() {
            // The new line is a whole new backing vector.
            if self.vectors.len() == self.vectors.capacity() {
                let grown = (self.vectors.len() * 2).max(2);
                log::trace!(
                    "Growing matrix vector array from {} to {} slots",
                    self.vectors.capacity(),
                    grown
                );
                self.vectors.reserve_exact(grown - self.vectors.len());
            }
            self.vectors.push(DenseVector::from_slice(line.as_slice()));
        } else {
            // The new line contributes one element to the end of every vector.
            for (vector, &value) in self.vectors.iter_mut().zip(line.iter()) {
                vector.append(value)?;
            }
        }

        match axis {
            Axis::Row => self.rows += 1,
            Axis::Column => self.cols += 1,
        }
        Ok(())
    }

    pub fn row_begin(&self, row: usize) -> AxisCursor<'_> {
        self.cursor(Axis::Row, row, 0)
    }

    pub fn row_end(&self, row: usize) -> AxisCursor<'_> {
        self.cursor(Axis::Row, row, self.effective_cols())
    }

    pub fn col_begin(&self, col: usize) -> AxisCursor<'_> {
        self.cursor(Axis::Column, col, 0)
    }

    pub fn col_end(&self, col: usize) -> AxisCursor<'_> {
        self.cursor(Axis::Column, col, self.effective_rows())
    }

    fn cursor(&self, axis: Axis, line: usize, offset: usize) -> AxisCursor<'_> {
        AxisCursor::new(
            &self.vectors,
            self.locate(axis, line, offset),
            self.orientation,
            axis,
        )
    }

    pub fn row_iter(&self, row: usize) -> AxisIter<'_> {
        assert!(row < self.rows, "row index out of bounds");
        AxisIter::new(self.row_begin(row), self.row_end(row))
    }

    pub fn col_iter(&self, col: usize) -> AxisIter<'_> {
        assert!(col < self.cols, "column index out of bounds");
        AxisIter::new(self.col_begin(col), self.col_end(col))
    }

    pub fn row_iter_mut(&mut self, row: usize) -> AxisIterMut<'_> {
        assert!(row < self.rows, "row index out of bounds");
        self.line_iter_mut(Axis::Row, row)
    }

    pub fn col_iter_mut(&mut self, col: usize) -> AxisIterMut<'_> {
        assert!(col < self.cols, "column index out of bounds");
        self.line_iter_mut(Axis::Column, col)
    }

    fn line_iter_mut(&mut self, axis: Axis, line: usize) -> AxisIterMut<'_> {
        let (_, extent) = self.effective_extent(axis);
        if self.orientation == axis.storage() {
            AxisIterMut::within(&mut self.vectors[line].as_mut_slice()[..extent])
        } else {
            AxisIterMut::across(&mut self.vectors[..extent], line)
        }
    }

    /// A copy of the effective part of one row.
    pub fn row(&self, row: usize) -> DenseVector {
        self.row_iter(row).copied().collect()
    }

    pub fn col(&self, col: usize) -> DenseVector {
        self.col_iter(col).copied().collect()
    }

    /// Compare against a table of rows over the full logical shape.
    pub fn approx_eq_rows<R: AsRef<[f64]>>(&self, table: &[R], tolerance: f64) -> bool {
        table.len() == self.rows
            && table.iter().enumerate().all(|(r, row)| {
                let row = row.as_ref();
                row.len() == self.cols
                    && row
                        .iter()
                        .enumerate()
                        .all(|(c, &v)| approx_eq(self[(r, c)], v, tolerance))
            })
    }

    pub fn equals<R: AsRef<[f64]>>(&self, table: &[R]) -> bool {
        self.approx_eq_rows(table, DEFAULT_TOLERANCE)
    }

    /// Same logical shape and element-wise within `tolerance`, whatever the
    /// two storage orientations are.
    pub fn approx_eq(&self, other: &DenseMatrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && (0..self.rows).all(|r| {
                (0..self.cols).all(|c| approx_eq(self[(r, c)], other[(r, c)], tolerance))
            })
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        let (p, s) = map_axes(row, col, self.orientation);
        &self.vectors[p][s]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index out of bounds"
        );
        let (p, s) = map_axes(row, col, self.orientation);
        &mut self.vectors[p][s]
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                write!(f, "{}", self[(r, c)])?;
                if c + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
