//! Cursors and iterators over a single row or column of a [`DenseMatrix`].
//!
//! A cursor never asks which orientation backs the matrix after it is built:
//! the choice between stepping across backing vectors or along one of them is
//! made once, at construction, by comparing the storage orientation with the
//! axis being walked. Every algorithm written against cursors is therefore the
//! same code for row-major and column-major operands.
//!
//! Cursors borrow the matrix, so a transpose (which needs `&mut`) cannot
//! happen while one is alive.
//!
//! [`DenseMatrix`]: crate::math::DenseMatrix
use std::iter::FusedIterator;
use std::ops::Sub;
use std::ptr;
use std::slice;

use crate::math::orientation::{Axis, Orientation};
use crate::math::vector::DenseVector;

/// Which storage coordinate a cursor increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Next backing vector, same offset.
    Primary,
    /// Same backing vector, next offset.
    Secondary,
}

/// A position on one row or column of a matrix.
///
/// Used in half-open `begin..end` pairs obtained from
/// [`DenseMatrix::row_begin`](crate::math::DenseMatrix::row_begin) and
/// friends.
#[derive(Debug, Clone, Copy)]
pub struct AxisCursor<'a> {
    vectors: &'a [DenseVector],
    primary: usize,
    secondary: usize,
    step: Step,
}

impl<'a> AxisCursor<'a> {
    pub(crate) fn new(
        vectors: &'a [DenseVector],
        (primary, secondary): (usize, usize),
        orientation: Orientation,
        axis: Axis,
    ) -> Self {
        let step = if orientation == axis.storage() {
            Step::Secondary
        } else {
            Step::Primary
        };
        Self {
            vectors,
            primary,
            secondary,
            step,
        }
    }

    /// The element under the cursor, `None` at or past the end of storage.
    #[inline]
    pub fn get(&self) -> Option<&'a f64> {
        self.vectors
            .get(self.primary)
            .and_then(|v| v.as_slice().get(self.secondary))
    }

    /// `(primary, secondary)` storage coordinates.
    pub fn position(&self) -> (usize, usize) {
        (self.primary, self.secondary)
    }

    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        match self.step {
            Step::Primary => self.primary += 1,
            Step::Secondary => self.secondary += 1,
        }
        self
    }

    /// Elements between `origin` and `self` along the cursor's line.
    ///
    /// Only one coordinate varies along a line, so the other difference is
    /// zero and the two can simply be summed.
    #[inline]
    pub fn distance_from(&self, origin: &AxisCursor<'_>) -> usize {
        self.primary
            .wrapping_sub(origin.primary)
            .wrapping_add(self.secondary.wrapping_sub(origin.secondary))
    }
}

impl PartialEq for AxisCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.vectors.as_ptr(), other.vectors.as_ptr())
            && self.primary == other.primary
            && self.secondary == other.secondary
            && self.step == other.step
    }
}

impl Eq for AxisCursor<'_> {}

impl<'a, 'b> Sub<AxisCursor<'b>> for AxisCursor<'a> {
    type Output = usize;

    fn sub(self, origin: AxisCursor<'b>) -> usize {
        self.distance_from(&origin)
    }
}

/// Dot product of two cursor ranges walked in lock-step.
///
/// Returns `NaN` when the ranges differ in length. Row·row, column·column and
/// the row·column products of matrix multiplication all go through here.
pub fn dot(
    mut begin_a: AxisCursor<'_>,
    end_a: &AxisCursor<'_>,
    mut begin_b: AxisCursor<'_>,
    end_b: &AxisCursor<'_>,
) -> f64 {
    let len = end_a.distance_from(&begin_a);
    if end_b.distance_from(&begin_b) != len {
        return f64::NAN;
    }

    let mut result = 0.0;
    for _ in 0..len {
        match (begin_a.get(), begin_b.get()) {
            (Some(a), Some(b)) => result += a * b,
            _ => return f64::NAN,
        }
        begin_a.advance();
        begin_b.advance();
    }
    result
}

/// Shared iterator over a `begin..end` cursor range.
#[derive(Debug, Clone)]
pub struct AxisIter<'a> {
    cursor: AxisCursor<'a>,
    end: AxisCursor<'a>,
}

impl<'a> AxisIter<'a> {
    pub fn new(begin: AxisCursor<'a>, end: AxisCursor<'a>) -> Self {
        Self { cursor: begin, end }
    }
}

impl<'a> Iterator for AxisIter<'a> {
    type Item = &'a f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self.cursor.get();
        if item.is_none() {
            // Ran off the storage; pin to the end so the iterator stays fused.
            self.cursor = self.end;
            return None;
        }
        self.cursor.advance();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.distance_from(&self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AxisIter<'_> {}

impl FusedIterator for AxisIter<'_> {}

#[derive(Debug)]
enum Lane<'a> {
    Across {
        vectors: slice::IterMut<'a, DenseVector>,
        offset: usize,
    },
    Within(slice::IterMut<'a, f64>),
}

/// Read/write iterator over one row or column.
#[derive(Debug)]
pub struct AxisIterMut<'a> {
    lane: Lane<'a>,
}

impl<'a> AxisIterMut<'a> {
    /// One element at `offset` from each of `vectors`.
    pub(crate) fn across(vectors: &'a mut [DenseVector], offset: usize) -> Self {
        Self {
            lane: Lane::Across {
                vectors: vectors.iter_mut(),
                offset,
            },
        }
    }

    /// Consecutive elements of a single backing vector.
    pub(crate) fn within(values: &'a mut [f64]) -> Self {
        Self {
            lane: Lane::Within(values.iter_mut()),
        }
    }
}

impl<'a> Iterator for AxisIterMut<'a> {
    type Item = &'a mut f64;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.lane {
            Lane::Across { vectors, offset } => {
                let offset = *offset;
                vectors.next().map(|v| &mut v[offset])
            }
            Lane::Within(values) => values.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.lane {
            Lane::Across { vectors, .. } => vectors.size_hint(),
            Lane::Within(values) => values.size_hint(),
        }
    }
}

impl ExactSizeIterator for AxisIterMut<'_> {}
