use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{LinalgError, Result};

/// Absolute tolerance used by the approximate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Storage slots reserved for `size` elements: the smallest power of two that
/// holds them, never less than 2 once anything is stored.
#[inline]
fn capacity_for(size: usize) -> usize {
    if size == 0 {
        0
    } else {
        size.max(2).next_power_of_two()
    }
}

/// A growable vector of `f64` with power-of-two storage.
///
/// Besides its logical length a vector carries an *operation size*: the number
/// of leading elements that arithmetic, norms and comparisons look at. It
/// defaults to the length and can be lowered to soft-truncate the vector
/// without touching its storage.
#[derive(Clone, Debug, Default)]
pub struct DenseVector {
    // `data.len()` is the capacity; slots past `len` are kept at zero.
    data: Vec<f64>,
    len: usize,
    operation_size: Option<usize>,
}

impl DenseVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; capacity_for(size)],
            len: size,
            operation_size: None,
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        let mut data = vec![0.0; capacity_for(values.len())];
        data[..values.len()].copy_from_slice(values);
        Self {
            data,
            len: values.len(),
            operation_size: None,
        }
    }

    /// Uniform samples in `[low, high)`.
    pub fn random<R: Rng + ?Sized>(size: usize, low: f64, high: f64, rng: &mut R) -> Self {
        let dist = Uniform::new(low, high);
        (0..size).map(|_| dist.sample(rng)).collect()
    }

    /// Replace the contents with `values`, dropping any operation size override.
    pub fn assign(&mut self, values: &[f64]) {
        *self = Self::from_slice(values);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn operation_size(&self) -> usize {
        self.operation_size.unwrap_or(self.len)
    }

    pub fn set_operation_size(&mut self, size: usize) -> Result<()> {
        if size > self.len {
            return Err(LinalgError::OperationSizeTooLarge {
                requested: size,
                len: self.len,
            });
        }
        self.operation_size = Some(size);
        Ok(())
    }

    pub fn reset_operation_size(&mut self) {
        self.operation_size = None;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data[..self.len]
    }

    /// The leading `operation_size()` elements.
    #[inline]
    pub(crate) fn operands(&self) -> &[f64] {
        &self.data[..self.operation_size()]
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.as_mut_slice().iter_mut()
    }

    /// Bounds-checked read against the logical length.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.as_slice().get(index).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut f64> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Euclidean norm over the operation size, `NaN` when that is zero.
    pub fn magnitude(&self) -> f64 {
        let operands = self.operands();
        if operands.is_empty() {
            return f64::NAN;
        }
        operands.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.operands()
            .iter()
            .all(|&v| approx_eq(v, 0.0, DEFAULT_TOLERANCE))
    }

    /// Element-wise comparison over the operation size.
    pub fn approx_eq(&self, other: &DenseVector, tolerance: f64) -> bool {
        self.approx_eq_slice(other.operands(), tolerance)
    }

    pub fn approx_eq_slice(&self, values: &[f64], tolerance: f64) -> bool {
        let operands = self.operands();
        operands.len() == values.len()
            && operands
                .iter()
                .zip(values)
                .all(|(&a, &b)| approx_eq(a, b, tolerance))
    }

    pub fn equals(&self, other: &DenseVector) -> bool {
        self.approx_eq(other, DEFAULT_TOLERANCE)
    }

    pub fn equals_slice(&self, values: &[f64]) -> bool {
        self.approx_eq_slice(values, DEFAULT_TOLERANCE)
    }

    /// Both operation sizes must agree and be non-zero.
    fn check_compatible(&self, other: &DenseVector) -> Result<usize> {
        let size = self.operation_size();
        if size != other.operation_size() {
            return Err(LinalgError::SizeMismatch {
                expected: size,
                found: other.operation_size(),
            });
        }
        if size == 0 {
            return Err(LinalgError::EmptyOperand);
        }
        Ok(size)
    }

    pub fn add_in_place(&mut self, other: &DenseVector) -> Result<()> {
        let size = self.check_compatible(other)?;
        for (a, b) in self.data[..size].iter_mut().zip(other.operands()) {
            *a += b;
        }
        Ok(())
    }

    pub fn sub_in_place(&mut self, other: &DenseVector) -> Result<()> {
        let size = self.check_compatible(other)?;
        for (a, b) in self.data[..size].iter_mut().zip(other.operands()) {
            *a -= b;
        }
        Ok(())
    }

    pub fn scale_in_place(&mut self, alpha: f64) -> Result<()> {
        let size = self.operation_size();
        if size == 0 {
            return Err(LinalgError::EmptyOperand);
        }
        for v in self.data[..size].iter_mut() {
            *v *= alpha;
        }
        Ok(())
    }

    /// `NaN` unless both operation sizes agree and are non-zero.
    pub fn dot(&self, other: &DenseVector) -> f64 {
        match self.check_compatible(other) {
            Ok(_) => self
                .operands()
                .iter()
                .zip(other.operands())
                .map(|(a, b)| a * b)
                .sum(),
            Err(_) => f64::NAN,
        }
    }

    pub fn checked_add(&self, other: &DenseVector) -> Result<DenseVector> {
        let mut sum = self.clone();
        sum.add_in_place(other)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, other: &DenseVector) -> Result<DenseVector> {
        let mut difference = self.clone();
        difference.sub_in_place(other)?;
        Ok(difference)
    }

    /// Push `value` right after the last stored element, doubling the
    /// capacity when full. The operation size override is left alone.
    pub fn append(&mut self, value: f64) -> Result<()> {
        if self.len == self.data.len() {
            let new_capacity = match self.data.len() {
                0 => 2,
                n => n.checked_mul(2).ok_or(LinalgError::CapacityOverflow)?,
            };
            log::trace!(
                "Growing vector storage from {} to {} slots",
                self.data.len(),
                new_capacity
            );
            let mut grown = Vec::with_capacity(new_capacity);
            grown.extend_from_slice(&self.data);
            grown.resize(new_capacity, 0.0);
            self.data = grown;
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(mut value: Vec<f64>) -> Self {
        let len = value.len();
        value.resize(capacity_for(len), 0.0);
        Self {
            data: value,
            len,
            operation_size: None,
        }
    }
}

impl From<&[f64]> for DenseVector {
    fn from(value: &[f64]) -> Self {
        Self::from_slice(value)
    }
}

impl<const N: usize> From<[f64; N]> for DenseVector {
    fn from(value: [f64; N]) -> Self {
        Self::from_slice(&value)
    }
}

impl From<DenseVector> for Vec<f64> {
    fn from(value: DenseVector) -> Self {
        let mut data = value.data;
        data.truncate(value.len);
        data
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        DenseVector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Unchecked against the logical length: any slot below `capacity()` is
/// addressable. Use [`DenseVector::get`] for a checked read.
impl Index<usize> for DenseVector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for DenseVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl PartialEq for DenseVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<[f64]> for DenseVector {
    fn eq(&self, other: &[f64]) -> bool {
        self.equals_slice(other)
    }
}

impl PartialEq<&[f64]> for DenseVector {
    fn eq(&self, other: &&[f64]) -> bool {
        self.equals_slice(other)
    }
}

impl<const N: usize> PartialEq<[f64; N]> for DenseVector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.equals_slice(other)
    }
}

impl PartialEq<Vec<f64>> for DenseVector {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.equals_slice(other)
    }
}

impl<'a> IntoIterator for &'a DenseVector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DenseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.len {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
