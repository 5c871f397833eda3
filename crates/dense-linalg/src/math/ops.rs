//! Operator overloads and free functions over [`DenseVector`].
//!
//! Operators cannot report failure, so they fall back the same way the rest of
//! the crate does: a binary `+`/`-` on incompatible operands yields an empty
//! vector, compound assignment leaves the left operand untouched. Each fallback
//! is logged at `warn`. The `checked_*` methods and [`find_projection`] return
//! the error instead.
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{LinalgError, Result};
use crate::math::vector::DenseVector;

impl AddAssign<&DenseVector> for DenseVector {
    fn add_assign(&mut self, rhs: &DenseVector) {
        if let Err(e) = self.add_in_place(rhs) {
            log::warn!("Vector += left operand unchanged: {}", e);
        }
    }
}

impl SubAssign<&DenseVector> for DenseVector {
    fn sub_assign(&mut self, rhs: &DenseVector) {
        if let Err(e) = self.sub_in_place(rhs) {
            log::warn!("Vector -= left operand unchanged: {}", e);
        }
    }
}

impl MulAssign<f64> for DenseVector {
    fn mul_assign(&mut self, rhs: f64) {
        if let Err(e) = self.scale_in_place(rhs) {
            log::warn!("Vector *= left operand unchanged: {}", e);
        }
    }
}

impl<'a, 'b> Add<&'b DenseVector> for &'a DenseVector {
    type Output = DenseVector;

    fn add(self, rhs: &'b DenseVector) -> Self::Output {
        add(self, rhs)
    }
}

impl Add for DenseVector {
    type Output = DenseVector;

    fn add(self, rhs: DenseVector) -> Self::Output {
        add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b DenseVector> for &'a DenseVector {
    type Output = DenseVector;

    fn sub(self, rhs: &'b DenseVector) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|e| {
            log::warn!("Vector - produced an empty vector: {}", e);
            DenseVector::new()
        })
    }
}

impl Sub for DenseVector {
    type Output = DenseVector;

    fn sub(self, rhs: DenseVector) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<f64> for &DenseVector {
    type Output = DenseVector;

    fn mul(self, rhs: f64) -> Self::Output {
        scalar_multiply(self, rhs)
    }
}

impl Mul<f64> for DenseVector {
    type Output = DenseVector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        // An empty vector stays empty; nothing to scale.
        let _ = self.scale_in_place(rhs);
        self
    }
}

impl Mul<&DenseVector> for f64 {
    type Output = DenseVector;

    fn mul(self, rhs: &DenseVector) -> Self::Output {
        scalar_multiply(rhs, self)
    }
}

impl Mul<DenseVector> for f64 {
    type Output = DenseVector;

    fn mul(self, rhs: DenseVector) -> Self::Output {
        rhs * self
    }
}

/// `a * b` between vectors is the dot product.
impl<'a, 'b> Mul<&'b DenseVector> for &'a DenseVector {
    type Output = f64;

    fn mul(self, rhs: &'b DenseVector) -> Self::Output {
        self.dot(rhs)
    }
}

/// Element-wise sum; empty when the operation sizes disagree or are zero.
pub fn add(v1: &DenseVector, v2: &DenseVector) -> DenseVector {
    v1.checked_add(v2).unwrap_or_else(|e| {
        log::warn!("Vector + produced an empty vector: {}", e);
        DenseVector::new()
    })
}

pub fn scalar_multiply(v: &DenseVector, alpha: f64) -> DenseVector {
    v.clone() * alpha
}

pub fn dot_product(v1: &DenseVector, v2: &DenseVector) -> f64 {
    v1.dot(v2)
}

/// Projection of `b` onto `a`, `(b·a / a·a) a`.
///
/// Undefined when the operands differ in operation size, are empty, or `a`
/// is exactly the zero vector.
pub fn find_projection(b: &DenseVector, a: &DenseVector) -> Result<DenseVector> {
    if a.operation_size() != b.operation_size() {
        return Err(LinalgError::SizeMismatch {
            expected: a.operation_size(),
            found: b.operation_size(),
        });
    }
    if a.operation_size() == 0 {
        return Err(LinalgError::EmptyOperand);
    }
    let norm_sq = a.dot(a);
    if norm_sq == 0.0 {
        return Err(LinalgError::ZeroVector);
    }
    let mut projection = a.clone();
    projection.scale_in_place(b.dot(a) / norm_sq)?;
    Ok(projection)
}
