use std::ops::{Mul, Neg};

use crate::{AlgebraError, Matrix};

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl Transpose for Matrix {
    fn transpose(&self) -> Self {
        let (nrows, ncols) = self.shape();
        let mut vals = Vec::with_capacity(nrows * ncols);
        for c in 0..ncols {
            vals.extend(self.rows().map(|row| row[c]));
        }
        Matrix::from_parts(ncols, nrows, vals)
    }
}

impl Matrix {
    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, AlgebraError> {
        if self.shape() != other.shape() {
            return Err(AlgebraError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let vals = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Matrix::from_parts(self.nrows(), self.ncols(), vals))
    }

    /// Elementwise `self + other`.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, AlgebraError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise `self - other`.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, AlgebraError> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    pub fn scale(&self, s: f64) -> Matrix {
        self.map(|v| v * s)
    }

    /// Applies `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        let mut res = self.clone();
        res.vals_mut().iter_mut().for_each(|v| *v = f(*v));
        res
    }

    /// Matrix product `self * other`, an `self.nrows() x other.ncols()` matrix.
    pub fn try_product(&self, other: &Matrix) -> Result<Matrix, AlgebraError> {
        if self.ncols() != other.nrows() {
            return Err(AlgebraError::ShapeMismatch {
                op: "product",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let (nrows, ncols) = (self.nrows(), other.ncols());
        let mut vals = vec![0.0; nrows * ncols];
        for (out_row, row) in vals.chunks_exact_mut(ncols).zip(self.rows()) {
            for (a, other_row) in row.iter().zip(other.rows()) {
                out_row
                    .iter_mut()
                    .zip(other_row)
                    .for_each(|(out, b)| *out += a * b);
            }
        }
        Ok(Matrix::from_parts(nrows, ncols, vals))
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|v| -v)
    }
}
