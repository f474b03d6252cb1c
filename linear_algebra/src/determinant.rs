//! Determinant and inverse by cofactor (Laplace) expansion.
//!
//! Expansion is O(n!) on dense input and recurses once per order; it is meant
//! for small matrices. [`Limits::max_expansion_order`] caps the recursion.

use log::warn;

use crate::{config::Limits, ops::Transpose, AlgebraError, Matrix};

/// Orders above this are logged, dense expansion is already slow there.
const SLOW_EXPANSION_ORDER: usize = 10;

fn sign(i: usize) -> f64 {
    if i % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix {
    fn check_square(&self) -> Result<usize, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare(self.nrows(), self.ncols()));
        }
        Ok(self.nrows())
    }

    pub fn determinant(&self) -> Result<f64, AlgebraError> {
        self.determinant_with(&Limits::default())
    }

    pub fn determinant_with(&self, limits: &Limits) -> Result<f64, AlgebraError> {
        let n = self.check_square()?;
        limits.check_expansion(n)?;
        if n > SLOW_EXPANSION_ORDER {
            warn!("cofactor expansion of a {n}x{n} matrix");
        }
        self.expand()
    }

    /// Expansion along row 0, skipping zero entries.
    fn expand(&self) -> Result<f64, AlgebraError> {
        if self.nrows() == 1 {
            return Ok(self[(0, 0)]);
        }
        let mut det = 0.0;
        for (i, value) in self.row_slice(0).iter().enumerate() {
            if *value == 0.0 {
                continue;
            }
            det += sign(i) * value * self.minor(0, i)?.expand()?;
        }
        Ok(det)
    }

    /// Matrix of cofactors, entry `(i, j)` is `(-1)^(i+j) det(minor(i, j))`.
    pub fn cofactors(&self) -> Result<Matrix, AlgebraError> {
        self.cofactors_with(&Limits::default())
    }

    fn cofactors_with(&self, limits: &Limits) -> Result<Matrix, AlgebraError> {
        let n = self.check_square()?;
        limits.check_expansion(n)?;
        if n == 1 {
            return Matrix::identity(1);
        }
        let mut vals = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                vals.push(sign(i + j) * self.minor(i, j)?.expand()?);
            }
        }
        Ok(Matrix::from_parts(n, n, vals))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix, AlgebraError> {
        Ok(self.cofactors()?.transpose())
    }

    pub fn inverse(&self) -> Result<Matrix, AlgebraError> {
        self.inverse_with(&Limits::default())
    }

    /// `adjugate / determinant`; fails with `SingularMatrix` when the
    /// determinant is exactly zero.
    pub fn inverse_with(&self, limits: &Limits) -> Result<Matrix, AlgebraError> {
        let det = self.determinant_with(limits)?;
        if det == 0.0 {
            return Err(AlgebraError::SingularMatrix);
        }
        Ok(self.cofactors_with(limits)?.transpose().scale(1.0 / det))
    }
}
