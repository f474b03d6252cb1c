use std::{fmt, ops::Index};

use rand::Rng;

use crate::{config::Limits, AlgebraError};

/// A dense matrix of `f64` values.
///
/// Elements live in one owned row-major buffer, element `(r, c)` at
/// `r * ncols + c`, and the buffer always holds exactly `nrows * ncols`
/// values with both sides at least 1. Cloning deep-copies the buffer; dropping
/// the matrix releases it.
///
/// Operations take `&self` and return a new matrix. The only mutating methods
/// are [`put`](Self::put), [`put_row`](Self::put_row) and the elementary row
/// operations in [`eros`](crate::eros).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix", into = "RawMatrix"))]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    vals: Vec<f64>,
}

/// Unvalidated serde form of [`Matrix`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMatrix {
    nrows: usize,
    ncols: usize,
    vals: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = AlgebraError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Matrix::from_data(raw.vals, raw.nrows, raw.ncols)
    }
}

#[cfg(feature = "serde")]
impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        RawMatrix {
            nrows: m.nrows,
            ncols: m.ncols,
            vals: m.vals,
        }
    }
}

impl Matrix {
    /// Zero-filled `nrows x ncols` matrix.
    pub fn zero(nrows: usize, ncols: usize) -> Result<Self, AlgebraError> {
        Self::zero_with(nrows, ncols, &Limits::default())
    }

    pub fn zero_with(nrows: usize, ncols: usize, limits: &Limits) -> Result<Self, AlgebraError> {
        let len = limits.check_shape(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            vals: vec![0.0; len],
        })
    }

    /// Takes ownership of `vals` as the row-major buffer of an `nrows x ncols`
    /// matrix.
    pub fn from_data(vals: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self, AlgebraError> {
        Self::from_data_with(vals, nrows, ncols, &Limits::default())
    }

    pub fn from_data_with(
        vals: Vec<f64>,
        nrows: usize,
        ncols: usize,
        limits: &Limits,
    ) -> Result<Self, AlgebraError> {
        let expected = limits.check_shape(nrows, ncols)?;
        if vals.is_empty() {
            return Err(AlgebraError::NullOrEmptyInput);
        }
        if vals.len() != expected {
            return Err(AlgebraError::LengthMismatch {
                expected,
                found: vals.len(),
            });
        }
        Ok(Self { nrows, ncols, vals })
    }

    /// Copies `data` into a new `nrows x ncols` matrix.
    pub fn from_slice(data: &[f64], nrows: usize, ncols: usize) -> Result<Self, AlgebraError> {
        Self::from_data(data.to_vec(), nrows, ncols)
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Result<Self, AlgebraError> {
        let mut m = Self::zero(n, n)?;
        for i in 0..n {
            m.vals[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Matrix filled with values drawn uniformly from `[0, 1)`.
    pub fn rand<RND: Rng>(rng: &mut RND, nrows: usize, ncols: usize) -> Result<Self, AlgebraError> {
        Self::rand_with(rng, nrows, ncols, &Limits::default())
    }

    pub fn rand_with<RND: Rng>(
        rng: &mut RND,
        nrows: usize,
        ncols: usize,
        limits: &Limits,
    ) -> Result<Self, AlgebraError> {
        let len = limits.check_shape(nrows, ncols)?;
        let vals = (0..len).map(|_| rng.gen::<f64>()).collect();
        Ok(Self { nrows, ncols, vals })
    }

    /// Builds a matrix from parts already known to be consistent.
    pub(crate) fn from_parts(nrows: usize, ncols: usize, vals: Vec<f64>) -> Self {
        debug_assert!(nrows > 0 && ncols > 0);
        debug_assert_eq!(vals.len(), nrows * ncols);
        Self { nrows, ncols, vals }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn is_column_vector(&self) -> bool {
        self.ncols == 1
    }

    /// The row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.vals
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.vals
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.vals.chunks_exact(self.ncols)
    }

    pub fn row(&self, r: usize) -> Result<&[f64], AlgebraError> {
        self.check_row(r)?;
        Ok(self.row_slice(r))
    }

    pub fn get(&self, r: usize, c: usize) -> Result<f64, AlgebraError> {
        self.check_index(r, c)?;
        Ok(self.vals[self.linear_index(r, c)])
    }

    /// Writes `value` at `(r, c)` in place.
    pub fn put(&mut self, value: f64, r: usize, c: usize) -> Result<&mut Self, AlgebraError> {
        self.check_index(r, c)?;
        let idx = self.linear_index(r, c);
        self.vals[idx] = value;
        Ok(self)
    }

    /// Copy of row `r` as a `1 x ncols` matrix.
    pub fn get_row(&self, r: usize) -> Result<Matrix, AlgebraError> {
        self.check_row(r)?;
        Ok(Self::from_parts(1, self.ncols, self.row_slice(r).to_vec()))
    }

    /// Overwrites row `r` in place with the `1 x ncols` matrix `row`.
    pub fn put_row(&mut self, row: &Matrix, r: usize) -> Result<&mut Self, AlgebraError> {
        if row.nrows != 1 || row.ncols != self.ncols {
            return Err(AlgebraError::ShapeMismatch {
                op: "put_row",
                lhs: self.shape(),
                rhs: row.shape(),
            });
        }
        self.check_row(r)?;
        self.row_slice_mut(r).copy_from_slice(&row.vals);
        Ok(self)
    }

    pub(crate) fn linear_index(&self, r: usize, c: usize) -> usize {
        r * self.ncols + c
    }

    pub(crate) fn check_index(&self, r: usize, c: usize) -> Result<(), AlgebraError> {
        if r >= self.nrows || c >= self.ncols {
            return Err(self.out_of_range(r, c));
        }
        Ok(())
    }

    pub(crate) fn check_row(&self, r: usize) -> Result<(), AlgebraError> {
        if r >= self.nrows {
            return Err(self.out_of_range(r, 0));
        }
        Ok(())
    }

    pub(crate) fn out_of_range(&self, row: usize, col: usize) -> AlgebraError {
        AlgebraError::IndexOutOfRange {
            row,
            col,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    pub(crate) fn row_slice(&self, r: usize) -> &[f64] {
        &self.vals[r * self.ncols..(r + 1) * self.ncols]
    }

    pub(crate) fn row_slice_mut(&mut self, r: usize) -> &mut [f64] {
        &mut self.vals[r * self.ncols..(r + 1) * self.ncols]
    }

    pub(crate) fn vals_mut(&mut self) -> &mut [f64] {
        &mut self.vals
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = AlgebraError;

    fn try_from(vecs: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let nrows = vecs.len();
        let ncols = vecs.first().map_or(0, |row| row.len());
        if nrows == 0 || ncols == 0 {
            return Err(AlgebraError::NullOrEmptyInput);
        }
        if let Some(bad) = vecs.iter().find(|row| row.len() != ncols) {
            return Err(AlgebraError::LengthMismatch {
                expected: ncols,
                found: bad.len(),
            });
        }
        Self::from_data(vecs.concat(), nrows, ncols)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(
            r < self.nrows && c < self.ncols,
            "index ({r}, {c}) out of range for a {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.vals[self.linear_index(r, c)]
    }
}

impl Matrix {
    pub fn checked_mul_vec(&self, v: &[f64]) -> Option<Vec<f64>> {
        if self.ncols != v.len() {
            return None;
        }

        Some(
            self.rows()
                .map(|row| row.iter().zip(v).map(|(r_m, r_v)| r_m * r_v).sum())
                .collect(),
        )
    }

    pub fn try_mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, AlgebraError> {
        self.checked_mul_vec(v).ok_or(AlgebraError::LengthMismatch {
            expected: self.ncols,
            found: v.len(),
        })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                if *value >= 0.0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:.6}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
