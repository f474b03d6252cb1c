//! Gaussian elimination to row-echelon and reduced row-echelon form.
//!
//! Both forms are computed on a private copy, rows are only mutated through
//! the elementary row operations, and pivots are compared against exact zero.
//! Every row index used here comes from the matrix itself, so none of these
//! can fail.

use log::trace;

use crate::{AlgebraError, Matrix};

impl Matrix {
    /// Column and value of the first nonzero entry of row `r`, if any.
    fn leader_entry(&self, r: usize) -> Option<(usize, f64)> {
        self.row_slice(r)
            .iter()
            .copied()
            .enumerate()
            .find(|(_, v)| *v != 0.0)
    }

    /// First nonzero value of row `r`, or `0.0` for a zero row.
    pub fn leader(&self, r: usize) -> Result<f64, AlgebraError> {
        self.check_row(r)?;
        Ok(self.leader_entry(r).map_or(0.0, |(_, v)| v))
    }

    /// Column of the first nonzero entry of row `r`, or `ncols()` for a zero
    /// row.
    pub fn leader_column(&self, r: usize) -> Result<usize, AlgebraError> {
        self.check_row(r)?;
        Ok(self.leader_column_unchecked(r))
    }

    fn leader_column_unchecked(&self, r: usize) -> usize {
        self.leader_entry(r).map_or(self.ncols(), |(c, _)| c)
    }

    /// Copy with the rows in staircase order: rows whose leader is further
    /// left come first and zero rows go last.
    ///
    /// Rows sharing a leader column are not kept in their original order. The
    /// bottom slot is filled by scanning the unplaced rows upwards and taking
    /// the last row seen with the largest leader column, so among ties the
    /// topmost row is placed lowest.
    pub fn order_rows(&self) -> Matrix {
        let mut m = self.clone();
        m.order_rows_in_place();
        m
    }

    fn order_rows_in_place(&mut self) {
        for bottom in (0..self.nrows()).rev() {
            let mut highest_col = 0;
            let mut highest_row = bottom;
            for i in (0..=bottom).rev() {
                let col = self.leader_column_unchecked(i);
                if col >= highest_col {
                    highest_col = col;
                    highest_row = i;
                }
            }
            self.swap_rows_unchecked(highest_row, bottom);
        }
    }

    /// Copy with every zero row moved to the bottom, nonzero rows keeping
    /// their relative order.
    pub fn shift_zeros(&self) -> Matrix {
        let (nonzero, zero): (Vec<&[f64]>, Vec<&[f64]>) = self
            .rows()
            .partition(|row| row.iter().any(|v| *v != 0.0));
        let vals = nonzero
            .into_iter()
            .chain(zero)
            .flat_map(|row| row.iter().copied())
            .collect();
        Matrix::from_parts(self.nrows(), self.ncols(), vals)
    }

    /// Row-echelon form: each leader is 1, strictly right of the leader above
    /// it, with zeros below it, and zero rows at the bottom. Entries above the
    /// pivots are left as they are.
    pub fn row_echelon(&self) -> Matrix {
        let mut m = self.clone();
        for i in 0..m.nrows() {
            m.order_rows_in_place();
            let Some((col, lead)) = m.leader_entry(i) else {
                continue;
            };
            trace!("row_echelon: pivot {lead} at ({i}, {col})");

            m.scale_row_unchecked(i, 1.0 / lead);
            // lead * (1 / lead) may be off by an ulp
            m.row_slice_mut(i)[col] = 1.0;

            for j in i + 1..m.nrows() {
                let factor = m[(j, col)];
                if factor != 0.0 {
                    m.add_scaled_row_unchecked(j, -factor, i);
                }
            }
        }
        m.order_rows_in_place();
        m
    }

    /// Reduced row-echelon form: row-echelon form with every pivot column
    /// zero outside its pivot.
    pub fn reduced_row_echelon(&self) -> Matrix {
        let mut m = self.row_echelon();
        for i in (1..m.nrows()).rev() {
            let Some((col, _)) = m.leader_entry(i) else {
                continue;
            };
            trace!("reduced_row_echelon: clearing column {col} above row {i}");
            for j in 0..i {
                let factor = m[(j, col)];
                if factor != 0.0 {
                    m.add_scaled_row_unchecked(j, -factor, i);
                }
            }
        }
        m
    }
}
