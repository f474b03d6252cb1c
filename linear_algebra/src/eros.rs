//! Elementary row operations.
//!
//! These mutate the matrix in place and are the only row mutators used by the
//! elimination routines in [`echelon`](crate::echelon).

use crate::{AlgebraError, Matrix};

impl Matrix {
    /// `row[r] <- s * row[r]`
    pub fn scale_row(&mut self, r: usize, s: f64) -> Result<&mut Self, AlgebraError> {
        self.check_row(r)?;
        self.scale_row_unchecked(r, s);
        Ok(self)
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<&mut Self, AlgebraError> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.swap_rows_unchecked(i, j);
        Ok(self)
    }

    /// `row[dest] <- row[dest] + s * row[src]`
    pub fn add_scaled_row(
        &mut self,
        dest: usize,
        s: f64,
        src: usize,
    ) -> Result<&mut Self, AlgebraError> {
        self.check_row(dest)?;
        self.check_row(src)?;
        self.add_scaled_row_unchecked(dest, s, src);
        Ok(self)
    }

    // Row indices below are the caller's responsibility.

    pub(crate) fn scale_row_unchecked(&mut self, r: usize, s: f64) {
        self.row_slice_mut(r).iter_mut().for_each(|v| *v *= s);
    }

    pub(crate) fn swap_rows_unchecked(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let ncols = self.ncols();
        let (lo, hi) = (i.min(j), i.max(j));
        let (head, tail) = self.vals_mut().split_at_mut(hi * ncols);
        head[lo * ncols..(lo + 1) * ncols].swap_with_slice(&mut tail[..ncols]);
    }

    pub(crate) fn add_scaled_row_unchecked(&mut self, dest: usize, s: f64, src: usize) {
        let ncols = self.ncols();
        let vals = self.vals_mut();
        for c in 0..ncols {
            vals[dest * ncols + c] += s * vals[src * ncols + c];
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AlgebraError, Matrix};

    fn sample_matrix() -> Matrix {
        vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
            .try_into()
            .unwrap()
    }

    #[test]
    fn test_scale_row() {
        let mut m = sample_matrix();
        m.scale_row(1, -2.0).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, -6.0, -8.0, 5.0, 6.0]);
        assert!(matches!(
            m.scale_row(3, 1.0),
            Err(AlgebraError::IndexOutOfRange { row: 3, .. })
        ));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample_matrix();
        m.swap_rows(2, 0).unwrap();
        assert_eq!(m.as_slice(), &[5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
        m.swap_rows(1, 1).unwrap();
        assert_eq!(m.as_slice(), &[5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
        assert!(m.swap_rows(0, 3).is_err());
        assert!(m.swap_rows(3, 0).is_err());
    }

    #[test]
    fn test_add_scaled_row() {
        let mut m = sample_matrix();
        m.add_scaled_row(2, -5.0, 0).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 0.0, -4.0]);

        // a row may be added to itself
        m.add_scaled_row(1, 1.0, 1).unwrap();
        assert_eq!(m.row(1).unwrap(), &[6.0, 8.0]);

        assert!(m.add_scaled_row(0, 1.0, 3).is_err());
        assert!(m.add_scaled_row(3, 1.0, 0).is_err());
    }

    #[test]
    fn test_chaining() {
        let mut m = sample_matrix();
        m.swap_rows(0, 1)
            .unwrap()
            .scale_row(0, 0.5)
            .unwrap()
            .add_scaled_row(1, -2.0, 0)
            .unwrap();
        assert_eq!(m.as_slice(), &[1.5, 2.0, -2.0, -2.0, 5.0, 6.0]);
    }
}
