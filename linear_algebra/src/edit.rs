use crate::{AlgebraError, Matrix};

impl Matrix {
    /// Copy of the matrix without row `r`.
    pub fn delete_row(&self, r: usize) -> Result<Matrix, AlgebraError> {
        if self.nrows() <= 1 {
            return Err(AlgebraError::InvalidOperation(
                "cannot delete a row from a single-row matrix",
            ));
        }
        self.check_row(r)?;
        let vals = self
            .rows()
            .enumerate()
            .filter(|(i, _)| *i != r)
            .flat_map(|(_, row)| row.iter().copied())
            .collect();
        Ok(Matrix::from_parts(self.nrows() - 1, self.ncols(), vals))
    }

    /// Copy of the matrix without column `c`.
    pub fn delete_column(&self, c: usize) -> Result<Matrix, AlgebraError> {
        if self.ncols() <= 1 {
            return Err(AlgebraError::InvalidOperation(
                "cannot delete a column from a single-column matrix",
            ));
        }
        self.check_index(0, c)?;
        let vals = self
            .rows()
            .flat_map(|row| row[..c].iter().chain(&row[c + 1..]).copied())
            .collect();
        Ok(Matrix::from_parts(self.nrows(), self.ncols() - 1, vals))
    }

    /// The matrix with row `r` and column `c` removed.
    ///
    /// A 1x1 matrix has no minor and gives `InvalidOperation`.
    pub fn minor(&self, r: usize, c: usize) -> Result<Matrix, AlgebraError> {
        self.check_index(r, c)?;
        self.delete_row(r)?.delete_column(c)
    }
}
