//! Operations on column vectors, `n x 1` matrices.

use crate::{AlgebraError, Matrix};

impl Matrix {
    fn check_same_column_vectors(
        &self,
        other: &Matrix,
        op: &'static str,
        nrows: Option<usize>,
    ) -> Result<(), AlgebraError> {
        let ok = self.is_column_vector()
            && self.shape() == other.shape()
            && nrows.map_or(true, |n| self.nrows() == n);
        if !ok {
            return Err(AlgebraError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Dot product of two column vectors of equal length.
    pub fn dot(&self, other: &Matrix) -> Result<f64, AlgebraError> {
        self.check_same_column_vectors(other, "dot", None)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cross product of two `3 x 1` vectors.
    ///
    /// Component `i` is the determinant of the 3x3 matrix whose first row is
    /// the `i`-th basis vector and whose other rows are `self` and `other`.
    pub fn cross(&self, other: &Matrix) -> Result<Matrix, AlgebraError> {
        self.check_same_column_vectors(other, "cross", Some(3))?;
        let mut intermediate = Matrix::zero(3, 3)?;
        intermediate
            .put_row(&self.transpose_row(), 1)?
            .put_row(&other.transpose_row(), 2)?;

        let mut res = Matrix::zero(3, 1)?;
        for i in 0..3 {
            let mut basis = Matrix::zero(1, 3)?;
            basis.put(1.0, 0, i)?;
            intermediate.put_row(&basis, 0)?;
            res.put(intermediate.determinant()?, i, 0)?;
        }
        Ok(res)
    }

    fn transpose_row(&self) -> Matrix {
        Matrix::from_parts(1, self.nrows(), self.as_slice().to_vec())
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.root_sum_of_squares()
    }
}

#[cfg(test)]
mod tests {
    use crate::{test_util::assert_close, AlgebraError, Matrix};

    fn v(vals: &[f64]) -> Matrix {
        Matrix::from_slice(vals, vals.len(), 1).unwrap()
    }

    #[test]
    fn test_dot() {
        assert_eq!(v(&[1.0, 2.0, 3.0]).dot(&v(&[4.0, 5.0, 6.0])).unwrap(), 32.0);
        assert!(matches!(
            v(&[1.0, 2.0]).dot(&v(&[1.0, 2.0, 3.0])),
            Err(AlgebraError::ShapeMismatch { op: "dot", .. })
        ));
        let row = Matrix::from_slice(&[1.0, 2.0], 1, 2).unwrap();
        assert!(row.dot(&row).is_err());
    }

    #[test]
    fn test_cross_basis() {
        let x = v(&[1.0, 0.0, 0.0]);
        let y = v(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap(), v(&[0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x).unwrap(), v(&[0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_cross() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        let c = a.cross(&b).unwrap();
        assert_eq!(c, v(&[-3.0, 6.0, -3.0]));
        // orthogonal to both inputs
        assert_eq!(c.dot(&a).unwrap(), 0.0);
        assert_eq!(c.dot(&b).unwrap(), 0.0);
        // inputs untouched
        assert_eq!(a, v(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_cross_shape() {
        assert!(matches!(
            v(&[1.0, 2.0]).cross(&v(&[3.0, 4.0])),
            Err(AlgebraError::ShapeMismatch { op: "cross", .. })
        ));
        let row = Matrix::from_slice(&[1.0, 2.0, 3.0], 1, 3).unwrap();
        assert!(row.cross(&row).is_err());
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(v(&[-2.0]).magnitude(), 2.0);

        let u = v(&[0.5, -1.5, 2.25, 3.0]);
        assert_close(u.magnitude(), u.dot(&u).unwrap().sqrt(), 1e-12);
    }
}
