use crate::Matrix;

/// Reductions over all elements.
impl Matrix {
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.element_count()
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.as_slice().iter().map(|v| v * v).sum()
    }

    /// `sqrt(sum of squares)`, the Frobenius norm.
    pub fn root_sum_of_squares(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    pub fn root_mean_square(&self) -> f64 {
        (self.sum_of_squares() / self.element_count()).sqrt()
    }

    fn element_count(&self) -> f64 {
        let len = self.as_slice().len();
        // shape is validated on construction
        assert!(len > 0, "matrix has no elements");
        len as f64
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    fn sample_matrix() -> Matrix {
        vec![vec![1.0, -2.0], vec![3.0, 4.0]].try_into().unwrap()
    }

    #[test]
    fn test_sum_mean() {
        let m = sample_matrix();
        assert_eq!(m.sum(), 6.0);
        assert_eq!(m.mean(), 1.5);
    }

    #[test]
    fn test_squares() {
        let m = sample_matrix();
        assert_eq!(m.sum_of_squares(), 30.0);
        assert_eq!(m.root_sum_of_squares(), 30f64.sqrt());
        assert_eq!(m.root_mean_square(), 7.5f64.sqrt());
    }

    #[test]
    fn test_single_element() {
        let m = Matrix::from_data(vec![-3.0], 1, 1).unwrap();
        assert_eq!(m.mean(), -3.0);
        assert_eq!(m.root_mean_square(), 3.0);
    }
}
