use crate::AlgebraError;

/// Largest side length a matrix may have unless the caller raises the limit.
pub const MAX_SIDE_LENGTH: usize = 65536;

/// Deepest cofactor expansion attempted by default.
pub const MAX_EXPANSION_ORDER: usize = 256;

/// Size limits applied by constructors, the persistence reader and the
/// recursive determinant.
///
/// The defaults are meant for the small dense systems this crate targets; raise
/// them explicitly through the `*_with` variants of the affected operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum number of rows or columns.
    pub max_side: usize,
    /// Maximum order of a square matrix handed to cofactor expansion.
    pub max_expansion_order: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_side: MAX_SIDE_LENGTH,
            max_expansion_order: MAX_EXPANSION_ORDER,
        }
    }
}

impl Limits {
    /// Checks that `nrows x ncols` is a valid, allocatable shape and returns
    /// the number of elements.
    pub fn check_shape(&self, nrows: usize, ncols: usize) -> Result<usize, AlgebraError> {
        if nrows == 0 || ncols == 0 {
            return Err(AlgebraError::InvalidDimension(nrows, ncols));
        }
        let too_large = AlgebraError::SizeTooLarge {
            rows: nrows,
            cols: ncols,
            max: self.max_side,
        };
        if nrows > self.max_side || ncols > self.max_side {
            return Err(too_large);
        }
        nrows.checked_mul(ncols).ok_or(too_large)
    }

    pub(crate) fn check_expansion(&self, order: usize) -> Result<(), AlgebraError> {
        if order > self.max_expansion_order {
            return Err(AlgebraError::ExpansionTooDeep {
                order,
                limit: self.max_expansion_order,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_shape() {
        let limits = Limits::default();
        assert_eq!(limits.check_shape(2, 3).unwrap(), 6);
        assert_eq!(limits.check_shape(MAX_SIDE_LENGTH, 1).unwrap(), MAX_SIDE_LENGTH);
        assert!(matches!(
            limits.check_shape(0, 3),
            Err(AlgebraError::InvalidDimension(0, 3))
        ));
        assert!(matches!(
            limits.check_shape(3, 0),
            Err(AlgebraError::InvalidDimension(3, 0))
        ));
        assert!(matches!(
            limits.check_shape(MAX_SIDE_LENGTH + 1, 1),
            Err(AlgebraError::SizeTooLarge { .. })
        ));
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            max_side: 4,
            ..Limits::default()
        };
        assert!(limits.check_shape(4, 4).is_ok());
        assert!(matches!(
            limits.check_shape(5, 2),
            Err(AlgebraError::SizeTooLarge { rows: 5, cols: 2, max: 4 })
        ));
    }

    #[test]
    fn test_check_expansion() {
        let limits = Limits {
            max_expansion_order: 3,
            ..Limits::default()
        };
        assert!(limits.check_expansion(3).is_ok());
        assert!(matches!(
            limits.check_expansion(4),
            Err(AlgebraError::ExpansionTooDeep { order: 4, limit: 3 })
        ));
    }
}
