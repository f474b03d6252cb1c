//! Dense `f64` matrices with Gaussian elimination, cofactor determinants and
//! inverses, column vector operations and a minimal binary storage format.

mod config;
mod determinant;
mod echelon;
mod edit;
mod error;
pub mod eros;
pub mod io;
pub mod matrix;
pub mod ops;
mod stats;
mod vector;

#[cfg(test)]
mod test_util;

pub use config::{Limits, MAX_EXPANSION_ORDER, MAX_SIDE_LENGTH};
pub use error::AlgebraError;
pub use io::WriteMode;
pub use matrix::Matrix;
pub use ops::Transpose;
