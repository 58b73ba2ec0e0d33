//! Elementwise and matrix arithmetic.
//!
//! Every operation here is a pure function over the operands, expressed only
//! through the [`Element`] operations and identities. Dimension checks fail
//! fast with [`MatrixError::DimensionMismatch`]; nothing is computed
//! partially.

use crate::core::traits::Element;
use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    fn require_same_shape(&self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.nrows(),
                left_cols: self.ncols(),
                right_rows: other.nrows(),
                right_cols: other.ncols(),
            });
        }
        Ok(())
    }

    /// Elementwise sum of two equally sized matrices.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless both shapes agree.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.require_same_shape(other)?;
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() + other[(i, j)].clone()
        }))
    }

    /// Elementwise difference of two equally sized matrices.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless both shapes agree.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.require_same_shape(other)?;
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() - other[(i, j)].clone()
        }))
    }

    /// Matrix product: `out[(i, j)] = Σ_k self[(i, k)] * other[(k, j)]`,
    /// accumulated from `T::zero()`.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`] unless `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.nrows(),
                left_cols: self.ncols(),
                right_rows: other.nrows(),
                right_cols: other.ncols(),
            });
        }
        Ok(Matrix::from_fn(self.nrows(), other.ncols(), |i, j| {
            let mut acc = T::zero();
            for k in 0..self.ncols() {
                acc = acc + self[(i, k)].clone() * other[(k, j)].clone();
            }
            acc
        }))
    }

    /// Multiply every element by `k`. Scalar-times-matrix and
    /// matrix-times-scalar are the same operation.
    pub fn scale(&self, k: &T) -> Matrix<T> {
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            self[(i, j)].clone() * k.clone()
        })
    }

    /// Divide every element by `k`, implemented as multiplication by `k`'s
    /// multiplicative inverse `T::one() / k`. Division by zero behaves
    /// however `T`'s own division does (a panic for integers, `inf`/`NaN`
    /// for floats).
    pub fn div_scalar(&self, k: &T) -> Matrix<T> {
        self.scale(&(T::one() / k.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_row_vectors() {
        let a = Matrix::from_rows(vec![vec![3, 4]]);
        let b = Matrix::from_rows(vec![vec![2, 0]]);
        assert_eq!(a.add(&b).unwrap(), Matrix::from_rows(vec![vec![5, 4]]));
    }

    #[test]
    fn add_shape_mismatch() {
        let a = Matrix::<i32>::new(3, 3);
        let b = Matrix::<i32>::new(1, 2);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                left_rows: 3,
                left_cols: 3,
                right_rows: 1,
                right_cols: 2
            })
        );
    }

    #[test]
    fn matmul_inner_dimension() {
        // (2x3) * (3x2) -> 2x2
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![58, 64], vec![139, 154]]));
        assert!(b.matmul(&b).is_err());
    }

    #[test]
    fn matmul_zero_inner_dimension_gives_zeros() {
        let a = Matrix::<i32>::new(2, 0);
        let b = Matrix::<i32>::new(0, 3);
        assert_eq!(a.matmul(&b).unwrap(), Matrix::new(2, 3));
    }

    #[test]
    fn scale_and_div_scalar() {
        let a = Matrix::from_rows(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
        assert_eq!(
            a.scale(&2.0),
            Matrix::from_rows(vec![vec![2.0, -4.0], vec![1.0, 8.0]])
        );
        assert_eq!(
            a.div_scalar(&2.0),
            Matrix::from_rows(vec![vec![0.5, -1.0], vec![0.25, 2.0]])
        );
    }
}
