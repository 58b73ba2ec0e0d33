//! Determinant, cofactor matrix, adjugate inverse, and trace.
//!
//! The determinant is computed by recursive Laplace expansion along row 0,
//! which costs O(n!) scalar multiplications for an n x n matrix. That is
//! acceptable for the small matrices this crate targets; there is
//! deliberately no Gaussian-elimination fast path and no pivoting.

use crate::core::traits::Element;
use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    fn require_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Determinant by Laplace expansion along row 0.
    ///
    /// The 0x0 empty matrix has determinant `T::one()`, which is also the
    /// base case of the recursion. 1x1 and 2x2 matrices take closed-form
    /// shortcuts that agree with the general expansion.
    ///
    /// Runs in O(n!) scalar multiplications; keep `n` small.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] if `nrows() != ncols()`.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.require_square()?;
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> T {
        match self.nrows() {
            0 => T::one(),
            1 => self[(0, 0)].clone(),
            2 => {
                self[(0, 0)].clone() * self[(1, 1)].clone()
                    - self[(1, 0)].clone() * self[(0, 1)].clone()
            }
            _ => self.expand_row0(),
        }
    }

    // General Laplace expansion along row 0, valid for any square n >= 1.
    // The alternating sign is applied by adding or subtracting the term, so
    // element types need no negation of their own.
    fn expand_row0(&self) -> T {
        let mut det = T::zero();
        for j in 0..self.ncols() {
            let term = self[(0, j)].clone() * self.submatrix(0, j).det_unchecked();
            det = if j % 2 == 0 { det + term } else { det - term };
        }
        det
    }

    /// Matrix of cofactors: `out[(i, j)]` is the determinant of
    /// [`submatrix(i, j)`](Matrix::submatrix), negated when `i + j` is odd.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] if `nrows() != ncols()`.
    pub fn cofactor(&self) -> Result<Matrix<T>, MatrixError> {
        self.require_square()?;
        Ok(Matrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            let minor = self.submatrix(i, j).det_unchecked();
            if (i + j) % 2 == 0 {
                minor
            } else {
                T::zero() - minor
            }
        }))
    }

    /// Inverse via the adjugate: the transpose of the cofactor matrix,
    /// divided by the determinant.
    ///
    /// The determinant is recovered from the already-computed cofactor row 0
    /// (`Σ_j self[(0, j)] * cof[(0, j)]`) rather than by a second recursive
    /// pass over the whole matrix.
    ///
    /// A determinant equal to `T::zero()` is rejected as
    /// [`MatrixError::Singular`]. For float element types this catches only
    /// exactly-zero determinants; a nearly singular matrix still inverts,
    /// with correspondingly large entries.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] if `nrows() != ncols()`;
    /// [`MatrixError::Singular`] if the determinant is `T::zero()`.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        let cof = self.cofactor()?;
        if self.nrows() == 0 {
            // 0x0: determinant is one, the adjugate is empty
            return Ok(Matrix::empty());
        }
        let mut det = T::zero();
        for j in 0..self.ncols() {
            det = det + self[(0, j)].clone() * cof[(0, j)].clone();
        }
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        Ok(cof.transpose().div_scalar(&det))
    }

    /// Sum of the diagonal elements, accumulated from `T::zero()`.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`] if `nrows() != ncols()`.
    pub fn trace(&self) -> Result<T, MatrixError> {
        self.require_square()?;
        let mut sum = T::zero();
        for i in 0..self.nrows() {
            sum = sum + self[(i, i)].clone();
        }
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_of_empty_is_one() {
        assert_eq!(Matrix::<f64>::empty().determinant(), Ok(1.0));
        assert_eq!(Matrix::<i64>::empty().determinant(), Ok(1));
    }

    #[test]
    fn determinant_requires_square() {
        let m = Matrix::<f64>::new(2, 3);
        assert_eq!(
            m.determinant(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
        assert!(m.cofactor().is_err());
        assert!(m.inverse().is_err());
        assert!(m.trace().is_err());
    }

    // The 1x1 and 2x2 arms of `det_unchecked` are shortcuts; they must give
    // exactly what the general row-0 expansion gives for those sizes.
    #[test]
    fn shortcut_1x1_matches_general_expansion() {
        for v in [-7, 0, 42] {
            let m = Matrix::from_rows(vec![vec![v]]);
            assert_eq!(m.det_unchecked(), m.expand_row0());
        }
    }

    #[test]
    fn shortcut_2x2_matches_general_expansion() {
        let cases = [[3, 4, 7, 5], [0, 0, 0, 0], [1, -2, -3, 4], [5, 5, 5, 5]];
        for [a, b, c, d] in cases {
            let m = Matrix::from_rows(vec![vec![a, b], vec![c, d]]);
            assert_eq!(m.det_unchecked(), m.expand_row0());
            assert_eq!(m.det_unchecked(), a * d - c * b);
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn inverse_of_empty_is_empty() {
        assert_eq!(Matrix::<f64>::empty().inverse(), Ok(Matrix::empty()));
    }

    #[test]
    fn trace_3x3() {
        let m = Matrix::from_rows(vec![
            vec![-1, 0, 3],
            vec![11, 5, 2],
            vec![6, 12, -5],
        ]);
        assert_eq!(m.trace(), Ok(-1));
    }

    #[test]
    fn trace_of_empty_is_zero() {
        assert_eq!(Matrix::<i32>::empty().trace(), Ok(0));
    }
}
