//! Dense generic matrix storage.
//!
//! `Matrix<T>` owns a row-major `Vec<T>` with dimensions fixed at
//! construction; there is no resize. Either dimension may be zero, and the
//! 0x0 matrix is the canonical empty matrix — it is what [`Matrix::empty`]
//! and `Default` produce, it is square, and its determinant is `T::one()`.
//! Construction from caller-supplied data always deep-copies, so a matrix
//! never aliases storage it does not own.
//!
//! A matrix is `Send` and `Sync` whenever `T` is. There is no internal
//! locking: reading a shared instance from several threads is fine, but
//! mutating it through [`Matrix::set`] while another thread reads is the
//! caller's responsibility to prevent.

use crate::core::traits::Element;
use crate::error::MatrixError;

/// A dense `rows x cols` matrix of `T`, indexed `(row, column)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    // row-major: element (i, j) lives at data[i * cols + j]
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// The 0x0 empty matrix.
    pub fn empty() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell, row by row.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    /// Build a matrix from a grid of rows, copying the data.
    ///
    /// An empty grid yields the 0x0 empty matrix.
    ///
    /// # Panics
    /// Panics if the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            assert_eq!(
                row.len(),
                ncols,
                "row {i} has length {}, expected {ncols}",
                row.len()
            );
            data.extend(row);
        }
        Matrix {
            rows: nrows,
            cols: ncols,
            data,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow element `(i, j)`.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfBounds`] if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, MatrixError> {
        if i < self.rows && j < self.cols {
            Ok(&self.data[i * self.cols + j])
        } else {
            Err(self.out_of_bounds(i, j))
        }
    }

    /// Overwrite element `(i, j)`.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfBounds`] if either index is out of range.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), MatrixError> {
        if i < self.rows && j < self.cols {
            self.data[i * self.cols + j] = value;
            Ok(())
        } else {
            Err(self.out_of_bounds(i, j))
        }
    }

    fn out_of_bounds(&self, i: usize, j: usize) -> MatrixError {
        MatrixError::IndexOutOfBounds {
            row: i,
            col: j,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Element> Matrix<T> {
    /// A `rows x cols` matrix with every element `T::zero()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix::from_fn(rows, cols, |_, _| T::zero())
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Clone> Matrix<T> {
    /// New matrix with `out[(j, i)] = self[(i, j)]`.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self[(j, i)].clone())
    }

    /// The `(rows-1) x (cols-1)` matrix left after deleting row `i` and
    /// column `j`, with the relative order of the remaining rows and columns
    /// preserved. A 1x1 matrix yields the 0x0 empty matrix.
    ///
    /// # Panics
    /// Panics if `i >= nrows()` or `j >= ncols()`.
    pub fn submatrix(&self, i: usize, j: usize) -> Matrix<T> {
        assert!(
            i < self.rows && j < self.cols,
            "submatrix({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        Matrix::from_fn(self.rows - 1, self.cols - 1, |m, n| {
            let src_i = if m >= i { m + 1 } else { m };
            let src_j = if n >= j { n + 1 } else { n };
            self[(src_i, src_j)].clone()
        })
    }
}

impl<T> Default for Matrix<T> {
    /// Same as [`Matrix::empty`].
    fn default() -> Self {
        Matrix::empty()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panicking counterpart of [`Matrix::get`].
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    /// Panicking counterpart of [`Matrix::set`].
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}
