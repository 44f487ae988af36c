use crate::{error::LinalgError, Matrix, Vector};

impl Matrix {
    /// Swaps rows and columns.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_shape_fn(self.cols(), self.rows(), |i, j| self.at(j, i))
    }

    /// Sum of the diagonal elements of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices.
    pub fn trace(&self) -> Result<f64, LinalgError> {
        Ok(self.diagonal()?.as_slice().iter().sum())
    }

    /// The main diagonal of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices.
    pub fn diagonal(&self) -> Result<Vector, LinalgError> {
        self.ensure_square()?;
        Ok(self.leading_diagonal())
    }

    /// Elements `(i, i)` for `i < min(rows, cols)`, defined for any shape.
    pub(crate) fn leading_diagonal(&self) -> Vector {
        let n = self.rows().min(self.cols());
        Vector::new((0..n).map(|i| self.at(i, i)).collect())
    }

    /// Appends the columns of `other` to the right of `self`.
    ///
    /// Augmenting the 0x0 matrix returns a copy of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the row counts differ.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let a = Matrix::from_rows([[1.0], [2.0]]);
    /// let b = Matrix::from_rows([[3.0, 4.0], [5.0, 6.0]]);
    /// assert_eq!(
    ///     a.augment(&b).unwrap(),
    ///     Matrix::from_rows([[1.0, 3.0, 4.0], [2.0, 5.0, 6.0]])
    /// );
    /// ```
    pub fn augment(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if self.shape() == [0, 0] {
            return Ok(other.clone());
        }
        if self.rows() != other.rows() {
            return Err(LinalgError::dimension_mismatch(
                "cannot augment matrices with different row counts",
                &[self.rows(), other.cols()],
                &other.shape(),
            ));
        }
        let cols = self.cols() + other.cols();
        Ok(Matrix::from_shape_fn(self.rows(), cols, |i, j| {
            if j < self.cols() {
                self.at(i, j)
            } else {
                other.at(i, j - self.cols())
            }
        }))
    }

    /// Appends `v` as an extra column.
    pub fn augment_vector(&self, v: &Vector) -> Result<Matrix, LinalgError> {
        self.augment(&Matrix::from(v))
    }

    /// Copies the block between the given 1-indexed rows and columns, inclusive.
    ///
    /// An end index of `0` extends the block to the last row or column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfRange`] if a bound is outside the matrix or an
    /// end precedes its start.
    pub fn slice(
        &self,
        start_row: usize,
        end_row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Result<Matrix, LinalgError> {
        let (r0, r1) = resolve_bounds(start_row, end_row, self.rows())?;
        let (c0, c1) = resolve_bounds(start_col, end_col, self.cols())?;
        Ok(Matrix::from_shape_fn(r1 - r0, c1 - c0, |i, j| {
            self.at(r0 + i, c0 + j)
        }))
    }

    /// Copies an `n_rows` x `n_cols` block whose top-left corner is the 1-indexed
    /// `(start_row, start_col)`.
    ///
    /// Indices wrap around the edges of the matrix, so the block may be larger
    /// than the matrix itself.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(
    ///     m.minor(2, 2, 2, 3).unwrap(),
    ///     Matrix::from_rows([[4.0, 3.0, 4.0], [2.0, 1.0, 2.0]])
    /// );
    /// ```
    pub fn minor(
        &self,
        start_row: usize,
        start_col: usize,
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Matrix, LinalgError> {
        if start_row < 1 || start_row > self.rows() {
            return Err(LinalgError::out_of_range(start_row, self.rows()));
        }
        if start_col < 1 || start_col > self.cols() {
            return Err(LinalgError::out_of_range(start_col, self.cols()));
        }
        Ok(Matrix::from_shape_fn(n_rows, n_cols, |i, j| {
            self.at(
                (start_row - 1 + i) % self.rows(),
                (start_col - 1 + j) % self.cols(),
            )
        }))
    }

    /// Zeroes every element below the `k`-th diagonal.
    ///
    /// `k = 0` keeps the main diagonal, `k = 1` keeps only the strict upper part.
    pub fn triu(&self, k: isize) -> Matrix {
        self.map_indexed(|x, i, j| {
            if (j as isize) < i as isize + k {
                0.0
            } else {
                x
            }
        })
    }

    /// [`Matrix::to_right_triangular`] under its other name.
    pub fn to_upper_triangular(&self) -> Matrix {
        self.to_right_triangular()
    }

    /// Frobenius norm.
    pub fn magnitude(&self) -> f64 {
        self.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Frobenius norm of the elements strictly above the main diagonal.
    pub fn strict_upper_magnitude(&self) -> f64 {
        self.triu(1).magnitude()
    }

    /// Flattens the matrix column by column.
    pub fn unroll(&self) -> Vector {
        Vector::new(
            (0..self.cols())
                .flat_map(|j| (0..self.rows()).map(move |i| (i, j)))
                .map(|(i, j)| self.at(i, j))
                .collect(),
        )
    }

    /// 1-indexed column of the largest element in each row.
    pub fn max_column_indexes(&self) -> Vec<usize> {
        self.row_extremes(|candidate, best| candidate > best)
            .into_iter()
            .map(|(j, _)| j)
            .collect()
    }

    /// 1-indexed column of the smallest element in each row.
    pub fn min_column_indexes(&self) -> Vec<usize> {
        self.row_extremes(|candidate, best| candidate < best)
            .into_iter()
            .map(|(j, _)| j)
            .collect()
    }

    /// Largest element of each row.
    pub fn max_columns(&self) -> Vector {
        Vector::new(
            self.row_extremes(|candidate, best| candidate > best)
                .into_iter()
                .map(|(_, x)| x)
                .collect(),
        )
    }

    /// Smallest element of each row.
    pub fn min_columns(&self) -> Vector {
        Vector::new(
            self.row_extremes(|candidate, best| candidate < best)
                .into_iter()
                .map(|(_, x)| x)
                .collect(),
        )
    }

    /// Mean of each column.
    pub fn column_means(&self) -> Vector {
        let n = self.rows() as f64;
        Vector::new(
            (0..self.cols())
                .map(|j| (0..self.rows()).map(|i| self.at(i, j)).sum::<f64>() / n)
                .collect(),
        )
    }

    fn row_extremes(&self, better: impl Fn(f64, f64) -> bool) -> Vec<(usize, f64)> {
        (0..self.rows())
            .filter_map(|i| self.row_slice(i))
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.iter()
                    .enumerate()
                    .skip(1)
                    .fold((1, row[0]), |(bj, bx), (j, &x)| {
                        if better(x, bx) {
                            (j + 1, x)
                        } else {
                            (bj, bx)
                        }
                    })
            })
            .collect()
    }
}

/// Converts 1-indexed inclusive bounds into a 0-indexed half-open range.
fn resolve_bounds(start: usize, end: usize, size: usize) -> Result<(usize, usize), LinalgError> {
    if start < 1 || start > size {
        return Err(LinalgError::out_of_range(start, size));
    }
    let end = if end == 0 { size } else { end };
    if end < start || end > size {
        return Err(LinalgError::out_of_range(end, size));
    }
    Ok((start - 1, end))
}
