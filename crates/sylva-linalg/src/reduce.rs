use crate::{error::LinalgError, precision::PRECISION, Matrix};

impl Matrix {
    /// Reduces the matrix to right (upper) triangular form.
    ///
    /// Only row additions are used, never scaling or swapping, so the
    /// determinant of a square input is preserved exactly. A zero pivot is
    /// repaired by adding the first lower row with a non-zero entry in that
    /// column; if there is none the column is left as is.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([
    ///     [1.0, -3.0, 1.0, 4.0],
    ///     [2.0, -8.0, 8.0, -2.0],
    ///     [-6.0, 3.0, -15.0, 9.0],
    /// ]);
    /// assert_eq!(
    ///     m.to_right_triangular(),
    ///     Matrix::from_rows([
    ///         [1.0, -3.0, 1.0, 4.0],
    ///         [0.0, -2.0, 6.0, -10.0],
    ///         [0.0, 0.0, -54.0, 108.0],
    ///     ])
    /// );
    /// ```
    pub fn to_right_triangular(&self) -> Matrix {
        let mut m = self.to_grid();
        let cols = self.cols();
        for i in 0..self.rows().min(cols) {
            if m[i][i] == 0.0 {
                if let Some(j) = (i + 1..m.len()).find(|&j| m[j][i] != 0.0) {
                    let (head, tail) = m.split_at_mut(j);
                    for (a, b) in head[i].iter_mut().zip(&tail[0]) {
                        *a += b;
                    }
                }
            }
            if m[i][i] == 0.0 {
                continue;
            }
            let (head, tail) = m.split_at_mut(i + 1);
            let pivot = &head[i];
            for row in tail.iter_mut() {
                let multiplier = row[i] / pivot[i];
                for p in 0..cols {
                    row[p] = if p <= i {
                        0.0
                    } else {
                        row[p] - pivot[p] * multiplier
                    };
                }
            }
        }
        Matrix::from_shape_fn(self.rows(), cols, |i, j| m[i][j])
    }

    /// Determinant of a square matrix.
    ///
    /// The 0x0 matrix has determinant 1.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices.
    pub fn determinant(&self) -> Result<f64, LinalgError> {
        self.ensure_square()?;
        if self.rows() == 0 {
            return Ok(1.0);
        }
        Ok(self
            .to_right_triangular()
            .leading_diagonal()
            .as_slice()
            .iter()
            .product())
    }

    /// Alias of [`Matrix::determinant`].
    #[inline]
    pub fn det(&self) -> Result<f64, LinalgError> {
        self.determinant()
    }

    /// Whether the matrix is square with a determinant of exactly zero.
    pub fn is_singular(&self) -> bool {
        self.determinant().is_ok_and(|d| d == 0.0)
    }

    /// Number of linearly independent rows, using [`PRECISION`] as the zero threshold.
    pub fn rank(&self) -> usize {
        self.rank_with(PRECISION)
    }

    /// Number of rows of the triangular form holding an element with magnitude above `epsilon`.
    pub fn rank_with(&self, epsilon: f64) -> usize {
        let triangular = self.to_right_triangular();
        (0..triangular.rows())
            .filter_map(|i| triangular.row_slice(i))
            .filter(|row| row.iter().any(|x| x.abs() > epsilon))
            .count()
    }

    /// Inverse of a square, non-singular matrix by Gauss-Jordan elimination.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for rectangular matrices and
    /// [`LinalgError::Singular`] when the determinant is zero.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverse().unwrap();
    /// assert!(inv.eql(&Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]), 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Matrix, LinalgError> {
        if self.determinant()? == 0.0 {
            log::debug!("refusing to invert a singular {}x{} matrix", self.rows(), self.cols());
            return Err(LinalgError::Singular);
        }
        let n = self.rows();
        let mut m = self
            .augment(&Matrix::identity(n))?
            .to_right_triangular()
            .to_grid();
        for i in (0..n).rev() {
            let divisor = m[i][i];
            m[i].iter_mut().for_each(|x| *x /= divisor);
            let (head, tail) = m.split_at_mut(i);
            let pivot = &tail[0];
            for row in head.iter_mut() {
                let factor = row[i];
                for (x, p) in row.iter_mut().zip(pivot) {
                    *x -= p * factor;
                }
            }
        }
        Ok(Matrix::from_shape_fn(n, n, |i, j| m[i][n + j]))
    }
}
