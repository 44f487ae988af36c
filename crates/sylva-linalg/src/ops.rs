use std::ops::{Div, Mul, Neg};

use crate::{error::LinalgError, Matrix, Vector};

impl Matrix {
    /// Applies `f` to every element, returning a new matrix.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).map(|x| x * x);
    /// assert_eq!(m, Matrix::from_rows([[1.0, 4.0], [9.0, 16.0]]));
    /// ```
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix::from_shape_fn(self.rows(), self.cols(), |i, j| f(self.at(i, j)))
    }

    /// Applies `f(value, row, col)` to every element; indices are 1-based.
    pub fn map_indexed(&self, f: impl Fn(f64, usize, usize) -> f64) -> Matrix {
        Matrix::from_shape_fn(self.rows(), self.cols(), |i, j| {
            f(self.at(i, j), i + 1, j + 1)
        })
    }

    /// Combines two matrices of the same shape element by element.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn zip_with(
        &self,
        other: &Matrix,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, LinalgError> {
        self.ensure_same_size(other, "combine")?;
        Ok(Matrix::from_shape_fn(self.rows(), self.cols(), |i, j| {
            f(self.at(i, j), other.at(i, j))
        }))
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.ensure_same_size(other, "add")?;
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.ensure_same_size(other, "subtract")?;
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn element_multiply(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.ensure_same_size(other, "element-wise multiply")?;
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise quotient.
    pub fn element_divide(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.ensure_same_size(other, "element-wise divide")?;
        self.zip_with(other, |a, b| a / b)
    }

    /// Multiplies every element by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Divides every element by `k`.
    pub fn div(&self, k: f64) -> Matrix {
        self.map(|x| x / k)
    }

    /// Matrix product `self × other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless `self.cols() == other.rows()`.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from_rows([[5.0], [6.0]]);
    /// assert_eq!(a.multiply(&b).unwrap(), Matrix::from_rows([[17.0], [39.0]]));
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if !self.can_multiply_from_left(other) {
            return Err(LinalgError::dimension_mismatch(
                "left operand columns must equal right operand rows",
                &[self.cols(), other.cols()],
                &other.shape(),
            ));
        }
        Ok(self.matmul(other))
    }

    /// Matrix product for operands already known to be conformant.
    pub(crate) fn matmul(&self, other: &Matrix) -> Matrix {
        debug_assert_eq!(self.cols(), other.rows());
        let n = self.cols();
        let mut data = vec![0.0; self.rows() * other.cols()];
        // chunk size must be non-zero; an empty buffer yields no chunks anyway
        for (i, out_row) in data.chunks_mut(other.cols().max(1)).enumerate() {
            for k in 0..n {
                let a = self.at(i, k);
                if a == 0.0 {
                    continue;
                }
                for (j, out) in out_row.iter_mut().enumerate() {
                    *out += a * other.at(k, j);
                }
            }
        }
        Matrix::from_parts(self.rows(), other.cols(), data)
    }

    /// Alias of [`Matrix::multiply`].
    #[inline]
    pub fn x(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.multiply(other)
    }

    /// Matrix-vector product, treating `v` as a column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless `v` has `self.cols()` elements.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Vector, LinalgError> {
        if v.dimensions() != self.cols() {
            return Err(LinalgError::dimension_mismatch(
                "vector length must equal the number of matrix columns",
                &[self.cols()],
                &[v.dimensions()],
            ));
        }
        let x = v.as_slice();
        Ok(Vector::new(
            (0..self.rows())
                .map(|i| (0..self.cols()).map(|j| self.at(i, j) * x[j]).sum())
                .collect(),
        ))
    }

    /// Rounds every element to the nearest integer.
    pub fn round(&self) -> Matrix {
        self.map(f64::round)
    }

    /// Replaces every element within `epsilon` of `value` by `value`.
    pub fn snap_to(&self, value: f64, epsilon: f64) -> Matrix {
        self.map(|x| if (x - value).abs() <= epsilon { value } else { x })
    }

    /// Element-wise natural logarithm.
    pub fn log(&self) -> Matrix {
        self.map(f64::ln)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().sum()
    }

    /// Element with the largest absolute value, keeping its sign.
    ///
    /// Returns `None` for an empty matrix.
    pub fn max(&self) -> Option<f64> {
        self.as_slice()
            .iter()
            .copied()
            .fold(None, |best, x| match best {
                Some(b) if f64::abs(b) >= x.abs() => Some(b),
                _ => Some(x),
            })
    }

    /// 1-indexed `(row, col)` of the first element equal to `value`, scanning row by row.
    pub fn index_of(&self, value: f64) -> Option<(usize, usize)> {
        self.as_slice()
            .iter()
            .position(|&x| x == value)
            .map(|k| (k / self.cols() + 1, k % self.cols() + 1))
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl Div<f64> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        Matrix::div(self, rhs)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}
