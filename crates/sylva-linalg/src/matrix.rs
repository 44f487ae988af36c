use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use rand::Rng;

use crate::{error::LinalgError, Vector};

/// An immutable dense matrix of `f64` values.
///
/// The elements are stored row-major in a single contiguous buffer. Every
/// transforming operation allocates and returns a fresh matrix; the receiver
/// is never modified.
///
/// # Indexing
///
/// The element accessors [`Matrix::e`], [`Matrix::row`] and [`Matrix::col`]
/// are 1-indexed, matching mathematical notation. The raw buffer views
/// ([`Matrix::as_slice`], [`Matrix::row_slice`]) are 0-indexed.
///
/// # Example
///
/// ```
/// use sylva_linalg::Matrix;
///
/// let m = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.shape(), [2, 2]);
/// assert_eq!(m.e(2, 1), Some(3.0));
/// assert_eq!(m.e(3, 1), None);
/// assert_eq!(m.determinant().unwrap(), -2.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a grid of rows.
    ///
    /// An empty grid yields the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRows`] if the rows are not all the same length.
    pub fn new(grid: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in grid.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from fixed-size rows.
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape(), [2, 3]);
    /// ```
    pub fn from_rows<const R: usize, const C: usize>(grid: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: grid.iter().flatten().copied().collect(),
        }
    }

    /// Creates a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LinalgError> {
        if data.len() != rows * cols {
            return Err(LinalgError::dimension_mismatch(
                "buffer length does not match the requested shape",
                &[rows * cols],
                &[data.len()],
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Wraps a row-major buffer whose length is known to be `rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Creates a matrix by calling `f(row, col)` (0-based) for every element.
    pub fn from_shape_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { rows, cols, data }
    }

    /// Interprets a flat sequence as a column vector.
    ///
    /// An empty sequence yields the 0x0 matrix.
    pub fn from_column(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![1.0; rows * cols],
        }
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_shape_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Square matrix with `values` on its diagonal and zeros elsewhere.
    pub fn from_diagonal(values: &[f64]) -> Self {
        let n = values.len();
        Self::from_shape_fn(n, n, |i, j| if i == j { values[i] } else { 0.0 })
    }

    /// Matrix with elements drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.random::<f64>()).collect();
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Borrow the row-major element buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Borrow the 0-indexed row `i`, or `None` when out of range.
    #[inline]
    pub fn row_slice(&self, i: usize) -> Option<&[f64]> {
        (i < self.rows).then(|| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Copies the elements into a grid of rows.
    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Element at 0-indexed position `(i, j)` without bounds checks beyond the slice's own.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    /// Returns the element at the 1-indexed position `(i, j)`, or `None` when out of range.
    pub fn e(&self, i: usize, j: usize) -> Option<f64> {
        if i < 1 || j < 1 || i > self.rows || j > self.cols {
            return None;
        }
        Some(self.at(i - 1, j - 1))
    }

    /// Copies the 1-indexed row `i` into a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfRange`] unless `1 <= i <= rows`.
    pub fn row(&self, i: usize) -> Result<Vector, LinalgError> {
        if i < 1 || i > self.rows {
            return Err(LinalgError::out_of_range(i, self.rows));
        }
        Ok(Vector::from(&self.data[(i - 1) * self.cols..i * self.cols]))
    }

    /// Copies the 1-indexed column `j` into a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfRange`] unless `1 <= j <= cols`.
    pub fn col(&self, j: usize) -> Result<Vector, LinalgError> {
        if j < 1 || j > self.cols {
            return Err(LinalgError::out_of_range(j, self.cols));
        }
        Ok(Vector::new(
            (0..self.rows).map(|i| self.at(i, j - 1)).collect(),
        ))
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether both matrices have the same shape.
    #[inline]
    pub fn is_same_size_as(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
    }

    /// Whether `self × other` is defined.
    #[inline]
    pub fn can_multiply_from_left(&self, other: &Matrix) -> bool {
        self.cols == other.rows
    }

    pub(crate) fn ensure_square(&self) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_same_size(&self, other: &Matrix, op: &str) -> Result<(), LinalgError> {
        if !self.is_same_size_as(other) {
            return Err(LinalgError::dimension_mismatch(
                format!("cannot {op} matrices of different shapes"),
                &self.shape(),
                &other.shape(),
            ));
        }
        Ok(())
    }

    /// Element-wise comparison within an absolute tolerance.
    ///
    /// Matrices of different shapes are never equal.
    pub fn eql(&self, other: &Matrix, epsilon: f64) -> bool {
        self.is_same_size_as(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// [`Matrix::eql`] with [`APPROX_PRECISION`](crate::precision::APPROX_PRECISION).
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.eql(other, crate::precision::APPROX_PRECISION)
    }
}

impl From<&Vector> for Matrix {
    fn from(v: &Vector) -> Self {
        Matrix::from_column(v.as_slice())
    }
}

impl From<Vector> for Matrix {
    fn from(v: Vector) -> Self {
        Matrix::from(&v)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(grid: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::new(grid)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.at(i, j))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.is_same_size_as(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.is_same_size_as(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
