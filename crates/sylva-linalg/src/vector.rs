use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::{error::LinalgError, Matrix};

/// An immutable sequence of `f64` values.
///
/// Whether a vector acts as a row or a column depends on the operation it is
/// passed to. Vectors are produced by row/column extraction, diagonal
/// extraction and the linear solver.
///
/// # Example
///
/// ```
/// use sylva_linalg::Vector;
///
/// let v = Vector::new(vec![3.0, 4.0]);
/// assert_eq!(v.e(1), Some(3.0));
/// assert_eq!(v.magnitude(), 5.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    elements: Vec<f64>,
}

impl Vector {
    /// Creates a new vector taking ownership of the elements.
    pub fn new(elements: Vec<f64>) -> Self {
        Self { elements }
    }

    /// Creates a vector of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self::new(vec![0.0; n])
    }

    /// Number of elements.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element at the 1-indexed position `i`, or `None` when out of range.
    #[inline]
    pub fn e(&self, i: usize) -> Option<f64> {
        i.checked_sub(1).and_then(|i| self.elements.get(i)).copied()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    /// Consume the vector and return its elements.
    pub fn into_vec(self) -> Vec<f64> {
        self.elements
    }

    /// Applies `f` to every element, returning a new vector.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(self.elements.iter().map(|&x| f(x)).collect())
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, LinalgError> {
        if self.dimensions() != other.dimensions() {
            return Err(LinalgError::dimension_mismatch(
                format!("cannot {op} vectors of different dimensions"),
                &[self.dimensions()],
                &[other.dimensions()],
            ));
        }
        Ok(Self::new(
            self.elements
                .iter()
                .zip(&other.elements)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Element-wise sum of two vectors of equal dimension.
    pub fn add(&self, other: &Vector) -> Result<Self, LinalgError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference of two vectors of equal dimension.
    pub fn subtract(&self, other: &Vector) -> Result<Self, LinalgError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiplies every element by `k`.
    pub fn scale(&self, k: f64) -> Self {
        self.map(|x| x * k)
    }

    /// Inner product of two vectors of equal dimension.
    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        Ok(self.zip_with(other, "take the dot product of", |a, b| a * b)?
            .elements
            .iter()
            .sum())
    }

    /// Cross product of two 3-vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless both vectors have 3 elements.
    pub fn cross(&self, other: &Vector) -> Result<Self, LinalgError> {
        match (self.elements.as_slice(), other.elements.as_slice()) {
            ([a1, a2, a3], [b1, b2, b3]) => Ok(Self::new(vec![
                a2 * b3 - a3 * b2,
                a3 * b1 - a1 * b3,
                a1 * b2 - a2 * b1,
            ])),
            _ => Err(LinalgError::dimension_mismatch(
                "cross product is defined for 3-vectors",
                &[3, 3],
                &[self.dimensions(), other.dimensions()],
            )),
        }
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.elements.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// The zero vector has no direction and yields an [`LinalgError::InvalidOperation`].
    pub fn to_unit_vector(&self) -> Result<Self, LinalgError> {
        let norm = self.magnitude();
        if norm == 0.0 {
            return Err(LinalgError::invalid_operation(
                "to_unit_vector",
                "the zero vector has no direction",
            ));
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Square matrix with this vector on its diagonal.
    pub fn to_diagonal_matrix(&self) -> Matrix {
        Matrix::from_diagonal(&self.elements)
    }

    /// Element-wise comparison within an absolute tolerance.
    pub fn eql(&self, other: &Vector, epsilon: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(elements: Vec<f64>) -> Self {
        Self::new(elements)
    }
}

impl From<&[f64]> for Vector {
    fn from(elements: &[f64]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(elements: [f64; N]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
