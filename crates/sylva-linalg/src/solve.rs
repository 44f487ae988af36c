use crate::{error::LinalgError, Matrix, Vector};

impl Matrix {
    /// Solves `A x = b` for a square `A` through its LU factorization.
    ///
    /// With `P A = L U`, the system becomes `L U x = P b`: forward substitution
    /// gives `y` from `L y = P b`, back substitution gives `x` from `U x = y`.
    ///
    /// # Errors
    ///
    /// - [`LinalgError::NotSquare`] if `A` is rectangular.
    /// - [`LinalgError::DimensionMismatch`] if `b` does not have one entry per row.
    /// - [`LinalgError::Singular`] if `U` has a zero on its diagonal.
    ///
    /// # Example
    ///
    /// ```
    /// use sylva_linalg::{Matrix, Vector};
    ///
    /// let a = Matrix::from_rows([[2.0, 3.0], [4.0, 4.0]]);
    /// let x = a.solve(&Vector::from([2.0, 1.0])).unwrap();
    /// assert!(x.eql(&Vector::from([-1.25, 1.5]), 1e-12));
    /// ```
    pub fn solve(&self, b: &Vector) -> Result<Vector, LinalgError> {
        self.ensure_square()?;
        self.ensure_rhs(b)?;

        let lu = self.lu();
        if lu.u.leading_diagonal().as_slice().contains(&0.0) {
            log::debug!("cannot solve a singular {}x{} system", self.rows(), self.cols());
            return Err(LinalgError::Singular);
        }
        let pb = lu.p.multiply_vector(b)?;
        let y = lu.l.forward_substitute(&pb)?;
        lu.u.back_substitute(&y)
    }

    /// Solves `L x = b` for a lower triangular `L`.
    ///
    /// The diagonal need not be unit; elements above it are ignored.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] or [`LinalgError::DimensionMismatch`] for
    /// incompatible shapes, [`LinalgError::InvalidOperation`] for a zero on the diagonal.
    pub fn forward_substitute(&self, b: &Vector) -> Result<Vector, LinalgError> {
        self.ensure_square()?;
        self.ensure_rhs(b)?;
        let b = b.as_slice();
        let mut x = vec![0.0; self.rows()];
        for i in 0..self.rows() {
            let w: f64 = (0..i).map(|j| self.at(i, j) * x[j]).sum();
            x[i] = (b[i] - w) / self.pivot(i, "forward_substitute")?;
        }
        Ok(Vector::new(x))
    }

    /// Solves `U x = b` for an upper triangular `U`.
    ///
    /// Elements below the diagonal are ignored.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] or [`LinalgError::DimensionMismatch`] for
    /// incompatible shapes, [`LinalgError::InvalidOperation`] for a zero on the diagonal.
    pub fn back_substitute(&self, b: &Vector) -> Result<Vector, LinalgError> {
        self.ensure_square()?;
        self.ensure_rhs(b)?;
        let n = self.rows();
        let b = b.as_slice();
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let w: f64 = (i + 1..n).map(|j| self.at(i, j) * x[j]).sum();
            x[i] = (b[i] - w) / self.pivot(i, "back_substitute")?;
        }
        Ok(Vector::new(x))
    }

    fn ensure_rhs(&self, b: &Vector) -> Result<(), LinalgError> {
        if b.dimensions() != self.rows() {
            return Err(LinalgError::dimension_mismatch(
                "right-hand side must have one entry per row",
                &[self.rows()],
                &[b.dimensions()],
            ));
        }
        Ok(())
    }

    fn pivot(&self, i: usize, operation: &str) -> Result<f64, LinalgError> {
        let d = self.at(i, i);
        if d == 0.0 {
            return Err(LinalgError::invalid_operation(
                operation,
                format!("zero on the diagonal at row {}", i + 1),
            ));
        }
        Ok(d)
    }
}
