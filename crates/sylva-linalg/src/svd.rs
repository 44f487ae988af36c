//! Singular value decomposition by repeated QR factorization.
//!
//! The iteration alternates QR factorizations of the working matrix and of its
//! transpose. Each sweep pushes weight from the strictly upper part onto the
//! diagonal; once the ratio `|strict upper| / |diagonal|` falls below the
//! configured tolerance the diagonal holds the singular values.
//!
//! The singular values are returned in the order the iteration produces them.
//! That order is usually, but not always, descending and is not re-sorted.

use crate::{precision::SvdConfig, Matrix};

/// Result of a singular value decomposition, `A = U × S × Vᵀ`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvdDecomposition {
    /// Left singular vectors, orthogonal, `rows x rows`.
    pub u: Matrix,
    /// Non-negative singular values on the diagonal of a `rows x cols` matrix.
    pub s: Matrix,
    /// Right singular vectors, orthogonal, `cols x cols`.
    pub v: Matrix,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Whether the residual fell below the tolerance before the sweep cap.
    pub converged: bool,
}

impl SvdDecomposition {
    /// The singular values in iteration order.
    pub fn singular_values(&self) -> Vec<f64> {
        self.s.leading_diagonal().into_vec()
    }
}

impl Matrix {
    /// Singular value decomposition with the default [`SvdConfig`].
    ///
    /// # Example
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let svd = a.svd();
    /// let usv = svd.u.multiply(&svd.s).unwrap().multiply(&svd.v.transpose()).unwrap();
    /// assert!(usv.eql(&a, 1e-10));
    /// ```
    pub fn svd(&self) -> SvdDecomposition {
        self.svd_with(&SvdConfig::default())
    }

    /// Singular value decomposition with explicit iteration limits.
    ///
    /// Reaching `max_iterations` is not an error: the best approximation
    /// available at that point is returned with `converged` set to `false`.
    pub fn svd_with(&self, config: &SvdConfig) -> SvdDecomposition {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            return SvdDecomposition {
                u: Matrix::identity(rows),
                s: Matrix::zeros(rows, cols),
                v: Matrix::identity(cols),
                iterations: 0,
                converged: true,
            };
        }

        let mut u = Matrix::identity(rows);
        let mut v = Matrix::identity(cols);
        let mut s = self.transpose();
        let mut iterations = 0;
        let mut converged = false;

        while iterations < config.max_iterations {
            iterations += 1;

            let qr = s.transpose().qr();
            s = qr.r;
            u = u.matmul(&qr.q);

            let qr = s.transpose().qr();
            s = qr.r;
            v = v.matmul(&qr.q);

            let diagonal = s.leading_diagonal().magnitude();
            let err = s.strict_upper_magnitude() / if diagonal == 0.0 { 1.0 } else { diagonal };
            log::trace!("svd sweep {iterations}: residual {err:e}");
            if err <= config.tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            log::debug!("svd of {rows}x{cols} matrix converged after {iterations} sweeps");
        } else {
            log::warn!(
                "svd of {rows}x{cols} matrix did not converge within {} sweeps",
                config.max_iterations
            );
        }

        // `s` is cols x rows here; flip negative values and the matching columns of V
        let mut values = s.leading_diagonal().into_vec();
        let mut flip = vec![1.0; cols];
        for (value, f) in values.iter_mut().zip(flip.iter_mut()) {
            if *value < 0.0 {
                *value = -*value;
                *f = -1.0;
            }
        }
        let v = v.map_indexed(|x, _, j| x * flip[j - 1]);
        let s = Matrix::from_shape_fn(rows, cols, |i, j| if i == j { values[i] } else { 0.0 });

        SvdDecomposition {
            u,
            s,
            v,
            iterations,
            converged,
        }
    }
}
