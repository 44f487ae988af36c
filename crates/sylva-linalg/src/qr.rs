use crate::Matrix;

/// Result of a QR factorization, `A = Q × R`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QrDecomposition {
    /// Orthogonal factor, `rows x rows`.
    pub q: Matrix,
    /// Upper triangular factor, `rows x cols`.
    pub r: Matrix,
}

impl Matrix {
    /// QR factorization by Householder reflections.
    ///
    /// For every column `k` with entries below the diagonal, the sub-column
    /// `a = A[k.., k]` is reflected onto the first axis with
    /// `v = a + sign(a[0]) |a| e1` and `H = I - 2 v vᵀ / (vᵀ v)`, where
    /// `sign(0) = 1`. The reflection is applied to the trailing rows of `A`
    /// and accumulated into the trailing columns of `Q`, which equals the
    /// product with the identity-padded `H` without forming it. A sub-column
    /// that is entirely zero needs no reflection and is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// let qr = a.qr();
    /// assert!(qr.q.multiply(&qr.r).unwrap().eql(&a, 1e-12));
    /// assert!(qr.r.e(3, 2).is_some_and(|x| x.abs() < 1e-12));
    /// ```
    pub fn qr(&self) -> QrDecomposition {
        let (rows, cols) = (self.rows(), self.cols());
        let mut r = self.to_grid();
        let mut q = Matrix::identity(rows).to_grid();

        for k in 0..rows.saturating_sub(1).min(cols) {
            let mut v: Vec<f64> = (k..rows).map(|i| r[i][k]).collect();
            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            v[0] += norm * sign(v[0]);
            let vv: f64 = v.iter().map(|x| x * x).sum();
            if vv == 0.0 {
                continue;
            }

            // R <- H R on rows k..
            for j in 0..cols {
                let d: f64 = v.iter().zip(&r[k..]).map(|(vi, row)| vi * row[j]).sum();
                let f = 2.0 * d / vv;
                for (vi, row) in v.iter().zip(&mut r[k..]) {
                    row[j] -= f * vi;
                }
            }

            // Q <- Q H on columns k..
            for row in q.iter_mut() {
                let d: f64 = v.iter().zip(&row[k..]).map(|(vi, x)| vi * x).sum();
                let f = 2.0 * d / vv;
                for (vi, x) in v.iter().zip(&mut row[k..]) {
                    *x -= f * vi;
                }
            }

            // entries below the diagonal are zero up to rounding
            for row in &mut r[k + 1..] {
                row[k] = 0.0;
            }
        }

        QrDecomposition {
            q: Matrix::from_shape_fn(rows, rows, |i, j| q[i][j]),
            r: Matrix::from_shape_fn(rows, cols, |i, j| r[i][j]),
        }
    }
}

/// Sign of `x` with zero treated as positive.
#[inline]
fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LinalgError;

    fn assert_factorization(m: &Matrix) -> Result<QrDecomposition, LinalgError> {
        let qr = m.qr();
        assert_relative_eq!(qr.q.multiply(&qr.r)?, *m, epsilon = 1e-10);
        assert_relative_eq!(
            qr.q.transpose().multiply(&qr.q)?,
            Matrix::identity(m.rows()),
            epsilon = 1e-10
        );
        assert_eq!(qr.r.transpose().triu(1), Matrix::zeros(m.cols(), m.rows()));
        Ok(qr)
    }

    #[test]
    fn test_qr_square() -> Result<(), LinalgError> {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let qr = assert_factorization(&m)?;
        assert_relative_eq!(
            qr.r,
            Matrix::from_rows([[-3.1622776601683795, -4.427188724235731], [0.0, -0.6324555320336759]]),
            epsilon = 1e-12
        );

        assert_factorization(&Matrix::from_rows([
            [4.0, 2.0, 1.0, 4.0],
            [-9.0, 4.0, 3.0, 9.0],
            [11.0, 3.0, 11.0, 3.0],
            [-4.0, 5.0, 3.0, 1.0],
        ]))?;
        Ok(())
    }

    #[test]
    fn test_qr_rectangular() -> Result<(), LinalgError> {
        let tall = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let qr = assert_factorization(&tall)?;
        assert_eq!(qr.q.shape(), [3, 3]);
        assert_eq!(qr.r.shape(), [3, 2]);

        let wide = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let qr = assert_factorization(&wide)?;
        assert_eq!(qr.r.shape(), [2, 3]);
        Ok(())
    }

    #[test]
    fn test_qr_zero_column() -> Result<(), LinalgError> {
        let m = Matrix::from_rows([[0.0, 1.0], [0.0, 2.0]]);
        let qr = assert_factorization(&m)?;
        assert_eq!(qr.q, Matrix::identity(2));
        assert_factorization(&Matrix::zeros(3, 3))?;
        Ok(())
    }

    #[test]
    fn test_qr_sign_of_zero_pivot() -> Result<(), LinalgError> {
        // a zero leading entry reflects towards the negative axis
        let m = Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        let qr = assert_factorization(&m)?;
        assert_relative_eq!(qr.r.e(1, 1).unwrap_or_default(), -1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_qr_degenerate_shapes() {
        let qr = Matrix::default().qr();
        assert_eq!(qr.q.shape(), [0, 0]);
        let row = Matrix::from_rows([[3.0, 4.0]]);
        let qr = row.qr();
        assert_eq!(qr.q, Matrix::identity(1));
        assert_eq!(qr.r, row);
    }
}
