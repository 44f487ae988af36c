use crate::{error::LinalgError, Matrix};

/// Data projected onto its leading principal directions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcaProjection {
    /// Projected samples, one row per sample and one column per component.
    pub z: Matrix,
    /// Principal directions used for the projection, one per column.
    pub u_reduce: Matrix,
}

impl PcaProjection {
    /// Maps the projected samples back into the original space.
    pub fn restore(&self) -> Matrix {
        self.z.matmul(&self.u_reduce.transpose())
    }
}

impl Matrix {
    /// Covariance `Xᵀ X / n` of the samples stored one per row.
    ///
    /// The samples are used as is, without subtracting their mean.
    pub fn covariance(&self) -> Result<Matrix, LinalgError> {
        if self.rows() == 0 {
            return Err(LinalgError::invalid_operation(
                "covariance",
                "no samples",
            ));
        }
        Ok(self.transpose().matmul(self).div(self.rows() as f64))
    }

    /// Projects the samples (one per row) onto `k` principal directions.
    ///
    /// The directions are the first `k` left singular vectors of the
    /// covariance, in the order the SVD produces them.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidOperation`] if there are no samples or
    /// `k` is zero or exceeds the number of columns.
    pub fn pca_project(&self, k: usize) -> Result<PcaProjection, LinalgError> {
        if k == 0 || k > self.cols() {
            return Err(LinalgError::invalid_operation(
                "pca_project",
                format!("cannot keep {k} components of {}", self.cols()),
            ));
        }
        let svd = self.covariance()?.svd();
        let u_reduce = svd.u.slice(1, 0, 1, k)?;
        Ok(PcaProjection {
            z: self.multiply(&u_reduce)?,
            u_reduce,
        })
    }
}
