//! Numeric tolerances and iteration limits.

/// Tolerance for strict numerical comparisons, e.g. rank and singularity checks.
pub const PRECISION: f64 = 1e-6;

/// Tolerance for loose equality checks between computed values.
pub const APPROX_PRECISION: f64 = 1e-5;

/// Relative off-diagonal residual at which the SVD iteration stops.
pub const SVD_TOLERANCE: f64 = 2.2737e-13;

/// Hard cap on the number of SVD sweeps.
pub const SVD_MAX_ITERATIONS: usize = 100;

/// Parameters of the iterative singular value decomposition.
///
/// # Example
///
/// ```
/// use sylva_linalg::{Matrix, SvdConfig};
///
/// let m = Matrix::new(vec![vec![3.0, 0.0], vec![0.0, 2.0]]).unwrap();
/// let config = SvdConfig {
///     max_iterations: 10,
///     ..Default::default()
/// };
/// let svd = m.svd_with(&config);
/// assert_eq!(svd.s.e(1, 1), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvdConfig {
    /// Maximum number of QR sweeps before the best available result is returned.
    pub max_iterations: usize,
    /// Convergence threshold on `|strict upper part| / |diagonal|`.
    pub tolerance: f64,
}

impl Default for SvdConfig {
    fn default() -> Self {
        Self {
            max_iterations: SVD_MAX_ITERATIONS,
            tolerance: SVD_TOLERANCE,
        }
    }
}
