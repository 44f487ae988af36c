use crate::{error::LinalgError, Matrix, Vector};

impl Matrix {
    /// Counter-clockwise rotation of the plane by `theta` radians.
    pub fn rotation_2d(theta: f64) -> Matrix {
        let (s, c) = theta.sin_cos();
        Matrix::from_rows([[c, -s], [s, c]])
    }

    /// Rotation by `theta` radians around an arbitrary axis in 3D space.
    ///
    /// The axis does not need to be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless the axis has 3
    /// elements, and [`LinalgError::InvalidOperation`] for the zero axis.
    ///
    /// ```
    /// use sylva_linalg::{Matrix, Vector};
    ///
    /// let r = Matrix::rotation(std::f64::consts::FRAC_PI_2, &Vector::from([0.0, 0.0, 2.0])).unwrap();
    /// assert!(r.eql(&Matrix::rotation_z(std::f64::consts::FRAC_PI_2), 1e-12));
    /// ```
    pub fn rotation(theta: f64, axis: &Vector) -> Result<Matrix, LinalgError> {
        if axis.dimensions() != 3 {
            return Err(LinalgError::dimension_mismatch(
                "rotation axis must be a 3-vector",
                &[3],
                &[axis.dimensions()],
            ));
        }
        let unit = axis.to_unit_vector()?;
        let [x, y, z] = [unit.as_slice()[0], unit.as_slice()[1], unit.as_slice()[2]];
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;
        Ok(Matrix::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ]))
    }

    /// Rotation by `theta` radians around the x axis.
    pub fn rotation_x(theta: f64) -> Matrix {
        let (s, c) = theta.sin_cos();
        Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation by `theta` radians around the y axis.
    pub fn rotation_y(theta: f64) -> Matrix {
        let (s, c) = theta.sin_cos();
        Matrix::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Rotation by `theta` radians around the z axis.
    pub fn rotation_z(theta: f64) -> Matrix {
        let (s, c) = theta.sin_cos();
        Matrix::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }
}
