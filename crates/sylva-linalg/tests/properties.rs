use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sylva_linalg::{LinalgError, Matrix, Vector};

const TRIALS: usize = 25;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.random_range(-5.0..5.0)).collect();
    Matrix::from_shape_vec(rows, cols, data).expect("buffer matches shape")
}

fn random_shape(rng: &mut StdRng) -> (usize, usize) {
    (rng.random_range(1..=5), rng.random_range(1..=5))
}

/// Diagonally dominant, hence well conditioned and invertible.
fn random_invertible(rng: &mut StdRng, n: usize) -> Matrix {
    let a = random_matrix(rng, n, n);
    a.add(&Matrix::identity(n).scale(25.0)).expect("same shape")
}

fn random_orthogonal(rng: &mut StdRng, n: usize) -> Matrix {
    random_matrix(rng, n, n).qr().q
}

fn assert_orthogonal(m: &Matrix) {
    let mtm = m.transpose().multiply(m).expect("square product");
    assert_relative_eq!(mtm, Matrix::identity(m.cols()), epsilon = 1e-9);
}

#[test]
fn determinant_survives_row_addition() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..TRIALS {
        let n = rng.random_range(2..=5);
        let a = random_matrix(&mut rng, n, n);
        let (src, dst) = (rng.random_range(0..n), rng.random_range(0..n));
        if src == dst {
            continue;
        }
        let k = rng.random_range(-3.0..3.0);
        let source = a.row(src + 1)?;
        let b = a.map_indexed(|x, i, j| {
            if i == dst + 1 {
                x + k * source.as_slice()[j - 1]
            } else {
                x
            }
        });
        let (da, db) = (a.determinant()?, b.determinant()?);
        assert_relative_eq!(da, db, epsilon = 1e-8, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn lu_reconstructs_permuted_input() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        let lu = a.lu();
        assert_eq!(lu.l.shape(), [rows, rows]);
        assert_eq!(lu.u.shape(), [rows, cols]);
        assert_eq!(lu.p.shape(), [rows, rows]);
        assert_relative_eq!(lu.p.multiply(&a)?, lu.l.multiply(&lu.u)?, epsilon = 1e-9);
        assert_eq!(lu.l.triu(1), Matrix::zeros(rows, rows));
        assert_eq!(lu.u.subtract(&lu.u.triu(0))?, Matrix::zeros(rows, cols));
    }
    Ok(())
}

#[test]
fn qr_is_orthogonal_and_triangular() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        let qr = a.qr();
        assert_orthogonal(&qr.q);
        assert_eq!(qr.r.subtract(&qr.r.triu(0))?, Matrix::zeros(rows, cols));
        assert_relative_eq!(qr.q.multiply(&qr.r)?, a, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn svd_reconstructs_separated_spectrum() -> Result<(), LinalgError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let k = rows.min(cols);
        let values: Vec<f64> = (0..k).map(|i| 10.0 / 2f64.powi(i as i32)).collect();
        let d = Matrix::from_shape_fn(rows, cols, |i, j| if i == j { values[i] } else { 0.0 });
        let a = random_orthogonal(&mut rng, rows)
            .multiply(&d)?
            .multiply(&random_orthogonal(&mut rng, cols).transpose())?;

        let svd = a.svd();
        assert!(svd.converged, "{rows}x{cols} did not converge");
        assert_orthogonal(&svd.u);
        assert_orthogonal(&svd.v);

        let usv = svd.u.multiply(&svd.s)?.multiply(&svd.v.transpose())?;
        assert_relative_eq!(usv, a, epsilon = 1e-8);

        let mut found = svd.singular_values();
        found.sort_by(|a, b| b.total_cmp(a));
        for (found, expected) in found.iter().zip(&values) {
            assert_relative_eq!(*found, *expected, epsilon = 1e-8);
        }
    }
    Ok(())
}

#[test]
fn svd_values_are_non_negative() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let svd = random_matrix(&mut rng, rows, cols).svd();
        assert_eq!(svd.u.shape(), [rows, rows]);
        assert_eq!(svd.s.shape(), [rows, cols]);
        assert_eq!(svd.v.shape(), [cols, cols]);
        assert!(svd.singular_values().iter().all(|&s| s >= 0.0));
        assert_orthogonal(&svd.u);
        assert_orthogonal(&svd.v);
    }
}

#[test]
fn inverse_round_trips() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=5);
        let a = random_invertible(&mut rng, n);
        let inv = a.inverse()?;
        assert_relative_eq!(a.multiply(&inv)?, Matrix::identity(n), epsilon = 1e-9);
        assert_relative_eq!(inv.multiply(&a)?, Matrix::identity(n), epsilon = 1e-9);
        assert_relative_eq!(inv.inverse()?, a, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn rank_is_bounded_by_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        assert!(a.rank() <= rows.min(cols));
        assert_eq!(Matrix::zeros(rows, cols).rank(), 0);
        assert_eq!(random_invertible(&mut rng, rows).rank(), rows);
    }
}

#[test]
fn rank_detects_dependent_rows() {
    let m = Matrix::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
    assert_eq!(m.rank(), 2);
    assert!(m.is_singular());
}

#[test]
fn solve_satisfies_system() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..TRIALS {
        let n = rng.random_range(1..=5);
        let a = random_invertible(&mut rng, n);
        let x0 = Vector::new((0..n).map(|_| rng.random_range(-5.0..5.0)).collect());
        let b = a.multiply_vector(&x0)?;
        let x = a.solve(&b)?;
        assert_relative_eq!(x, x0, epsilon = 1e-9);
        assert_relative_eq!(a.multiply_vector(&x)?, b, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn error_scenarios() {
    let wide = Matrix::from_rows([[1.0, 2.0]]);
    assert!(wide.determinant().is_err_and(|e| e.is_dimension_error()));

    let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    let err = singular.inverse().expect_err("singular matrix has no inverse");
    assert!(err.is_dimension_error());
    assert!(err.to_string().contains("determinant is zero"));

    let m = Matrix::identity(3);
    assert_eq!(m.row(0), Err(LinalgError::OutOfRange { index: 0, size: 3 }));
    assert_eq!(m.row(4), Err(LinalgError::OutOfRange { index: 4, size: 3 }));

    let a = Matrix::zeros(2, 3);
    assert!(a.add(&Matrix::zeros(3, 2)).is_err_and(|e| e.is_dimension_error()));
    assert!(a.multiply(&a).is_err_and(|e| e.is_dimension_error()));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let json = serde_json::to_string(&m)?;
    assert_eq!(serde_json::from_str::<Matrix>(&json)?, m);

    let lu = m.lu();
    let json = serde_json::to_string(&lu)?;
    assert_eq!(serde_json::from_str::<sylva_linalg::LuDecomposition>(&json)?, lu);
    Ok(())
}
