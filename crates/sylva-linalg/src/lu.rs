use crate::Matrix;

/// Result of an LU factorization with partial pivoting, `P × A = L × U`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuDecomposition {
    /// Lower triangular factor with a unit diagonal, `rows x rows`.
    pub l: Matrix,
    /// Upper triangular (row echelon) factor, `rows x cols`.
    pub u: Matrix,
    /// Row permutation, `rows x rows`.
    pub p: Matrix,
}

impl Matrix {
    /// LU factorization with partial pivoting.
    ///
    /// At every step the remaining row with the largest magnitude in the pivot
    /// column is swapped into place. Rectangular matrices are supported: when
    /// the remaining part of a column is entirely zero the pivot moves on to
    /// the next column while the elimination row stays put.
    ///
    /// # Example
    ///
    /// ```
    /// use sylva_linalg::Matrix;
    ///
    /// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let lu = a.lu();
    /// let pa = lu.p.multiply(&a).unwrap();
    /// let l_u = lu.l.multiply(&lu.u).unwrap();
    /// assert!(pa.eql(&l_u, 1e-12));
    /// ```
    pub fn lu(&self) -> LuDecomposition {
        let (rows, cols) = (self.rows(), self.cols());
        let mut a = self.to_grid();
        let mut l = Matrix::identity(rows).to_grid();
        let mut u = Matrix::zeros(rows, cols).to_grid();
        let mut perm: Vec<usize> = (0..rows).collect();

        let mut pivot_col = 0;
        for k in 0..rows {
            let Some((col, pivot_row)) = next_pivot(&a, k, pivot_col) else {
                break;
            };
            pivot_col = col;

            if pivot_row != k {
                a.swap(k, pivot_row);
                perm.swap(k, pivot_row);
                for j in 0..k {
                    let tmp = l[k][j];
                    l[k][j] = l[pivot_row][j];
                    l[pivot_row][j] = tmp;
                }
            }

            let (head, tail) = a.split_at_mut(k + 1);
            let pivot = &head[k];
            for (offset, row) in tail.iter_mut().enumerate() {
                let factor = row[pivot_col] / pivot[pivot_col];
                l[k + 1 + offset][k] = factor;
                for j in pivot_col + 1..cols {
                    row[j] -= factor * pivot[j];
                }
                row[pivot_col] = 0.0;
            }
            u[k].copy_from_slice(&a[k]);
            pivot_col += 1;
        }

        let mut p = Matrix::zeros(rows, rows).to_grid();
        for (i, &j) in perm.iter().enumerate() {
            p[i][j] = 1.0;
        }

        LuDecomposition {
            l: grid_to_matrix(l, rows, rows),
            u: grid_to_matrix(u, rows, cols),
            p: grid_to_matrix(p, rows, rows),
        }
    }
}

/// Finds the next pivot at or right of `col`, scanning rows `k..`.
///
/// Returns the pivot column and the row holding the largest magnitude in it,
/// or `None` once every remaining column is zero below row `k`.
fn next_pivot(a: &[Vec<f64>], k: usize, mut col: usize) -> Option<(usize, usize)> {
    let cols = a.first().map_or(0, Vec::len);
    while col < cols {
        let (row, magnitude) = (k..a.len())
            .map(|i| (i, a[i][col].abs()))
            .fold((k, 0.0), |best, cand| if cand.1 > best.1 { cand } else { best });
        if magnitude > 0.0 {
            return Some((col, row));
        }
        col += 1;
    }
    None
}

fn grid_to_matrix(grid: Vec<Vec<f64>>, rows: usize, cols: usize) -> Matrix {
    Matrix::from_shape_fn(rows, cols, |i, j| grid[i][j])
}
