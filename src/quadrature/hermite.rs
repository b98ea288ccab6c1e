extern crate nalgebra as na;

/// Evaluates the physicist's Hermite polynomials `H_0..=H_{n_max}` on every point of `z`.
///
/// Row `k` of the returned `(n_max + 1) x z.len()` matrix holds `H_k(z)`, built with the
/// three-term recurrence `H_k = 2z H_{k-1} - 2(k-1) H_{k-2}`.
pub fn compute_matrix(n_max: usize, z: &na::RowDVector<f64>) -> na::DMatrix<f64> {
    let len = z.len();
    let mut herm = na::DMatrix::zeros(n_max + 1, len);
    herm.row_mut(0).fill(1.0);
    if n_max == 0 {
        return herm;
    }

    let two_z = z * 2.0;
    herm.row_mut(1).copy_from(&two_z);
    for k in 2..=n_max {
        let scale = 2.0 * (k as f64 - 1.0);
        let next = two_z.component_mul(&herm.row(k - 1)) - herm.row(k - 2) * scale;
        herm.row_mut(k).copy_from(&next);
    }
    herm
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_order_zero_is_ones() {
        let z = na::RowDVector::from_vec(vec![-1.5, 0.0, 2.0]);
        let herm = compute_matrix(0, &z);

        assert_eq!(herm.nrows(), 1);
        assert_eq!(herm.ncols(), 3);
        assert!(herm.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_low_orders_match_closed_form() {
        let points = vec![-2.0, -0.5, 0.0, 0.3, 1.7];
        let z = na::RowDVector::from_vec(points.clone());
        let herm = compute_matrix(4, &z);

        for (j, &x) in points.iter().enumerate() {
            assert_relative_eq!(herm[(1, j)], 2.0 * x, epsilon = 1e-12);
            assert_relative_eq!(herm[(2, j)], 4.0 * x * x - 2.0, epsilon = 1e-12);
            assert_relative_eq!(herm[(3, j)], 8.0 * x.powi(3) - 12.0 * x, epsilon = 1e-12);
            assert_relative_eq!(
                herm[(4, j)],
                16.0 * x.powi(4) - 48.0 * x * x + 12.0,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let z = na::RowDVector::<f64>::zeros(0);
        let herm = compute_matrix(3, &z);
        assert_eq!(herm.shape(), (4, 0));
    }
}
