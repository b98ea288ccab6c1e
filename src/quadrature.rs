extern crate nalgebra as na;

#[cfg(test)]
mod hermite;

use na::SymmetricEigen;
use std::f64::consts::PI;

use crate::error::QuadratureError;

const EIGEN_MAX_ITER_PER_ORDER: usize = 200;

/// Nodes and weights of one Gauss-Hermite rule, nodes in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraturePair {
    pub nodes: na::DVector<f64>,
    pub weights: na::DVector<f64>,
}

impl QuadraturePair {
    /// Placeholder stored at order 0 so the table can be indexed from zero.
    pub fn sentinel() -> Self {
        QuadraturePair {
            nodes: na::DVector::from_element(1, 0.0),
            weights: na::DVector::from_element(1, 0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weighted sum `Σ w_i f(x_i)`, the rule applied to `f`.
    pub fn integrate<F>(&self, integrand: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut integral_value = 0.0;
        for i in 0..self.len() {
            integral_value += self.weights[i] * integrand(self.nodes[i]);
        }
        integral_value
    }
}

/// Orthonormal Hermite function `p_n(x)` for the weight `exp(-x^2)`, evaluated by
/// downward recurrence so large orders do not overflow.
fn normed_hermite(x: f64, n: usize) -> f64 {
    let p0 = 1.0 / PI.sqrt().sqrt();
    if n == 0 {
        return p0;
    }

    let mut c0 = 0.0;
    let mut c1 = p0;
    let mut nd = n as f64;
    for _ in 0..n - 1 {
        let tmp = c0;
        c0 = -c1 * ((nd - 1.0) / nd).sqrt();
        c1 = tmp + c1 * x * (2.0 / nd).sqrt();
        nd -= 1.0;
    }
    c0 + c1 * x * 2.0_f64.sqrt()
}

fn golub_welsch(n: usize) -> Result<na::DVector<f64>, QuadratureError> {
    let mut m: na::DMatrix<f64> = na::DMatrix::zeros(n, n);
    for i in 1..n {
        let b = (0.5 * i as f64).sqrt();
        m[(i, i - 1)] = b;
        m[(i - 1, i)] = b;
    }
    let eigen = SymmetricEigen::try_new(m, f64::EPSILON, EIGEN_MAX_ITER_PER_ORDER * n)
        .ok_or(QuadratureError::NoConvergence { order: n })?;

    let mut nodes: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    nodes.sort_by(|a, b| a.total_cmp(b));
    Ok(na::DVector::from_vec(nodes))
}

/// Computes the `n`-point Gauss-Hermite rule for `∫ f(x) exp(-x^2) dx`.
///
/// Order 0 has no rule; it yields the `([0], [0])` sentinel instead.
pub fn quadrature_pair(n: usize) -> Result<QuadraturePair, QuadratureError> {
    if n == 0 {
        return Ok(QuadraturePair::sentinel());
    }

    let mut x = golub_welsch(n)?;

    // one Newton step on the eigenvalues
    let scale = (2.0 * n as f64).sqrt();
    for xi in x.iter_mut() {
        let dy = normed_hermite(*xi, n);
        let df = normed_hermite(*xi, n - 1) * scale;
        *xi -= dy / df;
    }

    let mut fm = x.map(|xi| normed_hermite(xi, n - 1));
    let fm_max = fm.amax();
    fm /= fm_max;
    let w = fm.map(|f| 1.0 / (f * f));

    let nodes = na::DVector::from_fn(n, |i, _| 0.5 * (x[i] - x[n - 1 - i]));
    let mut weights = na::DVector::from_fn(n, |i, _| 0.5 * (w[i] + w[n - 1 - i]));
    let total = weights.sum();
    weights *= PI.sqrt() / total;

    if nodes.iter().chain(weights.iter()).any(|v| !v.is_finite()) {
        return Err(QuadratureError::NonFinite { order: n });
    }
    if weights.iter().any(|&w| w <= 0.0) {
        return Err(QuadratureError::WeightUnderflow { order: n });
    }

    Ok(QuadraturePair { nodes, weights })
}

/// Approximates `∫ integrand(x) exp(-x^2) dx` over the real line with `n` points.
pub fn gauss_hermite<F>(n: usize, integrand: F) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Ok(quadrature_pair(n)?.integrate(integrand))
}
