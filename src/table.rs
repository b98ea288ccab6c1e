use indicatif::{ProgressBar, ProgressStyle};
use std::f64::consts::PI;
use std::ops::Index;
use tracing::{debug, info};

use crate::error::Error;
use crate::quadrature::{quadrature_pair, QuadraturePair};

/// Highest order accepted. Above roughly 350 points the outermost weights
/// underflow to zero in double precision.
pub const MAX_ORDER: usize = 300;

/// Quadrature pairs for every order `0..=n_max`, indexed by order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    pairs: Vec<QuadraturePair>,
}

impl CoefficientTable {
    pub fn compute(n_max: usize, progress: bool) -> Result<Self, Error> {
        if n_max > MAX_ORDER {
            return Err(Error::OrderTooLarge {
                n_max,
                limit: MAX_ORDER,
            });
        }

        let pb = if progress {
            let pb = ProgressBar::new(n_max as u64 + 1);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} (eta: {eta}) {msg}",
                    )?
                    .progress_chars("█░"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut pairs = Vec::with_capacity(n_max + 1);
        for n in 0..=n_max {
            let pair = quadrature_pair(n)?;
            // ∫ x^2 exp(-x^2) dx = sqrt(pi) / 2, exact from two points on
            let moment_error = if n >= 2 {
                (pair.integrate(|x| x * x) - 0.5 * PI.sqrt()).abs()
            } else {
                0.0
            };
            debug!(
                order = n,
                points = pair.len(),
                moment_error,
                "computed quadrature rule"
            );
            pairs.push(pair);
            pb.inc(1);
        }
        pb.finish_with_message("done");

        info!(n_max, "coefficient table complete");
        Ok(CoefficientTable { pairs })
    }

    /// Builds a table from already computed pairs, `pairs[n]` being order `n`.
    /// Returns `None` for an empty list.
    pub fn from_pairs(pairs: Vec<QuadraturePair>) -> Option<Self> {
        if pairs.is_empty() {
            None
        } else {
            Some(CoefficientTable { pairs })
        }
    }

    pub fn n_max(&self) -> usize {
        self.pairs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`: a table holds at least the order-0 entry.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, n: usize) -> Option<&QuadraturePair> {
        self.pairs.get(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuadraturePair> {
        self.pairs.iter()
    }
}

impl Index<usize> for CoefficientTable {
    type Output = QuadraturePair;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}
