extern crate nalgebra as na;

use clap::ValueEnum;

use crate::quadrature::QuadraturePair;
use crate::table::CoefficientTable;

/// Aggregate-initializer syntax used for each per-order matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LiteralStyle {
    /// `arma::mat{{nodes},{weights}}`
    #[default]
    Armadillo,
    /// `{{nodes},{weights}}`
    Braces,
}

impl LiteralStyle {
    fn matrix_prefix(self) -> &'static str {
        match self {
            LiteralStyle::Armadillo => "arma::mat",
            LiteralStyle::Braces => "",
        }
    }
}

/// Shortest decimal text that parses back to exactly `value`.
///
/// Integral values print without a fraction (`0`, `2`); very small or very large
/// magnitudes switch to exponent notation.
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&abs) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

fn format_row(values: &na::DVector<f64>) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_value(v)).collect();
    format!("{{{}}}", items.join(","))
}

pub fn format_pair(pair: &QuadraturePair, style: LiteralStyle) -> String {
    format!(
        "{}{{{},{}}}",
        style.matrix_prefix(),
        format_row(&pair.nodes),
        format_row(&pair.weights)
    )
}

pub fn format_table(table: &CoefficientTable, style: LiteralStyle) -> String {
    let items: Vec<String> = table.iter().map(|p| format_pair(p, style)).collect();
    format!("{{{}}}", items.join(","))
}
