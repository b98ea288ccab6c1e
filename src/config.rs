use clap::Parser;
use std::path::PathBuf;

use crate::emitter::literal::LiteralStyle;
use crate::table::MAX_ORDER;

pub const USAGE: &str = "Missing argument : you must specify the maximum quadrature order N";

/// Generates the Gauss-Hermite coefficient header for orders 0..=N on stdout.
#[derive(Debug, Parser)]
#[command(name = "herm_coefs", version)]
pub struct Cli {
    /// Highest quadrature order N
    #[arg(value_name = "N", value_parser = parse_order)]
    pub n_max: Option<usize>,

    /// Literal syntax of each per-order matrix
    #[arg(long, value_enum, default_value_t = LiteralStyle::Armadillo)]
    pub style: LiteralStyle,

    /// Also export the table as order,index,node,weight rows
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_order(arg: &str) -> Result<usize, String> {
    let n_max: usize = arg
        .parse()
        .map_err(|_| format!("`{arg}` is not a non-negative integer"))?;
    if n_max > MAX_ORDER {
        return Err(format!("order {n_max} exceeds the supported maximum of {MAX_ORDER}"));
    }
    Ok(n_max)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub n_max: usize,
    pub style: LiteralStyle,
    pub csv_path: Option<PathBuf>,
    pub progress: bool,
}

impl Config {
    pub fn new(n_max: usize) -> Self {
        Config {
            n_max,
            style: LiteralStyle::default(),
            csv_path: None,
            progress: false,
        }
    }
}

impl Cli {
    /// `None` when no order was given on the command line.
    pub fn into_config(self) -> Option<Config> {
        let n_max = self.n_max?;
        Some(Config {
            n_max,
            style: self.style,
            csv_path: self.csv,
            progress: self.progress,
        })
    }
}
