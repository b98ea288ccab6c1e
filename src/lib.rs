pub mod config;
pub mod emitter;
pub mod error;
pub mod io;
pub mod logging;
pub mod quadrature;
pub mod table;

use std::io::Write;
use tracing::info;

use config::{Config, USAGE};
use error::Error;
use io::write_to_csv::write_to_csv;
use table::CoefficientTable;

/// Computes the table for `config` and returns the complete header text.
///
/// Nothing is returned unless the serialized literal parses back to the computed table.
pub fn run(config: &Config) -> Result<String, Error> {
    let table = CoefficientTable::compute(config.n_max, config.progress)?;
    let artifact = emitter::render_artifact(&table, config.style);
    emitter::verify_round_trip(&table, &artifact)?;

    if let Some(path) = &config.csv_path {
        write_to_csv(&table, path)?;
        info!(path = %path.display(), "csv export written");
    }
    Ok(artifact)
}

/// Text for standard output: the usage line when no order was given, the header otherwise.
pub fn output_for(config: Option<&Config>) -> Result<String, Error> {
    match config {
        Some(config) => run(config),
        None => Ok(format!("{USAGE}\n")),
    }
}

/// Writes `text` in one call and flushes.
pub fn write_output<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
