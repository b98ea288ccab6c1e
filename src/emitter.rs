pub mod literal;
pub mod parse;

use crate::error::{Error, ParseError};
use crate::table::CoefficientTable;
use literal::{format_table, LiteralStyle};
use parse::table_from_literal;

pub const GUARD: &str = "SOLVER_HERM_COEFS";
pub const N_MAX_NAME: &str = "HERM_QUADRA_N_MAX";
pub const DATA_NAME: &str = "HERMITE_QUADRA_COEFS";

/// Renders the five-line header: include guard, maximum order, data literal, guard end.
pub fn render_artifact(table: &CoefficientTable, style: LiteralStyle) -> String {
    let data = format_table(table, style);
    format!(
        "#ifndef {GUARD}\n#define {GUARD}\n#define {N_MAX_NAME} {}\n#define {DATA_NAME} {data}\n#endif\n",
        table.n_max()
    )
}

/// Returns the nested literal bound to the data constant of a rendered artifact.
pub fn data_literal(artifact: &str) -> Option<&str> {
    let prefix = format!("#define {DATA_NAME} ");
    artifact
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
}

/// Re-parses the data literal of `artifact` and checks it reproduces `table` exactly.
pub fn verify_round_trip(table: &CoefficientTable, artifact: &str) -> Result<(), Error> {
    let data = data_literal(artifact)
        .ok_or_else(|| ParseError::Shape(format!("missing {DATA_NAME} line")))?;
    let parsed = table_from_literal(data)?;

    for order in 0..table.len().max(parsed.len()) {
        if table.get(order) != parsed.get(order) {
            return Err(Error::RoundTrip { order });
        }
    }
    Ok(())
}
