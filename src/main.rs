use clap::Parser;
use tracing::error;

use herm_coefs::config::Cli;
use herm_coefs::{logging, output_for, write_output};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    let config = cli.into_config();

    let result = output_for(config.as_ref())
        .and_then(|text| write_output(&mut std::io::stdout().lock(), &text));
    if let Err(e) = result {
        error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
