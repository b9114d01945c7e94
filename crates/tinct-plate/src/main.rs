//! Tinct Plate: renders every color manipulation as an HTML swatch sheet.
//!
//! Configuration comes from `TINCT_PLATE_CONFIG` (a JSON file) and
//! `TINCT_PLATE_OUT`; logging honours `RUST_LOG`.

mod config;
mod error;
mod plate;
mod render;

use std::fs;
use std::io::Write as _;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::PlateConfig;
use crate::error::PlateError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PlateError> {
    let config = PlateConfig::load()?;
    tracing::debug!(?config, "plate configuration");

    let sections = plate::build_sections(&config);
    let html = render::render_html(&sections);

    if config.writes_to_stdout() {
        std::io::stdout()
            .write_all(html.as_bytes())
            .map_err(|source| PlateError::Write {
                path: config.output.clone(),
                source,
            })?;
        return Ok(());
    }

    fs::write(&config.output, html).map_err(|source| PlateError::Write {
        path: config.output.clone(),
        source,
    })?;
    tracing::info!(
        "wrote {} sections to {}",
        sections.len(),
        config.output.display()
    );
    Ok(())
}
