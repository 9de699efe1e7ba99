//! Application execution logic.
//!
//! Builds a resolver from the validated configuration, resolves the
//! primary MAC address once and prints it in the configured format.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use macfact::config::{OutputFormat, ValidatedConfig};
use macfact::network::MacAddress;
use macfact::network::platform::{SysfsDirectory, SystemCommand};
use macfact::resolver::Resolver;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to serialize the fact as JSON.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write to stdout.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// JSON shape of the printed fact.
#[derive(Debug, Serialize)]
struct Fact<'a> {
    macaddress: Option<&'a MacAddress>,
}

/// Resolves the address and writes it to stdout.
///
/// "Not found" is a successful outcome: plain output prints nothing and
/// JSON output prints a `null` value.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized or written.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let kernel = config.kernel().to_string();
    let table = config.strategy_table();
    let format = config.format;

    let resolver =
        Resolver::new(table, SysfsDirectory::new(), SystemCommand::new()).with_filter(config.filter);

    let address = resolver.resolve(&kernel);
    match address {
        Some(ref mac) => tracing::info!("Resolved MAC address {mac} for kernel {kernel}"),
        None => tracing::info!("No MAC address found for kernel {kernel}"),
    }

    let mut stdout = std::io::stdout().lock();
    write_fact(&mut stdout, address.as_ref(), format)
}

/// Renders the fact to `out` in the given format.
fn write_fact(
    out: &mut impl Write,
    address: Option<&MacAddress>,
    format: OutputFormat,
) -> Result<(), RunError> {
    match format {
        OutputFormat::Plain => {
            if let Some(mac) = address {
                writeln!(out, "{mac}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Fact {
                macaddress: address,
            })?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
