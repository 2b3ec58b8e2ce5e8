//! Coefficients command for showing the active model table.

use std::io::Write;

use anyhow::Result;

use br_core::Coefficients;

/// Runs the coefficients command.
pub fn run<W: Write>(writer: &mut W, coefficients: &Coefficients, source: &str) -> Result<()> {
    writeln!(
        writer,
        "Coefficients ({source}, schema v{})",
        coefficients.schema_version
    )?;
    for (name, value) in coefficients.terms() {
        writeln!(writer, "{name:<16} {value}")?;
    }
    Ok(())
}
