//! Rendering tables as Rust constant declarations or JSON

use super::{InterestTable, InterestTables};
use crate::error::Result;
use crate::rates::GeneratorParams;
use std::io::Write;

/// Write one `const NAME: [Type; N] = [ ... ];` block
///
/// Every element line ends in a comma; `];` closes the block on its own line.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &InterestTable,
    params: &GeneratorParams,
) -> Result<()> {
    writeln!(
        out,
        "const {}: [{}; {}] = [",
        table.name(),
        params.ratio_type,
        table.len()
    )?;
    for entry in table.entries() {
        writeln!(
            out,
            "{}({}, {}),",
            params.ratio_constructor,
            entry.numerator(),
            entry.denominator()
        )?;
    }
    writeln!(out, "];")?;
    Ok(())
}

/// Write the day, month and year blocks in that order
pub fn write_rust<W: Write>(
    out: &mut W,
    tables: &InterestTables,
    params: &GeneratorParams,
) -> Result<()> {
    for table in tables.iter() {
        write_table(out, table, params)?;
    }
    out.flush()?;
    Ok(())
}

/// Render all three blocks into a string
pub fn render_rust(tables: &InterestTables, params: &GeneratorParams) -> Result<String> {
    let mut buf = Vec::new();
    write_rust(&mut buf, tables, params)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the factors and tables as pretty JSON followed by a newline
pub fn write_json<W: Write>(out: &mut W, tables: &InterestTables) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tables)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
