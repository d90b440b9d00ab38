use std::io::Write;

use serde::Serialize;

use crate::error::result::CliResult;

/// Write `output` as pretty JSON on stdout.
pub fn write_json<T: Serialize>(output: &T) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, output)?;
    writeln!(stdout)?;
    Ok(())
}
