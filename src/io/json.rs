use std::io::{self, Write};
use std::path::Path;

use crate::diagnostics::EnergySummary;
use crate::dynamics::state::SimConfig;
use crate::sim::Method;

/// Write a run summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    method: Method,
    config: &SimConfig,
    summary: &EnergySummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"run\": {{")?;
    writeln!(writer, "    \"method\": \"{}\",", method)?;
    writeln!(writer, "    \"t_min\": {},", config.t_min)?;
    writeln!(writer, "    \"t_max\": {},", config.t_max)?;
    writeln!(writer, "    \"h\": {}", config.h)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"energy\": {{")?;
    writeln!(writer, "    \"first\": {:.6},", summary.first)?;
    writeln!(writer, "    \"last\": {:.6},", summary.last)?;
    writeln!(writer, "    \"min\": {:.6},", summary.min)?;
    writeln!(writer, "    \"max\": {:.6},", summary.max)?;
    writeln!(writer, "    \"max_deviation\": {:.6}", summary.max_deviation)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a run summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    method: Method,
    config: &SimConfig,
    summary: &EnergySummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, method, config, summary)
}
