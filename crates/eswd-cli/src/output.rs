//! CSV output of harvested records.

use std::io::Write;
use std::path::Path;

use eswd_core::{NormalizedRecord, RECORD_HEADERS};

/// Writes the header row followed by one row per record.
///
/// The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub(crate) fn write_records_to<W: Write>(
    sink: W,
    records: &[NormalizedRecord],
) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(RECORD_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes all records to it as UTF-8 CSV.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub(crate) fn write_records(path: &Path, records: &[NormalizedRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", path.display()))?;
    write_records_to(std::io::BufWriter::new(file), records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "records saved");
    Ok(())
}
