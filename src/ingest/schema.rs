use crate::{error::PipelineError, ingest::RawTable};

pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Time", "Power_kW"];

/// Reject the whole dataset unless every required column is present.
///
/// This is a header check, not a per-row check: columns are assumed to be
/// homogeneous across the file. A table with zero data rows is also rejected.
pub fn validate(table: &RawTable) -> Result<(), PipelineError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| (*name).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::Schema { missing });
    }
    if table.rows.is_empty() {
        return Err(PipelineError::Degenerate);
    }
    Ok(())
}
