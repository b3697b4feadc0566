use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::{
    error::PipelineError,
    ingest::{RawRow, RawTable},
};

/// Parse a workbook (xls or xlsx) into a [`RawTable`].
///
/// Only the first worksheet is read; its first row is the header.
pub fn parse(content: &[u8]) -> Result<RawTable, PipelineError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))
        .map_err(|error| PipelineError::Parse { format: "workbook", reason: error.to_string() })?;
    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PipelineError::Parse {
            format: "workbook",
            reason: "the workbook contains no sheets".to_owned(),
        })?;
    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|error| PipelineError::Parse { format: "workbook", reason: error.to_string() })?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header_row| {
            header_row.iter().map(|cell| cell.to_string().trim().to_owned()).collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let rows = rows
        .map(|row| {
            let mut raw: RawRow = row.iter().map(cell_to_value).collect();
            raw.resize(headers.len(), None);
            raw.truncate(headers.len());
            raw
        })
        .filter(|row| row.iter().any(Option::is_some))
        .collect();

    Ok(RawTable { headers, rows })
}

fn cell_to_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_owned())
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_a_parse_error() {
        let result = parse(b"definitely not a workbook");
        assert!(matches!(result, Err(PipelineError::Parse { .. })));
    }
}
