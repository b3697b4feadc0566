use csv::{ReaderBuilder, Trim};

use crate::{
    error::PipelineError,
    ingest::{RawRow, RawTable},
};

/// Parse CSV bytes into a [`RawTable`].
///
/// The first record is the header; values and headers are trimmed. Short
/// records are padded with `None` so every row has one cell per header.
pub fn parse(content: &[u8]) -> Result<RawTable, PipelineError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|error| PipelineError::Parse { format: "CSV", reason: error.to_string() })?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<String>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| PipelineError::Parse { format: "CSV", reason: error.to_string() })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let mut row: RawRow = record
            .iter()
            .map(|value| (!value.is_empty()).then(|| value.to_owned()))
            .collect();
        row.resize(headers.len(), None);
        row.truncate(headers.len());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keyed_by_header() {
        let table = parse(b"Date, Time ,Power_kW\n2024-01-01,00:00,20\n2024-01-01,01:00,40\n")
            .unwrap();
        assert_eq!(table.headers, vec!["Date", "Time", "Power_kW"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "Power_kW"), Some("40"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse(b"Date,Time,Power_kW\n\n2024-01-01,00:00,20\n\n").unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_values_trimmed() {
        let table = parse(b"Date,Time,Power_kW\n 2024-01-01 , 00:00 , 20 \n").unwrap();
        assert_eq!(table.cell(0, "Date"), Some("2024-01-01"));
        assert_eq!(table.cell(0, "Power_kW"), Some("20"));
    }

    #[test]
    fn test_short_record_padded() {
        let table = parse(b"Date,Time,Power_kW\n2024-01-01,00:00\n").unwrap();
        assert_eq!(table.cell(0, "Power_kW"), None);
        assert_eq!(table.rows[0].len(), 3);
    }
}
