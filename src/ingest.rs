pub mod csv;
pub mod schema;
pub mod spreadsheet;

use std::path::Path;

use clap::ValueEnum;

use crate::{error::PipelineError, prelude::*};

/// One cell per header, in header order. A missing cell is `None`, never dropped.
pub type RawRow = Vec<Option<String>>;

/// A parsed upload: header names plus rows in file order.
#[must_use]
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell by row index and column name.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let column = self.column_index(name)?;
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    /// Sniff the format from the file extension; `.xls`/`.xlsx` are workbooks,
    /// everything else is treated as CSV.
    pub fn sniff(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("xls") => Self::Spreadsheet,
            Some(extension) if extension.eq_ignore_ascii_case("xlsx") => Self::Spreadsheet,
            _ => Self::Csv,
        }
    }
}

/// Decode the uploaded bytes into a [`RawTable`].
pub fn parse(content: &[u8], format: InputFormat) -> Result<RawTable, PipelineError> {
    let table = match format {
        InputFormat::Csv => csv::parse(content)?,
        InputFormat::Spreadsheet => spreadsheet::parse(content)?,
    };
    info!(n_headers = table.headers.len(), n_rows = table.rows.len(), "parsed");
    Ok(table)
}
