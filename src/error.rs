use thiserror::Error;

/// Everything that can reject a run before results are shown.
///
/// Each variant maps to one user-facing message category; a failed run reports
/// exactly one of these and produces no partial output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no input file was supplied")]
    MissingInput,

    #[error("failed to parse the file as {format}: {reason}")]
    Parse { format: &'static str, reason: String },

    #[error("missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("row {row}: `{value}` is not a valid power reading")]
    Coercion { row: usize, value: String },

    #[error("the file contains no data rows")]
    Degenerate,
}
