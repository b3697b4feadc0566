use crate::{
    error::PipelineError,
    ingest::{RawTable, schema},
    prelude::*,
    quantity::power::Kilowatts,
    series::{DayBucket, LoadSeries},
    sizing::{BessConfig, SizingPolicy, SizingRow, size},
};

/// Everything one run produces, owned by the caller.
///
/// There is no module-level upload state: a new upload is simply a new call
/// that yields a new `Analysis`.
#[must_use]
#[derive(Debug)]
pub struct Analysis {
    pub series: LoadSeries,
    pub days: Vec<DayBucket>,
    pub p_max: Kilowatts,
    pub rows: Vec<SizingRow>,
}

/// Validate, normalize, group and size, synchronously, as one unit.
///
/// Fails before producing anything: a rejected dataset never yields partial
/// results.
pub fn analyze(
    table: &RawTable,
    policy: SizingPolicy,
    config: &BessConfig,
) -> Result<Analysis, PipelineError> {
    schema::validate(table)?;
    let series = LoadSeries::try_from_table(table)?;
    let days = series.group_by_day();
    let p_max = series.overall_peak().ok_or(PipelineError::Degenerate)?;
    info!(n_points = series.0.len(), n_days = days.len(), %p_max, "normalized");
    let rows = size(policy, p_max, config);
    Ok(Analysis { series, days, p_max, rows })
}
