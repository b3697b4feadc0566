use chrono::TimeDelta;
use clap::ValueEnum;

use crate::{
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        rate::MonthlyDemandRate,
        time::Years,
    },
};

/// Fixed BESS parameters for one computation run. Read-only once built.
#[derive(Copy, Clone, Debug)]
pub struct BessConfig {
    /// Candidate unit counts run from 1 up to and including this.
    pub max_units: u32,
    pub power_per_unit: Kilowatts,
    pub energy_per_unit: KilowattHours,
    pub cost_per_unit: Cost,
    pub demand_rate: MonthlyDemandRate,
    /// Usable fraction of the rated energy capacity.
    pub max_depth_of_discharge: f64,
    pub base_threshold_per_unit: Kilowatts,
    /// Peak fraction shaved per unit under the fractional policy.
    pub fraction_per_unit: f64,
    /// Hours per day the shaved peak is sustained under the fractional policy.
    pub shaving_hours: f64,
}

/// The source revisions disagree on the sizing formula, so both live on as
/// named strategies instead of being merged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SizingPolicy {
    /// Threshold and reduction scale linearly with the unit count, ignoring
    /// the observed maximum.
    Linear,
    /// Each unit shaves a fixed fraction off the observed maximum.
    Fractional,
}

/// One line of the results table.
#[derive(Clone, Copy, Debug)]
pub struct SizingRow {
    pub units: u32,
    pub threshold: Kilowatts,
    pub peak_reduction: Kilowatts,
    pub energy_shaved: KilowattHours,
    /// Fractional policy only.
    pub annual_savings: Option<Cost>,
    /// `None` when the reduction (or the savings) is zero: the investment
    /// never pays back, and dividing through would only fabricate a number.
    pub payback: Option<Years>,
}

/// Run the sizing formula for unit counts `1..=max_units`.
///
/// Pure and deterministic: `p_max` is the overall maximum of the series, not a
/// per-day figure.
pub fn size(policy: SizingPolicy, p_max: Kilowatts, config: &BessConfig) -> Vec<SizingRow> {
    info!(?policy, %p_max, n_units = config.max_units, "sizing");
    (1..=config.max_units)
        .map(|units| match policy {
            SizingPolicy::Linear => linear_row(units, config),
            SizingPolicy::Fractional => fractional_row(units, p_max, config),
        })
        .collect()
}

fn linear_row(units: u32, config: &BessConfig) -> SizingRow {
    let threshold = config.base_threshold_per_unit * f64::from(units);
    let peak_reduction = config.power_per_unit * f64::from(units);
    let energy_shaved = peak_reduction * TimeDelta::minutes(30);
    let payback = peak_reduction
        .is_positive()
        .then(|| Years::from(f64::from(units) * config.cost_per_unit.0 / (peak_reduction.0 * 12.0)));
    SizingRow { units, threshold, peak_reduction, energy_shaved, annual_savings: None, payback }
}

fn fractional_row(units: u32, p_max: Kilowatts, config: &BessConfig) -> SizingRow {
    let threshold = p_max * (1.0 - config.fraction_per_unit * f64::from(units));
    let peak_reduction = p_max - threshold;
    let usable_fleet_energy =
        config.energy_per_unit * (f64::from(units) * config.max_depth_of_discharge);
    let energy_shaved = (peak_reduction * hours(config.shaving_hours)).min(usable_fleet_energy);
    let annual_savings = config.demand_rate.annual_savings(peak_reduction);
    let payback = annual_savings
        .is_positive()
        .then(|| Years::from(f64::from(units) * config.cost_per_unit.0 / annual_savings.0));
    SizingRow {
        units,
        threshold,
        peak_reduction,
        energy_shaved,
        annual_savings: Some(annual_savings),
        payback,
    }
}

#[expect(clippy::cast_possible_truncation)]
fn hours(hours: f64) -> TimeDelta {
    TimeDelta::seconds((hours * 3600.0) as i64)
}
