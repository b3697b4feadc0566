use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    ingest::InputFormat,
    quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts, rate::MonthlyDemandRate},
    sizing::{BessConfig, SizingPolicy},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size a BESS from a load-profile file and print the results.
    Analyze(Box<AnalyzeArgs>),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Load profile: CSV or a workbook (xls/xlsx) with `Date`, `Time` and
    /// `Power_kW` columns.
    pub path: Option<PathBuf>,

    /// Force the input format instead of sniffing the file extension.
    #[clap(long, value_enum)]
    pub format: Option<InputFormat>,

    #[clap(long, value_enum, default_value = "linear", env = "SIZING_POLICY")]
    pub policy: SizingPolicy,

    /// Write the load-curve payload for the charting front end as JSON.
    #[clap(long = "chart-out")]
    pub chart_out: Option<PathBuf>,

    /// Emit the chart payload in chronological order instead of file order.
    #[clap(long)]
    pub sorted: bool,

    #[clap(flatten)]
    pub bess: BessArgs,

    #[clap(flatten)]
    pub peak_window: PeakWindowArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct BessArgs {
    /// Candidate unit counts run from 1 up to and including this.
    #[clap(long, default_value = "5", env = "BESS_UNITS")]
    pub units: u32,

    #[clap(long = "power-per-unit-kilowatts", default_value = "100", env = "POWER_PER_UNIT_KILOWATTS")]
    pub power_per_unit: Kilowatts,

    #[clap(
        long = "energy-per-unit-kilowatt-hours",
        default_value = "215",
        env = "ENERGY_PER_UNIT_KILOWATT_HOURS"
    )]
    pub energy_per_unit: KilowattHours,

    #[clap(long = "cost-per-unit", default_value = "180000", env = "COST_PER_UNIT")]
    pub cost_per_unit: Cost,

    /// Demand charge in euro per kilowatt per month.
    #[clap(long = "demand-rate", default_value = "15", env = "DEMAND_RATE")]
    pub demand_rate: MonthlyDemandRate,

    /// Usable fraction of the rated energy capacity.
    #[clap(long = "max-dod", default_value = "0.9", env = "MAX_DEPTH_OF_DISCHARGE")]
    pub max_depth_of_discharge: f64,

    /// Linear policy: shaving threshold contributed by each unit.
    #[clap(
        long = "base-threshold-kilowatts",
        default_value = "150",
        env = "BASE_THRESHOLD_KILOWATTS"
    )]
    pub base_threshold_per_unit: Kilowatts,

    /// Fractional policy: share of the observed peak shaved per unit.
    #[clap(long = "fraction-per-unit", default_value = "0.05", env = "FRACTION_PER_UNIT")]
    pub fraction_per_unit: f64,

    /// Fractional policy: hours per day the shaved peak is sustained.
    #[clap(long = "shaving-hours", default_value = "2", env = "SHAVING_HOURS")]
    pub shaving_hours: f64,
}

impl BessArgs {
    #[must_use]
    pub fn to_config(self) -> BessConfig {
        BessConfig {
            max_units: self.units,
            power_per_unit: self.power_per_unit,
            energy_per_unit: self.energy_per_unit,
            cost_per_unit: self.cost_per_unit,
            demand_rate: self.demand_rate,
            max_depth_of_discharge: self.max_depth_of_discharge,
            base_threshold_per_unit: self.base_threshold_per_unit,
            fraction_per_unit: self.fraction_per_unit,
            shaving_hours: self.shaving_hours,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct PeakWindowArgs {
    /// First hour of the peak window, inclusive.
    #[clap(long = "peak-window-start", default_value = "14", env = "PEAK_WINDOW_START")]
    pub start: u32,

    /// Last hour of the peak window, exclusive.
    #[clap(long = "peak-window-end", default_value = "22", env = "PEAK_WINDOW_END")]
    pub end: u32,
}

impl PeakWindowArgs {
    #[must_use]
    pub const fn as_range(self) -> (u32, u32) {
        (self.start, self.end)
    }
}
