use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    series::DayBucket,
    sizing::SizingRow,
};

#[must_use]
pub fn build_daily_peak_table(days: &[DayBucket]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Day", "Readings", "Peak"]);
    for bucket in days {
        let peak_cell = match bucket.peak() {
            Some(peak) => Cell::new(peak).set_alignment(CellAlignment::Right),
            None => Cell::new("no data").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(bucket.day),
            Cell::new(bucket.points.len()).set_alignment(CellAlignment::Right),
            peak_cell,
        ]);
    }
    table
}

#[must_use]
pub fn build_sizing_table(rows: &[SizingRow]) -> Table {
    let with_savings = rows.iter().any(|row| row.annual_savings.is_some());

    let mut table = new_table();
    let mut header = vec!["Units", "Threshold", "Peak reduction", "Energy shaved"];
    if with_savings {
        header.push("Annual savings");
    }
    header.push("Payback");
    table.set_header(header);

    for row in rows {
        let mut cells = vec![
            Cell::new(row.units),
            Cell::new(row.threshold).set_alignment(CellAlignment::Right),
            Cell::new(row.peak_reduction).set_alignment(CellAlignment::Right),
            Cell::new(row.energy_shaved).set_alignment(CellAlignment::Right),
        ];
        if with_savings {
            cells.push(match row.annual_savings {
                Some(savings) => Cell::new(savings).set_alignment(CellAlignment::Right),
                None => Cell::new("n/a").add_attribute(comfy_table::Attribute::Dim),
            });
        }
        cells.push(match row.payback {
            Some(payback) => Cell::new(payback).set_alignment(CellAlignment::Right),
            None => Cell::new("n/a").fg(Color::Red),
        });
        table.add_row(cells);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        quantity::{power::Kilowatts, time::Years},
        sizing::{BessConfig, SizingPolicy, size},
    };

    fn rows() -> Vec<SizingRow> {
        let config = BessConfig {
            max_units: 2,
            power_per_unit: Kilowatts::from(100.0),
            energy_per_unit: crate::quantity::energy::KilowattHours::from(215.0),
            cost_per_unit: crate::quantity::cost::Cost::from(180_000.0),
            demand_rate: crate::quantity::rate::MonthlyDemandRate::from(15.0),
            max_depth_of_discharge: 0.9,
            base_threshold_per_unit: Kilowatts::from(150.0),
            fraction_per_unit: 0.05,
            shaving_hours: 2.0,
        };
        size(SizingPolicy::Linear, Kilowatts::from(400.0), &config)
    }

    #[test]
    fn test_sizing_table_two_decimals() {
        let rendered = build_sizing_table(&rows()).to_string();
        assert!(rendered.contains("150.00 kW"));
        assert!(rendered.contains("50.00 kWh"));
    }

    #[test]
    fn test_payback_sentinel_rendered_as_na() {
        let mut rows = rows();
        rows[0].payback = None::<Years>;
        let rendered = build_sizing_table(&rows).to_string();
        assert!(rendered.contains("n/a"));
    }
}
