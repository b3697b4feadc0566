use serde::Serialize;

use crate::series::{LoadSeries, in_peak_window};

/// What the external charting collaborator needs to draw the load curve:
/// ordered labels, one named value series, and the indices that fall inside
/// the peak-hour window.
#[must_use]
#[derive(Debug, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub peak_window_indices: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl ChartPayload {
    /// Window membership is decided on the parsed hour of each point, not by
    /// matching label prefixes.
    pub fn from_series(series: &LoadSeries, peak_window: (u32, u32)) -> Self {
        let labels =
            series.0.iter().map(|point| point.time.format("%Y-%m-%d %H:%M").to_string()).collect();
        let values = series.0.iter().map(|point| point.power.0).collect();
        let peak_window_indices = series
            .0
            .iter()
            .enumerate()
            .filter(|(_, point)| in_peak_window(point.time, peak_window))
            .map(|(index, _)| index)
            .collect();
        Self {
            labels,
            series: vec![ChartSeries { name: "Load (kW)".to_owned(), values }],
            peak_window_indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;

    #[test]
    fn test_window_indices_by_hour() {
        let table = ingest::csv::parse(
            b"Date,Time,Power_kW\n2024-01-01,13:59,20\n2024-01-01,14:00,40\n2024-01-01,21:59,30\n2024-01-01,22:00,10\n",
        )
        .unwrap();
        let series = LoadSeries::try_from_table(&table).unwrap();
        let payload = ChartPayload::from_series(&series, (14, 22));
        assert_eq!(payload.peak_window_indices, vec![1, 2]);
        assert_eq!(payload.labels.len(), 4);
        assert_eq!(payload.series[0].values, vec![20.0, 40.0, 30.0, 10.0]);
    }
}
