use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use ordered_float::OrderedFloat;

use crate::{error::PipelineError, ingest::RawTable, quantity::power::Kilowatts};

const DATE_LAYOUTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y"];
const TIME_LAYOUTS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// One load reading, normalized from a raw row.
#[derive(Clone, Copy, Debug, PartialEq, derive_more::Constructor)]
pub struct TimePoint {
    pub time: NaiveDateTime,
    pub power: Kilowatts,
}

/// The whole upload as a typed series, in input row order.
///
/// The input is not guaranteed to be pre-sorted by time and the series does not
/// reorder it; [`LoadSeries::sorted`] exists for callers that want chronology.
#[must_use]
#[derive(Debug)]
pub struct LoadSeries(pub Vec<TimePoint>);

impl LoadSeries {
    /// Normalize every validated row into a [`TimePoint`].
    ///
    /// Coercion is strict: a power value that does not parse as a number aborts
    /// the run. It is never silently treated as zero, so a malformed row cannot
    /// shift the observed maximum.
    pub fn try_from_table(table: &RawTable) -> Result<Self, PipelineError> {
        let mut points = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            let date = table.cell(row, "Date").unwrap_or_default();
            let time = table.cell(row, "Time").unwrap_or_default();
            let power = table.cell(row, "Power_kW").unwrap_or_default();

            let timestamp = parse_timestamp(date, time).ok_or_else(|| PipelineError::Coercion {
                row,
                value: format!("{date} {time}"),
            })?;
            let power: f64 = power
                .parse()
                .map_err(|_| PipelineError::Coercion { row, value: power.to_owned() })?;
            if !power.is_finite() {
                return Err(PipelineError::Coercion { row, value: power.to_string() });
            }
            points.push(TimePoint::new(timestamp, Kilowatts::from(power)));
        }
        if points.is_empty() {
            return Err(PipelineError::Degenerate);
        }
        Ok(Self(points))
    }

    /// Chronologically sorted copy, ties broken by input order (stable sort).
    pub fn sorted(&self) -> Self {
        let mut points = self.0.clone();
        points.sort_by_key(|point| point.time);
        Self(points)
    }

    /// Maximum observed power across the full series.
    pub fn overall_peak(&self) -> Option<Kilowatts> {
        self.0.iter().map(|point| point.power).max_by_key(|power| OrderedFloat(power.0))
    }

    /// Partition into per-calendar-day buckets, first-seen day order.
    pub fn group_by_day(&self) -> Vec<DayBucket> {
        let mut buckets: Vec<DayBucket> = Vec::new();
        for point in &self.0 {
            let day = point.time.date();
            match buckets.iter_mut().find(|bucket| bucket.day == day) {
                Some(bucket) => bucket.points.push(*point),
                None => buckets.push(DayBucket { day, points: vec![*point] }),
            }
        }
        buckets
    }
}

/// All readings of one calendar day, in input order.
#[must_use]
#[derive(Debug)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub points: Vec<TimePoint>,
}

impl DayBucket {
    /// `None` for an empty bucket, never a numeric default.
    pub fn peak(&self) -> Option<Kilowatts> {
        self.points.iter().map(|point| point.power).max_by_key(|power| OrderedFloat(power.0))
    }
}

/// Whether the reading falls inside the peak-hour window `[start, end)`.
///
/// Decided on the parsed hour, not on time-label prefixes.
#[must_use]
pub fn in_peak_window(time: NaiveDateTime, window: (u32, u32)) -> bool {
    let hour = time.hour();
    (window.0..window.1).contains(&hour)
}

fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(date, layout).ok())?;
    let time = TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(time, layout).ok())?;
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;

    fn series(csv: &str) -> Result<LoadSeries, PipelineError> {
        let table = ingest::csv::parse(csv.as_bytes()).unwrap();
        LoadSeries::try_from_table(&table)
    }

    #[test]
    fn test_order_preserved() {
        let series =
            series("Date,Time,Power_kW\n2024-01-01,05:00,20\n2024-01-01,01:00,40\n").unwrap();
        assert_eq!(series.0[0].time.hour(), 5);
        assert_eq!(series.0[1].time.hour(), 1);
        assert_eq!(series.sorted().0[0].time.hour(), 1);
    }

    #[test]
    fn test_malformed_power_aborts() {
        let error = series("Date,Time,Power_kW\n2024-01-01,00:00,abc\n").unwrap_err();
        match error {
            PipelineError::Coercion { row, value } => {
                assert_eq!(row, 0);
                assert_eq!(value, "abc");
            }
            _ => panic!("expected a coercion error"),
        }
    }

    #[test]
    fn test_missing_power_cell_aborts() {
        let error = series("Date,Time,Power_kW\n2024-01-01,00:00,\n").unwrap_err();
        assert!(matches!(error, PipelineError::Coercion { .. }));
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let series = series(
            "Date,Time,Power_kW\n\
             2024-01-01,00:00,20\n\
             2024-01-02,00:00,10\n\
             2024-01-01,01:00,40\n",
        )
        .unwrap();
        let buckets = series.group_by_day();
        assert_eq!(buckets.len(), 2);
        let total: usize = buckets.iter().map(|bucket| bucket.points.len()).sum();
        assert_eq!(total, series.0.len());
        let regrouped: Vec<TimePoint> =
            buckets.iter().flat_map(|bucket| bucket.points.iter().copied()).collect();
        for point in &series.0 {
            assert_eq!(regrouped.iter().filter(|other| *other == point).count(), 1);
        }
        // First-seen day order, input order within a bucket.
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(buckets[0].points[0].power.0, 20.0);
        assert_eq!(buckets[0].points[1].power.0, 40.0);
    }

    #[test]
    fn test_peak_is_max_and_upper_bound() {
        let series =
            series("Date,Time,Power_kW\n2024-01-01,00:00,20\n2024-01-01,01:00,40\n").unwrap();
        let buckets = series.group_by_day();
        let peak = buckets[0].peak().unwrap();
        assert_eq!(peak.0, 40.0);
        assert!(buckets[0].points.iter().all(|point| point.power <= peak));
    }

    #[test]
    fn test_empty_bucket_has_no_peak() {
        let bucket =
            DayBucket { day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), points: Vec::new() };
        assert_eq!(bucket.peak(), None);
    }

    #[test]
    fn test_alternative_layouts() {
        let series = series("Date,Time,Power_kW\n01/02/2024,02:30 PM,15.5\n").unwrap();
        assert_eq!(series.0[0].time.hour(), 14);
    }

    #[test]
    fn test_peak_window_membership() {
        let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let evening = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(14, 0, 0).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(22, 0, 0).unwrap();
        assert!(!in_peak_window(noon, (14, 22)));
        assert!(in_peak_window(evening, (14, 22)));
        assert!(!in_peak_window(late, (14, 22)));
    }
}
