use std::fmt;

use crate::error::DecodeError;

/// Per-day forecast values as parallel arrays.
///
/// All six sequences have the same length; index `i` in each refers to the same day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    dates: Vec<String>,
    max_temp: Vec<f64>,
    min_temp: Vec<f64>,
    rain: Vec<f64>,
    snow: Vec<f64>,
    wind: Vec<f64>,
}

impl DailySeries {
    /// Build a series, rejecting arrays whose length differs from `dates`.
    pub fn new(
        dates: Vec<String>,
        max_temp: Vec<f64>,
        min_temp: Vec<f64>,
        rain: Vec<f64>,
        snow: Vec<f64>,
        wind: Vec<f64>,
    ) -> Result<Self, DecodeError> {
        let expected = dates.len();

        for (field, actual) in [
            ("temperature_2m_max", max_temp.len()),
            ("temperature_2m_min", min_temp.len()),
            ("rain_sum", rain.len()),
            ("snowfall_sum", snow.len()),
            ("windspeed_10m_max", wind.len()),
        ] {
            if actual != expected {
                return Err(DecodeError::LengthMismatch { field, expected, actual });
            }
        }

        Ok(Self { dates, max_temp, min_temp, rain, snow, wind })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn max_temp(&self) -> &[f64] {
        &self.max_temp
    }

    pub fn min_temp(&self) -> &[f64] {
        &self.min_temp
    }

    pub fn rain(&self) -> &[f64] {
        &self.rain
    }

    pub fn snow(&self) -> &[f64] {
        &self.snow
    }

    pub fn wind(&self) -> &[f64] {
        &self.wind
    }

    /// Walk the series one day at a time.
    pub fn days(&self) -> impl ExactSizeIterator<Item = DailyValues<'_>> + '_ {
        (0..self.len()).map(move |i| DailyValues {
            date: &self.dates[i],
            max_temp: self.max_temp[i],
            min_temp: self.min_temp[i],
            rain: self.rain[i],
            snow: self.snow[i],
            wind: self.wind[i],
        })
    }
}

/// One day's slice of a [`DailySeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyValues<'a> {
    /// ISO 8601 date, e.g. `2024-01-01`.
    pub date: &'a str,
    /// °C
    pub max_temp: f64,
    /// °C
    pub min_temp: f64,
    /// mm
    pub rain: f64,
    /// cm
    pub snow: f64,
    /// km/h
    pub wind: f64,
}

/// Coarse weather label for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Rainy,
    Snowy,
    Windy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Windy => "Windy",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[Condition::Sunny, Condition::Rainy, Condition::Snowy, Condition::Windy]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rendered day of the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub weekday: String,
    pub high: i64,
    pub low: i64,
    pub condition: Condition,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}°C / {}°C ({})",
            self.weekday, self.high, self.low, self.condition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Result<DailySeries, DecodeError> {
        DailySeries::new(
            (0..n).map(|i| format!("2024-01-0{}", i + 1)).collect(),
            vec![20.0; n],
            vec![10.0; n],
            vec![0.0; n],
            vec![0.0; n],
            vec![5.0; n],
        )
    }

    #[test]
    fn equal_lengths_are_accepted() {
        let s = series(3).expect("lengths match");
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.days().len(), 3);
    }

    #[test]
    fn empty_series_is_valid() {
        let s = series(0).expect("empty is fine");
        assert!(s.is_empty());
        assert_eq!(s.days().count(), 0);
    }

    #[test]
    fn mismatched_length_is_rejected_with_field_name() {
        let err = DailySeries::new(
            vec!["2024-01-01".into(), "2024-01-02".into()],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            vec![0.0],
            vec![3.0, 4.0],
        )
        .unwrap_err();

        match err {
            DecodeError::LengthMismatch { field, expected, actual } => {
                assert_eq!(field, "snowfall_sum");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn days_keep_index_alignment() {
        let s = DailySeries::new(
            vec!["2024-01-01".into(), "2024-01-02".into()],
            vec![20.4, 18.0],
            vec![9.6, 7.0],
            vec![0.0, 1.2],
            vec![0.0, 0.0],
            vec![10.0, 22.0],
        )
        .expect("lengths match");

        let days: Vec<DailyValues<'_>> = s.days().collect();
        assert_eq!(days[1].date, "2024-01-02");
        assert_eq!(days[1].max_temp, 18.0);
        assert_eq!(days[1].rain, 1.2);
        assert_eq!(days[1].wind, 22.0);
    }

    #[test]
    fn condition_display_matches_label() {
        let labels: Vec<String> = Condition::all().iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Sunny", "Rainy", "Snowy", "Windy"]);
    }

    #[test]
    fn report_line_format() {
        let line = ReportLine {
            weekday: "Monday".into(),
            high: 20,
            low: -3,
            condition: Condition::Snowy,
        };

        assert_eq!(line.to_string(), "Monday: 20°C / -3°C (Snowy)");
    }
}
