//! Turning a daily series into the weekly summary.

use crate::{
    condition::classify,
    day::day_name,
    error::InvalidDate,
    model::{DailySeries, ReportLine},
    provider::ForecastSource,
};

/// One line per day, in series order.
///
/// Temperatures are rounded half away from zero (`20.5` -> `21`, `-2.5` -> `-3`).
pub fn build_report(series: &DailySeries) -> Result<Vec<ReportLine>, InvalidDate> {
    series
        .days()
        .map(|day| -> Result<ReportLine, InvalidDate> {
            Ok(ReportLine {
                weekday: day_name(day.date)?,
                high: round_temp(day.max_temp),
                low: round_temp(day.min_temp),
                condition: classify(day.rain, day.snow, day.wind),
            })
        })
        .collect()
}

fn round_temp(celsius: f64) -> i64 {
    celsius.round() as i64
}

/// Fetch a series, logging and swallowing any failure.
pub async fn load_series<S>(source: &S, url: &str) -> Option<DailySeries>
where
    S: ForecastSource + ?Sized,
{
    match source.fetch_forecast(url).await {
        Ok(series) => Some(series),
        Err(err) => {
            tracing::error!(error = %err, "Unable to load weather data");
            None
        }
    }
}

/// Fetch and format the weekly summary.
///
/// Returns `Ok(None)` when the forecast could not be loaded; the cause has
/// already been logged. A malformed date in an otherwise valid response is
/// returned as an error.
pub async fn weekly_report<S>(source: &S, url: &str) -> Result<Option<Vec<ReportLine>>, InvalidDate>
where
    S: ForecastSource + ?Sized,
{
    let Some(series) = load_series(source, url).await else {
        return Ok(None);
    };

    build_report(&series).map(Some)
}

/// Render lines the way a list of strings debug-prints, e.g. `["Monday: 20°C / 10°C (Sunny)"]`.
pub fn render(lines: &[ReportLine]) -> String {
    let strings: Vec<String> = lines.iter().map(ToString::to_string).collect();
    format!("{strings:?}")
}
