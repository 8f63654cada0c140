use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{DecodeError, ForecastError},
    model::DailySeries,
};

use super::ForecastSource;

/// HTTP client for the Open-Meteo daily forecast API.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoClient {
    http: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    async fn fetch_forecast(&self, url: &str) -> Result<DailySeries, ForecastError> {
        tracing::debug!(%url, "Requesting Open-Meteo daily forecast");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %truncate_body(&body), "Open-Meteo returned an error");
            return Err(ForecastError::RequestFailed { status });
        }

        let body = res.text().await?;
        let series = decode_series(&body)?;

        tracing::debug!(days = series.len(), "Decoded Open-Meteo daily series");
        Ok(series)
    }
}

/// Parse a forecast response body and project the `daily` arrays we use.
pub fn decode_series(body: &str) -> Result<DailySeries, DecodeError> {
    let parsed: OmForecastResponse = serde_json::from_str(body)?;
    parsed.daily.into_series()
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    daily: OmDaily,
}

/// Only the arrays the report needs; everything else in `daily` is ignored.
#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    rain_sum: Vec<f64>,
    snowfall_sum: Vec<f64>,
    windspeed_10m_max: Vec<f64>,
}

impl OmDaily {
    fn into_series(self) -> Result<DailySeries, DecodeError> {
        DailySeries::new(
            self.time,
            self.temperature_2m_max,
            self.temperature_2m_min,
            self.rain_sum,
            self.snowfall_sum,
            self.windspeed_10m_max,
        )
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
