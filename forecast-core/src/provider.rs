use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::ForecastError, model::DailySeries};

pub mod openmeteo;

pub use openmeteo::OpenMeteoClient;

/// Something that can turn a forecast URL into a daily series.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Issue a single request for `url`. Implementations do not retry.
    async fn fetch_forecast(&self, url: &str) -> Result<DailySeries, ForecastError>;
}
