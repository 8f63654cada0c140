//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The static forecast query and its URL encoding
//! - A fetcher for the Open-Meteo daily forecast API
//! - Weekday formatting and the rain/snow/wind condition rule
//! - The weekly report built from those pieces
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod day;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod report;

pub use condition::classify;
pub use config::{ForecastRequest, OPEN_METEO_FORECAST_URL};
pub use day::day_name;
pub use error::{DecodeError, ForecastError, InvalidDate};
pub use model::{Condition, DailySeries, DailyValues, ReportLine};
pub use provider::{ForecastSource, OpenMeteoClient};
pub use query::{build_url, forecast_url};
pub use report::{build_report, load_series, render, weekly_report};
