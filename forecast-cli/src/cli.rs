use anyhow::Context;
use clap::Parser;
use forecast_core::{ForecastRequest, OpenMeteoClient, forecast_url, render, weekly_report};

/// Top-level CLI struct. Everything about the query is fixed at compile time.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Weekly weather summary for a fixed location"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let url = forecast_url(&ForecastRequest::default());

        // A failed fetch has already been logged; print nothing.
        if let Some(dump) = report(&OpenMeteoClient::new(), &url).await? {
            println!("{dump}");
        }

        Ok(())
    }
}

/// Rendered weekly report, or `None` when the forecast could not be loaded.
async fn report(client: &OpenMeteoClient, url: &str) -> anyhow::Result<Option<String>> {
    tracing::debug!(%url, "Building weekly report");

    match weekly_report(client, url).await {
        Ok(lines) => Ok(lines.map(|lines| render(&lines))),
        Err(err) => {
            tracing::error!(date = %err.input, "Forecast contained an unreadable date");
            Err(err).context("Forecast contained an unreadable date")
        }
    }
}
