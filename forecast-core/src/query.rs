//! Query string construction for the forecast endpoint.

use url::form_urlencoded;

use crate::config::{ForecastRequest, OPEN_METEO_FORECAST_URL};

/// Combine `base` with the form-encoded parameters of `request`.
///
/// Parameter order is `latitude`, `longitude`, `daily`, `timezone`.
pub fn build_url(base: &str, request: &ForecastRequest) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("latitude", &request.latitude.to_string())
        .append_pair("longitude", &request.longitude.to_string())
        .append_pair("daily", &request.daily_param())
        .append_pair("timezone", &request.timezone)
        .finish();

    format!("{base}?{query}")
}

/// URL against the public Open-Meteo endpoint.
pub fn forecast_url(request: &ForecastRequest) -> String {
    build_url(OPEN_METEO_FORECAST_URL, request)
}
