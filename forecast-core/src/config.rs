/// Open-Meteo daily forecast endpoint.
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Kathmandu.
pub const DEFAULT_LATITUDE: f64 = 27.7017;
pub const DEFAULT_LONGITUDE: f64 = 85.3206;

pub const DEFAULT_TIMEZONE: &str = "Asia/Singapore";

/// Daily variables requested from the API, in query order.
///
/// `precipitation_hours` is requested but nothing downstream reads it.
pub const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "rain_sum",
    "snowfall_sum",
    "windspeed_10m_max",
    "precipitation_hours",
];

/// Parameters of a single forecast query.
///
/// Built once from the constants above and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,

    /// Example: `["temperature_2m_max", "rain_sum"]`, sent as one comma-joined value.
    pub daily: Vec<String>,

    /// IANA zone name the API uses to align day boundaries.
    pub timezone: String,
}

impl ForecastRequest {
    pub fn new(
        latitude: f64,
        longitude: f64,
        daily: impl IntoIterator<Item = impl Into<String>>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            daily: daily.into_iter().map(Into::into).collect(),
            timezone: timezone.into(),
        }
    }

    /// The `daily` parameter value as the API expects it.
    pub fn daily_param(&self) -> String {
        self.daily.join(",")
    }
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_LATITUDE,
            DEFAULT_LONGITUDE,
            DAILY_FIELDS.iter().copied(),
            DEFAULT_TIMEZONE,
        )
    }
}
