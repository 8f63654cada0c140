//! Error types for fetching and formatting forecasts.

use reqwest::StatusCode;

/// Failure anywhere on the fetch-and-decode path.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("Request failed with status {status}")]
    RequestFailed { status: StatusCode },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode forecast: {0}")]
    Decode(#[from] DecodeError),
}

/// The response body did not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("daily.{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// A forecast date that is not `YYYY-MM-DD`.
#[derive(Debug, thiserror::Error)]
#[error("Invalid date '{input}': {source}")]
pub struct InvalidDate {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_mentions_status() {
        let err = ForecastError::RequestFailed { status: StatusCode::SERVICE_UNAVAILABLE };
        assert_eq!(err.to_string(), "Request failed with status 503 Service Unavailable");
    }

    #[test]
    fn length_mismatch_names_the_field() {
        let err = ForecastError::from(DecodeError::LengthMismatch {
            field: "rain_sum",
            expected: 7,
            actual: 6,
        });

        assert_eq!(
            err.to_string(),
            "Failed to decode forecast: daily.rain_sum has 6 entries, expected 7"
        );
    }

    #[test]
    fn json_errors_convert_into_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ForecastError::from(DecodeError::from(json_err));

        assert!(matches!(err, ForecastError::Decode(DecodeError::Json(_))));
    }
}
