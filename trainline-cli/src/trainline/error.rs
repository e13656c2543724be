//! Trip search error types.

use super::convert::ConversionError;

/// Errors from the trip search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API key cannot be sent as a header value
    #[error("invalid API key: must be visible ASCII")]
    InvalidApiKey,

    /// The service rejected the API key
    #[error("unauthorized: check TRAINLINE_API_KEY")]
    Unauthorized,

    /// Rate limited by the service
    #[error("rate limited by the trip search service")]
    RateLimited,

    /// One of the stations is unknown to the service
    #[error("station not found: {message}")]
    StationNotFound { message: String },

    /// The service returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// A trip in the response carried unusable data
    #[error("invalid trip data: {0}")]
    Conversion(#[from] ConversionError),

    /// Fixture file could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },

    /// Result set could not be rendered as CSV
    #[error("CSV error: {message}")]
    Csv { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check TRAINLINE_API_KEY");

        let err = SearchError::InvalidApiKey;
        assert_eq!(err.to_string(), "invalid API key: must be visible ASCII");

        let err = SearchError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = SearchError::StationNotFound {
            message: "unknown station Toulous".into(),
        };
        assert_eq!(
            err.to_string(),
            "station not found: unknown station Toulous"
        );

        let err = SearchError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));
    }
}
