use thiserror::Error;

/// Errors returned by the Google Maps web-service client.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-OK envelope status (`REQUEST_DENIED`,
    /// `INVALID_REQUEST`, `OVER_QUERY_LIMIT`, ...).
    #[error("Google Maps API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
