//! HTTP client for the Google Maps web services.
//!
//! Wraps `reqwest` with API key management, percent-encoded URL construction,
//! and typed response deserialization. Every endpoint checks the `"status"`
//! field of the JSON envelope: `"OK"` and `"ZERO_RESULTS"` are success,
//! anything else is surfaced as [`MapsError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::MapsError;
use crate::types::{
    Coordinates, DistanceMatrixResponse, GeocodeResponse, GeocodeResult, MatrixElement,
    PlaceDetail, PlaceDetailsResponse, PlacesNearbyResponse, StoreCandidate,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

/// Responses are localized for Brazil.
const LANGUAGE: &str = "pt-BR";

/// Client for the Google Maps web services.
///
/// Holds the HTTP client, API key, and base URL. Use [`MapsClient::new`] for
/// production or [`MapsClient::with_base_url`] to point at a mock server in
/// tests. Immutable after construction; share behind an `Arc` when both a
/// server and background tasks need it.
pub struct MapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl MapsClient {
    /// Creates a new client pointed at the production Google Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MapsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MapsError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // service paths resolve against the host root.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MapsError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text location query to zero or more geocoding results.
    ///
    /// Returns an empty vector on `ZERO_RESULTS`; the caller decides whether
    /// that is an error.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Api`] if the API returns an error status.
    /// - [`MapsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`MapsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, MapsError> {
        let url = self.build_url("maps/api/geocode/json", &[("address", query)]);
        let body = self.request_json(&url).await?;
        Self::check_api_status("geocode", &body)?;

        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: format!("geocode(address={query})"),
                source: e,
            })?;

        Ok(response.results)
    }

    /// Searches for stores near `location` matching `keyword`.
    ///
    /// Results come back in the provider's own distance ranking
    /// (`rankby=distance`); open/closed status is not filtered. Returns an
    /// empty vector when nothing matches.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Api`] if the API returns an error status.
    /// - [`MapsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`MapsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn places_nearby(
        &self,
        location: Coordinates,
        keyword: &str,
    ) -> Result<Vec<StoreCandidate>, MapsError> {
        let url = self.build_url(
            "maps/api/place/nearbysearch/json",
            &[
                ("location", &location.to_string()),
                ("rankby", "distance"),
                ("keyword", keyword),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_status("places_nearby", &body)?;

        let response: PlacesNearbyResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: format!("places_nearby(keyword={keyword})"),
                source: e,
            })?;

        Ok(response.results)
    }

    /// Measures driving distance and duration from one origin to every
    /// destination place ID in a single batched request (language pt-BR).
    ///
    /// Returns the first row's elements, one per destination, in input
    /// order. Per-element status is NOT collapsed here: the caller maps
    /// non-`"OK"` elements to sentinel values.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Api`] if the API returns an error status.
    /// - [`MapsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`MapsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn distance_matrix(
        &self,
        origin: Coordinates,
        place_ids: &[String],
    ) -> Result<Vec<MatrixElement>, MapsError> {
        let destinations = place_ids
            .iter()
            .map(|id| format!("place_id:{id}"))
            .collect::<Vec<_>>()
            .join("|");
        let url = self.build_url(
            "maps/api/distancematrix/json",
            &[
                ("origins", &origin.to_string()),
                ("destinations", &destinations),
                ("mode", "driving"),
                ("language", LANGUAGE),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_status("distance_matrix", &body)?;

        let response: DistanceMatrixResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: format!("distance_matrix(destinations={})", place_ids.len()),
                source: e,
            })?;

        Ok(response
            .rows
            .into_iter()
            .next()
            .map(|row| row.elements)
            .unwrap_or_default())
    }

    /// Fetches full details for a single place ID (language pt-BR).
    ///
    /// Only the fields the lookup needs are requested: name, formatted
    /// address, and geometry. All of them are optional on the wire.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Api`] if the API returns an error status.
    /// - [`MapsError::Http`] on network failure or non-2xx HTTP status.
    /// - [`MapsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, MapsError> {
        let url = self.build_url(
            "maps/api/place/details/json",
            &[
                ("place_id", place_id),
                ("language", LANGUAGE),
                ("fields", "name,formatted_address,geometry"),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_status("place_details", &body)?;

        let response: PlaceDetailsResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: format!("place_details(place_id={place_id})"),
                source: e,
            })?;

        Ok(response.result)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The API key is always the first pair.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] on network failure or a non-2xx status.
    /// Returns [`MapsError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, MapsError> {
        tracing::debug!(path = url.path(), "Google Maps request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error unless it
    /// is `"OK"` or `"ZERO_RESULTS"`.
    fn check_api_status(endpoint: &str, body: &serde_json::Value) -> Result<(), MapsError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .map(|m| format!(": {m}"))
            .unwrap_or_default();
        Err(MapsError::Api(format!("{endpoint}: {status}{message}")))
    }
}
