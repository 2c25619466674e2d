//! Google Maps web-service response types and the domain types built from them.
//!
//! Every endpoint wraps its payload in an envelope carrying a top-level
//! `"status"` field (`"OK"`, `"ZERO_RESULTS"`, or an error code) and an
//! optional `"error_message"`; the response structs mirror that shape.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
///
/// Displays as `"lat,lng"`, the form the Google query parameters expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Geometry wrapper shared by geocoding, nearby-search, and place details.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

// ---------------------------------------------------------------------------
// Geocoding API
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One geocoding match: coordinates plus the canonical formatted address.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

/// Coordinates and formatted address resolved for a postal code.
#[derive(Debug, Clone)]
pub struct GeocodedLocation {
    pub coordinates: Coordinates,
    pub formatted_address: String,
}

// ---------------------------------------------------------------------------
// Places Nearby Search API
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PlacesNearbyResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<StoreCandidate>,
}

/// A store returned by nearby-search, identified by its opaque `place_id`.
///
/// `vicinity` is the short human-readable address and may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreCandidate {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
}

// ---------------------------------------------------------------------------
// Distance Matrix API
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// One origin→destination cell of the distance matrix.
///
/// Carries its own per-element `status`; `distance`/`duration` are only
/// present when that status is `"OK"`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
}

/// Localized text plus the underlying numeric value (meters or seconds).
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

// ---------------------------------------------------------------------------
// Place Details API
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: PlaceDetail,
}

/// Full attributes for a single place. All fields are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

// ---------------------------------------------------------------------------
// Domain types produced by the lookup pipeline
// ---------------------------------------------------------------------------

/// Distance and duration from the origin to one candidate.
///
/// Candidates whose matrix element did not report `"OK"` carry sentinel
/// texts and an effectively infinite distance so they sort last.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceInfo {
    pub distance_text: String,
    pub duration_text: String,
    pub distance_meters: i64,
}

/// A candidate paired with its measured driving distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStore {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub distance_text: String,
    pub duration_text: String,
    pub distance_meters: i64,
}

/// The resolved route destination: coordinates plus a display label.
#[derive(Debug, Clone)]
pub struct Destination {
    pub coordinates: Coordinates,
    pub label: String,
}
