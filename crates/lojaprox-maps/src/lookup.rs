//! Nearest-store lookup pipeline.
//!
//! Thin orchestration over [`MapsClient`]: geocode the postal code, fetch
//! nearby candidates, batch-measure driving distances, pair and rank, then
//! resolve the winner's coordinates. Per-request state only; nothing here
//! survives a lookup.

use thiserror::Error;

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::types::{
    Coordinates, Destination, DistanceInfo, GeocodedLocation, MatrixElement, RankedStore,
    StoreCandidate,
};

/// Sentinel distance for candidates the matrix could not measure. Larger
/// than any real-world driving distance, so they always sort last.
pub const UNREACHABLE_DISTANCE_METERS: i64 = 1_000_000_000_000;

/// Sentinel shown in place of unavailable distance/duration texts.
pub const UNAVAILABLE_TEXT: &str = "N/D";

/// Country qualifier appended to every postal-code geocoding query.
const COUNTRY_QUALIFIER: &str = ", Brasil";

/// Label used when a destination has neither formatted address nor name.
const FALLBACK_DESTINATION_LABEL: &str = "Destino";

/// Address shown when a candidate has no `vicinity`.
const ADDRESS_UNAVAILABLE: &str = "Endereço não disponível";

/// Errors produced by the lookup pipeline.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Maps(#[from] MapsError),

    /// Geocoding the postal code returned zero results.
    #[error("postal code not resolvable: {0}")]
    PostalCodeNotFound(String),

    /// Place details for the selected store carried no geometry.
    #[error("destination has no coordinates: {0}")]
    MissingCoordinates(String),

    /// The candidate and distance sequences were not the same length.
    #[error("candidate/distance mismatch: {candidates} candidates, {distances} distances")]
    CandidateDistanceMismatch { candidates: usize, distances: usize },
}

/// Resolves a Brazilian postal code to coordinates and a formatted address.
///
/// Appends the fixed country qualifier before geocoding. The first result
/// wins unconditionally; there is no disambiguation.
///
/// # Errors
///
/// [`LookupError::PostalCodeNotFound`] when geocoding returns no results;
/// [`LookupError::Maps`] on client failures.
pub async fn geocode_postal_code(
    client: &MapsClient,
    cep: &str,
) -> Result<GeocodedLocation, LookupError> {
    let query = format!("{cep}{COUNTRY_QUALIFIER}");
    let results = client.geocode(&query).await?;
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::PostalCodeNotFound(cep.to_string()))?;
    Ok(GeocodedLocation {
        coordinates: first.geometry.location,
        formatted_address: first.formatted_address,
    })
}

/// Fetches stores near `origin` matching `keyword`, truncated to
/// `max_results`. An empty result is not an error.
///
/// # Errors
///
/// [`LookupError::Maps`] on client failures.
pub async fn find_nearby_stores(
    client: &MapsClient,
    origin: Coordinates,
    keyword: &str,
    max_results: usize,
) -> Result<Vec<StoreCandidate>, LookupError> {
    let mut stores = client.places_nearby(origin, keyword).await?;
    stores.truncate(max_results);
    tracing::debug!(keyword, count = stores.len(), "nearby stores");
    Ok(stores)
}

/// Measures driving distance from `origin` to every candidate in one
/// batched call. An empty candidate list short-circuits to an empty result
/// with no external call. Elements whose status is not `"OK"` are replaced
/// by the sentinel so the affected candidate sorts last instead of failing
/// the whole batch.
///
/// # Errors
///
/// [`LookupError::Maps`] on client failures.
pub async fn measure_distances(
    client: &MapsClient,
    origin: Coordinates,
    candidates: &[StoreCandidate],
) -> Result<Vec<DistanceInfo>, LookupError> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    let place_ids: Vec<String> = candidates.iter().map(|c| c.place_id.clone()).collect();
    let elements = client.distance_matrix(origin, &place_ids).await?;
    Ok(elements.into_iter().map(DistanceInfo::from_element).collect())
}

impl DistanceInfo {
    /// Maps one matrix element to distance info, substituting the sentinel
    /// when the element did not report `"OK"` or lacks its payload.
    fn from_element(element: MatrixElement) -> Self {
        if element.status == "OK" {
            if let (Some(distance), Some(duration)) = (element.distance, element.duration) {
                return Self {
                    distance_text: distance.text,
                    duration_text: duration.text,
                    distance_meters: distance.value,
                };
            }
        }
        Self::unreachable()
    }

    fn unreachable() -> Self {
        Self {
            distance_text: UNAVAILABLE_TEXT.to_string(),
            duration_text: UNAVAILABLE_TEXT.to_string(),
            distance_meters: UNREACHABLE_DISTANCE_METERS,
        }
    }
}

/// Pairs candidates with their distance records positionally.
///
/// The two sequences must have the same length and ordering, as returned by
/// the external service. Output preserves the original response order.
///
/// # Errors
///
/// [`LookupError::CandidateDistanceMismatch`] when the lengths differ.
pub fn pair_with_distances(
    candidates: Vec<StoreCandidate>,
    distances: Vec<DistanceInfo>,
) -> Result<Vec<RankedStore>, LookupError> {
    if candidates.len() != distances.len() {
        return Err(LookupError::CandidateDistanceMismatch {
            candidates: candidates.len(),
            distances: distances.len(),
        });
    }
    Ok(candidates
        .into_iter()
        .zip(distances)
        .map(|(candidate, info)| RankedStore {
            place_id: candidate.place_id,
            name: candidate.name,
            address: candidate
                .vicinity
                .unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_string()),
            distance_text: info.distance_text,
            duration_text: info.duration_text,
            distance_meters: info.distance_meters,
        })
        .collect())
}

/// Sorts stores ascending by numeric distance.
///
/// The sort is stable: ties keep their original response order, so the
/// first element of the result is the nearest store with ties broken by
/// provider ranking.
#[must_use]
pub fn rank_by_distance(mut stores: Vec<RankedStore>) -> Vec<RankedStore> {
    stores.sort_by_key(|store| store.distance_meters);
    stores
}

/// Resolves the selected store's coordinates and display label via place
/// details. The label falls back from formatted address, to name, to a
/// generic destination label.
///
/// # Errors
///
/// [`LookupError::MissingCoordinates`] when the details response has no
/// geometry; [`LookupError::Maps`] on client failures.
pub async fn resolve_destination(
    client: &MapsClient,
    place_id: &str,
) -> Result<Destination, LookupError> {
    let detail = client.place_details(place_id).await?;
    let coordinates = detail
        .geometry
        .map(|g| g.location)
        .ok_or_else(|| LookupError::MissingCoordinates(place_id.to_string()))?;
    let label = detail
        .formatted_address
        .or(detail.name)
        .unwrap_or_else(|| FALLBACK_DESTINATION_LABEL.to_string());
    Ok(Destination { coordinates, label })
}
