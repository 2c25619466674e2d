//! Driving-route URL for the Google Maps directions page.

use reqwest::Url;

use crate::types::Coordinates;

const ROUTE_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Builds the browser URL for a driving route between two coordinate pairs.
///
/// Both endpoints are embedded as `lat,lng` strings and the travel mode is
/// fixed to driving, matching the Maps URLs API contract.
#[must_use]
pub fn driving_route_url(origin: Coordinates, destination: Coordinates) -> Url {
    let mut url = Url::parse(ROUTE_BASE_URL).expect("route base URL is valid");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("api", "1");
        pairs.append_pair("origin", &origin.to_string());
        pairs.append_pair("destination", &destination.to_string());
        pairs.append_pair("travelmode", "driving");
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_url_embeds_both_coordinate_pairs() {
        let origin = Coordinates {
            lat: -23.561414,
            lng: -46.655881,
        };
        let destination = Coordinates {
            lat: -23.5634,
            lng: -46.6523,
        };
        let url = driving_route_url(origin, destination);
        assert_eq!(
            url.as_str(),
            "https://www.google.com/maps/dir/?api=1&origin=-23.561414%2C-46.655881&destination=-23.5634%2C-46.6523&travelmode=driving"
        );
    }

    #[test]
    fn route_url_is_always_driving_mode() {
        let c = Coordinates { lat: 0.0, lng: 0.0 };
        let url = driving_route_url(c, c);
        assert!(url.as_str().ends_with("travelmode=driving"), "{url}");
    }
}
