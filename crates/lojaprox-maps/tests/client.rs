//! Integration tests for `MapsClient` using wiremock HTTP mocks.

use lojaprox_maps::types::Coordinates;
use lojaprox_maps::{MapsClient, MapsError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> MapsClient {
    MapsClient::with_base_url("test-key", 30, "lojaprox-test/0.1", base_url)
        .expect("client construction should not fail")
}

const ORIGIN: Coordinates = Coordinates {
    lat: -23.561414,
    lng: -46.655881,
};

#[tokio::test]
async fn geocode_returns_parsed_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "Av. Paulista, 1000 - Bela Vista, São Paulo - SP, 01311-000, Brasil",
                "geometry": { "location": { "lat": -23.561414, "lng": -46.655881 } }
            },
            {
                "formatted_address": "São Paulo - SP, Brasil",
                "geometry": { "location": { "lat": -23.55, "lng": -46.63 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("address", "01311-000, Brasil"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .geocode("01311-000, Brasil")
        .await
        .expect("should parse geocode results");

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].formatted_address,
        "Av. Paulista, 1000 - Bela Vista, São Paulo - SP, 01311-000, Brasil"
    );
    assert!((results[0].geometry.location.lat - -23.561414).abs() < 1e-9);
    assert!((results[0].geometry.location.lng - -46.655881).abs() < 1e-9);
}

#[tokio::test]
async fn geocode_zero_results_is_empty_not_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.geocode("00000-000, Brasil").await.expect("ZERO_RESULTS is not an error");
    assert!(results.is_empty());
}

#[tokio::test]
async fn geocode_request_denied_surfaces_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("01311-000, Brasil").await.unwrap_err();
    assert!(
        matches!(err, MapsError::Api(ref msg) if msg.contains("REQUEST_DENIED")),
        "expected MapsError::Api, got: {err:?}"
    );
}

#[tokio::test]
async fn places_nearby_parses_candidates_in_provider_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "pid-1",
                "name": "Drogaria Central",
                "vicinity": "Av. Paulista, 100",
                "geometry": { "location": { "lat": -23.562, "lng": -46.655 } }
            },
            {
                "place_id": "pid-2",
                "name": "Farmácia Boa Vista"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .and(query_param("location", "-23.561414,-46.655881"))
        .and(query_param("rankby", "distance"))
        .and(query_param("keyword", "farmácia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let stores = client
        .places_nearby(ORIGIN, "farmácia")
        .await
        .expect("should parse nearby stores");

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].place_id, "pid-1");
    assert_eq!(stores[0].vicinity.as_deref(), Some("Av. Paulista, 100"));
    assert_eq!(stores[1].name, "Farmácia Boa Vista");
    assert_eq!(stores[1].vicinity, None);
}

#[tokio::test]
async fn distance_matrix_returns_elements_in_input_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "rows": [
            {
                "elements": [
                    {
                        "status": "OK",
                        "distance": { "text": "1,2 km", "value": 1200 },
                        "duration": { "text": "6 min", "value": 360 }
                    },
                    { "status": "NOT_FOUND" },
                    {
                        "status": "OK",
                        "distance": { "text": "850 m", "value": 850 },
                        "duration": { "text": "4 min", "value": 240 }
                    }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/distancematrix/json"))
        .and(query_param("origins", "-23.561414,-46.655881"))
        .and(query_param("destinations", "place_id:a|place_id:b|place_id:c"))
        .and(query_param("mode", "driving"))
        .and(query_param("language", "pt-BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let place_ids: Vec<String> = ["a", "b", "c"].iter().map(|s| (*s).to_string()).collect();
    let elements = client
        .distance_matrix(ORIGIN, &place_ids)
        .await
        .expect("should parse matrix elements");

    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].status, "OK");
    assert_eq!(elements[0].distance.as_ref().unwrap().value, 1200);
    assert_eq!(elements[1].status, "NOT_FOUND");
    assert!(elements[1].distance.is_none());
    assert_eq!(elements[2].distance.as_ref().unwrap().value, 850);
}

#[tokio::test]
async fn place_details_parses_geometry_and_address() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Drogaria Central",
            "formatted_address": "Av. Paulista, 100 - São Paulo - SP",
            "geometry": { "location": { "lat": -23.562, "lng": -46.6551 } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/details/json"))
        .and(query_param("place_id", "pid-1"))
        .and(query_param("language", "pt-BR"))
        .and(query_param("fields", "name,formatted_address,geometry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("pid-1")
        .await
        .expect("should parse place details");

    assert_eq!(detail.name.as_deref(), Some("Drogaria Central"));
    assert_eq!(
        detail.formatted_address.as_deref(),
        Some("Av. Paulista, 100 - São Paulo - SP")
    );
    let location = detail.geometry.expect("geometry should be present").location;
    assert!((location.lat - -23.562).abs() < 1e-9);
}

#[tokio::test]
async fn place_details_without_result_yields_empty_detail() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "OK" });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client.place_details("pid-x").await.expect("empty result is tolerated");
    assert!(detail.name.is_none());
    assert!(detail.geometry.is_none());
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.geocode("01311-000, Brasil").await.unwrap_err();
    assert!(
        matches!(err, MapsError::Http(_)),
        "expected MapsError::Http, got: {err:?}"
    );
}
