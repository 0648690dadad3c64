//! Integration tests for the LocationIQ client (wiremock-based)

use domain::{OsmKind, OsmTid};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_locationiq::{GeocodingClient, LocationIqClient, LocationIqConfig, LocationIqError};

fn client_for_mock(server: &MockServer) -> LocationIqClient {
    let config = LocationIqConfig::with_base_url("test-token", &server.uri());
    LocationIqClient::new(&config).unwrap()
}

const fn sample_search_json() -> &'static str {
    r#"[
        {
            "place_id": "331960614",
            "osm_id": "62",
            "osm_type": "relation",
            "display_name": "Springfield, Sangamon County, Illinois, USA",
            "lat": "39.7990175",
            "lon": "-89.6439575",
            "address": {
                "city": "Springfield",
                "county": "Sangamon County",
                "state": "Illinois",
                "country": "United States of America",
                "country_code": "us"
            }
        },
        {
            "place_id": "331960615",
            "osm_id": "240109189",
            "osm_type": "way",
            "display_name": "Springfield Road, Chelmsford, Essex, England",
            "lat": "51.73",
            "lon": "0.48",
            "address": {
                "road": "Springfield Road",
                "town": "Chelmsford",
                "state": "England",
                "country_code": "gb"
            }
        }
    ]"#
}

const fn sample_lookup_json() -> &'static str {
    r#"[
        {
            "osm_id": "5200886615",
            "osm_type": "node",
            "display_name": "Ferry Building, 1, Embarcadero, San Francisco, California, 94111, USA",
            "lat": "37.7955",
            "lon": "-122.3937",
            "address": {
                "house_number": "1",
                "road": "Embarcadero",
                "city": "San Francisco",
                "state": "California",
                "postcode": "94111",
                "country_code": "us"
            }
        }
    ]"#
}

#[tokio::test]
async fn test_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("key", "test-token"))
        .and(query_param("format", "json"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("q", "Springfield"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client.search("Springfield").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].osm_id, "62");
    assert_eq!(results[0].city(), "Springfield");
    assert_eq!(results[1].osm_type, "way");
    assert!(!results[1].is_city());
}

#[tokio::test]
async fn test_search_not_found_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error": "Unable to geocode"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client.search("xxxxxxxx").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "2"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search("Springfield").await.unwrap_err();

    assert!(matches!(
        err,
        LocationIqError::RateLimitExceeded {
            retry_after_secs: Some(2)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_search_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error": "Invalid key"}"#))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search("Springfield").await.unwrap_err();
    assert!(matches!(err, LocationIqError::RequestFailed(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search("Springfield").await.unwrap_err();
    assert!(matches!(err, LocationIqError::ParseError(_)));
}

#[tokio::test]
async fn test_search_empty_query_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let err = client.search("   ").await.unwrap_err();
    assert!(matches!(err, LocationIqError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_autocomplete_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/autocomplete"))
        .and(query_param("key", "test-token"))
        .and(query_param("dedupe", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("q", "Spring"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let results = client.autocomplete("Spring").await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/lookup"))
        .and(query_param("osm_ids", "N5200886615"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_lookup_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let tid = OsmTid::new(5_200_886_615, OsmKind::Node).unwrap();
    let record = client.lookup(&tid).await.unwrap();

    assert_eq!(record.osm_id, "5200886615");
    assert_eq!(
        record.point_address(),
        "Ferry Building, 1 Embarcadero, San Francisco, California, 94111"
    );
}

#[tokio::test]
async fn test_lookup_empty_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let tid: OsmTid = "R1".parse().unwrap();
    let err = client.lookup(&tid).await.unwrap_err();
    assert!(matches!(err, LocationIqError::NotFound(ref t) if t == "R1"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 9 on CI runners
    let config = LocationIqConfig::with_base_url("test-token", "http://127.0.0.1:9");
    let client = LocationIqClient::new(&config).unwrap();

    let err = client.search("Springfield").await.unwrap_err();
    assert!(matches!(
        err,
        LocationIqError::ConnectionFailed(_) | LocationIqError::Timeout { .. }
    ));
}
