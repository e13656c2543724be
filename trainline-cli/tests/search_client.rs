//! Trip search client tests against a mocked service.

use chrono::{Duration, NaiveDate};
use trainline_cli::domain::{SearchQuery, TransportationMean};
use trainline_cli::trainline::{SearchError, TrainlineClient, TrainlineConfig, TripSearch};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query(mean: Option<TransportationMean>) -> SearchQuery {
    let from = NaiveDate::from_ymd_opt(2024, 12, 25)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    SearchQuery {
        departure: "Toulouse".into(),
        arrival: "Bordeaux".into(),
        from_date: from,
        to_date: from + Duration::hours(3),
        transportation_mean: mean,
    }
}

fn client(server: &MockServer) -> TrainlineClient {
    TrainlineClient::new(TrainlineConfig::new(server.uri()).with_api_key("test-key")).unwrap()
}

fn trips_body() -> serde_json::Value {
    serde_json::json!({
        "trips": [
            {
                "departure_station": "Toulouse",
                "arrival_station": "Bordeaux",
                "departure_date": "2024-12-25T08:19:00",
                "arrival_date": "2024-12-25T10:26:00",
                "number_of_segments": 1,
                "price": 36.0,
                "currency": "EUR",
                "transportation_mean": "train",
                "bicycle_reservation": "unavailable"
            },
            {
                "departure_station": "Toulouse",
                "arrival_station": "Bordeaux",
                "departure_date": "2024-12-25T10:46:00",
                "arrival_date": "2024-12-25T12:58:00",
                "number_of_segments": 1,
                "price": 29.0,
                "currency": "EUR",
                "transportation_mean": "train",
                "bicycle_reservation": "available"
            }
        ]
    })
}

#[tokio::test]
async fn sends_contract_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("x-apikey", "test-key"))
        .and(query_param("departure_station", "Toulouse"))
        .and(query_param("arrival_station", "Bordeaux"))
        .and(query_param("from_date", "25/12/2024 08:00"))
        .and(query_param("to_date", "25/12/2024 11:00"))
        .and(query_param("transportation_mean", "train"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trips_body()))
        .expect(1)
        .mount(&server)
        .await;

    let results = client(&server)
        .search(&query(Some(TransportationMean::Train)))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    let csv = results.csv().unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("25/12/2024 08:19;25/12/2024 10:26;02h07;1;36,00;EUR;train;unavailable"));
}

#[tokio::test]
async fn no_filter_omits_transportation_mean() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"trips": []})))
        .mount(&server)
        .await;

    let results = client(&server).search(&query(None)).await.unwrap();
    assert!(results.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0]
            .url
            .query_pairs()
            .all(|(k, _)| k != "transportation_mean")
    );
}

#[tokio::test]
async fn invalid_trips_skipped() {
    let server = MockServer::start().await;

    let mut body = trips_body();
    body["trips"][1]["departure_date"] = serde_json::json!("tomorrow morning");

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let results = client(&server).search(&query(None)).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).search(&query(None)).await.unwrap_err();
    assert!(matches!(err, SearchError::Unauthorized));
}

#[tokio::test]
async fn rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server).search(&query(None)).await.unwrap_err();
    assert!(matches!(err, SearchError::RateLimited));
}

#[tokio::test]
async fn unknown_station() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown station Bordeaux"))
        .mount(&server)
        .await;

    let err = client(&server).search(&query(None)).await.unwrap_err();
    match err {
        SearchError::StationNotFound { message } => {
            assert_eq!(message, "unknown station Bordeaux");
        }
        other => panic!("expected StationNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client(&server).search(&query(None)).await.unwrap_err();
    match err {
        SearchError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).search(&query(None)).await.unwrap_err();
    match err {
        SearchError::Json { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>oops</html>"));
        }
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = TrainlineClient::new(TrainlineConfig::new(uri).with_timeout(2)).unwrap();
    let err = client.search(&query(None)).await.unwrap_err();
    assert!(matches!(err, SearchError::Http(_)));
}
