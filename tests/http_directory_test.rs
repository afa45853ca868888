mod common;

use common::{directory_config, relay_json};
use httpmock::prelude::*;
use mondial_relay_pickup::{
    Address, HttpPickupDirectory, PickupDirectory, PickupError, PickupResolver, ResolutionResult,
    ServiceCode, Shipment,
};

#[tokio::test]
async fn test_list_sends_query_and_normalizes_list() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/points")
            .query_param("Enseigne", "BDTEST13")
            .query_param("Pays", "FR")
            .query_param("CP", "75001")
            .query_param("Action", "24L")
            .query_param("NombreResultats", "10");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "STAT": "0",
                "PointsRelais": {
                    "PointRelais_Details": [relay_json("0002", "FR"), relay_json("0001", "FR")]
                }
            }));
    });

    let resolver = PickupResolver::new(HttpPickupDirectory::new().unwrap());
    let result = resolver
        .list_pickups(
            &Address::new("75001", "FR"),
            &Shipment::new(42.0),
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    let ids: Vec<String> = result
        .into_result()
        .unwrap()
        .into_iter()
        .map(|pickup| pickup.id)
        .collect();
    assert_eq!(ids, vec!["0002-24R-FR", "0001-24R-FR"]);
}

#[tokio::test]
async fn test_single_object_payload() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/points");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "STAT": "0",
                "PointsRelais": {"PointRelais_Details": relay_json("0001", "FR")}
            }));
    });

    let resolver = PickupResolver::new(HttpPickupDirectory::new().unwrap());
    let result = resolver
        .list_pickups(
            &Address::new("75001", "FR"),
            &Shipment::new(20.0),
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    let pickups = result.pickups().unwrap();
    assert_eq!(pickups.len(), 1);
    assert_eq!(pickups[0].company, "Relay Shop");
}

#[tokio::test]
async fn test_carrier_stat_becomes_directory_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/points");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"STAT": "97"}));
    });

    let resolver = PickupResolver::new(HttpPickupDirectory::new().unwrap());
    let result = resolver
        .list_pickups(
            &Address::new("75001", "FR"),
            &Shipment::new(20.0),
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    assert_eq!(
        result,
        ResolutionResult::Error(PickupError::Directory("97".to_string()))
    );
}

#[tokio::test]
async fn test_missing_points_is_empty_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/points");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"STAT": "0"}));
    });

    let resolver = PickupResolver::new(HttpPickupDirectory::new().unwrap());
    let result = resolver
        .list_pickups(
            &Address::new("75001", "FR"),
            &Shipment::new(20.0),
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    assert_eq!(result, ResolutionResult::Error(PickupError::EmptyResult));
}

#[tokio::test]
async fn test_http_failure_status() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/points");
        then.status(500);
    });

    let directory = HttpPickupDirectory::new().unwrap();
    let result = directory
        .find_all(
            "75001",
            "FR",
            ServiceCode::Standard,
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    assert_eq!(result.unwrap_err().code, "http_500");
}

#[tokio::test]
async fn test_undecodable_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/points");
        then.status(200).body("<soap:Envelope/>");
    });

    let directory = HttpPickupDirectory::new().unwrap();
    let result = directory
        .find_all(
            "75001",
            "FR",
            ServiceCode::Standard,
            &directory_config(&server.url("/points")),
        )
        .await;

    api_mock.assert();
    assert_eq!(result.unwrap_err().code, "invalid_response");
}

#[tokio::test]
async fn test_unreachable_directory() {
    let directory = HttpPickupDirectory::new().unwrap();
    let result = directory
        .find("0001", "FR", &directory_config("http://127.0.0.1:1/points"))
        .await;

    assert_eq!(result.unwrap_err().code, "unreachable");
}

#[tokio::test]
async fn test_address_lookup_with_numeric_coordinates() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/points")
            .query_param("NumPointRelais", "066974")
            .query_param("Pays", "BE");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "STAT": "0",
                "PointsRelais": {
                    "PointRelais_Details": {
                        "Num": "066974",
                        "Pays": "BE",
                        "LgAdr1": "Librairie",
                        "LgAdr3": "Rue Neuve 12",
                        "Ville": "Bruxelles",
                        "CP": "1000",
                        "Latitude": 50.85,
                        "Longitude": 4.35
                    }
                }
            }));
    });

    let resolver = PickupResolver::new(HttpPickupDirectory::new().unwrap());
    let pickup = resolver
        .get_pickup_address("066974-24R-BE", &directory_config(&server.url("/points")))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(pickup.city, "Bruxelles");
    assert_eq!(pickup.street2, "");
    assert_eq!(pickup.latitude, "50.85");
    assert_eq!(pickup.longitude, "4.35");
}
