use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

use bank_admin::domain::client::ClientRecord;
use bank_admin::domain::types::{AccountNumber, Balance, ClientName};
use bank_admin::gateway::errors::GatewayError;
use bank_admin::gateway::{ClientReader, ClientWriter, HttpGateway};
use bank_admin::models::config::ApiConfig;

fn gateway_for(server: &Server) -> HttpGateway {
    HttpGateway::new(&ApiConfig {
        api_base_url: format!("{}/", server.url()),
        request_timeout_secs: Some(5),
    })
    .expect("valid base url")
}

fn record(account: &str, name: &str, balance: f64) -> ClientRecord {
    ClientRecord::new(
        AccountNumber::new(account).unwrap(),
        ClientName::new(name).unwrap(),
        Balance::new(balance).unwrap(),
    )
}

#[tokio::test]
async fn lists_clients_from_backend_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/client")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"numCompte": "A001", "nom": "X", "solde": 500.0},
                {"numCompte": "A002", "nom": "Y", "solde": 3000}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let clients = gateway_for(&server).list_clients().await.expect("list failed");

    mock.assert_async().await;
    assert_eq!(
        clients,
        vec![record("A001", "X", 500.0), record("A002", "Y", 3000.0)]
    );
}

#[tokio::test]
async fn fetches_stats() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/client/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total": 12500.0, "min": 500.0, "max": 9000.0}"#)
        .create_async()
        .await;

    let stats = gateway_for(&server).get_stats().await.expect("stats failed");

    mock.assert_async().await;
    assert_eq!(stats.total, 12500.0);
    assert_eq!(stats.min, 500.0);
    assert_eq!(stats.max, 9000.0);
}

#[tokio::test]
async fn create_posts_backend_shape() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/client")
        .match_body(Matcher::Json(
            json!({"numCompte": "B100", "nom": "Alice", "solde": 1200.5}),
        ))
        .with_status(201)
        .create_async()
        .await;

    gateway_for(&server)
        .create_client(&record("B100", "Alice", 1200.5))
        .await
        .expect("create failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn update_patches_by_account_number() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/client/A002")
        .match_body(Matcher::Json(
            json!({"numCompte": "A002", "nom": "Bob", "solde": 4200.0}),
        ))
        .with_status(200)
        .create_async()
        .await;

    let account = AccountNumber::new("A002").unwrap();
    gateway_for(&server)
        .update_client(&account, &record("A002", "Bob", 4200.0))
        .await
        .expect("update failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn deleting_unknown_account_is_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/client/Z999")
        .with_status(404)
        .create_async()
        .await;

    let account = AccountNumber::new("Z999").unwrap();
    let err = gateway_for(&server)
        .delete_client(&account)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, GatewayError::NotFound));
}

#[tokio::test]
async fn server_errors_keep_response_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/client/stats")
        .with_status(500)
        .with_body("database unavailable")
        .create_async()
        .await;

    let err = gateway_for(&server).get_stats().await.unwrap_err();

    match err {
        GatewayError::Status { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payloads_are_decode_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/client")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"numCompte": "", "nom": "X", "solde": 1.0}]).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/client/stats")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let gateway = gateway_for(&server);

    assert!(matches!(
        gateway.list_clients().await,
        Err(GatewayError::Decode(_))
    ));
    assert!(matches!(
        gateway.get_stats().await,
        Err(GatewayError::Decode(_))
    ));
}

#[tokio::test]
async fn ping_reports_client_count() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/client")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"numCompte": "A001", "nom": "X", "solde": 1.0}]).to_string())
        .create_async()
        .await;

    assert_eq!(gateway_for(&server).ping().await.expect("ping failed"), 1);
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let gateway = HttpGateway::new(&ApiConfig {
        api_base_url: "http://127.0.0.1:1/".to_string(),
        request_timeout_secs: Some(2),
    })
    .expect("valid base url");

    assert!(matches!(
        gateway.list_clients().await,
        Err(GatewayError::Network(_))
    ));
}
