use std::io::Cursor;

use akm::api::{self, ApiClient};
use akm::explorer::{self, Explorer};
use reqwest::Client;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn base(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

/// Drive a scripted session against an already-authenticated client.
async fn run_session(server: &MockServer, input: &str) -> (anyhow::Result<()>, String) {
    let api = ApiClient::new(Client::new(), base(server), "tok123".to_string());
    let mut out = Vec::new();
    let mut session = Explorer::new(Cursor::new(input.to_string()), &mut out, api);
    let result = session.run().await;
    drop(session);
    (result, String::from_utf8(out).unwrap())
}

async fn mount_token_exchange(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_json(json!({
            "client_id": "foo",
            "client_secret": "bar"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok123"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn token_exchange_returns_access_token() {
    let server = MockServer::start().await;
    mount_token_exchange(&server).await;

    let token = api::auth::request_token(&Client::new(), &base(&server), "foo", "bar")
        .await
        .unwrap();
    assert_eq!(token, "tok123");
}

#[tokio::test]
async fn failed_token_exchange_prints_body_and_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let result =
        explorer::authenticate(Client::new(), base(&server), "foo", "wrong", &mut out).await;

    assert!(result.is_err());
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("bad credentials"));
}

#[tokio::test]
async fn end_to_end_company_search() {
    let server = MockServer::start().await;
    mount_token_exchange(&server).await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .and(query_param("search", "Acme"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"company_name": "Acme", "company_id": "42"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut out = Vec::new();
    let api = explorer::authenticate(Client::new(), base(&server), "foo", "bar", &mut out)
        .await
        .unwrap();

    let mut session = Explorer::new(Cursor::new("1\nAcme\n10\n".to_string()), &mut out, api);
    let result = session.run().await;
    drop(session);
    assert!(result.is_ok());

    let printed = String::from_utf8(out).unwrap();
    let delimiter = "-".repeat(40);
    assert!(printed.contains(&format!("{delimiter}\nAcme [42]\n{delimiter}")));
    assert!(printed.contains("Goodbye!"));
}

#[tokio::test]
async fn bearer_token_attached_to_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/5/metrics"))
        .and(header("authorization", "Bearer tok123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "metric_name": "Sales",
                "metric_id": 9,
                "metric_description": "Weekly sales"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/company/5/metric/9/entities"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"entity_name": "US Stores", "entity_id": 3}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, printed) = run_session(&server, "2\n5\n3\n5\n9\n10\n").await;

    assert!(result.is_ok());
    assert!(printed.contains("Sales [9] -- Weekly sales"));
    assert!(printed.contains("US Stores [3]"));
}

#[tokio::test]
async fn handler_failure_returns_to_menu() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&server)
        .await;

    let (result, printed) = run_session(&server, "1\nAcme\n10\n").await;

    // Non-success after authentication is not fatal
    assert!(result.is_ok());
    assert!(printed.contains("token expired"));
    assert!(printed.contains("Goodbye!"));
}

#[tokio::test]
async fn exit_option_issues_no_requests() {
    let server = MockServer::start().await;

    let (result, printed) = run_session(&server, "10\n").await;

    assert!(result.is_ok());
    assert!(printed.contains("Goodbye!"));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn unrecognized_selection_is_fatal() {
    let server = MockServer::start().await;

    let (result, printed) = run_session(&server, "11\n").await;

    assert!(result.is_err());
    assert!(printed.contains("Function not implemented"));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let server = MockServer::start().await;

    let (result, _) = run_session(&server, "").await;
    assert!(result.is_ok());

    // An empty selection line also ends the session
    let (result, _) = run_session(&server, "\n").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn time_series_query_includes_optional_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("entity_id", "9"))
        .and(query_param("metric_periodicity", "Monthly"))
        .and(query_param("metric_id", "7"))
        .and(query_param("country_name", "United States"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"period": "2020-01", "value": 12.5}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, printed) = run_session(&server, "5\n7\n9\nmonthly\nUnited States\n10\n").await;

    assert!(result.is_ok());
    assert!(printed.contains("\"period\": \"2020-01\""));
}

#[tokio::test]
async fn forecast_output_includes_metric_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/1/metric/2/entity/3/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "forecast_metric_name": "Revenue",
            "data": [{"period": "2020-Q1", "value": 100}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, printed) = run_session(&server, "7\n1\n2\n3\n10\n").await;

    assert!(result.is_ok());
    assert!(printed.contains("forecast_metric_name: Revenue"));
}

#[tokio::test]
async fn forecast_snapshot_passes_data_through_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/company/1/metric/2/entity/3/forecast/snapshot"))
        .and(query_param("data_through", "2020-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshot": {"data_through": "2020-01-01"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, printed) = run_session(&server, "9\n1\n2\n3\n2020-01-01\n10\n").await;

    assert!(result.is_ok());
    assert!(printed.contains("\"data_through\": \"2020-01-01\""));
}
