use license_report::io::http::{LicenseSource, SourceConfig, parse_license_list};
use license_report::model::LicenseRecord;
use license_report::{ReportError, Result};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(mock_server: &MockServer) -> Result<Vec<LicenseRecord>> {
    let config = SourceConfig::new(mock_server.uri());
    // The blocking client owns its own runtime and must live off the async workers.
    tokio::task::spawn_blocking(move || LicenseSource::new(config)?.fetch_license_data())
        .await
        .expect("fetch task joined")
}

#[tokio::test]
async fn fetch_returns_records_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers-licenses/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data_de_expirare": "2030-01-01", "categorie": "B", "suspended": true},
            {"data_de_expirare": "2020-01-01", "categorie": "C", "suspended": false}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = fetch(&mock_server).await.expect("records fetched");

    assert_eq!(records.len(), 2);
    assert!(records[0].is_suspended());
    assert_eq!(records[1].category_key(), "C");
    assert_eq!(records[1].get("data_de_expirare"), Some(&json!("2020-01-01")));
    let keys: Vec<&str> = records[0].fields().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["data_de_expirare", "categorie", "suspended"]);
}

#[tokio::test]
async fn fetch_returns_empty_list_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers-licenses/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let records = fetch(&mock_server).await.expect("non-200 is not an error");

    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_treats_other_success_codes_as_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers-licenses/list"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let records = fetch(&mock_server).await.expect("non-200 is not an error");

    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_fails_on_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers-licenses/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let error = fetch(&mock_server).await.expect_err("malformed body");

    assert!(matches!(error, ReportError::Json(_)));
}

#[test]
fn list_url_ignores_trailing_slash() {
    let config = SourceConfig::new("http://localhost:30000/");

    assert_eq!(config.list_url(), "http://localhost:30000/drivers-licenses/list");
    assert_eq!(SourceConfig::default().list_url(), config.list_url());
}

#[test]
fn payload_must_be_an_array_of_objects() {
    let not_array = parse_license_list(json!({"licenses": []}));
    assert!(matches!(not_array, Err(ReportError::UnexpectedPayload(_))));

    let not_objects = parse_license_list(json!([{"categorie": "B"}, 7]));
    assert!(matches!(not_objects, Err(ReportError::UnexpectedPayload(_))));

    let records = parse_license_list(json!([])).expect("empty list accepted");
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_fails_on_successful_non_array_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers-licenses/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"licenses": []})))
        .mount(&mock_server)
        .await;

    let error = fetch(&mock_server).await.expect_err("object body");

    assert!(matches!(error, ReportError::UnexpectedPayload(_)));
}

#[test]
fn fetch_propagates_connection_failures() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("port reserved");
    let address = listener.local_addr().expect("local address");
    drop(listener);

    let source = LicenseSource::new(SourceConfig::new(format!("http://{address}")))
        .expect("client built");
    let error = source.fetch_license_data().expect_err("nothing listening");

    assert!(matches!(error, ReportError::Http(_)));
}

#[test]
fn source_builds_with_default_config() {
    assert!(LicenseSource::new(SourceConfig::default()).is_ok());
}
