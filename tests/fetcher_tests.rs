//! HTTP-level tests for the status fetcher against a local mock server.

use std::time::Duration;

use sede_mcp_server::config::ServerConfig;
use sede_mcp_server::fetcher::{FetchError, HttpStatusFetcher, StatusSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ServerConfig {
    ServerConfig {
        status_url: format!("{}/status", server.uri()),
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn returns_body_text_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Ok("true".to_string()));
}

#[tokio::test]
async fn sends_exactly_one_get_with_required_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("User-Agent", "sede-mcp-server/1.0"))
        .and(header("Accept", "application/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    let result = fetcher.fetch_status().await;
    assert_eq!(result, Ok("false".to_string()));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "one fetch must issue exactly one request");
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.path(), "/status");
}

#[tokio::test]
async fn body_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(" true\n"))
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Ok(" true\n".to_string()));
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn redirect_is_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/moved"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "a redirect must not trigger a second GET");
}

#[tokio::test]
async fn multiple_choices_with_body_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(300).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn not_found_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpStatusFetcher::new(&config_for(&server));
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("true")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ServerConfig {
        request_timeout: Duration::from_millis(200),
        ..config_for(&server)
    };
    let fetcher = HttpStatusFetcher::new(&config);
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn connection_refused_is_unavailable() {
    // Grab a free port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = ServerConfig {
        status_url: format!("http://127.0.0.1:{port}/status"),
        ..ServerConfig::default()
    };
    let fetcher = HttpStatusFetcher::new(&config);
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn malformed_url_is_unavailable() {
    let config = ServerConfig {
        status_url: "not a url".to_string(),
        ..ServerConfig::default()
    };
    let fetcher = HttpStatusFetcher::new(&config);
    assert_eq!(fetcher.fetch_status().await, Err(FetchError::Unavailable));
}
