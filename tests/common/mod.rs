//! Common test utilities for integration tests.

#![allow(dead_code, unused_imports)]

use std::time::Duration;

use inflight::adapters::mock::{MockHttpClient, MockResponse};
use inflight::app::{App, AppMessage};
use inflight::config::AppConfig;
use inflight::loading::LoadingObserver;
use inflight::traits::Response;

pub use inflight::traits::{Headers, HttpClient, HttpError};

/// Base URL used by mock-backed tests.
pub const TEST_BASE_URL: &str = "http://api.test";

/// How long async assertions wait before failing.
pub const WAIT: Duration = Duration::from_secs(2);

/// JSON body of a user as the users API returns it.
pub fn user_json(id: u32, name: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "username": name.split_whitespace().next().unwrap_or(name),
        "email": format!("user{}@example.com", id),
        "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
    })
    .to_string()
}

/// Config pointing at `base_url` with the artificial delay disabled.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig::default()
        .with_api_url(base_url)
        .with_max_delay(Duration::ZERO)
}

/// Mock serving `GET {TEST_BASE_URL}/users/{id}` for each given user.
pub fn mock_users(users: &[(u32, &str)]) -> MockHttpClient {
    let mock = MockHttpClient::new();
    for (id, name) in users {
        mock.set_response(
            &format!("{}/users/{}", TEST_BASE_URL, id),
            MockResponse::Success(Response::new(200, user_json(*id, name))),
        );
    }
    mock
}

/// Mock whose requests never complete.
pub fn hanging_mock() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Pending);
    mock
}

/// Wait until `observer` reports `expected`, panicking after [`WAIT`].
pub async fn wait_for_loading(observer: &mut LoadingObserver, expected: bool) {
    if observer.current() == expected {
        return;
    }
    let result = tokio::time::timeout(WAIT, async {
        while let Some(value) = observer.changed().await {
            if value == expected {
                return;
            }
        }
        panic!("tracker dropped while waiting");
    })
    .await;
    assert!(result.is_ok(), "loading never became {}", expected);
}

/// Receive the next message sent by a request task.
pub async fn next_message(app: &mut App) -> AppMessage {
    let rx = app.message_rx.as_mut().expect("receiver already taken");
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("message channel closed")
}
