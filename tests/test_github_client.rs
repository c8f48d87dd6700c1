//! End-to-end tests for the GitHub client against a local stub server.
//!
//! The stub records what it receives, so these tests pin down the wire
//! behavior: URL shape, query encoding, payload decoding, and how error
//! statuses surface.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use octoscout::domain::GithubError;
use octoscout::github::{GithubClient, GithubConfig};

#[derive(Clone, Default)]
struct Recorded {
    queries: Arc<Mutex<Vec<String>>>,
}

async fn search_handler(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    recorded.queries.lock().unwrap().push(q);
    Json(json!({
        "total_count": 2,
        "items": [
            { "login": "alpha", "id": 1 },
            { "login": "beta", "id": 2 }
        ]
    }))
}

async fn user_handler(Path(login): Path<String>) -> Json<serde_json::Value> {
    Json(json!({
        "login": login,
        "id": 42,
        "avatar_url": format!("https://avatars.example/{login}.png")
    }))
}

/// Serve the given router on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base: String) -> GithubClient {
    GithubClient::new(&GithubConfig {
        api_base: base,
        token: None,
        timeout: Duration::from_secs(5),
    })
    .expect("client construction")
}

#[tokio::test]
async fn search_decodes_items_in_api_order() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/search/users", get(search_handler))
        .with_state(recorded.clone());
    let client = client_for(serve(router).await);

    let accounts = client.search_accounts("rust").await.unwrap();
    let logins: Vec<&str> = accounts.iter().map(|a| a.login.as_str()).collect();
    assert_eq!(logins, ["alpha", "beta"]);
    assert_eq!(recorded.queries.lock().unwrap().as_slice(), ["rust".to_string()]);
}

#[tokio::test]
async fn search_phrase_is_percent_encoded_on_the_wire() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/search/users", get(search_handler))
        .with_state(recorded.clone());
    let client = client_for(serve(router).await);

    client.search_accounts("rust language & more").await.unwrap();

    // The server sees the decoded value, which round-trips only if the
    // client encoded it properly.
    assert_eq!(
        recorded.queries.lock().unwrap().as_slice(),
        ["rust language & more".to_string()]
    );
}

#[tokio::test]
async fn profile_fetch_maps_id_and_avatar() {
    let router = Router::new().route("/users/:login", get(user_handler));
    let client = client_for(serve(router).await);

    let profile = client.fetch_profile("octocat").await.unwrap();
    assert_eq!(profile.id, 42);
    assert_eq!(profile.avatar_url, "https://avatars.example/octocat.png");
}

#[tokio::test]
async fn non_success_status_surfaces_code_and_message() {
    async fn forbidden() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::FORBIDDEN,
            Json(json!({
                "message": "API rate limit exceeded",
                "documentation_url": "https://docs.github.example/rate-limits"
            })),
        )
    }
    let router = Router::new().route("/users/:login", get(forbidden));
    let client = client_for(serve(router).await);

    let err = client.fetch_profile("anyone").await.unwrap_err();
    match err {
        GithubError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API rate limit exceeded", "the message field alone is kept");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_bodies_are_kept_verbatim() {
    async fn teapot() -> (StatusCode, &'static str) {
        (StatusCode::IM_A_TEAPOT, "short and stout")
    }
    let router = Router::new().route("/search/users", get(teapot));
    let client = client_for(serve(router).await);

    let err = client.search_accounts("tea").await.unwrap_err();
    match err {
        GithubError::Status { status, message } => {
            assert_eq!(status, 418);
            assert_eq!(message, "short and stout");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_surfaces_as_decode_error() {
    async fn garbage() -> &'static str {
        "this is not json"
    }
    let router = Router::new().route("/search/users", get(garbage));
    let client = client_for(serve(router).await);

    let err = client.search_accounts("anything").await.unwrap_err();
    match err {
        GithubError::Http(e) => assert!(e.is_decode(), "expected a decode failure: {e}"),
        other => panic!("expected a transport error, got {other:?}"),
    }
}
