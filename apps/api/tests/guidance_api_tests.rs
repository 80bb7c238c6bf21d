//! End-to-end tests for the HTTP API: real router, real GuidanceClient,
//! upstream replaced by an in-process stub.

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use rahnuma_api::config::Config;
use rahnuma_api::llm_client::GuidanceClient;
use rahnuma_api::routes::build_router;
use rahnuma_api::state::AppState;

const STUB_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Spawns the API wired to a stub upstream that answers with `status`/`body`.
async fn spawn_api(upstream_status: StatusCode, upstream_body: &'static str) -> String {
    let stub = Router::new().route(
        STUB_PATH,
        post(move || async move { (upstream_status, upstream_body) }),
    );
    let upstream = spawn(stub).await;

    let state = AppState {
        llm: GuidanceClient::with_endpoint(
            "test-key".to_string(),
            format!("{upstream}{STUB_PATH}"),
        ),
        config: Config {
            api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
    };
    spawn(build_router(state)).await
}

fn form_request() -> Value {
    json!({
        "study_level": "A-Level / F.Sc / ICS",
        "profile": {
            "academic_stream": "Computer Science (ICS)",
            "subjects_and_grades": "Math (A), Physics (B), Computer Science (A*)",
            "interests": ["Technology & IT", "Problem Solving"],
            "strengths": ["Analytical Thinking"],
            "career_goals": ["IT & Software Development"],
            "preferred_work_environment": "Remote/Flexible"
        }
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_api(StatusCode::OK, "{}").await;

    let response = reqwest::get(format!("{base}/health")).await.expect("get");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.expect("json");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "rahnuma-api");
}

#[tokio::test]
async fn guidance_endpoint_returns_generated_text() {
    let upstream_body =
        r#"{"candidates":[{"content":{"parts":[{"text":"Consider Computer Science..."}]}}]}"#;
    let base = spawn_api(StatusCode::OK, upstream_body).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/guidance"))
        .json(&form_request())
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.expect("json");
    assert_eq!(body["guidance"], "Consider Computer Science...");
}

#[tokio::test]
async fn blank_subjects_is_a_validation_error() {
    let base = spawn_api(StatusCode::OK, "{}").await;

    let mut request = form_request();
    request["profile"]["subjects_and_grades"] = json!("   ");

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/guidance"))
        .json(&request)
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn upstream_failure_surfaces_as_bad_gateway_with_hint() {
    let base = spawn_api(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/guidance"))
        .json(&form_request())
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);

    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"]["code"], "UPSTREAM_NETWORK_ERROR");
    assert!(body["error"]["hint"]
        .as_str()
        .expect("hint present")
        .contains("API key"));
}

#[tokio::test]
async fn upstream_error_payload_surfaces_as_malformed_response() {
    let base = spawn_api(StatusCode::OK, r#"{"error":{"message":"invalid API key"}}"#).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/guidance"))
        .json(&form_request())
        .send()
        .await
        .expect("post");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);

    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"]["code"], "UPSTREAM_MALFORMED_RESPONSE");
    assert_eq!(
        body["error"]["message"],
        "unexpected API response structure: invalid API key"
    );
}
