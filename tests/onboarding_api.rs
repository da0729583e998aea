//! Integration tests for the onboarding REST API.
//!
//! Each test spins up the real axum app on a random port and drives it over
//! HTTP with reqwest, exercising the full register → login → role → survey
//! contract including the error-message mapping.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use hourskill_accounts::config::HashingParams;
use hourskill_accounts::directory::{Directory, MemoryDirectory};
use hourskill_accounts::onboarding::routes::{AppState, onboarding_routes};
use hourskill_accounts::onboarding::service::OnboardingService;
use hourskill_accounts::password::CredentialHasher;
use hourskill_accounts::token::TokenIssuer;

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(10);

const TEST_SECRET: &str = "integration-test-secret";

/// Start the app on a random port with a fresh directory, return the port.
async fn start_server() -> u16 {
    let directory: Arc<dyn Directory> = Arc::new(MemoryDirectory::new());
    // Low-cost hashing so the suite stays fast.
    let hasher = CredentialHasher::new(HashingParams {
        memory_kib: 8192,
        iterations: 1,
        parallelism: 1,
    });
    let issuer = TokenIssuer::new(SecretString::from(TEST_SECRET));
    let service = Arc::new(OnboardingService::new(directory, hasher, issuer));
    let app = onboarding_routes(AppState { service });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

async fn post(port: u16, path: &str, body: Value) -> (u16, Value) {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://127.0.0.1:{port}{path}"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    let body: Value = resp.json().await.expect("invalid JSON body");
    (status, body)
}

fn register_body(full_name: &str, email: &str, password: &str, confirm: &str) -> Value {
    json!({
        "fullName": full_name,
        "email": email,
        "password": password,
        "confirmPassword": confirm,
    })
}

async fn register_ok(port: u16, email: &str) {
    let (status, _) = post(
        port,
        "/api/register",
        register_body("Ann", email, "password1", "password1"),
    )
    .await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn health_endpoint_responds() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn register_then_login_round_trip() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post(
            port,
            "/api/register",
            register_body("Ann", "ann@x.com", "password1", "password1"),
        )
        .await;
        assert_eq!(status, 200);
        assert!(body["message"].is_string());

        let (status, body) = post(
            port,
            "/api/login",
            json!({ "email": "ann@x.com", "password": "password1" }),
        )
        .await;
        assert_eq!(status, 200);
        let token = body["token"].as_str().expect("token missing");

        let claims = TokenIssuer::new(SecretString::from(TEST_SECRET))
            .decode(token)
            .expect("decode");
        assert_eq!(claims.full_name, "Ann");
        assert!(!claims.survey_completed);
        assert_eq!(claims.score, 0);
        assert_eq!(claims.role, None);
        assert_eq!(claims.exp - claims.iat, 3600);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn validation_failures_are_distinct_400s() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        // Missing field (absent from the body entirely).
        let (status, missing) = post(
            port,
            "/api/register",
            json!({ "email": "a@x.com", "password": "password1", "confirmPassword": "password1" }),
        )
        .await;
        assert_eq!(status, 400);

        let (status, weak) = post(
            port,
            "/api/register",
            register_body("Ann", "a@x.com", "short", "short"),
        )
        .await;
        assert_eq!(status, 400);

        let (status, mismatch) = post(
            port,
            "/api/register",
            register_body("Ann", "a@x.com", "password1", "password2"),
        )
        .await;
        assert_eq!(status, 400);

        register_ok(port, "a@x.com").await;
        let (status, duplicate) = post(
            port,
            "/api/register",
            register_body("Ann", "a@x.com", "password1", "password1"),
        )
        .await;
        assert_eq!(status, 400);

        // Every condition maps to its own message.
        let messages = [
            missing["message"].as_str().unwrap().to_string(),
            weak["message"].as_str().unwrap().to_string(),
            mismatch["message"].as_str().unwrap().to_string(),
            duplicate["message"].as_str().unwrap().to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn login_failures_never_issue_a_token() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post(
            port,
            "/api/login",
            json!({ "email": "nobody@x.com", "password": "password1" }),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body.get("token").is_none());
        let unknown_msg = body["message"].as_str().unwrap().to_string();

        register_ok(port, "ann@x.com").await;
        let (status, body) = post(
            port,
            "/api/login",
            json!({ "email": "ann@x.com", "password": "wrong-password" }),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body.get("token").is_none());
        assert_ne!(body["message"].as_str().unwrap(), unknown_msg);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn survey_scores_and_reflects_in_next_login() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        register_ok(port, "ann@x.com").await;

        let (status, body) = post(
            port,
            "/api/survey",
            json!({
                "email": "ann@x.com",
                "answers": ["50% done", "We work quốc tế always", "ok"],
            }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["score"], 60);

        // Resubmitting identical answers yields the identical score.
        let (_, body) = post(
            port,
            "/api/survey",
            json!({
                "email": "ann@x.com",
                "answers": ["50% done", "We work quốc tế always", "ok"],
            }),
        )
        .await;
        assert_eq!(body["score"], 60);

        let (_, body) = post(
            port,
            "/api/login",
            json!({ "email": "ann@x.com", "password": "password1" }),
        )
        .await;
        let claims = TokenIssuer::new(SecretString::from(TEST_SECRET))
            .decode(body["token"].as_str().unwrap())
            .expect("decode");
        assert!(claims.survey_completed);
        assert_eq!(claims.score, 60);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn role_selection_updates_and_accepts_any_value() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;
        register_ok(port, "ann@x.com").await;

        let (status, _) = post(
            port,
            "/api/select-role",
            json!({ "email": "ann@x.com", "role": "mentor" }),
        )
        .await;
        assert_eq!(status, 200);

        // Re-selection overwrites.
        let (status, _) = post(
            port,
            "/api/select-role",
            json!({ "email": "ann@x.com", "role": "anything-goes" }),
        )
        .await;
        assert_eq!(status, 200);

        let (_, body) = post(
            port,
            "/api/login",
            json!({ "email": "ann@x.com", "password": "password1" }),
        )
        .await;
        let claims = TokenIssuer::new(SecretString::from(TEST_SECRET))
            .decode(body["token"].as_str().unwrap())
            .expect("decode");
        assert_eq!(claims.role.as_deref(), Some("anything-goes"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn role_and_survey_against_unknown_email_are_400() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post(
            port,
            "/api/select-role",
            json!({ "email": "ghost@x.com", "role": "mentor" }),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body["message"].is_string());

        let (status, body) = post(
            port,
            "/api/survey",
            json!({ "email": "ghost@x.com", "answers": ["ok"] }),
        )
        .await;
        assert_eq!(status, 400);
        assert!(body["message"].is_string());
    })
    .await
    .expect("test timed out");
}
