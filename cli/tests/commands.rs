//! Command execution against a mock API server

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nf_cli::{run, Command};
use nf_infra::{initialize, ClientContext};
use nf_shared::{ApiConfig, ClientConfig, QueryConfig, SessionStoreConfig};

fn context_for(server: &MockServer) -> ClientContext {
    let config = ClientConfig {
        api: ApiConfig::new(server.uri()),
        session: SessionStoreConfig::memory(),
        ..ClientConfig::default()
    };
    initialize(&config).unwrap()
}

async fn run_to_string(command: Command, context: &ClientContext) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(&command, context, &QueryConfig::default(), &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_login_then_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "AT1",
            "refreshToken": "RT1",
            "user": { "id": "u1", "name": "Alice" }
        })))
        .mount(&server)
        .await;
    let context = context_for(&server);

    let login = run_to_string(
        Command::Login {
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
        },
        &context,
    )
    .await
    .unwrap();
    let status = run_to_string(Command::Status, &context).await.unwrap();

    assert_eq!(login, "Logged in as Alice\n");
    assert_eq!(status, "Authenticated as Alice\n");
}

#[tokio::test]
async fn test_failed_login_reports_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid credentials" })),
        )
        .mount(&server)
        .await;
    let context = context_for(&server);

    let err = run_to_string(
        Command::Login {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        },
        &context,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid credentials");
}

#[tokio::test]
async fn test_status_when_server_rejects_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let context = context_for(&server);

    let status = run_to_string(Command::Status, &context).await.unwrap();

    assert_eq!(status, "Not authenticated (failed to fetch current user)\n");
}

#[tokio::test]
async fn test_news_list_and_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": "n1", "title": "First", "summary": "One" },
                { "id": "n2", "title": "Second" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let context = context_for(&server);

    let list = run_to_string(
        Command::News {
            id: None,
            watch: false,
            interval: None,
        },
        &context,
    )
    .await
    .unwrap();
    let item = run_to_string(
        Command::News {
            id: Some("n1".to_string()),
            watch: false,
            interval: None,
        },
        &context,
    )
    .await
    .unwrap();

    assert_eq!(list, "n1\tFirst\nn2\tSecond\n");
    assert_eq!(item, "First\nOne\n");
}

#[tokio::test]
async fn test_refresh_without_stored_token_fails_locally() {
    let server = MockServer::start().await;
    let context = context_for(&server);

    let err = run_to_string(Command::Refresh, &context).await.unwrap_err();

    assert!(err.to_string().contains("refreshToken"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
