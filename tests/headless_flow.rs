//! End-to-end headless runs against a scripted classification service

use std::path::Path;

use mailtriage::{build_engine, run_headless_with, HeadlessRequest};
use mailtriage_app::config::Settings;
use mailtriage_client::test_utils::{MockResponse, MockServer};
use serde_json::{json, Value};
use tempfile::tempdir;

fn settings(server: &MockServer, history: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = server.url();
    settings.storage.history_path = Some(history.to_path_buf());
    settings
}

fn success_body() -> Value {
    json!({
        "success": true,
        "category": "Reclamação",
        "confidence": 87,
        "response": "Sentimos muito pelo transtorno.",
        "original_text": "Please refund my order"
    })
}

async fn run(settings: Settings, request: HeadlessRequest) -> (bool, Vec<Value>) {
    let engine = build_engine(settings).expect("engine");
    let mut out = Vec::new();
    let success = run_headless_with(engine, request, &mut out)
        .await
        .expect("headless run");

    let events = String::from_utf8(out)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("NDJSON line"))
        .collect();
    (success, events)
}

fn names(events: &[Value]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| e["event"].as_str())
        .collect()
}

#[tokio::test]
async fn test_text_submission_succeeds_and_records_history() {
    let server = MockServer::start(vec![MockResponse::json(200, success_body())]).await;
    let dir = tempdir().unwrap();
    let history = dir.path().join("email_history.json");

    let (success, events) = run(
        settings(&server, &history),
        HeadlessRequest::Text("  Please refund my order  ".to_string()),
    )
    .await;

    assert!(success);
    assert_eq!(
        names(&events),
        vec!["submitted", "history_recorded", "result", "notification"]
    );

    let result = &events[2];
    assert_eq!(result["category"], "Reclamação");
    assert_eq!(result["confidence"], 87.0);
    assert_eq!(result["original_text"], "Please refund my order");
    assert_eq!(events[3]["message"], "Análise concluída com sucesso!");
    assert_eq!(events[3]["kind"], "success");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/classify");
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, json!({"text": "Please refund my order"}));

    let stored: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&history).unwrap()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["category"], "Reclamação");
    assert_eq!(stored[0]["preview"], "Please refund my order");
}

#[tokio::test]
async fn test_file_submission_uploads_multipart() {
    let server = MockServer::start(vec![MockResponse::json(200, success_body())]).await;
    let dir = tempdir().unwrap();
    let email = dir.path().join("pedido.txt");
    std::fs::write(&email, "Please refund my order").unwrap();

    let (success, events) = run(
        settings(&server, &dir.path().join("history.json")),
        HeadlessRequest::File(email),
    )
    .await;

    assert!(success);
    assert_eq!(events[0]["event"], "submitted");
    assert_eq!(events[0]["mode"], "upload");

    let requests = server.requests();
    assert!(requests[0]
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));
    assert!(requests[0].body_text().contains("filename=\"pedido.txt\""));
}

#[tokio::test]
async fn test_server_error_message_is_reported() {
    let server = MockServer::start(vec![MockResponse::json(
        400,
        json!({"error": "unsupported format"}),
    )])
    .await;
    let dir = tempdir().unwrap();
    let history = dir.path().join("history.json");

    let (success, events) = run(
        settings(&server, &history),
        HeadlessRequest::Text("hello".to_string()),
    )
    .await;

    assert!(!success);
    assert_eq!(names(&events), vec!["submitted", "notification", "error"]);
    assert_eq!(events[1]["message"], "Erro: unsupported format");
    assert_eq!(events[2]["message"], "unsupported format");
    assert!(!history.exists());
}

#[tokio::test]
async fn test_non_json_error_body_uses_generic_message() {
    let server = MockServer::start(vec![MockResponse::raw(502, "<html>Bad Gateway</html>")]).await;
    let dir = tempdir().unwrap();

    let (success, events) = run(
        settings(&server, &dir.path().join("history.json")),
        HeadlessRequest::Text("hello".to_string()),
    )
    .await;

    assert!(!success);
    assert_eq!(events.last().unwrap()["message"], "Erro ao processar");
}

#[tokio::test]
async fn test_blank_text_fails_without_request() {
    let server = MockServer::start(vec![MockResponse::json(200, success_body())]).await;
    let dir = tempdir().unwrap();

    let (success, events) = run(
        settings(&server, &dir.path().join("history.json")),
        HeadlessRequest::Text("   \n ".to_string()),
    )
    .await;

    assert!(!success);
    assert_eq!(names(&events), vec!["notification", "error"]);
    assert_eq!(events[1]["message"], "Digite ou cole o texto do email");
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn test_unsupported_file_fails_without_request() {
    let server = MockServer::start(vec![MockResponse::json(200, success_body())]).await;
    let dir = tempdir().unwrap();
    let email = dir.path().join("pedido.docx");
    std::fs::write(&email, "conteúdo").unwrap();

    let (success, events) = run(
        settings(&server, &dir.path().join("history.json")),
        HeadlessRequest::File(email),
    )
    .await;

    assert!(!success);
    assert_eq!(
        events.last().unwrap()["message"],
        "Formato não suportado. Use .txt ou .pdf"
    );
    assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn test_history_is_capped_across_runs() {
    let server = MockServer::start(vec![MockResponse::json(200, success_body())]).await;
    let dir = tempdir().unwrap();
    let history = dir.path().join("history.json");

    for i in 0..12 {
        let (success, _) = run(
            settings(&server, &history),
            HeadlessRequest::Text(format!("email {}", i)),
        )
        .await;
        assert!(success);
    }

    let stored: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&history).unwrap()).unwrap();
    assert_eq!(stored.len(), 10);
    let ids: Vec<i64> = stored.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}
