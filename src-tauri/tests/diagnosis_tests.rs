use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use lume_tauri::{DiagnosisClient, LumeError};

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the base URL and a handle resolving to the raw request text.
async fn serve_once(status_line: &str, body: &str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (Url::parse(&format!("http://{}", addr)).unwrap(), handle)
}

/// Read headers, then as many body bytes as Content-Length announces.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let lower = line.to_ascii_lowercase();
                    lower
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn test_fetch_history_preserves_service_order() {
    let body = r#"[
        {"id": 3, "log": "third", "severity": "low"},
        {"id": 1, "log": "first", "severity": "high"},
        {"id": 2, "log": "second", "severity": "medium"}
    ]"#;
    let (base, server) = serve_once("200 OK", body).await;

    let client = DiagnosisClient::new(base).unwrap();
    let entries = client.fetch_history().await.expect("history should load");

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(entries[1].severity, "high");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /history "), "request was: {}", request);
}

#[tokio::test]
async fn test_fetch_history_empty_is_valid() {
    let (base, _server) = serve_once("200 OK", "[]").await;

    let client = DiagnosisClient::new(base).unwrap();
    let entries = client.fetch_history().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_fetch_history_tolerates_null_severity() {
    let body = r#"[
        {"id": 1, "log": "disk quota exceeded", "severity": null},
        {"id": 2, "log": "segfault in worker", "severity": "high"}
    ]"#;
    let (base, _server) = serve_once("200 OK", body).await;

    let client = DiagnosisClient::new(base).unwrap();
    let entries = client.fetch_history().await.expect("null severity should not fail the list");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, "");
    assert_eq!(entries[0].log, "disk quota exceeded");
    assert_eq!(entries[1].severity, "high");
}

#[tokio::test]
async fn test_analyze_tolerates_null_severity() {
    let body = r#"{"explanation": "Lock timeout", "severity": null, "confidence": 40, "fix": null}"#;
    let (base, _server) = serve_once("200 OK", body).await;

    let client = DiagnosisClient::new(base).unwrap();
    let result = client.analyze("lock wait timeout").await.expect("analysis should succeed");

    assert_eq!(result.explanation, "Lock timeout");
    assert_eq!(result.severity, "");
    assert_eq!(result.confidence, 40);
    assert!(result.fix.is_none());
}

#[tokio::test]
async fn test_fetch_history_server_error_is_status() {
    let (base, _server) = serve_once("500 Internal Server Error", r#"{"detail":"db down"}"#).await;

    let client = DiagnosisClient::new(base).unwrap();
    match client.fetch_history().await {
        Err(LumeError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("db down"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_history_unreachable_is_transport() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    let client = DiagnosisClient::new(base).unwrap();
    match client.fetch_history().await {
        Err(LumeError::Transport(_)) => {}
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_posts_log_text_and_returns_verbatim() {
    let body = r#"{
        "explanation": "NullPointerException in OrderService",
        "severity": "medium",
        "confidence": 87,
        "fix": "Check the order id before lookup"
    }"#;
    let (base, server) = serve_once("200 OK", body).await;

    let client = DiagnosisClient::new(base).unwrap();
    let result = client
        .analyze("java.lang.NullPointerException\n\tat OrderService.find")
        .await
        .expect("analysis should succeed");

    assert_eq!(result.explanation, "NullPointerException in OrderService");
    assert_eq!(result.severity, "medium");
    assert_eq!(result.confidence, 87);
    assert_eq!(result.fix.as_deref(), Some("Check the order id before lookup"));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /analyze "), "request was: {}", request);
    let payload = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(payload).unwrap();
    assert_eq!(
        json["log_text"],
        "java.lang.NullPointerException\n\tat OrderService.find"
    );
}

#[tokio::test]
async fn test_analyze_non_json_is_decode_error() {
    let (base, _server) = serve_once("200 OK", "<html>gateway</html>").await;

    let client = DiagnosisClient::new(base).unwrap();
    match client.analyze("boom").await {
        Err(LumeError::Decode(_)) => {}
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_respects_base_path() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"explanation":"ok","severity":"low","confidence":10,"fix":"none"}"#,
    )
    .await;
    let base = base.join("api/v1").unwrap();

    let client = DiagnosisClient::new(base).unwrap();
    client.analyze("x").await.unwrap();

    let request = server.await.unwrap();
    assert!(
        request.starts_with("POST /api/v1/analyze "),
        "request was: {}",
        request
    );
}
