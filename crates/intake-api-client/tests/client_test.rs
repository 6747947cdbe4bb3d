//! HTTP client tests against a local mock server.

use intake_api_client::{ApiClient, Endpoints};
use intake_core::{IntakeError, SelectedFile};
use mockito::Matcher;
use std::path::Path;

fn write(dir: &Path, name: &str, mime: &str, content: &[u8]) -> SelectedFile {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    SelectedFile::new(name, content.len() as u64, mime, path)
}

#[tokio::test]
async fn upload_posts_every_file_under_files_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/files")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+$".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="files"; filename="a.png""#.to_string()),
            Matcher::Regex(r#"name="files"; filename="b.txt""#.to_string()),
            Matcher::Regex("Content-Type: text/plain".to_string()),
            Matcher::Regex("hello".to_string()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"uploaded":2}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let files = vec![
        write(dir.path(), "a.png", "image/png", b"\x89PNG"),
        write(dir.path(), "b.txt", "text/plain", b"hello"),
    ];

    let client = ApiClient::new(server.url(), None).unwrap();
    let result = client.upload_files(&files).await.unwrap();

    assert_eq!(result, serde_json::json!({"uploaded": 2}));
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_honours_custom_endpoints() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_body(Matcher::Regex(r#"name="attachments""#.to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let files = vec![write(dir.path(), "c.bin", "", b"\x00\x01")];

    let client = ApiClient::new(server.url(), None)
        .unwrap()
        .with_endpoints(Endpoints {
            upload_path: "/upload".to_string(),
            records_path: "/files".to_string(),
            upload_field: "attachments".to_string(),
        });
    let result = client.upload_files(&files).await.unwrap();

    assert_eq!(result, serde_json::json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_non_json_response_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/files")
        .with_status(200)
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let files = vec![write(dir.path(), "a.txt", "text/plain", b"x")];

    let client = ApiClient::new(server.url(), None).unwrap();
    let err = IntakeError::from(client.upload_files(&files).await.unwrap_err());

    assert!(matches!(err, IntakeError::Decode(_)));
}

#[tokio::test]
async fn upload_returns_json_body_of_rejected_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/files")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"statusCode":400,"message":"Unexpected field"}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let files = vec![write(dir.path(), "a.txt", "text/plain", b"x")];

    let client = ApiClient::new(server.url(), None).unwrap();
    let result = client.upload_files(&files).await.unwrap();

    assert_eq!(result["statusCode"], 400);
    assert_eq!(result["message"], "Unexpected field");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_missing_file_fails_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/files")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let files = vec![SelectedFile::new(
        "gone.txt",
        1,
        "text/plain",
        dir.path().join("gone.txt"),
    )];

    let client = ApiClient::new(server.url(), None).unwrap();
    let err = IntakeError::from(client.upload_files(&files).await.unwrap_err());

    assert!(matches!(err, IntakeError::Io(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_records_parses_service_shape() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/files")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"id":"1","name":"x.png","key":"k1","url":"http://host/k1","createdAt":"2024-01-01"}]"#,
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url(), None).unwrap();
    let records = client.list_records().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "x.png");
    assert_eq!(records[0].storage_key, "k1");
    assert_eq!(records[0].url, "http://host/k1");
    mock.assert_async().await;
}

#[tokio::test]
async fn list_records_non_success_is_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/files")
        .with_status(500)
        .with_body("storage offline")
        .create_async()
        .await;

    let client = ApiClient::new(format!("{}/", server.url()), None).unwrap();
    let err = IntakeError::from(client.list_records().await.unwrap_err());

    match err {
        IntakeError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "storage offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    // Nothing listens on port 9 (discard) on test hosts.
    let client = ApiClient::new("http://127.0.0.1:9", None).unwrap();
    let err = IntakeError::from(client.list_records().await.unwrap_err());
    assert!(matches!(err, IntakeError::Request(_)));
}
