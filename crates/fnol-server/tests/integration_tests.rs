//! Integration tests for the claims HTTP service

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fnol_llm::{MockProvider, ProviderKind};
use fnol_pipeline::{ClaimsConfig, Pipeline};
use fnol_server::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse, ServiceInfo};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

const BOUNDARY: &str = "fnol-test-boundary";

const STAGED_CLAIM: &str = r#"{
    "policy_information": {"policy_number": "P1", "policyholder_name": "Jane Doe"},
    "incident_information": {"date": "2024-01-01", "location": "Main St", "description": "staged collision"},
    "involved_parties": {"claimant": "Jane Doe"},
    "asset_details": {"estimated_damage": 5000},
    "claim_type": "Auto"
}"#;

/// Helper to create a test application over a scripted provider
fn create_test_app(llm: MockProvider) -> Router {
    let mut config = ClaimsConfig::default();
    config.llm.provider = ProviderKind::Mock;
    let pipeline = Pipeline::new(llm, &config);
    create_router(AppState::new(pipeline), 1024 * 1024)
}

/// Build a multipart body with a single field
fn multipart_request(field: &str, file_name: Option<&str>, content: &[u8]) -> Request<Body> {
    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/process-claim")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let app = create_test_app(MockProvider::default());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let info: ServiceInfo = read_json(response).await;
    assert_eq!(info.message, "Insurance Claims Processing Agent API");
    assert!(info.endpoints.contains_key("POST /process-claim"));
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app(MockProvider::default());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_process_claim_success() {
    let llm = MockProvider::new("Description mentions a staged collision.");
    llm.push_response(STAGED_CLAIM);
    let app = create_test_app(llm);

    let request = multipart_request("file", Some("claim.txt"), b"FNOL: staged collision on Main St");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_json(response).await;
    assert_eq!(body["recommendedRoute"], "Investigation Flag");
    assert_eq!(body["missingFields"], json!([]));
    assert_eq!(body["reasoning"], "Description mentions a staged collision.");
    assert_eq!(body["extractedFields"]["policy_information"]["policy_number"], "P1");
}

#[tokio::test]
async fn test_process_claim_missing_fields() {
    let llm = MockProvider::failing();
    llm.push_response(r#"{"claim_type": "Injury"}"#);
    let app = create_test_app(llm);

    let request = multipart_request("file", Some("claim.txt"), b"Injury claim");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_json(response).await;
    assert_eq!(body["recommendedRoute"], "Manual review");
    assert_eq!(body["missingFields"].as_array().unwrap().len(), 7);
    assert_eq!(body["missingFields"][0], "policy_information.policy_number");
    assert_eq!(body["extractedFields"], json!({"claim_type": "Injury"}));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let llm = MockProvider::default();
    let app = create_test_app(llm.clone());

    let request = multipart_request("file", Some("claim.docx"), b"PK\x03\x04");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.detail, "Unsupported file type: .docx. Supported types: .pdf, .txt");
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_empty_document() {
    let app = create_test_app(MockProvider::default());

    let request = multipart_request("file", Some("claim.txt"), b"  \r\n ");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.detail, "Document appears to be empty or could not extract text");
}

#[tokio::test]
async fn test_missing_file_field() {
    let app = create_test_app(MockProvider::default());

    let request = multipart_request("document", Some("claim.txt"), b"text");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.detail, "No file uploaded");
}

#[tokio::test]
async fn test_missing_filename() {
    let app = create_test_app(MockProvider::default());

    let request = multipart_request("file", None, b"text");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.detail, "No filename provided");
}

#[tokio::test]
async fn test_extraction_failure_returns_500() {
    let llm = MockProvider::new("Sorry, I cannot read this document.");
    let app = create_test_app(llm.clone());

    let request = multipart_request("file", Some("claim.txt"), b"FNOL text");
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.stage.as_deref(), Some("extraction"));
    assert!(error.detail.starts_with("Failed to extract fields from document: "));
    assert_eq!(llm.call_count(), 3);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let mut config = ClaimsConfig::default();
    config.llm.provider = ProviderKind::Mock;
    let app = create_router(
        AppState::new(Pipeline::new(MockProvider::default(), &config)),
        64,
    );

    let request = multipart_request("file", Some("claim.txt"), &[b'a'; 1024]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let error: ErrorResponse = read_json(response).await;
    assert!(!error.detail.is_empty());
    assert_eq!(error.stage, None);
}
