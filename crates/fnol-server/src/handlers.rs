//! HTTP request handlers for the claims service.
//!
//! Implements the service banner, health check, and claim upload endpoints
//! using axum.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use fnol_document::DocumentError;
use fnol_domain::{ProcessedClaimResponse, TextGenerator};
use fnol_pipeline::{Pipeline, PipelineError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared application state
pub struct AppState<L>
where
    L: TextGenerator,
{
    /// The claims pipeline, shared by all requests
    pub pipeline: Arc<Pipeline<L>>,
}

impl<L> AppState<L>
where
    L: TextGenerator,
{
    /// Wrap a pipeline for sharing across handlers
    pub fn new(pipeline: Pipeline<L>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: TextGenerator,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Service banner
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub message: String,
    /// Crate version
    pub version: String,
    /// Endpoint descriptions keyed by method and path
    pub endpoints: BTreeMap<String, String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,

    /// Pipeline stage that failed, for server-side failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request itself was malformed
    BadRequest(String),
    /// The multipart body could not be read
    Upload {
        /// Status chosen by the multipart reader (413 when over the size limit)
        status: StatusCode,
        /// Reader's error text
        detail: String,
    },
    /// The pipeline aborted
    Pipeline(PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    detail,
                    stage: None,
                },
            ),
            AppError::Upload { status, detail } => (
                status,
                ErrorResponse {
                    detail,
                    stage: None,
                },
            ),
            AppError::Pipeline(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    detail: client_detail(&e),
                    stage: None,
                },
            ),
            AppError::Pipeline(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    detail: format!(
                        "Failed to extract fields from document: {}",
                        inner_message(&e)
                    ),
                    stage: Some(e.stage().to_string()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

fn inner_message(e: &PipelineError) -> String {
    match e {
        PipelineError::Document(inner) => inner.to_string(),
        PipelineError::Extraction(inner) => inner.to_string(),
    }
}

fn client_detail(e: &PipelineError) -> String {
    match e {
        PipelineError::Document(
            inner @ (DocumentError::UnsupportedType(_) | DocumentError::Empty),
        ) => inner.to_string(),
        PipelineError::Document(inner) => format!("Failed to parse document: {}", inner),
        PipelineError::Extraction(inner) => inner.to_string(),
    }
}

fn upload_error(e: MultipartError) -> AppError {
    AppError::Upload {
        status: e.status(),
        detail: e.body_text(),
    }
}

/// GET / - Service banner
async fn root() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "POST /process-claim".to_string(),
        "Process a claim document (PDF or TXT)".to_string(),
    );
    endpoints.insert("GET /health".to_string(), "Health check".to_string());

    Json(ServiceInfo {
        message: "Insurance Claims Processing Agent API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// POST /process-claim - Process one uploaded claim document
///
/// Expects a multipart form with a `file` field carrying a `.pdf` or
/// `.txt` file name.
async fn process_claim<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessedClaimResponse>, AppError>
where
    L: TextGenerator + 'static,
{
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(upload_error)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("No filename provided".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(upload_error)?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    info!(file_name = %file_name, bytes = bytes.len(), "Processing file");

    match state.pipeline.process_document(&file_name, bytes.to_vec()).await {
        Ok(response) => {
            info!(route = %response.recommended_route, "Claim processing completed");
            Ok(Json(response))
        }
        Err(e) if e.is_client_error() => {
            warn!(stage = e.stage(), error = %e, "Rejected claim document");
            Err(e.into())
        }
        Err(e) => {
            error!(stage = e.stage(), error = %e, "Claim processing failed");
            Err(e.into())
        }
    }
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>, max_upload_bytes: usize) -> AxumRouter
where
    L: TextGenerator + 'static,
{
    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/process-claim", post(process_claim::<L>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_extractor::ExtractorError;

    async fn body_json(response: Response) -> ErrorResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_type_detail() {
        let error = AppError::from(PipelineError::from(DocumentError::UnsupportedType(
            ".docx".to_string(),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body.detail, "Unsupported file type: .docx. Supported types: .pdf, .txt");
        assert_eq!(body.stage, None);
    }

    #[tokio::test]
    async fn test_upload_error_keeps_reader_status() {
        let error = AppError::Upload {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            detail: "length limit exceeded".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = body_json(response).await;
        assert_eq!(body.detail, "length limit exceeded");
        assert_eq!(body.stage, None);
    }

    #[tokio::test]
    async fn test_pdf_failure_detail() {
        let error = AppError::from(PipelineError::from(DocumentError::Pdf(
            "invalid xref".to_string(),
        )));
        let body = body_json(error.into_response()).await;
        assert_eq!(
            body.detail,
            "Failed to parse document: Failed to parse PDF: invalid xref"
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_is_server_error() {
        let error = AppError::from(PipelineError::from(ExtractorError::Llm {
            attempts: 3,
            message: "connection refused".to_string(),
        }));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body.stage.as_deref(), Some("extraction"));
        assert!(body.detail.contains("connection refused"));
    }
}
