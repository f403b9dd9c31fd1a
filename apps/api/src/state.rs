use std::sync::Arc;

use crate::llm_client::StructuredModel;
use crate::scanner::ScannerClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Schema-constrained model. Default: GeminiClient. Tests swap in a stub.
    pub model: Arc<dyn StructuredModel>,
    /// `None` when RESUME_SCANNER_URL is unset.
    pub scanner: Option<ScannerClient>,
    /// Body limit for `/resume/scan`, from RESUME_MAX_UPLOAD_MB.
    pub max_upload_bytes: usize,
}
