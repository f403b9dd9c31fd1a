//! Axum route handlers for the Resume Scanner API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::scanner::UploadedFile;
use crate::state::AppState;

pub const MISSING_SCAN_FIELDS: &str = "Missing required fields: file and job_description";

/// POST /resume/scan
///
/// Multipart fields: `file` (the resume) and `job_description` (plain text).
/// Relays the scanner's JSON unchanged.
pub async fn handle_scan_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let Some(scanner) = state.scanner.as_ref() else {
        return Err(AppError::Unavailable(
            "Resume scanner is not configured".to_string(),
        ));
    };

    let mut file: Option<UploadedFile> = None;
    let mut job_description: Option<String> = None;

    // Read errors keep axum's status, so an upload over the body limit is a 413
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    file = Some(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            Some("job_description") => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    job_description = Some(text);
                }
            }
            _ => {}
        }
    }

    let (Some(file), Some(job_description)) = (file, job_description) else {
        return Err(AppError::Validation(MISSING_SCAN_FIELDS.to_string()));
    };

    let result = scanner
        .scan(file, job_description)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(result))
}
