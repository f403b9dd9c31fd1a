//! Resume Scanner — forwards resume uploads to the external scanning microservice.
//!
//! The service owns all scoring logic; this module only re-packs the multipart
//! upload and relays the JSON answer.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{multipart, Client};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

pub mod handlers;

#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scanner returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// A file received from the browser, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Clone)]
pub struct ScannerClient {
    client: Client,
    base_url: String,
}

impl ScannerClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ScannerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// POST {base_url}/scan-resume/ with `file` and `job_description` form fields.
    pub async fn scan(
        &self,
        file: UploadedFile,
        job_description: String,
    ) -> Result<Value, ScannerError> {
        debug!(
            "Forwarding resume '{}' ({} bytes) to scanner",
            file.file_name,
            file.bytes.len()
        );

        let mut part = multipart::Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = multipart::Form::new()
            .part("file", part)
            .text("job_description", job_description);

        let response = self
            .client
            .post(format!("{}/scan-resume/", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Resume scanner error: {} - {}", status, body);
            return Err(ScannerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response.json().await?;
        info!("Resume scan completed");
        Ok(result)
    }
}
