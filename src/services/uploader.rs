//! Contact upload abstraction.
//!
//! `UploadService` is the core trait — swap in `HttpUploadService` in
//! production, `LogUploadService` in dev (logs to tracing), and
//! `FakeUploadService` in tests. The orchestrator is its sole caller.
//!
//! The trait is object-safe so callers can hold `Arc<dyn UploadService>`.

use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::types::UploadRequest;

// =============================================================================
// Core trait
// =============================================================================

/// Abstraction over the backend import service.
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn upload_contacts(&self, request: &UploadRequest) -> Result<()>;
}

// =============================================================================
// LogUploadService — writes to tracing (dev)
// =============================================================================

pub struct LogUploadService;

#[async_trait]
impl UploadService for LogUploadService {
    async fn upload_contacts(&self, request: &UploadRequest) -> Result<()> {
        info!(
            account_id = %request.account_id,
            "[LogUploadService] Would upload contacts\n---PAYLOAD---\n{}",
            request.file_content,
        );
        Ok(())
    }
}

// =============================================================================
// FakeUploadService — captures requests in a Vec (tests)
// =============================================================================

/// Collects upload requests in memory for assertion in tests. Set
/// `fail_with` to make the next calls fail with that message.
#[derive(Default)]
pub struct FakeUploadService {
    pub requests: Mutex<Vec<UploadRequest>>,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeUploadService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        let service = Self::default();
        *service.fail_with.lock().unwrap() = Some(message.into());
        service
    }

    pub fn requests(&self) -> Vec<UploadRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_failure(&self) {
        *self.fail_with.lock().unwrap() = None;
    }
}

#[async_trait]
impl UploadService for FakeUploadService {
    async fn upload_contacts(&self, request: &UploadRequest) -> Result<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            bail!(message);
        }
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

// =============================================================================
// HttpUploadService — live import backend
// =============================================================================

pub struct HttpUploadService {
    url: String,
    client: reqwest::Client,
}

impl HttpUploadService {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("contact-uploader/0.2")
            .build()
            .expect("Failed to create HTTP client");

        Self { url: url.into(), client }
    }
}

#[async_trait]
impl UploadService for HttpUploadService {
    async fn upload_contacts(&self, request: &UploadRequest) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .context("Failed to send upload request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if body.is_empty() {
                bail!("upload backend returned {}", status);
            }
            bail!("upload backend returned {}: {}", status, body);
        }

        Ok(())
    }
}
