//! Import orchestration
//!
//! Composes parsing, validation, deduplication, and the permission gate
//! into one state machine per import attempt:
//!
//! `Idle → FileLoaded → Validated → Ready → Submitting → {Succeeded, Failed}`
//!
//! Session state lives in [`ImportSession`] and is mutated only through the
//! transition methods here. Every failure is translated into exactly one
//! notification-sink call and retained in `error_message` for re-display.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::ImportError;
use crate::services::account_directory::AccountDirectory;
use crate::services::csv_parser;
use crate::services::deduplicator;
use crate::services::notifier::{NotificationSink, Severity};
use crate::services::permission::{self, AllowList};
use crate::services::row_validator;
use crate::services::uploader::UploadService;
use crate::types::{Account, AccountOptions, CleanedPayload, UploadRequest, ValidationOutcome};

// =============================================================================
// Validation mode
// =============================================================================

/// Which policy governs malformed rows. Callers must pick one — there is
/// no default baked into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ValidationMode {
    /// Reject the whole file on the first malformed row.
    Strict,
    /// Drop malformed and duplicate rows silently, keep the rest.
    Lenient,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Lenient => write!(f, "lenient"),
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Run parse → validate → dedupe over raw file content under the chosen
/// mode. Pure and reentrant-safe; the orchestrator and the CLI's
/// `validate` command are the two callers.
pub fn run_pipeline(content: &str, mode: ValidationMode) -> Result<CleanedPayload, ImportError> {
    let lines = csv_parser::split_lines(content);
    let Some((header, data)) = lines.split_first() else {
        return Err(ImportError::EmptyResult);
    };

    let outcomes: Vec<ValidationOutcome> =
        data.iter().filter_map(row_validator::validate_line).collect();

    match mode {
        ValidationMode::Strict => deduplicator::validate_strict(header, &outcomes),
        ValidationMode::Lenient => {
            deduplicator::deduplicate(header, &outcomes).ok_or(ImportError::EmptyResult)
        }
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Where the current import attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportState {
    #[default]
    Idle,
    FileLoaded,
    Validated,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

/// Mutable state of one import attempt. Updated only through the
/// orchestrator's transition methods, never ad hoc.
#[derive(Debug, Default)]
pub struct ImportSession {
    state: ImportState,
    payload: Option<CleanedPayload>,
    account_id: Option<String>,
    error_message: Option<String>,
}

pub struct ImportOrchestrator {
    session: ImportSession,
    mode: ValidationMode,
    allow_list: AllowList,
    account_options: AccountOptions,
    uploader: Arc<dyn UploadService>,
    notifier: Arc<dyn NotificationSink>,
}

impl ImportOrchestrator {
    pub fn new(
        mode: ValidationMode,
        allow_list: AllowList,
        uploader: Arc<dyn UploadService>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            session: ImportSession::default(),
            mode,
            allow_list,
            account_options: Vec::new(),
            uploader,
            notifier,
        }
    }

    /// Fetch the selectable accounts from the directory, once at
    /// initialization. A directory failure is reported and leaves the
    /// option list empty — every account selection will then be denied.
    pub async fn load_account_options(
        &mut self,
        directory: &dyn AccountDirectory,
    ) -> Result<(), ImportError> {
        match directory.account_options().await {
            Ok(options) => {
                info!(count = options.len(), "Account options loaded");
                self.account_options = options;
                Ok(())
            }
            Err(e) => Err(self.reject(ImportError::AccountDirectory(e.to_string()))),
        }
    }

    pub fn account_options(&self) -> &[Account] {
        &self.account_options
    }

    pub fn state(&self) -> ImportState {
        self.session.state
    }

    pub fn is_ready(&self) -> bool {
        self.session.state == ImportState::Ready
    }

    /// Last reported error, retained for re-display.
    pub fn error_message(&self) -> Option<&str> {
        self.session.error_message.as_deref()
    }

    /// File-selection event: read the file asynchronously, then run the
    /// pipeline on its content. Unreadable or undecodable files reject
    /// with `FileRead` and the session falls back to `Idle`.
    pub async fn load_file(&mut self, path: &Path) -> Result<(), ImportError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                self.session.payload = None;
                self.refresh_readiness();
                return Err(self.reject(ImportError::FileRead(e)));
            }
        };
        debug!(path = %path.display(), bytes = raw.len(), "File content captured");
        self.load_content(&raw)
    }

    /// File content in hand: `Idle → FileLoaded → Validated` (or back to
    /// `Idle` when the chosen mode rejects the file). The raw content is
    /// not retained past this call.
    pub fn load_content(&mut self, raw: &str) -> Result<(), ImportError> {
        self.session.state = ImportState::FileLoaded;
        match run_pipeline(raw, self.mode) {
            Ok(payload) => {
                info!(rows = payload.row_count(), mode = %self.mode, "CSV validated");
                self.session.payload = Some(payload);
                self.session.error_message = None;
                self.refresh_readiness();
                Ok(())
            }
            Err(err) => {
                self.session.payload = None;
                self.refresh_readiness();
                Err(self.reject(err))
            }
        }
    }

    /// Account-selection event. A denied account clears the selection so
    /// a stale id can never reach the upload call.
    pub fn select_account(&mut self, account_id: &str) -> Result<(), ImportError> {
        let decision = permission::check(account_id, &self.account_options, &self.allow_list);
        if decision.is_permitted() {
            debug!(account_id, "Account selected");
            self.session.account_id = Some(account_id.to_string());
            self.session.error_message = None;
            self.refresh_readiness();
            Ok(())
        } else {
            self.session.account_id = None;
            self.refresh_readiness();
            Err(self.reject(ImportError::PermissionDenied))
        }
    }

    /// Explicit submit: `Ready → Submitting → Succeeded | Failed`.
    ///
    /// Blocked synchronously with `MissingInput` or `PermissionDenied`
    /// when the session is not actually ready. Taking `&mut self` across
    /// the await keeps a second submit from starting while one is in
    /// flight. After `Failed`, calling submit again retries the upload.
    pub async fn submit(&mut self) -> Result<(), ImportError> {
        let (payload, account_id) = match (&self.session.payload, &self.session.account_id) {
            (Some(payload), Some(account_id)) => (payload.clone(), account_id.clone()),
            _ => return Err(self.reject(ImportError::MissingInput)),
        };

        let decision = permission::check(&account_id, &self.account_options, &self.allow_list);
        if !decision.is_permitted() {
            self.session.account_id = None;
            self.refresh_readiness();
            return Err(self.reject(ImportError::PermissionDenied));
        }

        self.session.state = ImportState::Submitting;
        let request = UploadRequest {
            file_content: payload.as_str().to_string(),
            account_id,
        };
        info!(
            account_id = %request.account_id,
            rows = payload.row_count(),
            "Submitting contact import"
        );

        match self.uploader.upload_contacts(&request).await {
            Ok(()) => {
                // Terminal for this attempt; session cleared for the next one.
                self.session = ImportSession::default();
                self.session.state = ImportState::Succeeded;
                self.notifier
                    .notify("Success", "Contacts uploaded successfully", Severity::Success);
                info!("Contact import succeeded");
                Ok(())
            }
            Err(e) => {
                self.session.state = ImportState::Failed;
                Err(self.reject(ImportError::Upload(e.to_string())))
            }
        }
    }

    /// Ready iff a cleaned payload exists and the selected account passes
    /// the gate. Re-run after every file or account change.
    fn refresh_readiness(&mut self) {
        let permitted = self
            .session
            .account_id
            .as_deref()
            .map(|id| permission::check(id, &self.account_options, &self.allow_list).is_permitted())
            .unwrap_or(false);

        self.session.state = match (&self.session.payload, permitted) {
            (Some(_), true) => ImportState::Ready,
            (Some(_), false) => ImportState::Validated,
            (None, _) => ImportState::Idle,
        };
    }

    /// Translate an error into its single notification, retain the
    /// message, and hand the error back to the caller.
    fn reject(&mut self, err: ImportError) -> ImportError {
        let (title, severity) = match &err {
            ImportError::FileRead(_)
            | ImportError::InvalidFormat { .. }
            | ImportError::EmptyResult => ("Invalid File", Severity::Error),
            ImportError::MissingInput => ("Missing Information", Severity::Warning),
            ImportError::PermissionDenied => ("Permission Denied", Severity::Warning),
            ImportError::Upload(_) => ("Error uploading contacts", Severity::Error),
            ImportError::AccountDirectory(_) => ("Account Directory Unavailable", Severity::Error),
        };
        let message = err.to_string();
        self.notifier.notify(title, &message, severity);
        self.session.error_message = Some(message);
        err
    }
}
