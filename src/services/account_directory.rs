//! Account directory abstraction.
//!
//! The directory supplies the set of accounts the operator can pick as the
//! import target. It is consumed once at initialization — the orchestrator
//! holds the options read-only afterwards.
//!
//! `HttpAccountDirectory` talks to the live directory endpoint,
//! `StaticAccountDirectory` serves a fixed list (dev and the CLI default),
//! `FakeAccountDirectory` is scriptable for tests.

use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::types::Account;

// =============================================================================
// Core trait
// =============================================================================

/// Abstraction over the external account directory.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn account_options(&self) -> Result<Vec<Account>>;
}

// =============================================================================
// StaticAccountDirectory — fixed list (dev / CLI default)
// =============================================================================

pub struct StaticAccountDirectory {
    accounts: Vec<Account>,
}

impl StaticAccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountDirectory for StaticAccountDirectory {
    async fn account_options(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}

// =============================================================================
// FakeAccountDirectory — scriptable (tests)
// =============================================================================

/// Serves a fixed list or a scripted failure.
#[derive(Default)]
pub struct FakeAccountDirectory {
    pub accounts: Vec<Account>,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeAccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts, fail_with: Mutex::new(None) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { accounts: Vec::new(), fail_with: Mutex::new(Some(message.into())) }
    }
}

#[async_trait]
impl AccountDirectory for FakeAccountDirectory {
    async fn account_options(&self) -> Result<Vec<Account>> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            bail!(message);
        }
        Ok(self.accounts.clone())
    }
}

// =============================================================================
// HttpAccountDirectory — live directory endpoint
// =============================================================================

pub struct HttpAccountDirectory {
    url: String,
    client: reqwest::Client,
}

impl HttpAccountDirectory {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("contact-uploader/0.2")
            .build()
            .expect("Failed to create HTTP client");

        Self { url: url.into(), client }
    }
}

#[async_trait]
impl AccountDirectory for HttpAccountDirectory {
    async fn account_options(&self) -> Result<Vec<Account>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch account options")?;

        if !response.status().is_success() {
            bail!("account directory returned {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse account options response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_directory_serves_fixed_list() {
        let directory = StaticAccountDirectory::new(vec![Account {
            id: "acc1".to_string(),
            label: "Onboarding Manager".to_string(),
        }]);

        let options = directory.account_options().await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "acc1");
    }

    #[tokio::test]
    async fn test_fake_directory_scripted_failure() {
        let directory = FakeAccountDirectory::failing("directory unavailable");
        let err = directory.account_options().await.unwrap_err();
        assert_eq!(err.to_string(), "directory unavailable");
    }
}
