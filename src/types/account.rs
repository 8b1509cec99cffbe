//! Account and upload wire types
//!
//! The account directory and the upload backend both speak camelCase JSON,
//! so the wire shapes live here with serde derives.

use serde::{Deserialize, Serialize};

/// A selectable target account, as served by the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub label: String,
}

/// The full set of accounts offered to the user, fetched once at startup.
pub type AccountOptions = Vec<Account>;

/// Outcome of checking an account against the permitted-label allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Permitted,
    Denied,
}

impl PermissionDecision {
    pub fn is_permitted(&self) -> bool {
        matches!(self, PermissionDecision::Permitted)
    }
}

/// Request body for the upload backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_content: String,
    pub account_id: String,
}
