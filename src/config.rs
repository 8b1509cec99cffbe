//! Configuration management

use anyhow::{self, Context, Result};

use crate::types::Account;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Account labels permitted to receive imports (the allow-list)
    pub permitted_account_labels: Vec<String>,

    /// Upload backend endpoint; when unset, uploads are logged instead
    pub upload_url: Option<String>,

    /// Account directory endpoint; when unset, the static account list
    /// below is served instead
    pub account_directory_url: Option<String>,

    /// Static account options for the directory-less setup
    pub account_options: Vec<Account>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let labels_raw = std::env::var("PERMITTED_ACCOUNT_LABELS")
            .context("PERMITTED_ACCOUNT_LABELS must be set — comma-separated account labels, e.g. \"Onboarding Manager\"")?;
        let permitted_account_labels: Vec<String> = labels_raw
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();
        if permitted_account_labels.is_empty() {
            anyhow::bail!("PERMITTED_ACCOUNT_LABELS must contain at least one label");
        }

        let upload_url = std::env::var("UPLOAD_URL").ok();
        let account_directory_url = std::env::var("ACCOUNT_DIRECTORY_URL").ok();

        let account_options = match std::env::var("ACCOUNT_OPTIONS") {
            Ok(raw) => parse_account_options(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            permitted_account_labels,
            upload_url,
            account_directory_url,
            account_options,
        })
    }
}

/// Parse `id:label;id:label` into accounts.
fn parse_account_options(raw: &str) -> Result<Vec<Account>> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, label) = entry
                .split_once(':')
                .with_context(|| format!("ACCOUNT_OPTIONS entry '{}' must be id:label", entry))?;
            Ok(Account {
                id: id.trim().to_string(),
                label: label.trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_options() {
        let accounts =
            parse_account_options("acc1:Sales Rep; acc2:Onboarding Manager").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "acc1");
        assert_eq!(accounts[0].label, "Sales Rep");
        assert_eq!(accounts[1].label, "Onboarding Manager");
    }

    #[test]
    fn test_parse_account_options_rejects_missing_label() {
        assert!(parse_account_options("acc1").is_err());
    }

    #[test]
    fn test_parse_account_options_skips_empty_entries() {
        let accounts = parse_account_options("acc1:Sales Rep;;").unwrap();
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    #[ignore] // requires --test-threads=1 due to env var race
    fn test_config_requires_allow_list() {
        std::env::remove_var("PERMITTED_ACCOUNT_LABELS");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[ignore] // requires --test-threads=1 due to env var race
    fn test_config_splits_allow_list_on_commas() {
        std::env::set_var("PERMITTED_ACCOUNT_LABELS", "Onboarding Manager, Admin");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.permitted_account_labels,
            vec!["Onboarding Manager".to_string(), "Admin".to_string()]
        );
        std::env::remove_var("PERMITTED_ACCOUNT_LABELS");
    }
}
