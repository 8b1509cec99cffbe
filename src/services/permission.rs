//! Account permission gate
//!
//! Pure lookup: resolve the selected account id in the fetched options and
//! check its label against the configured allow-list. No network, no
//! mutation.

use std::collections::HashSet;

use crate::types::{Account, PermissionDecision};

/// Injectable set of account labels permitted to receive imports.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    labels: HashSet<String>,
}

impl AllowList {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self { labels: labels.into_iter().collect() }
    }

    pub fn permits(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// `Permitted` iff `account_id` resolves by exact id match and the
/// resolved label is on the allow-list. Unknown ids are always `Denied`.
pub fn check(account_id: &str, options: &[Account], allow_list: &AllowList) -> PermissionDecision {
    match options.iter().find(|account| account.id == account_id) {
        Some(account) if allow_list.permits(&account.label) => PermissionDecision::Permitted,
        _ => PermissionDecision::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<Account> {
        vec![
            Account { id: "acc1".to_string(), label: "Sales Rep".to_string() },
            Account { id: "acc2".to_string(), label: "Onboarding Manager".to_string() },
        ]
    }

    fn allow_list() -> AllowList {
        AllowList::new(["Onboarding Manager".to_string()])
    }

    #[test]
    fn test_permitted_label_passes() {
        assert_eq!(
            check("acc2", &options(), &allow_list()),
            PermissionDecision::Permitted
        );
    }

    #[test]
    fn test_label_off_allow_list_is_denied() {
        assert_eq!(
            check("acc1", &options(), &allow_list()),
            PermissionDecision::Denied
        );
    }

    #[test]
    fn test_unknown_account_id_is_denied() {
        assert_eq!(
            check("missing", &options(), &allow_list()),
            PermissionDecision::Denied
        );
    }

    #[test]
    fn test_empty_allow_list_denies_everything() {
        let empty = AllowList::default();
        assert_eq!(check("acc2", &options(), &empty), PermissionDecision::Denied);
    }

    #[test]
    fn test_id_match_is_exact() {
        assert_eq!(
            check("ACC2", &options(), &allow_list()),
            PermissionDecision::Denied
        );
    }
}
