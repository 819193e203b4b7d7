//! Account Directory Trait

use bank_assistant_core::AccountRecord;

/// Read-only account lookup.
///
/// Implementations are shared behind `Arc<dyn AccountDirectory>` across
/// request handlers, hence `Send + Sync`. Lookup clones the record out;
/// the directory is never mutated after construction, so there is no
/// write path to abstract.
pub trait AccountDirectory: Send + Sync {
    /// Fetch the record for an account id, if one exists.
    fn lookup(&self, account_id: &str) -> Option<AccountRecord>;
}
