//! URL record entity.

/// A persisted mapping from a short alias to a target URL.
///
/// `id` is assigned by the store and never reused. `alias` is unique and
/// write-once; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            target_url: target_url.into(),
        }
    }
}
