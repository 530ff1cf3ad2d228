//! Access-control entries attached to records.

use serde::{Deserialize, Serialize};

/// Viewer and owner groups that gate downstream visibility of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    /// Groups allowed to read the record
    pub viewers: Vec<String>,

    /// Groups allowed to modify the record
    pub owners: Vec<String>,
}

impl Acl {
    /// Creates an access-control entry from viewer and owner groups.
    #[must_use]
    pub fn new(viewers: Vec<String>, owners: Vec<String>) -> Self {
        Self { viewers, owners }
    }
}
