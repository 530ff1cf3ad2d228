//! Record domain types submitted to the storage service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::acl::Acl;
use crate::legal::Legal;

/// Lineage pointers to parent records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAncestry {
    /// Parent record identifiers (`id:version`)
    pub parents: Vec<String>,
}

impl RecordAncestry {
    /// Creates ancestry from parent identifiers.
    #[must_use]
    pub fn new(parents: Vec<String>) -> Self {
        Self { parents }
    }

    /// Returns true when the record has no parents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// The unit submitted to the storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier, assigned by the service when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Record version, `0` for a record that does not exist yet
    pub version: u64,

    /// Schema kind (`authority:source:entity:version`)
    pub kind: String,

    /// Access control
    pub acl: Acl,

    /// Legal metadata
    pub legal: Legal,

    /// Opaque payload
    pub data: JsonValue,

    /// Lineage
    pub ancestry: RecordAncestry,

    /// Frame-of-reference metadata blocks
    pub meta: Vec<Map<String, JsonValue>>,
}

impl Record {
    /// Version carried by records that the service has not stored yet.
    pub const NEW_VERSION: u64 = 0;

    /// Creates a record the service has never seen: no identifier, version 0,
    /// empty ancestry and a single empty metadata block.
    #[must_use]
    pub fn new(kind: impl Into<String>, acl: Acl, legal: Legal, data: JsonValue) -> Self {
        Self {
            id: None,
            version: Self::NEW_VERSION,
            kind: kind.into(),
            acl,
            legal,
            data,
            ancestry: RecordAncestry::default(),
            meta: vec![Map::new()],
        }
    }

    /// Returns true if the record has not been stored before.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none() && self.version == Self::NEW_VERSION
    }
}
