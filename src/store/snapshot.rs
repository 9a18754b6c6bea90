use serde::{Deserialize, Serialize};

use crate::keyword::Keyword;
use crate::types::identifiers::Timestamp;

/// On-disk form of the catalog: every record, active or not, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default = "Timestamp::now")]
    pub last_updated: Timestamp, // informational only
}

/// Borrowing twin of [`CatalogSnapshot`] used when writing.
#[derive(Debug, Serialize)]
pub(crate) struct SnapshotView<'a> {
    pub keywords: &'a [Keyword],
    pub last_updated: Timestamp,
}
