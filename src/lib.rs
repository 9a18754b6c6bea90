//! Keyword classification and catalog store for SEO/GEO semantic cores.
//!
//! `semantic-core` assigns each keyword phrase a topical cluster and a
//! priority tier with fixed substring rules, keeps the resulting catalog in a
//! single JSON snapshot, and serves filtered views and statistics over it.
//! Classification is deterministic: the same phrase always lands in the same
//! cluster and tier, and always derives the same id.

pub mod classify;
pub mod config;
pub mod error;
pub mod keyword;
pub mod manager;
pub mod report;
pub mod store;
pub mod types;

pub use config::CoreConfig;
pub use error::CoreError;
pub use keyword::{Keyword, KeywordDraft, KeywordFields, KeywordId, KeywordUpdate};
pub use manager::{KeywordQuery, SemanticCore};
pub use types::{Cluster, Priority};
