pub mod identifiers;
pub mod taxonomy;

pub use identifiers::{KeywordId, Timestamp};
pub use taxonomy::{Cluster, Priority};
