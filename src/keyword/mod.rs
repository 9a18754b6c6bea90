pub mod changes;
pub mod keyword;

pub use crate::types::identifiers::{KeywordId, Timestamp};
pub use changes::{KeywordDraft, KeywordUpdate};
pub use keyword::{Keyword, KeywordFields};
