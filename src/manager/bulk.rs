use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::classify::{Classifier, Prioritizer};
use crate::error::CoreError;
use crate::keyword::{Keyword, KeywordDraft};
use crate::manager::SemanticCore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkError {
    /// 1-based position in the submitted list.
    pub entry: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkReport {
    pub processed: usize,
    pub added: Vec<Keyword>,
    pub errors: Vec<BulkError>,
}

impl BulkReport {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl<C, P> SemanticCore<C, P>
where
    C: Classifier,
    P: Prioritizer,
{
    /// Add many keywords, each either a bare phrase string or a draft object.
    ///
    /// Entries are independent: a rejected entry is reported and the rest
    /// still go in. Blank bare strings are skipped without an error. Phrases
    /// already present among active records are rejected as duplicates.
    pub fn bulk_add(&mut self, entries: &[Value]) -> BulkReport {
        let mut added = Vec::new();
        let mut errors = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            let outcome = match entry {
                Value::String(phrase) if phrase.trim().is_empty() => continue,
                Value::String(phrase) => self.add_checked(KeywordDraft::new(phrase.as_str())),
                Value::Object(map) if map.contains_key("phrase") => {
                    match serde_json::from_value::<KeywordDraft>(entry.clone()) {
                        Ok(draft) => self.add_checked(draft),
                        Err(err) => Err(CoreError::InvalidField {
                            field: "keyword",
                            reason: err.to_string(),
                        }),
                    }
                }
                _ => Err(CoreError::InvalidField {
                    field: "keyword",
                    reason: "expected a phrase string or an object with a phrase".into(),
                }),
            };

            match outcome {
                Ok(keyword) => added.push(keyword),
                Err(err) => {
                    warn!(entry = i + 1, error = %err, "bulk keyword rejected");
                    errors.push(BulkError {
                        entry: i + 1,
                        reason: err.to_string(),
                    });
                }
            }
        }

        BulkReport {
            processed: entries.len(),
            added,
            errors,
        }
    }

    fn add_checked(&mut self, draft: KeywordDraft) -> Result<Keyword, CoreError> {
        if draft.phrase.trim().is_empty() {
            return Err(CoreError::EmptyPhrase);
        }
        if let Some(existing) = self.find_by_phrase(&draft.phrase) {
            return Err(CoreError::DuplicatePhrase(existing.phrase.clone()));
        }
        self.add_draft(draft)
    }
}
