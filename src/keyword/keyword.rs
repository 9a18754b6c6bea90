use serde::{Deserialize, Serialize};

use crate::types::identifiers::{KeywordId, Timestamp};
use crate::types::taxonomy::{Cluster, Priority};

/// Optional externally-sourced metrics. Stored as given, never validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordFields {
    #[serde(default)]
    pub search_volume: Option<i64>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub commercial_intent: Option<f64>,
}

/// One phrase of the semantic core.
///
/// Field order and names are the snapshot's record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    pub phrase: String,
    pub cluster: Cluster,
    pub priority: Priority,
    #[serde(default)]
    pub search_volume: Option<i64>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub commercial_intent: Option<f64>,
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,
    #[serde(default = "Timestamp::now")]
    pub updated_at: Timestamp,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Keyword {
    /// Build a fresh, active record. Both timestamps are set to now.
    ///
    /// `phrase` is stored as given; the id is derived from it.
    pub fn new(
        phrase: String,
        cluster: Cluster,
        priority: Priority,
        fields: KeywordFields,
    ) -> Self {
        let now = Timestamp::now();
        Keyword {
            id: KeywordId::from_phrase(&phrase),
            phrase,
            cluster,
            priority,
            search_volume: fields.search_volume,
            competition: fields.competition,
            commercial_intent: fields.commercial_intent,
            created_at: now.clone(),
            updated_at: now,
            is_active: true,
        }
    }

    pub fn fields(&self) -> KeywordFields {
        KeywordFields {
            search_volume: self.search_volume,
            competition: self.competition.clone(),
            commercial_intent: self.commercial_intent,
        }
    }

    /// Case-insensitive phrase equality, ignoring surrounding whitespace.
    pub fn phrase_matches(&self, phrase: &str) -> bool {
        self.phrase.trim().to_lowercase() == phrase.trim().to_lowercase()
    }
}
