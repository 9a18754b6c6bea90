use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::keyword::keyword::{Keyword, KeywordFields};
use crate::types::identifiers::Timestamp;
use crate::types::taxonomy::{Cluster, Priority};

/// An add request with cluster/priority still in string form, as received
/// from a transport layer or an import file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct KeywordDraft {
    pub phrase: String,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub fields: KeywordFields,
}

impl KeywordDraft {
    pub fn new(phrase: impl Into<String>) -> Self {
        KeywordDraft {
            phrase: phrase.into(),
            ..Default::default()
        }
    }

    pub fn parse_cluster(&self) -> Result<Option<Cluster>, CoreError> {
        self.cluster.as_deref().map(str::parse).transpose()
    }

    pub fn parse_priority(&self) -> Result<Option<Priority>, CoreError> {
        self.priority.as_deref().map(str::parse).transpose()
    }
}

/// Partial update of a keyword. `None` leaves a field untouched.
///
/// The nullable metrics take `Some(None)` to clear the stored value.
/// `id` and `created_at` are not updatable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordUpdate {
    pub phrase: Option<String>,
    pub cluster: Option<Cluster>,
    pub priority: Option<Priority>,
    pub search_volume: Option<Option<i64>>,
    pub competition: Option<Option<String>>,
    pub commercial_intent: Option<Option<f64>>,
    pub is_active: Option<bool>,
}

impl KeywordUpdate {
    /// Build an update from a loose JSON object.
    ///
    /// Unknown keys are ignored. Cluster and priority strings are coerced
    /// into their enums; anything else of the wrong type is rejected.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let map = value.as_object().ok_or_else(|| CoreError::InvalidField {
            field: "updates",
            reason: "expected a JSON object".into(),
        })?;

        Ok(KeywordUpdate {
            phrase: optional_str(map, "phrase")?.map(str::to_string),
            cluster: optional_str(map, "cluster")?
                .map(str::parse::<Cluster>)
                .transpose()?,
            priority: optional_str(map, "priority")?
                .map(str::parse::<Priority>)
                .transpose()?,
            search_volume: nullable(map, "search_volume", Value::as_i64, "an integer")?,
            competition: nullable(
                map,
                "competition",
                |v| v.as_str().map(str::to_string),
                "a string",
            )?,
            commercial_intent: nullable(map, "commercial_intent", Value::as_f64, "a number")?,
            is_active: match map.get("is_active") {
                None => None,
                Some(v) => Some(v.as_bool().ok_or_else(|| wrong_type("is_active", "a boolean"))?),
            },
        })
    }

    /// Reject a present-but-blank phrase before anything is mutated.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.phrase {
            Some(p) if p.trim().is_empty() => Err(CoreError::EmptyPhrase),
            _ => Ok(()),
        }
    }

    /// Apply to `keyword` and refresh `updated_at`, even when nothing else changed.
    pub fn apply(self, keyword: &mut Keyword) {
        if let Some(phrase) = self.phrase {
            keyword.phrase = phrase.trim().to_string();
        }
        if let Some(cluster) = self.cluster {
            keyword.cluster = cluster;
        }
        if let Some(priority) = self.priority {
            keyword.priority = priority;
        }
        if let Some(search_volume) = self.search_volume {
            keyword.search_volume = search_volume;
        }
        if let Some(competition) = self.competition {
            keyword.competition = competition;
        }
        if let Some(commercial_intent) = self.commercial_intent {
            keyword.commercial_intent = commercial_intent;
        }
        if let Some(is_active) = self.is_active {
            keyword.is_active = is_active;
        }
        keyword.updated_at = Timestamp::now();
    }
}

fn wrong_type(field: &'static str, expected: &str) -> CoreError {
    CoreError::InvalidField {
        field,
        reason: format!("expected {expected}"),
    }
}

fn optional_str<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, CoreError> {
    match map.get(field) {
        None => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| wrong_type(field, "a string")),
    }
}

fn nullable<T>(
    map: &Map<String, Value>,
    field: &'static str,
    convert: impl Fn(&Value) -> Option<T>,
    expected: &str,
) -> Result<Option<Option<T>>, CoreError> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(v) => convert(v)
            .map(|t| Some(Some(t)))
            .ok_or_else(|| wrong_type(field, expected)),
    }
}
