use crate::types::taxonomy::{Cluster, Priority};

pub trait Prioritizer {
    /// Total and deterministic. `cluster` is already resolved; the default
    /// rules do not consult it.
    fn prioritize(&self, phrase: &str, cluster: Cluster) -> Priority;
}

/// Flagship capability and core monitoring terms.
pub const CRITICAL_TRIGGERS: &[&str] = &[
    "речевая аналитика",
    "speech analytics",
    "контроль качества звонков",
    "анализ звонков",
    "мониторинг звонков",
];

/// Purchase, pricing, demo and rollout vocabulary.
pub const COMMERCIAL_TRIGGERS: &[&str] = &[
    "купить",
    "заказать",
    "цена",
    "стоимость",
    "демо",
    "презентация",
    "внедрение",
    "интеграция",
];

/// How-to and what-is vocabulary.
pub const INFORMATIONAL_TRIGGERS: &[&str] =
    &["как", "что такое", "преимущества", "возможности", "функции"];

/// Phrases with at most this many words count as head terms.
pub const HEAD_TERM_MAX_WORDS: usize = 3;

/// v0: ordered trigger rules
///
/// critical triggers, then commercial triggers, then informational
/// triggers or a short phrase, then low.
#[derive(Default)]
pub struct TriggerPrioritizer;

impl Prioritizer for TriggerPrioritizer {
    fn prioritize(&self, phrase: &str, _cluster: Cluster) -> Priority {
        let lowered = phrase.to_lowercase();
        let hits = |triggers: &[&str]| triggers.iter().any(|t| lowered.contains(t));

        // Word count on the raw phrase, split on whitespace.
        let word_count = phrase.split_whitespace().count();

        if hits(CRITICAL_TRIGGERS) {
            Priority::Critical
        } else if hits(COMMERCIAL_TRIGGERS) {
            Priority::High
        } else if hits(INFORMATIONAL_TRIGGERS) || word_count <= HEAD_TERM_MAX_WORDS {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}
