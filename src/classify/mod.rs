pub mod cluster;
pub mod priority;

pub use cluster::{Classifier, TriggerClassifier, CLUSTER_TRIGGERS, DEFAULT_CLUSTER};
pub use priority::{
    Prioritizer, TriggerPrioritizer, COMMERCIAL_TRIGGERS, CRITICAL_TRIGGERS,
    HEAD_TERM_MAX_WORDS, INFORMATIONAL_TRIGGERS,
};
