use serde::Deserialize;

use crate::classify::{Classifier, Prioritizer};
use crate::keyword::Keyword;
use crate::manager::SemanticCore;
use crate::types::taxonomy::{Cluster, Priority};

/// A listing request.
///
/// Only one filter applies, in this precedence: `search`, then `cluster`,
/// then `priority`. Filtered views are always active-only; `active_only`
/// matters only for the unfiltered listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub cluster: Option<Cluster>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_active_only() -> bool {
    true
}

impl Default for KeywordQuery {
    fn default() -> Self {
        Self {
            search: None,
            cluster: None,
            priority: None,
            active_only: true,
        }
    }
}

impl KeywordQuery {
    pub fn search(needle: impl Into<String>) -> Self {
        Self {
            search: Some(needle.into()),
            ..Self::default()
        }
    }

    pub fn cluster(cluster: Cluster) -> Self {
        Self {
            cluster: Some(cluster),
            ..Self::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn all(active_only: bool) -> Self {
        Self {
            active_only,
            ..Self::default()
        }
    }
}

impl<C, P> SemanticCore<C, P>
where
    C: Classifier,
    P: Prioritizer,
{
    pub fn query(&self, query: &KeywordQuery) -> Vec<&Keyword> {
        // An empty search string is treated as absent.
        if let Some(needle) = query.search.as_deref().filter(|s| !s.is_empty()) {
            self.search(needle)
        } else if let Some(cluster) = query.cluster {
            self.by_cluster(cluster)
        } else if let Some(priority) = query.priority {
            self.by_priority(priority)
        } else {
            self.list(query.active_only)
        }
    }
}
