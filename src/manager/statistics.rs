use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{Classifier, Prioritizer};
use crate::keyword::Keyword;
use crate::manager::SemanticCore;
use crate::types::taxonomy::{Cluster, Priority};

/// Active keyword count per cluster. Every cluster is present, zero or not.
pub type ClusterStatistics = BTreeMap<Cluster, usize>;

/// Active keyword count per priority. Every tier is present, zero or not.
pub type PriorityStatistics = BTreeMap<Priority, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreStatistics {
    pub total_keywords: usize,
    pub active_keywords: usize,
    pub inactive_keywords: usize,
    pub cluster_distribution: ClusterStatistics,
    pub priority_distribution: PriorityStatistics,
    pub clusters: Vec<Cluster>,
    pub priorities: Vec<Priority>,
}

pub fn cluster_distribution<'a>(
    keywords: impl IntoIterator<Item = &'a Keyword>,
) -> ClusterStatistics {
    let mut stats: ClusterStatistics = Cluster::ALL.into_iter().map(|c| (c, 0)).collect();
    for keyword in keywords.into_iter().filter(|k| k.is_active) {
        *stats.entry(keyword.cluster).or_default() += 1;
    }
    stats
}

pub fn priority_distribution<'a>(
    keywords: impl IntoIterator<Item = &'a Keyword>,
) -> PriorityStatistics {
    let mut stats: PriorityStatistics = Priority::ALL.into_iter().map(|p| (p, 0)).collect();
    for keyword in keywords.into_iter().filter(|k| k.is_active) {
        *stats.entry(keyword.priority).or_default() += 1;
    }
    stats
}

// Computed from the records on every call; nothing is cached.
impl<C, P> SemanticCore<C, P>
where
    C: Classifier,
    P: Prioritizer,
{
    pub fn cluster_statistics(&self) -> ClusterStatistics {
        cluster_distribution(self.store().iter())
    }

    pub fn priority_statistics(&self) -> PriorityStatistics {
        priority_distribution(self.store().iter())
    }

    pub fn statistics(&self) -> CoreStatistics {
        let total_keywords = self.store().len();
        let active_keywords = self.store().iter().filter(|k| k.is_active).count();

        CoreStatistics {
            total_keywords,
            active_keywords,
            inactive_keywords: total_keywords - active_keywords,
            cluster_distribution: self.cluster_statistics(),
            priority_distribution: self.priority_statistics(),
            clusters: Cluster::ALL.to_vec(),
            priorities: Priority::ALL.to_vec(),
        }
    }
}
