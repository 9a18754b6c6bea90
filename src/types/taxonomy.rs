use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Topical cluster of a keyword.
///
/// Declaration order is the classifier's evaluation order and the order
/// statistics and reports are emitted in. Names are written lowercase and
/// read through [`FromStr`], so any case is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Technology,
    Industry,
    Functional,
    Problem,
    Integration,
    Pricing,
    Analytics,
    Training,
}

impl Cluster {
    pub const ALL: [Cluster; 8] = [
        Cluster::Technology,
        Cluster::Industry,
        Cluster::Functional,
        Cluster::Problem,
        Cluster::Integration,
        Cluster::Pricing,
        Cluster::Analytics,
        Cluster::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Technology => "technology",
            Cluster::Industry => "industry",
            Cluster::Functional => "functional",
            Cluster::Problem => "problem",
            Cluster::Integration => "integration",
            Cluster::Pricing => "pricing",
            Cluster::Analytics => "analytics",
            Cluster::Training => "training",
        }
    }

    /// Heading form used in rendered listings ("Technology").
    pub fn title(&self) -> &'static str {
        match self {
            Cluster::Technology => "Technology",
            Cluster::Industry => "Industry",
            Cluster::Functional => "Functional",
            Cluster::Problem => "Problem",
            Cluster::Integration => "Integration",
            Cluster::Pricing => "Pricing",
            Cluster::Analytics => "Analytics",
            Cluster::Training => "Training",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Cluster::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownCluster(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Cluster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Priority tier, ascending. Read the same way as [`Cluster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownPriority(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
