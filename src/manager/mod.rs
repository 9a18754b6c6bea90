//! The keyword manager: classification on add, mutation, persistence, views.
//!
//! Every mutating call writes the whole snapshot before returning. When that
//! write fails the error is returned, but the in-memory change stays applied.

pub mod bulk;
pub mod query;
pub mod statistics;

use serde_json::Value;
use tracing::debug;

use crate::classify::{Classifier, Prioritizer, TriggerClassifier, TriggerPrioritizer};
use crate::config::CoreConfig;
use crate::error::CoreError;
use crate::keyword::{Keyword, KeywordDraft, KeywordFields, KeywordId, KeywordUpdate};
use crate::store::CatalogStore;
use crate::types::taxonomy::{Cluster, Priority};

pub use bulk::{BulkError, BulkReport};
pub use query::KeywordQuery;
pub use statistics::{ClusterStatistics, CoreStatistics, PriorityStatistics};

/// Single writer: mutations take `&mut self` and persist before returning.
pub struct SemanticCore<C, P> {
    store: CatalogStore,
    classifier: C,
    prioritizer: P,
    config: CoreConfig,
}

impl SemanticCore<TriggerClassifier, TriggerPrioritizer> {
    /// Open the catalog named by `config` with the default trigger rules.
    pub fn open(config: CoreConfig) -> Self {
        Self::with_parts(config, TriggerClassifier::default(), TriggerPrioritizer)
    }
}

impl<C, P> SemanticCore<C, P>
where
    C: Classifier,
    P: Prioritizer,
{
    pub fn with_parts(config: CoreConfig, classifier: C, prioritizer: P) -> Self {
        let store = CatalogStore::open(config.snapshot_path.clone(), config.pretty);
        Self {
            store,
            classifier,
            prioritizer,
            config,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn classify(&self, phrase: &str) -> Cluster {
        self.classifier.classify(phrase)
    }

    pub fn prioritize(&self, phrase: &str, cluster: Cluster) -> Priority {
        self.prioritizer.prioritize(phrase, cluster)
    }

    /// Add a phrase, filling in whichever of cluster/priority is missing.
    ///
    /// The phrase is trimmed. Duplicates are not checked: adding a phrase
    /// already in the catalog derives the same id and replaces that record
    /// in place. See [`SemanticCore::add_unique`] for the checked variant.
    pub fn add(
        &mut self,
        phrase: &str,
        cluster: Option<Cluster>,
        priority: Option<Priority>,
        fields: KeywordFields,
    ) -> Result<Keyword, CoreError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(CoreError::EmptyPhrase);
        }

        let cluster = cluster.unwrap_or_else(|| self.classifier.classify(phrase));
        let priority = priority.unwrap_or_else(|| self.prioritizer.prioritize(phrase, cluster));

        let keyword = Keyword::new(phrase.to_string(), cluster, priority, fields);
        debug!(
            id = %keyword.id,
            cluster = %cluster,
            priority = %priority,
            "adding keyword"
        );

        self.store.upsert(keyword.clone());
        self.store.save()?;
        Ok(keyword)
    }

    /// Add from a string-typed request. Unknown cluster/priority names fail
    /// before anything is stored.
    pub fn add_draft(&mut self, draft: KeywordDraft) -> Result<Keyword, CoreError> {
        let cluster = draft.parse_cluster()?;
        let priority = draft.parse_priority()?;
        self.add(&draft.phrase, cluster, priority, draft.fields)
    }

    /// Like [`SemanticCore::add`], but refuses a phrase that already exists
    /// among active records (case-insensitive).
    pub fn add_unique(
        &mut self,
        phrase: &str,
        cluster: Option<Cluster>,
        priority: Option<Priority>,
        fields: KeywordFields,
    ) -> Result<Keyword, CoreError> {
        if let Some(existing) = self.find_by_phrase(phrase) {
            return Err(CoreError::DuplicatePhrase(existing.phrase.clone()));
        }
        self.add(phrase, cluster, priority, fields)
    }

    /// The active record whose phrase equals `phrase`, ignoring case.
    pub fn find_by_phrase(&self, phrase: &str) -> Option<&Keyword> {
        self.store
            .iter()
            .find(|k| k.is_active && k.phrase_matches(phrase))
    }

    /// Apply `update` to the record `id`. `Ok(None)` when there is no such record.
    pub fn update(
        &mut self,
        id: &KeywordId,
        update: KeywordUpdate,
    ) -> Result<Option<Keyword>, CoreError> {
        let Some(keyword) = self.store.get_mut(id) else {
            return Ok(None);
        };
        update.validate()?;
        update.apply(keyword);
        let updated = keyword.clone();

        self.store.save()?;
        Ok(Some(updated))
    }

    /// [`SemanticCore::update`] from a loose JSON object.
    pub fn update_json(
        &mut self,
        id: &KeywordId,
        updates: &Value,
    ) -> Result<Option<Keyword>, CoreError> {
        if !self.store.contains(id) {
            return Ok(None);
        }
        let update = KeywordUpdate::from_json(updates)?;
        self.update(id, update)
    }

    /// Hard delete. `Ok(false)` and no write when `id` is unknown.
    pub fn remove(&mut self, id: &KeywordId) -> Result<bool, CoreError> {
        if self.store.remove(id).is_none() {
            return Ok(false);
        }
        debug!(id = %id, "removed keyword");
        self.store.save()?;
        Ok(true)
    }

    pub fn get(&self, id: &KeywordId) -> Option<&Keyword> {
        self.store.get(id)
    }

    /// Records in catalog order.
    pub fn list(&self, active_only: bool) -> Vec<&Keyword> {
        self.store
            .iter()
            .filter(|k| !active_only || k.is_active)
            .collect()
    }

    pub fn by_cluster(&self, cluster: Cluster) -> Vec<&Keyword> {
        self.store
            .iter()
            .filter(|k| k.is_active && k.cluster == cluster)
            .collect()
    }

    pub fn by_priority(&self, priority: Priority) -> Vec<&Keyword> {
        self.store
            .iter()
            .filter(|k| k.is_active && k.priority == priority)
            .collect()
    }

    /// Active records whose phrase contains `needle`, ignoring case.
    pub fn search(&self, needle: &str) -> Vec<&Keyword> {
        let needle = needle.to_lowercase();
        self.store
            .iter()
            .filter(|k| k.is_active && k.phrase.to_lowercase().contains(&needle))
            .collect()
    }

    /// Discard memory and re-read the snapshot. Returns the record count.
    pub fn reload(&mut self) -> usize {
        self.store.load()
    }

    pub fn save(&self) -> Result<(), CoreError> {
        self.store.save()
    }
}
