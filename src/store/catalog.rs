use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::keyword::Keyword;
use crate::store::snapshot::{CatalogSnapshot, SnapshotView};
use crate::types::identifiers::{KeywordId, Timestamp};

/// Insertion-ordered catalog of keywords backed by a single snapshot file.
///
/// Read-only outside the crate: records change through
/// [`SemanticCore`](crate::SemanticCore), which keeps the id index in step.
/// Mutations only touch memory; callers persist with [`CatalogStore::save`].
/// Single writer: nothing here guards against another process writing the
/// same file.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    pretty: bool,
    entries: Vec<Keyword>,
    positions: HashMap<KeywordId, usize>,
}

impl CatalogStore {
    /// Open the catalog at `path`, loading whatever snapshot is there.
    pub fn open(path: impl Into<PathBuf>, pretty: bool) -> Self {
        let mut store = Self {
            path: path.into(),
            pretty,
            entries: Vec::new(),
            positions: HashMap::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory catalog with the snapshot on disk.
    ///
    /// Never fails: a missing file gives an empty catalog, and an unreadable
    /// or malformed one is logged and also gives an empty catalog.
    /// Returns the number of records loaded.
    pub fn load(&mut self) -> usize {
        self.entries.clear();
        self.positions.clear();

        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot yet, starting empty");
            return 0;
        }

        match read_snapshot(&self.path) {
            Ok(snapshot) => {
                for keyword in snapshot.keywords {
                    self.upsert(keyword);
                }
                info!(
                    path = %self.path.display(),
                    keywords = self.entries.len(),
                    "loaded semantic core snapshot"
                );
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to load semantic core snapshot, starting empty"
                );
            }
        }
        self.entries.len()
    }

    /// Write every record to the snapshot file.
    ///
    /// The snapshot goes to a sibling `.tmp` file first and is renamed over
    /// the target, so readers see either the old or the new file.
    pub fn save(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let view = SnapshotView {
            keywords: &self.entries,
            last_updated: Timestamp::now(),
        };

        let temp_path = temp_path_for(&self.path);
        if let Err(err) = self.write_via_temp(&temp_path, &view) {
            // Nothing useful to do if the cleanup fails too.
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        debug!(
            path = %self.path.display(),
            keywords = self.entries.len(),
            "saved semantic core snapshot"
        );
        Ok(())
    }

    fn write_via_temp(&self, temp_path: &Path, view: &SnapshotView<'_>) -> Result<(), CoreError> {
        let f = fs::File::create(temp_path)?;
        if self.pretty {
            serde_json::to_writer_pretty(&f, view)?;
        } else {
            serde_json::to_writer(&f, view)?;
        }
        f.sync_all()?;
        fs::rename(temp_path, &self.path)?;
        Ok(())
    }

    /// Insert or replace by id. A replaced record keeps its position.
    pub(crate) fn upsert(&mut self, keyword: Keyword) -> Option<Keyword> {
        match self.positions.get(&keyword.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], keyword)),
            None => {
                self.positions.insert(keyword.id.clone(), self.entries.len());
                self.entries.push(keyword);
                None
            }
        }
    }

    pub(crate) fn remove(&mut self, id: &KeywordId) -> Option<Keyword> {
        let pos = self.positions.remove(id)?;
        let removed = self.entries.remove(pos);
        for keyword in &self.entries[pos..] {
            if let Some(p) = self.positions.get_mut(&keyword.id) {
                *p -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &KeywordId) -> Option<&Keyword> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    pub(crate) fn get_mut(&mut self, id: &KeywordId) -> Option<&mut Keyword> {
        match self.positions.get(id) {
            Some(&pos) => Some(&mut self.entries[pos]),
            None => None,
        }
    }

    pub fn contains(&self, id: &KeywordId) -> bool {
        self.positions.contains_key(id)
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_snapshot(path: &Path) -> Result<CatalogSnapshot, CoreError> {
    let f = fs::File::open(path)?;
    let snapshot = serde_json::from_reader(std::io::BufReader::new(f))?;
    Ok(snapshot)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
