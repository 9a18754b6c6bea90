use std::collections::BTreeSet;
use std::fs;

use semantic_core::keyword::{KeywordFields, KeywordId, KeywordUpdate};
use semantic_core::store::{CatalogSnapshot, CatalogStore};
use semantic_core::{Cluster, CoreConfig, Keyword, Priority, SemanticCore};
use serde_json::Value;
use tempfile::tempdir;

type Summary = (KeywordId, String, Cluster, Priority, bool);

fn summarize(records: Vec<&Keyword>) -> BTreeSet<Summary> {
    records
        .into_iter()
        .map(|k| (k.id.clone(), k.phrase.clone(), k.cluster, k.priority, k.is_active))
        .collect()
}

#[test]
fn invariant_save_then_load_preserves_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    core.add("речевая аналитика", None, None, KeywordFields::default())
        .unwrap();
    core.add(
        "купить битрикс24 интеграцию",
        None,
        None,
        KeywordFields {
            search_volume: Some(90),
            competition: Some("low".into()),
            commercial_intent: Some(0.95),
        },
    )
    .unwrap();
    let retired = core
        .add("мусорные лиды из рекламы", None, None, KeywordFields::default())
        .unwrap();
    core.update(
        &retired.id,
        KeywordUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    let before = summarize(core.list(false));

    let reopened = SemanticCore::open(CoreConfig::at(&path));
    let after = summarize(reopened.list(false));

    assert_eq!(before, after);
    assert_eq!(after.len(), 3);

    let kw = reopened
        .get(&KeywordId::from_phrase("купить битрикс24 интеграцию"))
        .unwrap();
    assert_eq!(kw.search_volume, Some(90));
    assert_eq!(kw.competition.as_deref(), Some("low"));
    assert_eq!(kw.commercial_intent, Some(0.95));
}

#[test]
fn golden_snapshot_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    core.add("тариф", None, None, KeywordFields::default())
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"тариф\""), "non-ASCII is written verbatim");

    let doc: Value = serde_json::from_str(&raw).unwrap();
    let top: BTreeSet<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(top, BTreeSet::from(["keywords", "last_updated"]));
    assert!(doc["last_updated"].is_string());

    let record = &doc["keywords"][0];
    let mut keys: Vec<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = vec![
        "id",
        "phrase",
        "cluster",
        "priority",
        "search_volume",
        "competition",
        "commercial_intent",
        "created_at",
        "updated_at",
        "is_active",
    ];
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(record["cluster"], "pricing");
    assert_eq!(record["priority"], "medium");
    assert!(record["search_volume"].is_null());
    assert!(record["competition"].is_null());
    assert!(record["commercial_intent"].is_null());
    assert_eq!(record["is_active"], true);
    assert!(record["created_at"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn inactive_records_are_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    let kw = core
        .add("тариф", None, None, KeywordFields::default())
        .unwrap();
    core.update_json(&kw.id, &serde_json::json!({ "is_active": false }))
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot.keywords.len(), 1);
    assert!(!snapshot.keywords[0].is_active);
}

#[test]
fn missing_snapshot_starts_empty_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("semantic_core.json");

    let core = SemanticCore::open(CoreConfig::at(&path));
    assert!(core.list(false).is_empty());
    assert!(!path.exists());
}

#[test]
fn save_creates_parent_directories_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("seo").join("semantic_core.json");

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    core.add("тариф", None, None, KeywordFields::default())
        .unwrap();

    assert!(path.exists());
    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("semantic_core.json")]);
}

#[test]
fn corrupt_snapshot_degrades_to_empty_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");
    fs::write(&path, "{ \"keywords\": [ { \"id\": ").unwrap();

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    assert!(core.list(false).is_empty());

    // The next mutation overwrites the broken file with a valid snapshot.
    core.add("тариф", None, None, KeywordFields::default())
        .unwrap();
    let reopened = SemanticCore::open(CoreConfig::at(&path));
    assert_eq!(reopened.list(false).len(), 1);
}

#[test]
fn unknown_enum_value_rejects_whole_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");
    let doc = serde_json::json!({
        "keywords": [
            { "id": "a_1", "phrase": "a", "cluster": "pricing", "priority": "low" },
            { "id": "b_2", "phrase": "b", "cluster": "marketing", "priority": "low" }
        ],
        "last_updated": "2024-05-01T10:00:00"
    });
    fs::write(&path, doc.to_string()).unwrap();

    let store = CatalogStore::open(&path, true);
    assert!(store.is_empty());
}

#[test]
fn legacy_snapshot_fields_are_defaulted_and_kept_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");
    let doc = serde_json::json!({
        "keywords": [
            {
                "id": "речевая_аналитика_0a1b2c3d",
                "phrase": "речевая аналитика",
                "cluster": "technology",
                "priority": "critical",
                "created_at": "2024-05-01T10:00:00.123456",
                "updated_at": "2024-05-02T11:30:00.000001"
            },
            {
                "id": "тариф_99999999",
                "phrase": "тариф",
                "cluster": "pricing",
                "priority": "high",
                "search_volume": 40,
                "is_active": false
            }
        ],
        "last_updated": "2024-05-02T11:30:00.000001"
    });
    fs::write(&path, doc.to_string()).unwrap();

    let core = SemanticCore::open(CoreConfig::at(&path));
    assert_eq!(core.list(false).len(), 2);
    assert_eq!(core.list(true).len(), 1);

    let first = core.get(&KeywordId::from("речевая_аналитика_0a1b2c3d")).unwrap();
    assert!(first.is_active);
    assert_eq!(first.created_at.as_str(), "2024-05-01T10:00:00.123456");
    assert_eq!(first.updated_at.as_str(), "2024-05-02T11:30:00.000001");
    assert_eq!(first.search_volume, None);

    let second = core.get(&KeywordId::from("тариф_99999999")).unwrap();
    assert_eq!(second.cluster, Cluster::Pricing);
    assert_eq!(second.priority, Priority::High);
    assert_eq!(second.search_volume, Some(40));
    assert!(!second.created_at.as_str().is_empty());
}

#[test]
fn load_follows_stored_order_and_last_duplicate_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");
    let doc = serde_json::json!({
        "keywords": [
            { "id": "b", "phrase": "b", "cluster": "pricing", "priority": "low" },
            { "id": "a", "phrase": "a", "cluster": "pricing", "priority": "low" },
            { "id": "b", "phrase": "b2", "cluster": "training", "priority": "high" }
        ]
    });
    fs::write(&path, doc.to_string()).unwrap();

    let store = CatalogStore::open(&path, false);
    let phrases: Vec<&str> = store.iter().map(|k| k.phrase.as_str()).collect();
    assert_eq!(phrases, vec!["b2", "a"]);
}

#[test]
fn reload_discards_unsaved_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    core.add("тариф", None, None, KeywordFields::default())
        .unwrap();

    let mut other = SemanticCore::open(CoreConfig::at(&path));
    other
        .add("стоимость внедрения", None, None, KeywordFields::default())
        .unwrap();

    // Last writer wins on the whole file.
    assert_eq!(core.reload(), 2);
    assert_eq!(core.list(false).len(), 2);
}

#[test]
fn compact_snapshot_when_pretty_is_off() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");

    let mut config = CoreConfig::at(&path);
    config.pretty = false;
    let mut core = SemanticCore::open(config);
    core.add("тариф", None, None, KeywordFields::default())
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains('\n'));
}

#[test]
fn invariant_re_adding_a_stored_phrase_overwrites_existing_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("semantic_core.json");
    let doc = serde_json::json!({
        "keywords": [
            {
                "id": "речевая_аналитика_56f44423",
                "phrase": "речевая аналитика",
                "cluster": "technology",
                "priority": "critical",
                "search_volume": 880,
                "created_at": "2024-05-01T10:00:00.123456",
                "updated_at": "2024-05-01T10:00:00.123456"
            }
        ],
        "last_updated": "2024-05-01T10:00:00.123456"
    });
    fs::write(&path, doc.to_string()).unwrap();

    let mut core = SemanticCore::open(CoreConfig::at(&path));
    let kw = core
        .add("речевая аналитика", Some(Cluster::Analytics), None, KeywordFields::default())
        .unwrap();

    assert_eq!(kw.id.as_str(), "речевая_аналитика_56f44423");
    let all = core.list(false);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kw.id);
    assert_eq!(all[0].cluster, Cluster::Analytics);
}
