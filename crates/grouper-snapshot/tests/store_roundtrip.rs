//! Snapshot round-trip through the codec, the file store and the engine.

use grouper_core::{AssignStrategy, Group, Person, Scheme};
use grouper_engine::{EngineOptions, SchemeService};
use grouper_snapshot::{SnapshotError, SnapshotStore, decode, encode, from_json, to_json};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn assigned_scheme() -> Scheme {
    let mut service = SchemeService::new(
        "Spring camp",
        EngineOptions {
            seed: Some(11),
            ..EngineOptions::default()
        },
    );
    service
        .set_people(vec![
            Person::new("a", "Ada", "Lovelace").with_connections(["b"]),
            Person::new("b", "Alan", "Turing").with_connections(["a", "c"]),
            Person::new("c", "Grace", "Hopper"),
            Person::new("d", "Edsger", "Dijkstra").with_connections(["a"]),
        ])
        .unwrap();
    service
        .set_groups(vec![Group::new("Kayak", 2), Group::new("Climb", 3)])
        .unwrap();
    service
        .set_group_preferences("a,Climb,Kayak\nc,Kayak\n")
        .unwrap();
    service.set_use_group_preferences(false).unwrap();
    service.autoassign(AssignStrategy::Balanced).unwrap();
    service.into_scheme()
}

#[test]
fn decode_of_encode_reproduces_scheme() {
    let scheme = assigned_scheme();
    let decoded = decode(&encode(&scheme)).unwrap();
    assert_eq!(decoded, scheme);
}

#[test]
fn json_roundtrip_preserves_membership_and_flags() {
    let scheme = assigned_scheme();
    let decoded = from_json(&to_json(&scheme).unwrap()).unwrap();

    assert_eq!(decoded.people, scheme.people);
    assert_eq!(decoded.groups, scheme.groups);
    assert!(!decoded.use_group_preferences);
}

#[test]
fn decoded_snapshot_opens_cleanly() {
    let scheme = assigned_scheme();
    let decoded = from_json(&to_json(&scheme).unwrap()).unwrap();
    let (_, report) = SchemeService::open(decoded, EngineOptions::default()).unwrap();
    assert!(report.is_clean(), "{report:?}");
}

#[test]
fn stale_happiness_in_snapshot_surfaces_on_open() {
    let mut scheme = assigned_scheme();
    scheme.people[2].happiness += 5;
    let decoded = from_json(&to_json(&scheme).unwrap()).unwrap();
    let (_, report) = SchemeService::open(decoded, EngineOptions::default()).unwrap();
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn store_saves_lists_and_loads_named_snapshots() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path().join("snapshots"));
    assert!(store.list().unwrap().is_empty());

    let scheme = assigned_scheme();
    store.save("spring", &scheme).unwrap();
    store.save("autumn", &Scheme::new("Autumn")).unwrap();

    assert_eq!(store.list().unwrap(), vec!["autumn", "spring"]);
    assert_eq!(store.load("spring").unwrap(), scheme);
    assert!(matches!(store.load("winter"), Err(SnapshotError::NotFound(_))));
}

#[test]
fn store_surfaces_malformed_files() {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());
    std::fs::write(dir.path().join("broken.json"), "{\"version\": 2}").unwrap();
    assert!(matches!(store.load("broken"), Err(SnapshotError::Malformed { .. })));
}
