use super::*;
use cup_core::{create_championship, simulate_all, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample(seed: u64) -> Championship {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut roster = Roster::new();
    for name in ["Ajax", "Benfica", "Celtic", "Dynamo", "Everton", "Fenerbahce", "Galatasaray", "Hajduk"] {
        roster.register(name).unwrap();
    }
    create_championship("Neighbourhood Cup", roster.into_teams(), &mut rng).unwrap()
}

fn exercise(store: &mut dyn ChampionshipStore) {
    let a = sample(1);
    let b = sample(2);
    store.save(&a).unwrap();
    store.save(&b).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);

    // Saving the same id again replaces it
    store.save(&a).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);

    let mut rng = StdRng::seed_from_u64(3);
    let done = simulate_all(&a, &mut rng).unwrap();
    store.update(&done).unwrap();
    let loaded = store.load_by_id(&a.id).unwrap().unwrap();
    assert!(loaded.completed);
    assert_eq!(loaded, done);

    let missing = ChampionshipId::new("champ-missing");
    assert!(store.load_by_id(&missing).unwrap().is_none());
}

#[test]
fn test_memory_store() {
    exercise(&mut MemoryStore::new());
}

#[test]
fn test_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("data").join("championships.json"));
    exercise(&mut store);

    // A fresh handle on the same file sees the same data
    let reopened = JsonFileStore::new(store.path());
    assert_eq!(reopened.load_all().unwrap(), store.load_all().unwrap());
}

#[test]
fn test_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("none.json"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_update_requires_existing_championship() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("c.json"));
    let c = sample(4);

    let err = store.update(&c).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == c.id));

    let err = MemoryStore::new().update(&c).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_corrupt_file_reports_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).load_all().unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}
