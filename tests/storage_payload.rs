//! Persistence round-trips through a real on-disk database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cog_assess::assessment::{Assessment, Item};
use cog_assess::scoring::{score, ScoringTuning};
use cog_assess::session::AnswerState;
use cog_assess::storage::{PageStore, SqliteStorage};
use tempfile::TempDir;

fn sample_page() -> Assessment {
    Assessment::new(
        "Sample page",
        "",
        vec![
            Item::new("s1", "First statement")
                .with_examples(vec!["one".into(), "two".into()]),
            Item::new("s2", "Second statement").with_direction(-1),
        ],
    )
}

fn filled_state(page: &Assessment) -> AnswerState {
    let mut state = AnswerState::new();
    state.set_response(page, "s1", 5).unwrap();
    state.toggle_evidence(page, "s1", 0, true).unwrap();
    state.set_response(page, "s2", 2).unwrap();
    state
}

#[tokio::test]
async fn save_load_hydrate_reproduces_the_session() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("assessments.db");
    let storage = SqliteStorage::new(&db_path).await.expect("opens");

    let page = sample_page();
    let state = filled_state(&page);
    storage.save("ne_dom", &state.serialize()).await.expect("saves");

    let payload = storage
        .load("ne_dom")
        .await
        .expect("loads")
        .expect("payload present");
    let restored = AnswerState::hydrate(payload);

    assert_eq!(restored.response("s1"), Some(5));
    assert_eq!(restored.response("s2"), Some(2));
    assert!(restored.evidence_checked("s1", 0));
    assert!(!restored.evidence_checked("s1", 1));
    assert!(!restored.cannot_corroborate("s1"));
}

#[tokio::test]
async fn reopening_the_database_sees_earlier_saves() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("assessments.db");

    let page = sample_page();
    {
        let storage = SqliteStorage::new(&db_path).await.expect("opens");
        storage
            .save("ne_dom", &filled_state(&page).serialize())
            .await
            .expect("saves");
    }

    let reopened = SqliteStorage::new(&db_path).await.expect("reopens");
    let payload = reopened.load("ne_dom").await.expect("loads");
    assert!(payload.is_some());
}

#[tokio::test]
async fn cached_scores_survive_the_round_trip() {
    let storage = SqliteStorage::new_in_memory().await.expect("opens");

    let page = sample_page();
    let state = filled_state(&page);
    let result = score(&page, &state, &ScoringTuning::default());

    let payload = state.serialize_with_scores(Some(result.clone()));
    storage.save("ne_dom", &payload).await.expect("saves");

    let loaded = storage
        .load("ne_dom")
        .await
        .expect("loads")
        .expect("payload present");
    assert_eq!(loaded.scores, Some(result));
}

#[tokio::test]
async fn reset_clears_only_the_named_page() {
    let storage = SqliteStorage::new_in_memory().await.expect("opens");
    let page = sample_page();
    let payload = filled_state(&page).serialize();

    storage.save("ne_dom", &payload).await.expect("saves");
    storage.save("fi_dom", &payload).await.expect("saves");

    storage.reset("ne_dom").await.expect("resets");

    assert!(storage.load("ne_dom").await.expect("loads").is_none());
    assert!(storage.load("fi_dom").await.expect("loads").is_some());
}

#[tokio::test]
async fn missing_parent_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("deeper").join("assessments.db");

    let storage = SqliteStorage::new(&db_path).await.expect("opens");
    storage
        .save("ne_dom", &AnswerState::new().serialize())
        .await
        .expect("saves");
    assert!(db_path.exists());
}
