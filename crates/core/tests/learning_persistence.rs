//! Integration tests for learning-agent snapshots across agent lifetimes.

mod common;

use ar_core::agents::{Agent, AgentFactory, LearningAgent};
use ar_core::memory::{snapshot_path, MAX_RESPONSES_PER_KEY};
use common::*;
use serde_json::Value;
use std::time::Duration;

#[tokio::test]
async fn test_memory_survives_destroy_and_recreate() {
    let (dir, manager) = test_manager(InFlightGauge::default(), Duration::ZERO);

    manager
        .create_agent("learning", "student", &student_config())
        .await
        .expect("Failed to create agent");
    manager
        .send_message("student", "How are you today?")
        .await
        .expect("agent exists");
    manager
        .send_message("student", "brand new words")
        .await
        .expect("agent exists");
    assert!(manager.destroy_agent("student").await);

    let path = snapshot_path(dir.path(), "student");
    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).expect("snapshot written"))
        .expect("snapshot is JSON");
    assert_eq!(saved["how_are_you"].as_array().map(Vec::len), Some(3));
    assert_eq!(
        saved["brand_new_words"][0],
        "I'm still learning how to respond to that."
    );

    // Recreated without seed memory, the agent picks up where it left off.
    manager
        .create_agent("learning", "student", "{}")
        .await
        .expect("Failed to recreate agent");
    let reply = manager
        .send_message("student", "brand new words!")
        .await
        .expect("agent exists");
    assert_eq!(reply, "I'm still learning how to respond to that.");
}

#[tokio::test]
async fn test_snapshot_roundtrip_preserves_order() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut agent = LearningAgent::new("ordered", dir.path());
    agent.initialize("{}").await.expect("Failed to initialize");
    for _ in 0..(MAX_RESPONSES_PER_KEY + 3) {
        agent.process_message("one two three four").await;
    }
    agent.process_message("other key").await;
    let before = agent.memory_snapshot().await;
    assert_eq!(before["one_two_three"].len(), MAX_RESPONSES_PER_KEY);
    drop(agent);

    let mut restored = LearningAgent::new("ordered", dir.path());
    restored.initialize("{}").await.expect("Failed to initialize");
    assert_eq!(restored.memory_snapshot().await, before);
}

#[tokio::test]
async fn test_snapshot_file_format() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let factory = AgentFactory::new(dir.path());

    let agent = factory
        .create("learning", "fmt", r#"{"initial_memory": {"hi": ["Hello!"]}}"#)
        .await
        .expect("Failed to create agent");
    drop(agent);

    let content = std::fs::read_to_string(dir.path().join("memory_fmt.json")).expect("snapshot written");
    assert_eq!(content, "{\n    \"hi\": [\n        \"Hello!\"\n    ]\n}");
}

#[tokio::test]
async fn test_unsafe_ids_stay_inside_memory_dir() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let factory = AgentFactory::new(dir.path());

    let agent = factory
        .create("learning", "../escape", "{}")
        .await
        .expect("Failed to create agent");
    agent.process_message("hello").await;
    drop(agent);

    assert!(dir.path().join("memory_..%2Fescape.json").exists());
    assert!(!dir
        .path()
        .parent()
        .expect("temp dir has a parent")
        .join("memory_escape.json")
        .exists());
}

#[tokio::test]
async fn test_ids_with_similar_names_keep_separate_memories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let factory = AgentFactory::new(dir.path());

    let agent = factory
        .create("learning", "user 1", r#"{"initial_memory": {"secret": ["alpha"]}}"#)
        .await
        .expect("Failed to create agent");
    drop(agent);

    let other = factory
        .create("learning", "user_1", "{}")
        .await
        .expect("Failed to create agent");
    assert_eq!(
        other.process_message("secret").await,
        "I'm still learning how to respond to that."
    );
}
