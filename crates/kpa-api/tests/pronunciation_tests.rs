use axum::http::StatusCode;
use kpa_catalog::{PronSet, RecordingType};
use serde_json::Value;

use crate::common::{default_client, encode_segment};

#[tokio::test]
async fn test_list_sets() {
    let client = default_client();

    let response = client.get("/v1/pronunciation/sets").await;

    response.assert_status(StatusCode::OK);
    let sets: Vec<PronSet> = response.json();
    let ids: Vec<&str> = sets.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C", "D", "E"]);
}

#[tokio::test]
async fn test_get_set() {
    let client = default_client();

    let response = client.get("/v1/pronunciation/sets/C").await;

    response.assert_status(StatusCode::OK);
    let set: PronSet = response.json();
    assert_eq!(set.id, "C");
    assert_eq!(set.words.len(), 10);
    assert_eq!(set.sentences.len(), 3);
}

#[tokio::test]
async fn test_get_unknown_set() {
    let client = default_client();

    let response = client.get("/v1/pronunciation/sets/Z").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("'Z'"));
}

#[tokio::test]
async fn test_assignment_is_deterministic() {
    let client = default_client();

    let first = client.get("/v1/pronunciation/assignments/P_123456").await;
    let second = client.get("/v1/pronunciation/assignments/P_123456").await;

    first.assert_status(StatusCode::OK);
    assert_eq!(first.body, second.body);

    let body: Value = first.json();
    assert_eq!(body["participant_id"], "P_123456");
    assert_eq!(body["set"]["id"], "C");
}

#[tokio::test]
async fn test_assignment_lists_reading_tasks_in_order() {
    let client = default_client();

    let response = client.get("/v1/pronunciation/assignments/P_654321").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 14);

    let types: Vec<RecordingType> = tasks
        .iter()
        .map(|t| serde_json::from_value(t["recording_type"].clone()).unwrap())
        .collect();
    assert!(types[..10].iter().all(|t| *t == RecordingType::Word));
    assert!(types[10..13].iter().all(|t| *t == RecordingType::Sentence));
    assert_eq!(types[13], RecordingType::Paragraph);

    assert_eq!(tasks[0]["expected_text"], body["set"]["words"][0]);
    assert_eq!(tasks[13]["expected_text"], body["set"]["paragraph"]);
}

#[tokio::test]
async fn test_assignment_accepts_non_ascii_ids() {
    let client = default_client();

    let uri = format!(
        "/v1/pronunciation/assignments/{}",
        encode_segment("참가자01")
    );
    let response = client.get(&uri).await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["participant_id"], "참가자01");
    // 2397892041 % 5 == 1
    assert_eq!(body["set"]["id"], "B");
}

#[tokio::test]
async fn test_assignment_rejects_long_ids() {
    let client = default_client();

    let uri = format!("/v1/pronunciation/assignments/{}", "x".repeat(129));
    let response = client.get(&uri).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
