//! Client → real proxy router → stub provider.

mod common;

use assert_matches::assert_matches;
use serde_json::json;

use common::{google_posts_input, spawn_proxy, suggestions_input, FixedProvider};
use usher_client::{ClientError, GenerationClient};
use usher_core::content_type::ContentType;
use usher_core::models::{CallToActionType, Difficulty, ReadTime};
use usher_core::prompts::{GenerationRequest, BLOG_SUGGESTIONS_SYSTEM};

const SUGGESTIONS: &str = r#"{"suggestions":[
  {"title":"5 Tips for Better Sleep","description":"Simple habits that improve rest","keywords":["sleep","health","wellness"],"estimatedReadTime":5,"difficulty":"beginner"},
  {"title":"Stretching for Desk Workers","description":"Ease tension during the workday","keywords":["stretching","office"],"estimatedReadTime":4,"difficulty":"beginner"},
  {"title":"Understanding Chronic Pain","description":"What causes it and how therapy helps","keywords":["pain","therapy"],"estimatedReadTime":8,"difficulty":"intermediate"}
]}"#;

// ---------------------------------------------------------------------------
// Test: prompt pair passes through the proxy untouched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generic_request_round_trips_through_proxy() {
    let provider = FixedProvider::new(SUGGESTIONS);
    let base = spawn_proxy(provider.clone()).await;

    let value = GenerationClient::new(base)
        .generate(&GenerationRequest::new(
            ContentType::BlogSuggestions,
            "sys",
            "Generate 3 blog ideas",
        ))
        .await
        .unwrap();

    assert_eq!(value["suggestions"].as_array().unwrap().len(), 3);
    assert_eq!(
        provider.calls.lock().unwrap().clone(),
        vec![("sys".to_string(), "Generate 3 blog ideas".to_string())]
    );
}

// ---------------------------------------------------------------------------
// Test: typed suggestions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn typed_suggestions_use_fixed_system_prompt() {
    let provider = FixedProvider::new(SUGGESTIONS);
    let base = spawn_proxy(provider.clone()).await;

    let suggestions = GenerationClient::new(base)
        .generate_blog_suggestions(&suggestions_input())
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].title, "5 Tips for Better Sleep");
    assert_eq!(suggestions[0].estimated_read_time, Some(ReadTime::Minutes(5.0)));
    assert_eq!(suggestions[2].difficulty, Some(Difficulty::Intermediate));

    let calls = provider.calls.lock().unwrap().clone();
    assert_eq!(calls[0].0, BLOG_SUGGESTIONS_SYSTEM);
    assert!(calls[0].1.contains("Sunrise Wellness"));
}

// ---------------------------------------------------------------------------
// Test: proxy errors reach the caller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_json_completion_surfaces_proxy_message() {
    let base = spawn_proxy(FixedProvider::new("Here are your ideas!")).await;

    let err = GenerationClient::new(base)
        .generate_blog_suggestions(&suggestions_input())
        .await
        .unwrap_err();

    assert_matches!(err, ClientError::Http { status: 500, ref message } if message == "Invalid response format");
}

#[tokio::test]
async fn empty_prompt_is_rejected_by_proxy() {
    let provider = FixedProvider::new(json!({}).to_string());
    let base = spawn_proxy(provider.clone()).await;

    let err = GenerationClient::new(base)
        .generate(&GenerationRequest::new(ContentType::BlogContent, "sys", ""))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Missing required parameters");
    assert!(provider.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn single_suggestion_resolves_exactly() {
    let reply = json!({"suggestions": [{
        "title": "5 Tips for Better Sleep",
        "description": "Simple habits that improve rest",
        "keywords": ["sleep", "health", "wellness"],
        "estimatedReadTime": 5,
        "difficulty": "beginner"
    }]});
    let base = spawn_proxy(FixedProvider::new(reply.to_string())).await;

    let suggestions = GenerationClient::new(base)
        .generate_blog_suggestions(&suggestions_input())
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].keywords, vec!["sleep", "health", "wellness"]);
    assert_eq!(suggestions[0].difficulty, Some(Difficulty::Beginner));
}

// ---------------------------------------------------------------------------
// Test: loosely shaped replies still parse
// ---------------------------------------------------------------------------

#[tokio::test]
async fn suggestion_with_text_read_time_and_unknown_difficulty() {
    let reply = json!({"suggestions": [{
        "title": "Sleep Myths",
        "description": "What the research says",
        "keywords": ["sleep"],
        "estimatedReadTime": "5 min",
        "difficulty": "Expert"
    }]});
    let base = spawn_proxy(FixedProvider::new(reply.to_string())).await;

    let suggestions = GenerationClient::new(base)
        .generate_blog_suggestions(&suggestions_input())
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0].estimated_read_time,
        Some(ReadTime::Text("5 min".into()))
    );
    assert_eq!(suggestions[0].difficulty, Some(Difficulty::Other("Expert".into())));
}

#[tokio::test]
async fn google_post_with_unknown_button_and_no_label() {
    let reply = json!({"posts": [{
        "title": "Spring open house",
        "content": "Tour the clinic this Saturday.",
        "callToAction": {"type": "GET_DIRECTIONS"},
        "eventDetails": {"startDate": "2026-04-04"}
    }]});
    let base = spawn_proxy(FixedProvider::new(reply.to_string())).await;

    let posts = GenerationClient::new(base)
        .generate_google_posts(&google_posts_input())
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].call_to_action.kind,
        CallToActionType::Other("GET_DIRECTIONS".into())
    );
    assert!(posts[0].call_to_action.label.is_empty());
    let event = posts[0].event_details.as_ref().unwrap();
    assert_eq!(event.start_date, "2026-04-04");
    assert!(event.time.is_empty());
}
