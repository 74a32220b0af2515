//! Recommendation pipeline against a local mock of the completion API.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wayfarer_config::AiConfig;
use wayfarer_core::entities::{ForecastDay, WeatherContext};
use wayfarer_recommend::{Recommender, UserPreferences};
use wayfarer_upstream::ChatClient;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn recommender(base_url: String, api_key: &str) -> Recommender {
    let chat = ChatClient::new(&AiConfig {
        api_key: api_key.into(),
        base_url,
        ..Default::default()
    })
    .unwrap();
    Recommender::new(chat)
}

/// Mock that answers every completion request with `content`.
fn answering(content: &'static str) -> Router {
    Router::new().route(
        "/chat/completions",
        post(move |Json(_): Json<Value>| async move {
            Json(json!({"choices": [{"message": {"role": "assistant", "content": content}}]}))
        }),
    )
}

fn context() -> WeatherContext {
    let days: Vec<ForecastDay> = serde_json::from_value(json!([
        {"date": "2024-09-01", "temp": 77.0, "conditions": "Clear"},
        {"date": "2024-09-02", "temp": 71.5, "conditions": "Rain"}
    ]))
    .unwrap();
    WeatherContext {
        location: "Athens".into(),
        days,
    }
}

#[tokio::test]
async fn detailed_json_answer_is_passed_through() {
    let base = spawn(answering(
        r#"{"days": [{"dayNumber": 1, "morningActivities": ["Acropolis"]}], "generalTips": ["Start early"]}"#,
    ))
    .await;
    let result = recommender(base, "sk-test")
        .recommend_or_fallback(&context(), UserPreferences::default())
        .await;

    assert!(result.success);
    assert_eq!(result.recommendations["days"][0]["morningActivities"][0], "Acropolis");
    assert!(result.recommendations.get("fallback").is_none());
}

#[tokio::test]
async fn overview_answer_becomes_key_points() {
    let base = spawn(answering(
        "Athens is wonderful.\n- Walk the Plaka\n- See the Parthenon\nThe best food is in Psiri.",
    ))
    .await;
    let result = recommender(base, "sk-test")
        .explore("Athens", Some("spring".into()))
        .await;

    assert!(result.success);
    assert_eq!(
        result.recommendations,
        json!({
            "generalTips": ["Walk the Plaka", "See the Parthenon", "The best food is in Psiri."],
            "destinationOverview": true
        })
    );
}

#[tokio::test]
async fn rate_limited_call_degrades_to_fallback() {
    let base = spawn(Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    ))
    .await;
    let result = recommender(base, "sk-test")
        .recommend_or_fallback(&context(), UserPreferences::default())
        .await;

    assert!(!result.success);
    assert_eq!(result.recommendations["fallback"], true);
    assert_eq!(
        result.recommendations["generalTips"][0],
        "Explore top attractions in Athens"
    );
    assert!(result.error.unwrap().contains("rate limit"));
}

#[tokio::test]
async fn missing_key_degrades_without_calling_upstream() {
    let result = recommender("http://127.0.0.1:1".into(), "")
        .recommend_or_fallback(&context(), UserPreferences::default())
        .await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("AI service not configured"));
    assert_eq!(result.recommendations["fallback"], true);
}
