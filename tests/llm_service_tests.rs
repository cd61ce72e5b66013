use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::json;
use trip_planner_rs::{
    AdvisoryService, LlmAdvisoryService, PlannerError, TripPlanner, TripRequest,
};

fn completion_body(content: &str) -> String {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_reply_returns_message_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("BEST CHOICE: Standard"))
        .create_async()
        .await;

    let service = LlmAdvisoryService::new("test-key".to_string()).with_base_url(server.url());
    let reply = service
        .generate_reply("instructions", "message")
        .await
        .unwrap();

    assert_eq!(reply, "BEST CHOICE: Standard");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_content_yields_placeholder() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"role": "assistant"}}]}).to_string())
        .create_async()
        .await;

    let service = LlmAdvisoryService::new("test-key".to_string()).with_base_url(server.url());
    let reply = service.generate_reply("i", "m").await.unwrap();

    // The placeholder fails every extraction pattern downstream.
    assert_eq!(reply, "No response generated");
}

#[tokio::test]
async fn test_api_error_body_is_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"message": "model not found"}}).to_string())
        .create_async()
        .await;

    let service = LlmAdvisoryService::new("test-key".to_string()).with_base_url(server.url());
    let err = service.generate_reply("i", "m").await.unwrap_err();

    match err {
        PlannerError::Agent(message) => assert!(message.contains("model not found")),
        other => panic!("expected Agent error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_exhausts_retries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("retry-after", "0")
        .with_body("{}")
        .expect(4)
        .create_async()
        .await;

    let service = LlmAdvisoryService::new("test-key".to_string()).with_base_url(server.url());
    let err = service.generate_reply("i", "m").await.unwrap_err();

    assert!(matches!(err, PlannerError::RateLimit { retry_after: 1 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_planner_end_to_end_over_http() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("flight booking specialist".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Standard: Korean Air - $1320 (19h 10m, 1 stop (Seoul))\nBEST CHOICE: Standard",
        ))
        .create_async()
        .await;

    server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("hotel booking specialist".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Mid-Range: Tokyo Station Hotel - $95 (Tokyo Station, 3 nights = $285)\nBEST CHOICE: Mid-Range",
        ))
        .create_async()
        .await;

    server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("activities specialist".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Day 1: Senso-ji Temple - Cost: $0\nTOTAL ACTIVITIES: $105\nHIGHLIGHTS: temples",
        ))
        .create_async()
        .await;

    let advisor = LlmAdvisoryService::new("test-key".to_string()).with_base_url(server.url());
    let request = TripRequest::new(3500.0, "New York", "Tokyo", 3).unwrap();
    let planner = TripPlanner::new(request, Arc::new(advisor));

    let result = planner.plan().await.unwrap();
    assert_eq!(result.flight_cost, 1320);
    assert_eq!(result.hotel_cost, 285);
    assert_eq!(result.activity_cost, 105);
    assert_eq!(result.total_cost, 1710);
    assert!(result.within_budget);
}

#[tokio::test]
async fn test_unreachable_endpoint_degrades_to_zero_costs() {
    // Nothing is listening on the mock server once it is dropped.
    let url = {
        let server = Server::new_async().await;
        server.url()
    };

    let advisor = LlmAdvisoryService::new("test-key".to_string()).with_base_url(url);
    let request = TripRequest::new(2000.0, "London", "Paris", 2).unwrap();
    let planner = TripPlanner::new(request, Arc::new(advisor));

    let result = planner.plan().await.unwrap();
    assert_eq!(result.total_cost, 0);
    assert_eq!(result.remaining_budget, 2000.0);
    assert!(result.within_budget);
}
