//! Integration tests for the recommendation client
//!
//! Tests HTTP client behavior using wiremock for request/response mocking.

use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

use mood2playlist::api::{RecommendClient, RecommendationApi};
use mood2playlist::config::ApiConfig;
use mood2playlist::error::ApiError;
use mood2playlist::input::AgentRequest;

/// Create a test client pointing to mock server
fn create_test_client(base_url: &str) -> RecommendClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_ms: None,
    };

    RecommendClient::new(&config).expect("Failed to create client")
}

fn has_cache_buster(req: &Request) -> bool {
    req.url
        .query_pairs()
        .any(|(k, v)| k == "_" && v.parse::<i64>().is_ok())
}

#[cfg(test)]
mod recommend_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_recommend() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .and(query_param("mood", "cozy"))
            .and(query_param("limit", "12"))
            .and(query_param("variant", "1"))
            .and(has_cache_buster)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mood": "cozy",
                "count": 1,
                "tracks": [{
                    "id": "6rqhFgbbKwnb9MLmUQDhG6",
                    "name": "Speechless",
                    "artists": "Dan + Shay",
                    "album": "Dan + Shay",
                    "image": "https://i.scdn.co/image/abc",
                    "preview_url": null,
                    "spotify_url": "https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6"
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.recommend("cozy", 12, 1).await;

        assert!(result.is_ok(), "Recommend should succeed: {:?}", result.err());
        let result = result.unwrap();
        assert_eq!(result.tracks.len(), 1);
        assert_eq!(result.tracks[0].name, "Speechless");
        assert_eq!(result.tracks[0].artists, "Dan + Shay");
    }

    #[tokio::test]
    async fn test_recommend_encodes_free_text_mood() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .and(query_param("mood", "cozy fireplace & rain"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.recommend("cozy fireplace & rain", 12, 0).await;
        assert!(result.unwrap().tracks.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_error_with_string_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .respond_with(ResponseTemplate::new(502).set_body_json(json!({
                "detail": "Spotify search failed"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.recommend("hype", 12, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::StatusDetail { status: 502, .. }));
        assert_eq!(err.to_string(), "API error: 502 - Spotify search failed");
    }

    #[tokio::test]
    async fn test_recommend_error_with_structured_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "detail": [{"loc": ["query", "mood"], "msg": "field required"}]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.recommend("", 12, 0).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"API error: 422 - [{"loc":["query","mood"],"msg":"field required"}]"#
        );
    }

    #[tokio::test]
    async fn test_recommend_error_without_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.recommend("dark", 12, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[tokio::test]
    async fn test_recommend_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.recommend("dark", 12, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_recommend_connection_refused() {
        // Nothing listens on the tcpmux port.
        let client = create_test_client("http://127.0.0.1:1");
        let err = client.recommend("cozy", 12, 0).await.unwrap_err();
        let ApiError::Http(inner) = &err else {
            panic!("expected transport error, got {:?}", err);
        };
        // Transport failures surface the transport's own message.
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[tokio::test]
    async fn test_recommend_timeout_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/recommend"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tracks": []}))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let config = ApiConfig {
            base_url: mock_server.uri(),
            timeout_ms: Some(50),
        };
        let client = RecommendClient::new(&config).unwrap();
        let err = client.recommend("cozy", 12, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout { timeout_ms: 50 }));
    }
}

#[cfg(test)]
mod agentic_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_agentic() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/agentic/recommend"))
            .and(query_param("mood", "rainy night"))
            .and(query_param("limit", "10"))
            .and(query_param("seed", "7"))
            .and(query_param("variant", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mood": "rainy night (vibe)",
                "seed": 7,
                "count": 1,
                "metrics": {"dup_rate": 0.0, "unique_artists": 1},
                "trace_url": "/traces/agent-run-rainy night-seed7-v2.jsonl",
                "playlist": [{"title": "Teardrop", "artist": "Massive Attack", "genre": "trip-hop"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let request = AgentRequest::from_inputs("rainy night", "7", "2", 10);
        let result = client.agentic(&request).await.unwrap();

        assert_eq!(result.mood, "rainy night (vibe)");
        assert_eq!(result.seed, 7);
        assert_eq!(result.metrics.unique_artists, 1);
        assert_eq!(result.playlist[0].title, "Teardrop");

        let link = client
            .trace_link(result.trace_url.as_deref().unwrap())
            .unwrap();
        assert!(link.starts_with(&mock_server.uri()));
        assert!(link.ends_with("seed7-v2.jsonl"));
    }

    #[tokio::test]
    async fn test_agentic_error_includes_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/agentic/recommend"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad mood"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let request = AgentRequest::from_inputs("", "", "", 10);
        let err = client.agentic(&request).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("400"), "missing status: {}", message);
        assert!(message.contains("bad mood"), "missing body: {}", message);
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_agentic_uses_same_base_as_standard() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/music/api/agentic/recommend"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mood": "cozy (preset)", "seed": 42, "count": 0
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/music/api/recommend"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&format!("{}/music/", mock_server.uri()));
        let request = AgentRequest::from_inputs("cozy", "42", "0", 10);
        assert!(client.agentic(&request).await.is_ok());
        assert!(client.recommend("cozy", 12, 0).await.is_ok());
    }
}
