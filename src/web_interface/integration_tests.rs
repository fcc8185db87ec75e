#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use serde_json::{json, Value};
    use warp::filters::BoxedFilter;
    use warp::reply::Response;

    use crate::configuration::Config;
    use crate::error_handling::types::GenerationError;
    use crate::generation::{StoryGenerator, StoryPrompt, TemplateEngine};
    use crate::storage::MemoryStorage;
    use crate::story_management::StoryManager;
    use crate::web_interface::WebServer;

    struct BrokenGenerator;

    impl StoryGenerator for BrokenGenerator {
        fn generate(&self, _prompt: &StoryPrompt) -> Result<String, GenerationError> {
            Err(GenerationError::Backend(String::from("timeout")))
        }

        fn continue_story(&self, _user_input: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Backend(String::from("timeout")))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn routes_with(generator: Arc<dyn StoryGenerator>, config: Config) -> BoxedFilter<(Response,)> {
        let manager = StoryManager::new(
            generator,
            Arc::new(TemplateEngine::new(Some(42))),
            Arc::new(MemoryStorage::new()),
        );
        WebServer::new(Arc::new(manager), config).routes()
    }

    fn routes() -> BoxedFilter<(Response,)> {
        routes_with(Arc::new(TemplateEngine::new(Some(42))), Config::default())
    }

    async fn post(routes: &BoxedFilter<(Response,)>, path: &str, body: Value) -> (u16, Value) {
        let res = warp::test::request()
            .method("POST")
            .path(path)
            .json(&body)
            .reply(routes)
            .await;
        let status = res.status().as_u16();
        (status, serde_json::from_slice(res.body()).unwrap_or(Value::Null))
    }

    async fn get(routes: &BoxedFilter<(Response,)>, path: &str) -> (u16, Value) {
        let res = warp::test::request()
            .method("GET")
            .path(path)
            .reply(routes)
            .await;
        let status = res.status().as_u16();
        (status, serde_json::from_slice(res.body()).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn start_returns_the_documented_shape() {
        let routes = routes();
        let (status, body) = post(
            &routes,
            "/api/story/start",
            json!({"prompt": "a clockmaker", "genre": "historical", "setting": "Vienna"}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert!(body["storyId"].as_str().unwrap().parse::<i64>().is_ok());
        let content = body["content"].as_str().unwrap();
        assert!(content.starts_with("The year was 1846 in Vienna"));
        assert!(content.contains("a clockmaker navigated"));
    }

    #[tokio::test]
    async fn start_always_answers_with_content() {
        let routes = routes();
        for body in [
            json!({}),
            json!({"prompt": ""}),
            json!({"prompt": "", "genre": "poem"}),
            json!({"prompt": null, "genre": 12}),
            json!("just a string"),
        ] {
            let (status, reply) = post(&routes, "/api/story/start", body.clone()).await;
            assert_eq!(status, 200, "body {}", body);
            assert_eq!(reply["success"], true);
            assert!(!reply["content"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn malformed_json_still_starts_a_story() {
        let routes = routes();
        let res = warp::test::request()
            .method("POST")
            .path("/api/story/start")
            .header("content-type", "application/json")
            .body("{\"prompt\": ")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("Once upon a time, our protagonist"));
    }

    #[tokio::test]
    async fn start_without_a_body_still_answers() {
        let routes = routes();
        let res = warp::test::request()
            .method("POST")
            .path("/api/story/start")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);
        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["success"], true);
        assert!(!body["content"].as_str().unwrap().is_empty());

        let res = warp::test::request()
            .method("POST")
            .path("/api/story/mock")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);
    }

    #[tokio::test]
    async fn generator_failure_is_hidden_from_the_caller() {
        let routes = routes_with(Arc::new(BrokenGenerator), Config::default());
        let (status, body) = post(
            &routes,
            "/api/story/start",
            json!({"prompt": "a storm", "genre": "adventure"}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("Once upon a time, in a faraway place, a storm began."));
    }

    #[tokio::test]
    async fn continue_appends_and_history_lists_segments() {
        let routes = routes();
        let (_, started) = post(&routes, "/api/story/start", json!({"prompt": "Ivy"})).await;
        let story_id = started["storyId"].as_str().unwrap().to_string();

        let (status, body) = post(
            &routes,
            "/api/story/continue",
            json!({"storyId": story_id, "userInput": "Cross the valley"}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("You decided to follow the road through the valley."));
        assert!(body.get("storyId").is_none());

        let (status, history) = get(&routes, &format!("/api/story/{}", story_id)).await;
        assert_eq!(status, 200);
        assert_eq!(history["storyId"], story_id.as_str());
        assert_eq!(history["success"], true);
        let segments = history["content"].as_array().unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], started["content"]);
        assert_eq!(segments[1], body["content"]);
    }

    #[tokio::test]
    async fn mock_endpoints_share_the_store() {
        let routes = routes_with(Arc::new(BrokenGenerator), Config::default());
        let (status, started) = post(
            &routes,
            "/api/story/mock",
            json!({"prompt": "Johnny Johnny", "genre": "comedy"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(started["content"].as_str().unwrap().starts_with("Johnny Johnny\nYes, Papa?"));
        let story_id = started["storyId"].as_str().unwrap().to_string();

        let (status, body) = post(
            &routes,
            "/api/story/mock/continue",
            json!({"storyId": story_id, "userInput": "to the mountain"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("You decided to climb the misty mountain."));

        let (status, history) = get(&routes, &format!("/api/story/{}", story_id)).await;
        assert_eq!(status, 200);
        assert_eq!(history["content"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_story_is_404_everywhere() {
        let routes = routes();
        let (status, body) = post(
            &routes,
            "/api/story/continue",
            json!({"storyId": "1", "userInput": "go"}),
        )
        .await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Story not found");

        let (status, body) = post(&routes, "/api/story/mock/continue", json!({})).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Story not found");

        let (status, body) = get(&routes, "/api/story/424242").await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Story not found");
    }

    #[tokio::test]
    async fn unknown_routes_and_methods() {
        let routes = routes();
        let (status, body) = get(&routes, "/api/nothing/here").await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Not found");

        let (status, body) = post(&routes, "/api/story/nope", json!({})).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Not found");

        let res = warp::test::request()
            .method("PUT")
            .path("/api/story/start")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 405);

        let config = Config {
            web_ui_enabled: false,
            ..Config::default()
        };
        let routes = routes_with(Arc::new(TemplateEngine::new(Some(1))), config);
        let (status, body) = get(&routes, "/").await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Not found");

        let res = warp::test::request()
            .method("PUT")
            .path("/api/story/start")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 405);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() {
        let config = Config {
            max_body_bytes: 64,
            ..Config::default()
        };
        let routes = routes_with(Arc::new(TemplateEngine::new(Some(1))), config);
        let (status, body) = post(
            &routes,
            "/api/story/start",
            json!({"prompt": "x".repeat(200)}),
        )
        .await;
        assert_eq!(status, 413);
        assert_eq!(body["error"], "Request body too large");
    }

    #[tokio::test]
    async fn cors_headers_are_added() {
        let routes = routes();
        let res = warp::test::request()
            .method("POST")
            .path("/api/story/mock")
            .header("origin", "http://localhost:5173")
            .json(&json!({"prompt": "x"}))
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);
        assert!(res.headers().contains_key("access-control-allow-origin"));

        let preflight = warp::test::request()
            .method("OPTIONS")
            .path("/api/story/start")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .reply(&routes)
            .await;
        assert_eq!(preflight.status(), 200);
    }

    #[tokio::test]
    async fn front_end_is_served_on_root() {
        let routes = routes();
        let res = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);
        let html = String::from_utf8_lossy(res.body());
        assert!(html.contains("<form"));
    }
}
