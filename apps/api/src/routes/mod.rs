pub mod health;
pub mod home;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::design::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index_handler))
        .route("/health", get(health::health_handler))
        .route("/predict", post(handlers::handle_predict))
        .route("/suggest", post(handlers::handle_suggest))
        .route("/view-code", post(handlers::handle_view_code))
        .route("/download", post(handlers::handle_download))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use sqlx::SqlitePool;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::db::memory_pool;
    use crate::images::{ImageLookupCache, ImageSearch, ImageSearchError, FALLBACK_IMAGE_URL};
    use crate::llm_client::LlmClient;
    use crate::models::generation::GenerationRow;
    use crate::style::{build_predictor, RulePredictor};

    struct StubSearch {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageSearch for StubSearch {
        async fn search(&self, query: &str) -> Result<Vec<String>, ImageSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let slug = query.replace(' ', "-");
            Ok(vec![
                format!("https://img.test/{slug}/1.jpg"),
                format!("https://img.test/{slug}/2.jpg"),
            ])
        }
    }

    struct DownSearch;

    #[async_trait]
    impl ImageSearch for DownSearch {
        async fn search(&self, _query: &str) -> Result<Vec<String>, ImageSearchError> {
            Err(ImageSearchError::Api { status: 504 })
        }
    }

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            unsplash_api_key: None,
            gemini_api_key: None,
            image_search_timeout_ms: 2000,
            style_backend: "rule".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    async fn test_state(search: Arc<dyn ImageSearch>, llm: Option<LlmClient>) -> AppState {
        AppState {
            db: memory_pool().await,
            llm,
            images: Arc::new(ImageLookupCache::new(search)),
            style_predictor: Arc::new(RulePredictor),
            config: test_config(),
        }
    }

    async fn stub_state() -> AppState {
        test_state(
            Arc::new(StubSearch {
                calls: AtomicUsize::new(0),
            }),
            None,
        )
        .await
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn as_json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    async fn logged_rows(pool: &SqlitePool) -> Vec<GenerationRow> {
        sqlx::query_as("SELECT * FROM generations ORDER BY id")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_predict_technology_professional() {
        let state = stub_state().await;
        let db = state.db.clone();
        let router = build_router(state);

        let (status, body) = post_json(
            router,
            "/predict",
            json!({"category": "Technology", "vibe_value": 4, "variation": 2}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = as_json(&body);
        assert_eq!(body["category"], "Technology");
        assert_eq!(body["layout"], "Bento Grid");
        assert_eq!(body["font"], "Inter");
        assert_eq!(body["primary"], "#0f172a");
        assert_eq!(body["secondary"], "#f8fafc");
        assert_eq!(body["tertiary"], "#3b82f6");
        assert_eq!(body["vibe"], "Professional");
        assert_eq!(body["headline"], "Redefining Technology");
        assert!(body["img_url"]
            .as_str()
            .unwrap()
            .starts_with("https://img.test/Technology-industry/"));

        let rows = logged_rows(&db).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category.as_deref(), Some("Technology"));
        assert_eq!(rows[0].vibe.as_deref(), Some("Professional"));
        assert_eq!(rows[0].font.as_deref(), Some("Inter"));
        assert_eq!(rows[0].primary_color.as_deref(), Some("#0f172a"));
    }

    #[tokio::test]
    async fn test_predict_coerces_unknown_category_and_defaults() {
        let router = build_router(stub_state().await);

        let (status, body) = post_json(router, "/predict", json!({"category": "UnknownCat"})).await;
        assert_eq!(status, StatusCode::OK);
        let body = as_json(&body);
        assert_eq!(body["category"], "Automotive");
        assert_eq!(body["vibe"], "Balanced");
        assert_eq!(body["layout"], "Split Screen");
        assert_eq!(body["font"], "Montserrat");
        assert_eq!(body["primary"], "#ff0055");
    }

    #[tokio::test]
    async fn test_predict_clamps_vibe_and_accepts_strings() {
        let router = build_router(stub_state().await);
        let (_, body) = post_json(
            router.clone(),
            "/predict",
            json!({"category": "Legal", "vibe_value": "17", "variation": -3}),
        )
        .await;
        assert_eq!(as_json(&body)["vibe"], "Professional");

        let (_, body) = post_json(router, "/predict", json!({"category": "Legal", "vibe_value": -5})).await;
        assert_eq!(as_json(&body)["vibe"], "Commercial");
    }

    #[tokio::test]
    async fn test_predict_rejects_non_numeric_vibe() {
        let router = build_router(stub_state().await);
        let (status, body) =
            post_json(router, "/predict", json!({"category": "Food", "vibe_value": "loud"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(as_json(&body)["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_uses_fallback_image_when_search_is_down() {
        let router = build_router(test_state(Arc::new(DownSearch), None).await);
        let (status, body) = post_json(router, "/predict", json!({"category": "Food"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body)["img_url"], FALLBACK_IMAGE_URL);
    }

    #[tokio::test]
    async fn test_predict_with_table_backend_matches_rule() {
        let mut state = stub_state().await;
        state.style_predictor = build_predictor("table");
        let router = build_router(state);

        let (_, body) = post_json(
            router,
            "/predict",
            json!({"category": "Healthcare", "vibe_value": 3, "variation": 9}),
        )
        .await;
        let body = as_json(&body);
        assert_eq!(body["layout"], "Bento Grid");
        assert_eq!(body["primary"], "#0f172a");
    }

    #[tokio::test]
    async fn test_suggest_without_client_is_generic_error() {
        let router = build_router(stub_state().await);
        let (status, body) = post_json(
            router,
            "/suggest",
            json!({"category": "Food", "vibe": "Balanced", "layout": "Split Screen",
                   "primary": "#ff0055", "secondary": "#1a1a1a"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = as_json(&body);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert_eq!(body["error"]["message"], "An AI processing error occurred");
    }

    #[tokio::test]
    async fn test_suggest_requires_category() {
        let router = build_router(stub_state().await);
        let (status, _) = post_json(router, "/suggest", json!({"vibe": "Balanced"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    async fn gemini_stub(text: &'static str) -> LlmClient {
        let router = Router::new().route(
            "/:model_action",
            post(move || async move {
                Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        LlmClient::new("test".into())
            .unwrap()
            .with_base_url(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_suggest_returns_three_tips() {
        let llm = gemini_stub(r#"{"suggestions": ["Use contrast", "Shorten copy", "Add proof"]}"#).await;
        let router = build_router(
            test_state(
                Arc::new(StubSearch {
                    calls: AtomicUsize::new(0),
                }),
                Some(llm),
            )
            .await,
        );

        let (status, body) = post_json(
            router,
            "/suggest",
            json!({"category": "Food", "vibe": "Balanced", "layout": "Split Screen",
                   "primary": "#ff0055", "secondary": "#1a1a1a"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            as_json(&body),
            json!({"suggestions": ["Use contrast", "Shorten copy", "Add proof"]})
        );
    }

    #[tokio::test]
    async fn test_suggest_malformed_reply_is_generic_error() {
        let llm = gemini_stub(r#"{"tips": "just one"}"#).await;
        let router = build_router(test_state(Arc::new(DownSearch), Some(llm)).await);

        let (status, body) = post_json(router, "/suggest", json!({"category": "Food"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body)["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_view_code_renders_posted_design() {
        let router = build_router(stub_state().await);
        let (status, body) = post_json(
            router,
            "/view-code",
            json!({"category": "Travel", "font": "Open Sans (Google)", "primary": "#0f172a",
                   "secondary": "#f8fafc", "tertiary": "#3b82f6", "layout": "Bento Grid"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body = as_json(&body);
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("family=Open+Sans:wght@400;600;700"));
        assert!(html.contains("primary: '#0f172a'"));
        assert!(body["css"].as_str().unwrap().contains("#3b82f6"));
        assert!(body["js"].as_str().unwrap().contains("Travel design kit loaded."));
    }

    #[tokio::test]
    async fn test_download_returns_zip_with_three_files() {
        let router = build_router(stub_state().await);
        let design = json!({"category": "Gaming", "primary": "#ff0055", "secondary": "#1a1a1a",
                            "tertiary": "#ffcc00", "font": "Montserrat", "layout": "Split Screen"});

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/download")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(design.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/zip");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ai_design_kit.zip\""
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let (_, preview) = post_json(router, "/view-code", design).await;
        let preview = as_json(&preview);

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(archive.len(), 3);
        for (name, key) in [("index.html", "html"), ("style.css", "css"), ("script.js", "js")] {
            let mut contents = String::new();
            archive
                .by_name(name)
                .unwrap()
                .read_to_string(&mut contents)
                .unwrap();
            assert_eq!(contents, preview[key].as_str().unwrap());
        }
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let router = build_router(stub_state().await);

        let response = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = as_json(&body);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["style_backend"], "rule");
        assert_eq!(body["suggestions"], false);

        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains("/predict"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let router = build_router(stub_state().await);
        let response = router
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
