#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use grow_api::config::ServerConfig;
use grow_api::router::build_app_router;
use grow_api::state::AppState;
use grow_cloud::{StorageError, StorageProvider};
use grow_db::store::PgTemplateStore;
use grow_openai::types::ChatRequest;
use grow_openai::{ChatModel, ModelError, Transcriber};
use grow_pipeline::{CatalogSource, ContentMatcher, ImageClassifier, TemplateSuggester};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        body_limit_bytes: 16 * 1024 * 1024,
        database_url: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

pub const IMAGE_ANSWER: &str = r#"```json
{
  "description": "A conference hall with rows of chairs and a stage",
  "objects": ["chairs", "stage", "projector"],
  "text": ["Welcome"],
  "colors": ["blue", "white"],
  "mood": "professional",
  "context": "event venue",
  "suggestions": ["event planning"]
}
```"#;

pub const MATCH_ANSWER: &str = r#"{
  "analysis": "The user is planning a large conference.",
  "templates": [
    {"id": "event", "confidence": 0.95, "reasoning": "conference for 200 people"},
    {"id": "workshop", "confidence": 0.6, "reasoning": "breakout sessions"},
    {"id": "projectplanning", "confidence": 0.45, "reasoning": "many tasks"},
    {"id": "marketingcampaign", "confidence": 0.3, "reasoning": "promotion"},
    {"id": "artwork", "confidence": 0.05, "reasoning": "unlikely"}
  ]
}"#;

/// Chat model returning a canned answer, or an API error status.
pub struct StubChat {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl StubChat {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for StubChat {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ModelError::Api {
                status: *status,
                message: "Incorrect API key provided: sk-secret".to_string(),
            }),
        }
    }
}

/// Transcriber returning a fixed transcript and recording the file names seen.
pub struct StubTranscriber {
    reply: Result<String, u16>,
    file_names: Mutex<Vec<String>>,
}

impl StubTranscriber {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            file_names: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            file_names: Mutex::new(Vec::new()),
        })
    }

    pub fn file_names(&self) -> Vec<String> {
        self.file_names.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>, file_name: &str) -> Result<String, ModelError> {
        self.file_names.lock().unwrap().push(file_name.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ModelError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}

/// One recorded upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
    pub folder: String,
}

/// In-memory storage returning `https://cdn.test/{folder}/{file_name}`.
#[derive(Default)]
pub struct StubStorage {
    fail: bool,
    uploads: Mutex<Vec<Upload>>,
}

impl StubStorage {
    pub fn failing() -> Self {
        Self {
            fail: true,
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageProvider for StubStorage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::Upload {
                key: format!("{folder}/{file_name}"),
                message: "access denied".to_string(),
            });
        }
        self.uploads.lock().unwrap().push(Upload {
            bytes,
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            folder: folder.to_string(),
        });
        Ok(format!("https://cdn.test/{folder}/{file_name}"))
    }
}

/// Collaborators injected into the test app.
pub struct TestDeps {
    pub vision: Arc<StubChat>,
    pub text: Arc<StubChat>,
    pub transcriber: Arc<StubTranscriber>,
    pub storage: Option<Arc<StubStorage>>,
}

impl Default for TestDeps {
    fn default() -> Self {
        Self {
            vision: StubChat::replying(IMAGE_ANSWER),
            text: StubChat::replying(MATCH_ANSWER),
            transcriber: StubTranscriber::replying("planning a conference for 200 people"),
            storage: Some(Arc::new(StubStorage::default())),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with default stubs.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, &TestDeps::default())
}

/// Build the full application router with the given stubs.
///
/// Uses the production router builder so tests exercise the same middleware
/// stack. The catalog reads the (unseeded) template table first, so the
/// built-in fallback is what handlers see unless a test seeds rows.
pub fn build_test_app_with(pool: PgPool, deps: &TestDeps) -> Router {
    let config = test_config();

    let catalog = CatalogSource::new(Arc::new(PgTemplateStore::new(pool.clone())));
    let suggester = TemplateSuggester::new(
        ImageClassifier::new(deps.vision.clone(), "gpt-4o"),
        ContentMatcher::new(deps.text.clone(), "gpt-4"),
        catalog,
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        suggester,
        transcriber: deps.transcriber.clone(),
        storage: deps
            .storage
            .clone()
            .map(|s| s as Arc<dyn StorageProvider>),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Smallest valid PNG header (signature + IHDR chunk start), base64-encoded.
pub fn png_base64() -> String {
    use base64::Engine;
    const PNG_HEADER: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];
    base64::engine::general_purpose::STANDARD.encode(PNG_HEADER)
}
