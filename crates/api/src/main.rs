use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use grow_cloud::{S3Storage, StorageConfig, StorageProvider};
use grow_core::template::builtin_templates;
use grow_db::repositories::TemplateRepo;
use grow_db::store::PgTemplateStore;
use grow_openai::{ModelConfig, OpenAIClient};
use grow_pipeline::{CatalogSource, ContentMatcher, ImageClassifier, TemplateSuggester};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grow_api::config::ServerConfig;
use grow_api::router::build_app_router;
use grow_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let model_config = ModelConfig::from_env();
    tracing::info!(
        vision_model = %model_config.vision_model,
        text_model = %model_config.text_model,
        transcription_model = %model_config.transcription_model,
        "Loaded model configuration"
    );
    if !config.covers_model_calls(model_config.timeout_secs) {
        tracing::warn!(
            request_timeout_secs = config.request_timeout_secs,
            model_timeout_secs = model_config.timeout_secs,
            "REQUEST_TIMEOUT_SECS is shorter than a classify-then-match chain, slow requests will get 408"
        );
    }

    // --- Database ---
    let pool = grow_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    grow_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    grow_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // Existing rows are left untouched, so edits made in the table survive restarts.
    match TemplateRepo::seed(&pool, &builtin_templates()).await {
        Ok(inserted) => tracing::info!(inserted, "Template table seeded"),
        Err(e) => tracing::warn!(error = %e, "Failed to seed template table"),
    }

    // --- Hosted models ---
    let client = Arc::new(OpenAIClient::new(&model_config).expect("Failed to build model client"));

    // --- Object storage ---
    let storage: Option<Arc<dyn StorageProvider>> = match StorageConfig::from_env() {
        Some(storage_config) => {
            tracing::info!(
                endpoint = %storage_config.endpoint,
                bucket = %storage_config.bucket,
                "Object storage configured"
            );
            Some(Arc::new(S3Storage::new(&storage_config)))
        }
        None => {
            tracing::warn!("DO_SPACES_* not set, recordings will not be archived");
            None
        }
    };

    // --- Pipeline ---
    let catalog = CatalogSource::new(Arc::new(PgTemplateStore::new(pool.clone())));
    let suggester = TemplateSuggester::new(
        ImageClassifier::new(client.clone(), model_config.vision_model.clone()),
        ContentMatcher::new(client.clone(), model_config.text_model.clone()),
        catalog,
    );

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        suggester,
        transcriber: client,
        storage,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    // In-flight requests get `shutdown_timeout` to drain after the signal.
    tokio::select! {
        result = &mut server => result.expect("Server error"),
        _ = async {
            if signalled_rx.await.is_ok() {
                tokio::time::sleep(shutdown_timeout).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout_secs,
                "Shutdown grace period elapsed, dropping remaining connections"
            );
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
