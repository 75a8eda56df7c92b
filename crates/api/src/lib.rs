//! Breast Cancer Diagnosis API Server
//!
//! REST API serving the pre-trained breast-cancer classifier: health
//! probe, feature statistics, and prediction endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use config::Config;
pub use error::ApiError;

use feature_stats::{Dataset, DatasetError, DatasetSummary};
use inference_engine::{InferenceEngine, MODEL_VERSION};
use input_schema::InputSchema;

/// Application state shared across handlers.
///
/// Built once at startup and read-only thereafter; handlers share it
/// through an `Arc` without locking.
pub struct AppState {
    /// Configuration loaded from the environment
    pub config: Config,
    /// Request schema derived from the training data
    pub schema: InputSchema,
    /// Loaded classifier; `None` when the artifact failed to load
    pub engine: Option<InferenceEngine>,
}

impl AppState {
    /// Derive the schema and load the classifier.
    ///
    /// A missing or corrupt dataset is fatal. A missing or corrupt model
    /// is tolerated so the health endpoint can report it.
    pub fn initialize(config: Config) -> Result<Self, DatasetError> {
        let dataset = Dataset::load(&config.dataset_path)?;
        let summary = DatasetSummary::from_dataset(&dataset);
        let schema = InputSchema::from_summary(&summary);
        info!(
            "Derived request schema: {} fields from {}",
            schema.len(),
            config.dataset_path
        );

        let engine = match InferenceEngine::load(&config.model_path) {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!("Classifier unavailable: {}", e);
                None
            }
        };

        Ok(Self {
            config,
            schema,
            engine,
        })
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/feature-stats", get(routes::stats::get_feature_stats))
        .route("/predict", post(routes::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy from the configured origin list.
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using wildcards.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Liveness handler
async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Breast Cancer Prediction API is running",
    })
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        version: MODEL_VERSION,
        model_loaded: state.engine.is_some(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::initialize(config)?);
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
