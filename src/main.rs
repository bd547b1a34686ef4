//! AgriNova Lens Server
//!
//! Backend for the AgriNova Lens crop-disease demo.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     AGRINOVA LENS                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Upload   │  │  Disease Detector       │ │
//! │  │  (Axum)   │─▶│  Checks   │─▶│  (bands over catalog)   │ │
//! │  └─────┬─────┘  └───────────┘  └────────────┬────────────┘ │
//! │        │                                    ▼              │
//! │        │        ┌───────────┐        ┌─────────────┐       │
//! │        └───────▶│ Knowledge │        │  History    │       │
//! │                 │   Base    │        │  (JSON)     │       │
//! │                 └───────────┘        └─────────────┘       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod logic;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use parking_lot::Mutex;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::detection::{DiseaseDetector, RandomSource, ThreadRandom, TokioDelay};
use logic::history::HistoryStore;
use logic::irrigation::IrrigationSystem;
use logic::upload::ContentValidator;

pub use error::{AppError, AppResult};

/// Random source shared by every simulated component
pub type SharedRandom = Arc<dyn RandomSource>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "agrinova_lens=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("AgriNova Lens starting ({})...", config.environment);
    if !config.is_production() {
        tracing::info!(
            "Simulated latency: detection {:?}, content check {:?}",
            config.detection_delay, config.content_check_delay
        );
    }

    let history = HistoryStore::open(&config.history_path, config.history_limit);
    let rng: SharedRandom = Arc::new(ThreadRandom);
    let state = AppState::new(config.clone(), history, rng.clone());

    let _sensor_loop = logic::irrigation::spawn_sensor_loop(state.irrigation.clone(), rng, config.irrigation_tick);

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🌱 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub detector: Arc<DiseaseDetector<SharedRandom, TokioDelay>>,
    pub content_validator: Arc<ContentValidator<SharedRandom, TokioDelay>>,
    pub history: Arc<HistoryStore>,
    pub irrigation: Arc<Mutex<IrrigationSystem>>,
}

impl AppState {
    pub fn new(config: config::Config, history: HistoryStore, rng: SharedRandom) -> Self {
        Self {
            detector: Arc::new(DiseaseDetector::with_parts(rng.clone(), TokioDelay, config.detection_delay)),
            content_validator: Arc::new(ContentValidator::with_parts(rng, TokioDelay, config.content_check_delay)),
            history: Arc::new(history),
            irrigation: Arc::new(Mutex::new(IrrigationSystem::default())),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let detection_routes = Router::new()
        .route("/api/v1/detect", post(handlers::detection::detect))

        // History
        .route("/api/v1/history", get(handlers::history::list).delete(handlers::history::clear))
        .route("/api/v1/history/stats", get(handlers::history::stats))
        .route("/api/v1/history/:id", get(handlers::history::get))
        .route("/api/v1/history/:id/report", get(handlers::history::report));

    let knowledge_routes = Router::new()
        .route("/api/v1/diseases", get(handlers::diseases::list))
        .route("/api/v1/diseases/:name", get(handlers::diseases::get))
        .route("/api/v1/severity/:label/colors", get(handlers::diseases::colors));

    let irrigation_routes = Router::new()
        .route("/api/v1/irrigation", get(handlers::irrigation::snapshot))
        .route("/api/v1/irrigation/system/toggle", post(handlers::irrigation::toggle_system))
        .route("/api/v1/irrigation/zones/:id/toggle", post(handlers::irrigation::toggle_zone));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(detection_routes)
        .merge(knowledge_routes)
        .merge(irrigation_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
