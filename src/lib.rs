pub mod analysis;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

pub use analysis::DeepfakeAnalyzer;
pub use config::Config;
pub use error::ApiError;
pub use models::{AnalysisResult, DEEPFAKE_THRESHOLD, MAX_CONFIDENCE, Verdict};

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the HTTP router with its middleware stack.
pub fn app() -> Router {
    //cors: any origin, no allow-list
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(handlers::analyze_image))
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
}
