use crate::adapters::PngSwatchEncoder;
use crate::app::handlers;
use crate::domain::ports::SwatchEncoder;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    encoder: Arc<dyn SwatchEncoder>,
}

impl AppState {
    pub fn new(encoder: Arc<dyn SwatchEncoder>) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> Arc<dyn SwatchEncoder> {
        Arc::clone(&self.encoder)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(PngSwatchEncoder::default()))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/munsell-data", get(handlers::munsell_data))
        .route("/api/generate-palette", post(handlers::generate_palette))
        .route("/api/compare-colors", post(handlers::compare_colors))
        .route("/api/simulate-color-blind", post(handlers::simulate_color_blind))
        .route("/api/export-colors", post(handlers::export_colors))
        .route("/api/color-harmony", post(handlers::color_harmony))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
