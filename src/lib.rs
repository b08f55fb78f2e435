pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{create_router, ApiError, AppState};
pub use config::ServerConfig;
pub use utils::error::{ChartError, Result};
