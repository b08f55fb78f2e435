use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "munsell-chart")]
#[command(about = "HTTP API for Munsell swatches, color harmonies, contrast checks and palette export")]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        // 驗證監聽位址
        validate_non_empty_string("host", &self.host)?;

        // 驗證埠號
        validate_positive_number("port", usize::from(self.port), 1)?;

        tracing::debug!("✅ Server configuration validation passed");
        Ok(())
    }
}
