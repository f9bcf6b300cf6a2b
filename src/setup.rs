// src/setup.rs

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub(super) struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub json_logs: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let json_logs = std::env::var("LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        ServerConfig {
            host,
            port,
            json_logs,
        }
    }
}

pub(super) fn set_up_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
