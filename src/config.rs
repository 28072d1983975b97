use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, process env in production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number (0-65535)")?,
            None => DEFAULT_PORT,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Config {
            service_host,
            service_port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
