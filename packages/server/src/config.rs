//! Server configuration.
//!
//! Every flag can also be supplied through an environment variable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3500;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Origins allowed to open cross-origin connections outside production
pub static DEVELOPMENT_ORIGINS: [&str; 2] = ["http://localhost:5500", "http://127.0.0.1:5500"];

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

/// Command line / environment configuration for `roomcast-server`
#[derive(Debug, Clone, Parser)]
#[command(name = "roomcast-server", version, about = "Multi-room chat relay server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Deployment environment; cross-origin access is only allowed in development
    #[arg(long = "env", env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Directory served for every path outside the API
    #[arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Origins allowed by CORS, `None` when cross-origin access is disabled
    pub fn allowed_origins(&self) -> Option<&'static [&'static str]> {
        match self.environment {
            Environment::Development => Some(DEVELOPMENT_ORIGINS.as_slice()),
            Environment::Production => None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
