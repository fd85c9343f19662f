use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_EXA_API_URL: &str = "https://api.exa.ai";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub exa_api_key: Option<String>,
    pub exa_api_url: String,
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
    pub request_timeout: Duration,
}

/// Both collaborator credentials, known to be present.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub exa_api_key: String,
    pub groq_api_key: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, process environment or not.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank credentials count as missing
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let exa_api_key = secret("EXA_API_KEY");
        let groq_api_key = secret("GROQ_API_KEY");

        // Load server configuration with defaults
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid request timeout: {}", e)))?,
            None => 30,
        };

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            exa_api_key,
            exa_api_url: lookup("EXA_API_URL").unwrap_or_else(|| DEFAULT_EXA_API_URL.to_string()),
            groq_api_key,
            groq_api_url: lookup("GROQ_API_URL").unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            groq_model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Checks that both credentials are configured.
    pub fn credentials(&self) -> Result<Credentials> {
        let exa_api_key = self
            .exa_api_key
            .clone()
            .ok_or_else(|| missing("EXA_API_KEY"))?;
        let groq_api_key = self
            .groq_api_key
            .clone()
            .ok_or_else(|| missing("GROQ_API_KEY"))?;

        Ok(Credentials {
            exa_api_key,
            groq_api_key,
        })
    }
}

fn missing(key: &str) -> AppError {
    AppError::ConfigError(format!("{} environment variable is not set", key))
}
