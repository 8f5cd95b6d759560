use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup only on malformed values; the LLM key is checked per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<String>,
    pub limits: RequestLimits,
    /// Number of resume chunks forwarded to the LLM.
    pub top_k_chunks: usize,
}

/// Bounds enforced on every inbound request before any work is done.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLimits {
    pub max_file_size_bytes: usize,
    pub min_job_description_chars: usize,
    pub max_job_description_chars: usize,
    pub min_resume_text_chars: usize,
    pub max_resume_text_chars: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 2 * 1024 * 1024,
            min_job_description_chars: 10,
            max_job_description_chars: 10_000,
            min_resume_text_chars: 50,
            max_resume_text_chars: 15_000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            limits: RequestLimits::default(),
            top_k_chunks: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let base = Config::default();
        let defaults = base.limits.clone();

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            port: env_or("PORT", base.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(base.rust_log),
            allowed_origins: match std::env::var("ALLOWED_ORIGINS") {
                Ok(raw) => parse_origins(&raw),
                Err(_) => base.allowed_origins,
            },
            limits: RequestLimits {
                max_file_size_bytes: env_or("MAX_FILE_SIZE_BYTES", defaults.max_file_size_bytes)?,
                min_job_description_chars: env_or(
                    "MIN_JOB_DESCRIPTION_CHARS",
                    defaults.min_job_description_chars,
                )?,
                max_job_description_chars: env_or(
                    "MAX_JOB_DESCRIPTION_CHARS",
                    defaults.max_job_description_chars,
                )?,
                min_resume_text_chars: env_or(
                    "MIN_RESUME_TEXT_CHARS",
                    defaults.min_resume_text_chars,
                )?,
                max_resume_text_chars: env_or(
                    "MAX_RESUME_TEXT_CHARS",
                    defaults.max_resume_text_chars,
                )?,
            },
            top_k_chunks: env_or("TOP_K_CHUNKS", base.top_k_chunks)?,
        })
    }
}

/// Treats a set-but-blank variable the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
